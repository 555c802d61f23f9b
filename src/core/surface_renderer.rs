use std::sync::Arc;

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;
use wgpu::{BindGroup, Buffer, Device, RenderPipeline, Surface, SurfaceConfiguration};
use winit::window::Window;

use super::gpu_context::GpuContext;
use crate::camera::OrthographicCamera;
use crate::geometry::GeometryBuffers;
use crate::scene::{Mesh, Scene};
use crate::settings::RenderSettings;
use crate::traits::{CanvasSize, SceneRenderer};

/// GPU-side copy of one mesh: uploaded once, only the opacity uniform changes afterwards
struct GpuMesh {
    pipeline: RenderPipeline,
    position_buffer: Buffer,
    color_buffer: Buffer,
    _camera_buffer: Buffer,
    material_buffer: Buffer,
    bind_group: BindGroup,
    vertex_count: u32,
}

/// Renders a scene into a window surface of fixed size
pub struct SurfaceRenderer {
    gpu: GpuContext,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    clear_color: wgpu::Color,
    meshes: Vec<GpuMesh>,
}

impl SurfaceRenderer {
    /// Create a renderer for a window, blocking until the device is ready
    pub fn new(window: Arc<Window>, settings: &RenderSettings) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create surface for window")?;
        let gpu = pollster::block_on(GpuContext::new_with_surface(&instance, &surface))?;

        let surface_config = Self::create_surface_config(&surface, gpu.adapter(), settings.size)?;
        surface.configure(gpu.device(), &surface_config);

        log::info!(
            "surface configured: {}x{} {:?}",
            surface_config.width,
            surface_config.height,
            surface_config.format
        );

        Ok(Self {
            gpu,
            surface,
            surface_config,
            clear_color: settings.clear_color,
            meshes: Vec::new(),
        })
    }

    /// Configure the surface again at its fixed size (after `Lost`/`Outdated`)
    pub fn reconfigure(&mut self) {
        self.surface.configure(self.gpu.device(), &self.surface_config);
    }

    /// Pick a surface format that passes colors through unconverted
    fn create_surface_config(
        surface: &Surface,
        adapter: &wgpu::Adapter,
        size: CanvasSize,
    ) -> Result<SurfaceConfiguration> {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no supported formats")?;

        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        Ok(SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    /// Upload meshes attached since the last frame
    fn sync_meshes(&mut self, scene: &Scene, camera: &OrthographicCamera) {
        for mesh in &scene.meshes()[self.meshes.len()..] {
            let gpu_mesh = Self::upload_mesh(
                self.gpu.device(),
                self.surface_config.format,
                mesh,
                camera,
            );
            self.meshes.push(gpu_mesh);
        }
    }

    fn upload_mesh(
        device: &Device,
        format: wgpu::TextureFormat,
        mesh: &Mesh,
        camera: &OrthographicCamera,
    ) -> GpuMesh {
        let geometry = mesh.geometry();

        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Position Buffer"),
            contents: bytemuck::cast_slice(geometry.positions()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let color_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Color Buffer"),
            contents: bytemuck::cast_slice(geometry.colors()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera.to_uniform(mesh.transform)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let material_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Material Buffer"),
            contents: bytemuck::cast_slice(&[*mesh.material.uniform()]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Mesh Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Mesh Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: material_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline = Self::create_render_pipeline(device, &bind_group_layout, format, mesh);

        GpuMesh {
            pipeline,
            position_buffer,
            color_buffer,
            _camera_buffer: camera_buffer,
            material_buffer,
            bind_group,
            vertex_count: geometry.vertex_count(),
        }
    }

    fn create_render_pipeline(
        device: &Device,
        bind_group_layout: &wgpu::BindGroupLayout,
        format: wgpu::TextureFormat,
        mesh: &Mesh,
    ) -> RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(mesh.material.shader_source().into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Pipeline Layout"),
            bind_group_layouts: &[bind_group_layout],
            push_constant_ranges: &[],
        });

        let buffers = GeometryBuffers::buffer_layouts();

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mesh Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &buffers,
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(mesh.material.blend_state()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }
}

impl SceneRenderer for SurfaceRenderer {
    fn render(
        &mut self,
        scene: &Scene,
        camera: &OrthographicCamera,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        self.sync_meshes(scene, camera);

        for (mesh, gpu_mesh) in scene.meshes().iter().zip(&self.meshes) {
            self.gpu.queue().write_buffer(
                &gpu_mesh.material_buffer,
                0,
                bytemuck::cast_slice(&[*mesh.material.uniform()]),
            );
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for gpu_mesh in &self.meshes {
                render_pass.set_pipeline(&gpu_mesh.pipeline);
                render_pass.set_bind_group(0, &gpu_mesh.bind_group, &[]);
                render_pass.set_vertex_buffer(0, gpu_mesh.position_buffer.slice(..));
                render_pass.set_vertex_buffer(1, gpu_mesh.color_buffer.slice(..));
                render_pass.draw(0..gpu_mesh.vertex_count, 0..1);
            }
        }

        self.gpu.queue().submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }
}
