// geometry.rs - Fixed triangle data and its de-interleaved GPU buffers

/// Interleaved vertex: position (x, y, z) and color (r, g, b)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// The triangle: bottom right red, bottom left green, top blue
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new([0.5, -0.5, 0.0], [1.0, 0.0, 0.0]),
    Vertex::new([-0.5, -0.5, 0.0], [0.0, 1.0, 0.0]),
    Vertex::new([0.0, 0.5, 0.0], [0.0, 0.0, 1.0]),
];

/// Components per attribute (vec3 for both position and color)
pub const COMPONENTS: usize = 3;

/// Parallel position and color arrays, one `COMPONENTS`-sized entry per vertex
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryBuffers {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl GeometryBuffers {
    /// Split interleaved vertices into position and color arrays
    pub fn deinterleave(vertices: &[Vertex]) -> Self {
        let positions = vertices.iter().flat_map(|v| v.position).collect();
        let colors = vertices.iter().flat_map(|v| v.color).collect();

        Self { positions, colors }
    }

    /// Buffers for the fixed triangle
    pub fn triangle() -> Self {
        Self::deinterleave(&TRIANGLE_VERTICES)
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / COMPONENTS) as u32
    }

    /// Vertex buffer layouts: slot 0 holds positions (location 0), slot 1 colors (location 1)
    pub fn buffer_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
        const POSITION: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
        const COLOR: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];

        let stride = (COMPONENTS * std::mem::size_of::<f32>()) as wgpu::BufferAddress;

        [
            wgpu::VertexBufferLayout {
                array_stride: stride,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &POSITION,
            },
            wgpu::VertexBufferLayout {
                array_stride: stride,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &COLOR,
            },
        ]
    }
}
