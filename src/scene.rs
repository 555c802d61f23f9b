use glam::Mat4;

use crate::geometry::GeometryBuffers;
use crate::material::ShaderMaterial;

/// Handle to a mesh attached to a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(usize);

/// Drawable: immutable geometry plus the material that shades it
#[derive(Debug, Clone)]
pub struct Mesh {
    geometry: GeometryBuffers,
    pub material: ShaderMaterial,
    pub transform: Mat4,
}

impl Mesh {
    pub fn new(geometry: GeometryBuffers, material: ShaderMaterial) -> Self {
        Self {
            geometry,
            material,
            transform: Mat4::IDENTITY,
        }
    }

    pub fn geometry(&self) -> &GeometryBuffers {
        &self.geometry
    }
}

/// Scene graph root
#[derive(Debug, Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a mesh and return its handle
    pub fn add(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0)
    }

    pub fn mesh_mut(&mut self, id: MeshId) -> Option<&mut Mesh> {
        self.meshes.get_mut(id.0)
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> Mesh {
        Mesh::new(GeometryBuffers::triangle(), ShaderMaterial::pulsing())
    }

    #[test]
    fn test_new_scene_is_empty() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn test_add_returns_handle() {
        let mut scene = Scene::new();
        let first = scene.add(triangle_mesh());
        let second = scene.add(triangle_mesh());

        assert_ne!(first, second);
        assert_eq!(scene.len(), 2);
        assert!(scene.mesh(first).is_some());
    }

    #[test]
    fn test_mesh_mut_updates_material() {
        let mut scene = Scene::new();
        let id = scene.add(triangle_mesh());

        if let Some(mesh) = scene.mesh_mut(id) {
            mesh.material.set_opacity(0.5);
        }

        assert_eq!(scene.mesh(id).map(|m| m.material.opacity()), Some(0.5));
    }

    #[test]
    fn test_mesh_defaults_to_identity_transform() {
        assert_eq!(triangle_mesh().transform, Mat4::IDENTITY);
    }
}
