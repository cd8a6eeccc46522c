use crate::{Result, Scene, SurfaceMesh, UVec3, Vec3};

impl Scene {
    /// Registers a triangle surface mesh.
    ///
    /// Fails if a structure with the same name already exists or a face
    /// refers to a missing vertex.
    pub fn register_surface_mesh(
        &mut self,
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        faces: Vec<UVec3>,
    ) -> Result<()> {
        let mesh = SurfaceMesh::new(name, vertices, faces)?;
        self.register(Box::new(mesh))
    }

    /// Returns whether a surface mesh with the given name exists.
    #[must_use]
    pub fn has_surface_mesh(&self, name: &str) -> bool {
        self.ctx.registry.contains("SurfaceMesh", name)
    }

    /// Executes a closure with mutable access to a registered surface mesh.
    ///
    /// Returns `None` if the mesh does not exist. The scene extents are
    /// recomputed afterwards, so the closure may move vertices.
    pub fn with_surface_mesh<F, R>(&mut self, name: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut SurfaceMesh) -> R,
    {
        let result = self
            .ctx
            .registry
            .get_mut("SurfaceMesh", name)
            .and_then(|s| s.as_any_mut().downcast_mut::<SurfaceMesh>())
            .map(f);
        if result.is_some() {
            self.ctx.update_extents();
        }
        result
    }

    /// Executes a closure with immutable access to a registered surface mesh.
    ///
    /// Returns `None` if the mesh does not exist.
    pub fn with_surface_mesh_ref<F, R>(&self, name: &str, f: F) -> Option<R>
    where
        F: FnOnce(&SurfaceMesh) -> R,
    {
        self.ctx
            .registry
            .get("SurfaceMesh", name)
            .and_then(|s| s.as_any().downcast_ref::<SurfaceMesh>())
            .map(f)
    }
}
