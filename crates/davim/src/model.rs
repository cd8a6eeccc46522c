//! Loading PLY models into a scene.

use std::path::Path;

use davim_structures::{load_ply, PlyModel};

use crate::{PointCloud, Result, Scene, SurfaceMesh};

impl Scene {
    /// Loads a PLY file and registers it under `name`.
    ///
    /// Files with faces become a [`SurfaceMesh`], files without become a
    /// [`PointCloud`]. When the vertices carry the scalar property named by
    /// [`Options::scalar_property`](crate::Options::scalar_property), it is
    /// added as a vertex scalar quantity of the same name.
    pub fn load_ply_model(&mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Result<()> {
        let model = load_ply(path, &self.options().scalar_property)?;
        self.register_ply_model(name, model)
    }

    /// Registers an already-parsed PLY model under `name`.
    pub fn register_ply_model(&mut self, name: impl Into<String>, model: PlyModel) -> Result<()> {
        let property = self.options().scalar_property.clone();
        let is_mesh = model.is_mesh();
        let PlyModel {
            vertices,
            faces,
            scalars,
        } = model;

        if is_mesh {
            let mut mesh = SurfaceMesh::new(name, vertices, faces)?;
            if let Some(values) = scalars {
                mesh.add_vertex_scalar_quantity(property, values)?;
            }
            self.register(Box::new(mesh))
        } else {
            let mut cloud = PointCloud::new(name, vertices);
            if let Some(values) = scalars {
                cloud.add_scalar_quantity(property, values)?;
            }
            self.register(Box::new(cloud))
        }
    }
}
