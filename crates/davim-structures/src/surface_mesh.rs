//! Triangle surface mesh structure.

use std::any::Any;

use davim_core::quantity::Quantity;
use davim_core::structure::{validate_vertex_quantity, HasQuantities, Structure};
use davim_core::{DavimError, Result};
use glam::{UVec3, Vec3};

use crate::point_cloud::bounds;
use crate::quantities::{find_quantity, find_quantity_mut, VertexColorQuantity, VertexScalarQuantity};

/// A triangle mesh whose vertices can carry scalar and color quantities.
pub struct SurfaceMesh {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<UVec3>,
    enabled: bool,
    quantities: Vec<Box<dyn Quantity>>,
}

impl SurfaceMesh {
    /// Creates a new surface mesh.
    ///
    /// Fails with [`DavimError::IndexOutOfBounds`] if a face refers to a
    /// missing vertex.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, faces: Vec<UVec3>) -> Result<Self> {
        check_faces(&faces, vertices.len())?;
        Ok(Self {
            name: name.into(),
            vertices,
            faces,
            enabled: true,
            quantities: Vec::new(),
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns the triangles.
    #[must_use]
    pub fn faces(&self) -> &[UVec3] {
        &self.faces
    }

    /// Returns the triangles as a flat index buffer, three indices per face.
    #[must_use]
    pub fn index_buffer(&self) -> Vec<u32> {
        self.faces.iter().flat_map(|f| f.to_array()).collect()
    }

    /// Updates the vertex positions.
    ///
    /// The vertex count must stay the same while quantities are attached, and
    /// the existing faces must remain valid.
    pub fn update_vertices(&mut self, vertices: Vec<Vec3>) -> Result<()> {
        if !self.quantities.is_empty() && vertices.len() != self.vertices.len() {
            return Err(DavimError::SizeMismatch {
                expected: self.vertices.len(),
                actual: vertices.len(),
            });
        }
        check_faces(&self.faces, vertices.len())?;
        self.vertices = vertices;
        Ok(())
    }

    /// Adds a vertex scalar quantity to this mesh.
    pub fn add_vertex_scalar_quantity(
        &mut self,
        name: impl Into<String>,
        values: Vec<f32>,
    ) -> Result<&mut Self> {
        let quantity = VertexScalarQuantity::new(name, self.name.clone(), values);
        self.add_quantity(Box::new(quantity))?;
        Ok(self)
    }

    /// Adds a vertex color quantity to this mesh.
    pub fn add_vertex_color_quantity(
        &mut self,
        name: impl Into<String>,
        colors: Vec<Vec3>,
    ) -> Result<&mut Self> {
        let quantity = VertexColorQuantity::new(name, self.name.clone(), colors);
        self.add_quantity(Box::new(quantity))?;
        Ok(self)
    }

    /// Gets a vertex scalar quantity by name.
    #[must_use]
    pub fn scalar_quantity(&self, name: &str) -> Option<&VertexScalarQuantity> {
        find_quantity(&self.quantities, name)
    }

    /// Gets a vertex scalar quantity by name for modification.
    pub fn scalar_quantity_mut(&mut self, name: &str) -> Option<&mut VertexScalarQuantity> {
        find_quantity_mut(&mut self.quantities, name)
    }

    /// Gets a vertex color quantity by name.
    #[must_use]
    pub fn color_quantity(&self, name: &str) -> Option<&VertexColorQuantity> {
        find_quantity(&self.quantities, name)
    }
}

fn check_faces(faces: &[UVec3], num_vertices: usize) -> Result<()> {
    for face in faces {
        for index in face.to_array() {
            if index as usize >= num_vertices {
                return Err(DavimError::IndexOutOfBounds {
                    index,
                    num_vertices,
                });
            }
        }
    }
    Ok(())
}

impl Structure for SurfaceMesh {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        "SurfaceMesh"
    }

    fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        bounds(&self.vertices)
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn as_has_quantities(&self) -> Option<&dyn HasQuantities> {
        Some(self)
    }

    fn as_has_quantities_mut(&mut self) -> Option<&mut dyn HasQuantities> {
        Some(self)
    }
}

impl HasQuantities for SurfaceMesh {
    fn add_quantity(&mut self, quantity: Box<dyn Quantity>) -> Result<()> {
        validate_vertex_quantity(
            &self.name,
            self.vertices.len(),
            &self.quantities,
            quantity.as_ref(),
        )?;
        self.quantities.push(quantity);
        Ok(())
    }

    fn get_quantity(&self, name: &str) -> Option<&dyn Quantity> {
        self.quantities
            .iter()
            .find(|q| q.name() == name)
            .map(|q| q.as_ref())
    }

    fn get_quantity_mut(&mut self, name: &str) -> Option<&mut Box<dyn Quantity>> {
        self.quantities.iter_mut().find(|q| q.name() == name)
    }

    fn remove_quantity(&mut self, name: &str) -> Option<Box<dyn Quantity>> {
        let idx = self.quantities.iter().position(|q| q.name() == name)?;
        Some(self.quantities.remove(idx))
    }

    fn quantities(&self) -> &[Box<dyn Quantity>] {
        &self.quantities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> SurfaceMesh {
        SurfaceMesh::new(
            "quad",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![UVec3::new(0, 1, 2), UVec3::new(0, 2, 3)],
        )
        .unwrap()
    }

    #[test]
    fn test_index_buffer() {
        let mesh = quad();
        assert_eq!(mesh.num_faces(), 2);
        assert_eq!(mesh.index_buffer(), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_face_index_out_of_bounds() {
        let result = SurfaceMesh::new("bad", vec![Vec3::ZERO; 3], vec![UVec3::new(0, 1, 3)]);
        assert!(matches!(
            result,
            Err(DavimError::IndexOutOfBounds {
                index: 3,
                num_vertices: 3
            })
        ));
    }

    #[test]
    fn test_update_vertices_checks_faces() {
        let mut mesh = quad();
        assert!(mesh.update_vertices(vec![Vec3::ZERO; 3]).is_err());
        assert!(mesh.update_vertices(vec![Vec3::ONE; 5]).is_ok());
        assert_eq!(mesh.bounding_box(), Some((Vec3::ONE, Vec3::ONE)));
    }

    #[test]
    fn test_vertex_quantities() {
        let mut mesh = quad();
        mesh.add_vertex_scalar_quantity("height", vec![0.0, 1.0, 2.0, 3.0])
            .unwrap();
        mesh.scalar_quantity_mut("height")
            .unwrap()
            .set_data_range(0.0, 2.0);

        let q = mesh.scalar_quantity("height").unwrap();
        assert_eq!(q.data_range().unwrap().max(), 2.0);
        assert_eq!(mesh.type_name(), "SurfaceMesh");
        assert!(mesh.as_has_quantities().is_some());

        assert!(mesh
            .add_vertex_color_quantity("rgb", vec![Vec3::ONE; 2])
            .is_err());
    }
}
