//! Point cloud structure.

use std::any::Any;

use davim_core::quantity::Quantity;
use davim_core::structure::{validate_vertex_quantity, HasQuantities, Structure};
use davim_core::{DavimError, Result};
use glam::Vec3;

use crate::quantities::{find_quantity, find_quantity_mut, VertexColorQuantity, VertexScalarQuantity};

/// A point cloud structure.
pub struct PointCloud {
    name: String,
    points: Vec<Vec3>,
    enabled: bool,
    quantities: Vec<Box<dyn Quantity>>,
}

impl PointCloud {
    /// Creates a new point cloud.
    pub fn new(name: impl Into<String>, points: Vec<Vec3>) -> Self {
        Self {
            name: name.into(),
            points,
            enabled: true,
            quantities: Vec::new(),
        }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Updates the point positions.
    ///
    /// The point count must stay the same while quantities are attached.
    pub fn update_points(&mut self, points: Vec<Vec3>) -> Result<()> {
        if !self.quantities.is_empty() && points.len() != self.points.len() {
            return Err(DavimError::SizeMismatch {
                expected: self.points.len(),
                actual: points.len(),
            });
        }
        self.points = points;
        Ok(())
    }

    /// Adds a scalar quantity to this point cloud.
    pub fn add_scalar_quantity(
        &mut self,
        name: impl Into<String>,
        values: Vec<f32>,
    ) -> Result<&mut Self> {
        let quantity = VertexScalarQuantity::new(name, self.name.clone(), values);
        self.add_quantity(Box::new(quantity))?;
        Ok(self)
    }

    /// Adds a color quantity to this point cloud.
    pub fn add_color_quantity(
        &mut self,
        name: impl Into<String>,
        colors: Vec<Vec3>,
    ) -> Result<&mut Self> {
        let quantity = VertexColorQuantity::new(name, self.name.clone(), colors);
        self.add_quantity(Box::new(quantity))?;
        Ok(self)
    }

    /// Gets a scalar quantity by name.
    #[must_use]
    pub fn scalar_quantity(&self, name: &str) -> Option<&VertexScalarQuantity> {
        find_quantity(&self.quantities, name)
    }

    /// Gets a scalar quantity by name for modification.
    pub fn scalar_quantity_mut(&mut self, name: &str) -> Option<&mut VertexScalarQuantity> {
        find_quantity_mut(&mut self.quantities, name)
    }

    /// Gets a color quantity by name.
    #[must_use]
    pub fn color_quantity(&self, name: &str) -> Option<&VertexColorQuantity> {
        find_quantity(&self.quantities, name)
    }
}

impl Structure for PointCloud {
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
        "PointCloud"
    }

    fn num_vertices(&self) -> usize {
        self.points.len()
    }

    fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        bounds(&self.points)
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

impl HasQuantities for PointCloud {
    fn add_quantity(&mut self, quantity: Box<dyn Quantity>) -> Result<()> {
        validate_vertex_quantity(
            &self.name,
            self.points.len(),
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

/// Axis-aligned bounds of a point set.
pub(crate) fn bounds(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    if points.is_empty() {
        return None;
    }

    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    for &p in points {
        min = min.min(p);
        max = max.max(p);
    }
    Some((min, max))
}
