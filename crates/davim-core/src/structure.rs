//! Structure trait and related types.
//!
//! A [`Structure`] represents a geometric object in the scene, such as a point
//! cloud or a surface mesh.

use std::any::Any;

use glam::Vec3;

use crate::error::{DavimError, Result};
use crate::quantity::Quantity;

/// A geometric object whose vertices can carry quantities.
pub trait Structure: Any + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the unique name of this structure.
    fn name(&self) -> &str;

    /// Returns the type name of this structure (e.g., "`PointCloud`", "`SurfaceMesh`").
    fn type_name(&self) -> &'static str;

    /// Returns the number of vertices; vertex quantities must match it.
    fn num_vertices(&self) -> usize;

    /// Returns the axis-aligned bounding box.
    ///
    /// Returns `None` if the structure has no vertices.
    fn bounding_box(&self) -> Option<(Vec3, Vec3)>;

    /// Returns a characteristic length scale for this structure.
    fn length_scale(&self) -> f32 {
        self.bounding_box()
            .map_or(1.0, |(min, max)| (max - min).length())
    }

    /// Returns whether this structure is currently visible.
    fn is_enabled(&self) -> bool;

    /// Sets the visibility of this structure.
    fn set_enabled(&mut self, enabled: bool);

    /// Returns this structure as a quantity holder, if it supports quantities.
    fn as_has_quantities(&self) -> Option<&dyn HasQuantities> {
        None
    }

    /// Mutable counterpart of [`Self::as_has_quantities`].
    fn as_has_quantities_mut(&mut self) -> Option<&mut dyn HasQuantities> {
        None
    }
}

/// A structure that can have quantities attached to it.
pub trait HasQuantities: Structure {
    /// Adds a quantity to this structure.
    ///
    /// Fails if a quantity with the same name exists or if the quantity's
    /// size does not match the vertex count.
    fn add_quantity(&mut self, quantity: Box<dyn Quantity>) -> Result<()>;

    /// Gets a quantity by name.
    fn get_quantity(&self, name: &str) -> Option<&dyn Quantity>;

    /// Gets a mutable quantity by name.
    fn get_quantity_mut(&mut self, name: &str) -> Option<&mut Box<dyn Quantity>>;

    /// Removes a quantity by name.
    fn remove_quantity(&mut self, name: &str) -> Option<Box<dyn Quantity>>;

    /// Returns all quantities attached to this structure.
    fn quantities(&self) -> &[Box<dyn Quantity>];

    /// Returns the number of quantities attached.
    fn num_quantities(&self) -> usize {
        self.quantities().len()
    }
}

/// Checks a new vertex quantity against an existing list.
///
/// Shared validation for [`HasQuantities::add_quantity`] implementations.
pub fn validate_vertex_quantity(
    structure_name: &str,
    num_vertices: usize,
    existing: &[Box<dyn Quantity>],
    quantity: &dyn Quantity,
) -> Result<()> {
    if existing.iter().any(|q| q.name() == quantity.name()) {
        return Err(DavimError::QuantityExists(
            quantity.name().to_string(),
            structure_name.to_string(),
        ));
    }
    if quantity.data_size() != num_vertices {
        return Err(DavimError::SizeMismatch {
            expected: num_vertices,
            actual: quantity.data_size(),
        });
    }
    Ok(())
}
