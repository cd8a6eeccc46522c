//! Quantity trait and related types.
//!
//! A [`Quantity`] represents data associated with a structure, such as a
//! per-vertex scalar field or explicit per-vertex colors.

use std::any::Any;

/// The kind of quantity (for categorization).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    /// Scalar values (single float per element), colored through a colormap.
    Scalar,
    /// Color values (RGB per element).
    Color,
}

/// Data associated with a structure that can be visualized.
pub trait Quantity: Any + Send + Sync {
    /// Returns a reference to self as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns a mutable reference to self as `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Returns the name of this quantity.
    fn name(&self) -> &str;

    /// Returns the name of the parent structure.
    fn structure_name(&self) -> &str;

    /// Returns the kind of this quantity.
    fn kind(&self) -> QuantityKind;

    /// Returns whether this quantity is currently enabled/visible.
    fn is_enabled(&self) -> bool;

    /// Sets the enabled state of this quantity.
    fn set_enabled(&mut self, enabled: bool);

    /// Returns the number of data elements.
    fn data_size(&self) -> usize;
}

/// Marker trait for quantities defined on vertices.
pub trait VertexQuantity: Quantity {}
