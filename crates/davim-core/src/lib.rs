//! Core abstractions for davim-rs.
//!
//! This crate provides the fundamental traits and types used throughout davim-rs:
//! - [`Structure`] trait for geometric objects (meshes, point clouds)
//! - [`Quantity`] trait for per-vertex data (scalar fields, colors)
//! - The structure [`Registry`] and the per-scene [`Context`]
//! - Configuration [`Options`], including the colormap selection

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod context;
pub mod error;
pub mod options;
pub mod quantity;
pub mod registry;
pub mod structure;

pub use context::Context;
pub use error::{DavimError, Result};
pub use options::Options;
pub use quantity::{Quantity, QuantityKind, VertexQuantity};
pub use registry::Registry;
pub use structure::{validate_vertex_quantity, HasQuantities, Structure};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3, Vec4};
