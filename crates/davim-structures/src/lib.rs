//! Structure implementations for davim-rs.
//!
//! This crate provides concrete implementations of geometric structures and
//! their vertex quantities:
//! - Point clouds
//! - Triangle surface meshes
//! - Vertex scalar quantities (colored through a colormap) and vertex colors
//! - PLY model loading

// Mesh code intentionally uses casts for indices and property values
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod ply;
pub mod point_cloud;
pub mod quantities;
pub mod surface_mesh;

pub use ply::{load_ply, read_ply, PlyModel};
pub use point_cloud::PointCloud;
pub use quantities::{VertexColorQuantity, VertexScalarQuantity};
pub use surface_mesh::SurfaceMesh;
