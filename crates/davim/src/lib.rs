//! davim-rs: scalar-field color mapping for 3D point clouds and meshes.
//!
//! davim turns a per-vertex scalar field into per-vertex colors that a
//! renderer can upload directly. Five colormaps are available: rainbow,
//! blue-white-red (with an adjustable white point), heatmap, nonlinear and
//! discrete.
//!
//! # Quick Start
//!
//! ```
//! use davim::*;
//!
//! fn main() -> Result<()> {
//!     let mut scene = Scene::new();
//!
//!     let points = vec![
//!         Vec3::new(0.0, 0.0, 0.0),
//!         Vec3::new(1.0, 0.0, 0.0),
//!         Vec3::new(0.0, 1.0, 0.0),
//!     ];
//!     scene.register_point_cloud("my points", points)?;
//!     scene.add_vertex_scalar_quantity("my points", "height", vec![0.0, 0.5, 1.0])?;
//!
//!     scene.set_color_map(ColorMapPolicy::BlueWhiteRed);
//!     let colors = scene.vertex_colors("my points", "height")?;
//!     assert_eq!(colors.as_flat().len(), 12);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! davim uses a paradigm of **structures** and **quantities**:
//!
//! - A **structure** is a geometric object in the scene ([`PointCloud`], [`SurfaceMesh`])
//! - A **quantity** is per-vertex data on a structure (scalar field or colors)
//!
//! A [`Scene`] owns its structures and its [`Options`]; there is no
//! process-wide state, so independent scenes never see each other's colormap
//! selection.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod init;
mod model;
mod point_cloud;
mod scene;
mod surface_mesh;

// Re-export core types
pub use davim_core::{
    error::{DavimError, Result},
    options::Options,
    quantity::{Quantity, QuantityKind},
    registry::Registry,
    structure::{HasQuantities, Structure},
    Context, UVec3, Vec3, Vec4,
};

// Re-export colormap types
pub use davim_colormap::{
    colorize, hsv_to_rgb, CancelToken, ColorBuffer, ColorMapError, ColorMapPolicy, Colorizer,
    Domain, Hsv, WhitePoint, NEUTRAL_COLOR, OUT_OF_DOMAIN_COLOR,
};

// Re-export structures
pub use davim_structures::{
    load_ply, read_ply, PlyModel, PointCloud, SurfaceMesh, VertexColorQuantity,
    VertexScalarQuantity,
};

pub use init::init_logging;
pub use scene::Scene;
