//! Scalar-field color mapping for davim-rs.
//!
//! This crate turns a per-vertex scalar field into a per-vertex color buffer:
//! - [`hsv_to_rgb`] converts hue/saturation/value triples to RGB
//! - [`ColorMapPolicy`] selects one of five scalar-to-color maps
//! - [`Colorizer`] and [`colorize`] compute the field's [`Domain`] and map
//!   every sample, producing a flat RGBA [`ColorBuffer`]
//!
//! Everything here is pure: no I/O, no global state.
//!
//! ```
//! use davim_colormap::{colorize, ColorMapPolicy, WhitePoint};
//!
//! let colors = colorize(&[0.0, 4.5, 9.0], ColorMapPolicy::Heatmap, WhitePoint::default())?;
//! assert_eq!(colors.len(), 3);
//! assert_eq!(colors.as_flat().len(), 12);
//! # Ok::<(), davim_colormap::ColorMapError>(())
//! ```

// Hue sector selection truncates floats to integers
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
// Documentation lints - error conditions are described in prose
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod colorize;
pub mod domain;
pub mod error;
pub mod hsv;
pub mod policy;

pub use colorize::{colorize, CancelToken, ColorBuffer, Colorizer, DEFAULT_PARALLEL_THRESHOLD};
pub use domain::Domain;
pub use error::{ColorMapError, Result};
pub use hsv::{hsv_to_rgb, Hsv};
pub use policy::{ColorMapPolicy, WhitePoint, NEUTRAL_COLOR, OUT_OF_DOMAIN_COLOR};
