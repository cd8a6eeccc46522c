//! Error types for davim-rs.

use davim_colormap::ColorMapError;
use thiserror::Error;

/// The main error type for davim-rs operations.
#[derive(Error, Debug)]
pub enum DavimError {
    /// Color mapping failed (unknown policy, empty field, bad white point, ...).
    #[error(transparent)]
    ColorMap(#[from] ColorMapError),

    /// A structure with the given name already exists.
    #[error("structure '{0}' already exists")]
    StructureExists(String),

    /// A structure with the given name was not found.
    #[error("structure '{0}' not found")]
    StructureNotFound(String),

    /// A quantity with the given name already exists.
    #[error("quantity '{0}' already exists on structure '{1}'")]
    QuantityExists(String, String),

    /// A quantity with the given name was not found.
    #[error("quantity '{0}' not found on structure '{1}'")]
    QuantityNotFound(String, String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A face refers to a vertex that does not exist.
    #[error("vertex index {index} out of bounds for {num_vertices} vertices")]
    IndexOutOfBounds { index: u32, num_vertices: usize },

    /// Malformed or unsupported PLY content.
    #[error("PLY error: {0}")]
    PlyError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for davim-rs operations.
pub type Result<T> = std::result::Result<T, DavimError>;
