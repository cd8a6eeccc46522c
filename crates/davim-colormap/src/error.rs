//! Error types for scalar-field color mapping.

use thiserror::Error;

/// Errors that can occur while mapping a scalar field to colors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorMapError {
    /// The color map name is not one of the recognized policies.
    #[error("invalid color map '{0}' (expected one of: rainbow, blue-white-red, heatmap, nonlinear, discrete)")]
    InvalidPolicy(String),

    /// The scalar field has no (finite) values, so its domain is undefined.
    #[error("scalar field is empty - at least one finite value is required")]
    EmptyDomain,

    /// The white point percentage is outside [0, 100].
    #[error("white point {0} is outside [0, 100]")]
    InvalidWhitePoint(f32),

    /// Chunked colorization was requested with a zero chunk size.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// A cancellable colorization was stopped before completion.
    #[error("colorization cancelled")]
    Cancelled,
}

/// A specialized Result type for color mapping operations.
pub type Result<T> = std::result::Result<T, ColorMapError>;
