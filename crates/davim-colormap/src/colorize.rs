//! Field colorization: a scalar field in, one RGBA color per sample out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use glam::{Vec3, Vec4};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::Domain;
use crate::error::{ColorMapError, Result};
use crate::policy::{ColorMapPolicy, WhitePoint};

/// Fields at least this long are mapped in parallel by default.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

/// Per-vertex RGBA colors, ready for upload as a vertex attribute buffer.
///
/// Alpha is always 1.0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorBuffer {
    colors: Vec<[f32; 4]>,
}

impl ColorBuffer {
    /// Builds an opaque color buffer from RGB colors.
    pub fn from_rgb(colors: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            colors: colors.into_iter().map(opaque).collect(),
        }
    }

    /// Number of colors (one per vertex).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the buffer holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`.
    pub fn get(&self, index: usize) -> Option<Vec4> {
        self.colors.get(index).map(|&c| Vec4::from_array(c))
    }

    /// Iterates over the colors.
    pub fn iter(&self) -> impl Iterator<Item = Vec4> + '_ {
        self.colors.iter().map(|&c| Vec4::from_array(c))
    }

    /// The colors as RGBA quadruples.
    pub fn as_rgba(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// The colors as a flat float array, four floats per vertex.
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Raw bytes of the flat float array.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Consumes the buffer, returning the flat float array.
    pub fn into_flat(self) -> Vec<f32> {
        self.colors.into_iter().flatten().collect()
    }
}

fn opaque(rgb: Vec3) -> [f32; 4] {
    rgb.extend(1.0).to_array()
}

/// Shared flag for stopping a chunked colorization between chunks.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token in the non-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Visible to every clone of this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Maps scalar fields to colors with a fixed policy and white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colorizer {
    /// The mapping policy.
    pub policy: ColorMapPolicy,
    /// White point for the blue-white-red policy.
    pub white_point: WhitePoint,
    /// Minimum field length for the parallel path.
    pub parallel_threshold: usize,
}

impl Default for Colorizer {
    fn default() -> Self {
        Self {
            policy: ColorMapPolicy::default(),
            white_point: WhitePoint::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Colorizer {
    /// Creates a colorizer for the given policy.
    pub fn new(policy: ColorMapPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Sets the white point.
    pub fn with_white_point(mut self, white_point: WhitePoint) -> Self {
        self.white_point = white_point;
        self
    }

    /// Sets the minimum field length for the parallel path.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Colors a scalar field against its own domain.
    ///
    /// The domain is recomputed on every call.
    pub fn colorize(&self, scalars: &[f32]) -> Result<ColorBuffer> {
        let domain = Domain::from_scalars(scalars)?;
        Ok(self.colorize_with_domain(scalars, &domain))
    }

    /// Colors a scalar field against a caller-supplied domain.
    ///
    /// Samples outside `domain` get each policy's out-of-domain treatment.
    pub fn colorize_with_domain(&self, scalars: &[f32], domain: &Domain) -> ColorBuffer {
        self.log_run(scalars.len(), domain);
        let mut colors = Vec::with_capacity(scalars.len());
        self.map_into(scalars, domain, &mut colors);
        ColorBuffer { colors }
    }

    /// Colors a scalar field in chunks, checking `cancel` before each chunk.
    ///
    /// Returns [`ColorMapError::Cancelled`] without partial output once
    /// cancellation is observed.
    pub fn colorize_cancellable(
        &self,
        scalars: &[f32],
        chunk_size: usize,
        cancel: &CancelToken,
    ) -> Result<ColorBuffer> {
        if chunk_size == 0 {
            return Err(ColorMapError::InvalidChunkSize);
        }
        let domain = Domain::from_scalars(scalars)?;
        self.log_run(scalars.len(), &domain);

        let mut colors = Vec::with_capacity(scalars.len());
        for (i, chunk) in scalars.chunks(chunk_size).enumerate() {
            if cancel.is_cancelled() {
                log::debug!("colorization cancelled before chunk {i}");
                return Err(ColorMapError::Cancelled);
            }
            self.map_into(chunk, &domain, &mut colors);
        }

        Ok(ColorBuffer { colors })
    }

    fn log_run(&self, len: usize, domain: &Domain) {
        log::debug!(
            "colorizing {len} scalars with '{}' over [{}, {}]",
            self.policy,
            domain.min(),
            domain.max()
        );
        if domain.is_degenerate() {
            log::warn!(
                "degenerate scalar domain [{0}, {0}]; '{1}' falls back to its neutral color",
                domain.min(),
                self.policy
            );
        }
    }

    /// Appends one color per sample to `out`, in order.
    fn map_into(&self, scalars: &[f32], domain: &Domain, out: &mut Vec<[f32; 4]>) {
        let map = |&value: &f32| opaque(self.policy.map(domain, value, self.white_point));

        #[cfg(feature = "parallel")]
        {
            if scalars.len() >= self.parallel_threshold {
                out.par_extend(scalars.par_iter().map(map));
                return;
            }
        }

        out.extend(scalars.iter().map(map));
    }
}

/// Colors a scalar field with `policy`, one opaque RGBA color per sample.
///
/// Fails with [`ColorMapError::EmptyDomain`] if the field has no finite value.
pub fn colorize(
    scalars: &[f32],
    policy: ColorMapPolicy,
    white_point: WhitePoint,
) -> Result<ColorBuffer> {
    Colorizer::new(policy)
        .with_white_point(white_point)
        .colorize(scalars)
}
