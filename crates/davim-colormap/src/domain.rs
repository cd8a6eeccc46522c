//! Scalar-field domain bounds.

use crate::error::{ColorMapError, Result};

/// The `(min, max)` bounds of a scalar field.
///
/// Invariant: `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: f32,
    max: f32,
}

impl Domain {
    /// Creates a domain from explicit bounds. Swapped bounds are reordered.
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Computes the domain of a scalar field in a single scan.
    ///
    /// Non-finite samples are skipped. Fails with [`ColorMapError::EmptyDomain`]
    /// when the field contains no finite value.
    pub fn from_scalars(values: &[f32]) -> Result<Self> {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut skipped = 0usize;

        for &v in values {
            if v.is_finite() {
                if v < min {
                    min = v;
                }
                if v > max {
                    max = v;
                }
            } else {
                skipped += 1;
            }
        }

        if min > max {
            return Err(ColorMapError::EmptyDomain);
        }
        if skipped > 0 {
            log::warn!("skipped {skipped} non-finite scalar values when computing domain");
        }

        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// `max - min`.
    ///
    /// Infinite for fields spanning most of the `f32` range; the mapping
    /// helpers below work in `f64` and stay finite.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Whether all samples share a single value (`max == min`).
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Maps `value` to its relative position `(value - min) / (max - min)`.
    ///
    /// Not clamped: values outside the domain map outside [0, 1]. `min` maps
    /// to exactly 0 and `max` to exactly 1.
    /// Callers must check [`Self::is_degenerate`] first.
    pub fn normalize(&self, value: f32) -> f32 {
        let min = f64::from(self.min);
        ((f64::from(value) - min) / (f64::from(self.max) - min)) as f32
    }

    /// Point at fraction `frac` of the way from `min` to `max`.
    ///
    /// Fractions 0 and 1 return exactly `min` and `max`; the result always
    /// lies within the domain.
    pub fn at_fraction(&self, frac: f32) -> f32 {
        if frac <= 0.0 {
            return self.min;
        }
        if frac >= 1.0 {
            return self.max;
        }
        let min = f64::from(self.min);
        let point = min + (f64::from(self.max) - min) * f64::from(frac);
        (point as f32).clamp(self.min, self.max)
    }

    /// Midpoint of the domain, as `f64` so it cannot overflow.
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }

    /// Whether `value` lies within `[min, max]`.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}
