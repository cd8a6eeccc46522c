//! Configuration options for davim.

use std::fs;
use std::path::Path;

use davim_colormap::{ColorMapPolicy, Colorizer, WhitePoint, DEFAULT_PARALLEL_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Scene-wide configuration options.
///
/// Options are owned by the caller's scene and passed explicitly into every
/// colorization, so two scenes never share a colormap selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Colormap applied to vertex scalar quantities without an override.
    pub color_map: ColorMapPolicy,

    /// White point of the blue-white-red colormap, in percent of the domain.
    pub white_point: WhitePoint,

    /// Scalar fields at least this long are colorized in parallel.
    pub parallel_threshold: usize,

    /// Name of the PLY vertex property that carries the scalar field.
    pub scalar_property: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            color_map: ColorMapPolicy::Rainbow,
            white_point: WhitePoint::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            scalar_property: "scalar".to_string(),
        }
    }
}

impl Options {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the colormap.
    pub fn with_color_map(mut self, color_map: ColorMapPolicy) -> Self {
        self.color_map = color_map;
        self
    }

    /// Sets the blue-white-red white point.
    pub fn with_white_point(mut self, white_point: WhitePoint) -> Self {
        self.white_point = white_point;
        self
    }

    /// Sets the parallel colorization threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the PLY scalar property name.
    pub fn with_scalar_property(mut self, name: impl Into<String>) -> Self {
        self.scalar_property = name.into();
        self
    }

    /// Builds a colorizer for `color_map` using these options.
    pub fn colorizer(&self, color_map: ColorMapPolicy) -> Colorizer {
        Colorizer::new(color_map)
            .with_white_point(self.white_point)
            .with_parallel_threshold(self.parallel_threshold)
    }

    /// Reads options from a JSON file. Missing fields take their defaults.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let options = serde_json::from_str(&fs::read_to_string(path)?)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Writes options to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }
}
