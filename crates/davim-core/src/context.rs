//! Scene context: registered structures, options and scene extents.

use glam::Vec3;

use crate::options::Options;
use crate::registry::Registry;

/// All state of one scene.
///
/// A context is an ordinary owned value; independent scenes each hold their
/// own and never observe each other's options.
pub struct Context {
    /// The structure registry.
    pub registry: Registry,

    /// Scene options.
    pub options: Options,

    /// Representative length scale for all registered structures.
    pub length_scale: f32,

    /// Axis-aligned bounding box for all registered structures.
    pub bounding_box: (Vec3, Vec3),
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Context {
    /// Creates an empty context with the given options.
    pub fn new(options: Options) -> Self {
        Self {
            registry: Registry::new(),
            options,
            length_scale: 1.0,
            bounding_box: (Vec3::ZERO, Vec3::ONE),
        }
    }

    /// Computes the center of the bounding box.
    pub fn center(&self) -> Vec3 {
        (self.bounding_box.0 + self.bounding_box.1) * 0.5
    }

    /// Updates the scene bounding box and length scale from all structures.
    pub fn update_extents(&mut self) {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        let mut has_extent = false;

        for structure in self.registry.iter() {
            if let Some((bb_min, bb_max)) = structure.bounding_box() {
                min = min.min(bb_min);
                max = max.max(bb_max);
                has_extent = true;
            }
        }

        if has_extent {
            self.bounding_box = (min, max);
            self.length_scale = (max - min).length();
        } else {
            self.bounding_box = (Vec3::ZERO, Vec3::ONE);
            self.length_scale = 1.0;
        }
    }
}
