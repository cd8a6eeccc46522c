//! Vertex quantity implementations shared by all structures.

use std::any::Any;

use davim_colormap::{ColorBuffer, ColorMapPolicy, Domain};
use davim_core::quantity::{Quantity, QuantityKind, VertexQuantity};
use davim_core::{Options, Result};
use glam::Vec3;

/// A scalar field defined at structure vertices, colored through a colormap.
pub struct VertexScalarQuantity {
    name: String,
    structure_name: String,
    values: Vec<f32>,
    enabled: bool,
    color_map: Option<ColorMapPolicy>,
    data_range: Option<Domain>,
}

impl VertexScalarQuantity {
    /// Creates a new vertex scalar quantity.
    pub fn new(
        name: impl Into<String>,
        structure_name: impl Into<String>,
        values: Vec<f32>,
    ) -> Self {
        Self {
            name: name.into(),
            structure_name: structure_name.into(),
            values,
            enabled: true,
            color_map: None,
            data_range: None,
        }
    }

    /// Returns the scalar values.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Gets the colormap override, if any.
    #[must_use]
    pub fn color_map(&self) -> Option<ColorMapPolicy> {
        self.color_map
    }

    /// Colors this quantity with `policy` regardless of the scene options.
    pub fn set_color_map(&mut self, policy: ColorMapPolicy) -> &mut Self {
        self.color_map = Some(policy);
        self
    }

    /// Goes back to the scene's colormap.
    pub fn reset_color_map(&mut self) -> &mut Self {
        self.color_map = None;
        self
    }

    /// Gets the domain colors are mapped against: the override if set,
    /// otherwise the domain of the values.
    pub fn data_range(&self) -> Result<Domain> {
        match self.data_range {
            Some(range) => Ok(range),
            None => Ok(Domain::from_scalars(&self.values)?),
        }
    }

    /// Fixes the mapped domain. Values outside it get each colormap's
    /// out-of-domain treatment.
    pub fn set_data_range(&mut self, min: f32, max: f32) -> &mut Self {
        self.data_range = Some(Domain::new(min, max));
        self
    }

    /// Maps against the values' own domain again.
    pub fn reset_data_range(&mut self) -> &mut Self {
        self.data_range = None;
        self
    }

    /// Computes one opaque color per vertex.
    ///
    /// Uses the colormap override if set, otherwise `options.color_map`.
    pub fn compute_colors(&self, options: &Options) -> Result<ColorBuffer> {
        let colorizer = options.colorizer(self.color_map.unwrap_or(options.color_map));
        match self.data_range {
            Some(range) => Ok(colorizer.colorize_with_domain(&self.values, &range)),
            None => Ok(colorizer.colorize(&self.values)?),
        }
    }
}

impl Quantity for VertexScalarQuantity {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn structure_name(&self) -> &str {
        &self.structure_name
    }

    fn kind(&self) -> QuantityKind {
        QuantityKind::Scalar
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn data_size(&self) -> usize {
        self.values.len()
    }
}

impl VertexQuantity for VertexScalarQuantity {}

/// Explicit per-vertex RGB colors.
pub struct VertexColorQuantity {
    name: String,
    structure_name: String,
    colors: Vec<Vec3>,
    enabled: bool,
}

impl VertexColorQuantity {
    /// Creates a new vertex color quantity.
    pub fn new(
        name: impl Into<String>,
        structure_name: impl Into<String>,
        colors: Vec<Vec3>,
    ) -> Self {
        Self {
            name: name.into(),
            structure_name: structure_name.into(),
            colors,
            enabled: true,
        }
    }

    /// Returns the colors.
    #[must_use]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Returns the colors as opaque RGBA, clamped into [0, 1].
    #[must_use]
    pub fn color_buffer(&self) -> ColorBuffer {
        ColorBuffer::from_rgb(
            self.colors
                .iter()
                .map(|c| c.clamp(Vec3::ZERO, Vec3::ONE)),
        )
    }
}

impl Quantity for VertexColorQuantity {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn structure_name(&self) -> &str {
        &self.structure_name
    }

    fn kind(&self) -> QuantityKind {
        QuantityKind::Color
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn data_size(&self) -> usize {
        self.colors.len()
    }
}

impl VertexQuantity for VertexColorQuantity {}

/// Finds a quantity by name and downcasts it to `T`.
pub(crate) fn find_quantity<'a, T: Quantity>(
    quantities: &'a [Box<dyn Quantity>],
    name: &str,
) -> Option<&'a T> {
    quantities
        .iter()
        .find(|q| q.name() == name)
        .and_then(|q| q.as_any().downcast_ref::<T>())
}

/// Mutable counterpart of [`find_quantity`].
pub(crate) fn find_quantity_mut<'a, T: Quantity>(
    quantities: &'a mut [Box<dyn Quantity>],
    name: &str,
) -> Option<&'a mut T> {
    quantities
        .iter_mut()
        .find(|q| q.name() == name)
        .and_then(|q| q.as_any_mut().downcast_mut::<T>())
}

#[cfg(test)]
mod tests {
    use davim_colormap::{ColorMapError, WhitePoint};
    use davim_core::DavimError;
    use glam::Vec4;

    use super::*;

    #[test]
    fn test_scalar_quantity_uses_scene_color_map() {
        let q = VertexScalarQuantity::new("height", "mesh", vec![0.0, 3.0, 6.0, 9.0]);
        let options = Options::new().with_color_map(ColorMapPolicy::Heatmap);
        let colors = q.compute_colors(&options).unwrap();
        assert_eq!(colors.get(1), Some(Vec4::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(colors.get(2), Some(Vec4::new(1.0, 1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_scalar_quantity_color_map_override() {
        let mut q = VertexScalarQuantity::new("height", "mesh", vec![0.0, 10.0]);
        q.set_color_map(ColorMapPolicy::Discrete);
        let colors = q.compute_colors(&Options::default()).unwrap();
        assert_eq!(colors.get(0), Some(Vec4::new(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(colors.get(1), Some(Vec4::new(1.0, 0.0, 0.0, 1.0)));

        q.reset_color_map();
        assert_eq!(q.color_map(), None);
    }

    #[test]
    fn test_scalar_quantity_white_point_from_options() {
        let q = VertexScalarQuantity::new("d", "mesh", vec![0.0, 2.0, 10.0]);
        let options = Options::new()
            .with_color_map(ColorMapPolicy::BlueWhiteRed)
            .with_white_point(WhitePoint::new(20.0).unwrap());
        let colors = q.compute_colors(&options).unwrap();
        assert_eq!(colors.get(1), Some(Vec4::ONE));
    }

    #[test]
    fn test_scalar_quantity_data_range() {
        let mut q = VertexScalarQuantity::new("d", "mesh", vec![-1.0, 0.0, 1.0, 2.0]);
        assert_eq!(q.data_range().unwrap(), Domain::new(-1.0, 2.0));

        q.set_data_range(0.0, 1.0);
        assert_eq!(q.data_range().unwrap(), Domain::new(0.0, 1.0));
        let colors = q.compute_colors(&Options::default()).unwrap();
        // Rainbow marks values outside the fixed range with black.
        assert_eq!(colors.get(0), Some(Vec4::new(0.0, 0.0, 0.0, 1.0)));
        assert_eq!(colors.get(3), Some(Vec4::new(0.0, 0.0, 0.0, 1.0)));
        assert_eq!(colors.get(1), Some(Vec4::new(0.0, 0.0, 1.0, 1.0)));

        q.reset_data_range();
        assert_eq!(q.data_range().unwrap(), Domain::new(-1.0, 2.0));
    }

    #[test]
    fn test_scalar_quantity_empty() {
        let q = VertexScalarQuantity::new("d", "mesh", Vec::new());
        let err = q.compute_colors(&Options::default()).unwrap_err();
        assert!(matches!(err, DavimError::ColorMap(ColorMapError::EmptyDomain)));
    }

    #[test]
    fn test_color_quantity_buffer_is_clamped() {
        let q = VertexColorQuantity::new("c", "pc", vec![Vec3::new(2.0, -1.0, 0.5)]);
        assert_eq!(q.kind(), QuantityKind::Color);
        assert_eq!(q.color_buffer().as_flat(), &[1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_find_quantity_downcasts() {
        let quantities: Vec<Box<dyn Quantity>> = vec![
            Box::new(VertexScalarQuantity::new("s", "pc", vec![1.0])),
            Box::new(VertexColorQuantity::new("c", "pc", vec![Vec3::ONE])),
        ];
        assert!(find_quantity::<VertexScalarQuantity>(&quantities, "s").is_some());
        assert!(find_quantity::<VertexScalarQuantity>(&quantities, "c").is_none());
        assert!(find_quantity::<VertexColorQuantity>(&quantities, "c").is_some());
        assert!(find_quantity::<VertexColorQuantity>(&quantities, "x").is_none());
    }
}
