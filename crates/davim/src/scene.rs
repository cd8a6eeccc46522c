//! The scene: registered structures plus the caller's colormap settings.

use davim_colormap::{ColorBuffer, ColorMapPolicy, WhitePoint};
use davim_core::{Context, DavimError, Options, Result, Structure, Vec3};
use davim_structures::{VertexColorQuantity, VertexScalarQuantity};

/// A set of structures colored with one colormap selection.
///
/// Every scene owns its options. Changing the colormap or white point of one
/// scene never affects another, and colors are recomputed from the current
/// options on every [`Scene::vertex_colors`] call.
#[derive(Default)]
pub struct Scene {
    pub(crate) ctx: Context,
}

impl Scene {
    /// Creates an empty scene with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scene with the given options.
    pub fn with_options(options: Options) -> Self {
        Self {
            ctx: Context::new(options),
        }
    }

    /// Returns the scene options.
    pub fn options(&self) -> &Options {
        &self.ctx.options
    }

    /// Replaces the scene options.
    pub fn set_options(&mut self, options: Options) {
        self.ctx.options = options;
    }

    /// Returns the colormap used for scalar quantities without an override.
    pub fn color_map(&self) -> ColorMapPolicy {
        self.ctx.options.color_map
    }

    /// Selects the colormap.
    pub fn set_color_map(&mut self, policy: ColorMapPolicy) {
        log::info!("color map set to '{policy}'");
        self.ctx.options.color_map = policy;
    }

    /// Selects the colormap by name (`"rainbow"`, `"blue-white-red"`,
    /// `"heatmap"`, `"nonlinear"` or `"discrete"`).
    ///
    /// An unknown name leaves the current selection unchanged.
    pub fn set_color_map_by_name(&mut self, name: &str) -> Result<()> {
        let policy = name.parse::<ColorMapPolicy>()?;
        self.set_color_map(policy);
        Ok(())
    }

    /// Returns the blue-white-red white point.
    pub fn white_point(&self) -> WhitePoint {
        self.ctx.options.white_point
    }

    /// Sets the blue-white-red white point, in percent of the domain.
    ///
    /// A value outside [0, 100] leaves the current white point unchanged.
    pub fn set_white_point(&mut self, percent: f32) -> Result<()> {
        let white_point = WhitePoint::new(percent)?;
        log::info!("blue-white-red white point set to {percent}%");
        self.ctx.options.white_point = white_point;
        Ok(())
    }

    /// Colors a bare scalar field with the scene's current settings.
    pub fn colorize(&self, values: &[f32]) -> Result<ColorBuffer> {
        let options = &self.ctx.options;
        Ok(options.colorizer(options.color_map).colorize(values)?)
    }

    /// Returns whether a structure with the given name exists.
    pub fn has_structure(&self, name: &str) -> bool {
        self.ctx.registry.contains_name(name)
    }

    /// Returns the number of registered structures.
    pub fn num_structures(&self) -> usize {
        self.ctx.registry.len()
    }

    /// Returns the names of all registered structures, sorted.
    pub fn structure_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .ctx
            .registry
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Removes a structure by name. Returns whether it existed.
    pub fn remove_structure(&mut self, name: &str) -> bool {
        let removed = self.ctx.registry.remove(name).is_some();
        if removed {
            self.ctx.update_extents();
        }
        removed
    }

    /// Removes all structures.
    pub fn remove_all_structures(&mut self) {
        self.ctx.registry.clear();
        self.ctx.update_extents();
    }

    /// Axis-aligned bounding box of all structures.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        self.ctx.bounding_box
    }

    /// Center of the scene bounding box.
    pub fn center(&self) -> Vec3 {
        self.ctx.center()
    }

    /// Characteristic length of the scene (bounding box diagonal).
    pub fn length_scale(&self) -> f32 {
        self.ctx.length_scale
    }

    pub(crate) fn register(&mut self, structure: Box<dyn Structure>) -> Result<()> {
        self.ctx.registry.register(structure)?;
        self.ctx.update_extents();
        Ok(())
    }

    /// Adds a vertex scalar quantity to any registered structure.
    pub fn add_vertex_scalar_quantity(
        &mut self,
        structure: &str,
        name: impl Into<String>,
        values: Vec<f32>,
    ) -> Result<()> {
        let quantity = VertexScalarQuantity::new(name, structure, values);
        self.structure_mut(structure)?
            .as_has_quantities_mut()
            .ok_or_else(|| DavimError::StructureNotFound(structure.to_string()))?
            .add_quantity(Box::new(quantity))
    }

    /// Adds a vertex color quantity to any registered structure.
    pub fn add_vertex_color_quantity(
        &mut self,
        structure: &str,
        name: impl Into<String>,
        colors: Vec<Vec3>,
    ) -> Result<()> {
        let quantity = VertexColorQuantity::new(name, structure, colors);
        self.structure_mut(structure)?
            .as_has_quantities_mut()
            .ok_or_else(|| DavimError::StructureNotFound(structure.to_string()))?
            .add_quantity(Box::new(quantity))
    }

    /// Executes a closure with mutable access to a vertex scalar quantity,
    /// e.g. to set its colormap override or display range.
    pub fn with_scalar_quantity<F, R>(&mut self, structure: &str, quantity: &str, f: F) -> Result<R>
    where
        F: FnOnce(&mut VertexScalarQuantity) -> R,
    {
        let holder = self
            .structure_mut(structure)?
            .as_has_quantities_mut()
            .ok_or_else(|| DavimError::StructureNotFound(structure.to_string()))?;
        holder
            .get_quantity_mut(quantity)
            .and_then(|q| q.as_any_mut().downcast_mut::<VertexScalarQuantity>())
            .map(f)
            .ok_or_else(|| {
                DavimError::QuantityNotFound(quantity.to_string(), structure.to_string())
            })
    }

    /// Computes the per-vertex colors of a quantity with the current options.
    ///
    /// Scalar quantities go through their colormap; color quantities are
    /// returned as stored.
    pub fn vertex_colors(&self, structure: &str, quantity: &str) -> Result<ColorBuffer> {
        let not_found =
            || DavimError::QuantityNotFound(quantity.to_string(), structure.to_string());

        let q = self
            .ctx
            .registry
            .find(structure)
            .ok_or_else(|| DavimError::StructureNotFound(structure.to_string()))?
            .as_has_quantities()
            .and_then(|h| h.get_quantity(quantity))
            .ok_or_else(not_found)?;

        if let Some(scalar) = q.as_any().downcast_ref::<VertexScalarQuantity>() {
            scalar.compute_colors(&self.ctx.options)
        } else if let Some(color) = q.as_any().downcast_ref::<VertexColorQuantity>() {
            Ok(color.color_buffer())
        } else {
            Err(not_found())
        }
    }

    fn structure_mut(&mut self, name: &str) -> Result<&mut Box<dyn Structure>> {
        self.ctx
            .registry
            .find_mut(name)
            .ok_or_else(|| DavimError::StructureNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use davim_colormap::ColorMapError;

    use super::*;
    use crate::Vec4;

    #[test]
    fn test_scene_defaults() {
        let scene = Scene::new();
        assert_eq!(scene.color_map(), ColorMapPolicy::Rainbow);
        assert_eq!(scene.white_point().percent(), 50.0);
        assert_eq!(scene.num_structures(), 0);
    }

    #[test]
    fn test_set_color_map_by_name() {
        let mut scene = Scene::new();
        scene.set_color_map_by_name("heatmap").unwrap();
        assert_eq!(scene.color_map(), ColorMapPolicy::Heatmap);

        let err = scene.set_color_map_by_name("jet").unwrap_err();
        assert!(matches!(
            err,
            DavimError::ColorMap(ColorMapError::InvalidPolicy(name)) if name == "jet"
        ));
        assert_eq!(scene.color_map(), ColorMapPolicy::Heatmap);
    }

    #[test]
    fn test_set_white_point() {
        let mut scene = Scene::new();
        scene.set_white_point(25.0).unwrap();
        assert_eq!(scene.white_point().percent(), 25.0);
        assert!(scene.set_white_point(150.0).is_err());
        assert_eq!(scene.white_point().percent(), 25.0);
    }

    #[test]
    fn test_colorize_bare_field() {
        let mut scene = Scene::new();
        scene.set_color_map(ColorMapPolicy::Discrete);
        let colors = scene.colorize(&[0.0, 1.0]).unwrap();
        assert_eq!(colors.get(0), Some(Vec4::new(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(colors.get(1), Some(Vec4::new(1.0, 0.0, 0.0, 1.0)));
        assert!(scene.colorize(&[]).is_err());
    }

    #[test]
    fn test_missing_structure_and_quantity() {
        let mut scene = Scene::new();
        assert!(matches!(
            scene.vertex_colors("nope", "q"),
            Err(DavimError::StructureNotFound(_))
        ));
        assert!(matches!(
            scene.add_vertex_scalar_quantity("nope", "q", vec![]),
            Err(DavimError::StructureNotFound(_))
        ));

        scene.register_point_cloud("pc", vec![Vec3::ZERO]).unwrap();
        assert!(matches!(
            scene.vertex_colors("pc", "q"),
            Err(DavimError::QuantityNotFound(_, _))
        ));
        assert!(matches!(
            scene.with_scalar_quantity("pc", "q", |_| ()),
            Err(DavimError::QuantityNotFound(_, _))
        ));
    }
}
