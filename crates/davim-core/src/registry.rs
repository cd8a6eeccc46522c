//! Structure registry for managing registered structures.

use std::collections::HashMap;

use crate::error::{DavimError, Result};
use crate::structure::Structure;

/// Registry for managing all structures in a scene.
///
/// Structures are organized by type name and then by instance name. Instance
/// names are unique across all types, so a structure can be found by name
/// alone.
#[derive(Default)]
pub struct Registry {
    /// Map from type name -> (instance name -> structure)
    structures: HashMap<&'static str, HashMap<String, Box<dyn Structure>>>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a structure with the registry.
    ///
    /// Returns an error if a structure with the same name already exists.
    pub fn register(&mut self, structure: Box<dyn Structure>) -> Result<()> {
        let name = structure.name().to_string();
        if self.contains_name(&name) {
            return Err(DavimError::StructureExists(name));
        }

        self.structures
            .entry(structure.type_name())
            .or_default()
            .insert(name, structure);
        Ok(())
    }

    /// Gets a reference to a structure by type and name.
    pub fn get(&self, type_name: &str, name: &str) -> Option<&dyn Structure> {
        self.structures
            .get(type_name)
            .and_then(|m| m.get(name))
            .map(|s| s.as_ref())
    }

    /// Gets a mutable reference to a structure by type and name.
    pub fn get_mut(&mut self, type_name: &str, name: &str) -> Option<&mut Box<dyn Structure>> {
        self.structures.get_mut(type_name)?.get_mut(name)
    }

    /// Finds a structure by name, whatever its type.
    pub fn find(&self, name: &str) -> Option<&dyn Structure> {
        self.structures
            .values()
            .find_map(|m| m.get(name))
            .map(|s| s.as_ref())
    }

    /// Finds a structure by name for mutation, whatever its type.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Box<dyn Structure>> {
        self.structures.values_mut().find_map(|m| m.get_mut(name))
    }

    /// Checks if a structure with the given type and name exists.
    pub fn contains(&self, type_name: &str, name: &str) -> bool {
        self.structures
            .get(type_name)
            .is_some_and(|m| m.contains_key(name))
    }

    /// Checks if a structure with the given name exists under any type.
    pub fn contains_name(&self, name: &str) -> bool {
        self.structures.values().any(|m| m.contains_key(name))
    }

    /// Removes a structure by name.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Structure>> {
        self.structures.values_mut().find_map(|m| m.remove(name))
    }

    /// Removes all structures from the registry.
    pub fn clear(&mut self) {
        self.structures.clear();
    }

    /// Returns an iterator over all structures.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Structure> {
        self.structures
            .values()
            .flat_map(HashMap::values)
            .map(|s| s.as_ref())
    }

    /// Returns the total number of registered structures.
    pub fn len(&self) -> usize {
        self.structures.values().map(HashMap::len).sum()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.structures.values().all(HashMap::is_empty)
    }

    /// Returns all structures of a given type.
    pub fn get_all_of_type(&self, type_name: &str) -> impl Iterator<Item = &dyn Structure> {
        self.structures
            .get(type_name)
            .into_iter()
            .flat_map(HashMap::values)
            .map(|s| s.as_ref())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::any::Any;

    use glam::Vec3;

    use super::*;

    /// Minimal structure for exercising the registry and context.
    pub(crate) struct Dummy {
        pub name: String,
        pub type_name: &'static str,
        pub points: Vec<Vec3>,
    }

    impl Dummy {
        pub(crate) fn boxed(name: &str, type_name: &'static str, points: Vec<Vec3>) -> Box<Self> {
            Box::new(Self {
                name: name.to_string(),
                type_name,
                points,
            })
        }
    }

    impl Structure for Dummy {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
        fn name(&self) -> &str {
            &self.name
        }
        fn type_name(&self) -> &'static str {
            self.type_name
        }
        fn num_vertices(&self) -> usize {
            self.points.len()
        }
        fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
            let first = *self.points.first()?;
            Some(
                self.points
                    .iter()
                    .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
            )
        }
        fn is_enabled(&self) -> bool {
            true
        }
        fn set_enabled(&mut self, _enabled: bool) {}
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = Registry::new();
        registry
            .register(Dummy::boxed("a", "PointCloud", vec![Vec3::ZERO]))
            .unwrap();
        registry
            .register(Dummy::boxed("b", "SurfaceMesh", vec![Vec3::ONE]))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("PointCloud", "a"));
        assert!(!registry.contains("SurfaceMesh", "a"));
        assert_eq!(registry.find("b").map(|s| s.type_name()), Some("SurfaceMesh"));
        assert!(registry.get("PointCloud", "a").is_some());
        assert_eq!(registry.get_all_of_type("SurfaceMesh").count(), 1);
    }

    #[test]
    fn test_names_unique_across_types() {
        let mut registry = Registry::new();
        registry
            .register(Dummy::boxed("model", "PointCloud", vec![]))
            .unwrap();
        let err = registry
            .register(Dummy::boxed("model", "SurfaceMesh", vec![]))
            .unwrap_err();
        assert!(matches!(err, DavimError::StructureExists(name) if name == "model"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut registry = Registry::new();
        registry.register(Dummy::boxed("a", "PointCloud", vec![])).unwrap();
        registry.register(Dummy::boxed("b", "PointCloud", vec![])).unwrap();

        assert!(registry.remove("a").is_some());
        assert!(registry.remove("a").is_none());
        assert_eq!(registry.len(), 1);

        registry.clear();
        assert!(registry.is_empty());
    }
}
