use crate::{PointCloud, Result, Scene, Vec3};

impl Scene {
    /// Registers a point cloud.
    ///
    /// Fails if a structure with the same name already exists.
    pub fn register_point_cloud(&mut self, name: impl Into<String>, points: Vec<Vec3>) -> Result<()> {
        self.register(Box::new(PointCloud::new(name, points)))
    }

    /// Returns whether a point cloud with the given name exists.
    #[must_use]
    pub fn has_point_cloud(&self, name: &str) -> bool {
        self.ctx.registry.contains("PointCloud", name)
    }

    /// Executes a closure with mutable access to a registered point cloud.
    ///
    /// Returns `None` if the point cloud does not exist. The scene extents are
    /// recomputed afterwards, so the closure may move vertices.
    pub fn with_point_cloud<F, R>(&mut self, name: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut PointCloud) -> R,
    {
        let result = self
            .ctx
            .registry
            .get_mut("PointCloud", name)
            .and_then(|s| s.as_any_mut().downcast_mut::<PointCloud>())
            .map(f);
        if result.is_some() {
            self.ctx.update_extents();
        }
        result
    }

    /// Executes a closure with immutable access to a registered point cloud.
    ///
    /// Returns `None` if the point cloud does not exist.
    pub fn with_point_cloud_ref<F, R>(&self, name: &str, f: F) -> Option<R>
    where
        F: FnOnce(&PointCloud) -> R,
    {
        self.ctx
            .registry
            .get("PointCloud", name)
            .and_then(|s| s.as_any().downcast_ref::<PointCloud>())
            .map(f)
    }
}
