//! Ocean depth lookup.

use sismoview_seismic_models::GeoPoint;

/// Source of ocean depth at a location.
pub trait Bathymetry: Send + Sync {
    /// Depth of the sea floor below the surface at `point`, in meters.
    fn depth_meters(&self, point: GeoPoint) -> f64;
}

/// Flat-ocean bathymetry: the same depth everywhere.
#[derive(Debug, Clone, Copy)]
pub struct MockBathymetry {
    depth_m: f64,
}

impl MockBathymetry {
    /// Depth returned by [`MockBathymetry::default`].
    pub const DEFAULT_DEPTH_M: f64 = 4000.0;

    #[must_use]
    pub const fn with_depth(depth_m: f64) -> Self {
        Self { depth_m }
    }
}

impl Default for MockBathymetry {
    fn default() -> Self {
        Self::with_depth(Self::DEFAULT_DEPTH_M)
    }
}

impl Bathymetry for MockBathymetry {
    fn depth_meters(&self, _point: GeoPoint) -> f64 {
        self.depth_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_depth_ignores_location() {
        let bathy = MockBathymetry::default();
        for (lat, lon) in [(0.0, 0.0), (-60.0, 170.0), (38.3, 142.4)] {
            let depth = bathy.depth_meters(GeoPoint::new(lat, lon).unwrap());
            assert!((depth - 4000.0).abs() < f64::EPSILON);
        }
    }
}
