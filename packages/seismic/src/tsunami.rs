//! Tsunami legend assembly.
//!
//! There is no propagation model: the result is the fixed ETA and height
//! legends plus the ocean depth reported at the epicenter.

use sismoview_seismic_models::{GeoPoint, TsunamiResult};

use crate::bathymetry::Bathymetry;
use crate::legend;

/// Grid identifier attached to both tsunami legends.
pub const TSUNAMI_GRID_ID: &str = "grid-tsunami-demo";

/// Builds the tsunami result for an event at `epicenter`.
#[must_use]
pub fn simulate(bathymetry: &dyn Bathymetry, epicenter: GeoPoint) -> TsunamiResult {
    let ocean_depth_m = bathymetry.depth_meters(epicenter);
    log::debug!(
        "Ocean depth at ({}, {}): {ocean_depth_m} m",
        epicenter.latitude(),
        epicenter.longitude()
    );

    TsunamiResult {
        grid_id: TSUNAMI_GRID_ID.to_string(),
        eta_legend: legend::tsunami_eta_legend(),
        height_legend: legend::tsunami_height_legend(),
        ocean_depth_m,
    }
}
