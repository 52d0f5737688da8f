//! Static legend catalogs.
//!
//! Row order is significant: the intensity table is an ordinal scale and
//! the tsunami tables are ordered from nearest/lowest to farthest/highest.

use sismoview_seismic_models::{LegendEntry, LegendGrid};

/// Grid identifier used for intensity legends when the caller has none.
pub const DEFAULT_INTENSITY_GRID_ID: &str = "grid-intensity-demo";

/// Intensity scale 1 (very weak) through 8 (extreme).
pub const INTENSITY_LEGEND: [LegendEntry; 8] = [
    LegendEntry::new("1 (very weak)", "#4aa5ff"),
    LegendEntry::new("2 (weak)", "#7fb3ff"),
    LegendEntry::new("3 (light)", "#9de0ff"),
    LegendEntry::new("4 (moderate)", "#ffc266"),
    LegendEntry::new("5 (strong)", "#ff9f40"),
    LegendEntry::new("6 (very strong)", "#ff6b6b"),
    LegendEntry::new("7 (severe)", "#d64562"),
    LegendEntry::new("8 (extreme)", "#ad2e5c"),
];

/// Tsunami estimated-time-of-arrival bands.
pub const TSUNAMI_ETA_LEGEND: [LegendEntry; 4] = [
    LegendEntry::new("0–30 min", "#4aa5ff"),
    LegendEntry::new("30–60 min", "#7fb3ff"),
    LegendEntry::new("1–3 h", "#9de0ff"),
    LegendEntry::new(">3 h", "#ffc266"),
];

/// Tsunami relative wave height bands.
pub const TSUNAMI_HEIGHT_LEGEND: [LegendEntry; 3] = [
    LegendEntry::new("low", "#7fb3ff"),
    LegendEntry::new("medium", "#ff9f40"),
    LegendEntry::new("high", "#ff6b6b"),
];

/// The intensity legend tagged with `grid_id`, which is echoed unchanged.
#[must_use]
pub fn intensity_legend(grid_id: impl Into<String>) -> LegendGrid {
    LegendGrid {
        grid_id: grid_id.into(),
        legend: &INTENSITY_LEGEND,
    }
}

#[must_use]
pub const fn tsunami_eta_legend() -> &'static [LegendEntry] {
    &TSUNAMI_ETA_LEGEND
}

#[must_use]
pub const fn tsunami_height_legend() -> &'static [LegendEntry] {
    &TSUNAMI_HEIGHT_LEGEND
}
