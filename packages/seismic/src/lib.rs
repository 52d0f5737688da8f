#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Seismic computation engine.
//!
//! Pure, stateless functions: haversine distance on a fixed-radius sphere,
//! constant-velocity P/S wave fronts, per-target arrival times, and the
//! static legend catalogs used by the display layer. Nothing here retains
//! state across calls, so every function is safe to call from any worker.

pub mod arrivals;
pub mod bathymetry;
pub mod geo;
pub mod legend;
pub mod tsunami;
pub mod wave;

pub use sismoview_seismic_models as models;
