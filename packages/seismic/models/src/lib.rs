#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Seismic value types shared across the sismoview workspace.
//!
//! Every type here is an immutable value object built fresh for a single
//! computation and discarded once serialized. Nothing is persisted.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Error returned when a coordinate is `NaN` or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid coordinate ({latitude}, {longitude}): latitude and longitude must be finite")]
pub struct InvalidCoordinateError {
    /// The latitude that was provided.
    pub latitude: f64,
    /// The longitude that was provided.
    pub longitude: f64,
}

/// A latitude/longitude pair in degrees.
///
/// Only finiteness is enforced. Out-of-range values (e.g. latitude 95) are
/// accepted and flow through the haversine formula unchanged; there is no
/// wraparound normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Creates a point from degrees.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinateError`] if either component is `NaN` or
    /// infinite.
    pub const fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinateError> {
        if latitude.is_finite() && longitude.is_finite() {
            Ok(Self {
                lat: latitude,
                lon: longitude,
            })
        } else {
            Err(InvalidCoordinateError {
                latitude,
                longitude,
            })
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(self) -> f64 {
        self.lon
    }
}

/// Body wave kind. Serialized as `"P"` / `"S"`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum WaveKind {
    /// Primary (compressional) wave
    #[serde(rename = "P")]
    #[strum(serialize = "P")]
    Primary,
    /// Secondary (shear) wave
    #[serde(rename = "S")]
    #[strum(serialize = "S")]
    Secondary,
}

impl WaveKind {
    /// Returns both wave kinds, P first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Primary, Self::Secondary]
    }
}

/// The front of one wave kind after a given elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingSegment {
    /// Wave kind.
    #[serde(rename = "type")]
    pub kind: WaveKind,
    /// Elapsed minutes since origin time.
    pub minutes: f64,
    /// Radius of the front in kilometres.
    pub radius_km: f64,
}

/// A labelled location for which arrivals are computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// Display label (usually a city name).
    pub label: String,
    /// Location of the target.
    pub point: GeoPoint,
}

impl Target {
    #[must_use]
    pub fn new(label: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            label: label.into(),
            point,
        }
    }
}

/// Arrival of one wave kind at one target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrival {
    /// Target label.
    pub place: String,
    /// Wave kind.
    #[serde(rename = "type")]
    pub kind: WaveKind,
    /// Minutes after origin time.
    pub minutes: f64,
}

/// One `(label, color)` row of a categorical legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    /// Human-readable category label.
    pub label: &'static str,
    /// `#RRGGBB` color.
    pub color_hex: &'static str,
}

impl LegendEntry {
    #[must_use]
    pub const fn new(label: &'static str, color_hex: &'static str) -> Self {
        Self { label, color_hex }
    }
}

/// A legend tagged with the grid identifier it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendGrid {
    /// Opaque grid identifier, echoed unchanged.
    pub grid_id: String,
    /// Ordered legend rows.
    pub legend: &'static [LegendEntry],
}

/// Output of a tsunami simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct TsunamiResult {
    /// Grid identifier shared by both legends.
    pub grid_id: String,
    /// Estimated time of arrival bands.
    pub eta_legend: &'static [LegendEntry],
    /// Relative wave height bands.
    pub height_legend: &'static [LegendEntry],
    /// Ocean depth at the epicenter reported by the bathymetry source.
    pub ocean_depth_m: f64,
}

/// An earthquake reported by the live feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quake {
    /// Feed event identifier.
    pub id: String,
    /// Origin time, RFC 3339 UTC.
    pub time_utc: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Hypocenter depth in kilometres.
    pub depth_km: f64,
    /// Reported magnitude.
    pub magnitude: f64,
    /// Free-text location description.
    pub place: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_finite_coordinates() {
        let p = GeoPoint::new(4.711, -74.0721).unwrap();
        assert!((p.latitude() - 4.711).abs() < f64::EPSILON);
        assert!((p.longitude() - -74.0721).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_out_of_range_latitude() {
        assert!(GeoPoint::new(95.0, 200.0).is_ok());
    }

    #[test]
    fn rejects_nan_and_infinite() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
        assert!(GeoPoint::new(f64::NEG_INFINITY, f64::NAN).is_err());
    }

    #[test]
    fn wave_kind_string_forms() {
        assert_eq!(WaveKind::Primary.to_string(), "P");
        assert_eq!("S".parse::<WaveKind>().unwrap(), WaveKind::Secondary);
        assert_eq!(
            serde_json::to_string(&WaveKind::Primary).unwrap(),
            "\"P\""
        );
    }

    #[test]
    fn arrival_serializes_with_type_key() {
        let arrival = Arrival {
            place: "Lima".to_string(),
            kind: WaveKind::Secondary,
            minutes: 1.5,
        };
        let json = serde_json::to_value(&arrival).unwrap();
        assert_eq!(json["place"], "Lima");
        assert_eq!(json["type"], "S");
        assert_eq!(json["minutes"], 1.5);
    }

    #[test]
    fn ring_segment_uses_camel_case() {
        let ring = RingSegment {
            kind: WaveKind::Primary,
            minutes: 10.0,
            radius_km: 3600.0,
        };
        let json = serde_json::to_value(ring).unwrap();
        assert_eq!(json["type"], "P");
        assert_eq!(json["radiusKm"], 3600.0);
    }
}
