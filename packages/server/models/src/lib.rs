#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the sismoview server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the seismic value types to allow independent evolution of the API
//! contract, and they own all request validation: the computation crates
//! assume already-validated input.

use serde::{Deserialize, Serialize};
use sismoview_seismic_models::{
    Arrival, GeoPoint, InvalidCoordinateError, LegendGrid, RingSegment, Target, TsunamiResult,
    WaveKind,
};
use thiserror::Error;

/// Smallest accepted magnitude.
pub const MIN_MAGNITUDE: f64 = 0.0;

/// Largest accepted magnitude.
pub const MAX_MAGNITUDE: f64 = 10.0;

/// Errors raised while validating a request body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestValidationError {
    /// A required field was absent or null.
    #[error("{0} is required")]
    Missing(&'static str),

    /// A depth was negative or not finite.
    #[error("{field} must be a finite value >= 0, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A value fell outside its permitted range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// The epicenter coordinates were not finite.
    #[error("epicenter: {0}")]
    Epicenter(#[from] InvalidCoordinateError),

    /// A city's coordinates were not finite.
    #[error("city {name}: {source}")]
    City {
        /// The city's name.
        name: String,
        /// Underlying coordinate error.
        source: InvalidCoordinateError,
    },
}

/// A named location supplied by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityParam {
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl TryFrom<&CityParam> for Target {
    type Error = RequestValidationError;

    fn try_from(city: &CityParam) -> Result<Self, Self::Error> {
        let point =
            GeoPoint::new(city.lat, city.lon).map_err(|source| RequestValidationError::City {
                name: city.name.clone(),
                source,
            })?;
        Ok(Self::new(city.name.clone(), point))
    }
}

/// Body of the seismic and tsunami simulation endpoints.
///
/// Every field is optional at the wire level so that a missing value is
/// reported by name instead of as a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeismicRequest {
    /// Epicenter latitude.
    pub lat: Option<f64>,
    /// Epicenter longitude.
    pub lon: Option<f64>,
    /// Hypocenter depth in kilometres.
    pub depth_km: Option<f64>,
    /// Event magnitude (0-10). Validated but not used by any formula.
    pub magnitude: Option<f64>,
    /// Locations to compute arrivals for.
    pub cities: Option<Vec<CityParam>>,
}

/// A validated simulation request.
#[derive(Debug, Clone, PartialEq)]
pub struct SeismicScenario {
    /// Epicenter.
    pub epicenter: GeoPoint,
    /// Hypocenter depth in kilometres (>= 0).
    pub depth_km: f64,
    /// Magnitude (0-10).
    pub magnitude: f64,
    /// Requested targets, `None` if the client sent no `cities` field.
    pub targets: Option<Vec<Target>>,
}

impl SeismicRequest {
    /// Checks required fields and ranges.
    ///
    /// # Errors
    ///
    /// Returns the first [`RequestValidationError`] encountered, checking
    /// fields in declaration order.
    pub fn validate(&self) -> Result<SeismicScenario, RequestValidationError> {
        let lat = self.lat.ok_or(RequestValidationError::Missing("lat"))?;
        let lon = self.lon.ok_or(RequestValidationError::Missing("lon"))?;
        let depth_km = self
            .depth_km
            .ok_or(RequestValidationError::Missing("depthKm"))?;
        let magnitude = self
            .magnitude
            .ok_or(RequestValidationError::Missing("magnitude"))?;

        let epicenter = GeoPoint::new(lat, lon)?;

        if !depth_km.is_finite() || depth_km < 0.0 {
            return Err(RequestValidationError::Negative {
                field: "depthKm",
                value: depth_km,
            });
        }

        if !(MIN_MAGNITUDE..=MAX_MAGNITUDE).contains(&magnitude) {
            return Err(RequestValidationError::OutOfRange {
                field: "magnitude",
                value: magnitude,
                min: MIN_MAGNITUDE,
                max: MAX_MAGNITUDE,
            });
        }

        let targets = self
            .cities
            .as_deref()
            .map(|cities| cities.iter().map(Target::try_from).collect())
            .transpose()?;

        Ok(SeismicScenario {
            epicenter,
            depth_km,
            magnitude,
            targets,
        })
    }
}

/// Ring segments grouped by wave kind: `{"P": [...], "S": [...]}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RingsByKind {
    /// P-wave segments.
    #[serde(rename = "P")]
    pub p: Vec<RingSegment>,
    /// S-wave segments.
    #[serde(rename = "S")]
    pub s: Vec<RingSegment>,
}

impl FromIterator<RingSegment> for RingsByKind {
    fn from_iter<I: IntoIterator<Item = RingSegment>>(iter: I) -> Self {
        let mut rings = Self::default();
        for segment in iter {
            match segment.kind {
                WaveKind::Primary => rings.p.push(segment),
                WaveKind::Secondary => rings.s.push(segment),
            }
        }
        rings
    }
}

/// Response from the seismic simulation endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeismicResponse {
    /// Wave fronts at the fixed elapsed time.
    pub rings: RingsByKind,
    /// P and S arrivals per target, in request order.
    pub arrivals: Vec<Arrival>,
    /// Intensity legend.
    pub intensity: LegendGrid,
}

/// Response from the tsunami simulation endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsunamiResponse {
    /// ETA legend.
    pub eta: LegendGrid,
    /// Relative height legend.
    pub relative_height: LegendGrid,
}

impl From<TsunamiResult> for TsunamiResponse {
    fn from(result: TsunamiResult) -> Self {
        Self {
            eta: LegendGrid {
                grid_id: result.grid_id.clone(),
                legend: result.eta_legend,
            },
            relative_height: LegendGrid {
                grid_id: result.grid_id,
                legend: result.height_legend,
            },
        }
    }
}

/// Query parameters for the rings endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingQueryParams {
    /// Elapsed minutes since origin time.
    pub minutes: Option<f64>,
}

/// Query parameters for the intensity legend endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendQueryParams {
    /// Grid identifier to echo back.
    pub grid_id: Option<String>,
}

/// Query parameters for the live earthquakes endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveQueryParams {
    /// `day` or `week`.
    pub window: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Error body returned with 4xx/5xx responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
}

impl ApiError {
    #[must_use]
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SeismicRequest {
        SeismicRequest {
            lat: Some(-33.45),
            lon: Some(-70.66),
            depth_km: Some(30.0),
            magnitude: Some(7.1),
            cities: None,
        }
    }

    #[test]
    fn valid_request_without_cities() {
        let scenario = request().validate().unwrap();
        assert!((scenario.epicenter.latitude() - -33.45).abs() < f64::EPSILON);
        assert!(scenario.targets.is_none());
    }

    #[test]
    fn empty_cities_stay_empty() {
        let scenario = SeismicRequest {
            cities: Some(Vec::new()),
            ..request()
        }
        .validate()
        .unwrap();
        assert_eq!(scenario.targets, Some(Vec::new()));
    }

    #[test]
    fn cities_keep_order() {
        let scenario = SeismicRequest {
            cities: Some(vec![
                CityParam {
                    name: "Lima".to_string(),
                    lat: -12.05,
                    lon: -77.04,
                },
                CityParam {
                    name: "Quito".to_string(),
                    lat: -0.18,
                    lon: -78.47,
                },
            ]),
            ..request()
        }
        .validate()
        .unwrap();
        let labels: Vec<_> = scenario
            .targets
            .unwrap()
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, ["Lima", "Quito"]);
    }

    #[test]
    fn reports_missing_fields_by_wire_name() {
        let err = SeismicRequest {
            depth_km: None,
            ..request()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, RequestValidationError::Missing("depthKm"));
        assert_eq!(err.to_string(), "depthKm is required");
    }

    #[test]
    fn rejects_negative_depth() {
        let err = SeismicRequest {
            depth_km: Some(-1.0),
            ..request()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, RequestValidationError::Negative { field: "depthKm", .. }));
    }

    #[test]
    fn magnitude_bounds_are_inclusive() {
        for m in [0.0, 10.0] {
            assert!(
                SeismicRequest {
                    magnitude: Some(m),
                    ..request()
                }
                .validate()
                .is_ok()
            );
        }
        for m in [-0.1, 10.1] {
            assert!(matches!(
                SeismicRequest {
                    magnitude: Some(m),
                    ..request()
                }
                .validate(),
                Err(RequestValidationError::OutOfRange { field: "magnitude", .. })
            ));
        }
    }

    #[test]
    fn deserializes_camel_case_body() {
        let body = r#"{"lat": 1.5, "lon": 2.5, "depthKm": 10, "magnitude": 6,
                       "cities": [{"name": "Bogotá", "lat": 4.711, "lon": -74.0721}]}"#;
        let req: SeismicRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.depth_km, Some(10.0));
        assert_eq!(req.cities.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn rings_group_by_kind() {
        let rings: RingsByKind = [
            RingSegment {
                kind: WaveKind::Primary,
                minutes: 10.0,
                radius_km: 3600.0,
            },
            RingSegment {
                kind: WaveKind::Secondary,
                minutes: 10.0,
                radius_km: 2100.0,
            },
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_value(&rings).unwrap();
        assert_eq!(json["P"][0]["radiusKm"], 3600.0);
        assert_eq!(json["S"][0]["radiusKm"], 2100.0);
    }

    #[test]
    fn tsunami_response_shares_grid_id() {
        let response = TsunamiResponse::from(TsunamiResult {
            grid_id: "g".to_string(),
            eta_legend: &[],
            height_legend: &[],
            ocean_depth_m: 4000.0,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["eta"]["gridId"], "g");
        assert_eq!(json["relativeHeight"]["gridId"], "g");
    }
}
