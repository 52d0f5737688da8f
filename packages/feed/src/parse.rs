//! `GeoJSON` feed body parsing.
//!
//! Only the fields the API exposes are deserialized; everything else in
//! the USGS property bag is ignored.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use sismoview_seismic_models::Quake;

use crate::FeedError;

#[derive(Debug, Deserialize)]
struct FeedDocument {
    features: Vec<FeedFeature>,
}

#[derive(Debug, Deserialize)]
struct FeedFeature {
    id: String,
    properties: FeedProperties,
    geometry: FeedGeometry,
}

#[derive(Debug, Deserialize)]
struct FeedProperties {
    mag: Option<f64>,
    /// Origin time, epoch milliseconds.
    time: i64,
    place: Option<String>,
}

/// Point geometry: `[lon, lat, depth_km]`.
#[derive(Debug, Deserialize)]
struct FeedGeometry {
    coordinates: Vec<f64>,
}

/// Parses a feed body into quakes, in feed order.
///
/// Strict: a single unusable feature fails the whole body. A null `mag`
/// is read as `0.0` and a null `place` as the empty string.
///
/// # Errors
///
/// Returns [`FeedError::Json`] if the body is not a feature collection and
/// [`FeedError::Malformed`] if a feature lacks a depth coordinate or has an
/// unrepresentable timestamp.
pub fn parse_feed(body: &str) -> Result<Vec<Quake>, FeedError> {
    let document: FeedDocument = serde_json::from_str(body)?;

    document
        .features
        .into_iter()
        .map(to_quake)
        .collect()
}

fn to_quake(feature: FeedFeature) -> Result<Quake, FeedError> {
    let FeedFeature {
        id,
        properties,
        geometry,
    } = feature;

    let [lon, lat, depth_km] = match geometry.coordinates.as_slice() {
        [lon, lat, depth, ..] => [*lon, *lat, *depth],
        other => {
            return Err(FeedError::Malformed {
                id,
                message: format!("expected [lon, lat, depth], got {} values", other.len()),
            });
        }
    };

    let Some(time) = DateTime::<Utc>::from_timestamp_millis(properties.time) else {
        return Err(FeedError::Malformed {
            id,
            message: format!("timestamp {} out of range", properties.time),
        });
    };

    Ok(Quake {
        id,
        time_utc: time.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        lat,
        lon,
        depth_km,
        magnitude: properties.mag.unwrap_or(0.0),
        place: properties.place.unwrap_or_default(),
    })
}
