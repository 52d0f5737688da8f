//! Great-circle distance.

use sismoview_seismic_models::GeoPoint;

/// Radius of the spherical Earth model in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometres.
///
/// Symmetric, zero for identical points, and total over finite inputs:
/// out-of-range latitudes are not rejected and yield whatever the formula
/// produces. `h` is clamped to `[0, 1]` so rounding never pushes `sqrt` or
/// `asin` outside their domains.
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude().to_radians();
    let phi2 = b.latitude().to_radians();
    let d_phi = (b.latitude() - a.latitude()).to_radians();
    let d_lambda = (b.longitude() - a.longitude()).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.clamp(0.0, 1.0).sqrt().asin()
}
