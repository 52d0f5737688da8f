//! Constant-velocity P/S wave model.
//!
//! Velocities are fixed scalars, not derived from any crustal model.

use sismoview_seismic_models::{RingSegment, WaveKind};

/// P-wave velocity in km/s.
pub const P_WAVE_VELOCITY_KM_S: f64 = 6.0;

/// S-wave velocity in km/s.
pub const S_WAVE_VELOCITY_KM_S: f64 = 3.5;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Velocity of `kind` in km/s.
#[must_use]
pub const fn velocity_km_s(kind: WaveKind) -> f64 {
    match kind {
        WaveKind::Primary => P_WAVE_VELOCITY_KM_S,
        WaveKind::Secondary => S_WAVE_VELOCITY_KM_S,
    }
}

/// Velocity of `kind` in km/min.
#[must_use]
pub fn velocity_km_min(kind: WaveKind) -> f64 {
    velocity_km_s(kind) * SECONDS_PER_MINUTE
}

/// Radius reached by a `kind` front after `elapsed_minutes`.
///
/// Negative input is not rejected here and produces a negative radius.
#[must_use]
pub fn ring_radius_km(kind: WaveKind, elapsed_minutes: f64) -> f64 {
    velocity_km_min(kind) * elapsed_minutes
}

/// Minutes for a `kind` front to travel `distance_km`.
#[must_use]
pub fn arrival_minutes(kind: WaveKind, distance_km: f64) -> f64 {
    distance_km / velocity_km_min(kind)
}

/// Both fronts at the same elapsed time, P first.
#[must_use]
pub fn rings_at(elapsed_minutes: f64) -> Vec<RingSegment> {
    WaveKind::all()
        .iter()
        .map(|&kind| RingSegment {
            kind,
            minutes: elapsed_minutes,
            radius_km: ring_radius_km(kind, elapsed_minutes),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p_radius_is_360_per_minute() {
        for t in [0.0, 1.0, 2.5, 10.0, 120.0] {
            assert!((ring_radius_km(WaveKind::Primary, t) - 360.0 * t).abs() < 1e-9);
        }
    }

    #[test]
    fn s_radius_is_210_per_minute() {
        for t in [0.0, 1.0, 2.5, 10.0, 120.0] {
            assert!((ring_radius_km(WaveKind::Secondary, t) - 210.0 * t).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_distance_arrives_immediately() {
        assert!(arrival_minutes(WaveKind::Primary, 0.0).abs() < f64::EPSILON);
        assert!(arrival_minutes(WaveKind::Secondary, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn s_arrives_after_p() {
        let d = 1000.0;
        assert!(arrival_minutes(WaveKind::Secondary, d) > arrival_minutes(WaveKind::Primary, d));
    }

    #[test]
    fn rings_at_returns_p_then_s() {
        let rings = rings_at(10.0);
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0].kind, WaveKind::Primary);
        assert!((rings[0].radius_km - 3600.0).abs() < 1e-9);
        assert_eq!(rings[1].kind, WaveKind::Secondary);
        assert!((rings[1].radius_km - 2100.0).abs() < 1e-9);
        assert!(rings.iter().all(|r| (r.minutes - 10.0).abs() < f64::EPSILON));
    }
}
