//! Per-target P and S arrival times.

use sismoview_seismic_models::{Arrival, GeoPoint, Target, WaveKind};

use crate::{geo, wave};

/// Computes arrivals at each target from `epicenter`.
///
/// Emits two records per target (P then S) in input order, so `n` targets
/// yield exactly `2n` arrivals. Default-target substitution is the caller's
/// concern: an empty slice yields an empty result.
#[must_use]
pub fn compute_arrivals(epicenter: GeoPoint, targets: &[Target]) -> Vec<Arrival> {
    let mut out = Vec::with_capacity(targets.len() * WaveKind::all().len());

    for target in targets {
        let distance = geo::distance_km(epicenter, target.point);
        log::trace!("{}: {distance:.1} km from epicenter", target.label);

        for &kind in WaveKind::all() {
            out.push(Arrival {
                place: target.label.clone(),
                kind,
                minutes: wave::arrival_minutes(kind, distance),
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(label: &str, lat: f64, lon: f64) -> Target {
        Target::new(label, GeoPoint::new(lat, lon).unwrap())
    }

    fn origin() -> GeoPoint {
        GeoPoint::new(0.0, 0.0).unwrap()
    }

    #[test]
    fn empty_targets_yield_no_arrivals() {
        assert!(compute_arrivals(origin(), &[]).is_empty());
    }

    #[test]
    fn bogota_from_null_island() {
        let arrivals = compute_arrivals(origin(), &[target("Bogotá", 4.7110, -74.0721)]);
        assert_eq!(arrivals.len(), 2);

        let p = &arrivals[0];
        let s = &arrivals[1];
        assert_eq!(p.kind, WaveKind::Primary);
        assert_eq!(s.kind, WaveKind::Secondary);
        assert_eq!(p.place, "Bogotá");
        assert!((p.minutes - 22.9).abs() < 1.0, "P arrival {}", p.minutes);
        assert!((s.minutes - 39.2).abs() < 1.0, "S arrival {}", s.minutes);

        let distance = geo::distance_km(origin(), GeoPoint::new(4.7110, -74.0721).unwrap());
        assert!((distance - 8233.0).abs() < 50.0, "distance {distance}");
    }

    #[test]
    fn alternates_p_s_in_target_order() {
        let targets = [
            target("Lima", -12.0464, -77.0428),
            target("Quito", -0.1807, -78.4678),
            target("Santiago", -33.4489, -70.6693),
        ];
        let arrivals = compute_arrivals(origin(), &targets);
        assert_eq!(arrivals.len(), 6);

        for (i, pair) in arrivals.chunks(2).enumerate() {
            assert_eq!(pair[0].place, targets[i].label);
            assert_eq!(pair[1].place, targets[i].label);
            assert_eq!(pair[0].kind, WaveKind::Primary);
            assert_eq!(pair[1].kind, WaveKind::Secondary);
        }
    }

    #[test]
    fn distinct_targets_have_positive_arrivals() {
        let targets = [target("A", 10.0, 10.0), target("B", -45.0, 120.0)];
        assert!(
            compute_arrivals(origin(), &targets)
                .iter()
                .all(|a| a.minutes > 0.0)
        );
    }

    #[test]
    fn target_at_epicenter_arrives_at_zero() {
        let arrivals = compute_arrivals(origin(), &[target("Here", 0.0, 0.0)]);
        assert!(arrivals.iter().all(|a| a.minutes.abs() < 1e-9));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let targets = [target("Lima", -12.0464, -77.0428)];
        assert_eq!(
            compute_arrivals(origin(), &targets),
            compute_arrivals(origin(), &targets)
        );
    }
}
