//! HTTP handler functions for the sismoview API.

use actix_web::{HttpResponse, web};
use sismoview_feed::FeedWindow;
use sismoview_seismic::models::{GeoPoint, Target};
use sismoview_seismic::{arrivals, legend, tsunami, wave};
use sismoview_server_models::{
    ApiError, ApiHealth, LegendQueryParams, LiveQueryParams, RingQueryParams, RingsByKind,
    SeismicRequest, SeismicResponse, TsunamiResponse,
};

use crate::AppState;

/// Elapsed time at which the seismic endpoint reports wave fronts.
const SEISMIC_RING_MINUTES: f64 = 10.0;

/// Label of the target used when a request omits `cities`.
const DEFAULT_TARGET_LABEL: &str = "Bogotá";

const DEFAULT_TARGET_POINT: GeoPoint = match GeoPoint::new(4.7110, -74.0721) {
    Ok(point) => point,
    Err(_) => panic!("default target coordinates must be finite"),
};

fn default_targets() -> Vec<Target> {
    vec![Target::new(DEFAULT_TARGET_LABEL, DEFAULT_TARGET_POINT)]
}

fn bad_request(message: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiError::new(message))
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/simulate/seismic`
///
/// Returns P/S rings at ten minutes, arrivals for each requested city
/// (Bogotá when `cities` is absent), and the intensity legend.
pub async fn simulate_seismic(body: web::Json<SeismicRequest>) -> HttpResponse {
    let scenario = match body.validate() {
        Ok(scenario) => scenario,
        Err(e) => {
            log::debug!("Rejected seismic request: {e}");
            return bad_request(e);
        }
    };

    log::debug!(
        "Seismic simulation at ({}, {}), depth {} km, magnitude {}",
        scenario.epicenter.latitude(),
        scenario.epicenter.longitude(),
        scenario.depth_km,
        scenario.magnitude
    );

    let targets = scenario.targets.unwrap_or_else(default_targets);

    HttpResponse::Ok().json(SeismicResponse {
        rings: wave::rings_at(SEISMIC_RING_MINUTES).into_iter().collect(),
        arrivals: arrivals::compute_arrivals(scenario.epicenter, &targets),
        intensity: legend::intensity_legend(legend::DEFAULT_INTENSITY_GRID_ID),
    })
}

/// `POST /api/simulate/tsunami`
///
/// Returns the ETA and relative-height legends for the event.
pub async fn simulate_tsunami(
    state: web::Data<AppState>,
    body: web::Json<SeismicRequest>,
) -> HttpResponse {
    let scenario = match body.validate() {
        Ok(scenario) => scenario,
        Err(e) => {
            log::debug!("Rejected tsunami request: {e}");
            return bad_request(e);
        }
    };

    let result = tsunami::simulate(state.bathymetry.as_ref(), scenario.epicenter);
    HttpResponse::Ok().json(TsunamiResponse::from(result))
}

/// `GET /api/simulate/rings`
///
/// Wave fronts at an arbitrary elapsed time (default ten minutes).
pub async fn rings(params: web::Query<RingQueryParams>) -> HttpResponse {
    let minutes = params.minutes.unwrap_or(SEISMIC_RING_MINUTES);
    if !minutes.is_finite() || minutes < 0.0 {
        return bad_request(format!("minutes must be a finite value >= 0, got {minutes}"));
    }

    let rings: RingsByKind = wave::rings_at(minutes).into_iter().collect();
    HttpResponse::Ok().json(rings)
}

/// `GET /api/legend/intensity`
pub async fn intensity_legend(params: web::Query<LegendQueryParams>) -> HttpResponse {
    let grid_id = params
        .into_inner()
        .grid_id
        .unwrap_or_else(|| legend::DEFAULT_INTENSITY_GRID_ID.to_string());

    HttpResponse::Ok().json(legend::intensity_legend(grid_id))
}

/// `GET /api/live/earthquakes`
///
/// Proxies the live feed. Any upstream failure yields an empty list.
pub async fn live_earthquakes(
    state: web::Data<AppState>,
    params: web::Query<LiveQueryParams>,
) -> HttpResponse {
    let window = FeedWindow::from_token(params.window.as_deref());
    let quakes = sismoview_feed::live_quakes_or_empty(state.feed.as_ref(), window).await;

    HttpResponse::Ok().json(quakes)
}
