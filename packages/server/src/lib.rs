#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the sismoview seismic simulator.
//!
//! Serves P/S wave rings, per-city arrival times, the intensity and
//! tsunami legends, and a proxy of the USGS live earthquake feed. Every
//! computation is stateless; the only shared state is the handle to the
//! feed client and the bathymetry source.

pub mod config;
mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, error, middleware, web};
use sismoview_feed::{QuakeFeed, UsgsQuakeFeed};
use sismoview_seismic::bathymetry::{Bathymetry, MockBathymetry};
use sismoview_server_models::ApiError;

pub use config::{ConfigError, ServerConfig};

/// Shared application state.
pub struct AppState {
    /// Live earthquake source.
    pub feed: Arc<dyn QuakeFeed>,
    /// Ocean depth source for tsunami simulations.
    pub bathymetry: Arc<dyn Bathymetry>,
}

/// Registers every `/api` route.
///
/// Shared by [`run_server`] and the handler tests so both exercise the
/// same routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let body = ApiError::new(&err);
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        let body = ApiError::new(&err);
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    });

    cfg.app_data(json_config).app_data(query_config).service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/simulate/seismic", web::post().to(handlers::simulate_seismic))
            .route("/simulate/tsunami", web::post().to(handlers::simulate_tsunami))
            .route("/simulate/rings", web::get().to(handlers::rings))
            .route("/legend/intensity", web::get().to(handlers::intensity_legend))
            .route("/live/earthquakes", web::get().to(handlers::live_earthquakes)),
    );
}

/// Starts the sismoview API server.
///
/// Builds the USGS feed client, logs the startup banner, and serves until
/// the server is stopped. The caller initializes logging and provides the
/// async runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the feed client cannot be built,
/// the HTTP server fails to bind, or it encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let feed = UsgsQuakeFeed::new(config.feed_base_url.clone(), config.feed_timeout)
        .map_err(std::io::Error::other)?;

    let state = web::Data::new(AppState {
        feed: Arc::new(feed),
        bathymetry: Arc::new(MockBathymetry::default()),
    });

    log_banner(&config);

    let ServerConfig {
        bind_addr, port, ..
    } = config;

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}

fn log_banner(config: &ServerConfig) {
    let base = format!("http://{}:{}", config.bind_addr, config.port);

    log::info!("SismoView server v{}", env!("CARGO_PKG_VERSION"));
    log::info!("  Listening on:  {base}");
    log::info!("  Health check:  {base}/api/health");
    log::info!("  Seismic:       POST {base}/api/simulate/seismic");
    log::info!("  Tsunami:       POST {base}/api/simulate/tsunami");
    log::info!("  Live feed:     GET  {base}/api/live/earthquakes?window=day|week");
    log::info!(
        "  Feed source:   {} (timeout {}s)",
        config.feed_base_url,
        config.feed_timeout.as_secs()
    );
}
