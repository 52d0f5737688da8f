#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the sismoview seismic simulator.
//!
//! Configuration comes from `BIND_ADDR`, `PORT`, `USGS_FEED_BASE_URL` and
//! `FEED_TIMEOUT_SECS`; log levels from `RUST_LOG`.

use sismoview_server::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
    sismoview_server::run_server(config).await
}
