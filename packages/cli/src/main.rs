#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the sismoview toolchain.
//!
//! ```text
//! sismoview arrivals --lat 0 --lon 0 [--city "Lima:-12.05:-77.04"]...
//! sismoview rings [--minutes 10]
//! sismoview quakes [--window day|week]
//! sismoview serve
//! ```
//!
//! Unlike the HTTP endpoint, `quakes` reports feed failures instead of
//! printing an empty list.

use clap::{Parser, Subcommand};
use sismoview_feed::{FeedWindow, QuakeFeed as _, UsgsQuakeFeed};
use sismoview_seismic::models::{GeoPoint, Target};
use sismoview_seismic::{arrivals, wave};
use sismoview_server::ServerConfig;

#[derive(Parser)]
#[command(name = "sismoview", about = "Seismic wave propagation toolkit")]
struct Cli {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute P and S arrival times at one or more cities
    Arrivals {
        /// Epicenter latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Epicenter longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Target as `NAME:LAT:LON` (repeatable, defaults to Bogotá)
        #[arg(long = "city", value_parser = parse_city)]
        cities: Vec<Target>,
    },
    /// Show P and S wave front radii after an elapsed time
    Rings {
        /// Elapsed minutes since origin time
        #[arg(long, default_value_t = 10.0)]
        minutes: f64,
    },
    /// Fetch the live earthquake feed
    Quakes {
        /// `day` or `week`
        #[arg(long, default_value = "day")]
        window: String,
    },
    /// Start the HTTP API server
    Serve,
}

/// Parses `NAME:LAT:LON`. The name may itself contain colons.
fn parse_city(s: &str) -> Result<Target, String> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(lon), Some(lat), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected NAME:LAT:LON, got {s:?}"));
    };

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("invalid latitude {lat:?}: {e}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("invalid longitude {lon:?}: {e}"))?;
    let point = GeoPoint::new(lat, lon).map_err(|e| e.to_string())?;

    Ok(Target::new(name.trim(), point))
}

fn default_targets() -> Result<Vec<Target>, String> {
    Ok(vec![parse_city("Bogotá:4.7110:-74.0721")?])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Arrivals { lat, lon, cities } => {
            let epicenter = GeoPoint::new(lat, lon)?;
            let targets = if cities.is_empty() {
                default_targets()?
            } else {
                cities
            };

            let arrivals = arrivals::compute_arrivals(epicenter, &targets);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&arrivals)?);
            } else {
                for arrival in &arrivals {
                    println!(
                        "{:<24} {}  {:>8.2} min",
                        arrival.place, arrival.kind, arrival.minutes
                    );
                }
            }
        }
        Commands::Rings { minutes } => {
            if !minutes.is_finite() || minutes < 0.0 {
                return Err(format!("minutes must be a finite value >= 0, got {minutes}").into());
            }

            let rings = wave::rings_at(minutes);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rings)?);
            } else {
                for ring in &rings {
                    println!(
                        "{}  {:>6.1} min  {:>10.1} km",
                        ring.kind, ring.minutes, ring.radius_km
                    );
                }
            }
        }
        Commands::Quakes { window } => {
            let config = ServerConfig::from_env()?;
            let feed = UsgsQuakeFeed::new(config.feed_base_url, config.feed_timeout)?;
            let window = FeedWindow::from_token(Some(&window));

            log::info!("Fetching {}", feed.feed_url(window));
            let quakes = feed.live_quakes(window).await?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&quakes)?);
            } else {
                for quake in &quakes {
                    println!(
                        "{}  M{:<4.1} {:>6.1} km  ({:.3}, {:.3})  {}",
                        quake.time_utc,
                        quake.magnitude,
                        quake.depth_km,
                        quake.lat,
                        quake.lon,
                        quake.place
                    );
                }
                println!("{} quakes ({window})", quakes.len());
            }
        }
        Commands::Serve => {
            let config = ServerConfig::from_env()?;
            // The server uses actix-web's runtime, so we need to run it
            // in a blocking task to avoid nesting tokio runtimes.
            tokio::task::spawn_blocking(move || {
                actix_web::rt::System::new().block_on(sismoview_server::run_server(config))
            })
            .await??;
        }
    }

    Ok(())
}
