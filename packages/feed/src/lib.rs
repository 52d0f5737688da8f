#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Live earthquake feed.
//!
//! Fetches the USGS "M4.5+" `GeoJSON` summary feed for the past day or week
//! and maps each feature to a [`Quake`]. Requests are single-shot: there is
//! no retry, backoff, or pagination.
//!
//! [`QuakeFeed`] is the seam between the HTTP layer and the data source.
//! [`UsgsQuakeFeed`] is the production implementation; tests substitute
//! their own.

pub mod parse;
pub mod usgs;

use async_trait::async_trait;
use sismoview_seismic_models::Quake;
use strum_macros::{AsRefStr, Display, EnumString};

pub use parse::parse_feed;
pub use usgs::{DEFAULT_FEED_BASE_URL, UsgsQuakeFeed};

/// Errors that can occur while fetching or parsing the feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with a non-success status.
    #[error("Feed request to {url} failed with status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: u16,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A feature was structurally valid JSON but unusable.
    #[error("Malformed feature {id}: {message}")]
    Malformed {
        /// Feature id, if known.
        id: String,
        /// Description of what went wrong.
        message: String,
    },
}

/// Time window of the live feed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FeedWindow {
    /// Events from the past 24 hours.
    #[default]
    Day,
    /// Events from the past 7 days.
    Week,
}

impl FeedWindow {
    /// Interprets a request token. `week` in any case selects
    /// [`FeedWindow::Week`]; anything else, including no token, is
    /// [`FeedWindow::Day`].
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        token
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or_default()
    }
}

/// A source of recent earthquakes.
#[async_trait]
pub trait QuakeFeed: Send + Sync {
    /// Returns the quakes reported within `window`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] if the source cannot be reached or its
    /// response cannot be parsed.
    async fn live_quakes(&self, window: FeedWindow) -> Result<Vec<Quake>, FeedError>;
}

/// Fetches `window` from `feed`, logging and discarding any failure.
///
/// Callers that must stay compatible with the degrade-to-empty contract
/// of the public endpoint use this instead of [`QuakeFeed::live_quakes`].
pub async fn live_quakes_or_empty(feed: &dyn QuakeFeed, window: FeedWindow) -> Vec<Quake> {
    match feed.live_quakes(window).await {
        Ok(quakes) => {
            log::debug!("Live feed ({window}) returned {} quakes", quakes.len());
            quakes
        }
        Err(e) => {
            log::warn!("Live feed ({window}) unavailable, returning no quakes: {e}");
            Vec::new()
        }
    }
}
