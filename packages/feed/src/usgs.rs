//! USGS summary feed client.

use std::time::Duration;

use async_trait::async_trait;
use sismoview_seismic_models::Quake;

use crate::{FeedError, FeedWindow, QuakeFeed, parse_feed};

/// Base URL of the USGS summary feeds.
pub const DEFAULT_FEED_BASE_URL: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// Client for the USGS "M4.5+" summary feeds.
#[derive(Debug, Clone)]
pub struct UsgsQuakeFeed {
    client: reqwest::Client,
    base_url: String,
}

impl UsgsQuakeFeed {
    /// Creates a client against `base_url` with a per-request `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Creates a feed that reuses an existing `client`.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of the feed for `window`.
    #[must_use]
    pub fn feed_url(&self, window: FeedWindow) -> String {
        format!("{}/4.5_{window}.geojson", self.base_url)
    }
}

#[async_trait]
impl QuakeFeed for UsgsQuakeFeed {
    async fn live_quakes(&self, window: FeedWindow) -> Result<Vec<Quake>, FeedError> {
        let url = self.feed_url(window);
        log::debug!("Fetching live feed {url}");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(FeedError::Status {
                url,
                status: resp.status().as_u16(),
            });
        }
        let body = resp.text().await?;

        parse_feed(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(base: &str) -> UsgsQuakeFeed {
        UsgsQuakeFeed::with_client(reqwest::Client::new(), base)
    }

    #[test]
    fn week_maps_to_week_feed() {
        assert_eq!(
            feed(DEFAULT_FEED_BASE_URL).feed_url(FeedWindow::Week),
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/4.5_week.geojson"
        );
    }

    #[test]
    fn day_maps_to_day_feed() {
        assert_eq!(
            feed(DEFAULT_FEED_BASE_URL).feed_url(FeedWindow::from_token(Some("hour"))),
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/4.5_day.geojson"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        assert_eq!(
            feed("http://localhost:9000/feeds/").feed_url(FeedWindow::Day),
            "http://localhost:9000/feeds/4.5_day.geojson"
        );
    }
}
