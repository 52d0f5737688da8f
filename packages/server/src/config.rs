//! Server configuration from environment variables.

use std::str::FromStr;
use std::time::Duration;

use sismoview_feed::DEFAULT_FEED_BASE_URL;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("Invalid value for {name}: {value:?}")]
    Invalid {
        /// Environment variable name.
        name: &'static str,
        /// The raw value.
        value: String,
    },
}

/// Runtime settings for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`BIND_ADDR`, default `127.0.0.1`).
    pub bind_addr: String,
    /// Port to bind (`PORT`, default `8080`).
    pub port: u16,
    /// Base URL of the live feed (`USGS_FEED_BASE_URL`).
    pub feed_base_url: String,
    /// Per-request timeout for the live feed (`FEED_TIMEOUT_SECS`, default 10).
    pub feed_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            feed_base_url: DEFAULT_FEED_BASE_URL.to_string(),
            feed_timeout: Duration::from_secs(10),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` or `FEED_TIMEOUT_SECS` is
    /// set to something unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            feed_base_url: lookup("USGS_FEED_BASE_URL").unwrap_or(defaults.feed_base_url),
            feed_timeout: parse_var(&lookup, "FEED_TIMEOUT_SECS")?
                .map_or(defaults.feed_timeout, Duration::from_secs),
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { name, value })
        })
        .transpose()
}
