//! Startup configuration read from the process environment.

use std::{env, sync::Arc, time::Duration};

use thiserror::Error;
use tracing::info;

use crate::infra::{
    fixtures::DEFAULT_LATENCY, remote::DEFAULT_TIMEOUT, HttpTrackingSource, LookupError,
    StaticShipmentStore, TrackingSource,
};

pub const ENV_ENDPOINT: &str = "TRACKING_ENDPOINT";
pub const ENV_LATENCY_MS: &str = "TRACKING_LATENCY_MS";
pub const ENV_TIMEOUT_SECS: &str = "TRACKING_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a whole number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("TRACKING_ENDPOINT is not a usable base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the shipment service. `None` serves the fixture table.
    pub tracking_endpoint: Option<String>,
    pub fixture_latency: Duration,
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tracking_endpoint: None,
            fixture_latency: DEFAULT_LATENCY,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();

        let tracking_endpoint = match read(ENV_ENDPOINT) {
            Some(raw) => {
                url::Url::parse(&raw)?;
                Some(raw)
            }
            None => None,
        };

        let fixture_latency = read(ENV_LATENCY_MS)
            .map(|raw| parse_number(ENV_LATENCY_MS, raw).map(Duration::from_millis))
            .transpose()?
            .unwrap_or(defaults.fixture_latency);

        let request_timeout = read(ENV_TIMEOUT_SECS)
            .map(|raw| parse_number(ENV_TIMEOUT_SECS, raw).map(Duration::from_secs))
            .transpose()?
            .unwrap_or(defaults.request_timeout);

        Ok(Self {
            tracking_endpoint,
            fixture_latency,
            request_timeout,
        })
    }

    /// The tracking source this configuration selects.
    pub fn tracking_source(&self) -> Result<Arc<dyn TrackingSource>, LookupError> {
        match self.tracking_endpoint.as_deref() {
            Some(endpoint) => {
                info!(endpoint, timeout = ?self.request_timeout, "using HTTP tracking source");
                let source = HttpTrackingSource::new(endpoint)?.with_timeout(self.request_timeout);
                Ok(Arc::new(source))
            }
            None => {
                let store = StaticShipmentStore::new().with_latency(self.fixture_latency);
                info!(
                    latency = ?self.fixture_latency,
                    shipments = store.shipment_count(),
                    "using fixture tracking source"
                );
                Ok(Arc::new(store))
            }
        }
    }
}

fn parse_number(key: &'static str, raw: String) -> Result<u64, ConfigError> {
    raw.parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber { key, value: raw })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fixture_latency, Duration::from_millis(800));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            (ENV_ENDPOINT, "https://tracking.example.com/api"),
            (ENV_LATENCY_MS, "0"),
            (ENV_TIMEOUT_SECS, " 3 "),
        ])
        .unwrap();
        assert_eq!(
            config.tracking_endpoint.as_deref(),
            Some("https://tracking.example.com/api")
        );
        assert_eq!(config.fixture_latency, Duration::ZERO);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[(ENV_ENDPOINT, "   ")]).unwrap();
        assert_eq!(config.tracking_endpoint, None);
    }

    #[test]
    fn rejects_bad_numbers_and_urls() {
        assert!(matches!(
            config_from(&[(ENV_LATENCY_MS, "fast")]),
            Err(ConfigError::InvalidNumber { key: ENV_LATENCY_MS, .. })
        ));
        assert!(matches!(
            config_from(&[(ENV_TIMEOUT_SECS, "-1")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            config_from(&[(ENV_ENDPOINT, "not a url")]),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn selects_source_by_endpoint() {
        let fixture = AppConfig::default().tracking_source().unwrap();
        assert_eq!(fixture.name(), "fixture");

        let http = config_from(&[(ENV_ENDPOINT, "http://127.0.0.1:9/")])
            .unwrap()
            .tracking_source()
            .unwrap();
        assert_eq!(http.name(), "http");
    }
}
