use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

/// Place used when no argument is given and the IP lookup yields nothing usable.
pub const DEFAULT_FALLBACK_LOCATION: &str = "San Francisco, CA";

/// Identifies this client to the geocoding service, as its usage policy requires.
pub const DEFAULT_USER_AGENT: &str = concat!("wxnow/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Base URLs of the three upstream services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub ip_lookup: String,
    pub geocoder: String,
    pub forecast: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip_lookup: "https://ipinfo.io".to_string(),
            geocoder: "https://nominatim.openstreetmap.org".to_string(),
            forecast: "https://api.open-meteo.com".to_string(),
        }
    }
}

impl Endpoints {
    /// Point every service at the same base URL. Handy for tests and local proxies.
    pub fn all_at(base: &str) -> Self {
        Self {
            ip_lookup: base.to_string(),
            geocoder: base.to_string(),
            forecast: base.to_string(),
        }
    }
}

/// Runtime configuration.
///
/// Example TOML (every key optional):
/// ```toml
/// fallback_location = "Berlin, DE"
/// timeout_secs = 5
///
/// [endpoints]
/// forecast = "http://localhost:8080"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fallback_location: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback_location: DEFAULT_FALLBACK_LOCATION.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Load config from an explicit path. There is no implicit config location.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Config =
            toml::from_str(contents).context("Failed to deserialize configuration from TOML")?;
        Ok(cfg)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn with_fallback_location(mut self, place: impl Into<String>) -> Self {
        self.fallback_location = place.into();
        self
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}
