//! Error types for the lookup pipeline.
//!
//! The `Display` output of each terminal error is the line shown to the user.

use reqwest::StatusCode;
use thiserror::Error;

/// IP-geolocation failures. Never surfaced: the resolver falls back to the configured place.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("IP lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IP lookup returned status {0}")]
    Status(StatusCode),
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Error: Could not find location.")]
    NotFound,

    /// The geocoding service rejected the query as malformed.
    #[error("Could not get location: {0}")]
    Query(String),

    /// Transport failure, unexpected status or undecodable answer.
    #[error("Could not get location: {0}")]
    Service(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Service(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Could not get weather: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Could not get weather: status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Could not get weather data from response")]
    MissingData,

    #[error("Could not parse weather response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Any terminal failure of [`crate::lookup::current_conditions`].
#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}
