use crate::{
    Config,
    error::{GeocodeError, LocateError, WeatherError},
    model::{GeocodeResult, IpLocation, Observation},
    provider::{ipinfo::IpInfoClient, nominatim::NominatimGeocoder, openmeteo::OpenMeteoClient},
};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

pub mod ipinfo;
pub mod nominatim;
pub mod openmeteo;

/// Guesses the caller's location from their public IP address.
#[async_trait]
pub trait IpLocator: Send + Sync + Debug {
    async fn locate(&self) -> Result<IpLocation, LocateError>;
}

/// Turns free text into coordinates and a normalized address.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn geocode(&self, query: &str) -> Result<GeocodeResult, GeocodeError>;
}

/// Current conditions plus hourly precipitation probability for a point.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Observation, WeatherError>;
}

/// The three upstream services used by one lookup.
#[derive(Debug)]
pub struct Services {
    pub locator: Box<dyn IpLocator>,
    pub geocoder: Box<dyn Geocoder>,
    pub weather: Box<dyn WeatherSource>,
}

impl Services {
    pub fn new(
        locator: Box<dyn IpLocator>,
        geocoder: Box<dyn Geocoder>,
        weather: Box<dyn WeatherSource>,
    ) -> Self {
        Self {
            locator,
            geocoder,
            weather,
        }
    }

    /// HTTP-backed services sharing one client built from `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self::new(
            Box::new(IpInfoClient::new(http.clone(), &config.endpoints.ip_lookup)),
            Box::new(NominatimGeocoder::new(http.clone(), &config.endpoints.geocoder)),
            Box::new(OpenMeteoClient::new(http, &config.endpoints.forecast)),
        ))
    }
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
