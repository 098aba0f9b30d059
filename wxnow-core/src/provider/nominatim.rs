use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{error::GeocodeError, model::GeocodeResult};

use super::{Geocoder, endpoint, truncate_body};

/// OpenStreetMap Nominatim forward geocoding.
///
/// Nominatim's usage policy requires a descriptive `User-Agent`; it is set on the
/// shared client by [`super::Services::from_config`].
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    http: Client,
    url: String,
}

impl NominatimGeocoder {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            url: endpoint(base_url, "search"),
        }
    }
}

/// Nominatim sends coordinates as strings.
#[derive(Debug, Deserialize)]
struct NmPlace {
    lat: String,
    lon: String,
    display_name: String,
}

impl TryFrom<NmPlace> for GeocodeResult {
    type Error = GeocodeError;

    fn try_from(place: NmPlace) -> Result<Self, Self::Error> {
        let parse = |value: &str, what: &str| {
            value.trim().parse::<f64>().map_err(|_| {
                GeocodeError::Service(format!("invalid {what} in geocoder response: {value:?}"))
            })
        };

        Ok(GeocodeResult {
            latitude: parse(&place.lat, "latitude")?,
            longitude: parse(&place.lon, "longitude")?,
            display_address: place.display_name,
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, query: &str) -> Result<GeocodeResult, GeocodeError> {
        if query.trim().is_empty() {
            return Err(GeocodeError::Query("empty location query".to_string()));
        }

        debug!(query, "geocoding");

        let res = self
            .http
            .get(&self.url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if status == StatusCode::BAD_REQUEST {
            return Err(GeocodeError::Query(truncate_body(&body)));
        }
        if !status.is_success() {
            return Err(GeocodeError::Service(format!(
                "geocoder returned status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let places: Vec<NmPlace> = serde_json::from_str(&body)
            .map_err(|e| GeocodeError::Service(format!("failed to parse geocoder JSON: {e}")))?;

        let place = places.into_iter().next().ok_or(GeocodeError::NotFound)?;
        place.try_into()
    }
}
