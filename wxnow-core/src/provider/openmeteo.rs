use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::WeatherError,
    model::{CurrentWeather, HourlySeries, Observation},
};

use super::{WeatherSource, endpoint, truncate_body};

/// Open-Meteo forecast API, imperial units.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    url: String,
}

impl OpenMeteoClient {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            url: endpoint(base_url, "v1/forecast"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    winddirection: f64,
    weathercode: i32,
    time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OmHourly {
    time: Vec<String>,
    precipitation_probability: Vec<Option<u8>>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: Option<OmCurrentWeather>,
    #[serde(default)]
    hourly: OmHourly,
}

impl From<OmCurrentWeather> for CurrentWeather {
    fn from(cw: OmCurrentWeather) -> Self {
        Self {
            temperature_f: cw.temperature,
            windspeed_mph: cw.windspeed,
            winddirection_deg: cw.winddirection,
            weathercode: cw.weathercode,
            time: cw.time,
        }
    }
}

fn parse_forecast(body: &str) -> Result<Observation, WeatherError> {
    let parsed: OmForecastResponse = serde_json::from_str(body)?;
    let current = parsed.current_weather.ok_or(WeatherError::MissingData)?;

    Ok(Observation {
        current: current.into(),
        hourly: HourlySeries {
            times: parsed.hourly.time,
            precipitation_probability: parsed.hourly.precipitation_probability,
        },
    })
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Observation, WeatherError> {
        debug!(latitude, longitude, "requesting forecast");

        let res = self
            .http
            .get(&self.url)
            .query(&[
                ("latitude", latitude.to_string().as_str()),
                ("longitude", longitude.to_string().as_str()),
                ("current_weather", "true"),
                ("hourly", "precipitation_probability"),
                ("temperature_unit", "fahrenheit"),
                ("windspeed_unit", "mph"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        parse_forecast(&body)
    }
}
