use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Location as reported by the IP-geolocation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IpLocation {
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl IpLocation {
    /// Build a geocodable place string, or `None` when city or country is missing.
    pub fn query(&self) -> Option<String> {
        fn present(field: &Option<String>) -> Option<&str> {
            field.as_deref().filter(|s| !s.is_empty())
        }

        match (
            present(&self.city),
            present(&self.region),
            present(&self.country),
        ) {
            (Some(city), Some(region), Some(country)) => {
                Some(format!("{city}, {region}, {country}"))
            }
            (Some(city), None, Some(country)) => Some(format!("{city}, {country}")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub display_address: String,
}

/// Conditions at observation time, in Fahrenheit and mph.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub temperature_f: f64,
    pub windspeed_mph: f64,
    pub winddirection_deg: f64,
    pub weathercode: i32,
    /// ISO8601 local time without offset, e.g. `2024-01-01T12:00`. Absent when
    /// the service omits it; the precipitation lookup then yields 0.
    pub time: Option<String>,
}

/// Hourly precipitation probabilities; `times[i]` belongs to `precipitation_probability[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlySeries {
    pub times: Vec<String>,
    pub precipitation_probability: Vec<Option<u8>>,
}

impl HourlySeries {
    /// Timestamp to probability. The first occurrence of a timestamp wins and
    /// a `null` probability counts as 0.
    pub fn probability_by_time(&self) -> HashMap<&str, u8> {
        let mut index = HashMap::with_capacity(self.times.len());
        for (time, prob) in self.times.iter().zip(&self.precipitation_probability) {
            index.entry(time.as_str()).or_insert(prob.unwrap_or(0));
        }
        index
    }
}

/// One weather API response.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub current: CurrentWeather,
    pub hourly: HourlySeries,
}

impl Observation {
    /// Probability for the hour matching `current.time` exactly, `0` when there is none.
    ///
    /// The current-weather timestamp is not guaranteed to land on an hourly bucket;
    /// a miss is reported as `0` rather than guessed from neighbours.
    pub fn precipitation_probability(&self) -> u8 {
        let Some(time) = self.current.time.as_deref() else {
            debug!("current weather has no timestamp, precipitation defaults to 0");
            return 0;
        };

        match self.hourly.probability_by_time().get(time) {
            Some(prob) => *prob,
            None => {
                debug!(time, "no hourly precipitation entry for current time");
                0
            }
        }
    }
}

/// Everything the formatter needs for the final output.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub address: String,
    pub current: CurrentWeather,
    pub precipitation_probability: u8,
}

impl Report {
    pub fn new(location: GeocodeResult, observation: Observation) -> Self {
        let precipitation_probability = observation.precipitation_probability();
        Self {
            address: location.display_address,
            current: observation.current,
            precipitation_probability,
        }
    }
}
