//! Core library for the `wxnow` CLI.
//!
//! This crate defines:
//! - Configuration (fallback place, endpoints, timeouts)
//! - Adapters for the IP-geolocation, geocoding and weather services
//! - The lookup pipeline and report formatting
//!
//! It is used by `wxnow-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod format;
pub mod location;
pub mod lookup;
pub mod model;
pub mod provider;

pub use config::{Config, Endpoints};
pub use error::{GeocodeError, LocateError, LookupError, WeatherError};
pub use location::resolve_query;
pub use lookup::current_conditions;
pub use model::{CurrentWeather, GeocodeResult, HourlySeries, IpLocation, Observation, Report};
pub use provider::{Geocoder, IpLocator, Services, WeatherSource};
