pub mod client;
pub mod location;

use serde::Deserialize;
use thiserror::Error;

/// A latitude/longitude pair. Replaced wholesale on every refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions as consumed from the provider. One snapshot per
/// successful fetch; a new fetch fully replaces the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: i64,
    pub wind_kph: f64,
    pub condition_text: String,
    #[allow(dead_code)]
    pub condition_icon: String,
    pub location_name: String,
    pub country_name: String,
}

impl WeatherSnapshot {
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.location_name, self.country_name)
    }
}

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("weather API returned status {status}")]
    Api { status: u16 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("could not parse weather response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("geolocation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("geolocation service answered without coordinates")]
    NoPosition,
}

/// Partial weatherapi.com `current.json` response — only the fields we use.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub location: ApiLocation,
    pub current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiLocation {
    pub name: String,
    pub country: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCurrent {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub humidity: i64,
    pub wind_kph: f64,
    pub condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCondition {
    pub text: String,
    pub icon: String,
}

impl From<ApiResponse> for WeatherSnapshot {
    fn from(r: ApiResponse) -> Self {
        WeatherSnapshot {
            temperature_c: r.current.temp_c,
            feels_like_c: r.current.feelslike_c,
            humidity_pct: r.current.humidity,
            wind_kph: r.current.wind_kph,
            condition_text: r.current.condition.text,
            condition_icon: r.current.condition.icon,
            location_name: r.location.name,
            country_name: r.location.country,
        }
    }
}
