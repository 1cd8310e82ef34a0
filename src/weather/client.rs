use async_trait::async_trait;
use tracing::info;

use crate::config::Config;

use super::{ApiResponse, Coordinates, WeatherError, WeatherSnapshot};

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, coords: Coordinates) -> Result<WeatherSnapshot, WeatherError>;
}

/// weatherapi.com client. Exactly one GET per call, no retries — the caller
/// owns the degraded-mode fallback.
pub struct WeatherApiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    lang: String,
}

impl WeatherApiClient {
    pub fn new(config: &Config) -> Self {
        WeatherApiClient {
            http: reqwest::Client::new(),
            api_base: config.weather_api_base.clone(),
            api_key: config.weather_api_key.clone(),
            lang: config.weather_lang.clone(),
        }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current(&self, coords: Coordinates) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/current.json", self.api_base);
        let query = format!("{},{}", coords.latitude, coords.longitude);

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query.as_str()),
                ("aqi", "yes"),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WeatherError::Api {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let parsed: ApiResponse = serde_json::from_str(&body)?;
        let snapshot = WeatherSnapshot::from(parsed);
        info!(
            "Weather: {} / {}°C at {}",
            snapshot.condition_text, snapshot.temperature_c, snapshot.location_name
        );
        Ok(snapshot)
    }
}
