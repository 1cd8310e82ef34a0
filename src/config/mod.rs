use anyhow::Result;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub weather_api_key: String,
    pub weather_api_base: String,
    pub weather_lang: String,
    pub default_latitude: f64,
    pub default_longitude: f64,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok(); // Try loading .env file, ignore if it doesn't exist (e.g. env vars set manually)

        Ok(Config {
            weather_api_key: std::env::var("WEATHER_API_KEY")
                .expect("WEATHER_API_KEY is missing from .env or environment!"),
            weather_api_base: std::env::var("WEATHER_API_BASE")
                .unwrap_or_else(|_| "https://api.weatherapi.com/v1".to_string()),
            weather_lang: std::env::var("WEATHER_LANG").unwrap_or_else(|_| "ko".to_string()),
            default_latitude: std::env::var("DEFAULT_LAT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(37.5665),
            default_longitude: std::env::var("DEFAULT_LON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(126.9780),
        })
    }
}
