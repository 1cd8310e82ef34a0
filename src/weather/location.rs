use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use super::{Coordinates, LocationError};

/// Seoul — used whenever geolocation is denied or unreachable.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    latitude: 37.5665,
    longitude: 126.9780,
};

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Resolve a position, falling back to `default` on any provider error.
/// This is the only way coordinates enter the pipeline, so a refresh can
/// never fail at the location stage.
pub async fn resolve_location(
    provider: &dyn LocationProvider,
    default: Coordinates,
) -> Coordinates {
    match provider.current_position().await {
        Ok(coords) => coords,
        Err(e) => {
            warn!("Geolocation failed ({e}), using default location");
            default
        }
    }
}

/// IP-based geolocation — the closest a terminal app gets to a device
/// position. One request per refresh, no retry.
pub struct IpLocationProvider {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    lat: Option<f64>,
    lon: Option<f64>,
}

impl IpLocationProvider {
    pub fn new() -> Self {
        IpLocationProvider {
            http: reqwest::Client::new(),
            endpoint: "http://ip-api.com/json".to_string(),
        }
    }
}

impl Default for IpLocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationProvider for IpLocationProvider {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let resp = self.http.get(&self.endpoint).send().await?;
        let body: IpApiResponse = resp.error_for_status()?.json().await?;
        match (body.lat, body.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
            _ => Err(LocationError::NoPosition),
        }
    }
}
