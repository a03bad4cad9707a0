//! # geolocate
//!
//! Best-effort device location for the chat session. The CLI host has no
//! native geolocation service, so the default provider derives coordinates
//! from the machine's public IP. The attempt runs exactly once per session;
//! denial or failure leaves the location unset and is only logged.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chat_core::Coordinates;
use reqwest::Client;
use serde::Deserialize;

/// Default IP geolocation endpoint; returns `{"status","lat","lon",...}`.
pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json";

/// Location service interface. The trait is the portable seam; hosts with a
/// real platform location service can provide their own implementation.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn locate(&self) -> Result<Coordinates>;
}

/// IP-based location provider using the ip-api.com JSON endpoint.
#[derive(Debug, Clone)]
pub struct IpApiLocator {
    client: Client,
    endpoint: String,
}

impl IpApiLocator {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Overrides the lookup endpoint (e.g. for a mock server in tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for IpApiLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
    #[serde(default)]
    message: Option<String>,
}

#[async_trait]
impl LocationProvider for IpApiLocator {
    async fn locate(&self) -> Result<Coordinates> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .context("Request IP geolocation")?;
        let parsed: IpApiResponse = response
            .json()
            .await
            .context("Parse IP geolocation response")?;

        if parsed.status != "success" {
            anyhow::bail!(
                "Geolocation lookup refused: {}",
                parsed.message.unwrap_or_else(|| parsed.status.clone())
            );
        }

        Ok(Coordinates {
            latitude: parsed.lat,
            longitude: parsed.lon,
        })
    }
}

/// Single best-effort attempt: any failure is logged and mapped to `None`.
/// Never retried; never surfaced to the user-facing flow.
pub async fn acquire_once(provider: &dyn LocationProvider) -> Option<Coordinates> {
    match provider.locate().await {
        Ok(coords) => {
            tracing::info!(
                latitude = coords.latitude,
                longitude = coords.longitude,
                "Location acquired"
            );
            Some(coords)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Location permission denied or lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_payload_parses_to_coordinates() {
        let parsed: IpApiResponse = serde_json::from_str(
            r#"{"status":"success","lat":34.05,"lon":-118.25,"city":"Los Angeles"}"#,
        )
        .unwrap();
        assert_eq!(parsed.status, "success");
        assert_eq!(parsed.lat, 34.05);
        assert_eq!(parsed.lon, -118.25);
    }

    #[test]
    fn failure_payload_carries_message() {
        let parsed: IpApiResponse =
            serde_json::from_str(r#"{"status":"fail","message":"private range"}"#).unwrap();
        assert_eq!(parsed.status, "fail");
        assert_eq!(parsed.message.as_deref(), Some("private range"));
    }

    struct FixedProvider(Option<Coordinates>);

    #[async_trait]
    impl LocationProvider for FixedProvider {
        async fn locate(&self) -> Result<Coordinates> {
            self.0.ok_or_else(|| anyhow::anyhow!("denied"))
        }
    }

    #[tokio::test]
    async fn acquire_once_returns_some_on_success() {
        let provider = FixedProvider(Some(Coordinates {
            latitude: 1.0,
            longitude: 2.0,
        }));
        let coords = acquire_once(&provider).await;
        assert_eq!(
            coords,
            Some(Coordinates {
                latitude: 1.0,
                longitude: 2.0
            })
        );
    }

    #[tokio::test]
    async fn acquire_once_maps_failure_to_none() {
        let provider = FixedProvider(None);
        assert_eq!(acquire_once(&provider).await, None);
    }
}
