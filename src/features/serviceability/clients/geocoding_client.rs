use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::core::config::GeocodingConfig;
use crate::features::serviceability::models::GeoPoint;

/// Failure classes of the geocoding provider.
///
/// None of these are fatal to a serviceability resolution; they only skip
/// the coordinate enrichment of a new cache row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodingError {
    #[error("geocoding provider rate limited the request")]
    RateLimited,

    #[error("geocoding provider denied the request")]
    Denied,

    #[error("geocoding provider returned no results")]
    NoResults,

    #[error("geocoding request failed: {0}")]
    Unknown(String),
}

/// Point lookup that turns a zip code into coordinates
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode_zip(&self, zip: &str) -> Result<GeoPoint, GeocodingError>;
}

/// Geocoding API response structure
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: GeocodeGeometry,
    /// Structured city/state/country components; parsed for registry
    /// curation tooling, not used in resolution
    #[serde(default)]
    #[allow(dead_code)]
    pub address_components: Vec<AddressComponent>,
    #[allow(dead_code)]
    pub formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeGeometry {
    pub location: GeocodeLocation,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeLocation {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct AddressComponent {
    pub long_name: String,
    pub short_name: String,
    pub types: Vec<String>,
}

impl GeocodeResponse {
    /// Map the provider's status field and first result into a point
    pub fn into_point(self) -> Result<GeoPoint, GeocodingError> {
        match self.status.as_str() {
            "OK" => self
                .results
                .into_iter()
                .next()
                .map(|r| GeoPoint {
                    lat: r.geometry.location.lat,
                    lng: r.geometry.location.lng,
                })
                .ok_or(GeocodingError::NoResults),
            "ZERO_RESULTS" => Err(GeocodingError::NoResults),
            "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => Err(GeocodingError::RateLimited),
            "REQUEST_DENIED" => Err(GeocodingError::Denied),
            other => Err(GeocodingError::Unknown(format!(
                "unexpected provider status: {}",
                other
            ))),
        }
    }
}

/// HTTP client for the external address-geocoding endpoint.
///
/// The provider is rate-limited and billable, so every call is logged. The
/// request timeout keeps one slow lookup from stalling a resolution.
pub struct GeocodingClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeocodingClient {
    pub fn new(config: GeocodingConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("SudsyCore/1.0 (serviceability)")
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.base_url,
            api_key: config.api_key,
        }
    }
}

#[async_trait]
impl Geocoder for GeocodingClient {
    async fn geocode_zip(&self, zip: &str) -> Result<GeoPoint, GeocodingError> {
        let url = format!(
            "{}/geocode/json?address={}&key={}",
            self.base_url,
            urlencoding::encode(zip),
            self.api_key
        );

        tracing::info!("Geocoding zip {}", zip);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                GeocodingError::Unknown("request timed out".to_string())
            } else {
                GeocodingError::Unknown(e.to_string())
            }
        })?;

        if !response.status().is_success() {
            return Err(GeocodingError::Unknown(format!(
                "provider returned HTTP {}",
                response.status()
            )));
        }

        let decoded: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::Unknown(format!("invalid response body: {}", e)))?;

        decoded.into_point()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response_yields_first_result() {
        let body = r#"{
            "status": "OK",
            "results": [
                {
                    "formatted_address": "Beverly Hills, CA 90210, USA",
                    "geometry": { "location": { "lat": 34.1030032, "lng": -118.4104684 } },
                    "address_components": [
                        { "long_name": "90210", "short_name": "90210", "types": ["postal_code"] },
                        { "long_name": "California", "short_name": "CA", "types": ["administrative_area_level_1"] }
                    ]
                },
                {
                    "formatted_address": "somewhere else",
                    "geometry": { "location": { "lat": 0.0, "lng": 0.0 } }
                }
            ]
        }"#;
        let response: GeocodeResponse = serde_json::from_str(body).unwrap();
        let point = response.into_point().unwrap();
        assert_eq!(
            point,
            GeoPoint {
                lat: 34.1030032,
                lng: -118.4104684
            }
        );
    }

    #[test]
    fn test_status_mapping() {
        let decode = |status: &str| {
            GeocodeResponse {
                status: status.to_string(),
                results: vec![],
            }
            .into_point()
        };

        assert_eq!(decode("ZERO_RESULTS"), Err(GeocodingError::NoResults));
        assert_eq!(decode("OVER_QUERY_LIMIT"), Err(GeocodingError::RateLimited));
        assert_eq!(decode("OVER_DAILY_LIMIT"), Err(GeocodingError::RateLimited));
        assert_eq!(decode("REQUEST_DENIED"), Err(GeocodingError::Denied));
        assert!(matches!(
            decode("INVALID_REQUEST"),
            Err(GeocodingError::Unknown(_))
        ));
    }

    #[test]
    fn test_ok_with_empty_results_is_no_results() {
        let response = GeocodeResponse {
            status: "OK".to_string(),
            results: vec![],
        };
        assert_eq!(response.into_point(), Err(GeocodingError::NoResults));
    }
}
