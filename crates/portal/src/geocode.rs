//! ZIP code resolution backed by the Zippopotam.us API.
//!
//! Resolved coordinates are cached in-process so repeated searches for the
//! same ZIP skip the network entirely.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use ironwood_core::Coordinate;

use crate::config::GeocoderConfig;

/// Distinct ZIPs held in the cache.
const CACHE_CAPACITY: u64 = 1000;

/// How long a resolved ZIP stays cached. ZIP centroids change on a
/// census-release cadence, not a request cadence.
const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Errors that can occur when resolving a ZIP code.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API has no record for this ZIP.
    #[error("No location found for ZIP: {0}")]
    ZipNotFound(String),

    /// The API did not answer within the configured timeout.
    #[error("Geocoder request timed out")]
    Timeout,

    /// API returned an unexpected error response.
    #[error("API error: status {status}")]
    Api { status: u16 },

    /// Failed to parse response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Client for the Zippopotam.us place lookup API.
#[derive(Clone)]
pub struct GeocodeClient {
    inner: Arc<GeocodeClientInner>,
}

struct GeocodeClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<String, Coordinate>,
}

impl GeocodeClient {
    /// Create a new geocoder client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(GeocodeClientInner {
                client,
                base_url: config.base_url.trim_end_matches('/').to_string(),
                cache,
            }),
        })
    }

    /// Resolve a US ZIP code to its centroid coordinate.
    ///
    /// # Errors
    ///
    /// Returns error if the ZIP is unknown or the API is unreachable.
    #[instrument(skip(self))]
    pub async fn resolve(&self, zip: &str) -> Result<Coordinate, GeocodeError> {
        if let Some(coordinate) = self.inner.cache.get(zip).await {
            return Ok(coordinate);
        }

        let coordinate = self.fetch(zip).await?;
        self.inner.cache.insert(zip.to_string(), coordinate).await;
        Ok(coordinate)
    }

    async fn fetch(&self, zip: &str) -> Result<Coordinate, GeocodeError> {
        let url = format!("{}/us/{zip}", self.inner.base_url);

        let response = self.inner.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                GeocodeError::Timeout
            } else {
                GeocodeError::Http(e)
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GeocodeError::ZipNotFound(zip.to_string()));
        }
        if !status.is_success() {
            return Err(GeocodeError::Api {
                status: status.as_u16(),
            });
        }

        let body: ZipResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::Parse(e.to_string()))?;

        parse_place(zip, &body)
    }
}

/// Response from the `/us/{zip}` endpoint.
///
/// The API serializes coordinates as strings, not numbers.
#[derive(Debug, Deserialize)]
struct ZipResponse {
    places: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    latitude: String,
    longitude: String,
}

fn parse_place(zip: &str, response: &ZipResponse) -> Result<Coordinate, GeocodeError> {
    let place = response
        .places
        .first()
        .ok_or_else(|| GeocodeError::ZipNotFound(zip.to_string()))?;

    let lat = place
        .latitude
        .parse::<f64>()
        .map_err(|e| GeocodeError::Parse(format!("bad latitude: {e}")))?;
    let lng = place
        .longitude
        .parse::<f64>()
        .map_err(|e| GeocodeError::Parse(format!("bad longitude: {e}")))?;

    Ok(Coordinate { lat, lng })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "post code": "77377",
        "country": "United States",
        "country abbreviation": "US",
        "places": [{
            "place name": "Tomball",
            "longitude": "-95.6161",
            "state": "Texas",
            "state abbreviation": "TX",
            "latitude": "30.0972"
        }]
    }"#;

    #[test]
    fn test_parse_place_from_api_shape() {
        let response: ZipResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        let coordinate = parse_place("77377", &response).unwrap();
        assert!((coordinate.lat - 30.0972).abs() < f64::EPSILON);
        assert!((coordinate.lng - -95.6161).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_places_is_not_found() {
        let response = ZipResponse { places: vec![] };
        let err = parse_place("99999", &response).unwrap_err();
        assert!(matches!(err, GeocodeError::ZipNotFound(zip) if zip == "99999"));
    }

    #[test]
    fn test_unparseable_coordinate_is_parse_error() {
        let response = ZipResponse {
            places: vec![Place {
                latitude: "not-a-number".to_string(),
                longitude: "-95.6161".to_string(),
            }],
        };
        let err = parse_place("77377", &response).unwrap_err();
        assert!(matches!(err, GeocodeError::Parse(_)));
    }
}
