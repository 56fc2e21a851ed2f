//! Common base for the API modules.
//!
//! [`Base`] owns the access token and the HTTP exchange: it builds URLs
//! against the fixed API host, attaches `access_token` to every query,
//! performs the request through an injected [`AsyncHttpClient`], and maps
//! HTTP statuses into the shared [`ApiError`] taxonomy. The API modules
//! are pure consumers of this primitive.

pub mod http;
mod types;

pub use http::{AsyncHttpClient, HttpError, HttpResponse, ReqwestClient};
pub use types::{BoundingBox, Location, Point, RoutingProfile};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Mapbox API host.
pub const BASE_URL: &str = "https://api.mapbox.com";

/// Errors shared by every API module.
///
/// Only statuses the caller can act on get their own variant; everything
/// else non-2xx collapses into [`ApiError::Status`]. Retry and backoff
/// are deliberately left to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No access token was supplied at construction.
    #[error("Mapbox access token not provided")]
    MissingToken,
    /// The access token was rejected (HTTP 401).
    #[error("access token rejected (HTTP 401)")]
    Unauthorized,
    /// The API rate limit was exceeded (HTTP 429).
    #[error("API rate limit exceeded (HTTP 429)")]
    RateLimited,
    /// The API rejected the request with a diagnostic message (HTTP 400).
    #[error("API error: {0}")]
    Api(String),
    /// Any other non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    /// Transport failure: connection, DNS, timeout or body read.
    #[error("request failed: {0}")]
    Network(#[from] HttpError),
    /// The response body was not the JSON document we expected.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Diagnostic message body returned with HTTP 400 responses.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// API base: access token plus transport.
///
/// Both are supplied at construction and immutable for the lifetime of
/// the instance. One `Base` is shared (via `Arc`) by every module bound
/// to a [`Mapbox`](crate::Mapbox) handle.
pub struct Base<C> {
    client: C,
    token: String,
    base_url: String,
}

impl<C: AsyncHttpClient> Base<C> {
    /// Creates a new API base with the given transport and access token.
    pub fn new(client: C, token: impl Into<String>) -> Result<Self, ApiError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ApiError::MissingToken);
        }

        Ok(Self {
            client,
            token,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Builds a full request URL: host, path, query pairs in order, and
    /// the access token appended last.
    pub(crate) fn build_url(&self, path: &str, query: &[(&str, String)]) -> String {
        let mut url = format!("{}/{}?", self.base_url, path);
        for (key, value) in query {
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            url.push('&');
        }
        url.push_str("access_token=");
        url.push_str(&urlencoding::encode(&self.token));
        url
    }

    fn check_status(response: HttpResponse, url: &str) -> Result<Vec<u8>, ApiError> {
        match response.status {
            401 => Err(ApiError::Unauthorized),
            429 => Err(ApiError::RateLimited),
            400 => match serde_json::from_slice::<ApiMessage>(&response.body) {
                Ok(api_message) => Err(ApiError::Api(api_message.message)),
                Err(_) => Err(ApiError::Api("bad request (400), no message".to_string())),
            },
            status if !(200..300).contains(&status) => Err(ApiError::Status {
                status,
                url: url.to_string(),
            }),
            _ => Ok(response.body),
        }
    }

    /// GET the given path and return the raw body on success.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>, ApiError> {
        let url = self.build_url(path, query);
        debug!(path = path, "API GET");
        let response = self.client.get(&url).await?;
        Self::check_status(response, &url)
    }

    /// GET the given path and decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let body = self.get(path, query).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST a JSON body to the given path and decode the JSON response.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path, &[]);
        let json_body = serde_json::to_string(body)?;
        debug!(path = path, "API POST");
        let response = self.client.post_json(&url, &json_body).await?;
        let body = Self::check_status(response, &url)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// PATCH a JSON body to the given path and decode the JSON response.
    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path, &[]);
        let json_body = serde_json::to_string(body)?;
        debug!(path = path, "API PATCH");
        let response = self.client.patch_json(&url, &json_body).await?;
        let body = Self::check_status(response, &url)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Joins locations into the `lng,lat;lng,lat` coordinate path segment
/// used by the directions, matrix and map-matching APIs.
pub(crate) fn join_coordinates(locations: &[Location]) -> String {
    locations
        .iter()
        .map(Location::lng_lat)
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::http::mock::MockClient;
    use super::*;

    fn base_with(mock: MockClient) -> Base<MockClient> {
        Base::new(mock, "pk.test123").unwrap()
    }

    #[test]
    fn empty_token_is_rejected() {
        let mock = MockClient::with_response(200, vec![]);
        let result = Base::new(mock, "");
        assert!(matches!(result, Err(ApiError::MissingToken)));
    }

    #[test]
    fn url_attaches_token_and_query() {
        let base = base_with(MockClient::with_response(200, vec![]));

        let url = base.build_url("v4/mapbox.satellite/1/0/1.jpg90", &[]);
        assert_eq!(
            url,
            "https://api.mapbox.com/v4/mapbox.satellite/1/0/1.jpg90?access_token=pk.test123"
        );

        let url = base.build_url("geocoding/v5/mapbox.places/x.json", &[("limit", "5".into())]);
        assert_eq!(
            url,
            "https://api.mapbox.com/geocoding/v5/mapbox.places/x.json?limit=5&access_token=pk.test123"
        );
    }

    #[test]
    fn url_encodes_query_values() {
        let base = base_with(MockClient::with_response(200, vec![]));

        let url = base.build_url("path", &[("country", "nz,us".into())]);
        assert!(url.contains("country=nz%2Cus"));
    }

    #[tokio::test]
    async fn get_returns_body_on_success() {
        let base = base_with(MockClient::with_response(200, b"tile-bytes".to_vec()));

        let body = base.get("v4/test/1/0/1.png", &[]).await.unwrap();
        assert_eq!(body, b"tile-bytes");
    }

    #[tokio::test]
    async fn status_401_maps_to_unauthorized() {
        let base = base_with(MockClient::with_response(401, vec![]));

        let result = base.get("v4/test/1/0/1.png", &[]).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn status_429_maps_to_rate_limited() {
        let base = base_with(MockClient::with_response(429, vec![]));

        let result = base.get("v4/test/1/0/1.png", &[]).await;
        assert!(matches!(result, Err(ApiError::RateLimited)));
    }

    #[tokio::test]
    async fn status_400_decodes_api_message() {
        let body = br#"{"message":"Tile does not exist"}"#.to_vec();
        let base = base_with(MockClient::with_response(400, body));

        let result = base.get("v4/test/1/0/1.png", &[]).await;
        match result {
            Err(ApiError::Api(message)) => assert_eq!(message, "Tile does not exist"),
            other => panic!("expected ApiError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn status_400_without_message_still_errors() {
        let base = base_with(MockClient::with_response(400, b"not json".to_vec()));

        let result = base.get("v4/test/1/0/1.png", &[]).await;
        assert!(matches!(result, Err(ApiError::Api(_))));
    }

    #[tokio::test]
    async fn other_statuses_map_to_status_error() {
        let base = base_with(MockClient::with_response(503, vec![]));

        let result = base.get("v4/test/1/0/1.png", &[]).await;
        match result {
            Err(ApiError::Status { status, .. }) => assert_eq!(status, 503),
            other => panic!("expected ApiError::Status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn transport_errors_map_to_network() {
        let base = base_with(MockClient::with_transport_error("connection refused"));

        let result = base.get("v4/test/1/0/1.png", &[]).await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[test]
    fn coordinates_join_with_semicolons() {
        let locations = [
            Location::new(37.752759, -122.467600),
            Location::new(37.762819, -122.460304),
        ];
        assert_eq!(
            join_coordinates(&locations),
            "-122.4676,37.752759;-122.460304,37.762819"
        );
    }
}
