//! HTTP client abstraction for testability.
//!
//! The API modules never talk to `reqwest` directly; they go through the
//! [`AsyncHttpClient`] trait so tests can inject mock transports. The
//! trait deliberately surfaces the raw status code and body: status
//! mapping (401, 429, 400-with-message) is the responsibility of
//! [`Base`](super::Base), not of the transport.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A raw HTTP response: status code plus body bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code (e.g. 200, 401, 429).
    pub status: u16,
    /// Response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure: connection, DNS, timeout, or body read errors.
///
/// HTTP error *statuses* are not transport failures; they are returned as
/// an [`HttpResponse`] and classified by the caller.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{0}")]
pub struct HttpError(pub String);

/// Trait for asynchronous HTTP operations.
///
/// Implementors perform the raw exchange and nothing else: no token
/// handling, no status interpretation, no retries.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;

    /// Performs an HTTP POST request with a JSON body.
    fn post_json(
        &self,
        url: &str,
        json_body: &str,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;

    /// Performs an HTTP PATCH request with a JSON body.
    fn patch_json(
        &self,
        url: &str,
        json_body: &str,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}

/// Production HTTP client backed by `reqwest`.
///
/// Configured for tile-download workloads: connection pooling with high
/// idle limits, TCP keepalive and nodelay, and a bounded request timeout.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client with the default 30 second timeout.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a client with a custom request timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_max_idle_per_host(64)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30))
            .tcp_nodelay(true)
            .build()
            .map_err(|e| HttpError(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn read_response(
        url: &str,
        response: reqwest::Response,
    ) -> Result<HttpResponse, HttpError> {
        let status = response.status().as_u16();
        debug!(url = url, status = status, "HTTP response received");

        if !(200..300).contains(&status) {
            warn!(url = url, status = status, "HTTP error status");
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError(format!("failed to read response: {}", e)))?;
        trace!(url = url, bytes = body.len(), "HTTP response body read");

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

impl AsyncHttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        trace!(url = url, "HTTP GET request starting");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(
                url = url,
                error = %e,
                is_connect = e.is_connect(),
                is_timeout = e.is_timeout(),
                "HTTP request failed"
            );
            HttpError(format!("request failed: {}", e))
        })?;

        Self::read_response(url, response).await
    }

    async fn post_json(&self, url: &str, json_body: &str) -> Result<HttpResponse, HttpError> {
        trace!(url = url, "HTTP POST request starting");

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(json_body.to_string())
            .send()
            .await
            .map_err(|e| HttpError(format!("POST request failed: {}", e)))?;

        Self::read_response(url, response).await
    }

    async fn patch_json(&self, url: &str, json_body: &str) -> Result<HttpResponse, HttpError> {
        trace!(url = url, "HTTP PATCH request starting");

        let response = self
            .client
            .patch(url)
            .header("Content-Type", "application/json")
            .body(json_body.to_string())
            .send()
            .await
            .map_err(|e| HttpError(format!("PATCH request failed: {}", e)))?;

        Self::read_response(url, response).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_success_range() {
        let ok = HttpResponse {
            status: 200,
            body: vec![],
        };
        let created = HttpResponse {
            status: 201,
            body: vec![],
        };
        let unauthorized = HttpResponse {
            status: 401,
            body: vec![],
        };

        assert!(ok.is_success());
        assert!(created.is_success());
        assert!(!unauthorized.is_success());
    }

    #[test]
    fn reqwest_client_builds() {
        assert!(ReqwestClient::new().is_ok());
        assert!(ReqwestClient::with_timeout(5).is_ok());
    }
}
