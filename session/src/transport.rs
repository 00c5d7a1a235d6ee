//! HTTP transport seam between the auth client and the network.
//!
//! DESIGN
//! ======
//! The auth client builds `ApiRequest`s and interprets `ApiResponse`s; a
//! `Transport` only moves bytes. Native builds use `reqwest`
//! ([`HttpTransport`]); the browser bundle supplies a `gloo-net`
//! implementation. Futures are `?Send` so browser fetch futures fit the same
//! trait.
//!
//! Every call is bounded by the configured timeout, so a remote operation
//! that never answers ends as [`TransportError::Timeout`] rather than
//! leaving the session stuck in `loading`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;

use crate::token_store::Credential;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request against the configured API origin.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API origin, e.g. `/auth/me`.
    pub path: &'static str,
    pub bearer: Option<Credential>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: &'static str) -> Self {
        Self { method: Method::Get, path, bearer: None, body: None }
    }

    #[must_use]
    pub fn post(path: &'static str) -> Self {
        Self { method: Method::Post, path, bearer: None, body: None }
    }

    #[must_use]
    pub fn bearer(mut self, credential: Credential) -> Self {
        self.bearer = Some(credential);
        self
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw status and body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
}

#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Perform one exchange. Non-2xx statuses are responses, not errors.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

// =============================================================================
// REQWEST
// =============================================================================

#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::header::AUTHORIZATION;

    use super::{ApiRequest, ApiResponse, Method, Transport, TransportError};
    use crate::config::ApiConfig;

    /// `reqwest`-backed transport with request and connect timeouts.
    pub struct HttpTransport {
        http: reqwest::Client,
        config: ApiConfig,
    }

    impl HttpTransport {
        /// # Errors
        ///
        /// Returns [`TransportError::Network`] if the HTTP client cannot be built.
        pub fn new(config: ApiConfig) -> Result<Self, TransportError> {
            let http = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeouts.request_secs))
                .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
                .build()
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(Self { http, config })
        }
    }

    fn map_reqwest_error(e: &reqwest::Error) -> TransportError {
        if e.is_timeout() { TransportError::Timeout } else { TransportError::Network(e.to_string()) }
    }

    #[async_trait(?Send)]
    impl Transport for HttpTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
            let url = self.config.endpoint(request.path);
            let mut builder = match request.method {
                Method::Get => self.http.get(&url),
                Method::Post => self.http.post(&url),
            };
            if let Some(credential) = &request.bearer {
                builder = builder.header(AUTHORIZATION, credential.bearer_header());
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(|e| map_reqwest_error(&e))?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| map_reqwest_error(&e))?;
            Ok(ApiResponse { status, body })
        }
    }
}
