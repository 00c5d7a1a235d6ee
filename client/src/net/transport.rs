//! Browser `fetch` transport via `gloo-net`.
//!
//! Client-side (csr): real HTTP exchanges raced against a `gloo-timers`
//! timeout, since fetch has no timeout of its own.
//! Native builds: a stub that reports a network failure, so the session
//! store settles signed-out instead of hanging.
//!
//! ERROR HANDLING
//! ==============
//! Only failures to obtain a response are errors. Non-2xx statuses come back
//! as `ApiResponse` and are interpreted by the session crate's auth client.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use session::ApiConfig;
use session::transport::{ApiRequest, ApiResponse, Transport, TransportError};

#[cfg(not(feature = "csr"))]
const UNAVAILABLE_MESSAGE: &str = "browser fetch is unavailable in this build";

pub struct GlooTransport {
    config: ApiConfig,
}

impl GlooTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

/// Whole-exchange timeout in the milliseconds `TimeoutFuture` expects.
#[cfg(any(test, feature = "csr"))]
fn timeout_millis(config: &ApiConfig) -> u32 {
    u32::try_from(config.timeouts.request_secs.saturating_mul(1000)).unwrap_or(u32::MAX)
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};

            let exchange = Box::pin(self.exchange(request));
            let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_millis(&self.config)));
            match select(exchange, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(TransportError::Timeout),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &self.config);
            Err(TransportError::Network(UNAVAILABLE_MESSAGE.to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
impl GlooTransport {
    async fn exchange(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        use gloo_net::http::Request;
        use session::transport::Method;

        let url = self.config.endpoint(request.path);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        if let Some(credential) = &request.bearer {
            builder = builder.header("Authorization", &credential.bearer_header());
        }
        let sent = match &request.body {
            Some(body) => builder.json(body).map_err(network)?.send().await,
            None => builder.send().await,
        };
        let response = sent.map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;
        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(feature = "csr")]
fn network(e: gloo_net::Error) -> TransportError {
    TransportError::Network(e.to_string())
}
