//! Pluggable transports that execute an `HttpRequest`.

use std::future::Future;

use log::debug;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Sends one request and returns whatever response came back.
///
/// Every status is a response, not an error: status interpretation belongs
/// to `ApiClient`. Dropping the returned future must abort the request.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

/// A [`Transport`] backed by [`reqwest`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// A transport with reqwest's default settings (no request timeout).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!("{} {}", request.method.as_str(), request.url);

        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
        };
        let response = self
            .client
            .request(method, &request.url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        debug!("{} {} -> {status}", request.method.as_str(), request.url);

        Ok(HttpResponse {
            status,
            headers,
            body: Some(body),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else if err.is_builder() {
        TransportError::InvalidRequest(err.to_string())
    } else {
        TransportError::Other(Box::new(err))
    }
}
