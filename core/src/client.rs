//! Generic JSON API client.
//!
//! # Design
//! `ApiClient` holds the base address and a transport. `build_request` and
//! `parse_objects` are pure: one turns a resource into an `HttpRequest`, the
//! other classifies an `HttpResponse` and decodes its body. `objects` glues
//! them around a single transport call, so every request resolves exactly
//! once to decoded objects or to one `ApiError`.

use log::debug;
use serde::de::DeserializeOwned;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use url::Url;

use crate::decode::decode_array;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::resource::Resource;
use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base_url: Url,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: Url, transport: T) -> Self {
        Self {
            base_url,
            transport,
        }
    }

    /// Like [`ApiClient::new`], parsing `base_url` first.
    pub fn parse(base_url: &str, transport: T) -> Result<Self, ApiError> {
        Ok(Self::new(Url::parse(base_url)?, transport))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn build_request(&self, resource: &dyn Resource) -> HttpRequest {
        resource.request_with_base_url(&self.base_url)
    }

    /// Classify `response` and decode its body.
    ///
    /// Any status outside `[200, 300)` is `BadStatus`, whatever the body.
    /// A missing body decodes as an empty buffer.
    pub fn parse_objects<D: DeserializeOwned>(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<D>, ApiError> {
        if !response.is_success() {
            return Err(ApiError::BadStatus(response.status));
        }
        let body = response.body.as_deref().unwrap_or_default();
        decode_array(body).ok_or_else(|| {
            debug!(
                "undecodable {} response, content-type {:?}",
                response.status,
                response.header("content-type").unwrap_or("<none>")
            );
            ApiError::CouldNotDecodeJson
        })
    }

    /// Perform the request described by `resource` and decode the result.
    ///
    /// The request is sent exactly once. Dropping the future before it
    /// resolves cancels the in-flight request.
    pub async fn objects<D: DeserializeOwned>(
        &self,
        resource: &(dyn Resource + Sync),
    ) -> Result<Vec<D>, ApiError> {
        let request = self.build_request(resource);
        let response = self.transport.send(request).await?;
        self.parse_objects(response)
    }
}

impl<T: Transport + Clone + 'static> ApiClient<T> {
    /// Run [`ApiClient::objects`] as a task on `runtime`.
    ///
    /// The handle resolves exactly once. Aborting it cancels the request.
    pub fn spawn_objects<D, R>(
        &self,
        resource: R,
        runtime: &Handle,
    ) -> JoinHandle<Result<Vec<D>, ApiError>>
    where
        D: DeserializeOwned + Send + 'static,
        R: Resource + Send + Sync + 'static,
    {
        let client = self.clone();
        runtime.spawn(async move { client.objects(&resource).await })
    }
}
