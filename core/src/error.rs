//! Error types for the countries API client.
//!
//! # Design
//! `ApiError` is what crosses the client boundary. The first three variants
//! classify the outcome of a single request: the body did not decode, the
//! server answered with a non-2xx status, or the transport never produced a
//! response. `NotFound` is raised one level up by the countries binding when
//! a name lookup decodes to an empty list. `InvalidBaseUrl` can only happen
//! while constructing a client from a string.

use thiserror::Error;

/// Errors returned by `ApiClient` and the typed countries operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The 2xx response body was not a JSON array of the expected objects.
    #[error("could not decode JSON")]
    CouldNotDecodeJson,

    /// The server answered with a status outside `[200, 300)`.
    #[error("bad status {0}")]
    BadStatus(u16),

    /// The request never produced an HTTP response.
    #[error(transparent)]
    Other(#[from] TransportError),

    /// A lookup by exact name matched no country.
    #[error("no country named {0:?}")]
    NotFound(String),

    /// The base address given to the client could not be parsed.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Failures of the underlying transport, before any status is known.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    /// The request could not be built or sent as described, e.g. a URL the
    /// transport does not understand.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("transport error: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}
