//! Client core for the REST Countries API.
//!
//! # Overview
//! Fetches a country's bordering countries and exposes them as display-ready
//! `Border` values.
//!
//! # Design
//! - A `Resource` describes an endpoint (path + query); `ApiClient` turns it
//!   into an `HttpRequest`, sends it through a `Transport`, classifies the
//!   `HttpResponse` and decodes the JSON body.
//! - Building and parsing are pure functions over plain data, so they can be
//!   tested without a network. `ReqwestTransport` does the real I/O.
//! - `CountriesClient` binds the generic client to the countries endpoints.
//! - `BordersViewModel` chains the two lookups, never surfaces an error, and
//!   computes its result at most once.

pub mod client;
pub mod countries;
pub mod decode;
pub mod error;
pub mod http;
pub mod resource;
pub mod transport;
pub mod view_model;

pub use client::ApiClient;
pub use countries::{countries_client, CountriesApi, CountriesClient, Country, COUNTRIES_BASE_URL};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use resource::Resource;
pub use transport::{ReqwestTransport, Transport};
pub use view_model::{Border, BordersViewModel};
