//! Endpoint descriptions independent of the base address.
//!
//! A `Resource` only knows its path and query parameters. Combining it with
//! a base URL yields the `HttpRequest` the client sends.

use std::collections::BTreeMap;

use url::{form_urlencoded, Url};

use crate::http::{HttpMethod, HttpRequest};

/// Separator used when several values travel in one query parameter.
pub const MULTI_VALUE_SEPARATOR: &str = ";";

/// An API endpoint: a path relative to the base address plus query
/// parameters.
pub trait Resource {
    fn path(&self) -> String;

    fn parameters(&self) -> BTreeMap<String, String>;

    /// Build the GET request for this resource under `base_url`.
    ///
    /// Path segments are appended to the base path and percent-encoded.
    /// Parameters are form-encoded in key order. The path is not validated: a
    /// base that cannot carry a path is used untouched and the transport
    /// reports the problem when the request is sent.
    fn request_with_base_url(&self, base_url: &Url) -> HttpRequest {
        let mut url = base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(self.path().split('/'));
        }

        let parameters = self.parameters();
        if parameters.is_empty() {
            url.set_query(None);
        } else {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(parameters.iter())
                .finish();
            url.set_query(Some(&query));
        }

        HttpRequest {
            method: HttpMethod::Get,
            url: url.into(),
        }
    }
}

/// Join several values into one query parameter value.
pub fn join_values<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| value.as_ref())
        .collect::<Vec<&str>>()
        .join(MULTI_VALUE_SEPARATOR)
}
