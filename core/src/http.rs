//! HTTP transport types shared by request building and response parsing.
//!
//! # Design
//! Requests and responses are plain data. `ApiClient` builds an
//! `HttpRequest` from a resource and interprets an `HttpResponse`; whatever
//! sits in between (a `Transport`, or a test harness driving its own HTTP
//! library) only moves bytes. Both halves stay deterministic and can be
//! tested without a network.

use bytes::Bytes;

/// HTTP method for a request. The countries API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is fully qualified: base address, resource path and encoded query.
/// Requests to the countries API carry no headers and no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
}

/// An HTTP response described as plain data.
///
/// `body` is `None` when the transport delivered no body at all. The client
/// treats that the same as an empty buffer.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl HttpResponse {
    /// Whether `status` lies in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, headers: &[(&str, &str)]) -> HttpResponse {
        HttpResponse {
            status,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: None,
        }
    }

    #[test]
    fn success_range_is_half_open() {
        assert!(response(200, &[]).is_success());
        assert!(response(299, &[]).is_success());
        assert!(!response(199, &[]).is_success());
        assert!(!response(300, &[]).is_success());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let resp = response(
            200,
            &[("Content-Type", "application/json"), ("content-type", "text/plain")],
        );
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(resp.header("etag"), None);
    }
}
