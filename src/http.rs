//! Plain HTTP request/response values exchanged with a `Transport`
use std::fmt::Write;

use hyper::header::{AsHeaderName, HeaderMap, HeaderName, HeaderValue};
use hyper::{Method, StatusCode};

pub use hyper::header::{ACCEPT, CONTENT_TYPE, LOCATION};

/// Token header understood by the MidoNet API.
pub const X_AUTH_TOKEN: &str = "x-auth-token";

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URI of the target resource, as handed out by the API.
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, uri: &str, body: Option<String>) -> Self {
        HttpRequest {
            method,
            uri: uri.into(),
            headers: HeaderMap::new(),
            body,
        }
    }

    /// Set `name`, replacing any value it already had.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: Option<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Body if present and not only whitespace.
    pub fn content(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.trim().is_empty())
    }
}

/// Render a request as HTTP/1.1 text for trace logs. Sensitive header
/// values are masked.
pub fn serialize_request(request: &HttpRequest) -> String {
    let mut text = format!("{} {} HTTP/1.1\r\n", request.method, request.uri);

    let content_length = request.body.as_ref().map(|b| b.len().to_string());
    let headers = request.headers.iter().map(|(name, value)| {
        let value = match value.to_str() {
            _ if value.is_sensitive() => "<redacted>",
            Ok(v) => v,
            Err(_) => "<opaque>",
        };
        (name.as_str(), value)
    });
    let length = content_length.as_deref().map(|l| ("content-length", l));

    for (name, value) in headers.chain(length) {
        let _ = write!(text, "{name}: {value}\r\n");
    }
    text.push_str("\r\n");
    text.extend(request.body.as_deref());
    text
}
