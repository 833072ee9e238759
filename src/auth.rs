use std::fmt;
use std::sync::Arc;

use hyper::header::{HeaderName, HeaderValue};
use log::error;

use crate::http::{HttpRequest, X_AUTH_TOKEN};
use crate::transport::Transport;
use crate::{Error, Result};

/// Session context shared by every resource fetched through it.
///
/// Holds the API root, an already-issued token and the transport. Obtaining
/// or refreshing the token is up to the caller.
#[derive(Clone)]
pub struct Auth {
    base_uri: Option<String>,
    token: Option<HeaderValue>,
    transport: Arc<dyn Transport>,
}

impl Auth {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            base_uri: None,
            token: None,
            transport,
        }
    }

    pub fn with_base_uri<S: AsRef<str>>(mut self, base_uri: S) -> Self {
        self.base_uri = Some(base_uri.as_ref().trim_end_matches('/').into());
        self
    }

    /// Fails with `Error::Config` when the token is not a valid header value.
    pub fn with_token<S: AsRef<str>>(mut self, token: S) -> Result<Self> {
        let mut value = HeaderValue::from_str(token.as_ref()).map_err(|e| {
            error!("Token is not a valid header value: {e}");
            Error::Config(format!("invalid token: {e}"))
        })?;
        value.set_sensitive(true);
        self.token = Some(value);
        Ok(self)
    }

    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().and_then(|t| t.to_str().ok())
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Absolute URIs pass through; anything else is taken relative to the
    /// API root.
    pub fn resolve(&self, path: &str) -> Result<String> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(path.to_string());
        }
        match &self.base_uri {
            Some(base) => Ok(format!("{base}/{}", path.trim_start_matches('/'))),
            None => {
                error!("No API root to resolve {path} against");
                Err(Error::Config(format!("relative path {path} without api_uri")))
            }
        }
    }

    pub(crate) fn authorize(&self, request: HttpRequest) -> HttpRequest {
        match &self.token {
            Some(token) => {
                request.with_header(HeaderName::from_static(X_AUTH_TOKEN), token.clone())
            }
            None => request,
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("base_uri", &self.base_uri)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::http::{HttpResponse, HttpRequest};
    use hyper::Method;

    struct NoTransport;

    #[async_trait::async_trait]
    impl Transport for NoTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
            Err(crate::err_transport!("not connected: {}", request.uri))
        }
    }

    #[test]
    fn test_resolve() {
        let auth = Auth::new(Arc::new(NoTransport)).with_base_uri("http://api/midonet-api/");
        assert_eq!(
            auth.resolve("/qos_policies").unwrap(),
            "http://api/midonet-api/qos_policies"
        );
        assert_eq!(
            auth.resolve("qos_policies/p1").unwrap(),
            "http://api/midonet-api/qos_policies/p1"
        );
        assert_eq!(
            auth.resolve("https://other/qos_policies").unwrap(),
            "https://other/qos_policies"
        );

        let auth = Auth::new(Arc::new(NoTransport));
        assert!(matches!(auth.resolve("qos_policies"), Err(Error::Config(_))));
    }

    #[test]
    fn test_token() {
        let auth = Auth::new(Arc::new(NoTransport)).with_token("abc").unwrap();
        assert_eq!(auth.token(), Some("abc"));
        assert!(!format!("{auth:?}").contains("abc"));

        let request = auth.authorize(HttpRequest::new(Method::GET, "/x", None));
        assert_eq!(request.header(X_AUTH_TOKEN), Some("abc"));

        assert!(matches!(
            Auth::new(Arc::new(NoTransport)).with_token("bad\ntoken"),
            Err(Error::Config(_))
        ));
    }
}
