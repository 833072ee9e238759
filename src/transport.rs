//! Seam between resources and whatever speaks HTTP to the API
use crate::http::{HttpRequest, HttpResponse};
use crate::Result;

/// Sends one request and hands back the raw response.
///
/// Implementations decide about connections, TLS and retries. Non-2xx
/// statuses are returned as responses, not errors; failing to get any
/// response at all is `Error::Transport`.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}
