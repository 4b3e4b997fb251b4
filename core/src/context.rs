use crate::{Error, HttpSend, Result};
use bytes::Bytes;
use std::fmt::Debug;
use std::sync::Arc;

/// Context carries the transport used to issue signed requests.
///
/// A fresh `Context` uses a no-op sender that errors when called, so URL
/// generation can be exercised without any network stack configured. Install
/// a real implementation with [`Context::with_http_send`].
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").field("http", &self.http).finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with a no-op transport.
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpSend),
        }
    }

    /// Replace the HTTP client implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Send an http request via the configured transport.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await.map_err(Error::from)
    }
}

/// No-op transport used when none has been configured.
#[derive(Debug)]
struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(
        &self,
        _: http::Request<Bytes>,
    ) -> anyhow::Result<http::Response<Bytes>> {
        Err(anyhow::anyhow!(
            "no http transport configured, use Context::with_http_send"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_http_send_errors() {
        let ctx = Context::new();
        let req = http::Request::get("https://example.com")
            .body(Bytes::new())
            .unwrap();
        let err = ctx.http_send(req).await.unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Unexpected);
    }
}
