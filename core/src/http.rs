use anyhow::Result;
use bytes::Bytes;
use std::fmt::Debug;

/// HttpSend is used to issue the signed requests built by this crate.
///
/// Implementations decide transport policy (timeouts, proxies, TLS); the
/// client only cares about getting a response body or an error back.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}
