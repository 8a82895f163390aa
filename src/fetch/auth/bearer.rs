use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::fetch::client::HttpClient;

/// An [`HttpClient`] wrapper that stamps `Authorization: Bearer <token>`
/// onto every request before delegating to the inner client.
///
/// The header value is validated once at construction, so `execute` can
/// never fail on a malformed credential mid-flight.
pub struct Bearer<C> {
    inner: C,
    value: HeaderValue,
}

impl<C> Bearer<C> {
    pub fn new(inner: C, token: &str) -> Result<Self> {
        let value = format!("Bearer {token}")
            .parse()
            .context("bearer token is not a valid header value")?;
        Ok(Self { inner, value })
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for Bearer<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut().insert(AUTHORIZATION, self.value.clone());
        self.inner.execute(req).await
    }
}
