use std::time::Duration;

use async_trait::async_trait;

use super::client::HttpClient;

/// Plain [`HttpClient`] backed by a [`reqwest::Client`] with a bounded
/// round-trip budget.
///
/// `timeout` caps the whole exchange, connect included, so a probe against a
/// dead host returns within the budget instead of hanging.
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self(client))
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}
