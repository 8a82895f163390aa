use async_trait::async_trait;
use reqwest::{Request, Response};

/// The transport seam: anything that can execute one HTTP request.
///
/// Decorators in [`super::auth`] wrap an implementation to stamp credentials
/// onto the request before it goes out.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
