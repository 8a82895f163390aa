//! The probe itself: one POST with an empty JSON body, one observed outcome.

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use tracing::debug;

use crate::fetch::HttpClient;

/// What a single probe observed.
///
/// Any HTTP reply is a [`ProbeOutcome::Reply`], whatever the status code:
/// the tool reports what the server said and does not judge it. Every
/// transport fault (refused connection, DNS, TLS, timeout, body read)
/// collapses into [`ProbeOutcome::Failed`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Reply { status: u16, body: String },
    Failed { reason: String },
}

/// Sends one HTTP POST to `url` and returns what happened.
///
/// The request body is always the literal `{}` and the request always
/// carries `Content-Type: application/json`. Authorization is the composed
/// client's concern (see [`crate::fetch::auth::Bearer`]). This function is
/// infallible: faults come back as [`ProbeOutcome::Failed`] holding the
/// fault's description, never as a panic or an `Err`.
#[tracing::instrument(skip(client))]
pub async fn run_probe<C: HttpClient>(client: &C, url: &str) -> ProbeOutcome {
    let req = match build_request(url) {
        Ok(req) => req,
        Err(e) => return ProbeOutcome::Failed { reason: format!("{e:#}") },
    };

    let start = std::time::Instant::now();
    match client.execute(req).await {
        Ok(resp) => {
            let status = resp.status().as_u16();
            debug!(
                status,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "response received"
            );
            match resp.text().await {
                Ok(body) => ProbeOutcome::Reply { status, body },
                Err(e) => failed(e),
            }
        }
        Err(e) => {
            debug!(elapsed_ms = start.elapsed().as_millis() as u64, "request failed");
            failed(e)
        }
    }
}

/// Formats the full error chain. The top-level `reqwest::Error` display can
/// omit the cause (the "operation timed out" detail lives one level down).
fn failed(e: reqwest::Error) -> ProbeOutcome {
    ProbeOutcome::Failed {
        reason: format!("{:#}", anyhow::Error::from(e)),
    }
}

fn build_request(url: &str) -> anyhow::Result<reqwest::Request> {
    let mut req = reqwest::Request::new(reqwest::Method::POST, url.parse()?);
    req.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    *req.body_mut() = Some("{}".into());
    Ok(req)
}
