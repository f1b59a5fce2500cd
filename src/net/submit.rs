//! Submission driver: one registration attempt from payload to outcome.
//!
//! DESIGN
//! ======
//! The driver is generic over its transport so pages exercise the real
//! gloo-net call in the browser while tests substitute closures. The CSRF
//! token is threaded in as an explicit value; resolving it is the caller's
//! job, once per attempt, so a rotated cookie is always picked up.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::net::types::{RegistrationPayload, ServerErrors};

/// A prepared user-creation request, ready for a transport to send.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitRequest {
    /// CSRF token resolved for this attempt; `None` sends no token header
    /// and defers the rejection to the server.
    pub csrf_token: Option<String>,
    /// JSON-serialized registration payload.
    pub body: String,
}

/// Raw response a transport hands back to the driver.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text; ignored on success statuses.
    pub body: String,
}

/// How a single submission attempt settled. Exactly one per attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The server created the account (HTTP 2xx; body ignored).
    Accepted,
    /// The server rejected the registration with a structured error body.
    Rejected(ServerErrors),
    /// The request never completed or its response could not be read.
    /// Carries the diagnostic detail; user-facing text stays generic.
    TransportFailed(String),
}

/// Classify a transport response into an outcome.
///
/// Non-success bodies are expected to be JSON; a body that fails to parse
/// routes to the transport-failure path rather than surfacing raw text.
pub fn classify_response(status: u16, body: &str) -> SubmitOutcome {
    if (200..=299).contains(&status) {
        return SubmitOutcome::Accepted;
    }
    match serde_json::from_str::<ServerErrors>(body) {
        Ok(errors) => SubmitOutcome::Rejected(errors),
        Err(e) => SubmitOutcome::TransportFailed(format!(
            "error response was not valid JSON (status {status}): {e}"
        )),
    }
}

/// Run one submission attempt through `send`.
///
/// `send` receives the prepared request and yields the raw response or a
/// transport error string. Serialization failures settle the attempt as
/// `TransportFailed` instead of propagating.
pub async fn run_submission<S, Fut>(
    payload: &RegistrationPayload,
    csrf_token: Option<String>,
    send: S,
) -> SubmitOutcome
where
    S: FnOnce(SubmitRequest) -> Fut,
    Fut: Future<Output = Result<SubmitResponse, String>>,
{
    let body = match serde_json::to_string(payload) {
        Ok(body) => body,
        Err(e) => return SubmitOutcome::TransportFailed(e.to_string()),
    };
    let request = SubmitRequest { csrf_token, body };
    match send(request).await {
        Ok(response) => classify_response(response.status, &response.body),
        Err(e) => SubmitOutcome::TransportFailed(e),
    }
}
