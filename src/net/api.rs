//! HTTP transport for the account API.
//!
//! Client-side (hydrate): real POST via `gloo-net`. Server-side (SSR): stub
//! returning an error since submissions only happen in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::submit::{SubmitRequest, SubmitResponse};

/// Fixed path of the user-creation endpoint.
pub const USERS_ENDPOINT: &str = "/myapp/api/users/";

/// Header the server checks the CSRF token against.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// POST a prepared registration request to [`USERS_ENDPOINT`].
///
/// The token header is attached only when a token was resolved; an absent
/// cookie goes out token-less and the server's rejection flows back through
/// the normal error path. No timeout or retry beyond transport defaults.
///
/// # Errors
///
/// Returns an error string when the request could not be built or sent, or
/// when the response body could not be read.
pub async fn send_create_user(request: SubmitRequest) -> Result<SubmitResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut builder = gloo_net::http::Request::post(USERS_ENDPOINT)
            .header("Content-Type", "application/json");
        if let Some(token) = request.csrf_token.as_deref() {
            builder = builder.header(CSRF_HEADER, token);
        }
        let response = builder
            .body(request.body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(SubmitResponse { status, body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
