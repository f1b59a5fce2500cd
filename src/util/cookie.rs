//! CSRF cookie access.
//!
//! Reads the session layer's `csrftoken` cookie from the browser cookie jar.
//! The value is resolved fresh for every submission attempt since the server
//! may rotate it between page load and submit. Requires a browser
//! environment; SSR paths return `None`.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Cookie the backend issues its CSRF secret under.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Look up `name` in a raw `Cookie` header string.
///
/// The header is a `;`-separated sequence of `key=value` pairs with
/// arbitrary whitespace around each pair. Returns the percent-decoded value
/// of the first pair whose key equals `name`, or `None` when the header is
/// empty or no pair matches. `name` must not contain `=` or `;`.
pub fn cookie_from_header(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .find_map(|entry| entry.trim().strip_prefix(name)?.strip_prefix('='))
        .and_then(|raw| urlencoding::decode(raw).ok())
        .map(std::borrow::Cow::into_owned)
}

/// Read the CSRF token from `document.cookie`.
///
/// Returns `None` on the server or when the cookie is absent. An absent
/// token is forwarded as-is; the server rejects token-less requests itself.
pub fn csrf_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let header = document.cookie().ok()?;
        cookie_from_header(&header, CSRF_COOKIE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
