//! Window-level effects: blocking notifications and full navigations.
//!
//! TRADE-OFFS
//! ==========
//! Both effects are best-effort browser-only behavior; SSR paths safely
//! no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Raise a blocking modal notification (`window.alert`).
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Perform a full browser navigation to `path`, leaving the SPA.
pub fn navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
