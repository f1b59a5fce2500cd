//! Utility helpers for browser-environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate cookie-jar and window access from page logic so
//! the decision paths stay pure and host-testable.

pub mod browser;
pub mod cookie;
