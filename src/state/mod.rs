//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain state structs driven through Leptos signals by the page layer; the
//! structs themselves stay framework-free so transitions test host-side.

pub mod submission;
