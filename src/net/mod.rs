//! Networking modules for the user-creation API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `submit` drives a submission attempt to
//! its outcome, and `api` is the gloo-net transport the driver is wired to
//! in the browser.

pub mod api;
pub mod submit;
pub mod types;
