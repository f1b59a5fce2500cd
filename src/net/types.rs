//! Wire DTOs for the client/server registration boundary.
//!
//! DESIGN
//! ======
//! The payload intentionally stays a flat map of string fields so it matches
//! the form inputs one-to-one; the server performs all real validation and
//! reports back per-field messages.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Account details collected by the registration form.
///
/// Keys and values go over the wire exactly as submitted; no coercion or
/// client-side normalization beyond what the browser inputs enforce.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    /// Unique display handle.
    pub username: String,
    /// Login email; uniqueness is checked server-side.
    pub email: String,
    /// Plaintext password, hashed by the server.
    pub password: String,
    /// Marketplace role: `"farmer"`, `"buyer"`, or `"transporter"`.
    pub role: String,
    /// Free-form physical location (e.g. `"Nairobi"`).
    pub location: String,
}

/// Structured error body returned by the account API on rejection.
///
/// The backend usually answers with a field-error map (`{"email": ["This
/// email is already in use."]}`), but the shape is its own to choose, so any
/// other JSON value is carried through verbatim.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ServerErrors {
    /// Field name to list of messages, ordered by field name for display.
    Fields(BTreeMap<String, Vec<String>>),
    /// Any other JSON shape the server returns.
    Other(serde_json::Value),
}

impl fmt::Display for ServerErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerErrors::Fields(fields) => {
                let mut first = true;
                for (field, messages) in fields {
                    if !first {
                        write!(f, "; ")?;
                    }
                    first = false;
                    write!(f, "{field}: {}", messages.join(", "))?;
                }
                Ok(())
            }
            ServerErrors::Other(value) => write!(f, "{value}"),
        }
    }
}
