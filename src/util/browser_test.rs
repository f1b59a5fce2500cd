#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn alert_is_noop_but_callable() {
    alert("message");
}

#[test]
fn navigate_is_noop_but_callable() {
    navigate("/myapp/login/");
}
