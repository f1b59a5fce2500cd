use super::*;

fn payload() -> RegistrationPayload {
    RegistrationPayload {
        username: "alice".to_owned(),
        email: "a@example.com".to_owned(),
        password: "hunter2".to_owned(),
        role: "farmer".to_owned(),
        location: "Nairobi".to_owned(),
    }
}

#[test]
fn payload_serializes_to_exactly_the_form_fields() {
    let value = serde_json::to_value(payload()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "username": "alice",
            "email": "a@example.com",
            "password": "hunter2",
            "role": "farmer",
            "location": "Nairobi",
        })
    );
}

#[test]
fn field_error_map_deserializes_to_fields() {
    let errors: ServerErrors =
        serde_json::from_str(r#"{"email": ["This email is already in use."]}"#).unwrap();
    let ServerErrors::Fields(fields) = &errors else {
        panic!("expected field map, got {errors:?}");
    };
    assert_eq!(
        fields.get("email"),
        Some(&vec!["This email is already in use.".to_owned()])
    );
}

#[test]
fn fields_display_orders_by_field_name() {
    let errors: ServerErrors = serde_json::from_str(
        r#"{"username": ["taken"], "email": ["invalid", "already in use"]}"#,
    )
    .unwrap();
    assert_eq!(
        errors.to_string(),
        "email: invalid, already in use; username: taken"
    );
}

#[test]
fn non_map_body_falls_back_to_other() {
    let errors: ServerErrors = serde_json::from_str(r#""registration closed""#).unwrap();
    assert_eq!(
        errors,
        ServerErrors::Other(serde_json::Value::String("registration closed".to_owned()))
    );
    assert_eq!(errors.to_string(), "\"registration closed\"");
}

#[test]
fn nested_body_falls_back_to_other_with_compact_display() {
    let errors: ServerErrors =
        serde_json::from_str(r#"{"detail": {"code": 42}}"#).unwrap();
    assert_eq!(errors.to_string(), r#"{"detail":{"code":42}}"#);
}
