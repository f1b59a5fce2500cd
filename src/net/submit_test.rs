use super::*;
use futures::executor::block_on;

fn payload() -> RegistrationPayload {
    RegistrationPayload {
        username: "alice".to_owned(),
        email: "a@example.com".to_owned(),
        password: "hunter2".to_owned(),
        role: "buyer".to_owned(),
        location: "Nakuru".to_owned(),
    }
}

#[test]
fn success_statuses_classify_as_accepted_and_ignore_the_body() {
    assert_eq!(classify_response(200, "ignored"), SubmitOutcome::Accepted);
    assert_eq!(classify_response(201, ""), SubmitOutcome::Accepted);
    assert_eq!(classify_response(299, "{not json"), SubmitOutcome::Accepted);
}

#[test]
fn non_success_json_body_classifies_as_rejected() {
    let outcome = classify_response(400, r#"{"email": ["already exists"]}"#);
    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(errors.to_string(), "email: already exists");
}

#[test]
fn non_success_non_json_body_routes_to_transport_failure() {
    let outcome = classify_response(502, "<html>bad gateway</html>");
    let SubmitOutcome::TransportFailed(detail) = outcome else {
        panic!("expected transport failure, got {outcome:?}");
    };
    assert!(detail.contains("status 502"));
}

#[test]
fn statuses_outside_the_success_range_are_not_accepted() {
    assert_ne!(classify_response(199, "null"), SubmitOutcome::Accepted);
    assert_ne!(classify_response(300, "null"), SubmitOutcome::Accepted);
}

#[test]
fn driver_hands_the_transport_the_serialized_payload_and_token() {
    let expected = payload();
    let outcome = block_on(run_submission(&expected, Some("tok123".to_owned()), |request| {
        assert_eq!(request.csrf_token.as_deref(), Some("tok123"));
        let sent: RegistrationPayload = serde_json::from_str(&request.body).unwrap();
        assert_eq!(sent, expected);
        async move {
            Ok(SubmitResponse {
                status: 201,
                body: String::new(),
            })
        }
    }));
    assert_eq!(outcome, SubmitOutcome::Accepted);
}

#[test]
fn driver_forwards_an_absent_token_as_absent() {
    let outcome = block_on(run_submission(&payload(), None, |request| {
        assert_eq!(request.csrf_token, None);
        async move {
            Ok(SubmitResponse {
                status: 201,
                body: String::new(),
            })
        }
    }));
    assert_eq!(outcome, SubmitOutcome::Accepted);
}

#[test]
fn transport_errors_settle_as_transport_failed() {
    let outcome = block_on(run_submission(&payload(), None, |_request| async move {
        Err("connection refused".to_owned())
    }));
    assert_eq!(
        outcome,
        SubmitOutcome::TransportFailed("connection refused".to_owned())
    );
}
