//! Tests for reservation submission

use super::*;
use std::time::Duration;

#[test]
fn test_booking_url_includes_restaurant() {
    assert_eq!(
        booking_url("http://127.0.0.1:5000", 7),
        "http://127.0.0.1:5000/book/7"
    );
}

#[test]
fn test_booking_url_trims_trailing_slash() {
    assert_eq!(
        booking_url("http://127.0.0.1:5000/", 7),
        "http://127.0.0.1:5000/book/7"
    );
}

#[test]
fn test_success_status_is_confirmed() {
    assert_eq!(classify(StatusCode::OK), SubmitOutcome::Confirmed);
    assert_eq!(classify(StatusCode::CREATED), SubmitOutcome::Confirmed);
}

#[test]
fn test_redirect_status_is_confirmed() {
    assert_eq!(classify(StatusCode::FOUND), SubmitOutcome::Confirmed);
}

#[test]
fn test_client_error_is_rejected() {
    let outcome = classify(StatusCode::CONFLICT);
    match outcome {
        SubmitOutcome::Rejected(reason) => assert!(reason.contains("409")),
        _ => panic!("Expected rejection"),
    }
}

#[test]
fn test_server_error_is_rejected() {
    assert!(matches!(
        classify(StatusCode::INTERNAL_SERVER_ERROR),
        SubmitOutcome::Rejected(_)
    ));
}

#[test]
fn test_unreachable_server_settles_as_failed() {
    let outcome_rx = spawn_submit("http://127.0.0.1:1", 3, 4, "Now");

    let outcome = outcome_rx
        .recv_timeout(Duration::from_secs(10))
        .expect("worker should send exactly one outcome");

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
}
