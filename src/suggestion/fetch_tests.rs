//! Tests for the suggestion fetch worker

use super::*;
use std::time::Duration;

#[test]
fn test_endpoint_url_joins_path() {
    assert_eq!(
        endpoint_url("http://127.0.0.1:5000"),
        "http://127.0.0.1:5000/suggested-restaurant"
    );
}

#[test]
fn test_endpoint_url_trims_trailing_slash() {
    assert_eq!(
        endpoint_url("http://127.0.0.1:5000/"),
        "http://127.0.0.1:5000/suggested-restaurant"
    );
}

#[test]
fn test_unreachable_server_settles_as_failed() {
    // Port 1 refuses connections immediately; the worker must settle with
    // Failed rather than hang or panic.
    let outcome_rx = spawn_fetch("http://127.0.0.1:1");

    let outcome = outcome_rx
        .recv_timeout(Duration::from_secs(10))
        .expect("worker should send exactly one outcome");

    assert!(matches!(outcome, FetchOutcome::Failed(_)));
}

#[test]
fn test_worker_sends_exactly_one_outcome() {
    let outcome_rx = spawn_fetch("http://127.0.0.1:1");

    outcome_rx
        .recv_timeout(Duration::from_secs(10))
        .expect("first outcome");

    // The worker exits after one send, so the channel disconnects
    assert!(matches!(
        outcome_rx.recv_timeout(Duration::from_secs(5)),
        Err(std::sync::mpsc::RecvTimeoutError::Disconnected)
    ));
}
