//! Tests for application state

use super::*;
use crate::booking::Control;
use crate::suggestion::{FetchOutcome, PanelPhase, SuggestionResult};
use crate::test_utils::test_helpers::{
    bare_page, booking_page, enter_party_size, test_config, wait_for_submit_settled,
};

#[test]
fn test_bare_page_has_no_panels() {
    let app = bare_page();

    assert!(app.suggestion.is_none());
    assert!(app.form.is_none());
    assert!(app.confirm.is_none());
    assert!(!app.should_quit());
}

#[test]
fn test_booking_page_has_a_form() {
    let app = booking_page();

    assert!(app.form.is_some());
    assert_eq!(app.form.as_ref().unwrap().restaurant_id, 3);
}

#[test]
fn test_suggestion_panel_exists_when_configured() {
    let app = App::new(&test_config(None, true));

    assert!(app.suggestion.is_some());
}

#[test]
fn test_first_form_control_is_focused_on_load() {
    let app = booking_page();
    let form = app.form.as_ref().unwrap();

    assert_eq!(form.focused, Some(0));
    assert!(matches!(form.controls[0], Control::Input(_)));
}

#[test]
fn test_tick_settles_injected_suggestion_exactly_once() {
    let mut app = bare_page();
    let (tx, rx) = std::sync::mpsc::channel();
    app.suggestion = Some(SuggestionPanel::with_receiver(rx));

    let settled = FetchOutcome::Suggestion(SuggestionResult {
        name: "Luigi's".to_string(),
        location: "Main St".to_string(),
    });
    tx.send(settled.clone()).unwrap();
    tx.send(FetchOutcome::Failed("late".to_string())).unwrap();

    app.on_tick();
    app.on_tick();

    let panel = app.suggestion.as_ref().unwrap();
    assert_eq!(panel.phase, PanelPhase::Settled(settled));
}

#[test]
fn test_confirmed_outcome_flashes_success() {
    let mut app = booking_page();

    app.apply_submit_outcome(SubmitOutcome::Confirmed);

    let (level, message) = app.notification.current().unwrap();
    assert_eq!(level, FlashLevel::Success);
    assert_eq!(message, "Reservation confirmed!");
}

#[test]
fn test_rejected_outcome_flashes_warning() {
    let mut app = booking_page();

    app.apply_submit_outcome(SubmitOutcome::Rejected("no seats".to_string()));

    let (level, message) = app.notification.current().unwrap();
    assert_eq!(level, FlashLevel::Warning);
    assert_eq!(message, "no seats");
}

#[test]
fn test_failed_outcome_flashes_danger() {
    let mut app = booking_page();

    app.apply_submit_outcome(SubmitOutcome::Failed("connection refused".to_string()));

    let (level, message) = app.notification.current().unwrap();
    assert_eq!(level, FlashLevel::Danger);
    assert!(message.contains("Could not submit reservation"));
}

#[test]
fn test_dispatch_without_party_size_sends_nothing() {
    let mut app = booking_page();

    app.dispatch_submit();

    assert!(!app.submit_pending());
}

#[test]
fn test_dispatched_submission_settles_into_a_flash() {
    let mut app = booking_page();
    enter_party_size(&mut app, "4");

    app.dispatch_submit();
    assert!(app.submit_pending());

    assert!(wait_for_submit_settled(&mut app, 10_000));
    let (level, _) = app.notification.current().unwrap();
    assert_eq!(level, FlashLevel::Danger);
}
