//! Reservation submission
//!
//! The default submit action once the confirmation guard approves: one
//! POST of the form to the service, one outcome back on a channel. Same
//! single-shot worker shape as the suggestion fetch.

use std::sync::mpsc::{self, Receiver};

use reqwest::StatusCode;

/// How the submission settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Service accepted the reservation
    Confirmed,
    /// Service refused (no seats, unknown restaurant, ...)
    Rejected(String),
    /// Transport failure (already reported to the log)
    Failed(String),
}

/// Spawn the submission worker for `POST {base_url}/book/{restaurant_id}`.
///
/// The form fields are sent unmodified; the worker sends exactly one
/// outcome and exits.
pub fn spawn_submit(
    base_url: &str,
    restaurant_id: u32,
    num_people: u32,
    time_slot: &str,
) -> Receiver<SubmitOutcome> {
    let (outcome_tx, outcome_rx) = mpsc::channel();
    let url = booking_url(base_url, restaurant_id);
    let form = vec![
        ("num_people", num_people.to_string()),
        ("reservation_time", time_slot.to_string()),
    ];

    std::thread::spawn(move || {
        let outcome = submit_once(&url, &form);
        if outcome_tx.send(outcome).is_err() {
            log::debug!("submission settled after the page was torn down");
        }
    });

    outcome_rx
}

fn booking_url(base_url: &str, restaurant_id: u32) -> String {
    format!("{}/book/{restaurant_id}", base_url.trim_end_matches('/'))
}

fn submit_once(url: &str, form: &[(&'static str, String)]) -> SubmitOutcome {
    match post_form(url, form) {
        Ok(status) => classify(status),
        Err(err) => {
            log::error!("Error submitting reservation: {err}");
            SubmitOutcome::Failed(err)
        }
    }
}

/// Map the response status to an outcome.
///
/// The service answers a successful booking with a redirect back to the
/// listing page, so redirects count as confirmed.
fn classify(status: StatusCode) -> SubmitOutcome {
    if status.is_success() || status.is_redirection() {
        SubmitOutcome::Confirmed
    } else {
        SubmitOutcome::Rejected(format!("Booking refused by the service ({status})"))
    }
}

/// One POST on a current-thread runtime owned by this worker.
fn post_form(url: &str, form: &[(&'static str, String)]) -> Result<StatusCode, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| err.to_string())?;

    runtime.block_on(async {
        let client = reqwest::Client::new();
        let response = client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(|err| err.to_string())?;
        Ok(response.status())
    })
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod submit_tests;
