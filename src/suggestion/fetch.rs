//! Suggestion fetch worker
//!
//! Issues the page's single request to the suggestion endpoint in a
//! background thread so the UI never blocks. The worker sends exactly one
//! outcome over its channel and exits. There is no retry, timeout, or
//! cancellation; if the transport never settles the receiver never yields.

use std::sync::mpsc::{self, Receiver};

use super::types::{SuggestionResult, decode_suggestion};

/// How the single fetch settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Body decoded and carried a usable suggestion
    Suggestion(SuggestionResult),
    /// Body decoded but no usable name was present
    NoSuggestion,
    /// Transport or decode failure (already reported to the log)
    Failed(String),
}

/// Spawn the fetch worker for `GET {base_url}/suggested-restaurant`.
pub fn spawn_fetch(base_url: &str) -> Receiver<FetchOutcome> {
    let (outcome_tx, outcome_rx) = mpsc::channel();
    let url = endpoint_url(base_url);

    std::thread::spawn(move || {
        let outcome = fetch_once(&url);
        if outcome_tx.send(outcome).is_err() {
            log::debug!("suggestion fetch settled after the page was torn down");
        }
    });

    outcome_rx
}

fn endpoint_url(base_url: &str) -> String {
    format!("{}/suggested-restaurant", base_url.trim_end_matches('/'))
}

/// Perform the request and classify the result.
///
/// HTTP error statuses still carry a decodable body (the service answers
/// "nothing available" with a 404 and an `{"error": ...}` body), so
/// classification happens on the body, not the status line.
fn fetch_once(url: &str) -> FetchOutcome {
    match request_body(url) {
        Ok(body) => match decode_suggestion(&body) {
            Ok(Some(suggestion)) => FetchOutcome::Suggestion(suggestion),
            Ok(None) => FetchOutcome::NoSuggestion,
            Err(err) => {
                log::error!("Error decoding suggested restaurant: {err}");
                FetchOutcome::Failed(err.to_string())
            }
        },
        Err(err) => {
            log::error!("Error fetching suggested restaurant: {err}");
            FetchOutcome::Failed(err)
        }
    }
}

/// One GET on a current-thread runtime owned by this worker.
fn request_body(url: &str) -> Result<String, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| err.to_string())?;

    runtime.block_on(async {
        let response = reqwest::get(url).await.map_err(|err| err.to_string())?;
        response.text().await.map_err(|err| err.to_string())
    })
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod fetch_tests;
