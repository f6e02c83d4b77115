//! Suggestion panel state
//!
//! Tracks the single fetch from spawn to settlement. The receiver is
//! dropped the moment an outcome arrives, so the panel cannot mutate a
//! second time.

use std::sync::mpsc::{Receiver, TryRecvError};

use super::fetch::{FetchOutcome, spawn_fetch};

/// What the panel currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelPhase {
    /// Request outstanding; the initial placeholder is visible
    Loading,
    /// The fetch settled
    Settled(FetchOutcome),
}

/// Suggestion panel state
pub struct SuggestionPanel {
    pub phase: PanelPhase,
    outcome_rx: Option<Receiver<FetchOutcome>>,
}

impl SuggestionPanel {
    /// Create the panel and issue the page's one fetch.
    pub fn fetch(base_url: &str) -> Self {
        Self::with_receiver(spawn_fetch(base_url))
    }

    /// Create a panel waiting on an existing channel.
    ///
    /// Lets tests settle the panel without a network.
    pub fn with_receiver(outcome_rx: Receiver<FetchOutcome>) -> Self {
        Self {
            phase: PanelPhase::Loading,
            outcome_rx: Some(outcome_rx),
        }
    }

    /// Poll the fetch channel; settles the phase at most once.
    pub fn poll(&mut self) {
        let Some(outcome_rx) = &self.outcome_rx else {
            return;
        };
        match outcome_rx.try_recv() {
            Ok(outcome) => {
                self.phase = PanelPhase::Settled(outcome);
                self.outcome_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Worker died without sending; keep the placeholder, stop polling
                self.outcome_rx = None;
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, PanelPhase::Settled(_))
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
