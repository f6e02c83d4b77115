//! Application state
//!
//! `App::new` is the page's single initialization point: it composes the
//! page from config and runs the load-time behaviors (the one suggestion
//! fetch, initial focus). Nothing global outlives it.

use std::sync::mpsc::{Receiver, TryRecvError};

use crate::booking::{FormState, SubmitOutcome, spawn_submit};
use crate::config::Config;
use crate::confirm::ConfirmDialog;
use crate::notification::{FlashLevel, NotificationState};
use crate::suggestion::SuggestionPanel;

/// Application state
pub struct App {
    /// Suggestion panel, when the page has one
    pub suggestion: Option<SuggestionPanel>,
    /// Booking form, when a restaurant was given
    pub form: Option<FormState>,
    /// Confirmation dialog, while the submit guard is open
    pub confirm: Option<ConfirmDialog>,
    pub notification: NotificationState,
    pub should_quit: bool,
    base_url: String,
    submit_rx: Option<Receiver<SubmitOutcome>>,
}

impl App {
    /// Create a new App instance: compose the page and run the load-time
    /// behaviors.
    pub fn new(config: &Config) -> Self {
        // The suggestion panel issues its single fetch the moment it exists
        let suggestion = config
            .page
            .suggestion_panel
            .then(|| SuggestionPanel::fetch(&config.server.base_url));

        // FormState::new focuses the first control in document order
        let form = config.page.restaurant_id.map(FormState::new);

        Self {
            suggestion,
            form,
            confirm: None,
            notification: NotificationState::new(),
            should_quit: false,
            base_url: config.server.base_url.clone(),
            submit_rx: None,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether a submission is still waiting on the service
    pub fn submit_pending(&self) -> bool {
        self.submit_rx.is_some()
    }

    /// Poll worker channels; called once per event-loop tick.
    pub fn on_tick(&mut self) {
        if let Some(panel) = &mut self.suggestion {
            panel.poll();
        }
        self.poll_submit();
    }

    /// The default submission, sent unmodified once the guard accepts.
    pub(crate) fn dispatch_submit(&mut self) {
        let Some(form) = &self.form else {
            return;
        };
        let Some(num_people) = form.party_size() else {
            return;
        };
        let time_slot = form.time_slot().unwrap_or("Now");

        self.notification.clear();
        self.submit_rx = Some(spawn_submit(
            &self.base_url,
            form.restaurant_id,
            num_people,
            time_slot,
        ));
    }

    fn poll_submit(&mut self) {
        let Some(submit_rx) = &self.submit_rx else {
            return;
        };
        match submit_rx.try_recv() {
            Ok(outcome) => {
                self.submit_rx = None;
                self.apply_submit_outcome(outcome);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.submit_rx = None;
            }
        }
    }

    fn apply_submit_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Confirmed => {
                self.notification
                    .flash(FlashLevel::Success, "Reservation confirmed!");
            }
            SubmitOutcome::Rejected(reason) => {
                self.notification.flash(FlashLevel::Warning, reason);
            }
            SubmitOutcome::Failed(reason) => {
                self.notification.flash(
                    FlashLevel::Danger,
                    format!("Could not submit reservation: {reason}"),
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
