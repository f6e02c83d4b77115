//! Event handling
//!
//! Dispatch order mirrors the page's capture order: the confirmation
//! dialog owns every key while open, then global keys, then the focused
//! form control.

use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::App;
use crate::booking::{FormReaction, handle_form_key};
use crate::confirm::{ConfirmDialog, Decision};
use crate::notification::FlashLevel;

impl App {
    /// Pump one event-loop iteration: a key event, if one is waiting, then
    /// the worker channel polls.
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                _ => {}
            }
        }
        self.on_tick();
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // The confirmation dialog is modal: it sees every key first
        if let Some(dialog) = &self.confirm {
            match dialog.handle_key(key) {
                Some(Decision::Accepted) => {
                    self.confirm = None;
                    self.dispatch_submit();
                }
                Some(Decision::Declined) => {
                    self.confirm = None;
                }
                None => {}
            }
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        if let Some(form) = &mut self.form {
            match handle_form_key(form, key) {
                FormReaction::SubmitRequested => self.request_submit(),
                FormReaction::Handled | FormReaction::Ignored => {}
            }
        }
    }

    /// Handle keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Esc quits when no dialog is open (the dialog claims it otherwise)
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return true;
        }

        false
    }

    /// Behavior of the submit key: nothing is sent yet, the guard opens.
    fn request_submit(&mut self) {
        if self.submit_pending() {
            return;
        }

        let Some(form) = &self.form else {
            return;
        };

        // An unfilled form never reaches the guard, like a form failing
        // native validation before its submit event fires
        if form.party_size().is_none() {
            self.notification
                .flash(FlashLevel::Warning, "Enter a party size first.");
            return;
        }

        self.confirm = Some(ConfirmDialog::reservation());
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
