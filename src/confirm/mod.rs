//! Booking confirmation dialog
//!
//! Modal guard in front of the reservation submit. While open it captures
//! every key; the form is only sent when the user accepts.

mod render;

pub use render::render_confirm;

use crossterm::event::{KeyCode, KeyEvent};

/// The user's answer to the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Declined,
}

/// Confirmation dialog state
pub struct ConfirmDialog {
    pub message: String,
}

impl ConfirmDialog {
    /// The reservation guard prompt
    pub fn reservation() -> Self {
        Self {
            message: "Are you sure you want to confirm this reservation?".to_string(),
        }
    }

    /// Map a key to a decision. `None` keeps the dialog open.
    pub fn handle_key(&self, key: KeyEvent) -> Option<Decision> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Decision::Accepted),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Decision::Declined),
            _ => None,
        }
    }
}
