//! Booking form key handling

use crossterm::event::{KeyCode, KeyEvent};

use super::state::{Control, FormState};

/// What the form wants the page to do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormReaction {
    /// Key consumed by editing or focus navigation
    Handled,
    /// Key was not for the form
    Ignored,
    /// Submit requested (Enter anywhere inside the form)
    SubmitRequested,
}

pub fn handle_form_key(form: &mut FormState, key: KeyEvent) -> FormReaction {
    match key.code {
        KeyCode::Enter => return FormReaction::SubmitRequested,
        KeyCode::Tab => {
            form.focus_next();
            return FormReaction::Handled;
        }
        KeyCode::BackTab => {
            form.focus_prev();
            return FormReaction::Handled;
        }
        _ => {}
    }

    match form.focused_control_mut() {
        Some(Control::Input(input)) => match key.code {
            KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End => {
                input.textarea.input(key);
                FormReaction::Handled
            }
            _ => FormReaction::Ignored,
        },
        Some(Control::Select(select)) => match key.code {
            KeyCode::Up => {
                select.select_prev();
                FormReaction::Handled
            }
            KeyCode::Down => {
                select.select_next();
                FormReaction::Handled
            }
            _ => FormReaction::Ignored,
        },
        None => FormReaction::Ignored,
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
