//! Booking form state
//!
//! Controls are kept in document order: a party-size input first, then a
//! time select. Focus lands on the first control when the page loads and
//! Tab cycles from there.

use ratatui::style::Style;
use tui_textarea::TextArea;

/// A single form control
pub enum Control {
    Input(InputControl),
    Select(SelectControl),
}

impl Control {
    pub fn label(&self) -> &'static str {
        match self {
            Control::Input(input) => input.label,
            Control::Select(select) => select.label,
        }
    }

    /// The value the control would submit
    pub fn value(&self) -> String {
        match self {
            Control::Input(input) => input.text().to_string(),
            Control::Select(select) => select.selected_option().to_string(),
        }
    }
}

/// Free-text input backed by a one-line textarea
pub struct InputControl {
    pub label: &'static str,
    pub textarea: TextArea<'static>,
}

impl InputControl {
    pub fn new(label: &'static str) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());

        Self { label, textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }
}

/// Fixed option list cycled with Up/Down
pub struct SelectControl {
    pub label: &'static str,
    pub options: Vec<&'static str>,
    pub selected: usize,
}

impl SelectControl {
    pub fn new(label: &'static str, options: Vec<&'static str>) -> Self {
        Self {
            label,
            options,
            selected: 0,
        }
    }

    pub fn selected_option(&self) -> &'static str {
        self.options[self.selected]
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }
}

/// Booking form state
pub struct FormState {
    /// Restaurant the form posts to
    pub restaurant_id: u32,
    /// Controls in document order
    pub controls: Vec<Control>,
    /// Index of the focused control, if any
    pub focused: Option<usize>,
}

impl FormState {
    /// Build the booking form for one restaurant and focus its first control.
    pub fn new(restaurant_id: u32) -> Self {
        let controls = vec![
            Control::Input(InputControl::new("Party size")),
            Control::Select(SelectControl::new(
                "Time",
                vec!["Now", "18:00", "18:30", "19:00", "19:30", "20:00"],
            )),
        ];

        let mut form = Self {
            restaurant_id,
            controls,
            focused: None,
        };
        form.focus_first();
        form
    }

    /// Focus the first control in document order; no-op without controls.
    pub fn focus_first(&mut self) {
        self.focused = if self.controls.is_empty() { None } else { Some(0) };
    }

    pub fn focus_next(&mut self) {
        if let Some(focused) = self.focused {
            self.focused = Some((focused + 1) % self.controls.len());
        }
    }

    pub fn focus_prev(&mut self) {
        if let Some(focused) = self.focused {
            self.focused = Some(focused.checked_sub(1).unwrap_or(self.controls.len() - 1));
        }
    }

    pub fn focused_control_mut(&mut self) -> Option<&mut Control> {
        self.focused.map(|index| &mut self.controls[index])
    }

    /// Party size as entered; `None` until it parses as a positive number.
    pub fn party_size(&self) -> Option<u32> {
        self.controls.iter().find_map(|control| match control {
            Control::Input(input) => input.text().trim().parse().ok().filter(|&n| n > 0),
            Control::Select(_) => None,
        })
    }

    /// The selected time slot, if the form has a time select.
    pub fn time_slot(&self) -> Option<&'static str> {
        self.controls.iter().find_map(|control| match control {
            Control::Select(select) => Some(select.selected_option()),
            Control::Input(_) => None,
        })
    }

    /// Rendered height: one bordered line per control plus the key hint.
    pub fn height(&self) -> u16 {
        self.controls.len() as u16 * 3 + 1
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
