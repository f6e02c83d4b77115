//! Page rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use super::state::App;
use crate::booking::render_form;
use crate::confirm::render_confirm;
use crate::notification::render_notification;
use crate::suggestion::render_suggestion;

impl App {
    /// Render the page: header, the optional panels, the flash line, and
    /// the dialog overlay on top.
    pub fn render(&mut self, frame: &mut Frame) {
        let mut constraints = vec![Constraint::Length(1)];
        if self.suggestion.is_some() {
            constraints.push(Constraint::Length(3));
        }
        if let Some(form) = &self.form {
            constraints.push(Constraint::Length(form.height()));
        }
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));

        let layout = Layout::vertical(constraints).split(frame.area());
        let mut slot = 0;

        render_header(frame, layout[slot]);
        slot += 1;

        if let Some(panel) = &self.suggestion {
            render_suggestion(frame, panel, layout[slot]);
            slot += 1;
        }

        if let Some(form) = &mut self.form {
            render_form(frame, form, layout[slot]);
        }

        render_notification(frame, &self.notification, layout[layout.len() - 1]);

        if let Some(dialog) = &self.confirm {
            render_confirm(frame, dialog);
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(" crowdless · book a table").style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(header, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
