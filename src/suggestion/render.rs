//! Suggestion panel rendering
//!
//! The three fixed fragments mirror the service's web alerts: info for a
//! usable suggestion, warning when none is available, danger when the
//! fetch failed.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::fetch::FetchOutcome;
use super::state::{PanelPhase, SuggestionPanel};

pub fn render_suggestion(frame: &mut Frame, panel: &SuggestionPanel, area: Rect) {
    let (line, style) = match &panel.phase {
        PanelPhase::Loading => (
            Line::from("Fetching suggestion..."),
            Style::default().fg(Color::DarkGray),
        ),
        PanelPhase::Settled(outcome) => fragment(outcome),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Suggested restaurant ")
        .border_style(style);

    let content = Paragraph::new(line).block(block).style(style);
    frame.render_widget(content, area);
}

/// The fixed fragment for a settled fetch.
pub(crate) fn fragment(outcome: &FetchOutcome) -> (Line<'static>, Style) {
    match outcome {
        FetchOutcome::Suggestion(suggestion) => (
            Line::from(vec![
                Span::styled("Suggestion: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("Try "),
                Span::styled(
                    suggestion.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    " at {}. It's currently the least crowded!",
                    suggestion.location
                )),
            ]),
            Style::default().fg(Color::Cyan),
        ),
        FetchOutcome::NoSuggestion => (
            Line::from("No suggestions available at the moment."),
            Style::default().fg(Color::Yellow),
        ),
        FetchOutcome::Failed(_) => (
            Line::from("Could not load suggestions."),
            Style::default().fg(Color::Red),
        ),
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
