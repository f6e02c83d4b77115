//! Confirmation dialog rendering

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::ConfirmDialog;
use crate::widgets::popup::{centered_popup, clear_area};

pub fn render_confirm(frame: &mut Frame, dialog: &ConfirmDialog) {
    let width = (dialog.message.width() as u16 + 4).max(30);
    let area = centered_popup(frame.area(), width, 5);
    clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm reservation ")
        .border_style(Style::default().fg(Color::Yellow));

    let content = Paragraph::new(vec![
        Line::from(dialog.message.clone()),
        Line::from(""),
        Line::from("[y] Yes    [n] No").style(Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(content, area);
}
