use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use super::state::{FlashLevel, NotificationState};

pub fn render_notification(frame: &mut Frame, notification: &NotificationState, area: Rect) {
    let Some((level, message)) = notification.current() else {
        return;
    };

    let color = match level {
        FlashLevel::Success => Color::Green,
        FlashLevel::Warning => Color::Yellow,
        FlashLevel::Danger => Color::Red,
    };

    let content = Paragraph::new(format!(" {message}")).style(Style::default().fg(color));
    frame.render_widget(content, area);
}
