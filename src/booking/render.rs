//! Booking form rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{Control, FormState};

pub fn render_form(frame: &mut Frame, form: &mut FormState, area: Rect) {
    let mut constraints: Vec<Constraint> = form
        .controls
        .iter()
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Length(1));
    let layout = Layout::vertical(constraints).split(area);

    let focused = form.focused;
    for (index, control) in form.controls.iter_mut().enumerate() {
        render_control(frame, control, focused == Some(index), layout[index]);
    }

    let hint = Paragraph::new(" Enter submits · Tab switches fields · Esc quits")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, layout[form.controls.len()]);
}

fn render_control(frame: &mut Frame, control: &mut Control, focused: bool, area: Rect) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", control.label()))
        .border_style(Style::default().fg(border_color));

    match control {
        Control::Input(input) => {
            input.textarea.set_block(block);
            frame.render_widget(&input.textarea, area);
        }
        Control::Select(select) => {
            let content = Paragraph::new(format!("< {} >", select.selected_option())).block(block);
            frame.render_widget(content, area);
        }
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
