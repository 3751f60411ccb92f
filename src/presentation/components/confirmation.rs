use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::form::FormState;

const CLOSE_BUTTON: Color = Color::Rgb(0xfe, 0x14, 0x2f);

pub fn render_confirmation(frame: &mut Frame<'_>, area: Rect, form: &FormState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(area);

    let message = Paragraph::new(Line::from(Span::styled(
        form.confirmation.message.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(message, rows[1]);

    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", form.confirmation.close_label),
        Style::default().fg(Color::White).bg(CLOSE_BUTTON),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(button, rows[3]);
}
