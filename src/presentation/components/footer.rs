use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::super::view::UiContext;

/// Status line with the inline-message badge, then the key hints for the
/// active context.
pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let badge = match ctx.error_count {
        0 => Span::styled("[ok]", Style::default().fg(Color::Green)),
        count => Span::styled(
            format!("[! {count}]"),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
    };
    let mut lines = vec![Line::from(vec![
        badge,
        Span::raw(" Status: "),
        Span::styled(ctx.status_message, Style::default().fg(Color::White)),
    ])];
    if let Some(help) = ctx.help {
        lines.push(Line::from(Span::styled(
            format!("Keys: {help}"),
            Style::default().fg(Color::Yellow),
        )));
    }

    let footer = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(footer, area);
}
