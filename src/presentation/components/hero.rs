use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::super::view::UiContext;

const CALL_TO_ACTION: Color = Color::Rgb(0xfe, 0x14, 0x2f);

pub fn render_hero(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            ctx.hero.heading.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(ctx.hero.text.clone()),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", ctx.hero.call_to_action),
            Style::default()
                .fg(Color::White)
                .bg(CALL_TO_ACTION)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(ctx.title.to_string())
                .borders(Borders::ALL),
        );
    frame.render_widget(hero, area);
}

pub fn render_page_frame(frame: &mut Frame<'_>, area: Rect, title: &str) {
    frame.render_widget(
        Block::default().title(title.to_string()).borders(Borders::ALL),
        area,
    );
}
