use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
};

use crate::form::FormState;

use super::{
    super::view::UiContext, confirmation::render_confirmation, fields::render_fields,
    layout::modal_rect,
};

pub fn render_modal(frame: &mut Frame<'_>, page: Rect, form: &FormState, ctx: &UiContext<'_>) {
    let area = modal_rect(page);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", ctx.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if form.is_confirmation_visible() {
        render_confirmation(frame, inner, form);
    } else {
        render_fields(frame, inner, form);
    }
}
