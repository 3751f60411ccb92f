use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{domain::HeroBlueprint, form::FormState};

use super::components::{render_footer, render_hero, render_modal, render_page_frame};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub hero: &'a HeroBlueprint,
    pub hero_visible: bool,
    pub modal_open: bool,
    pub status_message: &'a str,
    pub error_count: usize,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, form: &FormState, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(4)])
        .split(frame.area());

    if ctx.hero_visible {
        render_hero(frame, chunks[0], &ctx);
    } else {
        render_page_frame(frame, chunks[0], ctx.title);
    }
    render_footer(frame, chunks[1], &ctx);

    if ctx.modal_open {
        render_modal(frame, chunks[0], form, &ctx);
    }
}
