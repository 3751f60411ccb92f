use ratatui::layout::{Constraint, Direction, Layout, Rect};

const MODAL_MAX_WIDTH: u16 = 72;

pub fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let inner = vertical[1];
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(inner.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(inner);
    horizontal[1]
}

/// Centered modal area; narrow screens get the whole page.
pub fn modal_rect(area: Rect) -> Rect {
    if area.width <= MODAL_MAX_WIDTH + 4 {
        return area;
    }
    popup_rect(area, MODAL_MAX_WIDTH, area.height.saturating_sub(2).max(3))
}
