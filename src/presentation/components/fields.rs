use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};
use textwrap::wrap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    domain::InputKind,
    form::{FieldState, FieldValue, FormState, SubmitColor},
};

/// Submit button background once every tracked field is valid.
pub const AFFIRMATIVE: Color = Color::Rgb(0x27, 0x9e, 0x7a);
pub const NEUTRAL: Color = Color::Gray;

pub fn submit_background(color: SubmitColor) -> Color {
    match color {
        SubmitColor::Affirmative => AFFIRMATIVE,
        SubmitColor::Neutral => NEUTRAL,
    }
}

pub fn render_fields(frame: &mut Frame<'_>, area: Rect, form: &FormState) {
    let content_width = area.width.saturating_sub(6).max(4);
    let mut items: Vec<ListItem<'static>> = form
        .fields()
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            ListItem::new(field_lines(field, idx == form.focus(), content_width))
        })
        .collect();
    items.push(ListItem::new(submit_lines(form)));

    let mut list_state = ListState::default();
    list_state.select(Some(form.focus()));

    let list = List::new(items).highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn field_lines(field: &FieldState, is_selected: bool, max_width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if field.kind != InputKind::Checkbox {
        lines.push(label_line(&field.label, is_selected));
    }
    match &field.value {
        FieldValue::Text(text) => lines.extend(text_box(field, text, is_selected, max_width)),
        FieldValue::Choice {
            options,
            selected,
            cursor,
        } => {
            for (idx, option) in options.iter().enumerate() {
                let mark = if *selected == Some(idx) { "(•)" } else { "( )" };
                let mut style = Style::default().fg(Color::White);
                if is_selected && idx == *cursor {
                    style = style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED);
                }
                lines.push(Line::from(Span::styled(format!("  {mark} {option}"), style)));
            }
        }
        FieldValue::Check(checked) => {
            let mark = if *checked { "[x]" } else { "[ ]" };
            let style = if is_selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            let label = wrap(&field.label, max_width.saturating_sub(4) as usize)
                .into_iter()
                .map(|segment| segment.into_owned())
                .collect::<Vec<_>>();
            for (idx, segment) in label.into_iter().enumerate() {
                let prefix = if idx == 0 { mark } else { "   " };
                lines.push(Line::from(Span::styled(format!("{prefix} {segment}"), style)));
            }
        }
    }
    if let Some(message) = field.error() {
        for segment in wrap(message, max_width as usize) {
            lines.push(Line::from(Span::styled(
                format!("  {}", segment.into_owned()),
                Style::default().fg(Color::Red),
            )));
        }
    }
    lines.push(Line::from(""));
    lines
}

fn label_line(label: &str, is_selected: bool) -> Line<'static> {
    let style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(label.to_string(), style))
}

fn text_box(field: &FieldState, text: &str, is_selected: bool, max_width: u16) -> Vec<Line<'static>> {
    let inner_width = max_width.saturating_sub(2) as usize;
    let (content, content_style) = if text.is_empty() && !is_selected {
        (
            field.placeholder.clone().unwrap_or_default(),
            Style::default().fg(Color::DarkGray),
        )
    } else if is_selected {
        (
            format!("{text}▏"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (text.to_string(), Style::default().fg(Color::White))
    };
    let border_style = if field.has_error_border() {
        Style::default().fg(Color::Red)
    } else if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let visible = clip_to_width(&content, inner_width);
    let padding = inner_width.saturating_sub(UnicodeWidthStr::width(visible.as_str()));
    let border_line = "─".repeat(inner_width + 2);
    vec![
        Line::from(Span::styled(format!("┌{border_line}┐"), border_style)),
        Line::from(vec![
            Span::styled("│ ", border_style),
            Span::styled(visible, content_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(" │", border_style),
        ]),
        Line::from(Span::styled(format!("└{border_line}┘"), border_style)),
    ]
}

// Keeps the tail of an over-long value so the caret stays visible.
fn clip_to_width(content: &str, width: usize) -> String {
    if UnicodeWidthStr::width(content) <= width {
        return content.to_string();
    }
    let mut kept = Vec::new();
    let mut used = 0usize;
    for ch in content.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        kept.push(ch);
    }
    kept.into_iter().rev().collect()
}

fn submit_lines(form: &FormState) -> Vec<Line<'static>> {
    let mut style = Style::default()
        .fg(Color::Black)
        .bg(submit_background(form.submit_color()));
    if form.submit_focused() {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    vec![Line::from(Span::styled(format!("  {}  ", form.submit_label), style))]
}
