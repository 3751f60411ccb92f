use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

use crate::{
    app::runtime::App,
    presentation::{AFFIRMATIVE, NEUTRAL},
    tests::support::{app, ctrl, fill_valid, press, type_text},
};

fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| app.draw_for_test(frame))
        .expect("draw");
    terminal.backend().buffer().clone()
}

fn buffer_to_string(buf: &Buffer) -> String {
    let mut s = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
        }
        s.push('\n');
    }
    s
}

/// Background colour of the first cell of `needle`.
fn background_of(buf: &Buffer, needle: &str) -> Option<Color> {
    let text = buffer_to_string(buf);
    let row_width = buf.area.width as usize + 1;
    let cells = text.chars().collect::<Vec<_>>();
    let needle = needle.chars().collect::<Vec<_>>();
    let position = cells
        .windows(needle.len())
        .position(|window| window == needle.as_slice())?;
    let x = (position % row_width) as u16;
    let y = (position / row_width) as u16;
    Some(buf[(x, y)].bg)
}

#[test]
fn landing_page_shows_the_hero() {
    let output = buffer_to_string(&render(&app(), 120, 60));
    assert!(output.contains("Marathon national de jeux vidéos"));
    assert!(output.contains("je m'inscris"));
    assert!(output.contains("Enter Sign up"));
}

#[test]
fn open_modal_lists_every_field_and_the_button() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    let output = buffer_to_string(&render(&app, 120, 60));
    assert!(output.contains("Prénom"));
    assert!(output.contains("AAAA-MM-JJ"));
    assert!(output.contains("( ) Seattle"));
    assert!(output.contains("[ ] J'ai lu"));
    assert!(output.contains("C'est parti"));
}

#[test]
fn submit_button_colour_follows_validity() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    let buffer = render(&app, 120, 60);
    assert_eq!(background_of(&buffer, "C'est parti"), Some(NEUTRAL));

    fill_valid(&mut app);
    let buffer = render(&app, 120, 60);
    assert_eq!(background_of(&buffer, "C'est parti"), Some(AFFIRMATIVE));
}

#[test]
fn inline_message_appears_under_the_field() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Jo3");
    press(&mut app, KeyCode::Tab);
    let output = buffer_to_string(&render(&app, 120, 60));
    assert!(output.contains("Votre prénom doit être composé"));
    assert!(output.contains("[! 1]"));
}

#[test]
fn confirmation_replaces_the_form() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    fill_valid(&mut app);
    ctrl(&mut app, 's');
    let output = buffer_to_string(&render(&app, 120, 60));
    assert!(output.contains("Merci pour votre inscription"));
    assert!(output.contains("Fermer"));
    assert!(!output.contains("C'est parti"));
}
