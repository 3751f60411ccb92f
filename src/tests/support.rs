use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    app::{RegistrationUi, UiOptions, runtime::App},
    domain::{bind, default_blueprint},
    form::FormState,
    validation::FixedClock,
};

pub(crate) fn clock() -> FixedClock {
    let now = NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("fixed instant");
    FixedClock(now)
}

pub(crate) fn form_state() -> FormState {
    let blueprint = default_blueprint();
    let handles = bind(&blueprint).expect("bind");
    FormState::from_blueprint(&blueprint, handles)
}

pub(crate) fn app() -> App {
    app_with(UiOptions::default())
}

pub(crate) fn app_with(options: UiOptions) -> App {
    RegistrationUi::default()
        .with_options(options.with_clock(clock()))
        .into_app()
        .expect("default blueprint binds")
}

pub(crate) fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

pub(crate) fn press(app: &mut App, code: KeyCode) {
    app.handle_key_for_test(key(code, KeyModifiers::NONE));
}

pub(crate) fn ctrl(app: &mut App, ch: char) {
    app.handle_key_for_test(key(KeyCode::Char(ch), KeyModifiers::CONTROL));
}

pub(crate) fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Fill every tracked field with a valid value, leaving focus on the terms box.
pub(crate) fn fill_valid(app: &mut App) {
    type_text(app, "Jean");
    press(app, KeyCode::Tab);
    type_text(app, "Dupont");
    press(app, KeyCode::Tab);
    type_text(app, "jean.dupont@mail.com");
    press(app, KeyCode::Tab);
    type_text(app, "1990-05-17");
    press(app, KeyCode::Tab);
    type_text(app, "3");
    press(app, KeyCode::Tab);
    press(app, KeyCode::Right);
    press(app, KeyCode::Right);
    press(app, KeyCode::Char(' '));
    press(app, KeyCode::Tab);
    press(app, KeyCode::Char(' '));
}
