use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::{
    app::UiOptions,
    domain::FieldId,
    form::SubmitColor,
    tests::support::{app, app_with, ctrl, fill_valid, press, type_text},
    validation::REQUIRED_MESSAGE,
};

#[test]
fn enter_on_the_page_opens_the_modal() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    assert!(app.modal_for_test().is_open());
    assert!(app.form_for_test().is_form_visible());
}

#[test]
fn empty_submission_flags_all_seven_fields() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    ctrl(&mut app, 's');

    let form = app.form_for_test();
    assert_eq!(form.visible_errors(), 7);
    assert!(!form.is_confirmation_visible());
    assert_eq!(form.field(FieldId::Email).error(), Some(REQUIRED_MESSAGE));
    assert_eq!(form.focus(), 0, "focus returns to the first flagged field");
    assert!(app.confirmed_for_test().is_empty());
    assert_eq!(app.status_for_test(), "7 field(s) need attention");
}

#[test]
fn focus_out_flags_then_edit_clears() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Jo3");
    assert!(app.form_for_test().field(FieldId::FirstName).error().is_none());

    press(&mut app, KeyCode::Tab);
    let field = app.form_for_test().field(FieldId::FirstName);
    assert!(field.error().is_some());
    assert!(field.has_error_border());

    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::Backspace);
    let form = app.form_for_test();
    assert_eq!(form.field(FieldId::FirstName).text(), Some("Jo"));
    assert!(form.field(FieldId::FirstName).error().is_none());
    assert!(form.validity().contains(FieldId::FirstName));
}

#[test]
fn leaving_an_empty_field_shows_nothing() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.form_for_test().visible_errors(), 0);
}

#[test]
fn complete_form_confirms_and_returns_a_registration() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    fill_valid(&mut app);
    assert_eq!(
        app.form_for_test().submit_color(),
        SubmitColor::Affirmative
    );

    ctrl(&mut app, 's');
    let form = app.form_for_test();
    assert!(form.is_confirmation_visible());
    assert!(!form.is_form_visible());
    assert!(form.validity().is_empty());

    let registrations = app.confirmed_for_test();
    assert_eq!(registrations.len(), 1);
    let registration = &registrations[0];
    assert_eq!(registration.first_name, "Jean");
    assert_eq!(registration.location, "Seattle");
    assert_eq!(registration.quantity, 3);
    assert_eq!(
        Some(registration.birthdate),
        NaiveDate::from_ymd_opt(1990, 5, 17)
    );
    assert!(registration.terms_accepted);
    assert!(!registration.newsletter);
}

#[test]
fn enter_walks_to_the_submit_button_and_presses_it() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    fill_valid(&mut app);
    // terms box -> newsletter box -> submit button
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert!(app.form_for_test().submit_focused());
    press(&mut app, KeyCode::Enter);
    assert!(app.form_for_test().is_confirmation_visible());
}

#[test]
fn closing_the_confirmation_resets_for_reuse() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    fill_valid(&mut app);
    ctrl(&mut app, 's');
    press(&mut app, KeyCode::Enter);

    assert!(!app.modal_for_test().is_open());
    let form = app.form_for_test();
    assert!(form.is_form_visible());
    assert_eq!(form.field(FieldId::FirstName).text(), Some(""));
    assert_eq!(form.submit_color(), SubmitColor::Neutral);
    assert_eq!(app.confirmed_for_test().len(), 1);
}

#[test]
fn escape_after_partial_fill_clears_everything() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Jo3");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Dupont");
    assert_eq!(app.form_for_test().visible_errors(), 1);

    press(&mut app, KeyCode::Esc);
    let form = app.form_for_test();
    assert_eq!(form.visible_errors(), 0);
    assert!(!form.is_dirty());
    assert!(form.validity().is_empty());
    assert_eq!(form.submit_color(), SubmitColor::Neutral);
    assert!(!app.modal_for_test().is_open());
}

#[test]
fn birthdate_input_is_truncated_while_typing() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    for _ in 0..3 {
        press(&mut app, KeyCode::Tab);
    }
    type_text(&mut app, "1990-05-171");
    let form = app.form_for_test();
    assert_eq!(form.field(FieldId::Birthdate).text(), Some("199005-171"));
    assert!(!form.validity().contains(FieldId::Birthdate));
}

#[test]
fn unchecking_terms_turns_the_button_neutral() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    fill_valid(&mut app);
    press(&mut app, KeyCode::Char(' '));
    let form = app.form_for_test();
    assert!(!form.validity().contains(FieldId::TermsOfUse));
    assert_eq!(form.submit_color(), SubmitColor::Neutral);
}

#[test]
fn narrow_terminal_hides_the_hero_while_open() {
    let mut app = app();
    app.modal_for_test().resize(40);
    press(&mut app, KeyCode::Enter);
    assert!(!app.modal_for_test().hero_visible());
    press(&mut app, KeyCode::Esc);
    assert!(app.modal_for_test().hero_visible());
}

#[test]
fn quitting_with_unsubmitted_input_needs_confirmation() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "J");
    ctrl(&mut app, 'q');
    assert!(!app.should_quit_for_test());
    assert!(app.status_for_test().contains("again"));
    ctrl(&mut app, 'q');
    assert!(app.should_quit_for_test());
}

#[test]
fn confirm_exit_can_be_disabled() {
    let mut app = app_with(UiOptions::default().with_confirm_exit(false));
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "J");
    ctrl(&mut app, 'q');
    assert!(app.should_quit_for_test());
}

#[test]
fn q_quits_from_the_page_but_types_in_the_form() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit_for_test());
    assert_eq!(app.form_for_test().field(FieldId::FirstName).text(), Some("q"));

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit_for_test());
}
