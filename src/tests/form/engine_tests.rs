use crate::{
    domain::FieldId,
    form::{FormCommand, FormEngine, FormEvent, FormOutcome, FormState, SubmitColor},
    tests::support::{clock, form_state},
    validation::{FieldStatus, invalid_message},
};

fn set_text(form: &mut FormState, id: FieldId, value: &str) -> FormOutcome {
    let clock = clock();
    FormEngine::new(form, &clock).apply(FormCommand::SetText {
        id,
        value: value.to_string(),
    })
}

fn apply(form: &mut FormState, command: FormCommand) -> FormOutcome {
    let clock = clock();
    FormEngine::new(form, &clock).apply(command)
}

fn fill_all(form: &mut FormState) {
    set_text(form, FieldId::FirstName, "Jean");
    set_text(form, FieldId::LastName, "Dupont");
    set_text(form, FieldId::Email, "john.doe@mail.com");
    set_text(form, FieldId::Birthdate, "2000-02-29");
    set_text(form, FieldId::Quantity, "0");
    apply(
        form,
        FormCommand::Select {
            id: FieldId::Location,
            index: 4,
        },
    );
    apply(
        form,
        FormCommand::SetChecked {
            id: FieldId::TermsOfUse,
            checked: true,
        },
    );
}

#[test]
fn email_without_top_level_domain_stays_out_of_the_set() {
    let mut form = form_state();
    set_text(&mut form, FieldId::Email, "john.doe@mail");
    assert!(!form.validity().contains(FieldId::Email));
    set_text(&mut form, FieldId::Email, "john.doe@mail.com");
    assert!(form.validity().contains(FieldId::Email));
}

#[test]
fn invalid_value_change_keeps_a_visible_message() {
    let mut form = form_state();
    set_text(&mut form, FieldId::Quantity, "100");
    let clock = clock();
    FormEngine::new(&mut form, &clock).dispatch(FormEvent::FocusOut(FieldId::Quantity));
    assert_eq!(
        form.field(FieldId::Quantity).error(),
        Some(invalid_message(FieldId::Quantity))
    );

    set_text(&mut form, FieldId::Quantity, "1000");
    assert!(form.field(FieldId::Quantity).error().is_some());

    set_text(&mut form, FieldId::Quantity, "");
    assert!(form.field(FieldId::Quantity).error().is_none());
}

#[test]
fn focus_out_ignores_choice_fields() {
    let mut form = form_state();
    let clock = clock();
    FormEngine::new(&mut form, &clock).dispatch(FormEvent::FocusOut(FieldId::Location));
    assert_eq!(form.visible_errors(), 0);
}

#[test]
fn colour_turns_affirmative_only_when_all_seven_hold() {
    let mut form = form_state();
    fill_all(&mut form);
    assert_eq!(form.submit_color(), SubmitColor::Affirmative);
    assert_eq!(form.validity().len(), 7);

    set_text(&mut form, FieldId::LastName, "D");
    assert_eq!(form.submit_color(), SubmitColor::Neutral);
}

#[test]
fn clicks_clear_the_message_they_answer() {
    let mut form = form_state();
    apply(&mut form, FormCommand::Submit);
    assert!(form.field(FieldId::Location).error().is_some());

    apply(
        &mut form,
        FormCommand::Select {
            id: FieldId::Location,
            index: 0,
        },
    );
    assert!(form.field(FieldId::Location).error().is_none());
    assert!(form.validity().contains(FieldId::Location));
}

#[test]
fn submit_rechecks_fields_the_user_never_touched() {
    let mut form = form_state();
    fill_all(&mut form);
    // Bypass the handlers so the set still believes the email is valid.
    form.field_mut(FieldId::Email).set_text("not-an-email");

    let outcome = apply(&mut form, FormCommand::Submit);
    assert_eq!(outcome, FormOutcome::Rejected { flagged: 1 });
    assert!(!form.validity().contains(FieldId::Email));
    assert_eq!(form.submit_color(), SubmitColor::Neutral);
    assert_eq!(form.focused_field().map(|field| field.label.as_str()), Some("E-mail"));
}

#[test]
fn leap_day_birthdate_submits() {
    let mut form = form_state();
    fill_all(&mut form);
    let FormOutcome::Confirmed(registration) = apply(&mut form, FormCommand::Submit) else {
        panic!("expected a confirmed registration");
    };
    assert_eq!(registration.location, "Boston");
    assert_eq!(registration.quantity, 0);
    assert!(form.is_confirmation_visible());
    assert!(form.validity().is_empty());
}

#[test]
fn commands_are_ignored_while_the_confirmation_shows() {
    let mut form = form_state();
    fill_all(&mut form);
    apply(&mut form, FormCommand::Submit);

    let outcome = set_text(&mut form, FieldId::FirstName, "Other");
    assert_eq!(outcome, FormOutcome::Idle);
    assert_eq!(form.field(FieldId::FirstName).text(), Some("Jean"));
    assert_eq!(apply(&mut form, FormCommand::Submit), FormOutcome::Idle);
}

#[test]
fn select_on_a_checkbox_is_rejected() {
    let mut form = form_state();
    apply(
        &mut form,
        FormCommand::Select {
            id: FieldId::TermsOfUse,
            index: 0,
        },
    );
    assert!(!form.field(FieldId::TermsOfUse).is_checked());
    assert!(form.validity().is_empty());
}

#[test]
fn status_reflects_current_value() {
    let mut form = form_state();
    set_text(&mut form, FieldId::Birthdate, "2099-01-01");
    let clock = clock();
    let engine = FormEngine::new(&mut form, &clock);
    assert_eq!(engine.status(FieldId::Birthdate), FieldStatus::Invalid);
    assert_eq!(engine.status(FieldId::Location), FieldStatus::Empty);
}
