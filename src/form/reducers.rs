use tracing::{debug, info};

use crate::{
    domain::{FieldId, InputKind},
    validation::{Clock, FieldStatus, invalid_message, truncate_birthdate_input},
};

use super::{
    actions::{FormCommand, FormEvent, FormOutcome},
    field::FieldValue,
    registration::{FieldIssue, RegistrationDraft},
    state::{FormState, FormView, SubmitColor},
};

/// Runs the field handlers against a [`FormState`]. Every value change is
/// reflected in the validity set before the submit colour is recomputed.
pub struct FormEngine<'a> {
    state: &'a mut FormState,
    clock: &'a dyn Clock,
}

impl<'a> FormEngine<'a> {
    pub fn new(state: &'a mut FormState, clock: &'a dyn Clock) -> Self {
        Self { state, clock }
    }

    /// Apply a user interaction, then fire the events it implies.
    pub fn apply(&mut self, command: FormCommand) -> FormOutcome {
        if self.state.view == FormView::Confirmation {
            return FormOutcome::Idle;
        }
        match command {
            FormCommand::FocusStep(delta) => {
                let left = self.state.step_focus(delta);
                if let Some(id) = self.tracked_at(left) {
                    self.dispatch(FormEvent::FocusOut(id));
                }
                FormOutcome::Idle
            }
            FormCommand::Edit(key) => {
                let Some(field) = self.state.focused_field_mut() else {
                    return FormOutcome::Idle;
                };
                if field.handle_key(&key) {
                    self.after_change(self.state.focus(), false);
                }
                FormOutcome::Idle
            }
            FormCommand::OptionStep(delta) => {
                if let Some(field) = self.state.focused_field_mut() {
                    field.step_option(delta);
                }
                FormOutcome::Idle
            }
            FormCommand::Toggle => {
                let Some(field) = self.state.focused_field_mut() else {
                    return FormOutcome::Idle;
                };
                if !field.is_choice() {
                    return FormOutcome::Idle;
                }
                field.toggle();
                // A click fires even when the radio option was already selected.
                self.after_change(self.state.focus(), true);
                FormOutcome::Idle
            }
            FormCommand::SetText { id, value } => {
                if self.state.field_mut(id).set_text(value) {
                    self.dispatch(FormEvent::Input(id))
                } else {
                    FormOutcome::Idle
                }
            }
            FormCommand::Select { id, index } => {
                if self.state.field(id).kind != InputKind::Radio {
                    return FormOutcome::Idle;
                }
                self.state.field_mut(id).select(index);
                self.dispatch(FormEvent::Click(id))
            }
            FormCommand::SetChecked { id, checked } => {
                if self.state.field(id).kind != InputKind::Checkbox {
                    return FormOutcome::Idle;
                }
                self.state.field_mut(id).set_checked(checked);
                self.dispatch(FormEvent::Click(id))
            }
            FormCommand::Submit => self.dispatch(FormEvent::Submit),
        }
    }

    pub fn dispatch(&mut self, event: FormEvent) -> FormOutcome {
        debug!(?event, "form event");
        match event {
            FormEvent::Input(id) => {
                self.on_input(id);
                self.refresh_submit_color();
                FormOutcome::Idle
            }
            FormEvent::FocusOut(id) => {
                self.on_focus_out(id);
                FormOutcome::Idle
            }
            FormEvent::Click(id) => {
                self.on_click(id);
                self.refresh_submit_color();
                FormOutcome::Idle
            }
            FormEvent::Submit => self.on_submit(),
        }
    }

    pub fn status(&self, id: FieldId) -> FieldStatus {
        FieldStatus::evaluate(id, self.state.field(id).input(), self.clock.now())
    }

    fn tracked_at(&self, index: usize) -> Option<FieldId> {
        self.state.handles().field_at(index)
    }

    // Untracked fields only feed the form-wide colour refresh.
    fn after_change(&mut self, index: usize, click: bool) {
        match self.tracked_at(index) {
            Some(id) if click => {
                self.dispatch(FormEvent::Click(id));
            }
            Some(id) => {
                self.dispatch(FormEvent::Input(id));
            }
            None => self.refresh_submit_color(),
        }
    }

    fn on_input(&mut self, id: FieldId) {
        if id == FieldId::Birthdate {
            let field = self.state.field_mut(id);
            if let FieldValue::Text(raw) = &mut field.value {
                let truncated = truncate_birthdate_input(raw).into_owned();
                *raw = truncated;
            }
        }
        let status = self.status(id);
        if status != FieldStatus::Invalid {
            self.state.field_mut(id).hide_error();
        }
        self.state.validity.record(id, status);
    }

    fn on_focus_out(&mut self, id: FieldId) {
        if !id.expected_kind().is_textual() {
            return;
        }
        if self.status(id) == FieldStatus::Invalid {
            self.state.field_mut(id).show_error(invalid_message(id));
        }
    }

    fn on_click(&mut self, id: FieldId) {
        self.state.field_mut(id).hide_error();
        let status = self.status(id);
        self.state.validity.record(id, status);
    }

    fn refresh_submit_color(&mut self) {
        self.state.submit_color = if self.state.validity.is_complete() {
            SubmitColor::Affirmative
        } else {
            SubmitColor::Neutral
        };
    }

    // Every field is checked again, whatever its focus/input history.
    fn on_submit(&mut self) -> FormOutcome {
        let mut first_flagged = None;
        let mut flagged = 0usize;
        for id in FieldId::ALL {
            let status = self.status(id);
            self.state.validity.record(id, status);
            if let Some(issue) = FieldIssue::for_status(id, status) {
                self.state.field_mut(id).show_error(issue.message);
                first_flagged.get_or_insert(id);
                flagged += 1;
            }
        }
        self.refresh_submit_color();

        if !self.state.validity.is_complete() {
            if let Some(id) = first_flagged {
                self.state.focus_field(id);
            }
            info!(flagged, "submission rejected");
            return FormOutcome::Rejected { flagged };
        }

        let locations = match &self.state.field(FieldId::Location).value {
            FieldValue::Choice { options, .. } => options.clone(),
            _ => Vec::new(),
        };
        let draft = RegistrationDraft::from_state(self.state);
        match draft.into_registration(&locations, self.clock.now()) {
            Ok(registration) => {
                self.state.view = FormView::Confirmation;
                self.state.validity.clear();
                info!(email = %registration.email, "registration confirmed");
                FormOutcome::Confirmed(registration)
            }
            Err(issues) => {
                for issue in &issues {
                    self.state.field_mut(issue.id).show_error(issue.message);
                }
                FormOutcome::Rejected {
                    flagged: issues.len(),
                }
            }
        }
    }
}
