use crate::{
    domain::{ConfirmationBlueprint, FieldId, FormBlueprint, FormHandles},
    validation::{FieldStatus, FormValidationState},
};

use super::field::FieldState;

/// Background of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitColor {
    #[default]
    Neutral,
    Affirmative,
}

/// What the modal body currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormView {
    #[default]
    Form,
    Confirmation,
}

/// One registration session: field values, inline messages, validity set and
/// the view flags derived from them.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FieldState>,
    handles: FormHandles,
    pub(crate) validity: FormValidationState,
    pub(crate) submit_color: SubmitColor,
    pub(crate) view: FormView,
    focus: usize,
    pub submit_label: String,
    pub confirmation: ConfirmationBlueprint,
}

impl FormState {
    pub fn from_blueprint(blueprint: &FormBlueprint, handles: FormHandles) -> Self {
        let fields = blueprint
            .fields
            .iter()
            .map(FieldState::from_blueprint)
            .collect();
        let mut state = Self {
            fields,
            handles,
            validity: FormValidationState::new(),
            submit_color: SubmitColor::Neutral,
            view: FormView::Form,
            focus: 0,
            submit_label: blueprint.submit_label.clone(),
            confirmation: blueprint.confirmation.clone(),
        };
        state.seed_defaults();
        state
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        &self.fields[self.handles.get(id).index]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        let index = self.handles.get(id).index;
        &mut self.fields[index]
    }

    pub fn handles(&self) -> &FormHandles {
        &self.handles
    }

    pub fn newsletter(&self) -> bool {
        self.handles
            .newsletter()
            .and_then(|index| self.fields.get(index))
            .is_some_and(FieldState::is_checked)
    }

    pub fn validity(&self) -> &FormValidationState {
        &self.validity
    }

    pub fn submit_color(&self) -> SubmitColor {
        self.submit_color
    }

    pub fn view(&self) -> FormView {
        self.view
    }

    pub fn is_form_visible(&self) -> bool {
        self.view == FormView::Form
    }

    pub fn is_confirmation_visible(&self) -> bool {
        self.view == FormView::Confirmation
    }

    /// Number of inline messages currently shown.
    pub fn visible_errors(&self) -> usize {
        self.fields
            .iter()
            .filter(|field| field.error().is_some())
            .count()
    }

    /// Focus index; `fields().len()` designates the submit button.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn submit_focused(&self) -> bool {
        self.focus == self.fields.len()
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.fields.get(self.focus)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FieldState> {
        self.fields.get_mut(self.focus)
    }

    /// Move focus by `delta`, wrapping over the fields and the submit button.
    /// Returns the index that lost focus.
    pub(crate) fn step_focus(&mut self, delta: i32) -> usize {
        let previous = self.focus;
        let slots = self.fields.len() as i32 + 1;
        self.focus = (self.focus as i32 + delta).rem_euclid(slots) as usize;
        previous
    }

    pub(crate) fn focus_field(&mut self, id: FieldId) {
        self.focus = self.handles.get(id).index;
    }

    /// Whether any field holds something other than its initial value.
    pub fn is_dirty(&self) -> bool {
        self.fields.iter().any(|field| !field.is_pristine())
    }

    /// Blank values, hidden messages, no borders, neutral button, form shown.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.validity.clear();
        self.submit_color = SubmitColor::Neutral;
        self.view = FormView::Form;
        self.focus = 0;
        self.seed_defaults();
    }

    // A terms box pre-checked by the blueprint counts as valid from the start.
    fn seed_defaults(&mut self) {
        if self.field(FieldId::TermsOfUse).is_checked() {
            self.validity.record(FieldId::TermsOfUse, FieldStatus::Valid);
        }
    }
}
