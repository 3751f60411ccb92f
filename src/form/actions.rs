use crossterm::event::KeyEvent;

use crate::domain::FieldId;

use super::registration::Registration;

/// Interactions the controller turns into field events.
#[derive(Debug, Clone)]
pub enum FormCommand {
    FocusStep(i32),
    Edit(KeyEvent),
    OptionStep(i32),
    Toggle,
    SetText { id: FieldId, value: String },
    Select { id: FieldId, index: usize },
    SetChecked { id: FieldId, checked: bool },
    Submit,
}

/// Page-level events, one per handler the form reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The field's value changed.
    Input(FieldId),
    /// The field lost focus.
    FocusOut(FieldId),
    /// A radio option or checkbox was clicked.
    Click(FieldId),
    Submit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Idle,
    Confirmed(Registration),
    Rejected { flagged: usize },
}
