use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::domain::FieldId;

use super::rules::{is_empty, text_matches};

/// Value of a field as seen by its validity predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput<'a> {
    Text(&'a str),
    Choice(Option<usize>),
    Check(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Blank text, no radio option selected, or an unchecked box.
    Empty,
    Invalid,
    Valid,
}

impl FieldStatus {
    pub fn evaluate(id: FieldId, input: FieldInput<'_>, now: NaiveDateTime) -> Self {
        match input {
            FieldInput::Text(value) if is_empty(value) => FieldStatus::Empty,
            FieldInput::Text(value) if text_matches(id, value, now) => FieldStatus::Valid,
            FieldInput::Text(_) => FieldStatus::Invalid,
            FieldInput::Choice(Some(_)) | FieldInput::Check(true) => FieldStatus::Valid,
            FieldInput::Choice(None) | FieldInput::Check(false) => FieldStatus::Empty,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, FieldStatus::Valid)
    }
}

/// Identifiers of the fields whose predicate last evaluated true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidationState {
    valid: BTreeSet<FieldId>,
}

impl FormValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the latest evaluation of `id`. Returns whether membership changed.
    pub fn record(&mut self, id: FieldId, status: FieldStatus) -> bool {
        if status.is_valid() {
            self.valid.insert(id)
        } else {
            self.valid.remove(&id)
        }
    }

    pub fn with_status(mut self, id: FieldId, status: FieldStatus) -> Self {
        self.record(id, status);
        self
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.valid.contains(&id)
    }

    /// True once every tracked field is present.
    pub fn is_complete(&self) -> bool {
        FieldId::ALL.iter().all(|id| self.valid.contains(id))
    }

    pub fn len(&self) -> usize {
        self.valid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }

    pub fn clear(&mut self) {
        self.valid.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.valid.iter().copied()
    }
}
