use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    domain::{FieldBlueprint, FieldId, InputKind},
    validation::FieldInput,
};

/// Which identifier a rendered field answers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKey {
    Tracked(FieldId),
    Extra(String),
}

impl FieldKey {
    pub fn tracked(&self) -> Option<FieldId> {
        match self {
            FieldKey::Tracked(id) => Some(*id),
            FieldKey::Extra(_) => None,
        }
    }

    pub fn element_id(&self) -> &str {
        match self {
            FieldKey::Tracked(id) => id.element_id(),
            FieldKey::Extra(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice {
        options: Vec<String>,
        selected: Option<usize>,
        cursor: usize,
    },
    Check(bool),
}

#[derive(Debug, Clone)]
pub struct FieldState {
    pub key: FieldKey,
    pub label: String,
    pub kind: InputKind,
    pub placeholder: Option<String>,
    pub value: FieldValue,
    default_checked: bool,
    /// Visible inline message; a field with a message also carries the error border.
    error: Option<String>,
}

impl FieldState {
    pub fn from_blueprint(blueprint: &FieldBlueprint) -> Self {
        let key = FieldId::from_element_id(&blueprint.id)
            .map(FieldKey::Tracked)
            .unwrap_or_else(|| FieldKey::Extra(blueprint.id.clone()));
        let value = initial_value(blueprint.kind, &blueprint.options, blueprint.checked);
        Self {
            key,
            label: blueprint.label.clone(),
            kind: blueprint.kind,
            placeholder: blueprint.placeholder.clone(),
            value,
            default_checked: blueprint.checked,
            error: None,
        }
    }

    pub fn input(&self) -> FieldInput<'_> {
        match &self.value {
            FieldValue::Text(text) => FieldInput::Text(text),
            FieldValue::Choice { selected, .. } => FieldInput::Choice(*selected),
            FieldValue::Check(checked) => FieldInput::Check(*checked),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn set_text(&mut self, value: impl Into<String>) -> bool {
        match &mut self.value {
            FieldValue::Text(text) => {
                let value = value.into();
                if *text == value {
                    return false;
                }
                *text = value;
                true
            }
            _ => false,
        }
    }

    pub fn selected_option(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Choice {
                options, selected, ..
            } => selected.and_then(|index| options.get(index)).map(String::as_str),
            _ => None,
        }
    }

    pub fn select(&mut self, index: usize) -> bool {
        let FieldValue::Choice {
            options,
            selected,
            cursor,
        } = &mut self.value
        else {
            return false;
        };
        if index >= options.len() {
            return false;
        }
        *cursor = index;
        let changed = *selected != Some(index);
        *selected = Some(index);
        changed
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Check(true))
    }

    pub fn set_checked(&mut self, checked: bool) -> bool {
        let FieldValue::Check(current) = &mut self.value else {
            return false;
        };
        let changed = *current != checked;
        *current = checked;
        changed
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, InputKind::Radio | InputKind::Checkbox)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error_border(&self) -> bool {
        self.error.is_some()
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn hide_error(&mut self) {
        self.error = None;
    }

    /// Whether the value still equals the blueprint's initial value.
    pub fn is_pristine(&self) -> bool {
        match &self.value {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Choice { selected, .. } => selected.is_none(),
            FieldValue::Check(checked) => *checked == self.default_checked,
        }
    }

    /// Back to the blueprint's initial value, without message or border.
    pub fn reset(&mut self) {
        self.value = match &self.value {
            FieldValue::Choice { options, .. } => FieldValue::Choice {
                options: options.clone(),
                selected: None,
                cursor: 0,
            },
            FieldValue::Text(_) => FieldValue::Text(String::new()),
            FieldValue::Check(_) => FieldValue::Check(self.default_checked),
        };
        self.error = None;
    }

    /// Apply a text editing key. Returns whether the value changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let FieldValue::Text(buffer) = &mut self.value else {
            return false;
        };
        match key.code {
            KeyCode::Char(ch) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return false;
                }
                buffer.push(ch);
                true
            }
            KeyCode::Backspace => buffer.pop().is_some(),
            KeyCode::Delete => {
                let changed = !buffer.is_empty();
                buffer.clear();
                changed
            }
            _ => false,
        }
    }

    /// Move the highlighted radio option. Selection is left untouched.
    pub fn step_option(&mut self, delta: i32) -> bool {
        let FieldValue::Choice {
            options, cursor, ..
        } = &mut self.value
        else {
            return false;
        };
        if options.is_empty() {
            return false;
        }
        let len = options.len() as i32;
        let next = (*cursor as i32 + delta).rem_euclid(len) as usize;
        let changed = next != *cursor;
        *cursor = next;
        changed
    }

    /// Select the highlighted radio option, or flip a checkbox.
    pub fn toggle(&mut self) -> bool {
        if let FieldValue::Choice { cursor, .. } = &self.value {
            let index = *cursor;
            return self.select(index);
        }
        match &mut self.value {
            FieldValue::Check(checked) => {
                *checked = !*checked;
                true
            }
            FieldValue::Text(_) | FieldValue::Choice { .. } => false,
        }
    }

    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Choice { .. } => self
                .selected_option()
                .map(str::to_string)
                .unwrap_or_default(),
            FieldValue::Check(checked) => {
                if *checked {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
        }
    }
}

fn initial_value(kind: InputKind, options: &[String], checked: bool) -> FieldValue {
    match kind {
        InputKind::Radio => FieldValue::Choice {
            options: options.to_vec(),
            selected: None,
            cursor: 0,
        },
        InputKind::Checkbox => FieldValue::Check(checked),
        _ => FieldValue::Text(String::new()),
    }
}
