use std::collections::HashSet;
use std::fmt;

use super::{FieldId, FormBlueprint, InputKind};

/// Position of a tracked field inside the blueprint's field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldHandle {
    pub id: FieldId,
    pub index: usize,
    pub kind: InputKind,
}

/// Typed lookup table produced once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormHandles {
    tracked: [FieldHandle; 7],
    newsletter: Option<usize>,
}

impl FormHandles {
    pub fn get(&self, id: FieldId) -> FieldHandle {
        self.tracked[id as usize]
    }

    pub fn tracked(&self) -> &[FieldHandle] {
        &self.tracked
    }

    /// Index of the optional newsletter opt-in checkbox, when the blueprint has one.
    pub fn newsletter(&self) -> Option<usize> {
        self.newsletter
    }

    pub fn field_at(&self, index: usize) -> Option<FieldId> {
        self.tracked
            .iter()
            .find(|handle| handle.index == index)
            .map(|handle| handle.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    MissingElement(FieldId),
    DuplicateElement(String),
    WrongKind {
        id: FieldId,
        expected: InputKind,
        found: InputKind,
    },
    EmptyRadioGroup(FieldId),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::MissingElement(id) => write!(f, "blueprint has no element '{id}'"),
            BindError::DuplicateElement(id) => write!(f, "element id '{id}' is declared twice"),
            BindError::WrongKind {
                id,
                expected,
                found,
            } => write!(f, "element '{id}' must be a {expected} input, found {found}"),
            BindError::EmptyRadioGroup(id) => write!(f, "radio group '{id}' has no options"),
        }
    }
}

impl std::error::Error for BindError {}

const NEWSLETTER_ID: &str = "checkbox2";

/// Resolve every tracked field against the blueprint, failing on the first
/// element that is absent or malformed.
pub fn bind(blueprint: &FormBlueprint) -> Result<FormHandles, BindError> {
    let mut seen = HashSet::new();
    for field in &blueprint.fields {
        if !seen.insert(field.id.as_str()) {
            return Err(BindError::DuplicateElement(field.id.clone()));
        }
    }

    let mut tracked = Vec::with_capacity(FieldId::ALL.len());
    for id in FieldId::ALL {
        let (index, field) = blueprint
            .fields
            .iter()
            .enumerate()
            .find(|(_, field)| field.id == id.element_id())
            .ok_or(BindError::MissingElement(id))?;
        let expected = id.expected_kind();
        if field.kind != expected {
            return Err(BindError::WrongKind {
                id,
                expected,
                found: field.kind,
            });
        }
        if expected == InputKind::Radio && field.options.is_empty() {
            return Err(BindError::EmptyRadioGroup(id));
        }
        tracked.push(FieldHandle {
            id,
            index,
            kind: expected,
        });
    }

    let newsletter = blueprint
        .fields
        .iter()
        .position(|field| field.id == NEWSLETTER_ID && field.kind == InputKind::Checkbox);

    let tracked: [FieldHandle; 7] = tracked
        .try_into()
        .unwrap_or_else(|_| unreachable!("one handle per FieldId"));
    Ok(FormHandles {
        tracked,
        newsletter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_blueprint;

    #[test]
    fn default_blueprint_binds_every_tracked_field() {
        let blueprint = default_blueprint();
        let handles = bind(&blueprint).expect("bind");
        for id in FieldId::ALL {
            let handle = handles.get(id);
            assert_eq!(handle.id, id);
            assert_eq!(blueprint.fields[handle.index].id, id.element_id());
        }
        assert_eq!(handles.newsletter(), Some(7));
    }

    #[test]
    fn missing_email_fails_fast() {
        let mut blueprint = default_blueprint();
        blueprint.fields.retain(|field| field.id != "email");
        assert_eq!(
            bind(&blueprint),
            Err(BindError::MissingElement(FieldId::Email))
        );
    }

    #[test]
    fn wrong_kind_is_reported() {
        let mut blueprint = default_blueprint();
        blueprint.fields[3].kind = InputKind::Text;
        let err = bind(&blueprint).unwrap_err();
        assert_eq!(
            err.to_string(),
            "element 'birthdate' must be a date input, found text"
        );
    }

    #[test]
    fn radio_group_needs_options() {
        let mut blueprint = default_blueprint();
        blueprint.fields[5].options.clear();
        assert_eq!(
            bind(&blueprint),
            Err(BindError::EmptyRadioGroup(FieldId::Location))
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut blueprint = default_blueprint();
        let copy = blueprint.fields[0].clone();
        blueprint.fields.push(copy);
        assert_eq!(
            bind(&blueprint),
            Err(BindError::DuplicateElement("firstName".to_string()))
        );
    }

    #[test]
    fn newsletter_is_optional() {
        let mut blueprint = default_blueprint();
        blueprint.fields.retain(|field| field.id != "checkbox2");
        let handles = bind(&blueprint).expect("bind");
        assert_eq!(handles.newsletter(), None);
    }
}
