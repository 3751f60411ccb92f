mod binding;
mod blueprint;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use binding::{BindError, FieldHandle, FormHandles, bind};
pub use blueprint::{
    ConfirmationBlueprint, FieldBlueprint, FormBlueprint, HeroBlueprint, default_blueprint,
};

/// The seven fields whose validity gates submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Birthdate,
    Quantity,
    Location,
    TermsOfUse,
}

impl FieldId {
    pub const ALL: [FieldId; 7] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Birthdate,
        FieldId::Quantity,
        FieldId::Location,
        FieldId::TermsOfUse,
    ];

    /// Identifier used by the blueprint document.
    pub fn element_id(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Birthdate => "birthdate",
            FieldId::Quantity => "quantity",
            FieldId::Location => "location",
            FieldId::TermsOfUse => "checkbox1",
        }
    }

    pub fn from_element_id(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.element_id() == raw)
    }

    /// Name of the inline message container attached to the field.
    pub fn message_container(self) -> String {
        format!("invalid-{}", self.element_id())
    }

    /// Kind the blueprint must declare for this field.
    pub fn expected_kind(self) -> InputKind {
        match self {
            FieldId::FirstName | FieldId::LastName => InputKind::Text,
            FieldId::Email => InputKind::Email,
            FieldId::Birthdate => InputKind::Date,
            FieldId::Quantity => InputKind::Number,
            FieldId::Location => InputKind::Radio,
            FieldId::TermsOfUse => InputKind::Checkbox,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Date,
    Number,
    Radio,
    Checkbox,
}

impl InputKind {
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            InputKind::Text | InputKind::Email | InputKind::Date | InputKind::Number
        )
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Date => "date",
            InputKind::Number => "number",
            InputKind::Radio => "radio",
            InputKind::Checkbox => "checkbox",
        };
        f.write_str(label)
    }
}
