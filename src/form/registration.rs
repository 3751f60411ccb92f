use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    domain::FieldId,
    validation::{FieldInput, FieldStatus, REQUIRED_MESSAGE, invalid_message, parse_birthdate},
};

use super::state::FormState;

/// A submission that passed every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthdate: NaiveDate,
    pub quantity: u8,
    pub location: String,
    pub terms_accepted: bool,
    pub newsletter: bool,
}

/// Raw field values, as typed in the form or read from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthdate: String,
    #[serde(deserialize_with = "text_or_number")]
    pub quantity: String,
    pub location: Option<String>,
    pub terms_accepted: bool,
    pub newsletter: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    pub id: FieldId,
    pub status: FieldStatus,
    pub message: &'static str,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}

impl FieldIssue {
    /// Message a failed field shows on submit.
    pub fn for_status(id: FieldId, status: FieldStatus) -> Option<Self> {
        let message = match status {
            FieldStatus::Valid => return None,
            FieldStatus::Empty if id.expected_kind().is_textual() => REQUIRED_MESSAGE,
            FieldStatus::Empty | FieldStatus::Invalid => invalid_message(id),
        };
        Some(Self {
            id,
            status,
            message,
        })
    }
}

impl RegistrationDraft {
    pub fn from_state(state: &FormState) -> Self {
        let text = |id| {
            state
                .field(id)
                .text()
                .map(str::to_string)
                .unwrap_or_default()
        };
        Self {
            first_name: text(FieldId::FirstName),
            last_name: text(FieldId::LastName),
            email: text(FieldId::Email),
            birthdate: text(FieldId::Birthdate),
            quantity: text(FieldId::Quantity),
            location: state
                .field(FieldId::Location)
                .selected_option()
                .map(str::to_string),
            terms_accepted: state.field(FieldId::TermsOfUse).is_checked(),
            newsletter: state.newsletter(),
        }
    }

    /// Evaluate every tracked field. A location outside `locations` counts as
    /// no selection.
    pub fn statuses(&self, locations: &[String], now: NaiveDateTime) -> Vec<(FieldId, FieldStatus)> {
        let location = self
            .location
            .as_ref()
            .and_then(|label| locations.iter().position(|option| option == label));
        FieldId::ALL
            .into_iter()
            .map(|id| {
                let input = match id {
                    FieldId::FirstName => FieldInput::Text(&self.first_name),
                    FieldId::LastName => FieldInput::Text(&self.last_name),
                    FieldId::Email => FieldInput::Text(&self.email),
                    FieldId::Birthdate => FieldInput::Text(&self.birthdate),
                    FieldId::Quantity => FieldInput::Text(&self.quantity),
                    FieldId::Location => FieldInput::Choice(location),
                    FieldId::TermsOfUse => FieldInput::Check(self.terms_accepted),
                };
                (id, FieldStatus::evaluate(id, input, now))
            })
            .collect()
    }

    pub fn issues(&self, locations: &[String], now: NaiveDateTime) -> Vec<FieldIssue> {
        self.statuses(locations, now)
            .into_iter()
            .filter_map(|(id, status)| FieldIssue::for_status(id, status))
            .collect()
    }

    pub fn into_registration(
        self,
        locations: &[String],
        now: NaiveDateTime,
    ) -> Result<Registration, Vec<FieldIssue>> {
        let issues = self.issues(locations, now);
        if !issues.is_empty() {
            return Err(issues);
        }
        let invalid = |id| {
            vec![FieldIssue {
                id,
                status: FieldStatus::Invalid,
                message: invalid_message(id),
            }]
        };
        let birthdate =
            parse_birthdate(&self.birthdate).ok_or_else(|| invalid(FieldId::Birthdate))?;
        let quantity = self
            .quantity
            .parse::<u8>()
            .map_err(|_| invalid(FieldId::Quantity))?;
        let location = self.location.ok_or_else(|| invalid(FieldId::Location))?;
        Ok(Registration {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            birthdate,
            quantity,
            location,
            terms_accepted: self.terms_accepted,
            newsletter: self.newsletter,
        })
    }
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or a number, found {other}"
        ))),
    }
}
