use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::InputKind;

const DEFAULT_BLUEPRINT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/registration.form.json"
));

/// Static description of the page: hero copy, form fields and confirmation panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormBlueprint {
    pub title: String,
    pub hero: HeroBlueprint,
    pub fields: Vec<FieldBlueprint>,
    pub submit_label: String,
    pub confirmation: ConfirmationBlueprint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlueprint {
    pub heading: String,
    pub text: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldBlueprint {
    pub id: String,
    pub label: String,
    pub kind: InputKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Initial state of a checkbox, restored on every reset.
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationBlueprint {
    pub message: String,
    pub close_label: String,
}

impl FormBlueprint {
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).context("document is not a valid form blueprint")
    }

    pub fn field(&self, id: &str) -> Option<&FieldBlueprint> {
        self.fields.iter().find(|field| field.id == id)
    }
}

/// The registration form shipped with the crate.
pub fn default_blueprint() -> FormBlueprint {
    serde_json::from_str(DEFAULT_BLUEPRINT).expect("invalid assets/registration.form.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embedded_blueprint_lists_six_locations() {
        let blueprint = default_blueprint();
        let location = blueprint.field("location").expect("location group");
        assert_eq!(location.kind, InputKind::Radio);
        assert_eq!(location.options.len(), 6);
        assert_eq!(blueprint.fields.len(), 8);
    }

    #[test]
    fn missing_optional_keys_fall_back_to_defaults() {
        let value = json!({
            "title": "t",
            "hero": {"heading": "h", "text": "x", "callToAction": "go"},
            "fields": [{"id": "checkbox1", "label": "cgu", "kind": "checkbox"}],
            "submitLabel": "ok",
            "confirmation": {"message": "merci", "closeLabel": "fermer"}
        });
        let blueprint = FormBlueprint::from_value(value).expect("blueprint");
        let field = &blueprint.fields[0];
        assert!(!field.checked);
        assert!(field.options.is_empty());
        assert!(field.placeholder.is_none());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let value = json!({
            "title": "t",
            "hero": {"heading": "h", "text": "x", "callToAction": "go"},
            "fields": [{"id": "firstName", "label": "p", "kind": "slider"}],
            "submitLabel": "ok",
            "confirmation": {"message": "merci", "closeLabel": "fermer"}
        });
        assert!(FormBlueprint::from_value(value).is_err());
    }
}
