use anyhow::{Context, Result};
use serde_json::Value;

use crate::{domain::FormBlueprint, form::RegistrationDraft};

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

pub fn blueprint_from_str(contents: &str, format: DocumentFormat) -> Result<FormBlueprint> {
    FormBlueprint::from_value(parse_document_str(contents, format)?)
}

/// Read a registration document (the seven form values plus the newsletter flag).
pub fn draft_from_str(contents: &str, format: DocumentFormat) -> Result<RegistrationDraft> {
    let value = parse_document_str(contents, format)?;
    serde_json::from_value(value).context("document is not a registration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_accepts_numeric_quantity() {
        let draft = draft_from_str(
            r#"{"firstName":"Jo","lastName":"Doe","quantity":3,"termsAccepted":true}"#,
            DocumentFormat::Json,
        )
        .expect("draft");
        assert_eq!(draft.quantity, "3");
        assert!(draft.terms_accepted);
        assert!(draft.email.is_empty());
    }

    #[test]
    fn malformed_blueprint_reports_context() {
        let err = blueprint_from_str(r#"{"title": 3}"#, DocumentFormat::Json).unwrap_err();
        assert!(err.to_string().contains("form blueprint"));
    }
}
