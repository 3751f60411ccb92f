#![deny(rust_2018_idioms)]

//! GameOn sign-up page in the terminal: a hero screen, a registration modal
//! with live per-field validation, and a confirmation panel.

pub mod app;
pub mod domain;
pub mod form;
pub mod io;
pub mod presentation;
pub mod validation;

pub use app::{ModalController, RegistrationUi, UiOptions};
pub use domain::{BindError, FieldId, FormBlueprint, bind, default_blueprint};
pub use form::{FormCommand, FormEngine, FormOutcome, FormState, Registration, RegistrationDraft};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, blueprint_from_str, draft_from_str,
    emit_registrations, parse_document_str,
};
pub use validation::{Clock, FieldStatus, FixedClock, SystemClock};

pub mod prelude {
    pub use super::{FormBlueprint, Registration, RegistrationUi, UiOptions};
}

#[cfg(test)]
mod tests;
