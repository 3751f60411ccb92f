mod actions;
mod field;
mod reducers;
mod registration;
mod state;

pub use actions::{FormCommand, FormEvent, FormOutcome};
pub use field::{FieldKey, FieldState, FieldValue};
pub use reducers::FormEngine;
pub use registration::{FieldIssue, Registration, RegistrationDraft};
pub use state::{FormState, FormView, SubmitColor};
