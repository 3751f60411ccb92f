//! Field validity predicates and the set of fields currently known valid.

mod clock;
mod rules;
mod state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use rules::{
    BIRTHDATE_LEN, MAX_AGE_YEARS, REQUIRED_MESSAGE, birthdate_in_range, birthdate_is_valid,
    email_matches, invalid_message, is_empty, name_matches, parse_birthdate, quantity_matches,
    text_matches, truncate_birthdate_input, years_before,
};
pub use state::{FieldInput, FieldStatus, FormValidationState};
