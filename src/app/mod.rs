pub(crate) mod input;
pub(crate) mod keymap;
mod modal;
mod options;
mod registration_ui;
pub(crate) mod runtime;
mod status;
mod terminal;

pub use modal::{DEFAULT_NARROW_BREAKPOINT, ModalController};
pub use options::UiOptions;
pub use registration_ui::RegistrationUi;
