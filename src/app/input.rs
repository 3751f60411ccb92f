use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::form::FormCommand;

use super::keymap::{KeymapContext, KeymapStore};

/// Actions a key binding can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    OpenModal,
    CloseModal,
    Submit,
    /// Enter on a text field or on the submit button.
    Activate,
    Toggle,
    FieldStep(i32),
    OptionStep(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Quit,
    OpenModal,
    CloseModal,
    Activate,
}

#[derive(Debug, Clone)]
pub enum CommandDispatch {
    App(AppCommand),
    Form(FormCommand),
    /// Unbound key handed to the focused field.
    Input(KeyEvent),
    None,
}

#[derive(Debug, Clone)]
pub struct InputRouter {
    keymap: Arc<KeymapStore>,
}

impl InputRouter {
    pub fn new(keymap: Arc<KeymapStore>) -> Self {
        Self { keymap }
    }

    pub fn route(&self, key: &KeyEvent, context: KeymapContext) -> CommandDispatch {
        match self.keymap.classify(key, context) {
            Some(action) => action_dispatch(action),
            None if matches!(context, KeymapContext::Form | KeymapContext::Choice) => {
                CommandDispatch::Input(*key)
            }
            None => CommandDispatch::None,
        }
    }
}

fn action_dispatch(action: KeyAction) -> CommandDispatch {
    match action {
        KeyAction::Quit => CommandDispatch::App(AppCommand::Quit),
        KeyAction::OpenModal => CommandDispatch::App(AppCommand::OpenModal),
        KeyAction::CloseModal => CommandDispatch::App(AppCommand::CloseModal),
        KeyAction::Activate => CommandDispatch::App(AppCommand::Activate),
        KeyAction::Submit => CommandDispatch::Form(FormCommand::Submit),
        KeyAction::Toggle => CommandDispatch::Form(FormCommand::Toggle),
        KeyAction::FieldStep(delta) => CommandDispatch::Form(FormCommand::FocusStep(delta)),
        KeyAction::OptionStep(delta) => CommandDispatch::Form(FormCommand::OptionStep(delta)),
    }
}
