use std::sync::{Arc, LazyLock};

use anyhow::{Context, Result, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use super::input::KeyAction;

macro_rules! keymap_source {
    () => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/keymap/default.keymap.json"
        ))
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeymapContext {
    /// Landing page, modal closed.
    Page,
    /// Text field or submit button focused.
    Form,
    /// Radio group or checkbox focused.
    Choice,
    Confirmation,
}

#[derive(Deserialize)]
struct BindingDocument {
    id: String,
    description: String,
    contexts: Vec<KeymapContext>,
    action: ActionDocument,
    combos: Vec<String>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum ActionDocument {
    Quit,
    OpenModal,
    CloseModal,
    Submit,
    Activate,
    Toggle,
    FieldStep { delta: i32 },
    OptionStep { delta: i32 },
}

impl From<ActionDocument> for KeyAction {
    fn from(action: ActionDocument) -> Self {
        match action {
            ActionDocument::Quit => KeyAction::Quit,
            ActionDocument::OpenModal => KeyAction::OpenModal,
            ActionDocument::CloseModal => KeyAction::CloseModal,
            ActionDocument::Submit => KeyAction::Submit,
            ActionDocument::Activate => KeyAction::Activate,
            ActionDocument::Toggle => KeyAction::Toggle,
            ActionDocument::FieldStep { delta } => KeyAction::FieldStep(delta),
            ActionDocument::OptionStep { delta } => KeyAction::OptionStep(delta),
        }
    }
}

#[derive(Debug)]
struct Binding {
    action: KeyAction,
    contexts: Vec<KeymapContext>,
    combos: Vec<KeyCombo>,
    /// Footer hint, e.g. `Tab/Down Next field`.
    hint: String,
}

impl TryFrom<BindingDocument> for Binding {
    type Error = anyhow::Error;

    fn try_from(doc: BindingDocument) -> Result<Self> {
        if doc.contexts.is_empty() {
            bail!("key binding '{}' has no context", doc.id);
        }
        if doc.combos.is_empty() {
            bail!("key binding '{}' has no key combo", doc.id);
        }
        let combos = doc
            .combos
            .iter()
            .map(|raw| KeyCombo::parse(raw).with_context(|| format!("key binding '{}'", doc.id)))
            .collect::<Result<Vec<_>>>()?;
        let keys = combos
            .iter()
            .map(|combo| combo.label.as_str())
            .collect::<Vec<_>>()
            .join("/");
        Ok(Self {
            action: doc.action.into(),
            contexts: doc.contexts,
            hint: format!("{keys} {}", doc.description),
            combos,
        })
    }
}

impl Binding {
    fn fires(&self, key: &KeyEvent, context: KeymapContext) -> bool {
        self.contexts.contains(&context) && self.combos.iter().any(|combo| combo.matches(key))
    }
}

/// One key combination such as `Ctrl+S` or `BackTab`.
#[derive(Debug)]
struct KeyCombo {
    code: KeyCode,
    modifiers: KeyModifiers,
    /// Letters and BackTab arrive with SHIFT depending on the terminal.
    shift_tolerant: bool,
    label: String,
}

impl KeyCombo {
    fn parse(raw: &str) -> Result<Self> {
        let label = raw.trim();
        let (prefix, key) = label.rsplit_once('+').unwrap_or(("", label));
        let key = key.trim();
        if key.is_empty() {
            bail!("combo '{raw}' names no key");
        }

        let mut modifiers = KeyModifiers::NONE;
        for token in prefix.split('+').map(str::trim).filter(|t| !t.is_empty()) {
            modifiers |= match token.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                other => bail!("unknown modifier '{other}' in '{raw}'"),
            };
        }

        let code = match key.to_ascii_lowercase().as_str() {
            "enter" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "space" => KeyCode::Char(' '),
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            single if single.chars().count() == 1 => {
                KeyCode::Char(single.chars().next().unwrap_or_default())
            }
            _ => bail!("unknown key '{key}' in '{raw}'"),
        };
        let shift_tolerant = !modifiers.contains(KeyModifiers::SHIFT)
            && match code {
                KeyCode::BackTab => true,
                KeyCode::Char(c) => c.is_alphabetic(),
                _ => false,
            };

        Ok(Self {
            code,
            modifiers,
            shift_tolerant,
            label: label.to_string(),
        })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        if code != self.code {
            return false;
        }
        let mut pressed = key.modifiers;
        if self.shift_tolerant {
            pressed.remove(KeyModifiers::SHIFT);
        }
        pressed == self.modifiers
    }
}

/// Ordered key bindings; the first matching entry wins.
#[derive(Debug)]
pub struct KeymapStore {
    bindings: Vec<Binding>,
}

impl KeymapStore {
    pub fn from_json(source: &str) -> Result<Self> {
        let documents: Vec<BindingDocument> =
            serde_json::from_str(source).context("keymap is not a list of key bindings")?;
        let bindings = documents
            .into_iter()
            .map(Binding::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { bindings })
    }

    pub fn classify(&self, key: &KeyEvent, context: KeymapContext) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|binding| binding.fires(key, context))
            .map(|binding| binding.action)
    }

    /// Hints for every binding active in `context`, in keymap order.
    pub fn help_text(&self, context: KeymapContext) -> Option<String> {
        let hints = self
            .bindings
            .iter()
            .filter(|binding| binding.contexts.contains(&context))
            .map(|binding| binding.hint.as_str())
            .collect::<Vec<_>>();
        (!hints.is_empty()).then(|| hints.join(" • "))
    }
}

static DEFAULT_STORE: LazyLock<Arc<KeymapStore>> = LazyLock::new(|| {
    Arc::new(KeymapStore::from_json(keymap_source!()).expect("invalid keymap/default.keymap.json"))
});

pub fn default_store() -> Arc<KeymapStore> {
    Arc::clone(&DEFAULT_STORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn enter_depends_on_context() {
        let store = default_store();
        let enter = key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            store.classify(&enter, KeymapContext::Page),
            Some(KeyAction::OpenModal)
        );
        assert_eq!(
            store.classify(&enter, KeymapContext::Form),
            Some(KeyAction::Activate)
        );
        assert_eq!(
            store.classify(&enter, KeymapContext::Choice),
            Some(KeyAction::Toggle)
        );
        assert_eq!(
            store.classify(&enter, KeymapContext::Confirmation),
            Some(KeyAction::CloseModal)
        );
    }

    #[test]
    fn space_types_in_text_fields() {
        let store = default_store();
        let space = key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(store.classify(&space, KeymapContext::Form), None);
        assert_eq!(
            store.classify(&space, KeymapContext::Choice),
            Some(KeyAction::Toggle)
        );
    }

    #[test]
    fn backtab_tolerates_shift() {
        let store = default_store();
        let backtab = key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(
            store.classify(&backtab, KeymapContext::Form),
            Some(KeyAction::FieldStep(-1))
        );
    }

    #[test]
    fn plain_q_only_quits_from_the_page() {
        let store = default_store();
        let q = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(store.classify(&q, KeymapContext::Page), Some(KeyAction::Quit));
        assert_eq!(store.classify(&q, KeymapContext::Form), None);
        let ctrl_q = key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(
            store.classify(&ctrl_q, KeymapContext::Form),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn help_lists_context_bindings() {
        let help = default_store()
            .help_text(KeymapContext::Confirmation)
            .expect("help");
        assert!(help.contains("Esc Close"));
        assert!(!help.contains("Submit"));
    }

    #[test]
    fn unknown_context_is_rejected() {
        let source = r#"[{"id":"x","description":"x","contexts":["nowhere"],"action":{"kind":"quit"},"combos":["q"]}]"#;
        let err = KeymapStore::from_json(source).unwrap_err();
        assert!(format!("{err:#}").contains("nowhere"));
    }
}
