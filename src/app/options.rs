use std::{sync::Arc, time::Duration};

use anyhow::Result;

use crate::validation::{Clock, SystemClock};

use super::{
    keymap::{self, KeymapStore},
    modal::DEFAULT_NARROW_BREAKPOINT,
};

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub show_help: bool,
    /// Ask for a second quit key press while the form holds unsubmitted input.
    pub confirm_exit: bool,
    /// Widths at or below this many columns hide the hero while the modal is open.
    pub narrow_breakpoint: u16,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) keymap_store: Arc<KeymapStore>,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            show_help: true,
            confirm_exit: true,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            clock: Arc::new(SystemClock),
            keymap_store: keymap::default_store(),
        }
    }
}

impl UiOptions {
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_narrow_breakpoint(mut self, columns: u16) -> Self {
        self.narrow_breakpoint = columns;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the bundled key bindings with a JSON keymap document.
    pub fn with_keymap_json(mut self, source: &str) -> Result<Self> {
        self.keymap_store = Arc::new(KeymapStore::from_json(source)?);
        Ok(self)
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}
