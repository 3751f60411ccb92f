use tracing::info;

use crate::form::FormState;

/// Terminal width at or below which the hero section yields to the modal.
pub const DEFAULT_NARROW_BREAKPOINT: u16 = 64;

/// Visibility of the modal overlay and of the landing page's hero section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalController {
    overlay_visible: bool,
    hero_visible: bool,
    width: u16,
    narrow_breakpoint: u16,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new(DEFAULT_NARROW_BREAKPOINT)
    }
}

impl ModalController {
    pub fn new(narrow_breakpoint: u16) -> Self {
        Self {
            overlay_visible: false,
            hero_visible: true,
            width: u16::MAX,
            narrow_breakpoint,
        }
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.resize(width);
        self
    }

    pub fn is_open(&self) -> bool {
        self.overlay_visible
    }

    pub fn hero_visible(&self) -> bool {
        self.hero_visible
    }

    pub fn is_narrow(&self) -> bool {
        self.width <= self.narrow_breakpoint
    }

    pub fn open(&mut self) {
        self.overlay_visible = true;
        if self.is_narrow() {
            self.hero_visible = false;
        }
        info!(narrow = self.is_narrow(), "modal opened");
    }

    pub fn close(&mut self) {
        self.overlay_visible = false;
        if self.is_narrow() {
            self.hero_visible = true;
        }
        info!("modal closed");
    }

    pub fn resize(&mut self, width: u16) {
        self.width = width;
        if !self.is_narrow() {
            self.hero_visible = true;
        } else if self.overlay_visible {
            self.hero_visible = false;
        }
    }

    /// Blank every field, hide every message and border, neutral submit
    /// colour, and bring the form back if the confirmation was showing.
    pub fn reset_form(&self, form: &mut FormState) {
        form.reset();
    }

    pub fn close_and_reset(&mut self, form: &mut FormState) {
        self.reset_form(form);
        self.close();
    }
}
