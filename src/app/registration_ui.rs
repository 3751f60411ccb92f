use anyhow::{Context, Result};

use crate::{
    domain::{FormBlueprint, bind, default_blueprint},
    form::{FormState, Registration},
};

use super::{options::UiOptions, runtime::App};

/// Entry point for the interactive registration page.
#[derive(Debug)]
pub struct RegistrationUi {
    blueprint: FormBlueprint,
    options: UiOptions,
}

impl Default for RegistrationUi {
    fn default() -> Self {
        Self::new(default_blueprint())
    }
}

impl RegistrationUi {
    pub fn new(blueprint: FormBlueprint) -> Self {
        Self {
            blueprint,
            options: UiOptions::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.blueprint.title = title.into();
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(self) -> Result<Vec<Registration>> {
        self.into_app()?.run()
    }

    pub(crate) fn into_app(self) -> Result<App> {
        let RegistrationUi { blueprint, options } = self;
        let handles = bind(&blueprint).context("form blueprint does not match the registration page")?;
        let form = FormState::from_blueprint(&blueprint, handles);
        Ok(App::new(&blueprint, form, options))
    }
}
