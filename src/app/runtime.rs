use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

use crate::{
    domain::{FormBlueprint, HeroBlueprint},
    form::{FormCommand, FormEngine, FormOutcome, FormState, Registration},
    presentation::{self, UiContext},
};

use super::{
    input::{AppCommand, CommandDispatch, InputRouter},
    keymap::KeymapContext,
    modal::ModalController,
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

pub(crate) struct App {
    form: FormState,
    modal: ModalController,
    title: String,
    hero: HeroBlueprint,
    options: UiOptions,
    status: StatusLine,
    input_router: InputRouter,
    confirmed: Vec<Registration>,
    exit_armed: bool,
    should_quit: bool,
}

impl App {
    pub fn new(blueprint: &FormBlueprint, form: FormState, options: UiOptions) -> Self {
        Self {
            form,
            modal: ModalController::new(options.narrow_breakpoint),
            title: blueprint.title.clone(),
            hero: blueprint.hero.clone(),
            input_router: InputRouter::new(options.keymap_store.clone()),
            options,
            status: StatusLine::new(),
            confirmed: Vec::new(),
            exit_armed: false,
            should_quit: false,
        }
    }

    /// Drive the terminal until the user quits; returns every registration
    /// confirmed during the session, in order.
    pub fn run(&mut self) -> Result<Vec<Registration>> {
        let mut terminal = TerminalGuard::new()?;
        self.modal.resize(terminal.width()?);
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                    self.modal.resize(width);
                }
                _ => {}
            }
        }
        Ok(std::mem::take(&mut self.confirmed))
    }

    fn context(&self) -> KeymapContext {
        if !self.modal.is_open() {
            KeymapContext::Page
        } else if self.form.is_confirmation_visible() {
            KeymapContext::Confirmation
        } else if self
            .form
            .focused_field()
            .is_some_and(|field| field.is_choice())
        {
            KeymapContext::Choice
        } else {
            KeymapContext::Form
        }
    }

    fn current_help_text(&self) -> Option<String> {
        if !self.options.show_help {
            return None;
        }
        self.options.keymap_store.help_text(self.context())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = self.current_help_text();
        presentation::draw(
            frame,
            &self.form,
            UiContext {
                title: &self.title,
                hero: &self.hero,
                hero_visible: self.modal.hero_visible(),
                modal_open: self.modal.is_open(),
                status_message: self.status.message(),
                error_count: self.form.visible_errors(),
                help: help.as_deref(),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.input_router.route(&key, self.context()) {
            CommandDispatch::App(command) => self.handle_app_command(command),
            CommandDispatch::Form(command) => {
                self.exit_armed = false;
                self.dispatch_form_command(command);
            }
            CommandDispatch::Input(event) => {
                self.exit_armed = false;
                self.dispatch_form_command(FormCommand::Edit(event));
            }
            CommandDispatch::None => {}
        }
    }

    fn handle_app_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => self.on_exit(),
            AppCommand::OpenModal => {
                self.modal.open();
                self.status.form_opened();
            }
            AppCommand::CloseModal => {
                self.modal.close_and_reset(&mut self.form);
                self.exit_armed = false;
                self.status.ready();
            }
            AppCommand::Activate => {
                let command = if self.form.submit_focused() {
                    FormCommand::Submit
                } else {
                    FormCommand::FocusStep(1)
                };
                self.dispatch_form_command(command);
            }
        }
    }

    fn dispatch_form_command(&mut self, command: FormCommand) {
        let clock = self.options.clock();
        let outcome = FormEngine::new(&mut self.form, clock.as_ref()).apply(command);
        match outcome {
            FormOutcome::Idle => {
                if let Some(field) = self.form.focused_field() {
                    self.status.editing(&field.label);
                } else if self.form.submit_focused() {
                    self.status.set_raw(format!("Enter: {}", self.form.submit_label));
                }
            }
            FormOutcome::Confirmed(registration) => {
                self.confirmed.push(registration);
                self.status.registered(self.confirmed.len());
            }
            FormOutcome::Rejected { flagged } => self.status.issues_remaining(flagged),
        }
    }

    fn on_exit(&mut self) {
        let unsubmitted = self.modal.is_open()
            && self.form.is_form_visible()
            && self.form.is_dirty();
        if self.options.confirm_exit && unsubmitted && !self.exit_armed {
            self.exit_armed = true;
            self.status
                .set_raw("Unsubmitted input. Press Ctrl+Q again to quit.");
            return;
        }
        self.should_quit = true;
    }
}

#[cfg(test)]
impl App {
    pub(crate) fn handle_key_for_test(&mut self, key: KeyEvent) {
        self.handle_key(key)
    }

    pub(crate) fn form_for_test(&self) -> &FormState {
        &self.form
    }

    pub(crate) fn modal_for_test(&mut self) -> &mut ModalController {
        &mut self.modal
    }

    pub(crate) fn confirmed_for_test(&self) -> &[Registration] {
        &self.confirmed
    }

    pub(crate) fn status_for_test(&self) -> &str {
        self.status.message()
    }

    pub(crate) fn should_quit_for_test(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn draw_for_test(&self, frame: &mut ratatui::Frame<'_>) {
        self.draw(frame)
    }
}
