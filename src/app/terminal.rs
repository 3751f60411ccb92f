use std::{
    io::{self, Stdout},
    ops::{Deref, DerefMut},
    panic,
    sync::Once,
};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, terminal};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

type Backend = CrosstermBackend<Stdout>;

/// Raw-mode alternate screen for the lifetime of the guard. The screen is
/// also given back if the UI panics.
pub struct TerminalGuard {
    inner: Terminal<Backend>,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, terminal::EnterAlternateScreen) {
            leave_screen();
            return Err(err).context("failed to enter alternate screen");
        }
        let inner = Terminal::new(Backend::new(stdout)).context("failed to initialize terminal")?;
        hook_panics();
        debug!("terminal acquired");
        Ok(Self { inner })
    }

    /// Current width in columns.
    pub fn width(&self) -> Result<u16> {
        terminal::size()
            .map(|(columns, _)| columns)
            .context("failed to query terminal size")
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.inner.show_cursor();
        leave_screen();
        debug!("terminal restored");
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<Backend>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

fn hook_panics() {
    static HOOKED: Once = Once::new();
    HOOKED.call_once(|| {
        let report = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            leave_screen();
            report(info);
        }));
    });
}

fn leave_screen() {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
}
