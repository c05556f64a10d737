//! Terminal lifecycle with RAII cleanup.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen with mouse capture enabled (hover effects need pointer motion), and
//! restores it when dropped. [`setup_panic_hook`] covers the panic path.
//!
//! ```no_run
//! use profile::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal once, on drop or on request.
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn restore(&mut self, writer: &mut impl io::Write) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(writer);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore(&mut io::stdout());
    }
}

/// Owns the ratatui terminal for the lifetime of the page.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen, then clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        tracing::debug!("terminal initialised");

        Ok(Self {
            terminal,
            guard: TerminalGuard { restored: false },
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn size(&self) -> Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }

    /// Restore the terminal now instead of on drop.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.restore(self.terminal.backend_mut());
        self.terminal.show_cursor()?;
        tracing::debug!("terminal restored");
        Ok(())
    }
}
