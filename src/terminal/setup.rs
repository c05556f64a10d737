//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen and capture mouse events.
///
/// Mouse capture reports pointer motion, which drives hover effects.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored so this is safe
/// to call more than once and from a panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
