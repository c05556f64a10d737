//! Panic hook that puts the terminal back before the panic message prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal restore in front of the current panic hook.
///
/// Call before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        tracing::error!(%info, "panic");
        previous(info);
    }));
}
