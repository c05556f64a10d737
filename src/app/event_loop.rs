//! Async event loop driving App.

use std::io;
use std::time::Duration;

use crossterm::event::Event;
use futures::{Stream, StreamExt};
use ratatui::{backend::Backend, Terminal};
use tokio::time::{interval, Instant, MissedTickBehavior};

use super::App;
use crate::ui;

/// Run until quit is requested or `events` ends.
///
/// Redraws when dirty or animating. The animation clock follows wall time
/// and is advanced on every pass, so a busy event stream cannot stall it.
pub async fn run_app<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut events: S,
) -> Result<(), B::Error>
where
    B: Backend,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    let started = Instant::now();
    let mut ticker = interval(app.tick_interval.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        app.advance_clock(started.elapsed());
        if app.needs_redraw || app.is_animating() {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {}

            event_result = events.next() => {
                match event_result {
                    // Resize is handled by App; draw() picks up the new size
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "event stream error");
                    }
                    None => break,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
