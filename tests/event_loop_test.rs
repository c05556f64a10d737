// Integration tests for the async event loop: the animation clock keeps
// pace with wall time while events stream in faster than the tick.

mod common;

use std::io;
use std::time::Duration;

use common::{animated_app, render_text};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use profile::app::run_app;
use profile::content::PROFILE;
use ratatui::{backend::TestBackend, Terminal};

/// Mouse motion every `gap`, `count` times, then `q`.
fn busy_pointer(count: u32, gap: Duration) -> impl futures::Stream<Item = io::Result<Event>> {
    futures::stream::unfold(0u32, move |n| async move {
        if n > count {
            return None;
        }
        tokio::time::sleep(gap).await;
        let event = if n < count {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column: (n % 100) as u16,
                row: 20,
                modifiers: KeyModifiers::NONE,
            })
        } else {
            Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))
        };
        Some((Ok(event), n + 1))
    })
}

#[tokio::test]
async fn test_clock_advances_under_continuous_mouse_motion() {
    let mut app = animated_app();
    let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();

    // ~600ms of pointer motion, one event every 5ms
    let events = Box::pin(busy_pointer(120, Duration::from_millis(5)));
    run_app(&mut terminal, &mut app, events).await.unwrap();

    assert!(app.should_quit);
    assert!(
        app.page_elapsed() >= Duration::from_millis(500),
        "clock stalled at {:?}",
        app.page_elapsed()
    );
    // Page fade is over, so the page is visible
    assert!(render_text(&app, 140, 48).contains(PROFILE.name));
}

#[tokio::test]
async fn test_loop_ends_when_events_end() {
    let mut app = animated_app();
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    let events = Box::pin(futures::stream::empty::<io::Result<Event>>());
    run_app(&mut terminal, &mut app, events).await.unwrap();
    assert!(!app.should_quit);
}
