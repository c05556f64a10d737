//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{animated_app, render_text};
//!
//! let app = animated_app();
//! let text = render_text(&app, 120, 40);
//! ```

#![allow(dead_code)]

use profile::app::App;
use profile::cli::RunOptions;
use profile::config::ProfileConfig;
use profile::ui;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// App with animations enabled and default options.
pub fn animated_app() -> App {
    App::new(
        &ProfileConfig::default().with_animations(true),
        RunOptions::default(),
    )
}

/// App with animations disabled and default options.
pub fn static_app() -> App {
    App::new(&ProfileConfig::default(), RunOptions::default())
}

/// Tick until every entrance animation has settled.
pub fn settle(app: &mut App) {
    for _ in 0..1000 {
        if !app.is_animating() {
            return;
        }
        app.tick();
    }
    panic!("animations never settled");
}

/// Render one frame into a test buffer.
pub fn render_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Render one frame and return every row joined with newlines.
pub fn render_text(app: &App, width: u16, height: u16) -> String {
    let buffer = render_buffer(app, width, height);
    let mut text = String::new();
    for y in 0..height {
        for x in 0..width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
