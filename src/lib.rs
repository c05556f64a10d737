//! Renn Profile - a terminal profile page
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod motion;
pub mod state;
pub mod terminal;
pub mod ui;
