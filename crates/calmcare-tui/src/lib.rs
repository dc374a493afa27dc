//! calmcare-tui - Terminal UI for CalmCare
//!
//! This crate provides the ratatui-based terminal interface: it owns the
//! terminal, polls key events into [`calmcare_app::Message`]s, and draws
//! [`calmcare_app::AppState`] with the page widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
