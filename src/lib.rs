//! CalmCare Wellness
//!
//! A terminal dashboard for patients and providers. The work is split
//! across the workspace crates:
//! - `calmcare-core`: routes, sidebar matching, ring geometry, view-models
//! - `calmcare-app`: state, messages, key handling, configuration
//! - `calmcare-tui`: ratatui rendering and the event loop
//!
//! This crate adds the binary's headless mode.

pub mod headless;

// Re-export main entry points
pub use calmcare_tui::run;
pub use headless::run as run_headless;
