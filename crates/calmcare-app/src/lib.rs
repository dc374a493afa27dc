//! # calmcare-app - Application State and Orchestration
//!
//! The Elm-architecture layer of CalmCare: [`Message`] in, [`handler::update`]
//! mutates [`AppState`], the TUI draws the result.
//!
//! ## Public API
//!
//! - [`AppState`] - Current location, page-local state, settings
//! - [`Message`] - Every event the application reacts to
//! - [`handler::update`] - Pure state transition, returns an [`UpdateResult`]
//! - [`InputKey`] - Terminal-independent key events
//! - [`config`] - TOML settings loading
//! - [`signals`] - SIGINT/SIGTERM forwarding

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod pages;
pub mod signals;
pub mod state;

pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use pages::{AuthForm, AuthKind, MoodSelector, PageState, PatientBrowser, RowCursor};
pub use state::{AppPhase, AppState};
