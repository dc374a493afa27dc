//! Handler module - TEA update function and key bindings
//!
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event to message mapping per page

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Result of processing a message
#[derive(Debug, Default, PartialEq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
