//! Message types for the application (TEA pattern)

use calmcare_core::Mood;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    /// Quit from a normal key binding; closes the help overlay first
    RequestQuit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Route to a path; unknown paths redirect
    Navigate { path: String },

    /// Follow the n-th entry (zero-based) of the current sidebar
    ActivateNav(usize),

    // ─────────────────────────────────────────────────────────
    // Mental Health Page
    // ─────────────────────────────────────────────────────────
    SelectMood(Mood),

    /// Move the mood selection left (-1) or right (+1), wrapping
    CycleMood(i32),

    // ─────────────────────────────────────────────────────────
    // Provider Pages
    // ─────────────────────────────────────────────────────────
    /// Move the roster cursor by a signed delta
    MovePatientCursor(i32),

    /// Open the detail view for the row under the cursor
    OpenSelectedPatient,

    /// Back from the detail view to the list
    ClosePatient,

    /// Start editing the doctor's notes
    FocusNotes,

    /// Stop editing the doctor's notes
    BlurNotes,

    NotesInput(char),
    NotesBackspace,

    // ─────────────────────────────────────────────────────────
    // Auth Forms
    // ─────────────────────────────────────────────────────────
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPrevField,

    /// Submit the form (goes nowhere)
    FormSubmit,

    // ─────────────────────────────────────────────────────────
    // Overlays
    // ─────────────────────────────────────────────────────────
    ToggleHelp,
}

impl Message {
    pub fn navigate(path: impl Into<String>) -> Self {
        Message::Navigate { path: path.into() }
    }
}
