//! Main update function - handles state transitions (TEA pattern)

use calmcare_core::prelude::*;

use crate::message::Message;
use crate::pages::PageState;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.ticks = state.ticks.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate { path } => {
            state.navigate(&path);
            UpdateResult::none()
        }

        Message::ActivateNav(index) => {
            let Some(table) = state.sidebar() else {
                return UpdateResult::none();
            };
            match table.entry(index) {
                Some(item) => UpdateResult::message(Message::navigate(item.path)),
                None => {
                    trace!("No sidebar entry at {}", index);
                    UpdateResult::none()
                }
            }
        }

        // ─────────────────────────────────────────────────────────
        // Mental Health Page
        // ─────────────────────────────────────────────────────────
        Message::SelectMood(mood) => {
            if let PageState::Mental(selector) = &mut state.page {
                selector.select(mood);
                debug!("Mood set to {}", mood.label());
            }
            UpdateResult::none()
        }

        Message::CycleMood(delta) => {
            if let PageState::Mental(selector) = &mut state.page {
                selector.cycle(delta);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Provider Pages
        // ─────────────────────────────────────────────────────────
        Message::MovePatientCursor(delta) => {
            match &mut state.page {
                PageState::ProviderPatients(browser) => browser.move_cursor(delta),
                PageState::ProviderOverview(cursor) => cursor.move_by(delta),
                _ => {}
            }
            UpdateResult::none()
        }

        Message::OpenSelectedPatient => {
            if let PageState::ProviderPatients(browser) = &mut state.page {
                if browser.open_selected() {
                    debug!("Opened patient detail #{}", browser.cursor());
                }
            }
            UpdateResult::none()
        }

        Message::ClosePatient => {
            if let PageState::ProviderPatients(browser) = &mut state.page {
                browser.close();
            }
            UpdateResult::none()
        }

        Message::FocusNotes => {
            if let PageState::ProviderPatients(browser) = &mut state.page {
                browser.focus_notes();
            }
            UpdateResult::none()
        }

        Message::BlurNotes => {
            if let PageState::ProviderPatients(browser) = &mut state.page {
                browser.blur_notes();
            }
            UpdateResult::none()
        }

        Message::NotesInput(c) => {
            if let PageState::ProviderPatients(browser) = &mut state.page {
                browser.push_note(c);
            }
            UpdateResult::none()
        }

        Message::NotesBackspace => {
            if let PageState::ProviderPatients(browser) = &mut state.page {
                browser.pop_note();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Auth Forms
        // ─────────────────────────────────────────────────────────
        Message::FormInput(c) => {
            if let Some(form) = state.page.auth_form_mut() {
                form.input(c);
            }
            UpdateResult::none()
        }

        Message::FormBackspace => {
            if let Some(form) = state.page.auth_form_mut() {
                form.backspace();
            }
            UpdateResult::none()
        }

        Message::FormNextField => {
            if let Some(form) = state.page.auth_form_mut() {
                form.next_field();
            }
            UpdateResult::none()
        }

        Message::FormPrevField => {
            if let Some(form) = state.page.auth_form_mut() {
                form.prev_field();
            }
            UpdateResult::none()
        }

        Message::FormSubmit => {
            if let Some(form) = state.page.auth_form_mut() {
                debug!("{} submitted (no backend)", form.kind().submit_label());
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Overlays
        // ─────────────────────────────────────────────────────────
        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::none()
        }
    }
}
