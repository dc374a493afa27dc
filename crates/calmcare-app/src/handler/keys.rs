//! Key event handlers for each page

use calmcare_core::{Mood, Route};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::pages::PageState;
use crate::state::AppState;

/// Convert key events to messages based on the current page
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere, including text fields
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.show_help {
        return handle_key_help(key);
    }

    match &state.page {
        PageState::SignIn(form) | PageState::SignUp(form) => {
            handle_key_auth_form(form.kind().other(), key)
        }
        PageState::ProviderPatients(browser) if browser.editing_notes() => {
            handle_key_notes(key)
        }
        _ => handle_key_normal(state, key),
    }
}

/// Help overlay swallows everything except close and quit
fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('?') | InputKey::Esc => Some(Message::ToggleHelp),
        InputKey::Char('q') => Some(Message::RequestQuit),
        _ => None,
    }
}

fn handle_key_auth_form(other: Route, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::FormInput(c)),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPrevField),
        InputKey::Enter => Some(Message::FormSubmit),
        InputKey::Esc => Some(Message::navigate(Route::Landing.path())),
        InputKey::CharCtrl('n') => Some(Message::navigate(other.path())),
        _ => None,
    }
}

fn handle_key_notes(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::NotesInput(c)),
        InputKey::Enter => Some(Message::NotesInput('\n')),
        InputKey::Backspace => Some(Message::NotesBackspace),
        InputKey::Esc => Some(Message::BlurNotes),
        _ => None,
    }
}

/// Bindings shared by every non-text page, then the page's own bindings
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => return Some(Message::RequestQuit),
        InputKey::Char('?') => return Some(Message::ToggleHelp),
        _ => {}
    }

    if let Some(table) = state.sidebar() {
        if let Some(slot) = key.nav_slot() {
            return Some(Message::ActivateNav(slot));
        }
        if key == InputKey::Char('p') {
            return Some(Message::navigate(table.footer.path));
        }
    }

    match &state.page {
        PageState::Mental(_) => handle_key_mental(key),
        PageState::ProviderOverview(_) => handle_key_provider_overview(key),
        PageState::ProviderPatients(browser) => {
            if browser.is_detail() {
                handle_key_patient_detail(key)
            } else {
                handle_key_patient_list(key)
            }
        }
        _ if state.route() == Route::Landing => handle_key_landing(key),
        _ => None,
    }
}

fn handle_key_landing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('g') => Some(Message::navigate(Route::SignUp.path())),
        InputKey::Char('i') => Some(Message::navigate(Route::SignIn.path())),
        InputKey::Char('d') => Some(Message::navigate(Route::PatientDashboard.path())),
        _ => None,
    }
}

fn handle_key_mental(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('h') => Some(Message::SelectMood(Mood::Happy)),
        InputKey::Char('n') => Some(Message::SelectMood(Mood::Neutral)),
        InputKey::Char('s') => Some(Message::SelectMood(Mood::Sad)),
        InputKey::Left => Some(Message::CycleMood(-1)),
        InputKey::Right => Some(Message::CycleMood(1)),
        _ => None,
    }
}

fn handle_key_provider_overview(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MovePatientCursor(-1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MovePatientCursor(1)),
        InputKey::Enter | InputKey::Char('v') => {
            Some(Message::navigate(Route::ProviderPatients.path()))
        }
        _ => None,
    }
}

fn handle_key_patient_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MovePatientCursor(-1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MovePatientCursor(1)),
        InputKey::Enter => Some(Message::OpenSelectedPatient),
        _ => None,
    }
}

fn handle_key_patient_detail(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Backspace | InputKey::Char('b') => Some(Message::ClosePatient),
        InputKey::Char('e') => Some(Message::FocusNotes),
        _ => None,
    }
}
