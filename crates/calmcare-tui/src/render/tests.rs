//! Full-screen rendering tests

use calmcare_app::handler::update;
use calmcare_app::{AppState, Message};
use calmcare_core::Route;

use super::*;
use crate::test_utils::{state_at, TestTerminal};

const DATE: &str = "Sun, 18 Oct 2026";

fn draw(term: &mut TestTerminal, state: &AppState) {
    term.draw_with(|frame| view_with_date(frame, state, DATE));
}

fn render(path: &str) -> TestTerminal {
    let state = state_at(path);
    let mut term = TestTerminal::new();
    draw(&mut term, &state);
    term
}

/// True when `label` is drawn on the accent background in the sidebar
fn sidebar_highlights(term: &TestTerminal, label: &str) -> bool {
    let buf = term.buffer();
    (0..buf.area.height).any(|y| {
        let line: String = (0..layout::SIDEBAR_WIDTH)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect();
        line.contains(label) && buf[(1, y)].bg == palette::ACCENT
    })
}

#[test]
fn test_landing_has_no_shell() {
    let term = render("/");
    assert!(term.buffer_contains("Your daily wellness journey starts here"));
    assert!(!term.buffer_contains("Switch to Provider"));
    assert!(!term.buffer_contains(DATE));
    assert!(term.buffer_contains("get started"));
}

#[test]
fn test_patient_dashboard_shell() {
    let term = render("/patient");
    assert!(term.buffer_contains("Wellness"));
    assert!(term.buffer_contains("Welcome to Wellness!"));
    assert!(term.buffer_contains("Hi George,"));
    assert!(term.buffer_contains(DATE));
    assert!(sidebar_highlights(&term, "Dashboard"));
    assert!(!sidebar_highlights(&term, "Sleep"));
}

#[test]
fn test_unknown_path_shows_patient_dashboard() {
    let term = render("/does/not/exist");
    assert!(term.buffer_contains("Welcome to Wellness!"));
    assert!(sidebar_highlights(&term, "Dashboard"));
}

#[test]
fn test_patient_sidebar_exact_match_on_subpage() {
    let term = render("/patient/sleep");
    assert!(sidebar_highlights(&term, "Sleep"));
    assert!(!sidebar_highlights(&term, "Dashboard"));
    assert!(term.buffer_contains("Good morning, George! You slept well."));
}

#[test]
fn test_page_subtitles() {
    let cases = [
        ("/patient/activity", "Keep track of your fitness journey"),
        ("/patient/nutrition", "Track your calories and macros"),
        ("/patient/fitness", "Your workout plan for today"),
        ("/patient/mental", "Take a moment for yourself"),
        ("/provider", "Welcome back, Dr. Smith"),
        ("/provider/patients", "Manage your patient records"),
    ];
    for (path, subtitle) in cases {
        let term = render(path);
        assert!(term.buffer_contains(subtitle), "{} missing {:?}", path, subtitle);
    }
}

#[test]
fn test_provider_sidebar_prefix_highlight() {
    let term = render("/provider/patients");
    assert!(term.buffer_contains("Provider Portal"));
    assert!(sidebar_highlights(&term, "Patients"));
    assert!(!sidebar_highlights(&term, "Dashboard"));

    let term = render("/provider");
    assert!(sidebar_highlights(&term, "Dashboard"));
    assert!(!sidebar_highlights(&term, "Patients"));
}

#[test]
fn test_patient_detail_heading() {
    let mut state = state_at("/provider/patients");
    update(&mut state, Message::MovePatientCursor(2));
    update(&mut state, Message::OpenSelectedPatient);
    let mut term = TestTerminal::new();
    draw(&mut term, &state);

    assert!(term.buffer_contains("Patient Details"));
    assert!(term.buffer_contains("Viewing record for Suman Gupta"));
    assert!(sidebar_highlights(&term, "Patients"));
}

#[test]
fn test_detail_resets_after_navigating_away() {
    let mut state = state_at("/provider/patients");
    update(&mut state, Message::MovePatientCursor(0));
    update(&mut state, Message::OpenSelectedPatient);
    update(&mut state, Message::navigate("/provider"));
    update(&mut state, Message::navigate("/provider/patients"));

    let mut term = TestTerminal::new();
    draw(&mut term, &state);
    assert!(term.buffer_contains("All Patients"));
    assert!(!term.buffer_contains("Patient Details"));
}

#[test]
fn test_auth_pages() {
    let term = render("/signin");
    assert!(term.buffer_contains("Welcome Back"));
    assert!(!term.buffer_contains(DATE));
    assert!(term.buffer_contains("Ctrl+N"));

    let term = render("/signup");
    assert!(term.buffer_contains("Full Name"));
}

#[test]
fn test_help_overlay() {
    let mut state = state_at("/patient");
    update(&mut state, Message::ToggleHelp);
    let mut term = TestTerminal::new();
    draw(&mut term, &state);

    assert!(term.buffer_contains("Keys"));
    assert!(term.buffer_contains("jump to sidebar entry"));
    assert!(term.buffer_contains("close help"));
}

#[test]
fn test_profile_names_come_from_settings() {
    let mut state = state_at("/provider");
    state.settings.profile.provider_name = "Dr. Rao".to_string();
    let mut term = TestTerminal::new();
    draw(&mut term, &state);
    assert!(term.buffer_contains("Welcome back, Dr. Rao"));
}

#[test]
fn test_help_hint_can_be_hidden() {
    let mut state = state_at("/patient");
    state.settings.ui.show_help_hint = false;
    let mut term = TestTerminal::new();
    draw(&mut term, &state);
    let y = term.find_line("Hi George,").unwrap();
    assert!(!term.line_contains(y, "? help"));
}

#[test]
fn test_compact_terminal_drops_sidebar() {
    let state = state_at("/patient/sleep");
    let mut term = TestTerminal::compact();
    draw(&mut term, &state);
    assert!(term.buffer_contains("Sleep Monitor"));
    assert!(!term.buffer_contains("Switch to Provider"));
}

#[test]
fn test_every_route_renders_at_any_size() {
    for (width, height) in [(120, 40), (80, 24), (50, 20), (30, 8), (10, 3)] {
        for route in Route::ALL {
            let state = state_at(route.path());
            let mut term = TestTerminal::with_size(width, height);
            draw(&mut term, &state);
        }
    }
}
