//! Bottom key-hint bar
//!
//! Hints follow the current page and its mode (list vs detail, editing
//! notes, filling a form).

use calmcare_app::{AppState, PageState};
use calmcare_core::Route;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// (key, action) pairs for the current state
pub fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    if state.show_help {
        return vec![("?/Esc", "close help"), ("q", "close")];
    }

    let mut hints = match &state.page {
        PageState::SignIn(_) | PageState::SignUp(_) => {
            return vec![
                ("Tab", "next field"),
                ("Enter", "submit"),
                ("Ctrl+N", "switch form"),
                ("Esc", "home"),
            ];
        }
        PageState::ProviderPatients(browser) if browser.editing_notes() => {
            return vec![("type", "notes"), ("Esc", "done")];
        }
        PageState::ProviderPatients(browser) if browser.is_detail() => {
            vec![("Esc/b", "back to list"), ("e", "edit notes")]
        }
        PageState::ProviderPatients(_) => vec![("↑/↓", "select"), ("Enter", "open")],
        PageState::ProviderOverview(_) => vec![("↑/↓", "select"), ("v", "view all")],
        PageState::Mental(_) => vec![("h/n/s", "mood"), ("←/→", "cycle")],
        PageState::Static if state.route() == Route::Landing => vec![
            ("Enter", "get started"),
            ("i", "sign in"),
            ("d", "demo dashboard"),
        ],
        PageState::Static => Vec::new(),
    };

    if state.sidebar().is_some() {
        hints.push(("1-6", "navigate"));
        hints.push(("p", "switch portal"));
    }
    hints.push(("?", "help"));
    hints.push(("q", "quit"));
    hints
}

pub struct KeyHints {
    hints: Vec<(&'static str, &'static str)>,
}

impl KeyHints {
    pub fn new(hints: Vec<(&'static str, &'static str)>) -> Self {
        Self { hints }
    }

    pub fn for_state(state: &AppState) -> Self {
        Self::new(hints(state))
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
