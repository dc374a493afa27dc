//! Help overlay listing the key bindings.

use calmcare_core::Portal;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::layout::centered;
use crate::theme::styles;

const GLOBAL: &[(&str, &str)] = &[
    ("?", "toggle this help"),
    ("q", "quit (closes help first)"),
    ("Ctrl+C", "quit immediately"),
];

const PORTAL: &[(&str, &str)] = &[
    ("1-9", "jump to sidebar entry"),
    ("p", "sidebar footer link"),
];

const PAGES: &[(&str, &str)] = &[
    ("h n s ←/→", "mood (Mental Health)"),
    ("j k ↑/↓", "move selection (Provider)"),
    ("Enter", "open patient"),
    ("Esc b", "back to the list"),
    ("e", "edit doctor's notes"),
];

const FORMS: &[(&str, &str)] = &[
    ("Tab ↑/↓", "move between fields"),
    ("Enter", "submit"),
    ("Ctrl+N", "switch between sign in and sign up"),
    ("Esc", "back to the landing page"),
];

pub struct HelpOverlay {
    portal: Portal,
}

impl HelpOverlay {
    pub fn new(portal: Portal) -> Self {
        Self { portal }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut sections: Vec<(&str, &[(&str, &str)])> = vec![("General", GLOBAL)];
        match self.portal {
            Portal::Patient | Portal::Provider => {
                sections.push(("Navigation", PORTAL));
                sections.push(("Pages", PAGES));
            }
            Portal::Public => sections.push(("Forms", FORMS)),
        }

        let mut lines = Vec::new();
        for (title, bindings) in sections {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(title, styles::accent_bold())));
            for (key, action) in bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<12}", key), styles::keybinding()),
                    Span::styled(*action, styles::text_secondary()),
                ]));
            }
        }
        lines
    }
}

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let height = lines.len() as u16 + 2;
        let popup = centered(area, 56, height);

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(styles::modal_block("Keys"))
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_portal_help() {
        let mut term = TestTerminal::new();
        term.render_widget(HelpOverlay::new(Portal::Patient), term.area());
        assert!(term.buffer_contains("Keys"));
        assert!(term.buffer_contains("jump to sidebar entry"));
        assert!(!term.buffer_contains("switch between sign in"));
    }

    #[test]
    fn test_public_help() {
        let mut term = TestTerminal::new();
        term.render_widget(HelpOverlay::new(Portal::Public), term.area());
        assert!(term.buffer_contains("switch between sign in"));
        assert!(!term.buffer_contains("jump to sidebar entry"));
    }
}
