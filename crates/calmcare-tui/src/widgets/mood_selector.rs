//! Three-way mood picker for the mental health page.

use calmcare_app::MoodSelector;
use calmcare_core::Mood;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};

use super::display_width;

/// Key that picks each mood directly
fn shortcut(mood: Mood) -> char {
    match mood {
        Mood::Happy => 'h',
        Mood::Neutral => 'n',
        Mood::Sad => 's',
    }
}

pub struct MoodPicker<'a> {
    selector: &'a MoodSelector,
    icons: IconSet,
}

impl<'a> MoodPicker<'a> {
    pub fn new(selector: &'a MoodSelector, icons: IconSet) -> Self {
        Self { selector, icons }
    }
}

impl Widget for MoodPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let slots: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);

        for (mood, slot) in Mood::ALL.into_iter().zip(slots) {
            let active = self.selector.is_active(mood);
            let block = styles::card_block(active);
            let inner = block.inner(slot);
            block.render(slot, buf);
            if inner.height == 0 {
                continue;
            }

            let style = if active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            let face = Line::from(vec![
                Span::styled(format!(" {} {} ", self.icons.mood(mood), mood.label()), style),
                Span::styled(format!(" {}", shortcut(mood)), styles::keybinding()),
            ]);
            let width = face.width() as u16;
            let x = inner.x + inner.width.saturating_sub(width) / 2;
            let y = inner.y + inner.height.saturating_sub(1) / 2;
            buf.set_line(x, y, &face, inner.width);

            if active && inner.height >= 3 {
                let mark = "selected";
                let x = inner.x + inner.width.saturating_sub(display_width(mark)) / 2;
                buf.set_string(x, y + 1, mark, styles::accent());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use calmcare_app::config::IconMode;
    use crate::theme::palette;

    fn render(selector: &MoodSelector) -> TestTerminal {
        let mut term = TestTerminal::with_size(60, 5);
        term.render_widget(
            MoodPicker::new(selector, IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        term
    }

    fn label_bg(term: &TestTerminal, label: &str) -> ratatui::style::Color {
        let y = term.find_line(label).unwrap();
        let cells: Vec<&str> = (0..60).map(|x| term.buffer()[(x, y)].symbol()).collect();
        let x = cells
            .windows(label.len())
            .position(|w| w.concat() == label)
            .unwrap() as u16;
        term.buffer()[(x, y)].bg
    }

    #[test]
    fn test_happy_selected_on_mount() {
        let term = render(&MoodSelector::new());
        assert_eq!(label_bg(&term, "Happy"), palette::ACCENT);
        assert_ne!(label_bg(&term, "Sad"), palette::ACCENT);
        assert!(term.buffer_contains("selected"));
    }

    #[test]
    fn test_selection_moves() {
        let mut selector = MoodSelector::new();
        selector.select(Mood::Sad);
        let term = render(&selector);
        assert_eq!(label_bg(&term, "Sad"), palette::ACCENT);
        assert_ne!(label_bg(&term, "Happy"), palette::ACCENT);
    }

    #[test]
    fn test_all_moods_and_shortcuts_shown() {
        let term = render(&MoodSelector::new());
        for label in ["Happy", "Neutral", "Sad"] {
            assert!(term.buffer_contains(label));
        }
        assert!(term.buffer_contains(" h"));
        assert!(term.buffer_contains(" s"));
    }
}
