//! `/patient/mental`: mood check-in, mindfulness minutes, the daily pick and
//! two track lists.

use calmcare_app::MoodSelector;
use calmcare_core::MentalView;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::{ListRows, MoodPicker, WeekBars};

use super::card;

pub struct MentalPage<'a> {
    view: &'a MentalView,
    selector: &'a MoodSelector,
    icons: IconSet,
}

impl<'a> MentalPage<'a> {
    pub fn new(view: &'a MentalView, selector: &'a MoodSelector, icons: IconSet) -> Self {
        Self {
            view,
            selector,
            icons,
        }
    }

    fn render_mindfulness(&self, area: Rect, buf: &mut Buffer) {
        let metric = &self.view.mindfulness;
        let inner = card(&metric.label, area, buf);
        if inner.height < 3 {
            return;
        }
        let total = Line::from(vec![
            Span::styled(format!(" {}", metric.value), styles::accent_bold()),
            Span::raw(" "),
            Span::styled(metric.unit.as_str(), styles::text_muted()),
        ]);
        buf.set_line(inner.x, inner.y, &total, inner.width);

        let bars = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };
        WeekBars::new(&self.view.mindfulness_bars)
            .color(palette::MIND)
            .render(bars, buf);
    }

    fn render_daily_pick(&self, area: Rect, buf: &mut Buffer) {
        let pick = &self.view.daily_pick;
        let title = pick.badge.as_deref().unwrap_or("Daily Pick");
        let inner = card(title, area, buf);

        let lines = vec![
            Line::from(Span::styled(pick.title.as_str(), styles::heading())),
            Line::from(Span::styled(pick.subtitle.as_str(), styles::text_secondary())),
            Line::default(),
            Line::from(vec![
                Span::styled(self.icons.play(), styles::accent()),
                Span::raw(" "),
                Span::styled(format!("Play · {}", pick.detail), styles::accent_bold()),
            ]),
        ];
        let padded = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(padded, buf);
    }
}

impl Widget for MentalPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [mood, middle, tracks] = Layout::vertical([
            Constraint::Length(7),
            Constraint::Min(9),
            Constraint::Length(8),
        ])
        .areas(area);

        let inner = card(&self.view.prompt, mood, buf);
        MoodPicker::new(self.selector, self.icons).render(inner, buf);

        let [mindfulness, pick] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(middle);
        self.render_mindfulness(mindfulness, buf);
        self.render_daily_pick(pick, buf);

        let [stories, focus] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(tracks);
        let inner = card("Sleep Stories", stories, buf);
        ListRows::new(&self.view.sleep_stories).render(inner, buf);
        let inner = card("Focus & Energy", focus, buf);
        ListRows::new(&self.view.focus_tracks).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use calmcare_app::config::IconMode;
    use calmcare_core::{DashboardSource, Mood, MockDashboard};

    fn render(selector: &MoodSelector) -> TestTerminal {
        let view = MockDashboard::new().mental();
        let mut term = TestTerminal::with_size(100, 30);
        term.render_widget(
            MentalPage::new(&view, selector, IconSet::new(IconMode::Unicode)),
            term.area(),
        );
        term
    }

    #[test]
    fn test_mental_page_sections() {
        let term = render(&MoodSelector::new());
        assert!(term.buffer_contains("How are you feeling?"));
        assert!(term.buffer_contains("145 min/week"));
        assert!(term.buffer_contains("Breathing for Anxiety"));
        assert!(term.buffer_contains("Play · 5 min"));
        assert!(term.buffer_contains("The Blue Forest"));
        assert!(term.buffer_contains("Pre-Work Reset"));
    }

    #[test]
    fn test_mood_selection_is_rendered() {
        let mut selector = MoodSelector::new();
        selector.select(Mood::Neutral);
        let term = render(&selector);

        let y = term.find_line("Neutral").unwrap();
        let cells: Vec<&str> = (0..100).map(|x| term.buffer()[(x, y)].symbol()).collect();
        let x = cells
            .windows(7)
            .position(|w| w.concat() == "Neutral")
            .unwrap() as u16;
        assert_eq!(term.buffer()[(x, y)].bg, palette::ACCENT);
    }
}
