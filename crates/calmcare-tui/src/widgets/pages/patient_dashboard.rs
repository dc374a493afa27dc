//! `/patient`: vitals, daily challenges, food log and the weekly activity
//! chart.

use calmcare_core::{PatientOverview, CHALLENGE_RING};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};
use crate::widgets::{ListRows, ProgressRing, WeekBars};

use super::{card, stat_row, STAT_ROW_HEIGHT};

pub struct PatientDashboardPage<'a> {
    view: &'a PatientOverview,
}

impl<'a> PatientDashboardPage<'a> {
    pub fn new(view: &'a PatientOverview) -> Self {
        Self { view }
    }

    fn render_challenges(&self, area: Rect, buf: &mut Buffer) {
        let inner = card("Daily Challenges", area, buf);
        if self.view.challenges.is_empty() {
            return;
        }
        let count = self.view.challenges.len() as u32;
        let slots = Layout::horizontal(vec![Constraint::Ratio(1, count); count as usize])
            .split(inner);
        let colors = [palette::ACTIVITY, palette::WATER];
        for (i, (ring, slot)) in self.view.challenges.iter().zip(slots.iter()).enumerate() {
            ProgressRing::new(CHALLENGE_RING, ring.percentage)
                .color(colors[i % colors.len()])
                .labels(&ring.label, &ring.sub_label)
                .render(*slot, buf);
        }
    }

    fn render_activity(&self, area: Rect, buf: &mut Buffer) {
        let title = format!("Activity · {}", self.view.activity_period);
        let inner = card(&title, area, buf);
        let [chart, totals] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(22)]).areas(inner);

        WeekBars::new(&self.view.activity)
            .color(palette::BAR)
            .caption(&self.view.activity_caption)
            .render(chart, buf);

        for (i, metric) in self.view.totals.iter().enumerate() {
            let y = totals.y + 1 + i as u16;
            if y >= totals.bottom() {
                break;
            }
            let line = Line::from(vec![
                Span::styled(format!(" {:<9}", metric.label), styles::text_muted()),
                Span::styled(metric.display_value(), styles::text_primary()),
            ]);
            buf.set_line(totals.x, y, &line, totals.width);
        }
    }
}

impl Widget for PatientDashboardPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [vitals, middle, activity] = Layout::vertical([
            Constraint::Length(STAT_ROW_HEIGHT),
            Constraint::Min(8),
            Constraint::Length(11),
        ])
        .areas(area);

        stat_row(
            &self.view.vitals,
            &[
                palette::HEART,
                palette::SLEEP,
                palette::WATER,
                palette::CALORIES,
            ],
            vitals,
            buf,
        );

        let [challenges, food] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(middle);
        self.render_challenges(challenges, buf);

        let food_inner = card("Food", food, buf);
        ListRows::new(&self.view.foods)
            .selected(self.view.active_food)
            .render(food_inner, buf);

        self.render_activity(activity, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use calmcare_core::{DashboardSource, MockDashboard};

    fn render() -> TestTerminal {
        let view = MockDashboard::new().patient_overview();
        let mut term = TestTerminal::with_size(100, 34);
        term.render_widget(PatientDashboardPage::new(&view), term.area());
        term
    }

    #[test]
    fn test_vitals_row() {
        let term = render();
        assert!(term.line_contains(0, "Heart Rate"));
        assert!(term.line_contains(0, "Calories"));
        assert!(term.buffer_contains("80 Bpm"));
        assert!(term.buffer_contains("1486 Kcl"));
    }

    #[test]
    fn test_challenge_rings() {
        let term = render();
        assert!(term.buffer_contains("Daily Challenges"));
        assert!(term.buffer_contains("60%"));
        assert!(term.buffer_contains("40%"));
        assert!(term.buffer_contains("9000 steps left"));
    }

    #[test]
    fn test_food_list_and_activity() {
        let term = render();
        assert!(term.buffer_contains("Almonds"));
        assert!(term.buffer_contains("553 cal"));
        assert!(term.buffer_contains("Activity · November, 2023"));
        assert!(term.buffer_contains("8.5 KM"));
        assert!(term.buffer_contains("10400"));
    }
}
