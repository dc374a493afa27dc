//! `/patient/activity`

use calmcare_core::ActivityView;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};
use crate::widgets::{ListRows, WeekBars};

use super::{card, stat_row, STAT_ROW_HEIGHT};

pub struct ActivityPage<'a> {
    view: &'a ActivityView,
}

impl<'a> ActivityPage<'a> {
    pub fn new(view: &'a ActivityView) -> Self {
        Self { view }
    }

    fn render_last_route(&self, area: Rect, buf: &mut Buffer) {
        let inner = card("Last Route", area, buf);
        let rows = [
            ("Distance", self.view.last_route_distance.as_str()),
            ("Time", self.view.last_route_time.as_str()),
        ];
        for (i, (label, value)) in rows.into_iter().enumerate() {
            let y = inner.y + 1 + i as u16 * 2;
            if y >= inner.bottom() {
                break;
            }
            let line = Line::from(vec![
                Span::styled(format!(" {:<10}", label), styles::text_muted()),
                Span::styled(value, styles::accent_bold()),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

impl Widget for ActivityPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [metrics, charts, recent] = Layout::vertical([
            Constraint::Length(STAT_ROW_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(8),
        ])
        .areas(area);

        stat_row(
            &self.view.metrics,
            &[
                palette::ACTIVITY,
                palette::CALORIES,
                palette::WATER,
                palette::ACCENT,
            ],
            metrics,
            buf,
        );

        let [intensity, last_route] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .areas(charts);
        let chart_area = card("Activity Intensity", intensity, buf);
        if chart_area.height > 1 {
            buf.set_string(
                chart_area.x + 1,
                chart_area.y,
                &self.view.intensity_caption,
                styles::text_muted(),
            );
            let bars = Rect {
                y: chart_area.y + 1,
                height: chart_area.height - 1,
                ..chart_area
            };
            WeekBars::new(&self.view.intensity)
                .color(palette::ACTIVITY)
                .render(bars, buf);
        }
        self.render_last_route(last_route, buf);

        let recent_inner = card("Recent Activities", recent, buf);
        ListRows::new(&self.view.recent).render(recent_inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use calmcare_core::{DashboardSource, MockDashboard};

    #[test]
    fn test_activity_page() {
        let view = MockDashboard::new().activity();
        let mut term = TestTerminal::with_size(100, 30);
        term.render_widget(ActivityPage::new(&view), term.area());

        assert!(term.buffer_contains("Daily Steps"));
        assert!(term.buffer_contains("10,400 steps"));
        assert!(term.buffer_contains("Heart Points gathered"));
        assert!(term.buffer_contains("5.2 km"));
        assert!(term.buffer_contains("42m 30s"));
        assert!(term.buffer_contains("Running"));
        assert!(term.buffer_contains("[45 min]"));
        assert!(term.buffer_contains("Today, 7:00 AM"));
    }
}
