//! Metric card: label in the border, value with unit, then a trend or
//! caption line.

use calmcare_core::MetricDatum;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

use super::truncate;

pub struct StatCard<'a> {
    metric: &'a MetricDatum,
    color: Color,
    focused: bool,
}

impl<'a> StatCard<'a> {
    pub fn new(metric: &'a MetricDatum) -> Self {
        Self {
            metric,
            color: palette::ACCENT,
            focused: false,
        }
    }

    /// Color of the value
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for StatCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(4) as usize;
        let block = styles::card_block(self.focused)
            .title(format!(" {} ", truncate(&self.metric.label, width)))
            .title_style(styles::text_secondary());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }

        let mut value = vec![
            Span::raw(" "),
            Span::styled(
                self.metric.value.as_str(),
                Style::default().fg(self.color).add_modifier(Modifier::BOLD),
            ),
        ];
        if !self.metric.unit.is_empty() {
            value.push(Span::raw(" "));
            value.push(Span::styled(self.metric.unit.as_str(), styles::text_muted()));
        }
        buf.set_line(inner.x, inner.y, &Line::from(value), inner.width);

        if inner.height < 2 {
            return;
        }
        let note = match (&self.metric.trend, &self.metric.caption) {
            (Some(trend), _) => Some(Span::styled(trend.as_str(), styles::trend_style())),
            (None, Some(caption)) => Some(Span::styled(caption.as_str(), styles::text_muted())),
            (None, None) => None,
        };
        if let Some(note) = note {
            let line = Line::from(vec![Span::raw(" "), note]);
            buf.set_line(inner.x, inner.y + 1, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_value_and_unit() {
        let metric = MetricDatum::new("Heart Rate", "80", "Bpm").with_caption("Normal 70 bpm");
        let mut term = TestTerminal::with_size(24, 4);
        term.render_widget(StatCard::new(&metric).color(palette::HEART), term.area());

        assert!(term.line_contains(0, "Heart Rate"));
        assert!(term.line_contains(1, "80 Bpm"));
        assert!(term.line_contains(2, "Normal 70 bpm"));
    }

    #[test]
    fn test_trend_wins_over_caption() {
        let metric = MetricDatum::new("Water", "2.1", "litres")
            .with_trend("+90%")
            .with_caption("unused");
        let mut term = TestTerminal::with_size(24, 4);
        term.render_widget(StatCard::new(&metric), term.area());

        assert!(term.buffer_contains("+90%"));
        assert!(!term.buffer_contains("unused"));
    }

    #[test]
    fn test_empty_unit_has_no_trailing_gap() {
        let metric = MetricDatum::new("Total Patients", "4", "");
        let mut term = TestTerminal::with_size(24, 4);
        term.render_widget(StatCard::new(&metric), term.area());
        assert!(term.line_contains(1, " 4 "));
        assert!(term.cell_at(2, 1) == Some("4"));
    }
}
