//! Labelled progress gauge for a [`GoalProgress`] (macros, hydration).

use calmcare_core::GoalProgress;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Gauge, Widget},
};

use crate::theme::{palette, styles};

/// `110` for whole numbers, `1.2` otherwise
fn amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

pub struct GoalBar<'a> {
    goal: &'a GoalProgress,
    color: Color,
}

impl<'a> GoalBar<'a> {
    pub fn new(goal: &'a GoalProgress) -> Self {
        Self {
            goal,
            color: palette::ACCENT,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for GoalBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 4 {
            return;
        }

        let totals = format!(
            "{}/{}{}",
            amount(self.goal.current),
            amount(self.goal.target),
            self.goal.unit
        );
        let header = Line::from(vec![
            Span::styled(self.goal.label.as_str(), styles::text_primary()),
            Span::raw("  "),
            Span::styled(totals, styles::text_muted()),
        ]);
        buf.set_line(area.x, area.y, &header, area.width);

        if area.height < 2 {
            return;
        }
        let bar = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        Gauge::default()
            .ratio(self.goal.ratio())
            .label(format!("{:.0}%", self.goal.percentage()))
            .gauge_style(Style::default().fg(self.color).bg(palette::RING_TRACK))
            .render(bar, buf);
    }
}
