//! `/patient/sleep`: stats, stage chart, quality ring, stage breakdown and
//! weekly consistency.

use calmcare_core::{SleepView, QUALITY_RING};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};
use crate::widgets::{Hypnogram, ProgressRing, WeekBars};

use super::{card, stat_row, STAT_ROW_HEIGHT};

const BREAKDOWN_BAR: u16 = 12;

pub struct SleepPage<'a> {
    view: &'a SleepView,
}

impl<'a> SleepPage<'a> {
    pub fn new(view: &'a SleepView) -> Self {
        Self { view }
    }

    fn render_quality(&self, area: Rect, buf: &mut Buffer) {
        let inner = card("Sleep Quality", area, buf);
        let [ring, note] =
            Layout::vertical([Constraint::Min(4), Constraint::Length(2)]).areas(inner);

        let center = format!("{:.0}", self.view.quality.percentage);
        ProgressRing::new(QUALITY_RING, self.view.quality.percentage)
            .color(palette::SLEEP)
            .center(&center)
            .labels(&self.view.quality.label, &self.view.quality.sub_label)
            .render(ring, buf);

        Paragraph::new(self.view.quality_note.as_str())
            .style(styles::text_muted())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(note, buf);
    }

    fn render_breakdown(&self, area: Rect, buf: &mut Buffer) {
        let inner = card("Sleep Stages", area, buf);
        for (i, share) in self.view.breakdown.iter().enumerate() {
            let y = inner.y + 1 + i as u16 * 2;
            if y >= inner.bottom() {
                break;
            }
            let color = styles::stage_color(share.stage);
            let filled = ((share.percent / 100.0) * f64::from(BREAKDOWN_BAR))
                .round()
                .clamp(0.0, f64::from(BREAKDOWN_BAR)) as usize;
            let bar = "█".repeat(filled) + &"░".repeat(BREAKDOWN_BAR as usize - filled);
            let line = Line::from(vec![
                Span::styled(format!(" {:<6}", share.label), styles::text_primary()),
                Span::styled(bar, Style::default().fg(color)),
                Span::styled(
                    format!(" {:>3.0}%  {}", share.percent, share.time),
                    styles::text_secondary(),
                ),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }

    fn render_consistency(&self, area: Rect, buf: &mut Buffer) {
        let inner = card("Weekly Consistency", area, buf);
        if inner.height < 3 {
            return;
        }
        let [chart, averages] =
            Layout::vertical([Constraint::Min(2), Constraint::Length(1)]).areas(inner);

        WeekBars::new(&self.view.consistency)
            .ceiling(self.view.consistency_ceiling)
            .warn_below(self.view.consistency_target)
            .color(palette::SLEEP)
            .render(chart, buf);

        let line = Line::from(vec![
            Span::styled(" Bedtime ", styles::text_muted()),
            Span::styled(self.view.avg_bedtime.as_str(), styles::text_primary()),
            Span::styled("  Wake ", styles::text_muted()),
            Span::styled(self.view.avg_wake.as_str(), styles::text_primary()),
        ]);
        buf.set_line(averages.x, averages.y, &line, averages.width);
    }
}

impl Widget for SleepPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [stats, stages, bottom] = Layout::vertical([
            Constraint::Length(STAT_ROW_HEIGHT),
            Constraint::Length(10),
            Constraint::Min(10),
        ])
        .areas(area);

        stat_row(&self.view.stats, &[palette::SLEEP], stats, buf);

        let title = format!("Sleep Stages · {}", self.view.window);
        let chart_area = card(&title, stages, buf);
        Hypnogram::new(&self.view.segments, self.view.span_min)
            .axis_labels(&self.view.axis_labels)
            .render(chart_area, buf);

        let [quality, breakdown, consistency] = Layout::horizontal([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .areas(bottom);
        self.render_quality(quality, buf);
        self.render_breakdown(breakdown, buf);
        self.render_consistency(consistency, buf);
    }
}
