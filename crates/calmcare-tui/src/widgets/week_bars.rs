//! Vertical bar chart for a [`ChartSeries`]
//!
//! One column per point, labels along the bottom. The highlighted bar gets
//! its own color and an optional caption above it; bars under a warning
//! threshold are drawn in the warning color.

use calmcare_core::ChartSeries;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::theme::{palette, styles};

use super::{display_width, truncate};

const BAR_SYMBOL: &str = "█";

pub struct WeekBars<'a> {
    series: &'a ChartSeries,
    ceiling: Option<f64>,
    color: Color,
    highlight_color: Color,
    warn_below: Option<f64>,
    caption: Option<&'a str>,
}

impl<'a> WeekBars<'a> {
    pub fn new(series: &'a ChartSeries) -> Self {
        Self {
            series,
            ceiling: None,
            color: palette::BAR,
            highlight_color: palette::BAR_HIGHLIGHT,
            warn_below: None,
            caption: None,
        }
    }

    /// Value drawn as a full-height bar; defaults to the series maximum
    pub fn ceiling(mut self, ceiling: f64) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Flag bars whose magnitude is under `threshold`
    pub fn warn_below(mut self, threshold: f64) -> Self {
        self.warn_below = Some(threshold);
        self
    }

    /// Text over the highlighted bar
    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }

    fn bar_color(&self, index: usize, magnitude: f64) -> Color {
        if self.series.highlight == Some(index) {
            self.highlight_color
        } else if self.warn_below.is_some_and(|t| magnitude < t) {
            palette::BAR_WARN
        } else {
            self.color
        }
    }
}

impl Widget for WeekBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = self.series.len() as u16;
        if count == 0 || area.height < 2 || area.width < count {
            return;
        }

        let column = area.width / count;
        let bar_width = (column * 2 / 3).clamp(1, 5);

        let caption_row = self.caption.filter(|_| self.series.highlight.is_some());
        let top = area.y + caption_row.is_some() as u16;
        let labels_y = area.bottom() - 1;
        let bar_height = labels_y.saturating_sub(top);

        let ceiling = self.ceiling.unwrap_or_else(|| self.series.max_magnitude());
        let heights = self.series.scaled(ceiling, bar_height);

        for (i, (point, height)) in self.series.points.iter().zip(&heights).enumerate() {
            let col_x = area.x + column * i as u16;
            let bar_x = col_x + (column - bar_width) / 2;
            let color = self.bar_color(i, point.magnitude);

            for row in 0..*height {
                let y = labels_y - 1 - row;
                for dx in 0..bar_width {
                    buf[(bar_x + dx, y)]
                        .set_symbol(BAR_SYMBOL)
                        .set_fg(color);
                }
            }

            let label = truncate(&point.label, column as usize);
            let label_x = col_x + column.saturating_sub(display_width(&label)) / 2;
            let label_style = if self.series.highlight == Some(i) {
                styles::accent_bold()
            } else {
                styles::text_muted()
            };
            buf.set_string(label_x, labels_y, label, label_style);

            if self.series.highlight == Some(i) {
                if let Some(caption) = caption_row {
                    let caption = truncate(caption, area.width as usize);
                    let width = display_width(&caption);
                    let centre = bar_x + bar_width / 2;
                    let x = centre
                        .saturating_sub(width / 2)
                        .clamp(area.x, area.right().saturating_sub(width));
                    let style = Style::default()
                        .fg(self.highlight_color)
                        .add_modifier(Modifier::BOLD);
                    buf.set_string(x, area.y, caption, style);
                }
            }
        }
    }
}
