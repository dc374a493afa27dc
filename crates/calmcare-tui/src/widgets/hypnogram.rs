//! Sleep stage step chart
//!
//! Each [`StageSegment`] runs from its start to the next segment's start
//! (the last one to the end of the recording) at its stage's level. Stage
//! names sit in a left gutter, time labels along the bottom.

use calmcare_core::{SleepStage, StageSegment};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Widget,
    },
};

use crate::theme::styles;

use super::{display_width, truncate};

/// Width of the stage-name gutter
const GUTTER: u16 = 6;

pub struct Hypnogram<'a> {
    segments: &'a [StageSegment],
    span_min: f64,
    axis_labels: &'a [String],
}

impl<'a> Hypnogram<'a> {
    pub fn new(segments: &'a [StageSegment], span_min: f64) -> Self {
        Self {
            segments,
            span_min,
            axis_labels: &[],
        }
    }

    pub fn axis_labels(mut self, labels: &'a [String]) -> Self {
        self.axis_labels = labels;
        self
    }

    /// Segment intervals as (start, end, stage), clipped to the recording
    fn intervals(&self) -> Vec<(f64, f64, SleepStage)> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, seg)| {
                let end = self
                    .segments
                    .get(i + 1)
                    .map_or(self.span_min, |next| next.start_min);
                (seg.start_min, end.min(self.span_min), seg.stage)
            })
            .filter(|(start, end, _)| end > start)
            .collect()
    }
}

impl Widget for Hypnogram<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= GUTTER + 2 || area.height < 3 || self.span_min <= 0.0 {
            return;
        }

        let has_axis = !self.axis_labels.is_empty();
        let plot = Rect {
            x: area.x + GUTTER,
            y: area.y,
            width: area.width - GUTTER,
            height: area.height - has_axis as u16,
        };

        // Stage names, top (Awake) to bottom (Deep)
        let max_level = f64::from(SleepStage::Awake.level());
        for stage in SleepStage::ALL {
            let from_top = (max_level - f64::from(stage.level())) / max_level;
            let y = plot.y + (from_top * f64::from(plot.height - 1)).round() as u16;
            let name = truncate(stage.label(), GUTTER as usize - 1);
            buf.set_string(area.x, y, name, styles::text_muted());
        }

        let intervals = self.intervals();
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, self.span_min])
            .y_bounds([-0.25, max_level + 0.25])
            .paint(|ctx| {
                let mut previous: Option<f64> = None;
                for &(start, end, stage) in &intervals {
                    let level = f64::from(stage.level());
                    let color = styles::stage_color(stage);
                    if let Some(prev_level) = previous {
                        ctx.draw(&CanvasLine::new(start, prev_level, start, level, color));
                    }
                    ctx.draw(&CanvasLine::new(start, level, end, level, color));
                    previous = Some(level);
                }
            })
            .render(plot, buf);

        if has_axis {
            let y = area.bottom() - 1;
            let slots = self.axis_labels.len() as u16;
            let slot = plot.width / slots.max(1);
            for (i, label) in self.axis_labels.iter().enumerate() {
                let label = truncate(label, slot as usize);
                let x = if i as u16 + 1 == slots && slots > 1 {
                    plot.right().saturating_sub(display_width(&label))
                } else {
                    plot.x + slot * i as u16
                };
                buf.set_string(x, y, label, styles::text_muted());
            }
        }
    }
}
