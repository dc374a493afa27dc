//! Percentage ring drawn on a Braille canvas
//!
//! The stroke follows [`RingGeometry`]: the drawn length is the
//! circumference minus the dash offset, starting at 12 o'clock and running
//! clockwise over a dim full-circle track.

use calmcare_core::{clamp_percentage, RingGeometry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Widget,
    },
};

use crate::theme::{palette, styles};

use super::{display_width, truncate};

/// Points per full circle
const RING_STEPS: usize = 180;

pub struct ProgressRing<'a> {
    geometry: RingGeometry,
    percentage: f64,
    color: Color,
    /// Text in the middle; defaults to the rounded percentage
    center: Option<&'a str>,
    label: Option<&'a str>,
    sub_label: Option<&'a str>,
}

impl<'a> ProgressRing<'a> {
    pub fn new(geometry: RingGeometry, percentage: f64) -> Self {
        Self {
            geometry,
            percentage,
            color: palette::ACCENT,
            center: None,
            label: None,
            sub_label: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn center(mut self, text: &'a str) -> Self {
        self.center = Some(text);
        self
    }

    /// Caption lines under the ring
    pub fn labels(mut self, label: &'a str, sub_label: &'a str) -> Self {
        self.label = Some(label);
        self.sub_label = Some(sub_label);
        self
    }

    fn caption_height(&self) -> u16 {
        self.label.is_some() as u16 + self.sub_label.is_some() as u16
    }
}

/// Largest rect inside `area` that draws as a circle (cells are about
/// twice as tall as wide)
fn circle_rect(area: Rect) -> Rect {
    let width = area.width.min(area.height.saturating_mul(2));
    let height = (width / 2).max(1).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn centered_string(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    let text = truncate(text, area.width as usize);
    let x = area.x + area.width.saturating_sub(display_width(&text)) / 2;
    buf.set_string(x, y, text, style);
}

impl Widget for ProgressRing<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 2 {
            return;
        }

        let caption_height = self.caption_height().min(area.height - 2);
        let ring_area = Rect {
            height: area.height - caption_height,
            ..area
        };
        let circle = circle_rect(ring_area);

        let percentage = clamp_percentage(self.percentage);
        let track = self.geometry.track_points(RING_STEPS);
        let arc = self.geometry.arc_points(percentage, RING_STEPS);
        let bound = self.geometry.radius() + 2.0;

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-bound, bound])
            .y_bounds([-bound, bound])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &track,
                    color: palette::RING_TRACK,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &arc,
                    color: self.color,
                });
            })
            .render(circle, buf);

        let default_center = format!("{:.0}%", percentage);
        let center = self.center.unwrap_or(&default_center);
        let center_style = Style::default().fg(self.color).add_modifier(Modifier::BOLD);
        centered_string(buf, circle, circle.y + circle.height / 2, center, center_style);

        let mut y = ring_area.bottom();
        for (text, style) in [
            (self.label, styles::heading()),
            (self.sub_label, styles::text_muted()),
        ] {
            if let Some(text) = text {
                if y >= area.bottom() {
                    break;
                }
                centered_string(buf, area, y, text, style);
                y += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use calmcare_core::{CHALLENGE_RING, QUALITY_RING};

    fn braille_cells(term: &TestTerminal, color: Color) -> usize {
        let buf = term.buffer();
        buf.content
            .iter()
            .filter(|cell| cell.fg == color)
            .filter(|cell| {
                cell.symbol()
                    .chars()
                    .any(|ch| ('\u{2801}'..='\u{28ff}').contains(&ch))
            })
            .count()
    }

    #[test]
    fn test_ring_shows_percentage() {
        let mut term = TestTerminal::with_size(20, 10);
        term.render_widget(ProgressRing::new(CHALLENGE_RING, 60.0), term.area());
        assert!(term.buffer_contains("60%"));
    }

    #[test]
    fn test_ring_captions() {
        let mut term = TestTerminal::with_size(30, 12);
        let ring = ProgressRing::new(CHALLENGE_RING, 40.0)
            .labels("Drink 10 glasses of water", "6 glasses left");
        term.render_widget(ring, term.area());
        assert!(term.line_contains(10, "Drink 10 glasses"));
        assert!(term.line_contains(11, "6 glasses left"));
    }

    #[test]
    fn test_custom_center_text() {
        let mut term = TestTerminal::with_size(20, 10);
        let ring = ProgressRing::new(QUALITY_RING, 88.0).center("88");
        term.render_widget(ring, term.area());
        assert!(term.buffer_contains("88"));
        assert!(!term.buffer_contains("88%"));
    }

    #[test]
    fn test_fuller_ring_paints_more_cells() {
        let color = palette::HEART;
        let mut low = TestTerminal::with_size(20, 10);
        low.render_widget(ProgressRing::new(CHALLENGE_RING, 25.0).color(color), low.area());
        let mut high = TestTerminal::with_size(20, 10);
        high.render_widget(ProgressRing::new(CHALLENGE_RING, 90.0).color(color), high.area());

        assert!(braille_cells(&high, color) > braille_cells(&low, color));
    }

    #[test]
    fn test_zero_percent_draws_track_only() {
        let color = palette::HEART;
        let mut term = TestTerminal::with_size(20, 10);
        term.render_widget(ProgressRing::new(CHALLENGE_RING, 0.0).color(color), term.area());
        assert_eq!(braille_cells(&term, color), 0);
        assert!(braille_cells(&term, palette::RING_TRACK) > 0);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let mut term = TestTerminal::with_size(20, 10);
        term.render_widget(ProgressRing::new(CHALLENGE_RING, 140.0), term.area());
        assert!(term.buffer_contains("100%"));
    }
}
