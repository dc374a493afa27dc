//! Stacked rows for workouts, meals, tracks and checklists
//!
//! Each [`ListRow`] is a title line (with its badge and right-aligned
//! detail) followed by a muted subtitle line. Compact mode folds the
//! subtitle into the title line.

use calmcare_core::ListRow;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

use super::{display_width, truncate};

pub struct ListRows<'a> {
    rows: &'a [ListRow],
    selected: Option<usize>,
    compact: bool,
    /// Draw a check mark from `ListRow::done`
    checklist: Option<IconSet>,
}

impl<'a> ListRows<'a> {
    pub fn new(rows: &'a [ListRow]) -> Self {
        Self {
            rows,
            selected: None,
            compact: false,
            checklist: None,
        }
    }

    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    pub fn compact(mut self) -> Self {
        self.compact = true;
        self
    }

    pub fn checklist(mut self, icons: IconSet) -> Self {
        self.checklist = Some(icons);
        self
    }

    fn row_height(&self) -> u16 {
        if self.compact {
            1
        } else {
            2
        }
    }

    fn title_line(&self, index: usize, row: &'a ListRow, width: usize) -> Line<'a> {
        let done = row.done == Some(true);
        let mut spans = vec![Span::raw(" ")];

        if let Some(icons) = self.checklist {
            let (mark, style) = if done {
                (icons.check(), Style::default().fg(palette::STATUS_GOOD))
            } else {
                (icons.unchecked(), styles::text_muted())
            };
            spans.push(Span::styled(mark, style));
            spans.push(Span::raw(" "));
        }

        let mut title_style = if self.selected == Some(index) {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        if done {
            title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
        }
        spans.push(Span::styled(truncate(&row.title, width), title_style));

        if let Some(badge) = &row.badge {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!("[{}]", badge), styles::accent()));
        }
        if self.compact && !row.subtitle.is_empty() {
            spans.push(Span::styled(format!("  {}", row.subtitle), styles::text_muted()));
        }
        Line::from(spans)
    }
}

impl Widget for ListRows<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 {
            return;
        }

        let mut y = area.y;
        for (i, row) in self.rows.iter().enumerate() {
            if y + self.row_height() > area.bottom() {
                break;
            }

            let detail_width = if row.detail.is_empty() {
                0
            } else {
                display_width(&row.detail) + 1
            };
            let title_width = area.width.saturating_sub(detail_width + 2) as usize;

            let title = self.title_line(i, row, title_width);
            buf.set_line(area.x, y, &title, area.width.saturating_sub(detail_width));

            if detail_width > 0 && detail_width < area.width / 2 {
                buf.set_string(
                    area.right() - detail_width,
                    y,
                    &row.detail,
                    styles::text_secondary(),
                );
            }

            if !self.compact {
                let indent = if self.checklist.is_some() { 3 } else { 1 };
                let subtitle =
                    truncate(&row.subtitle, area.width.saturating_sub(indent + 1) as usize);
                buf.set_string(area.x + indent, y + 1, subtitle, styles::text_muted());
            }

            y += self.row_height();
        }
    }
}
