//! Page header: title and greeting on the left, date and help hint on the
//! right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

use super::{display_width, truncate};

pub struct PageHeader<'a> {
    title: &'a str,
    subtitle: &'a str,
    date: Option<&'a str>,
    show_help_hint: bool,
}

impl<'a> PageHeader<'a> {
    pub fn new(title: &'a str, subtitle: &'a str) -> Self {
        Self {
            title,
            subtitle,
            date: None,
            show_help_hint: false,
        }
    }

    pub fn date(mut self, date: &'a str) -> Self {
        self.date = Some(date);
        self
    }

    pub fn help_hint(mut self, show: bool) -> Self {
        self.show_help_hint = show;
        self
    }
}

impl Widget for PageHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }

        // Right column first, the title gets whatever is left
        let mut right_width = 0;
        if let Some(date) = self.date {
            right_width = display_width(date) + 1;
            if right_width < inner.width / 2 {
                buf.set_string(
                    inner.right() - right_width,
                    inner.y,
                    date,
                    styles::text_muted(),
                );
            } else {
                right_width = 0;
            }
        }

        let left_width = inner.width.saturating_sub(right_width + 1) as usize;
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(truncate(self.title, left_width.saturating_sub(1)), styles::heading()),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if inner.height < 2 {
            return;
        }
        let subtitle_y = inner.y + 1;
        buf.set_string(
            inner.x + 1,
            subtitle_y,
            truncate(self.subtitle, left_width.saturating_sub(1)),
            styles::text_secondary(),
        );

        if self.show_help_hint {
            let hint = Line::from(vec![
                Span::styled("?", styles::keybinding()),
                Span::styled(" help ", styles::text_muted()),
            ]);
            let hint_width = hint.width() as u16;
            let subtitle_end = inner.x + 1 + display_width(self.subtitle);
            if inner.right() >= hint_width && inner.right() - hint_width > subtitle_end {
                buf.set_line(inner.right() - hint_width, subtitle_y, &hint, hint_width);
            }
        }
    }
}
