//! Portal sidebar
//!
//! Draws a [`NavTable`] with the entries highlighted for the current path.
//! Entries are numbered so they can be reached with the digit keys; the
//! footer entry is bound to `p`.

use calmcare_core::NavTable;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

use super::truncate;

pub struct Sidebar<'a> {
    table: &'static NavTable,
    current: &'a str,
    icons: IconSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(table: &'static NavTable, current: &'a str, icons: IconSet) -> Self {
        Self {
            table,
            current,
            icons,
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_type(BorderType::Plain)
            .border_style(styles::border_inactive())
            .style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        let brand = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.brand(), styles::accent()),
            Span::raw(" "),
            Span::styled(self.table.brand, styles::accent_bold()),
        ]);
        buf.set_line(inner.x, inner.y, &brand, inner.width);

        let first_row = inner.y + 2;
        for (i, entry) in self.table.highlight(self.current).iter().enumerate() {
            let y = first_row + i as u16;
            if y >= inner.bottom().saturating_sub(2) {
                break;
            }

            let text = truncate(
                &format!(
                    " {} {}  {}",
                    i + 1,
                    self.icons.nav(entry.item.icon),
                    entry.item.label
                ),
                width,
            );
            let style = if entry.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            let row = Rect::new(inner.x, y, inner.width, 1);
            buf.set_style(row, style);
            buf.set_string(inner.x, y, text, style);
        }

        if inner.height >= 3 {
            let footer = self.table.footer;
            let line = Line::from(vec![
                Span::styled(" p", styles::keybinding()),
                Span::raw(" "),
                Span::styled(self.icons.nav(footer.icon), styles::text_muted()),
                Span::raw("  "),
                Span::styled(footer.label, styles::text_muted()),
            ]);
            buf.set_line(inner.x, inner.bottom() - 1, &line, inner.width);
        }
    }
}
