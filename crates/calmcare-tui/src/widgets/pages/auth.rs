//! `/signin` and `/signup`: a centered card with the form fields.

use calmcare_app::AuthForm;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use crate::layout::centered;
use crate::theme::{icons::IconSet, styles};

use crate::widgets::{display_width, truncate};

const CARD_WIDTH: u16 = 52;
/// Label line + 3-row input box
const FIELD_HEIGHT: u16 = 4;

pub struct AuthPage<'a> {
    form: &'a AuthForm,
    icons: IconSet,
    caret_on: bool,
}

impl<'a> AuthPage<'a> {
    pub fn new(form: &'a AuthForm, icons: IconSet) -> Self {
        Self {
            form,
            icons,
            caret_on: true,
        }
    }

    pub fn caret(mut self, on: bool) -> Self {
        self.caret_on = on;
        self
    }

    fn card_height(&self) -> u16 {
        // borders + brand + heading + gap + fields + submit + gap + switch
        2 + 3 + self.form.fields().len() as u16 * FIELD_HEIGHT + 4
    }
}

impl Widget for AuthPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.form.kind();
        let popup = centered(area, CARD_WIDTH, self.card_height());
        Clear.render(popup, buf);
        let block = styles::card_block(true);
        let inner = block.inner(popup);
        block.render(popup, buf);
        if inner.width < 8 || inner.height < 3 {
            return;
        }

        let center = |buf: &mut Buffer, y: u16, line: Line| {
            if y < inner.bottom() {
                let width = line.width() as u16;
                let x = inner.x + inner.width.saturating_sub(width) / 2;
                buf.set_line(x, y, &line, inner.width);
            }
        };

        center(
            buf,
            inner.y,
            Line::from(vec![
                Span::styled(self.icons.brand(), styles::accent()),
                Span::styled(" CalmCare", styles::accent_bold()),
            ]),
        );
        center(
            buf,
            inner.y + 1,
            Line::from(Span::styled(kind.heading(), styles::heading())),
        );

        let field_x = inner.x + 2;
        let field_width = inner.width.saturating_sub(4);
        let mut y = inner.y + 3;
        for (i, field) in self.form.fields().iter().enumerate() {
            if y + FIELD_HEIGHT > inner.bottom() {
                break;
            }
            let focused = i == self.form.focus();
            let label_style = if focused {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            buf.set_string(field_x, y, field.label, label_style);

            let input = Rect::new(field_x, y + 1, field_width, 3);
            let block = styles::card_block(focused);
            let text_area = block.inner(input);
            block.render(input, buf);

            let value = field.display();
            let (text, style) = if value.is_empty() {
                (field.placeholder.to_string(), styles::text_muted())
            } else {
                (value, styles::text_primary())
            };
            let max = text_area.width.saturating_sub(2) as usize;
            let shown = truncate(&text, max);
            buf.set_string(text_area.x + 1, text_area.y, &shown, style);
            if focused && self.caret_on {
                let caret_x = if field.value.is_empty() {
                    text_area.x + 1
                } else {
                    text_area.x + 1 + display_width(&shown)
                };
                if caret_x < text_area.right() {
                    buf.set_string(caret_x, text_area.y, "▏", styles::accent());
                }
            }
            y += FIELD_HEIGHT;
        }

        center(
            buf,
            y,
            Line::from(vec![
                Span::styled(format!("  {}  ", kind.submit_label()), styles::focused_selected()),
                Span::styled("  Enter", styles::keybinding()),
            ]),
        );

        let (prompt, link) = kind.switch_prompt();
        center(
            buf,
            y + 2,
            Line::from(vec![
                Span::styled(prompt, styles::text_muted()),
                Span::raw(" "),
                Span::styled(link, styles::accent()),
                Span::styled("  Ctrl+N", styles::keybinding()),
            ]),
        );
    }
}
