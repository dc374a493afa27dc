//! `/`: public landing page.

use calmcare_core::{LandingView, ListRow};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};

use super::card;

pub struct LandingPage<'a> {
    view: &'a LandingView,
    icons: IconSet,
}

impl<'a> LandingPage<'a> {
    pub fn new(view: &'a LandingView, icons: IconSet) -> Self {
        Self { view, icons }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let mut left = vec![
            Span::raw(" "),
            Span::styled(self.icons.brand(), styles::accent()),
            Span::raw(" "),
            Span::styled("CalmCare", styles::accent_bold()),
            Span::raw("   "),
        ];
        for link in &self.view.nav_links {
            left.push(Span::styled(link.as_str(), styles::text_secondary()));
            left.push(Span::raw("  "));
        }
        buf.set_line(area.x, area.y, &Line::from(left), area.width);

        let right = Line::from(vec![
            Span::styled("i", styles::keybinding()),
            Span::styled(" Sign In  ", styles::text_primary()),
            Span::styled("g", styles::keybinding()),
            Span::styled(" Sign Up ", styles::focused_selected()),
        ]);
        let width = right.width() as u16;
        if area.width > width + 50 {
            buf.set_line(area.right() - width - 1, area.y, &right, width);
        }
    }

    fn render_hero(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(self.view.tagline.as_str(), styles::accent())),
            Line::default(),
            Line::from(Span::styled(self.view.headline.as_str(), styles::heading())),
            Line::default(),
            Line::from(Span::styled(self.view.blurb.as_str(), styles::text_secondary())),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!(" {} ", self.view.call_to_action),
                    styles::focused_selected(),
                ),
                Span::styled("  Enter", styles::keybinding()),
                Span::styled("   d", styles::keybinding()),
                Span::styled(" try the demo dashboard", styles::text_muted()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_cards(heading: &str, rows: &[ListRow], area: Rect, buf: &mut Buffer) {
        let [title, cards] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);
        let line = Line::from(Span::styled(heading, styles::heading()));
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(title, buf);

        if rows.is_empty() {
            return;
        }
        let count = rows.len() as u32;
        let slots =
            Layout::horizontal(vec![Constraint::Ratio(1, count); rows.len()]).split(cards);
        for (row, slot) in rows.iter().zip(slots.iter()) {
            let inner = card(&row.title, *slot, buf);
            Paragraph::new(row.subtitle.as_str())
                .style(styles::text_muted())
                .wrap(Wrap { trim: true })
                .render(inner, buf);
        }
    }
}

impl Widget for LandingPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [nav, hero, features, services, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(2),
        ])
        .areas(area);

        self.render_nav(nav, buf);
        self.render_hero(hero, buf);
        Self::render_cards(&self.view.features_heading, &self.view.features, features, buf);
        Self::render_cards(&self.view.services_heading, &self.view.services, services, buf);

        let footer_lines = vec![
            Line::from(Span::styled(self.view.footer_title.as_str(), styles::accent_bold())),
            Line::from(Span::styled(self.view.footer_note.as_str(), styles::text_muted())),
        ];
        Paragraph::new(footer_lines)
            .alignment(Alignment::Center)
            .render(footer, buf);
    }
}
