//! Provider pages: the overview with stats and the patient list, and the
//! patient list/detail page.

use calmcare_app::{PatientBrowser, RowCursor};
use calmcare_core::{MetricDatum, PatientSummary, ProviderOverview};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::{display_width, PatientTable, StatCard, TableColumns};

use super::{card, stat_row, STAT_ROW_HEIGHT};

// ─────────────────────────────────────────────────────────────────────────────
// Overview
// ─────────────────────────────────────────────────────────────────────────────

pub struct ProviderOverviewPage<'a> {
    view: &'a ProviderOverview,
    patients: &'a [PatientSummary],
    cursor: &'a RowCursor,
    icons: IconSet,
}

impl<'a> ProviderOverviewPage<'a> {
    pub fn new(
        view: &'a ProviderOverview,
        patients: &'a [PatientSummary],
        cursor: &'a RowCursor,
        icons: IconSet,
    ) -> Self {
        Self {
            view,
            patients,
            cursor,
            icons,
        }
    }
}

impl Widget for ProviderOverviewPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [stats, list] =
            Layout::vertical([Constraint::Length(STAT_ROW_HEIGHT), Constraint::Min(6)])
                .areas(area);

        stat_row(
            &self.view.stats,
            &[
                palette::ACCENT,
                palette::STATUS_GOOD,
                palette::STATUS_POOR,
                palette::CALORIES,
            ],
            stats,
            buf,
        );

        let inner = card("Patient List", list, buf);
        let action = "v View All ";
        if list.height > 0 && list.width > display_width(action) + 20 {
            let x = list.right() - display_width(action) - 1;
            let line = Line::from(vec![
                Span::styled("v", styles::keybinding()),
                Span::styled(" View All ", styles::accent()),
            ]);
            buf.set_line(x, list.y, &line, display_width(action));
        }

        let table_area = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let mut table = PatientTable::new(self.patients, TableColumns::Overview, self.icons);
        if !self.cursor.is_empty() {
            table = table.selected(self.cursor.index());
        }
        table.render(table_area, buf);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Patients list / detail
// ─────────────────────────────────────────────────────────────────────────────

const NOTES_PLACEHOLDER: &str = "Add clinical notes for this patient...";
const ACTIONS: [&str; 3] = ["View Full History", "Edit Care Plan", "Assign Challenge"];

pub struct PatientsPage<'a> {
    browser: &'a PatientBrowser,
    icons: IconSet,
    /// Caret phase while editing notes
    caret_on: bool,
}

impl<'a> PatientsPage<'a> {
    pub fn new(browser: &'a PatientBrowser, icons: IconSet) -> Self {
        Self {
            browser,
            icons,
            caret_on: true,
        }
    }

    pub fn caret(mut self, on: bool) -> Self {
        self.caret_on = on;
        self
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let inner = card("All Patients", area, buf);
        let table_area = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let mut table =
            PatientTable::new(self.browser.patients(), TableColumns::Roster, self.icons);
        if !self.browser.patients().is_empty() {
            table = table.selected(self.browser.cursor());
        }
        table.render(table_area, buf);
    }

    fn render_detail(&self, patient: &PatientSummary, area: Rect, buf: &mut Buffer) {
        let [back, profile, vitals, bottom] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(6),
        ])
        .areas(area);

        let back_line = Line::from(vec![
            Span::styled(format!(" {} ", self.icons.chevron_left()), styles::accent()),
            Span::styled("Back to Patient List", styles::accent()),
            Span::styled("  (Esc)", styles::text_muted()),
        ]);
        if back.height > 0 {
            buf.set_line(back.x, back.y, &back_line, back.width);
        }

        self.render_profile(patient, profile, buf);

        let heart = MetricDatum::new("Heart Rate", patient.heart_rate.to_string(), "bpm");
        let steps = MetricDatum::new("Daily Steps", patient.steps.to_string(), "");
        let [hr, st] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(vitals);
        StatCard::new(&heart).color(palette::HEART).render(hr, buf);
        StatCard::new(&steps).color(palette::ACTIVITY).render(st, buf);

        let [notes, actions] =
            Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
                .areas(bottom);
        self.render_notes(notes, buf);

        let inner = card("Actions", actions, buf);
        for (i, action) in ACTIONS.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let line = Line::from(vec![
                Span::styled(format!(" {} ", self.icons.chevron_right()), styles::text_muted()),
                Span::styled(*action, styles::text_primary()),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }

    fn render_profile(&self, patient: &PatientSummary, area: Rect, buf: &mut Buffer) {
        let inner = card(&patient.name, area, buf);
        let lines = [
            Line::from(vec![
                Span::styled(" Patient ID ", styles::text_muted()),
                Span::styled(patient.display_id(), styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled(" Condition  ", styles::text_muted()),
                Span::styled(patient.condition.as_str(), styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled(" Status     ", styles::text_muted()),
                Span::styled(self.icons.dot(), styles::status_style(patient.status)),
                Span::raw(" "),
                Span::styled(patient.status.label(), styles::status_style(patient.status)),
                Span::styled("   Last visit ", styles::text_muted()),
                Span::styled(patient.last_visit.as_str(), styles::text_secondary()),
            ]),
        ];
        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y < inner.bottom() {
                buf.set_line(inner.x, y, line, inner.width);
            }
        }

        let contact = "[ Contact ]";
        if inner.height > 0 && inner.width > display_width(contact) + 40 {
            buf.set_string(
                inner.right() - display_width(contact) - 1,
                inner.y,
                contact,
                styles::accent(),
            );
        }
    }

    fn render_notes(&self, area: Rect, buf: &mut Buffer) {
        let editing = self.browser.editing_notes();
        let block = styles::card_block(editing)
            .title(" Doctor's Notes ")
            .title_style(styles::heading());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 2 {
            return;
        }

        let [text, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        let notes = self.browser.notes();
        let paragraph = if notes.is_empty() && !editing {
            Paragraph::new(NOTES_PLACEHOLDER).style(styles::text_muted())
        } else {
            let mut body = notes.to_string();
            if editing && self.caret_on {
                body.push('▏');
            }
            Paragraph::new(body).style(styles::text_primary())
        };
        paragraph
            .wrap(Wrap { trim: false })
            .render(text.inner(Margin::new(1, 0)), buf);

        let hint = if editing {
            Line::from(vec![
                Span::styled(" Esc", styles::keybinding()),
                Span::styled(" Save Note", styles::accent()),
            ])
        } else {
            Line::from(vec![
                Span::styled(" e", styles::keybinding()),
                Span::styled(" edit", styles::text_muted()),
            ])
        };
        buf.set_line(footer.x, footer.y, &hint, footer.width);
    }
}

impl Widget for PatientsPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.browser.selected() {
            Some(patient) => self.render_detail(patient, area, buf),
            None => self.render_list(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use calmcare_app::config::IconMode;
    use calmcare_core::{DashboardSource, MockDashboard};

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    fn browser() -> PatientBrowser {
        PatientBrowser::new(MockDashboard::new().patients())
    }

    fn render(browser: &PatientBrowser) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 28);
        term.render_widget(PatientsPage::new(browser, icons()), term.area());
        term
    }

    #[test]
    fn test_overview_page() {
        let source = MockDashboard::new();
        let view = source.provider_overview();
        let patients = source.patients();
        let cursor = RowCursor::new(patients.len());
        let mut term = TestTerminal::with_size(100, 20);
        term.render_widget(
            ProviderOverviewPage::new(&view, &patients, &cursor, icons()),
            term.area(),
        );

        assert!(term.buffer_contains("Total Patients"));
        assert!(term.buffer_contains("78%"));
        assert!(term.buffer_contains("Patient List"));
        assert!(term.buffer_contains("View All"));
        assert!(term.buffer_contains("Patient Details"));
        assert!(term.buffer_contains("Karan Singh"));
    }

    #[test]
    fn test_list_mode() {
        let term = render(&browser());
        assert!(term.buffer_contains("All Patients"));
        assert!(term.buffer_contains("Patient Name"));
        assert!(term.buffer_contains("Riya Verma"));
        assert!(!term.buffer_contains("Doctor's Notes"));
    }

    #[test]
    fn test_detail_mode() {
        let mut browser = browser();
        assert!(browser.open(1));
        let term = render(&browser);

        assert!(term.buffer_contains("Back to Patient List"));
        assert!(term.buffer_contains("Riya Verma"));
        assert!(term.buffer_contains("#P2"));
        assert!(term.buffer_contains("Anxiety"));
        assert!(term.buffer_contains("85 bpm"));
        assert!(term.buffer_contains("6000"));
        assert!(term.buffer_contains("Doctor's Notes"));
        assert!(term.buffer_contains(NOTES_PLACEHOLDER));
        assert!(term.buffer_contains("Assign Challenge"));
        assert!(term.buffer_contains("[ Contact ]"));
        assert!(!term.buffer_contains("All Patients"));
    }

    #[test]
    fn test_notes_editing() {
        let mut browser = browser();
        browser.open(0);
        browser.focus_notes();
        for c in "BP stable".chars() {
            browser.push_note(c);
        }
        let term = render(&browser);

        assert!(term.buffer_contains("BP stable▏"));
        assert!(term.buffer_contains("Save Note"));
        assert!(!term.buffer_contains(NOTES_PLACEHOLDER));
    }

    #[test]
    fn test_caret_blinks_off() {
        let mut browser = browser();
        browser.open(0);
        browser.focus_notes();
        browser.push_note('x');
        let mut term = TestTerminal::with_size(100, 28);
        term.render_widget(PatientsPage::new(&browser, icons()).caret(false), term.area());
        assert!(!term.buffer_contains("▏"));
    }
}
