//! Patient roster table, shared by the provider overview and the patient
//! list page.

use calmcare_core::PatientSummary;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Cell, Row, Table, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Which column set to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumns {
    /// Patient Details / Last Update / Status / Action
    Overview,
    /// Patient Name / Last Visit / Status
    Roster,
}

impl TableColumns {
    fn headers(self) -> &'static [&'static str] {
        match self {
            TableColumns::Overview => &["Patient Details", "Last Update", "Status", "Action"],
            TableColumns::Roster => &["Patient Name", "Last Visit", "Status"],
        }
    }

    fn widths(self) -> Vec<Constraint> {
        match self {
            TableColumns::Overview => vec![
                Constraint::Min(24),
                Constraint::Length(14),
                Constraint::Length(10),
                Constraint::Length(8),
            ],
            TableColumns::Roster => vec![
                Constraint::Min(24),
                Constraint::Length(14),
                Constraint::Length(10),
            ],
        }
    }
}

pub struct PatientTable<'a> {
    patients: &'a [PatientSummary],
    columns: TableColumns,
    selected: Option<usize>,
    icons: IconSet,
    block: Option<Block<'a>>,
}

impl<'a> PatientTable<'a> {
    pub fn new(patients: &'a [PatientSummary], columns: TableColumns, icons: IconSet) -> Self {
        Self {
            patients,
            columns,
            selected: None,
            icons,
            block: None,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn row(&self, index: usize, patient: &'a PatientSummary) -> Row<'a> {
        let is_selected = self.selected == Some(index);
        let name_style = if is_selected {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };

        let details = Line::from(vec![
            Span::styled(patient.name.as_str(), name_style),
            Span::raw(" "),
            Span::styled(
                format!("{} · {}", patient.display_id(), patient.condition),
                styles::text_muted(),
            ),
        ]);
        let status = Line::from(vec![
            Span::styled(self.icons.dot(), styles::status_style(patient.status)),
            Span::raw(" "),
            Span::styled(patient.status.label(), styles::status_style(patient.status)),
        ]);

        let mut cells = vec![
            Cell::from(details),
            Cell::from(Span::styled(patient.last_visit.as_str(), styles::text_secondary())),
            Cell::from(status),
        ];
        if self.columns == TableColumns::Overview {
            cells.push(Cell::from(Span::styled(
                format!("View {}", self.icons.chevron_right()),
                styles::accent(),
            )));
        }

        let row = Row::new(cells);
        if is_selected {
            row.style(Style::default().bg(palette::POPUP_BG))
        } else {
            row
        }
    }
}

impl Widget for PatientTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(
            self.columns
                .headers()
                .iter()
                .map(|h| Cell::from(Span::styled(*h, styles::text_muted()))),
        )
        .bottom_margin(1);

        let rows: Vec<Row> = self
            .patients
            .iter()
            .enumerate()
            .map(|(i, p)| self.row(i, p))
            .collect();

        let mut table = Table::new(rows, self.columns.widths())
            .header(header)
            .column_spacing(2);
        if let Some(block) = self.block {
            table = table.block(block);
        }
        Widget::render(table, area, buf);
    }
}
