//! `/patient/fitness`

use calmcare_core::FitnessView;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, styles};
use crate::widgets::ListRows;

use super::card;

pub struct FitnessPage<'a> {
    view: &'a FitnessView,
    icons: IconSet,
}

impl<'a> FitnessPage<'a> {
    pub fn new(view: &'a FitnessView, icons: IconSet) -> Self {
        Self { view, icons }
    }
}

impl Widget for FitnessPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [workouts, plan] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(area);

        let inner = card("Recommended Workouts", workouts, buf);
        ListRows::new(&self.view.workouts).render(inner, buf);

        let title = format!("Today's Plan · {}", self.view.plan_title);
        let inner = card(&title, plan, buf);
        if inner.height < 2 {
            return;
        }
        let progress = format!(
            " {}/{} completed",
            self.view.completed(),
            self.view.plan.len()
        );
        buf.set_string(inner.x, inner.y, progress, styles::accent());
        let rows = Rect {
            y: inner.y + 2,
            height: inner.height.saturating_sub(2),
            ..inner
        };
        ListRows::new(&self.view.plan)
            .checklist(self.icons)
            .render(rows, buf);
    }
}
