//! `/patient/nutrition`

use calmcare_core::{NutritionView, CHALLENGE_RING};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};
use crate::widgets::{GoalBar, ListRows, ProgressRing};

use super::card;

const MACRO_COLORS: [ratatui::style::Color; 3] =
    [palette::ACCENT, palette::CALORIES, palette::HEART];

pub struct NutritionPage<'a> {
    view: &'a NutritionView,
}

impl<'a> NutritionPage<'a> {
    pub fn new(view: &'a NutritionView) -> Self {
        Self { view }
    }

    fn render_calories(&self, area: Rect, buf: &mut Buffer) {
        let inner = card("Calories", area, buf);
        let sub_label = format!("kcal left of {}", self.view.daily_target);
        ProgressRing::new(CHALLENGE_RING, self.view.target_ring.percentage)
            .color(palette::CALORIES)
            .center(&self.view.kcal_left)
            .labels(&self.view.target_ring.label, &sub_label)
            .render(inner, buf);
    }

    fn render_macros(&self, area: Rect, buf: &mut Buffer) {
        let inner = card("Macros", area, buf);
        for (i, goal) in self.view.macros.iter().enumerate() {
            let y = inner.y + 1 + i as u16 * 3;
            if y + 2 > inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 2);
            GoalBar::new(goal)
                .color(MACRO_COLORS[i % MACRO_COLORS.len()])
                .render(row, buf);
        }
    }

    fn render_side(&self, area: Rect, buf: &mut Buffer) {
        let [hydration, recommended] =
            Layout::vertical([Constraint::Length(5), Constraint::Min(4)]).areas(area);

        let inner = card("Hydration", hydration, buf);
        if inner.height >= 3 {
            let row = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 2);
            GoalBar::new(&self.view.hydration)
                .color(palette::WATER)
                .render(row, buf);
        }

        let inner = card("Recommended", recommended, buf);
        let rec = &self.view.recommended;
        let lines = [
            Line::from(Span::styled(format!(" {}", rec.title), styles::heading())),
            Line::from(vec![
                Span::styled(format!(" {}", rec.subtitle), styles::text_muted()),
                Span::styled(" · ", styles::text_muted()),
                Span::styled(rec.detail.as_str(), styles::accent()),
            ]),
        ];
        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y < inner.bottom() {
                buf.set_line(inner.x, y, line, inner.width);
            }
        }
    }
}

impl Widget for NutritionPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [top, meals] =
            Layout::vertical([Constraint::Min(12), Constraint::Length(9)]).areas(area);
        let [calories, macros] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(top);
        self.render_calories(calories, buf);
        self.render_macros(macros, buf);

        let [meal_list, side] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(meals);
        let inner = card("Today's Meals", meal_list, buf);
        ListRows::new(&self.view.meals).render(inner, buf);
        self.render_side(side, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use calmcare_core::{DashboardSource, MockDashboard};

    #[test]
    fn test_nutrition_page() {
        let view = MockDashboard::new().nutrition();
        let mut term = TestTerminal::with_size(100, 30);
        term.render_widget(NutritionPage::new(&view), term.area());

        assert!(term.buffer_contains("1,240"));
        assert!(term.buffer_contains("kcal left of 2,500 kcal"));
        assert!(term.buffer_contains("110/180g"));
        assert!(term.buffer_contains("45/80g"));
        assert!(term.buffer_contains("Oatmeal & Berries"));
        assert!(term.buffer_contains("1.2/2.5L"));
        assert!(term.buffer_contains("Avocado Toast"));
        assert!(term.buffer_contains("350 Kcal"));
    }
}
