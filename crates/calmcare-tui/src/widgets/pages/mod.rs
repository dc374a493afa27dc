//! Page assemblies
//!
//! Each page takes its view-model from the dashboard source and lays out
//! the shared widgets. Pages hold no data of their own.

mod activity;
mod auth;
mod fitness;
mod landing;
mod mental;
mod nutrition;
mod patient_dashboard;
mod provider;
mod sleep;

pub use activity::ActivityPage;
pub use auth::AuthPage;
pub use fitness::FitnessPage;
pub use landing::LandingPage;
pub use mental::MentalPage;
pub use nutrition::NutritionPage;
pub use patient_dashboard::PatientDashboardPage;
pub use provider::{PatientsPage, ProviderOverviewPage};
pub use sleep::SleepPage;

use calmcare_core::MetricDatum;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Color,
    widgets::Widget,
};

use crate::theme::styles;

use super::StatCard;

/// Height of a row of stat cards
pub(crate) const STAT_ROW_HEIGHT: u16 = 4;

/// Draw a titled card and return its inner area
pub(crate) fn card(title: &str, area: Rect, buf: &mut Buffer) -> Rect {
    let block = styles::titled_card(title);
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Equal-width stat cards across `area`, cycling through `colors`
pub(crate) fn stat_row(metrics: &[MetricDatum], colors: &[Color], area: Rect, buf: &mut Buffer) {
    if metrics.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, metrics.len() as u32); metrics.len()];
    let slots = Layout::horizontal(constraints).split(area);
    for (i, (metric, slot)) in metrics.iter().zip(slots.iter()).enumerate() {
        let mut card = StatCard::new(metric);
        if !colors.is_empty() {
            card = card.color(colors[i % colors.len()]);
        }
        card.render(*slot, buf);
    }
}
