//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use calmcare_app::{AppState, PageState};
use calmcare_core::Route;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::layout;
use super::widgets::{self, pages};
use crate::theme::{icons::IconSet, palette, styles};

/// Header text for the page being shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

impl Heading {
    fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Caret visibility for text fields, toggling every other tick
fn caret_on(state: &AppState) -> bool {
    (state.ticks / 2) % 2 == 0
}

/// Render the complete UI
pub fn view(frame: &mut Frame, state: &AppState) {
    let date = chrono::Local::now().format("%a, %d %b %Y").to_string();
    view_with_date(frame, state, &date);
}

/// [`view`] with a fixed date string
pub fn view_with_date(frame: &mut Frame, state: &AppState, date: &str) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let icons = IconSet::new(state.settings.ui.icons);
    let sidebar = state.sidebar();
    let areas = layout::create(area, sidebar.is_some());

    if let (Some(table), Some(sidebar_area)) = (sidebar, areas.sidebar) {
        frame.render_widget(
            widgets::Sidebar::new(table, state.current_path(), icons),
            sidebar_area,
        );
    }

    let heading = render_page(frame, areas.content, state, icons);

    if let Some(header_area) = areas.header {
        frame.render_widget(
            widgets::PageHeader::new(&heading.title, &heading.subtitle)
                .date(date)
                .help_hint(state.settings.ui.show_help_hint),
            header_area,
        );
    }

    frame.render_widget(widgets::KeyHints::for_state(state), areas.footer);

    if state.show_help {
        frame.render_widget(widgets::HelpOverlay::new(state.route().portal()), area);
    }
}

/// Draw the current page into `area` and return its header text
fn render_page(frame: &mut Frame, area: Rect, state: &AppState, icons: IconSet) -> Heading {
    let route = state.route();
    let source = state.source();
    let profile = &state.settings.profile;
    let title = route.title();

    match (route, &state.page) {
        (Route::Landing, _) => {
            let view = source.landing();
            frame.render_widget(pages::LandingPage::new(&view, icons), area);
            Heading::new(title, view.tagline)
        }
        (Route::SignIn | Route::SignUp, PageState::SignIn(form) | PageState::SignUp(form)) => {
            frame.render_widget(
                pages::AuthPage::new(form, icons).caret(caret_on(state)),
                area,
            );
            Heading::new(title, "")
        }
        (Route::PatientDashboard, _) => {
            let view = source.patient_overview();
            frame.render_widget(pages::PatientDashboardPage::new(&view), area);
            Heading::new(title, format!("Hi {},", profile.patient_name))
        }
        (Route::Activity, _) => {
            let view = source.activity();
            frame.render_widget(pages::ActivityPage::new(&view), area);
            Heading::new(title, "Keep track of your fitness journey")
        }
        (Route::Sleep, _) => {
            let view = source.sleep();
            frame.render_widget(pages::SleepPage::new(&view), area);
            Heading::new(
                title,
                format!("Good morning, {}! {}", profile.patient_name, view.summary),
            )
        }
        (Route::Nutrition, _) => {
            let view = source.nutrition();
            frame.render_widget(pages::NutritionPage::new(&view), area);
            Heading::new(title, "Track your calories and macros")
        }
        (Route::Fitness, _) => {
            let view = source.fitness();
            frame.render_widget(pages::FitnessPage::new(&view, icons), area);
            Heading::new(title, "Your workout plan for today")
        }
        (Route::MentalHealth, PageState::Mental(selector)) => {
            let view = source.mental();
            frame.render_widget(pages::MentalPage::new(&view, selector, icons), area);
            Heading::new(title, "Take a moment for yourself")
        }
        (Route::ProviderDashboard, PageState::ProviderOverview(cursor)) => {
            let view = source.provider_overview();
            let patients = source.patients();
            frame.render_widget(
                pages::ProviderOverviewPage::new(&view, &patients, cursor, icons),
                area,
            );
            Heading::new(title, format!("Welcome back, {}", profile.provider_name))
        }
        (Route::ProviderPatients, PageState::ProviderPatients(browser)) => {
            frame.render_widget(
                pages::PatientsPage::new(browser, icons).caret(caret_on(state)),
                area,
            );
            match browser.selected() {
                Some(patient) => Heading::new(
                    "Patient Details",
                    format!("Viewing record for {}", patient.name),
                ),
                None => Heading::new(title, "Manage your patient records"),
            }
        }
        (route, page) => {
            // Page state is always mounted for the route, so this is a bug
            tracing::warn!("No page state for {:?}: {:?}", route, page);
            frame.render_widget(
                Paragraph::new("This page is not available.").style(styles::text_muted()),
                area,
            );
            Heading::new(title, "")
        }
    }
}
