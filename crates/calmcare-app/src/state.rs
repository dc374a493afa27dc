//! Application state (Model in TEA pattern)

use std::sync::Arc;

use calmcare_core::prelude::*;
use calmcare_core::{resolve, DashboardSource, MockDashboard, NavTable, Resolution, Route};

use crate::config::Settings;
use crate::pages::PageState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
pub struct AppState {
    pub phase: AppPhase,

    /// Where the router put us
    pub location: Resolution,

    /// Page-local state for `location.route`
    pub page: PageState,

    pub settings: Settings,

    /// Help overlay visible
    pub show_help: bool,

    /// Ticks since startup, for caret blinking
    pub ticks: u64,

    /// Number of times a page has been mounted
    pub mounts: u64,

    source: Arc<dyn DashboardSource>,
}

impl AppState {
    /// State on the bundled demo data, opened at the configured start route
    pub fn new(settings: Settings) -> Self {
        Self::with_source(settings, Arc::new(MockDashboard::new()))
    }

    pub fn with_source(settings: Settings, source: Arc<dyn DashboardSource>) -> Self {
        let location = resolve(&settings.behavior.start_route);
        let page = PageState::mount(location.route, source.as_ref());
        info!(
            "Starting at {} (requested {:?})",
            location.location, location.requested
        );
        Self {
            phase: AppPhase::Running,
            location,
            page,
            settings,
            show_help: false,
            ticks: 0,
            mounts: 1,
            source,
        }
    }

    pub fn source(&self) -> &dyn DashboardSource {
        self.source.as_ref()
    }

    pub fn route(&self) -> Route {
        self.location.route
    }

    /// Path the sidebar highlights against
    pub fn current_path(&self) -> &str {
        &self.location.location
    }

    /// Sidebar for the current page, if it has one
    pub fn sidebar(&self) -> Option<&'static NavTable> {
        NavTable::for_portal(self.route().portal())
    }

    /// Route a path and remount the page if the route changed
    ///
    /// Returns true when the page was remounted. Staying on the same route
    /// keeps page-local state intact, even when the path spelling differs.
    pub fn navigate(&mut self, path: &str) -> bool {
        let resolution = resolve(path);
        let remount = resolution.route != self.location.route;

        debug!(
            "Navigate {:?} -> {} (redirected: {}, remount: {})",
            path, resolution.location, resolution.redirected, remount
        );

        self.location = resolution;
        if remount {
            self.page = PageState::mount(self.location.route, self.source.as_ref());
            self.mounts += 1;
        }
        remount
    }

    pub fn is_text_entry(&self) -> bool {
        self.page.is_text_entry()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Close the help overlay if open, otherwise start quitting
    pub fn request_quit(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else {
            info!("Quit requested");
            self.phase = AppPhase::Quitting;
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("phase", &self.phase)
            .field("location", &self.location)
            .field("page", &self.page)
            .field("show_help", &self.show_help)
            .field("ticks", &self.ticks)
            .field("mounts", &self.mounts)
            .finish_non_exhaustive()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
