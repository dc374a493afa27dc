//! Headless mode - route report as JSON instead of the TUI
//!
//! Resolves the start route the same way the TUI does and prints one JSON
//! document describing where the router landed and what the sidebar would
//! highlight. Useful for scripting and for checking routing without a
//! terminal.
//!
//! ```json
//! {"requested":"/provider/patients","location":"/provider/patients","route":"provider_patients",
//!  "portal":"provider","title":"Patients","redirected":false,"sidebar":"provider",
//!  "entries":[{"icon":"activity","label":"Dashboard","path":"/provider","active":false},...],
//!  "timestamp":1792310400000}
//! ```

use std::io::{self, Write};

use calmcare_app::config::Settings;
use calmcare_core::prelude::*;
use calmcare_core::{resolve, NavEntry, NavMenuItem, NavTable, Portal, Route, SidebarVariant};
use chrono::Utc;
use serde::Serialize;

/// Routing outcome for one request path
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub requested: String,
    pub location: String,
    pub route: Route,
    pub portal: Portal,
    pub title: &'static str,
    pub redirected: bool,
    /// Sidebar variant, absent for public pages
    pub sidebar: Option<SidebarVariant>,
    /// Sidebar entries with their active flags; empty without a sidebar
    pub entries: Vec<NavEntry>,
    pub footer: Option<NavMenuItem>,
    pub timestamp: i64,
}

impl RouteReport {
    pub fn for_path(path: &str) -> Self {
        let resolution = resolve(path);
        let table = NavTable::for_portal(resolution.route.portal());

        Self {
            title: resolution.route.title(),
            portal: resolution.route.portal(),
            route: resolution.route,
            sidebar: table.map(|t| t.variant),
            entries: table
                .map(|t| t.highlight(&resolution.location))
                .unwrap_or_default(),
            footer: table.map(|t| t.footer),
            redirected: resolution.redirected,
            location: resolution.location,
            requested: resolution.requested,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Labels of the highlighted sidebar entries
    pub fn active_labels(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.item.label)
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the report to `out` as a single JSON line
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.to_json()?)?;
        out.flush()?;
        Ok(())
    }
}

/// Print the report for the configured start route
pub fn run(settings: &Settings) -> Result<()> {
    let report = RouteReport::for_path(&settings.behavior.start_route);
    info!(
        "Headless report for {:?}: {} (redirected: {})",
        report.requested, report.location, report.redirected
    );
    report.write_to(&mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_subpage_report() {
        let report = RouteReport::for_path("/patient/sleep");
        assert_eq!(report.route, Route::Sleep);
        assert_eq!(report.title, "Sleep Monitor");
        assert!(!report.redirected);
        assert_eq!(report.sidebar, Some(SidebarVariant::Patient));
        assert_eq!(report.active_labels(), vec!["Sleep"]);
    }

    #[test]
    fn test_redirect_report() {
        let report = RouteReport::for_path("/provider/settings");
        assert_eq!(report.route, Route::PatientDashboard);
        assert_eq!(report.location, "/patient");
        assert_eq!(report.requested, "/provider/settings");
        assert!(report.redirected);
        assert_eq!(report.active_labels(), vec!["Dashboard"]);
    }

    #[test]
    fn test_public_page_has_no_entries() {
        let report = RouteReport::for_path("/signin");
        assert_eq!(report.portal, Portal::Public);
        assert!(report.sidebar.is_none());
        assert!(report.entries.is_empty());
        assert!(report.footer.is_none());
    }

    #[test]
    fn test_json_shape() {
        let report = RouteReport::for_path("/provider/patients");
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["route"], "provider_patients");
        assert_eq!(value["portal"], "provider");
        assert_eq!(value["sidebar"], "provider");
        assert_eq!(value["redirected"], false);
        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[1]["label"], "Patients");
        assert_eq!(entries[1]["active"], true);
        assert_eq!(entries[0]["active"], false);
        assert_eq!(value["footer"]["path"], "/patient");
    }

    #[test]
    fn test_write_to_emits_one_line() {
        let mut out = Vec::new();
        RouteReport::for_path("/").write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\"route\":\"landing\""));
    }
}
