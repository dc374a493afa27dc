//! Route table - maps request paths to page assemblies
//!
//! Routing is a flat, static table: no parameters, no nested segments.
//! Anything the table does not know redirects to [`DEFAULT_ROUTE`]; a
//! lookup never fails.
//!
//! Matching follows browser-router conventions:
//! - query strings and fragments are ignored
//! - relative paths resolve against `/` and dot segments are collapsed
//! - one trailing slash is ignored (`/patient/` matches `/patient`)
//! - matching is ASCII case-insensitive, while the location keeps the
//!   caller's spelling (so nav highlighting, which compares exactly, may
//!   find no active entry)

use serde::Serialize;
use tracing::debug;
use url::Url;

/// Base used to resolve request paths the way a browser location would
const LOCATION_BASE: &str = "http://calmcare.local/";

/// Which shell a page is rendered inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Portal {
    /// Landing and authentication pages, no sidebar
    Public,
    /// Patient dashboards with the patient sidebar
    Patient,
    /// Provider dashboards with the provider sidebar
    Provider,
}

/// Every page assembly the application can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    SignIn,
    SignUp,
    PatientDashboard,
    Activity,
    Sleep,
    Nutrition,
    Fitness,
    MentalHealth,
    ProviderDashboard,
    ProviderPatients,
}

/// Where unmatched paths end up
pub const DEFAULT_ROUTE: Route = Route::PatientDashboard;

impl Route {
    /// All routes in table order
    pub const ALL: [Route; 11] = [
        Route::Landing,
        Route::PatientDashboard,
        Route::Activity,
        Route::Sleep,
        Route::Nutrition,
        Route::Fitness,
        Route::MentalHealth,
        Route::ProviderDashboard,
        Route::ProviderPatients,
        Route::SignIn,
        Route::SignUp,
    ];

    /// Canonical path for this route
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::PatientDashboard => "/patient",
            Route::Activity => "/patient/activity",
            Route::Sleep => "/patient/sleep",
            Route::Nutrition => "/patient/nutrition",
            Route::Fitness => "/patient/fitness",
            Route::MentalHealth => "/patient/mental",
            Route::ProviderDashboard => "/provider",
            Route::ProviderPatients => "/provider/patients",
        }
    }

    /// Page heading shown in the header bar
    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "CalmCare",
            Route::SignIn => "Welcome Back",
            Route::SignUp => "Create Account",
            Route::PatientDashboard => "Welcome to Wellness!",
            Route::Activity => "Activity Tracker",
            Route::Sleep => "Sleep Monitor",
            Route::Nutrition => "Nutrition Plan",
            Route::Fitness => "Fitness Studio",
            Route::MentalHealth => "Mental Well-being",
            Route::ProviderDashboard => "Provider Portal",
            Route::ProviderPatients => "Patients",
        }
    }

    pub fn portal(self) -> Portal {
        match self {
            Route::Landing | Route::SignIn | Route::SignUp => Portal::Public,
            Route::PatientDashboard
            | Route::Activity
            | Route::Sleep
            | Route::Nutrition
            | Route::Fitness
            | Route::MentalHealth => Portal::Patient,
            Route::ProviderDashboard | Route::ProviderPatients => Portal::Provider,
        }
    }

    /// Exact table lookup on an already-normalized path
    fn lookup(normalized: &str) -> Option<Route> {
        Route::ALL
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(normalized))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of routing a request path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Path as the caller supplied it
    pub requested: String,
    /// Location after routing: the normalized request on a match, the
    /// default route's path after a redirect
    pub location: String,
    /// Page that renders for this request
    pub route: Route,
    /// True when the request fell through to the catch-all
    pub redirected: bool,
}

/// Route a request path. Never fails: unknown paths redirect.
pub fn resolve(requested: &str) -> Resolution {
    let normalized = normalize_path(requested);

    match Route::lookup(&normalized) {
        Some(route) => Resolution {
            requested: requested.to_string(),
            location: normalized,
            route,
            redirected: false,
        },
        None => {
            debug!(
                "No route for {:?}, redirecting to {}",
                requested,
                DEFAULT_ROUTE.path()
            );
            Resolution {
                requested: requested.to_string(),
                location: DEFAULT_ROUTE.path().to_string(),
                route: DEFAULT_ROUTE,
                redirected: true,
            }
        }
    }
}

/// Reduce a request to the pathname a browser location would report
///
/// Query and fragment are dropped, dot segments collapse, and a single
/// trailing slash is removed (except for the root). Input that resolves
/// to another origin (`//host/...`, `https://host/...`) is kept verbatim,
/// so it cannot match a route.
pub fn normalize_path(raw: &str) -> String {
    let joined = Url::parse(LOCATION_BASE).and_then(|base| {
        let url = base.join(raw.trim())?;
        Ok((url.origin() == base.origin()).then_some(url))
    });

    let mut path = match joined {
        Ok(Some(url)) => url.path().to_string(),
        // Foreign or unparseable input cannot match any route; keep it
        // verbatim so the caller can still see what was asked for.
        Ok(None) | Err(_) => raw.to_string(),
    };

    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_resolves_to_itself() {
        for route in Route::ALL {
            let res = resolve(route.path());
            assert_eq!(res.route, route, "path {}", route.path());
            assert!(!res.redirected);
            assert_eq!(res.location, route.path());
        }
    }

    #[test]
    fn test_route_paths_are_unique() {
        for (i, a) in Route::ALL.iter().enumerate() {
            for b in &Route::ALL[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }

    #[test]
    fn test_unknown_path_redirects_to_patient_dashboard() {
        let res = resolve("/does/not/exist");
        assert_eq!(res.route, Route::PatientDashboard);
        assert!(res.redirected);
        assert_eq!(res.location, "/patient");
        assert_eq!(res.requested, "/does/not/exist");
    }

    #[test]
    fn test_unrouted_provider_menu_paths_redirect() {
        for path in [
            "/provider/compliance",
            "/provider/analytics",
            "/provider/messages",
            "/provider/settings",
        ] {
            let res = resolve(path);
            assert_eq!(res.route, DEFAULT_ROUTE);
            assert!(res.redirected);
        }
    }

    #[test]
    fn test_redirect_renders_same_page_as_patient() {
        assert_eq!(resolve("/nowhere").route, resolve("/patient").route);
        assert_eq!(resolve("/nowhere").location, resolve("/patient").location);
    }

    #[test]
    fn test_nested_unknown_under_known_prefix_redirects() {
        let res = resolve("/patient/activity/today");
        assert_eq!(res.route, Route::PatientDashboard);
        assert!(res.redirected);
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        let res = resolve("/patient/sleep?night=1#stages");
        assert_eq!(res.route, Route::Sleep);
        assert_eq!(res.location, "/patient/sleep");
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let res = resolve("/provider/patients/");
        assert_eq!(res.route, Route::ProviderPatients);
        assert_eq!(res.location, "/provider/patients");
        assert_eq!(resolve("/").route, Route::Landing);
    }

    #[test]
    fn test_relative_and_dot_segments() {
        assert_eq!(resolve("signin").route, Route::SignIn);
        assert_eq!(resolve("/patient/../provider").route, Route::ProviderDashboard);
    }

    #[test]
    fn test_matching_is_case_insensitive_but_location_keeps_case() {
        let res = resolve("/Patient/Sleep");
        assert_eq!(res.route, Route::Sleep);
        assert!(!res.redirected);
        assert_eq!(res.location, "/Patient/Sleep");
    }

    #[test]
    fn test_leading_double_slash_redirects() {
        for path in ["//patient", "//", "//provider/patients"] {
            let res = resolve(path);
            assert_eq!(res.route, Route::PatientDashboard, "path {}", path);
            assert!(res.redirected, "path {}", path);
            assert_eq!(res.location, "/patient");
        }
    }

    #[test]
    fn test_absolute_url_for_other_host_redirects() {
        let res = resolve("http://other.host/signin");
        assert_eq!(res.route, Route::PatientDashboard);
        assert!(res.redirected);

        let res = resolve("https://calmcare.local/signin");
        assert!(res.redirected);
    }

    #[test]
    fn test_empty_path_is_landing() {
        assert_eq!(resolve("").route, Route::Landing);
    }

    #[test]
    fn test_portals() {
        assert_eq!(Route::Landing.portal(), Portal::Public);
        assert_eq!(Route::SignUp.portal(), Portal::Public);
        assert_eq!(Route::MentalHealth.portal(), Portal::Patient);
        assert_eq!(Route::ProviderPatients.portal(), Portal::Provider);
    }

    #[test]
    fn test_display_is_path() {
        assert_eq!(Route::Nutrition.to_string(), "/patient/nutrition");
    }
}
