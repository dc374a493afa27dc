//! # calmcare-core - Core Domain Types
//!
//! Foundation crate for CalmCare. Provides the route table, sidebar
//! matching, ring geometry, display models, the view-model source trait
//! and error handling.
//!
//! ## Public API
//!
//! ### Routing (`route`, `nav`)
//! - [`resolve()`] - Route a request path; unknown paths redirect to `/patient`
//! - [`Route`], [`Portal`], [`Resolution`]
//! - [`NavTable`] - Per-sidebar menu table with its [`MatchPolicy`]
//!
//! ### Geometry (`ring`)
//! - [`RingGeometry`] - Circumference and dash offset for percentage rings
//!
//! ### View-models (`model`, `dashboard`, `mock`)
//! - [`DashboardSource`] - One method per page
//! - [`MockDashboard`] - Bundled demo data
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum grouped by layer (io, terminal, config, signals)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use calmcare_core::prelude::*;
//! ```

pub mod dashboard;
pub mod error;
pub mod logging;
pub mod mock;
pub mod model;
pub mod nav;
pub mod prelude;
pub mod ring;
pub mod route;

pub use dashboard::{
    ActivityView, DashboardSource, FitnessView, LandingView, MentalView, NutritionView,
    PatientOverview, ProviderOverview, SleepView,
};
pub use error::{Error, Result, ResultExt};
pub use mock::MockDashboard;
pub use model::{
    ChartPoint, ChartSeries, GoalProgress, ListRow, MetricDatum, Mood, PatientStatus,
    PatientSummary, RingDatum, SleepStage, StageSegment, StageShare, WEEKDAYS,
};
pub use nav::{
    MatchPolicy, NavEntry, NavIcon, NavMenuItem, NavTable, SidebarVariant, PATIENT_NAV,
    PROVIDER_NAV,
};
pub use ring::{clamp_percentage, RingGeometry, CHALLENGE_RING, QUALITY_RING};
pub use route::{normalize_path, resolve, Portal, Resolution, Route, DEFAULT_ROUTE};
