//! View-models for every page, and the source trait that produces them
//!
//! Pages never own literal data. They ask a [`DashboardSource`] for a
//! view-model and hand its fields to the shared widget set.

use serde::Serialize;

use crate::model::{
    ChartSeries, GoalProgress, ListRow, MetricDatum, PatientSummary, RingDatum, StageSegment,
    StageShare,
};

/// `/patient`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientOverview {
    /// Heart rate, sleep, water, calories
    pub vitals: Vec<MetricDatum>,
    pub challenges: Vec<RingDatum>,
    pub foods: Vec<ListRow>,
    /// Food card drawn as selected
    pub active_food: Option<usize>,
    pub activity: ChartSeries,
    /// Label on the highlighted bar, e.g. "8.5 KM"
    pub activity_caption: String,
    /// Period heading, e.g. "November, 2023"
    pub activity_period: String,
    /// Steps, distance, time, speed
    pub totals: Vec<MetricDatum>,
}

/// `/patient/activity`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityView {
    pub metrics: Vec<MetricDatum>,
    pub intensity: ChartSeries,
    pub intensity_caption: String,
    pub last_route_distance: String,
    pub last_route_time: String,
    pub recent: Vec<ListRow>,
}

/// `/patient/sleep`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepView {
    /// Sentence appended to the morning greeting
    pub summary: String,
    pub stats: Vec<MetricDatum>,
    /// e.g. "11:30 PM - 07:30 AM"
    pub window: String,
    pub axis_labels: Vec<String>,
    pub segments: Vec<StageSegment>,
    /// Length of the recording in minutes; the last segment runs to here
    pub span_min: f64,
    pub quality: RingDatum,
    pub quality_note: String,
    pub breakdown: Vec<StageShare>,
    /// Hours slept per night
    pub consistency: ChartSeries,
    /// Nights shorter than this are flagged
    pub consistency_target: f64,
    /// Value drawn as a full bar
    pub consistency_ceiling: f64,
    pub avg_bedtime: String,
    pub avg_wake: String,
}

/// `/patient/nutrition`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionView {
    pub kcal_left: String,
    pub daily_target: String,
    pub target_ring: RingDatum,
    pub macros: Vec<GoalProgress>,
    pub meals: Vec<ListRow>,
    pub hydration: GoalProgress,
    pub recommended: ListRow,
}

/// `/patient/fitness`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitnessView {
    pub workouts: Vec<ListRow>,
    pub plan_title: String,
    pub plan: Vec<ListRow>,
}

impl FitnessView {
    /// Completed exercises in today's plan
    pub fn completed(&self) -> usize {
        self.plan.iter().filter(|row| row.done == Some(true)).count()
    }
}

/// `/patient/mental`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentalView {
    pub prompt: String,
    pub mindfulness: MetricDatum,
    pub mindfulness_bars: ChartSeries,
    pub daily_pick: ListRow,
    pub sleep_stories: Vec<ListRow>,
    pub focus_tracks: Vec<ListRow>,
}

/// `/provider`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderOverview {
    pub stats: Vec<MetricDatum>,
}

/// `/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandingView {
    pub nav_links: Vec<String>,
    pub tagline: String,
    pub headline: String,
    pub blurb: String,
    pub call_to_action: String,
    pub features_heading: String,
    pub features: Vec<ListRow>,
    pub services_heading: String,
    pub services: Vec<ListRow>,
    pub footer_title: String,
    pub footer_note: String,
}

/// Supplies the view-model for each page
///
/// The bundled implementation is [`crate::mock::MockDashboard`]; anything
/// else (a fixture, a remote source) plugs in here.
pub trait DashboardSource: Send + Sync {
    fn patient_overview(&self) -> PatientOverview;
    fn activity(&self) -> ActivityView;
    fn sleep(&self) -> SleepView;
    fn nutrition(&self) -> NutritionView;
    fn fitness(&self) -> FitnessView;
    fn mental(&self) -> MentalView;
    fn provider_overview(&self) -> ProviderOverview;
    /// Provider roster, in display order
    fn patients(&self) -> Vec<PatientSummary>;
    fn landing(&self) -> LandingView;
}
