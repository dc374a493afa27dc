//! Display-oriented domain shapes shared by every page
//!
//! All values here are pre-computed for display: widgets render them
//! as-is and never derive business meaning from them.

use serde::Serialize;

use crate::ring::clamp_percentage;

// ─────────────────────────────────────────────────────────────────────────────
// Patients
// ─────────────────────────────────────────────────────────────────────────────

/// Coarse health status shown next to a patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PatientStatus {
    Good,
    Medium,
    Poor,
}

impl PatientStatus {
    pub fn label(self) -> &'static str {
        match self {
            PatientStatus::Good => "Good",
            PatientStatus::Medium => "Medium",
            PatientStatus::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the provider's patient roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub avatar_url: String,
    pub condition: String,
    pub status: PatientStatus,
    /// Free-form relative time, e.g. "3 hours ago"
    pub last_visit: String,
    /// Beats per minute
    pub heart_rate: u32,
    pub steps: u32,
}

impl PatientSummary {
    /// Record identifier as shown on the detail page, e.g. `#P2`
    pub fn display_id(&self) -> String {
        format!("#{}", self.id.to_uppercase())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metrics and series
// ─────────────────────────────────────────────────────────────────────────────

/// A labelled value with optional unit and trend badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricDatum {
    pub label: String,
    pub value: String,
    pub unit: String,
    /// e.g. "+12%"
    pub trend: Option<String>,
    /// Small caption under the value, e.g. "On Schedule"
    pub caption: Option<String>,
}

impl MetricDatum {
    pub fn new(label: impl Into<String>, value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            unit: unit.into(),
            trend: None,
            caption: None,
        }
    }

    pub fn with_trend(mut self, trend: impl Into<String>) -> Self {
        self.trend = Some(trend.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Value and unit joined for single-line display
    pub fn display_value(&self) -> String {
        if self.unit.is_empty() {
            self.value.clone()
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }
}

/// One bar of a series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub magnitude: f64,
}

/// Ordered, fixed-length series (usually one point per weekday)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    /// Bar to emphasise, if any
    pub highlight: Option<usize>,
}

/// Short weekday labels, Monday first
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

impl ChartSeries {
    pub fn new(points: Vec<ChartPoint>) -> Self {
        Self {
            points,
            highlight: None,
        }
    }

    /// Build a seven-day series from magnitudes, labelled Mon..Sun
    pub fn weekly(magnitudes: [f64; 7]) -> Self {
        Self::labelled(WEEKDAYS, magnitudes)
    }

    pub fn labelled<const N: usize>(labels: [&str; N], magnitudes: [f64; N]) -> Self {
        Self::new(
            labels
                .iter()
                .zip(magnitudes)
                .map(|(label, magnitude)| ChartPoint {
                    label: (*label).to_string(),
                    magnitude,
                })
                .collect(),
        )
    }

    pub fn with_highlight(mut self, index: usize) -> Self {
        self.highlight = Some(index);
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest magnitude, or 0 for an empty series
    pub fn max_magnitude(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.magnitude)
            .fold(0.0_f64, f64::max)
    }

    /// Bar heights scaled so that `ceiling` maps to `height` cells
    ///
    /// Heights are rounded and clamped to `[0, height]`; negative
    /// magnitudes render as empty bars.
    pub fn scaled(&self, ceiling: f64, height: u16) -> Vec<u16> {
        if ceiling <= 0.0 {
            return vec![0; self.points.len()];
        }
        self.points
            .iter()
            .map(|p| {
                let ratio = (p.magnitude / ceiling).clamp(0.0, 1.0);
                (ratio * height as f64).round() as u16
            })
            .collect()
    }
}

/// A percentage ring with its caption
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingDatum {
    pub percentage: f64,
    pub label: String,
    pub sub_label: String,
}

impl RingDatum {
    pub fn new(percentage: f64, label: impl Into<String>, sub_label: impl Into<String>) -> Self {
        Self {
            percentage,
            label: label.into(),
            sub_label: sub_label.into(),
        }
    }
}

/// Progress toward a target, e.g. protein 110 g of 180 g
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub label: String,
    pub current: f64,
    pub target: f64,
    pub unit: String,
}

impl GoalProgress {
    pub fn new(label: impl Into<String>, current: f64, target: f64, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            current,
            target,
            unit: unit.into(),
        }
    }

    /// Share of the target reached, clamped to `[0, 100]`
    pub fn percentage(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        clamp_percentage(self.current / self.target * 100.0)
    }

    /// Ratio in `[0, 1]` for gauge widgets
    pub fn ratio(&self) -> f64 {
        self.percentage() / 100.0
    }
}

/// Generic two-line list row (activities, meals, tracks, exercises...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub title: String,
    pub subtitle: String,
    /// Right-aligned detail, e.g. "420 Kcal"
    pub detail: String,
    /// Small tag, e.g. "Breakfast" or "Intermediate"
    pub badge: Option<String>,
    /// Completion marker for checklist rows
    pub done: Option<bool>,
}

impl ListRow {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            detail: detail.into(),
            badge: None,
            done: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Mood
// ─────────────────────────────────────────────────────────────────────────────

/// Self-reported mood on the mental health page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mood {
    #[default]
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    /// Selector order, left to right
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Neutral, Mood::Sad];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Mood::Happy => 0,
            Mood::Neutral => 1,
            Mood::Sad => 2,
        }
    }

    /// Neighbour in selector order, wrapping at both ends
    pub fn cycle(self, delta: i32) -> Mood {
        let len = Self::ALL.len() as i32;
        let next = (self.index() as i32 + delta.rem_euclid(len)) % len;
        Self::ALL[next as usize]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sleep stages
// ─────────────────────────────────────────────────────────────────────────────

/// Sleep stage, ordered from lightest to deepest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SleepStage {
    Awake,
    Rem,
    Light,
    Deep,
}

impl SleepStage {
    pub const ALL: [SleepStage; 4] = [
        SleepStage::Awake,
        SleepStage::Rem,
        SleepStage::Light,
        SleepStage::Deep,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SleepStage::Awake => "Awake",
            SleepStage::Rem => "REM",
            SleepStage::Light => "Light",
            SleepStage::Deep => "Deep",
        }
    }

    /// Vertical level for a hypnogram, 3 = awake (top), 0 = deep (bottom)
    pub fn level(self) -> u8 {
        match self {
            SleepStage::Awake => 3,
            SleepStage::Rem => 2,
            SleepStage::Light => 1,
            SleepStage::Deep => 0,
        }
    }
}

/// A stretch of the night spent in one stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageSegment {
    /// Start, in minutes since the recording began
    pub start_min: f64,
    pub stage: SleepStage,
}

/// Share of the night spent in a stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageShare {
    pub stage: SleepStage,
    pub label: String,
    pub time: String,
    pub percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(PatientStatus::Good.label(), "Good");
        assert_eq!(PatientStatus::Medium.to_string(), "Medium");
        assert_eq!(PatientStatus::Poor.label(), "Poor");
    }

    #[test]
    fn test_display_id_is_uppercased() {
        let p = PatientSummary {
            id: "p3".into(),
            name: "Suman Gupta".into(),
            avatar_url: String::new(),
            condition: "Diabetes".into(),
            status: PatientStatus::Poor,
            last_visit: "6 hours ago".into(),
            heart_rate: 92,
            steps: 3200,
        };
        assert_eq!(p.display_id(), "#P3");
    }

    #[test]
    fn test_metric_display_value() {
        assert_eq!(MetricDatum::new("Distance", "8.5", "km").display_value(), "8.5 km");
        assert_eq!(MetricDatum::new("Active", "1h 20m", "").display_value(), "1h 20m");
    }

    #[test]
    fn test_weekly_series_labels() {
        let s = ChartSeries::weekly([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(s.len(), 7);
        assert_eq!(s.points[0].label, "Mon");
        assert_eq!(s.points[6].label, "Sun");
        assert_eq!(s.max_magnitude(), 7.0);
    }

    #[test]
    fn test_scaled_heights() {
        let s = ChartSeries::weekly([45.0, 70.0, 30.0, 85.0, 55.0, 65.0, 40.0]);
        assert_eq!(s.scaled(100.0, 10), vec![5, 7, 3, 9, 6, 7, 4]);
    }

    #[test]
    fn test_scaled_clamps_and_handles_zero_ceiling() {
        let s = ChartSeries::labelled(["a", "b"], [-5.0, 500.0]);
        assert_eq!(s.scaled(100.0, 8), vec![0, 8]);
        assert_eq!(s.scaled(0.0, 8), vec![0, 0]);
    }

    #[test]
    fn test_goal_progress_percentage() {
        let g = GoalProgress::new("Protein", 110.0, 180.0, "g");
        assert!((g.percentage() - 61.111).abs() < 0.01);
        assert_eq!(GoalProgress::new("x", 5.0, 0.0, "").percentage(), 0.0);
        assert_eq!(GoalProgress::new("x", 500.0, 100.0, "").ratio(), 1.0);
    }

    #[test]
    fn test_mood_cycle_wraps() {
        assert_eq!(Mood::default(), Mood::Happy);
        assert_eq!(Mood::Happy.cycle(1), Mood::Neutral);
        assert_eq!(Mood::Sad.cycle(1), Mood::Happy);
        assert_eq!(Mood::Happy.cycle(-1), Mood::Sad);
    }

    #[test]
    fn test_mood_cycle_extreme_deltas() {
        assert_eq!(Mood::Sad.cycle(i32::MAX), Mood::Sad.cycle(i32::MAX % 3));
        assert_eq!(
            Mood::Neutral.cycle(i32::MIN),
            Mood::Neutral.cycle(i32::MIN.rem_euclid(3))
        );
        assert_eq!(Mood::Happy.cycle(300), Mood::Happy);
    }

    #[test]
    fn test_sleep_stage_levels_are_ordered() {
        let levels: Vec<u8> = SleepStage::ALL.iter().map(|s| s.level()).collect();
        assert_eq!(levels, vec![3, 2, 1, 0]);
    }
}
