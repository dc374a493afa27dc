//! Bundled demo data
//!
//! Every number and label here is display copy; nothing is computed from
//! it beyond chart scaling.

use crate::dashboard::{
    ActivityView, DashboardSource, FitnessView, LandingView, MentalView, NutritionView,
    PatientOverview, ProviderOverview, SleepView,
};
use crate::model::{
    ChartSeries, GoalProgress, ListRow, MetricDatum, PatientStatus, PatientSummary, RingDatum,
    SleepStage, StageSegment, StageShare,
};

/// Static demo dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDashboard;

impl MockDashboard {
    pub fn new() -> Self {
        Self
    }
}

#[allow(clippy::too_many_arguments)]
fn patient(
    id: &str,
    name: &str,
    photo: &str,
    condition: &str,
    status: PatientStatus,
    last_visit: &str,
    heart_rate: u32,
    steps: u32,
) -> PatientSummary {
    PatientSummary {
        id: id.to_string(),
        name: name.to_string(),
        avatar_url: format!(
            "https://images.unsplash.com/photo-{photo}?auto=format&fit=crop&w=100&q=80"
        ),
        condition: condition.to_string(),
        status,
        last_visit: last_visit.to_string(),
        heart_rate,
        steps,
    }
}

fn segment(start_min: f64, stage: SleepStage) -> StageSegment {
    StageSegment { start_min, stage }
}

fn share(stage: SleepStage, time: &str, percent: f64) -> StageShare {
    StageShare {
        stage,
        label: stage.label().to_string(),
        time: time.to_string(),
        percent,
    }
}

impl DashboardSource for MockDashboard {
    fn patient_overview(&self) -> PatientOverview {
        PatientOverview {
            vitals: vec![
                MetricDatum::new("Heart Rate", "80", "Bpm").with_caption("Normal 70 bpm"),
                MetricDatum::new("Sleep time", "8", "Hours").with_trend("+90%"),
                MetricDatum::new("Water", "2.1", "litres").with_trend("+90%"),
                MetricDatum::new("Calories", "1486", "Kcl").with_trend("+60%"),
            ],
            challenges: vec![
                RingDatum::new(60.0, "15,000 steps", "9000 steps left"),
                RingDatum::new(40.0, "Drink 10 glasses of water", "6 glasses left"),
            ],
            foods: vec![
                ListRow::new("Almonds", "1 Cup", "547 cal"),
                ListRow::new("Banana", "", "105 cal"),
                ListRow::new("Cashews", "100g", "553 cal"),
            ],
            active_food: Some(1),
            activity: ChartSeries::weekly([40.0, 30.0, 70.0, 50.0, 60.0, 45.0, 80.0])
                .with_highlight(2),
            activity_caption: "8.5 KM".to_string(),
            activity_period: "November, 2023".to_string(),
            totals: vec![
                MetricDatum::new("Steps", "10400", ""),
                MetricDatum::new("Distance", "8.5", "Km"),
                MetricDatum::new("Time", "47", "min"),
                MetricDatum::new("Speed", "3,5", "Km/h"),
            ],
        }
    }

    fn activity(&self) -> ActivityView {
        ActivityView {
            metrics: vec![
                MetricDatum::new("Daily Steps", "10,400", "steps").with_trend("+12%"),
                MetricDatum::new("Calories Burned", "860", "kcal").with_trend("+5%"),
                MetricDatum::new("Distance", "8.5", "km").with_trend("+20%"),
                MetricDatum::new("Active Time", "1h 20m", ""),
            ],
            intensity: ChartSeries::weekly([45.0, 70.0, 30.0, 85.0, 55.0, 65.0, 40.0]),
            intensity_caption: "Heart Points gathered".to_string(),
            last_route_distance: "5.2 km".to_string(),
            last_route_time: "42m 30s".to_string(),
            recent: vec![
                ListRow::new("Running", "Today, 7:00 AM", "420 Kcal").with_badge("45 min"),
                ListRow::new("Cycling", "Yesterday, 6:30 PM", "650 Kcal").with_badge("1h 10m"),
                ListRow::new("Yoga", "Nov 14, 8:00 AM", "120 Kcal").with_badge("30 min"),
            ],
        }
    }

    fn sleep(&self) -> SleepView {
        use SleepStage::*;

        SleepView {
            summary: "You slept well.".to_string(),
            stats: vec![
                MetricDatum::new("Time in Bed", "8", "hrs 12m").with_caption("On Schedule"),
                MetricDatum::new("Deep Sleep", "1", "hr 45m").with_caption("+15m vs avg"),
                MetricDatum::new("Avg. Heart Rate", "58", "bpm").with_caption("Resting phase"),
                MetricDatum::new("Awakenings", "2", "times"),
            ],
            window: "11:30 PM - 07:30 AM".to_string(),
            axis_labels: ["11 PM", "1 AM", "3 AM", "5 AM", "7 AM"]
                .into_iter()
                .map(String::from)
                .collect(),
            segments: vec![
                segment(0.0, Light),
                segment(10.0, Deep),
                segment(30.0, Light),
                segment(40.0, Rem),
                segment(50.0, Light),
                segment(70.0, Deep),
                segment(100.0, Light),
                segment(110.0, Rem),
                segment(130.0, Awake),
                segment(140.0, Light),
                segment(160.0, Deep),
                segment(190.0, Light),
                segment(200.0, Rem),
                segment(220.0, Light),
                segment(250.0, Rem),
                segment(280.0, Awake),
            ],
            span_min: 300.0,
            quality: RingDatum::new(88.0, "Excellent", "Sleep Quality"),
            quality_note: "You slept better than 85% of users.".to_string(),
            breakdown: vec![
                share(Deep, "1h 45m", 20.0),
                share(Light, "4h 12m", 55.0),
                share(Rem, "1h 55m", 22.0),
                share(Awake, "20m", 3.0),
            ],
            consistency: ChartSeries::weekly([7.5, 6.0, 8.0, 7.8, 8.2, 5.0, 8.0]),
            consistency_target: 7.0,
            consistency_ceiling: 9.0,
            avg_bedtime: "11:15 PM".to_string(),
            avg_wake: "7:20 AM".to_string(),
        }
    }

    fn nutrition(&self) -> NutritionView {
        NutritionView {
            kcal_left: "1,240".to_string(),
            daily_target: "2,500 kcal".to_string(),
            target_ring: RingDatum::new(50.0, "50%", "of daily goal"),
            macros: vec![
                GoalProgress::new("Protein", 110.0, 180.0, "g"),
                GoalProgress::new("Carbs", 140.0, 250.0, "g"),
                GoalProgress::new("Fat", 45.0, 80.0, "g"),
            ],
            meals: vec![
                ListRow::new("Oatmeal & Berries", "08:30 AM", "450 kcal").with_badge("Breakfast"),
                ListRow::new("Grilled Chicken Salad", "01:15 PM", "620 kcal").with_badge("Lunch"),
                ListRow::new("Almonds & Apple", "04:00 PM", "180 kcal").with_badge("Snack"),
            ],
            hydration: GoalProgress::new("Hydration", 1.2, 2.5, "L"),
            recommended: ListRow::new("Avocado Toast", "10 min prep", "350 Kcal"),
        }
    }

    fn fitness(&self) -> FitnessView {
        FitnessView {
            workouts: vec![
                ListRow::new("Upper Body Power", "45 min", "").with_badge("Intermediate"),
                ListRow::new("Yoga Flow", "20 min", "").with_badge("Beginner"),
                ListRow::new("HIIT Cardio", "30 min", "").with_badge("Advanced"),
            ],
            plan_title: "Leg Day".to_string(),
            plan: vec![
                ListRow::new("Warm Up: Treadmill", "1 sets", "5 mins").with_done(true),
                ListRow::new("Barbell Squats", "4 sets", "12 reps").with_done(true),
                ListRow::new("Leg Press", "3 sets", "10 reps").with_done(false),
                ListRow::new("Walking Lunges", "3 sets", "20 reps").with_done(false),
                ListRow::new("Calf Raises", "4 sets", "15 reps").with_done(false),
            ],
        }
    }

    fn mental(&self) -> MentalView {
        MentalView {
            prompt: "How are you feeling?".to_string(),
            mindfulness: MetricDatum::new("Mindfulness", "145", "min/week"),
            mindfulness_bars: ChartSeries::weekly([40.0, 20.0, 60.0, 30.0, 80.0, 45.0, 10.0]),
            daily_pick: ListRow::new(
                "Breathing for Anxiety",
                "A 5-minute session to help you ground yourself, clear your mind, \
                 and find calm in the chaos.",
                "5 min",
            )
            .with_badge("Daily Pick"),
            sleep_stories: vec![
                ListRow::new("The Blue Forest", "Dr. Ali", "25 min"),
                ListRow::new("Ocean Waves", "Sarah K.", "45 min"),
                ListRow::new("Night Rain", "Nature Sounds", "60 min"),
            ],
            focus_tracks: vec![
                ListRow::new("Morning Energy", "Mike T.", "10 min"),
                ListRow::new("Deep Focus", "Mindful Co.", "30 min"),
                ListRow::new("Pre-Work Reset", "Emma W.", "5 min"),
            ],
        }
    }

    fn provider_overview(&self) -> ProviderOverview {
        ProviderOverview {
            stats: vec![
                MetricDatum::new("Total Patients", "4", ""),
                MetricDatum::new("Compliance Rate", "78%", ""),
                MetricDatum::new("Critical Alerts", "3", ""),
                MetricDatum::new("New Requests", "5", ""),
            ],
        }
    }

    fn patients(&self) -> Vec<PatientSummary> {
        use PatientStatus::*;

        vec![
            patient(
                "p1",
                "Akash Kumar",
                "1599566150163-29194dcaad36",
                "Hypertension",
                Good,
                "1 hour ago",
                78,
                10400,
            ),
            patient(
                "p2",
                "Riya Verma",
                "1494790108377-be9c29b29330",
                "Anxiety",
                Medium,
                "3 hours ago",
                85,
                6000,
            ),
            patient(
                "p3",
                "Suman Gupta",
                "1531427186611-ecfd6d936c79",
                "Diabetes",
                Poor,
                "6 hours ago",
                92,
                3200,
            ),
            patient(
                "p4",
                "Karan Singh",
                "1506794778202-cad84cf45f1d",
                "Obesity",
                Medium,
                "1 day ago",
                80,
                5500,
            ),
        ]
    }

    fn landing(&self) -> LandingView {
        LandingView {
            nav_links: ["Home", "Doctors", "Services", "About Us"]
                .into_iter()
                .map(String::from)
                .collect(),
            tagline: "🌿 Healthy everyday!".to_string(),
            headline: "Your daily wellness journey starts here".to_string(),
            blurb: "Track your health, follow preventive care, and build better habits, \
                    all in one calm, beautiful platform."
                .to_string(),
            call_to_action: "Get Started".to_string(),
            features_heading: "Why Choose CalmCare?".to_string(),
            features: vec![
                ListRow::new(
                    "Smart Habit Tracking",
                    "Track sleep, water, steps, and more with ease.",
                    "",
                ),
                ListRow::new(
                    "Provider Monitoring",
                    "Doctors can easily check your activity and progress.",
                    "",
                ),
                ListRow::new(
                    "Personalized Insights",
                    "Weekly wellness insights tailored for you.",
                    "",
                ),
            ],
            services_heading: "Our Services".to_string(),
            services: vec![
                ListRow::new(
                    "Daily Health Tracking",
                    "Monitor your vital habits daily with ease.",
                    "",
                ),
                ListRow::new(
                    "Preventive Care",
                    "Never miss important checkups and health routines.",
                    "",
                ),
                ListRow::new(
                    "Health Reports",
                    "Download and view weekly/monthly reports.",
                    "",
                ),
            ],
            footer_title: "CalmCare Wellness".to_string(),
            footer_note: "Empowering health, one habit at a time.".to_string(),
        }
    }
}
