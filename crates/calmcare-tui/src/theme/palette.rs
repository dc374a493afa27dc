//! Color palette: calm blues on a dark terminal, with one hue per metric
//! family.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Reset;
pub const CARD_BG: Color = Color::Reset;
pub const POPUP_BG: Color = Color::Rgb(24, 30, 42);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::LightBlue;

// --- Accent ---
pub const ACCENT: Color = Color::LightBlue;
/// Foreground drawn on top of ACCENT
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Patient status ---
pub const STATUS_GOOD: Color = Color::Green;
pub const STATUS_MEDIUM: Color = Color::Yellow;
pub const STATUS_POOR: Color = Color::Red;

// --- Metric families ---
pub const HEART: Color = Color::LightRed;
pub const SLEEP: Color = Color::LightMagenta;
pub const WATER: Color = Color::LightCyan;
pub const CALORIES: Color = Color::LightYellow;
pub const ACTIVITY: Color = Color::LightGreen;
pub const MIND: Color = Color::Magenta;

// --- Charts ---
pub const BAR: Color = Color::Blue;
pub const BAR_HIGHLIGHT: Color = Color::LightBlue;
pub const BAR_WARN: Color = Color::Rgb(251, 146, 60);
pub const RING_TRACK: Color = Color::DarkGray;

// --- Trends ---
pub const TREND_UP: Color = Color::Green;
