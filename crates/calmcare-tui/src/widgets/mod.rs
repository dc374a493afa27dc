//! Custom widget components
//!
//! Shell widgets (sidebar, header, key bar, help) plus the shared
//! dashboard pieces every page is assembled from. Page assemblies live in
//! [`pages`].

mod footer;
mod goal_bar;
mod help;
mod hypnogram;
mod list_rows;
mod mood_selector;
mod page_header;
mod patient_table;
mod progress_ring;
mod sidebar;
mod stat_card;
mod week_bars;

pub mod pages;

pub use footer::KeyHints;
pub use goal_bar::GoalBar;
pub use help::HelpOverlay;
pub use hypnogram::Hypnogram;
pub use list_rows::ListRows;
pub use mood_selector::MoodPicker;
pub use page_header::PageHeader;
pub use patient_table::{PatientTable, TableColumns};
pub use progress_ring::ProgressRing;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use week_bars::WeekBars;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` display columns, ending in `…` when
/// something was dropped
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Display width of `text` in columns
pub fn display_width(text: &str) -> u16 {
    text.width().min(u16::MAX as usize) as u16
}
