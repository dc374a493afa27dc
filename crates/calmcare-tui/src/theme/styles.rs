//! Semantic style builders.

use calmcare_core::{PatientStatus, SleepStage};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_MEDIUM)
}

/// Dark text on the accent color, for the active nav entry and selected rows
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn card_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

/// Card with a bold title in the top border
pub fn titled_card(title: &str) -> Block<'_> {
    card_block(false).title(format!(" {} ", title)).title_style(heading())
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Domain colors ---

/// Green / yellow / red, one per status
pub fn status_color(status: PatientStatus) -> Color {
    match status {
        PatientStatus::Good => palette::STATUS_GOOD,
        PatientStatus::Medium => palette::STATUS_MEDIUM,
        PatientStatus::Poor => palette::STATUS_POOR,
    }
}

pub fn status_style(status: PatientStatus) -> Style {
    Style::default()
        .fg(status_color(status))
        .add_modifier(Modifier::BOLD)
}

pub fn stage_color(stage: SleepStage) -> Color {
    match stage {
        SleepStage::Awake => palette::STATUS_MEDIUM,
        SleepStage::Rem => palette::WATER,
        SleepStage::Light => palette::ACCENT,
        SleepStage::Deep => palette::SLEEP,
    }
}

pub fn trend_style() -> Style {
    Style::default()
        .fg(palette::TREND_UP)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors_are_distinct() {
        assert_eq!(status_color(PatientStatus::Good), Color::Green);
        assert_eq!(status_color(PatientStatus::Medium), Color::Yellow);
        assert_eq!(status_color(PatientStatus::Poor), Color::Red);
    }

    #[test]
    fn test_focused_selected_is_bold_on_accent() {
        let style = focused_selected();
        assert_eq!(style.bg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
