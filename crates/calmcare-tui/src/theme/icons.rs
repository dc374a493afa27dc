//! Icon set for the TUI.
//!
//! `IconSet` resolves icons at runtime from the configured `IconMode`:
//! - `IconMode::Unicode`: plain symbols that render in every terminal
//! - `IconMode::NerdFonts`: Nerd Font glyphs (needs a patched font)

use calmcare_app::config::IconMode;
use calmcare_core::{Mood, NavIcon};

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a sidebar entry
    pub fn nav(&self, icon: NavIcon) -> &'static str {
        match (self.mode, icon) {
            (IconMode::NerdFonts, NavIcon::Dashboard) => "\u{f009}", // nf-fa-th_large
            (IconMode::NerdFonts, NavIcon::Activity) => "\u{f0f1}",  // nf-fa-heartbeat
            (IconMode::NerdFonts, NavIcon::Sleep) => "\u{f186}",     // nf-fa-moon_o
            (IconMode::NerdFonts, NavIcon::Nutrition) => "\u{f0f5}", // nf-fa-cutlery
            (IconMode::NerdFonts, NavIcon::Fitness) => "\u{f44b}",   // nf-md-dumbbell
            (IconMode::NerdFonts, NavIcon::Mind) => "\u{f5dc}",      // nf-fa-brain
            (IconMode::NerdFonts, NavIcon::Users) => "\u{f0c0}",     // nf-fa-users
            (IconMode::NerdFonts, NavIcon::Compliance) => "\u{f132}", // nf-fa-shield
            (IconMode::NerdFonts, NavIcon::Analytics) => "\u{f080}", // nf-fa-bar_chart
            (IconMode::NerdFonts, NavIcon::Messages) => "\u{f086}",  // nf-fa-comments
            (IconMode::NerdFonts, NavIcon::Settings) => "\u{f013}",  // nf-fa-cog
            (IconMode::NerdFonts, NavIcon::LogOut) => "\u{f08b}",    // nf-fa-sign_out
            (IconMode::Unicode, NavIcon::Dashboard) => "\u{25a6}",   // ▦
            (IconMode::Unicode, NavIcon::Activity) => "\u{2661}",    // ♡
            (IconMode::Unicode, NavIcon::Sleep) => "\u{263e}",       // ☾
            (IconMode::Unicode, NavIcon::Nutrition) => "\u{2615}",   // ☕
            (IconMode::Unicode, NavIcon::Fitness) => "\u{2692}",     // ⚒
            (IconMode::Unicode, NavIcon::Mind) => "\u{273f}",        // ✿
            (IconMode::Unicode, NavIcon::Users) => "\u{263a}",       // ☺
            (IconMode::Unicode, NavIcon::Compliance) => "\u{2713}",  // ✓
            (IconMode::Unicode, NavIcon::Analytics) => "\u{2261}",   // ≡
            (IconMode::Unicode, NavIcon::Messages) => "\u{2709}",    // ✉
            (IconMode::Unicode, NavIcon::Settings) => "\u{2699}",    // ⚙
            (IconMode::Unicode, NavIcon::LogOut) => "\u{21aa}",      // ↪
        }
    }

    pub fn mood(&self, mood: Mood) -> &'static str {
        match (self.mode, mood) {
            (IconMode::NerdFonts, Mood::Happy) => "\u{f118}", // nf-fa-smile_o
            (IconMode::NerdFonts, Mood::Neutral) => "\u{f11a}", // nf-fa-meh_o
            (IconMode::NerdFonts, Mood::Sad) => "\u{f119}",   // nf-fa-frown_o
            (IconMode::Unicode, Mood::Happy) => ":)",
            (IconMode::Unicode, Mood::Neutral) => ":|",
            (IconMode::Unicode, Mood::Sad) => ":(",
        }
    }

    pub fn brand(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f06c}", // nf-fa-leaf
            IconMode::Unicode => "\u{2618}",   // ☘
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2714}",   // ✔
        }
    }

    pub fn unchecked(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f10c}", // nf-fa-circle_o
            IconMode::Unicode => "\u{25cb}",   // ○
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn chevron_left(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f053}", // nf-fa-chevron_left
            IconMode::Unicode => "\u{2039}",   // ‹
        }
    }

    pub fn play(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f04b}", // nf-fa-play
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn trend_up(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f062}", // nf-fa-arrow_up
            IconMode::Unicode => "\u{2197}",   // ↗
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_nav_icons_are_single_width() {
        let icons = IconSet::new(IconMode::Unicode);
        for icon in [
            NavIcon::Dashboard,
            NavIcon::Activity,
            NavIcon::Sleep,
            NavIcon::Users,
            NavIcon::Settings,
            NavIcon::LogOut,
        ] {
            assert_eq!(icons.nav(icon).chars().count(), 1);
        }
    }

    #[test]
    fn test_modes_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.nav(NavIcon::Sleep), nerd.nav(NavIcon::Sleep));
        assert_ne!(unicode.mood(Mood::Sad), nerd.mood(Mood::Sad));
        assert_eq!(unicode.mood(Mood::Happy), ":)");
    }
}
