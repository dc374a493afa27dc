//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Lower bound for the event-loop tick
pub const MIN_TICK_RATE_MS: u64 = 16;

/// Top-level settings from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub profile: ProfileSettings,
}

/// Startup and event-loop behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Path opened on launch (overridden by `--route`)
    #[serde(default = "default_start_route")]
    pub start_route: String,

    /// Milliseconds between ticks when no input arrives
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            start_route: default_start_route(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl BehaviorSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }
}

fn default_start_route() -> String {
    "/".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

/// Icon rendering mode for the TUI.
///
/// Unicode symbols work in every terminal; Nerd Font glyphs need a
/// patched font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Show the `? help` hint in the header
    #[serde(default = "default_true")]
    pub show_help_hint: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_help_hint: true,
        }
    }
}

/// Names used in greetings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileSettings {
    #[serde(default = "default_patient_name")]
    pub patient_name: String,

    #[serde(default = "default_provider_name")]
    pub provider_name: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            patient_name: default_patient_name(),
            provider_name: default_provider_name(),
        }
    }
}

fn default_patient_name() -> String {
    "George".to_string()
}

fn default_provider_name() -> String {
    "Dr. Smith".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.behavior.start_route, "/");
        assert_eq!(settings.behavior.tick_rate_ms, 250);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(settings.ui.show_help_hint);
        assert_eq!(settings.profile.patient_name, "George");
        assert_eq!(settings.profile.provider_name, "Dr. Smith");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
icons = "nerd_fonts"

[profile]
patient_name = "Asha"
"#,
        )
        .unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(settings.ui.show_help_hint);
        assert_eq!(settings.profile.patient_name, "Asha");
        assert_eq!(settings.profile.provider_name, "Dr. Smith");
        assert_eq!(settings.behavior.start_route, "/");
    }

    #[test]
    fn test_unknown_icon_mode_is_rejected() {
        let parsed: Result<Settings, _> = toml::from_str("[ui]\nicons = \"emoji\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let behavior = BehaviorSettings {
            tick_rate_ms: 1,
            ..Default::default()
        };
        assert_eq!(behavior.tick_rate(), Duration::from_millis(MIN_TICK_RATE_MS));
        assert_eq!(
            BehaviorSettings::default().tick_rate(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_icon_mode_display() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }
}
