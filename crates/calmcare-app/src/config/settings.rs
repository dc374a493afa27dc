//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use calmcare_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "calmcare";

/// `<config_dir>/calmcare/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the default location
///
/// Never fails: a missing file means defaults, and an unreadable or
/// malformed one is logged and replaced by defaults.
pub fn load_settings() -> Settings {
    match default_config_path() {
        Some(path) => load_settings_lenient(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicitly requested file
///
/// Unlike [`load_settings`], a missing or malformed file is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }

    let settings = read_settings(path).map_err(|e| match e {
        Error::Toml(e) => Error::config_invalid(path, e.to_string()),
        other => other,
    })?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn load_settings_lenient(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    read_settings(config_path)
        .with_context(|| format!("Ignoring {:?}, using defaults", config_path))
        .unwrap_or_default()
}

/// Write a commented default config file
///
/// Returns `false` (and leaves the file alone) if one already exists.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        debug!("Config file already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let default_content = r#"# CalmCare Configuration

[behavior]
start_route = "/"       # Page opened on launch, e.g. "/patient/sleep"
tick_rate_ms = 250      # Redraw interval when idle

[ui]
icons = "unicode"       # "unicode" or "nerd_fonts"
show_help_hint = true   # Show the "? help" hint in the header

[profile]
patient_name = "George"
provider_name = "Dr. Smith"
"#;

    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use tempfile::tempdir;

    #[test]
    fn test_lenient_missing_file_is_default() {
        let temp = tempdir().unwrap();
        let settings = load_settings_lenient(&temp.path().join(CONFIG_FILENAME));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_lenient_invalid_file_is_default() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[behavior\nstart_route = ").unwrap();
        assert_eq!(load_settings_lenient(&path), Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[behavior]
start_route = "/provider"
tick_rate_ms = 100

[ui]
icons = "nerd_fonts"
show_help_hint = false
"#,
        )
        .unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.behavior.start_route, "/provider");
        assert_eq!(settings.behavior.tick_rate_ms, 100);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(!settings.ui.show_help_hint);
        assert_eq!(settings.profile.patient_name, "George");

        assert_eq!(load_settings_lenient(&path), settings);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp = tempdir().unwrap();
        let err = load_settings_from(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_read_settings_reports_toml_errors() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[behavior\n").unwrap();
        assert!(matches!(read_settings(&path), Err(Error::Toml(_))));

        let missing = temp.path().join("missing.toml");
        assert!(matches!(read_settings(&missing), Err(Error::Io(_))));
    }

    #[test]
    fn test_explicit_invalid_file_is_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\nicons = 3\n").unwrap();
        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.to_string().contains(CONFIG_FILENAME));
    }

    #[test]
    fn test_init_config_file_writes_parseable_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILENAME);

        assert!(init_config_file(&path).unwrap());
        assert!(path.exists());
        assert_eq!(load_settings_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[profile]\npatient_name = \"Kai\"\n").unwrap();

        assert!(!init_config_file(&path).unwrap());
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.profile.patient_name, "Kai");
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("calmcare/config.toml"));
        }
    }
}
