//! Configuration file parsing for CalmCare
//!
//! Settings live in `<config_dir>/calmcare/config.toml` unless a path is
//! given explicitly.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_from, CONFIG_FILENAME,
};
pub use types::*;
