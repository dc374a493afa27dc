//! Centralized theme for the wellness dashboard.
//!
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `icons`: Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
