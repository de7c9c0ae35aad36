//! Shared UI crate for the showcase site. The hero and everything it needs live here;
//! the platform crates only launch it.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

mod hero;
pub use hero::Hero;
pub mod components {
    pub use super::hero::{AnimatedBackground, GlyphIcon, InfoPanel, ScatteredIcon};
}

/// Global theme stylesheet, for shells that link it rather than inline it.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests;
