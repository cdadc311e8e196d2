//! Shade palette types
//!
//! A [`ShadePalette`] is an ordered list of [`ShadeEntry`] values, each
//! tagged with a [`ShadeGroup`].

mod shade;
mod shade_palette;

pub use shade::{ShadeEntry, ShadeGroup};
pub use shade_palette::ShadePalette;
