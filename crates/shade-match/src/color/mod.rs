//! Color value type and color-difference helpers
//!
//! - [`Color`]: 8-bit sRGB triple with canonical `#RRGGBB` text form
//! - [`to_lab`] / [`delta_e_2000`]: perceptual comparison in CIE L*a*b*

mod error;
mod lab;
mod rgb;

pub use error::ParseColorError;
pub use lab::{delta_e_2000, to_lab};
pub use rgb::Color;
