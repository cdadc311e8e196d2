//! CIE L*a*b* conversion and CIEDE2000 color difference.
//!
//! Conversions go through the `palette` crate: 8-bit sRGB is decoded to
//! linear light, mapped to XYZ and then to L*a*b* under the D65 white
//! point.

use palette::color_difference::Ciede2000;
use palette::{FromColor, Lab, Srgb};

use super::Color;

/// Convert an 8-bit sRGB color to CIE L*a*b* (D65).
pub fn to_lab(color: Color) -> Lab {
    let srgb: Srgb<f32> = Srgb::new(color.r, color.g, color.b).into_format();
    Lab::from_color(srgb)
}

/// CIEDE2000 color difference (ΔE00) between two colors.
///
/// Returns 0.0 for identical colors. A ΔE00 of about 1.0 is the smallest
/// difference most observers notice side by side.
pub fn delta_e_2000(a: Color, b: Color) -> f64 {
    f64::from(Ciede2000::difference(to_lab(a), to_lab(b)))
}
