//! Color distance metrics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{delta_e_2000, Color};

/// Distance function used to compare a sample against palette entries.
///
/// The choice changes which shade wins near palette boundaries, so it is
/// fixed per matcher and reported with every result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Straight Euclidean distance over the 8-bit RGB channels,
    /// `sqrt(dr² + dg² + db²)`. Ranges from 0 to about 441.7.
    #[default]
    Euclidean,

    /// CIEDE2000 ΔE in CIE L*a*b* (D65). Perceptually uniform; ranges from
    /// 0 to about 100 for in-gamut colors.
    Ciede2000,
}

impl DistanceMetric {
    /// Distance between two colors under this metric.
    pub fn distance(self, a: Color, b: Color) -> f64 {
        match self {
            DistanceMetric::Euclidean => euclidean_rgb(a, b),
            DistanceMetric::Ciede2000 => delta_e_2000(a, b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::Ciede2000 => "ciede2000",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" | "rgb" => Ok(DistanceMetric::Euclidean),
            "ciede2000" | "delta-e" | "deltae" => Ok(DistanceMetric::Ciede2000),
            other => Err(format!(
                "unknown distance metric '{other}' (expected 'euclidean' or 'ciede2000')"
            )),
        }
    }
}

/// Euclidean distance between two colors in 8-bit RGB space.
#[inline]
pub fn euclidean_rgb(a: Color, b: Color) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}
