//! Sampler configuration.

use std::fmt;
use std::str::FromStr;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

/// Default side length of the square grid an image is resampled to before
/// averaging.
pub const DEFAULT_GRID_SIZE: u32 = 100;

/// Resampling filter used when shrinking an image to the sampling grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            ResampleFilter::Nearest => "nearest",
            ResampleFilter::Triangle => "triangle",
            ResampleFilter::CatmullRom => "catmull_rom",
            ResampleFilter::Gaussian => "gaussian",
            ResampleFilter::Lanczos3 => "lanczos3",
        }
    }
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResampleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "nearest" => Ok(ResampleFilter::Nearest),
            "triangle" => Ok(ResampleFilter::Triangle),
            "catmull_rom" | "catmullrom" => Ok(ResampleFilter::CatmullRom),
            "gaussian" => Ok(ResampleFilter::Gaussian),
            "lanczos3" => Ok(ResampleFilter::Lanczos3),
            other => Err(format!("unknown resample filter: {other}")),
        }
    }
}

/// Configuration for [`PixelSampler`](crate::PixelSampler).
///
/// # Defaults
///
/// - Grid size: 100 (the image is reduced to 100x100 before averaging)
/// - Filter: Lanczos3
///
/// The grid bounds the cost of the averaging pass and smooths out sensor
/// noise and compression artifacts.
///
/// # Example
///
/// ```
/// use shade_match::{ResampleFilter, SamplerOptions};
///
/// let options = SamplerOptions::new().grid_size(50).filter(ResampleFilter::Triangle);
/// assert_eq!(options.grid_size, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerOptions {
    /// Side length of the sampling grid in pixels.
    ///
    /// Default: `100`
    pub grid_size: u32,

    /// Resampling filter.
    ///
    /// Default: [`ResampleFilter::Lanczos3`]
    pub filter: ResampleFilter,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            filter: ResampleFilter::default(),
        }
    }
}

impl SamplerOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid size. Zero is raised to 1.
    #[inline]
    pub fn grid_size(mut self, size: u32) -> Self {
        self.grid_size = size.max(1);
        self
    }

    #[inline]
    pub fn filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }
}
