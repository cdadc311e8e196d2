//! shade-match: match a photographed hair color against a palette of named
//! shades
//!
//! The crate has two stages:
//!
//! 1. [`PixelSampler`] turns image bytes into one [`Color`], either from a
//!    user override, a single picked pixel, or the mean of the image
//!    resampled to a small square grid.
//! 2. [`ShadeMatcher`] finds the closest [`ShadeEntry`] in a
//!    [`ShadePalette`], preferring natural shades over fashion shades unless
//!    a fashion shade is clearly closer.
//!
//! [`ShadeAnalyzer`] runs both stages behind one builder.
//!
//! # Quick Start
//!
//! ```
//! use shade_match::{Color, ShadeAnalyzer, ShadePalette};
//!
//! let analyzer = ShadeAnalyzer::new(ShadePalette::builtin());
//! let result = analyzer.match_color(Color::new(0xC9, 0x69, 0x4A)).unwrap();
//!
//! assert_eq!(result.matched_shade.name, "Medium Copper");
//! assert_eq!(result.distance, 0.0);
//! ```
//!
//! # Distance
//!
//! [`DistanceMetric::Euclidean`] (the default) is the straight-line distance
//! between two colors in 8-bit RGB. [`DistanceMetric::Ciede2000`] converts
//! both colors to CIE L*a*b* and uses the CIEDE2000 color difference, which
//! tracks perceived difference more closely at the cost of a conversion per
//! comparison. The bias margin is expressed in whichever unit the metric
//! uses.

pub mod api;
pub mod color;
pub mod matcher;
pub mod sampler;
pub mod shades;


pub use api::{Analysis, AnalyzeError, ShadeAnalyzer};
pub use color::{Color, ParseColorError};
pub use matcher::{
    DistanceMetric, MatchError, MatchOptions, SampleResult, ShadeMatcher, DEFAULT_BIAS_MARGIN,
};
pub use sampler::{
    PickPoint, PixelSampler, ResampleFilter, Sample, SampleError, SampleRequest, SampleSource,
    SamplerOptions, DEFAULT_GRID_SIZE, MAX_IMAGE_DIMENSION,
};
pub use shades::{ShadeEntry, ShadeGroup, ShadePalette};
