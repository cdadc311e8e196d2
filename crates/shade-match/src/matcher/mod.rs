//! Shade matching
//!
//! [`ShadeMatcher`] compares a sampled [`Color`](crate::Color) against every
//! entry of a [`ShadePalette`](crate::ShadePalette) under a fixed
//! [`DistanceMetric`] and returns the winner as a [`SampleResult`].

mod distance;
mod error;
mod options;
mod shade_matcher;

pub use distance::{euclidean_rgb, DistanceMetric};
pub use error::MatchError;
pub use options::{MatchOptions, DEFAULT_BIAS_MARGIN};
pub use shade_matcher::{SampleResult, ShadeMatcher};
