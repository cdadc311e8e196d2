//! ShadeAnalyzer builder, the entry point that runs sampling and matching
//! as one step.

use serde::Serialize;

use super::error::AnalyzeError;
use crate::color::Color;
use crate::matcher::{DistanceMetric, MatchError, MatchOptions, SampleResult, ShadeMatcher};
use crate::sampler::{PixelSampler, ResampleFilter, SampleRequest, SampleSource, SamplerOptions};
use crate::shades::{ShadeEntry, ShadePalette};

/// A [`SampleResult`] together with how the color was obtained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    #[serde(flatten)]
    pub result: SampleResult,
    pub source: SampleSource,
    /// An override that was supplied but ignored as malformed
    pub rejected_override: Option<String>,
}

/// Owns a palette and runs the full photo-to-shade pipeline.
///
/// - Constructor takes the [`ShadePalette`]; everything else has defaults
/// - Configuration methods consume and return `self`
/// - [`analyze()`](Self::analyze) takes `&self`, so one analyzer can be
///   shared (e.g. behind an `Arc`) across threads
///
/// # Example
///
/// ```
/// use shade_match::{DistanceMetric, SampleRequest, ShadeAnalyzer, ShadePalette};
///
/// let analyzer = ShadeAnalyzer::new(ShadePalette::builtin())
///     .grid_size(64)
///     .metric(DistanceMetric::Euclidean)
///     .bias_margin(5.0);
///
/// let request = SampleRequest::new().with_override("#EDA57C");
/// let analysis = analyzer.analyze(&[], &request).unwrap();
/// assert_eq!(analysis.result.matched_shade.name, "Light Copper Blonde");
/// ```
#[derive(Debug, Clone)]
pub struct ShadeAnalyzer {
    palette: ShadePalette,
    sampler: SamplerOptions,
    matcher: MatchOptions,
}

impl ShadeAnalyzer {
    pub fn new(palette: ShadePalette) -> Self {
        Self {
            palette,
            sampler: SamplerOptions::default(),
            matcher: MatchOptions::default(),
        }
    }

    #[inline]
    pub fn grid_size(mut self, size: u32) -> Self {
        self.sampler = self.sampler.grid_size(size);
        self
    }

    #[inline]
    pub fn filter(mut self, filter: ResampleFilter) -> Self {
        self.sampler = self.sampler.filter(filter);
        self
    }

    #[inline]
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.matcher = self.matcher.metric(metric);
        self
    }

    #[inline]
    pub fn bias_margin(mut self, margin: f64) -> Self {
        self.matcher = self.matcher.bias_margin(margin);
        self
    }

    /// Replace all sampler settings at once.
    #[inline]
    pub fn sampler_options(mut self, options: SamplerOptions) -> Self {
        self.sampler = options;
        self
    }

    /// Replace all matcher settings at once.
    #[inline]
    pub fn match_options(mut self, options: MatchOptions) -> Self {
        self.matcher = options;
        self
    }

    pub fn palette(&self) -> &ShadePalette {
        &self.palette
    }

    pub fn sampler(&self) -> PixelSampler {
        PixelSampler::new(self.sampler)
    }

    pub fn matcher(&self) -> ShadeMatcher {
        ShadeMatcher::new(self.matcher)
    }

    /// Sample `bytes` and match the result against the palette.
    ///
    /// An empty palette is reported before the image is touched.
    pub fn analyze(&self, bytes: &[u8], request: &SampleRequest) -> Result<Analysis, AnalyzeError> {
        if self.palette.is_empty() {
            return Err(MatchError::NoPalette.into());
        }

        let sample = self.sampler().sample(bytes, request)?;
        let result = self.matcher().match_color(sample.color, &self.palette)?;

        Ok(Analysis {
            result,
            source: sample.source,
            rejected_override: sample.rejected_override,
        })
    }

    /// Match an already known color, skipping the sampler.
    pub fn match_color(&self, color: Color) -> Result<SampleResult, MatchError> {
        self.matcher().match_color(color, &self.palette)
    }

    /// All palette entries ordered by distance to `color`.
    pub fn rank(&self, color: Color) -> Vec<(&ShadeEntry, f64)> {
        self.matcher().rank(color, &self.palette)
    }
}
