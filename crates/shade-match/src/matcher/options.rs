//! Matcher configuration.

use serde::{Deserialize, Serialize};

use super::distance::DistanceMetric;

/// Default margin by which a fashion shade must beat the best natural
/// shade before it is chosen.
pub const DEFAULT_BIAS_MARGIN: f64 = 5.0;

/// Configuration for [`ShadeMatcher`](crate::ShadeMatcher).
///
/// # Example
///
/// ```
/// use shade_match::{DistanceMetric, MatchOptions};
///
/// let options = MatchOptions::new()
///     .metric(DistanceMetric::Ciede2000)
///     .bias_margin(2.5);
/// assert_eq!(options.bias_margin, 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Distance function.
    ///
    /// Default: [`DistanceMetric::Euclidean`]
    pub metric: DistanceMetric,

    /// How much closer (in the metric's units) the best fashion shade must
    /// be than the best natural shade to win.
    ///
    /// A fashion match that is closer by this margin or less is discarded
    /// in favor of the natural one. Only applies when the palette holds
    /// both groups.
    ///
    /// Default: `5.0`
    pub bias_margin: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            metric: DistanceMetric::default(),
            bias_margin: DEFAULT_BIAS_MARGIN,
        }
    }
}

impl MatchOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the natural-group bias margin. Negative values are treated as 0.
    #[inline]
    pub fn bias_margin(mut self, margin: f64) -> Self {
        self.bias_margin = margin.max(0.0);
        self
    }
}
