//! Nearest-shade search with natural/fashion bias.

use serde::Serialize;

use super::distance::DistanceMetric;
use super::error::MatchError;
use super::options::MatchOptions;
use crate::color::Color;
use crate::shades::{ShadeEntry, ShadeGroup, ShadePalette};

/// Outcome of matching one sampled color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleResult {
    /// The color that was matched
    pub sampled_color: Color,
    /// Closest palette entry after group bias
    pub matched_shade: ShadeEntry,
    /// Distance from `sampled_color` to `matched_shade.color`
    pub distance: f64,
    /// Metric `distance` is expressed in
    pub metric: DistanceMetric,
}

/// Finds the palette entry closest to a sampled color.
///
/// The matcher holds no palette of its own and no mutable state; one
/// instance can serve any number of concurrent callers.
///
/// # Selection rules
///
/// 1. An entry whose color equals the sample wins outright.
/// 2. If the palette holds both [`ShadeGroup`]s, the best entry of each
///    group is found separately. The fashion entry wins only if it is
///    closer than the natural entry by **more than**
///    [`MatchOptions::bias_margin`]; otherwise the natural entry wins.
/// 3. Otherwise the closest entry overall wins.
///
/// Ties always go to the entry that comes first in palette order.
///
/// # Example
///
/// ```
/// use shade_match::{Color, ShadeMatcher, ShadePalette};
///
/// let matcher = ShadeMatcher::default();
/// let result = matcher
///     .match_color(Color::new(0xC9, 0x69, 0x4A), &ShadePalette::builtin())
///     .unwrap();
/// assert_eq!(result.matched_shade.name, "Medium Copper");
/// assert_eq!(result.distance, 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShadeMatcher {
    options: MatchOptions,
}

impl ShadeMatcher {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Match `sampled` against `palette`.
    ///
    /// # Errors
    ///
    /// [`MatchError::NoPalette`] if the palette is empty.
    pub fn match_color(
        &self,
        sampled: Color,
        palette: &ShadePalette,
    ) -> Result<SampleResult, MatchError> {
        if palette.is_empty() {
            return Err(MatchError::NoPalette);
        }

        let (shade, distance) = self.select(sampled, palette).ok_or(MatchError::NoPalette)?;

        tracing::debug!(
            sampled = %sampled,
            shade = %shade.id,
            group = %shade.group,
            distance,
            metric = %self.options.metric,
            "Matched shade"
        );

        Ok(SampleResult {
            sampled_color: sampled,
            matched_shade: shade.clone(),
            distance,
            metric: self.options.metric,
        })
    }

    /// Every entry with its distance to `sampled`, closest first.
    ///
    /// Entries at equal distance keep their palette order. Group bias is
    /// not applied here; this is the raw ordering.
    pub fn rank<'p>(&self, sampled: Color, palette: &'p ShadePalette) -> Vec<(&'p ShadeEntry, f64)> {
        let mut ranked: Vec<(&ShadeEntry, f64)> = palette
            .iter()
            .map(|entry| (entry, self.options.metric.distance(sampled, entry.color)))
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }

    fn select<'p>(&self, sampled: Color, palette: &'p ShadePalette) -> Option<(&'p ShadeEntry, f64)> {
        if let Some(exact) = palette.iter().find(|e| e.color == sampled) {
            return Some((exact, self.options.metric.distance(sampled, exact.color)));
        }

        if !palette.is_grouped() {
            return self.nearest(sampled, palette.iter());
        }

        let natural = self.nearest(sampled, palette.group(ShadeGroup::Natural));
        let fashion = self.nearest(sampled, palette.group(ShadeGroup::Fashion));

        match (natural, fashion) {
            (Some(n), Some(f)) => {
                if n.1 - f.1 > self.options.bias_margin {
                    Some(f)
                } else {
                    if f.1 < n.1 {
                        tracing::debug!(
                            natural = %n.0.id,
                            fashion = %f.0.id,
                            natural_distance = n.1,
                            fashion_distance = f.1,
                            margin = self.options.bias_margin,
                            "Closer fashion shade within bias margin, keeping natural"
                        );
                    }
                    Some(n)
                }
            }
            (n, f) => n.or(f),
        }
    }

    /// Forward scan keeping the first entry at the minimum distance.
    fn nearest<'p>(
        &self,
        sampled: Color,
        entries: impl Iterator<Item = &'p ShadeEntry>,
    ) -> Option<(&'p ShadeEntry, f64)> {
        let mut best: Option<(&ShadeEntry, f64)> = None;
        for entry in entries {
            let dist = self.options.metric.distance(sampled, entry.color);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((entry, dist)),
            }
        }
        best
    }
}
