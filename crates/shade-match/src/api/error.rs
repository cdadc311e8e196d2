//! Unified error type for the shade-match public API.

use thiserror::Error;

use crate::matcher::MatchError;
use crate::sampler::SampleError;

/// Everything [`ShadeAnalyzer`](crate::ShadeAnalyzer) can fail with.
///
/// # Example
///
/// ```
/// use shade_match::{AnalyzeError, SampleRequest, ShadeAnalyzer, ShadePalette};
///
/// fn analyze(bytes: &[u8]) -> Result<String, AnalyzeError> {
///     let analyzer = ShadeAnalyzer::new(ShadePalette::builtin());
///     let analysis = analyzer.analyze(bytes, &SampleRequest::new())?;
///     Ok(analysis.result.matched_shade.name)
/// }
///
/// assert!(matches!(analyze(b"nope"), Err(AnalyzeError::Sample(_))));
/// ```
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Match(#[from] MatchError),
}
