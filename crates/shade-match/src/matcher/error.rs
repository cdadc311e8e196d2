use thiserror::Error;

/// Errors from [`ShadeMatcher`](crate::ShadeMatcher).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Matching was attempted against an empty shade table.
    #[error("no shades configured: the palette is empty")]
    NoPalette,
}
