//! Public API: the [`ShadeAnalyzer`] builder and the unified
//! [`AnalyzeError`].

mod builder;
mod error;

pub use builder::{Analysis, ShadeAnalyzer};
pub use error::AnalyzeError;
