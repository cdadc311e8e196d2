pub mod analyze;
pub mod shades;

pub use analyze::{handle_analyze, AnalyzeForm, AnalyzeResponse, __path_handle_analyze};
pub use shades::{handle_shades, ShadeResponse, ShadesResponse, __path_handle_shades};
