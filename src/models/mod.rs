pub mod config;

pub use config::{AppConfig, LimitsConfig, DEFAULT_MAX_UPLOAD_BYTES};
