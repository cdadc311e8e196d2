use crate::assets::AssetLoader;
use crate::error::ConfigError;
use serde::Deserialize;
use shade_match::{MatchOptions, SamplerOptions, ShadeAnalyzer, ShadePalette};
use std::collections::HashSet;

/// Default upload limit (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// How photos are reduced to a single color
    #[serde(default)]
    pub sampling: SamplerOptions,

    /// Distance metric and natural/fashion bias
    #[serde(default)]
    pub matching: MatchOptions,

    /// Request limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// The shade table, in tie-break order
    #[serde(default = "ShadePalette::builtin")]
    pub shades: ShadePalette,
}

/// Request size limits
#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    /// Largest accepted image upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Load and validate configuration, failing on any error
    pub fn load(loader: &AssetLoader) -> Result<Self, ConfigError> {
        let config = Self::from_yaml(&loader.read_config_string()?)?;
        tracing::info!(
            shades = config.shades.len(),
            grid_size = config.sampling.grid_size,
            metric = %config.matching.metric,
            bias_margin = config.matching.bias_margin,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from AssetLoader, falling back to defaults on error
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(%e, "Failed to load config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the analyzer would otherwise silently clamp
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling.grid_size == 0 {
            return Err(ConfigError::Invalid(
                "sampling.grid_size must be at least 1".to_string(),
            ));
        }
        if !self.matching.bias_margin.is_finite() || self.matching.bias_margin < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "matching.bias_margin must be a non-negative number, got {}",
                self.matching.bias_margin
            )));
        }
        if self.limits.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_upload_bytes must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for shade in &self.shades {
            if shade.id.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "shade {:?} has an empty id",
                    shade.name
                )));
            }
            if !seen.insert(shade.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate shade id {:?}",
                    shade.id
                )));
            }
        }

        if self.shades.is_empty() {
            tracing::warn!("No shades configured; every analysis will fail");
        }

        Ok(())
    }

    /// Build the analyzer described by this config
    pub fn analyzer(&self) -> ShadeAnalyzer {
        ShadeAnalyzer::new(self.shades.clone())
            .sampler_options(self.sampling)
            .match_options(self.matching)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sampling: SamplerOptions::default(),
            matching: MatchOptions::default(),
            limits: LimitsConfig::default(),
            shades: ShadePalette::builtin(),
        }
    }
}
