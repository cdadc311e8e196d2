//! Config loading with an embedded fallback
//!
//! - If `CONFIG_FILE` is NOT set: use the embedded `config.yaml` only (no
//!   filesystem access)
//! - If `CONFIG_FILE` IS set and the file is missing: seed it with the
//!   embedded default, then read it from disk
//! - If `CONFIG_FILE` IS set and the file exists: read it from disk

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

const CONFIG_NAME: &str = "config.yaml";

/// Where the active config comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
    /// `CONFIG_FILE` is set but the file does not exist (yet)
    MissingFile(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Embedded => f.write_str("embedded"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::MissingFile(path) => {
                write!(f, "embedded ({} not found)", path.display())
            }
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Config loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if `CONFIG_FILE` was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from the `CONFIG_FILE` environment variable.
    pub fn from_env() -> Self {
        Self::new(std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    pub fn config_source(&self) -> ConfigSource {
        match self.config_file {
            Some(ref path) if path.exists() => ConfigSource::File(path.clone()),
            Some(ref path) => ConfigSource::MissingFile(path.clone()),
            None => ConfigSource::Embedded,
        }
    }

    /// The config bytes compiled into the binary.
    pub fn embedded_config() -> io::Result<Cow<'static, [u8]>> {
        EmbeddedConfig::get(CONFIG_NAME)
            .map(|f| f.data)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found"))
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to the embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        tracing::trace!("Loading config from embedded assets");
        Self::embedded_config()
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded config to `CONFIG_FILE` if it is set but missing.
    ///
    /// Returns true if a file was written.
    pub fn seed_if_configured(&self) -> io::Result<bool> {
        let Some(ref path) = self.config_file else {
            return Ok(false);
        };
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, &*Self::embedded_config()?)?;
        tracing::info!(path = %path.display(), "Seeded config file with embedded default");
        Ok(true)
    }

    /// Extract the embedded config to the filesystem (init command)
    ///
    /// Uses `CONFIG_FILE` if set, `./config.yaml` otherwise.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();
        let path = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("./config.yaml"));

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &*Self::embedded_config()?)?;
        report.written.push(path.display().to_string());
        Ok(report)
    }
}
