//! Render configuration loaded from TOML.
//!
//! ```toml
//! method = "linear"          # or "sampling"
//! flatten_corrupted = true
//! show_padding = false
//! ```
//!
//! Every key is optional. A missing file path falls back to the
//! `NINEPATCH_CONFIG` environment variable, and then to the defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use ninepatch_stretch::{RenderOptions, ScaleMethod};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "NINEPATCH_CONFIG";

/// Errors from loading a render configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid render config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Resampling method as spelled in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Sampling,
    #[default]
    Linear,
}

impl From<Method> for ScaleMethod {
    fn from(m: Method) -> Self {
        match m {
            Method::Sampling => ScaleMethod::Sampling,
            Method::Linear => ScaleMethod::Linear,
        }
    }
}

/// Render settings (`ninepatch.toml`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// How stretch patches are resampled.
    pub method: Method,
    /// Draw resized corrupted stretch patches from their reference pixels.
    pub flatten_corrupted: bool,
    /// Blend the padding overlay into the rendered content box.
    pub show_padding: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            method: Method::default(),
            flatten_corrupted: true,
            show_padding: false,
        }
    }
}

impl RenderConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded render config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load from `explicit`, else from `$NINEPATCH_CONFIG`, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            method: self.method.into(),
            flatten_corrupted: self.flatten_corrupted,
            show_padding: self.show_padding,
        }
    }
}
