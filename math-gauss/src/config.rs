//! Solver configuration files
//!
//! [`GaussConfig`] can be read from JSON or TOML. Missing fields take their
//! default values.
//!
//! ## Example TOML Configuration
//!
//! ```toml
//! pivot_tolerance = 1e-12
//! strategy = "parallel"
//! parallel_min_rows = 32
//! log_interval = 100
//! ```

use crate::direct::GaussConfig;
use std::fs;
use std::path::Path;

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format
    Json,
    /// TOML format
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        match ext.to_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "toml" => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parse but cannot be used
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Load solver configuration from a file
///
/// Format is auto-detected from file extension (.json or .toml)
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GaussConfig, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;

    let content = fs::read_to_string(path)?;
    parse_config(&content, format)
}

/// Parse solver configuration from a string
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<GaussConfig, ConfigError> {
    let config: GaussConfig = match format {
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?
        }
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?
        }
    };
    validate_config(&config)?;
    Ok(config)
}

/// Check values that deserialize but cannot be used by the solver
pub fn validate_config(config: &GaussConfig) -> Result<(), ConfigError> {
    let tol = config.pivot_tolerance;
    if !tol.is_finite() || tol < 0.0 {
        return Err(ConfigError::InvalidValue {
            field: "pivot_tolerance",
            reason: format!("{tol} (must be finite and >= 0)"),
        });
    }
    Ok(())
}
