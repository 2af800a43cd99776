//! CLI configuration loading and validation.
//!
//! A config file only supplies defaults; command-line flags win.
//!
//! ```toml
//! [output]
//! precision = 4
//! format = "json"
//!
//! [eval]
//! checked = true
//! ```

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use lib_complex::DISPLAY_PRECISION;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest number of decimals worth printing for an `f64`.
pub const MAX_PRECISION: usize = 17;

/// Top-level CLI configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Evaluation configuration.
    #[serde(default)]
    pub eval: EvalConfig,
}

/// Output configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal digits for text output.
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_precision() -> usize { DISPLAY_PRECISION }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            format: OutputFormat::default(),
        }
    }
}

/// Evaluation configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Reject zero-magnitude divisors instead of producing NaN/infinity.
    #[serde(default)]
    pub checked: bool,
}

impl CliConfig {
    /// Apply command-line overrides on top of file or default values.
    pub fn with_overrides(
        mut self,
        precision: Option<usize>,
        format: Option<OutputFormat>,
        checked: bool,
    ) -> Result<Self> {
        if let Some(precision) = precision {
            self.output.precision = precision;
        }
        if let Some(format) = format {
            self.output.format = format;
        }
        self.eval.checked |= checked;

        validate_config(&self)?;
        Ok(self)
    }
}

/// Load configuration from a file.
pub fn load_config(path: &Path) -> Result<CliConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: CliConfig = if path.extension().map_or(false, |e| e == "json") {
        serde_json::from_str(&content)
            .with_context(|| "Failed to parse config as JSON")?
    } else {
        // Assume TOML
        toml::from_str(&content)
            .with_context(|| "Failed to parse config as TOML")?
    };

    validate_config(&config)?;
    tracing::debug!("Loaded config from {:?}: {:?}", path, config);

    Ok(config)
}

/// Validate configuration.
fn validate_config(config: &CliConfig) -> Result<()> {
    if config.output.precision > MAX_PRECISION {
        anyhow::bail!(
            "Invalid precision: {}. Must be at most {}",
            config.output.precision,
            MAX_PRECISION
        );
    }
    Ok(())
}
