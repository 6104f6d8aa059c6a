//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Per-employee capacity ceiling in minutes (7 hours)
pub const DEFAULT_CAPACITY_MINUTES: u32 = 420;

/// Load below which an employee counts as under-utilized (6 hours)
pub const DEFAULT_TARGET_LOAD_MINUTES: u32 = 360;

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub distribution: DistributionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Distribution limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionConfig {
    /// Ceiling on each employee's total lead time; never reached or exceeded
    #[serde(default = "default_capacity_minutes")]
    pub capacity_minutes: u32,
    /// Per-employee load used for the under-utilization warning
    #[serde(default = "default_target_load_minutes")]
    pub target_load_minutes: u32,
}

fn default_capacity_minutes() -> u32 {
    DEFAULT_CAPACITY_MINUTES
}

fn default_target_load_minutes() -> u32 {
    DEFAULT_TARGET_LOAD_MINUTES
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            capacity_minutes: default_capacity_minutes(),
            target_load_minutes: default_target_load_minutes(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format printed to stdout
    #[serde(default)]
    pub format: OutputFormat,
    /// Additional JSON report file
    pub json_output: Option<PathBuf>,
}

/// Stdout report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

// Display trait implementations

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Distribution: {}", self.distribution)?;
        writeln!(f, "  Output: {}", self.output)?;
        Ok(())
    }
}

impl fmt::Display for DistributionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capacity={}, target_load={}",
            format_minutes(u64::from(self.capacity_minutes)),
            format_minutes(u64::from(self.target_load_minutes))
        )
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format={}", self.format)?;
        if let Some(ref path) = self.json_output {
            write!(f, ", json={}", path.display())?;
        }
        Ok(())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Format minutes as `7h`, `6h 30m` or `45m`
pub fn format_minutes(minutes: u64) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
