//! Configuration validation

use super::*;
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_distribution(&config.distribution)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate distribution limits
pub fn validate_distribution(distribution: &DistributionConfig) -> Result<()> {
    if distribution.capacity_minutes == 0 {
        anyhow::bail!("capacity_minutes must be greater than 0");
    }

    if distribution.target_load_minutes > distribution.capacity_minutes {
        anyhow::bail!(
            "target_load_minutes ({}) must not exceed capacity_minutes ({})",
            distribution.target_load_minutes,
            distribution.capacity_minutes
        );
    }

    // A zero target never triggers the under-utilization warning
    if distribution.target_load_minutes == 0 {
        eprintln!("Warning: target_load_minutes is 0, under-utilization check disabled");
    }

    // Longer than a calendar day is almost certainly a units mistake
    if distribution.capacity_minutes > 24 * 60 {
        eprintln!(
            "Warning: capacity_minutes ({}) exceeds 24 hours, check that it is given in minutes",
            distribution.capacity_minutes
        );
    }

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if let Some(ref path) = output.json_output {
        if path.as_os_str().is_empty() {
            anyhow::bail!("json_output must not be an empty path");
        }
        if path.is_dir() {
            anyhow::bail!("json_output must be a file, got directory {}", path.display());
        }
    }

    Ok(())
}
