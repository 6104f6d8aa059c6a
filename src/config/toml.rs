//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = read_config_file(path)?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    // Override distribution limits
    if let Some(capacity) = cli.capacity {
        config.distribution.capacity_minutes = capacity;
    }
    if let Some(target) = cli.target_load {
        config.distribution.target_load_minutes = target;
    }

    // Override output settings
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }

    config
}

/// Whether a TOML document sets `distribution.target_load_minutes` itself
pub fn sets_target_load(contents: &str) -> Result<bool> {
    let table: ::toml::Table = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(table
        .get("distribution")
        .and_then(|d| d.get("target_load_minutes"))
        .is_some())
}

/// Build the effective configuration: optional file, then CLI overrides
///
/// A `--capacity` below the default target load pulls the target down with
/// it, unless the target was set explicitly in the file or on the command line.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let (base, target_from_file) = match cli.config {
        Some(ref path) => {
            let contents = read_config_file(path)?;
            let config = parse_toml_string(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            (config, sets_target_load(&contents)?)
        }
        None => (Config::default(), false),
    };

    let mut config = merge_cli_with_config(cli, base);

    let distribution = &mut config.distribution;
    if cli.capacity.is_some()
        && cli.target_load.is_none()
        && !target_from_file
        && distribution.target_load_minutes > distribution.capacity_minutes
    {
        distribution.target_load_minutes = distribution.capacity_minutes;
    }

    Ok(config)
}
