//! CLI argument parsing using clap

use super::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// taskdist - distribute prioritized tasks across employees
#[derive(Parser, Debug)]
#[command(name = "taskdist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Plan file with employees and tasks (.toml or .json)
    #[arg(value_name = "PLAN")]
    pub plan: PathBuf,

    /// TOML configuration file
    #[arg(short = 'c', long, env = "TASKDIST_CONFIG")]
    pub config: Option<PathBuf>,

    // === Distribution Options ===
    /// Per-employee capacity ceiling in minutes (default 420)
    ///
    /// Lowers the default target load to match when it would exceed it.
    #[arg(long, value_name = "MINUTES")]
    pub capacity: Option<u32>,

    /// Per-employee target load in minutes (default 360)
    #[arg(long, value_name = "MINUTES")]
    pub target_load: Option<u32>,

    // === Output Options ===
    /// Report format printed to stdout
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write the JSON report to this file
    #[arg(long, value_name = "FILE")]
    pub json_output: Option<PathBuf>,

    /// Write the plan with the new assignments back out as TOML
    #[arg(long, value_name = "FILE")]
    pub save_plan: Option<PathBuf>,

    // === Runtime Options ===
    /// Validate plan and configuration without distributing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.capacity == Some(0) {
            anyhow::bail!("capacity must be greater than 0");
        }

        if let (Some(capacity), Some(target)) = (self.capacity, self.target_load) {
            if target > capacity {
                anyhow::bail!(
                    "--target-load ({}) must not exceed --capacity ({})",
                    target,
                    capacity
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["taskdist", "plan.toml"]).unwrap();
        assert_eq!(cli.plan, PathBuf::from("plan.toml"));
        assert!(cli.capacity.is_none());
        assert!(cli.format.is_none());
        assert!(!cli.dry_run);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "taskdist",
            "--capacity",
            "480",
            "--target-load",
            "400",
            "--format",
            "json",
            "--dry-run",
            "plan.json",
        ])
        .unwrap();

        assert_eq!(cli.capacity, Some(480));
        assert_eq!(cli.target_load, Some(400));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let cli = Cli::try_parse_from(["taskdist", "--capacity", "0", "plan.toml"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_target_above_capacity() {
        let cli = Cli::try_parse_from([
            "taskdist",
            "--capacity",
            "300",
            "--target-load",
            "360",
            "plan.toml",
        ])
        .unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_plan_is_required() {
        assert!(Cli::try_parse_from(["taskdist"]).is_err());
    }
}
