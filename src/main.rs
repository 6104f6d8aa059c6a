//! taskdist CLI entry point

use anyhow::{Context, Result};
use taskdist::config::cli::Cli;
use taskdist::config::{validator, OutputFormat};
use taskdist::diagnostics::{RecordingSink, Tee, TracingSink};
use taskdist::distributor::Distributor;
use taskdist::output::{json, text};
use taskdist::plan::Plan;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();
    cli.validate()?;

    init_tracing(cli.debug);

    // Build configuration: TOML file first, CLI overrides on top
    let config = taskdist::config::toml::load_config(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;
    tracing::debug!(?config, "effective configuration");

    let mut plan = Plan::from_file(&cli.plan)?;
    plan.check()?;

    if config.output.format == OutputFormat::Text {
        println!("taskdist v{}", env!("CARGO_PKG_VERSION"));
        println!();
        print!("{}", config);
        println!();
    }

    if cli.dry_run {
        text::print_plan_summary(&plan, &config.distribution);
        println!();
        println!("Dry run mode - plan and configuration validated successfully");
        return Ok(());
    }

    // Warnings go to the log as they happen and are kept for the report
    let sink = Tee {
        first: TracingSink,
        second: RecordingSink::new(),
    };
    let mut distributor = Distributor::with_sink(config.distribution, sink);
    let report = distributor
        .distribute(&mut plan.employees, &plan.tasks)
        .context("Distribution failed")?;
    let warnings = distributor.into_sink().second.messages().to_vec();

    match config.output.format {
        OutputFormat::Text => {
            text::print_results(&plan.employees, &plan.tasks, &report, &config.distribution, &warnings);
        }
        OutputFormat::Json => {
            let doc = json::build_report(&plan.employees, &plan.tasks, &report, &config.distribution, &warnings);
            println!("{}", json::to_json_string(&doc)?);
        }
    }

    if let Some(ref path) = config.output.json_output {
        let doc = json::build_report(&plan.employees, &plan.tasks, &report, &config.distribution, &warnings);
        json::write_json_output(path, &doc)?;
        tracing::debug!(path = %path.display(), "JSON report written");
    }

    if let Some(ref path) = cli.save_plan {
        let contents = plan.to_toml_string()?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write plan file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "updated plan written");
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins unless `--debug` is given
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
