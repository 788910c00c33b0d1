//! Proposal checker binary
//!
//! Usage:
//!   proposal_checker proposals/new_market.json
//!   proposal_checker --config config/checker.toml --environment testnet
//!   proposal_checker --format json batch.json > report.json

use anyhow::{Context, Result};
use checker_config::{load_config, CheckerConfig};
use clap::{Parser, ValueEnum};
use commands::ProposalValidator;
use proposal_checker::{collect_files, read_proposals, Report};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "proposal_checker")]
#[command(about = "Validate governance proposal submissions")]
#[command(version)]
struct Args {
    /// Path to configuration file (defaults to config/checker.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment profile loaded from config/environments/<name>.toml
    #[arg(short, long)]
    environment: Option<String>,

    /// Log filter (trace, debug, info, warn, error or a directive list)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON logging format
    #[arg(long)]
    json_logs: bool,

    /// Report format written to stdout
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Proposal documents; defaults to input.proposal_dir
    files: Vec<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref(), args.environment.as_deref())?;
    init_logging(&args, &config)?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let files = collect_files(
        &args.files,
        config.input.proposal_dir.as_deref(),
        &config.input.extension,
    )?;
    if files.is_empty() {
        warn!("No proposal documents found");
        return Ok(ExitCode::SUCCESS);
    }
    info!("Checking {} document(s)", files.len());

    let validator = ProposalValidator::with_config(config.validation.clone());
    let mut report = Report::default();

    for path in &files {
        let proposals = read_proposals(path).map_err(|e| {
            error!("Failed to load {}: {:#}", path.display(), e);
            e
        })?;
        let rejected = report.check_document(&validator, &path.display().to_string(), &proposals);
        if rejected > 0 {
            warn!("{}: {} of {} proposal(s) rejected", path.display(), rejected, proposals.len());
            if config.input.fail_fast {
                info!("Stopping at first rejected document");
                break;
            }
        }
    }

    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report.to_json()).context("Failed to render report")?
        ),
    }

    Ok(if report.rejected() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_logging(args: &Args, config: &CheckerConfig) -> Result<()> {
    let directive = args.log_level.as_deref().unwrap_or(&config.logging.level);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .context("Invalid log filter")?;

    // Logs go to stderr so the report on stdout stays machine readable
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if args.json_logs || config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
