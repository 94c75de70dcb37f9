use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use job_import::client::{HttpJobSink, LOCAL_ENDPOINT};
use job_import::{Importer, config, listings, logging, report};
use serde::Serialize;

const EXAMPLE: &str = "Example:
  job-import ~/Documents/JobReports/data/Jobs_Report.json";

#[derive(Parser)]
#[command(name = "job-import")]
#[command(about = "Import a jobs report into the Jobs Dashboard", long_about = None)]
#[command(arg_required_else_help = true, after_help = EXAMPLE)]
struct Cli {
    /// Path to the jobs report JSON file
    file: PathBuf,

    #[command(flatten)]
    options: ImportArgs,

    /// Send to the backend running on localhost:3001
    #[arg(long, conflicts_with = "endpoint")]
    local: bool,
}

#[derive(Args, Serialize)]
struct ImportArgs {
    /// Import endpoint URL
    #[serde(skip_serializing_if = "Option::is_none")]
    #[arg(long)]
    endpoint: Option<String>,

    /// Build and print the payload without sending it
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[arg(long)]
    dry_run: bool,

    /// Show debug logs on stderr
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[arg(long, short)]
    verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();

    if cli.local {
        cli.options.endpoint = Some(LOCAL_ENDPOINT.to_string());
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = config::AppConfig::new(Some(&cli.options))?;

    logging::init(logging::LogConfig {
        json: config.json_logs,
        verbose: config.verbose,
    });

    let sink = HttpJobSink::new(config.endpoint.clone()).context("Failed to build HTTP client")?;
    let importer = Importer::new(Arc::new(sink)).dry_run(config.dry_run);

    // Missing file is reported before the banner
    if let Err(e) = listings::ensure_exists(&cli.file) {
        println!("{}", report::render_error(&e));
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", report::banner(&cli.file, importer.endpoint()));

    let result = match importer.prepare(&cli.file) {
        Ok(payload) => {
            if !payload.is_empty() {
                println!("{}", report::found_jobs(payload.len()));
            }
            importer.send(payload).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => {
            println!("{}", report::render_outcome(&outcome));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(error = ?e, local = e.is_local(), "Import failed");
            println!("{}", report::render_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}
