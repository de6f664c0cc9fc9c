use clap::Parser;
use ferrous_zonecheck_application::use_cases::CheckZoneRecordsUseCase;
use ferrous_zonecheck_domain::{CliOverrides, ReportFormat};
use ferrous_zonecheck_infrastructure::sources::JsonFileRecordSource;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod report;

#[derive(Parser)]
#[command(name = "zonecheck")]
#[command(version)]
#[command(about = "Check DNS zone records for TTL mismatches and singleton violations")]
struct Cli {
    /// JSON file with the zone's records
    #[arg(value_name = "RECORDS")]
    records: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Report format (text, json)
    #[arg(short = 'f', long)]
    format: Option<ReportFormat>,

    /// Exit successfully even when issues are found
    #[arg(long)]
    no_fail: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        format: cli.format,
        fail_on_issues: cli.no_fail.then_some(false),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting zonecheck v{}", env!("CARGO_PKG_VERSION"));

    let source = Arc::new(JsonFileRecordSource::new(&cli.records));
    let use_case = CheckZoneRecordsUseCase::new(source);
    let report = use_case.execute().await?;

    println!("{}", report::render(&report, config.check.format)?);

    if !report.is_clean() && config.check.fail_on_issues {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
