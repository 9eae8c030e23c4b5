//! CLI entry point for the marksheet rater tool.
//!
//! Provides subcommands for printing the ranked score report for a
//! marksheet and for exporting its accepted records to CSV.

use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use marksheet_rater::analysis::aggregate::Summary;
use marksheet_rater::branch::BranchTable;
use marksheet_rater::output::append_records;
use marksheet_rater::report::ReportData;
use marksheet_rater::sheet::load_rows;
use marksheet_rater::validate::{Batch, validate_rows};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "marksheet_rater")]
#[command(about = "A tool to rank and summarize examination marksheets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked score report for a marksheet
    Report {
        /// Path to the spreadsheet (xlsx, xls, xlsb, ods or csv)
        #[arg(value_name = "SHEET")]
        source: String,

        /// How many students to list per scoring dimension
        #[arg(short, long, default_value_t = 3)]
        top: usize,

        /// Emit the report data as pretty JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Append the accepted records of a marksheet to a CSV file
    Export {
        /// Path to the spreadsheet (xlsx, xls, xlsb, ods or csv)
        #[arg(value_name = "SHEET")]
        source: String,

        /// CSV file to append records to
        #[arg(short, long, default_value = "records.csv")]
        output: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file. The report owns
    // stdout; diagnostics never mix into it.
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/marksheet_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("marksheet_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let table = BranchTable::builtin();

    match cli.command {
        Commands::Report { source, top, json } => {
            let batch = process_sheet(&source, &table)?;
            let summary = Summary::from_records(&batch.records);
            let data = ReportData::build(&batch.records, &summary, &table, top);

            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("{}", data.render());
            }
        }
        Commands::Export { source, output } => {
            let batch = process_sheet(&source, &table)?;
            append_records(&output, &batch.records)?;
            info!(records = batch.records.len(), output = %output, "Records exported");
        }
    }

    Ok(())
}

/// Loads a sheet and validates every data row, logging the batch tallies.
fn process_sheet(source: &str, table: &BranchTable) -> Result<Batch> {
    let rows = load_rows(Path::new(source))?;
    let batch = validate_rows(&rows, table);

    info!(
        accepted = batch.records.len(),
        flagged = batch.flagged,
        unclassified = batch.unclassified,
        malformed = batch.malformed,
        "Sheet validated"
    );

    Ok(batch)
}
