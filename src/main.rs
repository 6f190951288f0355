use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use statement_consolidator::engine::StatementEngine;
use statement_consolidator::models::{OutputRecord, OUTPUT_COLUMNS};
use statement_consolidator::rules::RuleSet;

/// Exit status for a statement whose layout cannot be consolidated, as opposed to an I/O failure.
const MALFORMED_INPUT_EXIT_CODE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: statement-consolidator [statement].csv [log_level:optional] > [consolidated].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let rules = Arc::new(RuleSet::default());
    let engine = StatementEngine::new(rules);

    let timer = Instant::now();
    let consolidation = match engine.run(path).await {
        Ok(consolidation) => consolidation,
        Err(error) if error.is_malformed_input() => {
            eprintln!("Rejected statement [{path}]: {error}");
            exit(MALFORMED_INPUT_EXIT_CODE);
        },
        Err(error) => return Err(error).with_context(|| format!("Could not consolidate statement [{path}]"))
    };
    let duration = timer.elapsed();

    info!("Consolidated statement in: {duration:?}");
    info!("{}", consolidation.report);

    write_results_to_stdout(&consolidation.records)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the consolidated CSV, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(records: &[OutputRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(stdout().lock()));

    writer.write_record(OUTPUT_COLUMNS)?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;

    Ok(())
}
