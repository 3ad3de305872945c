//! Shared utilities for command implementations
//!
//! Logging setup, progress bars and the final report.

use crate::app::services::flight_converter::ConversionStats;
use crate::cli::args::Args;
use crate::constants::LOG_TARGET;
use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags. Initializing twice
/// (e.g. from tests) keeps the first subscriber.
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Create a progress bar for converting rows
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Format a fatal error for stderr, including its chain of causes
pub fn format_error(error: &anyhow::Error) -> String {
    format!("ERROR: {:#}", error)
}

/// Print the human-readable summary of a conversion
pub fn print_final_report(stats: &ConversionStats, output_path: &Path, elapsed: Duration) {
    println!();
    println!("{}", "Conversion complete".bright_green().bold());
    println!(
        "   • Flights converted: {}",
        stats.rows_converted.to_string().bright_yellow()
    );
    println!(
        "   • Total distance: {} km (average {:.0} km)",
        format!("{:.0}", stats.total_distance_km).bright_yellow(),
        stats.average_distance_km()
    );
    println!("   • Airports visited: {}", stats.airports_visited.len());
    println!("   • Airlines flown: {}", stats.airlines_flown.len());
    println!("   • Processing time: {}", HumanDuration(elapsed));
    println!(
        "   • Output file: {}",
        output_path.display().to_string().bright_cyan()
    );
    println!();
}
