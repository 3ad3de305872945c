//! Command implementations for the flight log converter CLI
//!
//! This module contains the conversion workflow, progress reporting and
//! logging setup for the CLI interface.

pub mod convert;
pub mod shared;

pub use convert::run_convert;

use crate::app::services::flight_converter::ConversionStats;
use crate::cli::args::Args;

/// Main command runner for the flight log converter
pub fn run(args: Args) -> anyhow::Result<ConversionStats> {
    run_convert(args)
}
