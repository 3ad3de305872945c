//! Convert command implementation
//!
//! Loads the reference data, reads the whole export, converts every row and
//! only then writes the output file. A failure at any step leaves no output
//! file behind.

use super::shared::{create_progress_bar, print_final_report, setup_logging};
use crate::app::services::flight_converter::{ConversionStats, FlightConverter};
use crate::app::services::flight_log_io::{read_flight_log, write_air_travel_log};
use crate::app::services::reference_data::ReferenceData;
use crate::cli::args::Args;
use anyhow::Context;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Convert command runner
///
/// 1. Set up logging and validate arguments
/// 2. Load airports and airlines
/// 3. Read and convert all flights
/// 4. Write the Air Travel Log file and report
pub fn run_convert(args: Args) -> anyhow::Result<ConversionStats> {
    let start_time = Instant::now();

    setup_logging(&args);
    info!("Starting flight log conversion");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = args.to_config();
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let output_path = args.output_path(&config);

    let reference = Arc::new(ReferenceData::load(&config.reference_data)?);
    info!(
        "Loaded {} airports and {} airline codes",
        reference.airports.len(),
        reference.airlines.len()
    );

    let records = read_flight_log(&args.infile)?;

    let progress_bar = config
        .output
        .show_progress
        .then(|| create_progress_bar(records.len() as u64, "Converting flights"));

    let converter = FlightConverter::new(reference);
    let result = converter.convert_records(&records, progress_bar.as_ref())?;

    write_air_travel_log(&output_path, &result.records).with_context(|| {
        format!(
            "Failed to write Air Travel Log file {}",
            output_path.display()
        )
    })?;

    if !args.quiet {
        print_final_report(&result.stats, &output_path, start_time.elapsed());
    }

    Ok(result.stats)
}
