//! Reading MyFlightRadar24 exports and writing Air Travel Log files
//!
//! Both tables are materialized completely in memory: the export is read in
//! full before conversion, and the output is written in one pass afterwards.

use crate::app::models::{AirTravelLogRecord, FlightRadarRecord};
use crate::app::services::reference_data::loader::fit_record;
use crate::constants::{OUTPUT_COLUMNS, OUTPUT_DELIMITER};
use crate::{Error, Result};
use csv::{StringRecord, Terminator};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Read every row of a MyFlightRadar24 CSV export
///
/// # Errors
/// * Returns `Error::FileNotFound` if the export does not exist
/// * Returns `Error::CsvParsing` for unreadable rows or missing columns
///
/// Rows shorter than the header are read with the missing trailing columns
/// empty; surplus fields are ignored.
pub fn read_flight_log(path: &Path) -> Result<Vec<FlightRadarRecord>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let file_label = path.to_string_lossy().to_string();
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                file_label.clone(),
                "Failed to open flight log".to_string(),
                Some(e),
            )
        })?;

    let records = read_flight_log_from(reader, &file_label)?;
    info!("Read {} flights from {}", records.len(), path.display());
    Ok(records)
}

/// Read export rows from an already-open CSV reader
pub fn read_flight_log_from<R: std::io::Read>(
    mut reader: csv::Reader<R>,
    file_label: &str,
) -> Result<Vec<FlightRadarRecord>> {
    let headers = reader
        .headers()
        .map_err(|e| Error::csv_parsing(file_label, "Failed to read header row", Some(e)))?
        .clone();

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    let mut index = 0;

    while reader.read_record(&mut row).map_err(|e| {
        Error::csv_parsing(
            file_label,
            format!("Failed to read flight row {}", index + 1),
            Some(e),
        )
    })? {
        index += 1;

        if row.len() != headers.len() {
            warn!(
                "{}: flight row {} has {} fields, header has {}",
                file_label,
                index,
                row.len(),
                headers.len()
            );
            row = fit_record(&row, headers.len());
        }

        let record: FlightRadarRecord = row.deserialize(Some(&headers)).map_err(|e| {
            Error::csv_parsing(
                file_label,
                format!("Failed to read flight row {}", index),
                Some(e),
            )
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Write Air Travel Log rows to a tab-separated file with header
pub fn write_air_travel_log(path: &Path, records: &[AirTravelLogRecord]) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        Error::io(format!("Failed to create output file {}", path.display()), e)
    })?;

    write_air_travel_log_to(file, records, &path.to_string_lossy())?;
    info!("Wrote {} flights to {}", records.len(), path.display());
    Ok(())
}

/// Write Air Travel Log rows to any writer
///
/// The header is always written, even when there are no rows.
pub fn write_air_travel_log_to<W: Write>(
    writer: W,
    records: &[AirTravelLogRecord],
    file_label: &str,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(OUTPUT_DELIMITER)
        .terminator(Terminator::CRLF)
        .has_headers(false)
        .from_writer(writer);

    let csv_error = |message: &str, e: csv::Error| {
        Error::csv_parsing(file_label, message.to_string(), Some(e))
    };

    writer
        .write_record(OUTPUT_COLUMNS)
        .map_err(|e| csv_error("Failed to write header", e))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| csv_error("Failed to write flight row", e))?;
    }

    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", file_label), e))?;
    debug!("Flushed {} rows to {}", records.len(), file_label);

    Ok(())
}
