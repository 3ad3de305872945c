//! Reference data file loading
//!
//! OpenFlights files have no header row; columns are assigned positionally.
//! Rows with a different number of fields are kept: missing trailing fields
//! are left empty and surplus fields are dropped. Values stay as text until a
//! flight needs them, so a bad row only matters if a flight refers to it.

use super::{AirlineRegistry, AirportRegistry, LoadStats};
use crate::app::models::{Airline, Airport};
use crate::constants::{AIRLINE_FIELDS, AIRPORT_FIELDS};
use crate::{Error, Result};
use csv::StringRecord;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

impl AirportRegistry {
    /// Load the airport registry from an `airports.dat` file
    pub fn load(path: &Path, delimiter: u8) -> Result<(Self, LoadStats)> {
        let airports: Vec<Airport> =
            read_reference_file(path, delimiter, AIRPORT_FIELDS.len(), "airport")?;
        let (registry, stats) = Self::from_airports(path.to_path_buf(), airports);

        if stats.duplicate_keys > 0 {
            warn!(
                "{} airports in {} share an ICAO code with an earlier row; later rows win",
                stats.duplicate_keys,
                path.display()
            );
        }

        Ok((registry, stats))
    }
}

impl AirlineRegistry {
    /// Load the airline registry from an `airlines.dat` file
    pub fn load(path: &Path, delimiter: u8) -> Result<(Self, LoadStats)> {
        let airlines: Vec<Airline> =
            read_reference_file(path, delimiter, AIRLINE_FIELDS.len(), "airline")?;
        let (registry, stats) = Self::from_airlines(path.to_path_buf(), airlines);

        debug!(
            "{} airline codes in {} replaced an earlier row",
            stats.duplicate_keys,
            path.display()
        );

        Ok((registry, stats))
    }
}

/// Read every row of a header-less reference file into typed records
///
/// # Errors
/// * Returns `Error::ReferenceDataMissing` if the file does not exist
/// * Returns `Error::CsvParsing` if the file cannot be read as CSV
/// * Returns `Error::ReferenceData` for rows that do not fit the record type
pub fn read_reference_file<T: DeserializeOwned>(
    path: &Path,
    delimiter: u8,
    expected_fields: usize,
    kind: &str,
) -> Result<Vec<T>> {
    if !path.exists() {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        return Err(Error::reference_data_missing(
            kind,
            path.display().to_string(),
            file_name,
        ));
    }

    debug!("Loading {} data from {}", kind, path.display());
    let start_time = Instant::now();
    let file_label = path.to_string_lossy().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| {
            Error::csv_parsing(
                file_label.clone(),
                "Failed to open reference file".to_string(),
                Some(e),
            )
        })?;

    let mut records = Vec::new();
    let mut record = StringRecord::new();
    let mut irregular_rows = 0usize;

    while reader.read_record(&mut record).map_err(|e| {
        Error::csv_parsing(
            file_label.clone(),
            "Failed to read reference record".to_string(),
            Some(e),
        )
    })? {
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);

        if record.len() != expected_fields {
            warn!(
                "{}:{}: expected {} fields, found {}; row kept with missing fields empty",
                file_label,
                line,
                expected_fields,
                record.len()
            );
            irregular_rows += 1;
            record = fit_record(&record, expected_fields);
        }

        let parsed: T = record
            .deserialize(None)
            .map_err(|e| Error::reference_data(file_label.clone(), line, e.to_string()))?;
        records.push(parsed);
    }

    debug!(
        "Loaded {} {} rows ({} irregular) in {:.2}s",
        records.len(),
        kind,
        irregular_rows,
        start_time.elapsed().as_secs_f64()
    );

    Ok(records)
}

/// Pad a record with empty fields or drop surplus fields to reach `len`
pub fn fit_record(record: &StringRecord, len: usize) -> StringRecord {
    let mut fitted: StringRecord = record.iter().take(len).collect();
    while fitted.len() < len {
        fitted.push_field("");
    }
    fitted
}
