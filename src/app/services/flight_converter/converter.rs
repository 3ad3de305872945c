//! Row conversion from MyFlightRadar24 to Air Travel Log

use super::calculators::{calculate_distance, format_time, parse_timezone, truncate_seconds};
use super::extractors::{
    extract_aircraft, extract_airline, extract_code, extract_icao, format_seat_class,
    format_seat_type,
};
use super::stats::{ConversionResult, ConversionStats};
use crate::app::models::{AirTravelLogRecord, FlightRadarRecord};
use crate::app::services::reference_data::ReferenceData;
use crate::{Error, Result};
use indicatif::ProgressBar;
use std::sync::Arc;
use tracing::{debug, info};

/// Converter for MyFlightRadar24 export rows
///
/// Holds the reference data used to resolve airports and airlines. The
/// conversion itself is stateless: every row maps to exactly one output row.
#[derive(Debug, Clone)]
pub struct FlightConverter {
    reference: Arc<ReferenceData>,
}

impl FlightConverter {
    /// Create a new converter backed by loaded reference data
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Convert a single export row
    ///
    /// # Errors
    /// Fails if an airport or airline code is unknown, an airport has no usable
    /// coordinates, a composite field has
    /// no parenthesized code, the date, time or duration cannot be parsed, or
    /// a seat enumeration value is not recognized.
    pub fn convert_record(&self, record: &FlightRadarRecord) -> Result<AirTravelLogRecord> {
        let origin = self.reference.airports.get(extract_icao(&record.from)?)?;
        let destination = self.reference.airports.get(extract_icao(&record.to)?)?;

        let distance_in_km =
            calculate_distance(origin.coordinates()?, destination.coordinates()?);
        let (std, sta) = format_time(
            &record.date,
            &record.dep_time,
            &record.duration,
            &record.arr_time,
            parse_timezone(origin)?,
            parse_timezone(destination)?,
        )?;
        let scheduled_duration = truncate_seconds(&record.duration).to_string();

        let (airline_code, airline_name) =
            extract_airline(&record.flight_number, &self.reference.airlines)?;
        let (equipment_name, equipment_code) = extract_aircraft(&record.aircraft)?;
        // The Airline column holds the operating carrier as "Name (IATA/ICAO)"
        let (operating_carrier_name, operating_carrier_code) = extract_aircraft(&record.airline)?;

        let (seat_type_name, seat_type_code) = format_seat_type(&record.seat_type)?;
        let (flight_class_name, flight_class_code) = format_seat_class(&record.flight_class)?;

        Ok(AirTravelLogRecord {
            flight_number: record.flight_number.clone(),
            origin_code: extract_code(&record.from)?.to_string(),
            destination_code: extract_code(&record.to)?.to_string(),
            distance_in_km,
            // No actual times in the export; mirror the scheduled ones
            atd: std.clone(),
            ata: sta.clone(),
            actual_duration: scheduled_duration.clone(),
            std,
            sta,
            scheduled_duration,
            airline_code,
            airline_name,
            registration: record.registration.clone(),
            equipment_code,
            equipment_name,
            // Manufacturer and model names can both span several words
            manufacturer_code: String::new(),
            manufacturer_name: String::new(),
            seat_number: record.seat_number.clone(),
            seat_type_code: seat_type_code.to_string(),
            seat_type_name: seat_type_name.to_string(),
            flight_class_code: flight_class_code.to_string(),
            flight_class_name: flight_class_name.to_string(),
            operating_carrier_code,
            operating_carrier_name,
            ignore_in_statistics: String::new(),
            remark: record.note.clone(),
        })
    }

    /// Convert all export rows, preserving order
    ///
    /// The first failing row aborts the conversion; the error carries the
    /// 1-based row number and flight number.
    pub fn convert_records(
        &self,
        records: &[FlightRadarRecord],
        progress_bar: Option<&ProgressBar>,
    ) -> Result<ConversionResult> {
        info!("Converting {} flights", records.len());

        let mut stats = ConversionStats::new();
        stats.rows_read = records.len();
        let mut converted = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let row = self
                .convert_record(record)
                .map_err(|e| Error::row(index + 1, &record.flight_number, e))?;

            debug!(
                "Row {}: {} {} -> {} ({:.0} km)",
                index + 1,
                row.flight_number,
                row.origin_code,
                row.destination_code,
                row.distance_in_km
            );

            stats.record(&row);
            converted.push(row);

            if let Some(pb) = progress_bar {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_with_message(format!("Converted {} flights", converted.len()));
        }

        info!("{}", stats.summary());

        Ok(ConversionResult {
            records: converted,
            stats,
        })
    }
}
