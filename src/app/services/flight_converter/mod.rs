//! Flight record conversion module
//!
//! This module maps MyFlightRadar24 export rows onto Air Travel Log import
//! rows, resolving airports and airlines against the OpenFlights reference
//! data and deriving the fields the export does not carry directly.
//!
//! # Architecture
//!
//! - [`extractors`] - Parsing of composite name fields and numeric enumerations
//! - [`calculators`] - Great-circle distance and timezone-aware timestamps
//! - [`converter`] - The FlightConverter that maps one row to another
//! - [`stats`] - Conversion statistics
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use flightlog_converter::app::services::flight_converter::FlightConverter;
//! use flightlog_converter::app::services::reference_data::ReferenceData;
//! use flightlog_converter::config::Config;
//!
//! # fn example(records: Vec<flightlog_converter::FlightRadarRecord>) -> flightlog_converter::Result<()> {
//! let config = Config::default();
//! let reference = Arc::new(ReferenceData::load(&config.reference_data)?);
//! let converter = FlightConverter::new(reference);
//!
//! let result = converter.convert_records(&records, None)?;
//! println!("{}", result.stats.summary());
//! # Ok(())
//! # }
//! ```

pub mod calculators;
pub mod converter;
pub mod extractors;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use calculators::{calculate_distance, format_time, parse_timezone};
pub use converter::FlightConverter;
pub use extractors::{
    extract_aircraft, extract_airline, extract_code, extract_icao, format_seat_class,
    format_seat_type,
};
pub use stats::{ConversionResult, ConversionStats};
