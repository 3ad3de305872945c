//! Application constants for the flight log converter
//!
//! This module contains default file locations, formats, column schemas and
//! lookup enumerations used throughout the converter.

// =============================================================================
// Reference Data
// =============================================================================

/// Where the OpenFlights reference files can be downloaded from
pub const OPENFLIGHTS_DATA_URL: &str = "https://openflights.org/data";

/// Default airport database file, relative to the working directory
pub const DEFAULT_AIRPORTS_FILE: &str = "airports.dat";

/// Default airline database file, relative to the working directory
pub const DEFAULT_AIRLINES_FILE: &str = "airlines.dat";

/// Reference file delimiter
pub const REFERENCE_DELIMITER: u8 = b',';

/// Positional columns of `airports.dat`
pub const AIRPORT_FIELDS: &[&str] = &[
    "id",
    "name",
    "city",
    "country",
    "iata",
    "icao",
    "latitude",
    "longitude",
    "altitude",
    "offset",
    "dst",
    "timezone",
    "type",
    "source",
];

/// Positional columns of `airlines.dat`
pub const AIRLINE_FIELDS: &[&str] = &[
    "id", "name", "alias", "iata", "icao", "callsign", "country", "active",
];

// =============================================================================
// Input / Output Formats
// =============================================================================

/// Extension given to the output file when no output path is specified
pub const OUTPUT_EXTENSION: &str = "atltsv";

/// Output table delimiter
pub const OUTPUT_DELIMITER: u8 = b'\t';

/// Format of the `Date` and `Dep time` input columns combined
pub const SOURCE_DATETIME_FORMAT: &str = "%m/%d/%y %H:%M:%S";

/// Format of the STD/ATD output columns
pub const TARGET_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format of the date part of the STA/ATA output columns
pub const TARGET_DATE_FORMAT: &str = "%Y-%m-%d";

/// Output column order
pub const OUTPUT_COLUMNS: &[&str] = &[
    "FlightNumber",
    "OriginCode",
    "DestinationCode",
    "DistanceInKm",
    "STD",
    "STA",
    "ScheduledDuration",
    "ATD",
    "ATA",
    "ActualDuration",
    "AirlineCode",
    "AirlineName",
    "Registration",
    "EquipmentCode",
    "EquipmentName",
    "ManufacturerCode",
    "ManufacturerName",
    "SeatNumber",
    "SeatTypeCode",
    "SeatTypeName",
    "FlightClassCode",
    "FlightClassName",
    "OperatingCarrierCode",
    "OperatingCarrierName",
    "IgnoreInStatistics",
    "Remark",
];

// =============================================================================
// Geodesy
// =============================================================================

/// Mean Earth radius in kilometres used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6371.009;

// =============================================================================
// Enumerations
// =============================================================================

/// MyFlightRadar24 seat type codes
pub mod seat_types {
    pub const UNKNOWN: &str = "0";
    pub const WINDOW: &str = "1";
    pub const MIDDLE: &str = "2";
    pub const AISLE: &str = "3";
}

/// MyFlightRadar24 flight class codes
pub mod flight_classes {
    pub const ECONOMY: &str = "1";
    pub const BUSINESS: &str = "2";
    pub const FIRST: &str = "3";
    pub const PREMIUM_ECONOMY: &str = "4";
    pub const PRIVATE: &str = "5";
}

// =============================================================================
// Logging
// =============================================================================

/// Log target used when building the default `EnvFilter`
pub const LOG_TARGET: &str = "flightlog_converter";
