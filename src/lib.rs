//! Flight Log Converter Library
//!
//! A Rust library for converting MyFlightRadar24 flight log exports (CSV)
//! into the tab-separated import format used by the Air Travel Log app.
//!
//! This library provides tools for:
//! - Loading the OpenFlights airport and airline databases for O(1) lookups
//! - Extracting IATA/ICAO codes and names from composite export fields
//! - Computing great-circle distances between airports
//! - Deriving timezone-aware departure and arrival timestamps
//! - Reading the source CSV and writing the Air Travel Log TSV

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod flight_converter;
        pub mod flight_log_io;
        pub mod reference_data;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AirTravelLogRecord, Airline, Airport, FlightRadarRecord};
pub use config::Config;

/// Result type alias for the flight log converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for flight log conversion
///
/// Every failure is fatal for the run: there is no row-level recovery.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing or writing error
    #[error("CSV error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// OpenFlights reference data file is missing
    #[error(
        "Unable to find {kind} data file \"{path}\". Please download {file_name} from {url}"
    )]
    ReferenceDataMissing {
        kind: String,
        path: String,
        file_name: String,
        url: String,
    },

    /// Reference data file has an unexpected layout
    #[error("Reference data error in file '{file}' at line {line}: {message}")]
    ReferenceData {
        file: String,
        line: u64,
        message: String,
    },

    /// Input file not found
    #[error("Specified input file \"{path}\" was not found.")]
    FileNotFound { path: String },

    /// Airport not present in the airport database
    #[error("Airport not found: icao = {icao}")]
    AirportNotFound { icao: String },

    /// Airline not present in the airline database
    #[error("Airline not found: code = {code}")]
    AirlineNotFound { code: String },

    /// Composite or formatted field could not be parsed
    #[error("Malformed {field} field: '{value}'")]
    MalformedField { field: String, value: String },

    /// Seat type code outside the known enumeration
    #[error("Unknown seat type code: '{code}'")]
    UnknownSeatType { code: String },

    /// Flight class code outside the known enumeration
    #[error("Unknown flight class code: '{code}'")]
    UnknownFlightClass { code: String },

    /// Airport coordinates are not decimal degrees
    #[error("Invalid coordinates for airport {icao}: latitude '{latitude}', longitude '{longitude}'")]
    InvalidCoordinates {
        icao: String,
        latitude: String,
        longitude: String,
    },

    /// Airport timezone is not a valid IANA name
    #[error("Unknown timezone '{timezone}' for airport {icao}")]
    UnknownTimezone { icao: String, timezone: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Failure while converting a specific input row
    #[error("Failed to convert row {row} (flight '{flight_number}')")]
    Row {
        row: usize,
        flight_number: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing reference data error
    pub fn reference_data_missing(
        kind: impl Into<String>,
        path: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self::ReferenceDataMissing {
            kind: kind.into(),
            path: path.into(),
            file_name: file_name.into(),
            url: crate::constants::OPENFLIGHTS_DATA_URL.to_string(),
        }
    }

    /// Create a reference data layout error
    pub fn reference_data(file: impl Into<String>, line: u64, message: impl Into<String>) -> Self {
        Self::ReferenceData {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an airport not found error
    pub fn airport_not_found(icao: impl Into<String>) -> Self {
        Self::AirportNotFound { icao: icao.into() }
    }

    /// Create an airline not found error
    pub fn airline_not_found(code: impl Into<String>) -> Self {
        Self::AirlineNotFound { code: code.into() }
    }

    /// Create a malformed field error
    pub fn malformed_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedField {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an unknown seat type error
    pub fn unknown_seat_type(code: impl Into<String>) -> Self {
        Self::UnknownSeatType { code: code.into() }
    }

    /// Create an unknown flight class error
    pub fn unknown_flight_class(code: impl Into<String>) -> Self {
        Self::UnknownFlightClass { code: code.into() }
    }

    /// Create an invalid coordinates error
    pub fn invalid_coordinates(
        icao: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self::InvalidCoordinates {
            icao: icao.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Create an unknown timezone error
    pub fn unknown_timezone(icao: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self::UnknownTimezone {
            icao: icao.into(),
            timezone: timezone.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Wrap an error with the row it occurred in (1-based)
    pub fn row(row: usize, flight_number: impl Into<String>, source: Error) -> Self {
        Self::Row {
            row,
            flight_number: flight_number.into(),
            source: Box::new(source),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV processing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}
