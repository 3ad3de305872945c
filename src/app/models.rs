//! Data models for flight log conversion
//!
//! This module contains the typed records for the OpenFlights reference
//! databases, the MyFlightRadar24 export rows and the Air Travel Log import
//! rows, plus the seat type and flight class enumerations.

use crate::constants::{flight_classes, seat_types};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// Reference Data Structures
// =============================================================================

/// Airport record from the OpenFlights `airports.dat` database
///
/// Fields are assigned positionally; the file has no header row. OpenFlights
/// uses `\N` for missing values, which are kept verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Airport {
    /// OpenFlights airport identifier
    pub id: String,

    /// Airport name (e.g., "John F Kennedy International Airport")
    pub name: String,

    /// Main city served
    pub city: String,

    /// Country or territory
    pub country: String,

    /// 3-letter IATA code, may be empty or `\N`
    pub iata: String,

    /// 4-letter ICAO code - primary key for airport lookups
    pub icao: String,

    /// Latitude in decimal degrees, north positive; parsed on use
    pub latitude: String,

    /// Longitude in decimal degrees, east positive; parsed on use
    pub longitude: String,

    /// Altitude in feet
    pub altitude: String,

    /// Hours offset from UTC
    pub offset: String,

    /// Daylight saving time rule code
    pub dst: String,

    /// IANA timezone name (e.g., "America/New_York")
    pub timezone: String,

    /// Location type, "airport" for airports
    #[serde(rename = "type")]
    pub airport_type: String,

    /// Source of the record
    pub source: String,
}

impl Airport {
    /// Get airport location as (longitude, latitude) tuple
    ///
    /// # Errors
    /// Returns `Error::InvalidCoordinates` if either value is not a number,
    /// e.g. the OpenFlights `\N` placeholder.
    pub fn coordinates(&self) -> Result<(f64, f64)> {
        let parse = |value: &str| value.trim().parse::<f64>().ok();

        match (parse(&self.longitude), parse(&self.latitude)) {
            (Some(longitude), Some(latitude)) => Ok((longitude, latitude)),
            _ => Err(Error::invalid_coordinates(
                &self.icao,
                &self.latitude,
                &self.longitude,
            )),
        }
    }
}

/// Airline record from the OpenFlights `airlines.dat` database
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Airline {
    pub id: String,
    pub name: String,
    pub alias: String,
    /// 2-letter IATA code, may be empty
    pub iata: String,
    /// 3-letter ICAO code
    pub icao: String,
    pub callsign: String,
    pub country: String,
    /// "Y" if the airline is or was operational
    pub active: String,
}

// =============================================================================
// Flight Log Rows
// =============================================================================

/// One row of a MyFlightRadar24 CSV export
///
/// Columns are matched by header name; additional export columns are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FlightRadarRecord {
    #[serde(rename = "Flight number")]
    pub flight_number: String,

    /// Origin in the format "City / Airport Name (IATA/ICAO)"
    #[serde(rename = "From")]
    pub from: String,

    /// Destination in the format "City / Airport Name (IATA/ICAO)"
    #[serde(rename = "To")]
    pub to: String,

    /// Departure date, `MM/DD/YY`
    #[serde(rename = "Date")]
    pub date: String,

    /// Local departure time, `HH:MM:SS`
    #[serde(rename = "Dep time")]
    pub dep_time: String,

    /// Local arrival time, `HH:MM:SS`
    #[serde(rename = "Arr time")]
    pub arr_time: String,

    /// Flight duration, `H:MM:SS`
    #[serde(rename = "Duration")]
    pub duration: String,

    #[serde(rename = "Registration")]
    pub registration: String,

    /// Aircraft in the format "Aircraft Name (ICAO)"
    #[serde(rename = "Aircraft")]
    pub aircraft: String,

    #[serde(rename = "Seat number")]
    pub seat_number: String,

    /// Numeric seat type code
    #[serde(rename = "Seat type")]
    pub seat_type: String,

    /// Numeric flight class code
    #[serde(rename = "Flight class")]
    pub flight_class: String,

    /// Operating airline in the format "Airline Name (IATA/ICAO)"
    #[serde(rename = "Airline")]
    pub airline: String,

    #[serde(rename = "Note")]
    pub note: String,
}

/// One row of an Air Travel Log TSV import file
///
/// Field order is the output column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AirTravelLogRecord {
    #[serde(rename = "FlightNumber")]
    pub flight_number: String,
    #[serde(rename = "OriginCode")]
    pub origin_code: String,
    #[serde(rename = "DestinationCode")]
    pub destination_code: String,
    #[serde(rename = "DistanceInKm")]
    pub distance_in_km: f64,
    #[serde(rename = "STD")]
    pub std: String,
    #[serde(rename = "STA")]
    pub sta: String,
    #[serde(rename = "ScheduledDuration")]
    pub scheduled_duration: String,
    #[serde(rename = "ATD")]
    pub atd: String,
    #[serde(rename = "ATA")]
    pub ata: String,
    #[serde(rename = "ActualDuration")]
    pub actual_duration: String,
    #[serde(rename = "AirlineCode")]
    pub airline_code: String,
    #[serde(rename = "AirlineName")]
    pub airline_name: String,
    #[serde(rename = "Registration")]
    pub registration: String,
    #[serde(rename = "EquipmentCode")]
    pub equipment_code: String,
    #[serde(rename = "EquipmentName")]
    pub equipment_name: String,
    #[serde(rename = "ManufacturerCode")]
    pub manufacturer_code: String,
    #[serde(rename = "ManufacturerName")]
    pub manufacturer_name: String,
    #[serde(rename = "SeatNumber")]
    pub seat_number: String,
    #[serde(rename = "SeatTypeCode")]
    pub seat_type_code: String,
    #[serde(rename = "SeatTypeName")]
    pub seat_type_name: String,
    #[serde(rename = "FlightClassCode")]
    pub flight_class_code: String,
    #[serde(rename = "FlightClassName")]
    pub flight_class_name: String,
    #[serde(rename = "OperatingCarrierCode")]
    pub operating_carrier_code: String,
    #[serde(rename = "OperatingCarrierName")]
    pub operating_carrier_name: String,
    #[serde(rename = "IgnoreInStatistics")]
    pub ignore_in_statistics: String,
    #[serde(rename = "Remark")]
    pub remark: String,
}

// =============================================================================
// Seat Enumerations
// =============================================================================

/// Seat position as recorded by MyFlightRadar24
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatType {
    Unknown,
    Window,
    Middle,
    Aisle,
}

impl SeatType {
    /// Display name used by Air Travel Log
    pub fn name(&self) -> &'static str {
        match self {
            SeatType::Unknown => "Unknown",
            SeatType::Window => "Window",
            SeatType::Middle => "Middle",
            SeatType::Aisle => "Aisle",
        }
    }

    /// Single-letter code used by Air Travel Log
    pub fn code(&self) -> &'static str {
        match self {
            SeatType::Unknown => "U",
            SeatType::Window => "W",
            SeatType::Middle => "M",
            SeatType::Aisle => "A",
        }
    }
}

impl FromStr for SeatType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            seat_types::UNKNOWN => Ok(SeatType::Unknown),
            seat_types::WINDOW => Ok(SeatType::Window),
            seat_types::MIDDLE => Ok(SeatType::Middle),
            seat_types::AISLE => Ok(SeatType::Aisle),
            other => Err(Error::unknown_seat_type(other)),
        }
    }
}

/// Cabin class as recorded by MyFlightRadar24
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightClass {
    Economy,
    Business,
    First,
    PremiumEconomy,
    Private,
}

impl FlightClass {
    /// Display name used by Air Travel Log
    pub fn name(&self) -> &'static str {
        match self {
            FlightClass::Economy => "Economy",
            FlightClass::Business => "Business",
            FlightClass::First => "First",
            FlightClass::PremiumEconomy => "Premium Economy",
            FlightClass::Private => "Private",
        }
    }

    /// Fare class letter used by Air Travel Log
    pub fn code(&self) -> &'static str {
        match self {
            FlightClass::Economy => "Y",
            FlightClass::Business => "J",
            FlightClass::First => "F",
            FlightClass::PremiumEconomy => "W",
            FlightClass::Private => "P",
        }
    }
}

impl FromStr for FlightClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            flight_classes::ECONOMY => Ok(FlightClass::Economy),
            flight_classes::BUSINESS => Ok(FlightClass::Business),
            flight_classes::FIRST => Ok(FlightClass::First),
            flight_classes::PREMIUM_ECONOMY => Ok(FlightClass::PremiumEconomy),
            flight_classes::PRIVATE => Ok(FlightClass::Private),
            other => Err(Error::unknown_flight_class(other)),
        }
    }
}
