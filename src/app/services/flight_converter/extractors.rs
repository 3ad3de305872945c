//! Field extraction from MyFlightRadar24 composite fields
//!
//! Airports, airlines and aircraft are exported as display names with their
//! codes in trailing parentheses, e.g. `"New York / John F Kennedy (JFK/KJFK)"`
//! or `"Boeing 737-800 (B738)"`.

use crate::app::models::{FlightClass, SeatType};
use crate::app::services::reference_data::AirlineRegistry;
use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Name followed by a parenthesized code group; the group is the last one
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+\((.+)\)").expect("code pattern is valid"));

/// Return the contents of the parenthesized code group
fn code_group(composite: &str) -> Result<&str> {
    CODE_PATTERN
        .captures(composite)
        .and_then(|caps| caps.get(1))
        .map(|group| group.as_str())
        .ok_or_else(|| Error::malformed_field("code", composite))
}

/// Extract the IATA code if present, otherwise the sole code
///
/// `"Atlanta (ATL/KATL)"` gives `"ATL"`, `"Somewhere (XABC)"` gives `"XABC"`.
pub fn extract_code(composite: &str) -> Result<&str> {
    let group = code_group(composite)?;
    Ok(group.split('/').next().unwrap_or(group))
}

/// Extract the ICAO code if present, otherwise the sole code
pub fn extract_icao(composite: &str) -> Result<&str> {
    let group = code_group(composite)?;
    Ok(group.rsplit('/').next().unwrap_or(group))
}

/// Determine the airline code and name from a flight number
///
/// A flight number starting with three letters carries an ICAO airline code,
/// otherwise the first two characters are the IATA code.
pub fn extract_airline(
    flight_number: &str,
    airlines: &AirlineRegistry,
) -> Result<(String, String)> {
    let prefix: String = flight_number.chars().take(3).collect();

    let airline_code = if !prefix.is_empty() && prefix.chars().all(char::is_alphabetic) {
        prefix
    } else {
        flight_number.chars().take(2).collect()
    };

    let airline = airlines.get(&airline_code)?;
    Ok((airline_code, airline.name.clone()))
}

/// Extract an aircraft (or carrier) display name and code
///
/// Returns `(name, code)` where the name is everything before the first
/// opening parenthesis.
pub fn extract_aircraft(composite: &str) -> Result<(String, String)> {
    let code = extract_code(composite)?;
    let name = composite.split('(').next().unwrap_or_default().trim();
    Ok((name.to_string(), code.to_string()))
}

/// Convert a numeric seat type code to its `(name, code)` pair
pub fn format_seat_type(code: &str) -> Result<(&'static str, &'static str)> {
    let seat_type: SeatType = code.parse()?;
    Ok((seat_type.name(), seat_type.code()))
}

/// Convert a numeric flight class code to its `(name, code)` pair
pub fn format_seat_class(code: &str) -> Result<(&'static str, &'static str)> {
    let flight_class: FlightClass = code.parse()?;
    Ok((flight_class.name(), flight_class.code()))
}
