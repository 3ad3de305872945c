//! Shared test utilities and fixtures for flight conversion tests

use crate::app::models::{Airline, Airport, FlightRadarRecord};
use crate::app::services::reference_data::tests::{TEST_AIRLINES, TEST_AIRPORTS};
use crate::app::services::reference_data::{AirlineRegistry, AirportRegistry, ReferenceData};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::sync::Arc;


fn parse_fixture<T: DeserializeOwned>(content: &str) -> Vec<T> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(content.as_bytes())
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .unwrap()
}

/// Reference data built from the shared airport and airline fixtures
pub fn create_test_reference_data() -> Arc<ReferenceData> {
    let airports: Vec<Airport> = parse_fixture(TEST_AIRPORTS);
    let airlines: Vec<Airline> = parse_fixture(TEST_AIRLINES);

    let (airports, _) = AirportRegistry::from_airports(PathBuf::from("airports.dat"), airports);
    let (airlines, _) = AirlineRegistry::from_airlines(PathBuf::from("airlines.dat"), airlines);

    Arc::new(ReferenceData { airports, airlines })
}

/// A Delta flight from JFK to Atlanta
pub fn create_test_record() -> FlightRadarRecord {
    FlightRadarRecord {
        flight_number: "DL123".to_string(),
        from: "New York / John F Kennedy International Airport (JFK/KJFK)".to_string(),
        to: "Atlanta / Hartsfield-Jackson Atlanta International Airport (ATL/KATL)".to_string(),
        date: "01/15/24".to_string(),
        dep_time: "08:00:00".to_string(),
        arr_time: "10:30:00".to_string(),
        duration: "2:30:00".to_string(),
        registration: "N812DN".to_string(),
        aircraft: "Boeing 737-900 (B739)".to_string(),
        seat_number: "23B".to_string(),
        seat_type: "2".to_string(),
        flight_class: "4".to_string(),
        airline: "Delta Air Lines (DL/DAL)".to_string(),
        note: "Comfort+".to_string(),
    }
}
