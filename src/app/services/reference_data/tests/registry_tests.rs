//! Tests for registry indexing and lookups

use crate::Error;
use crate::app::models::{Airline, Airport};
use crate::app::services::reference_data::{AirlineRegistry, AirportRegistry};
use std::path::PathBuf;

fn airport(id: &str, icao: &str, name: &str) -> Airport {
    Airport {
        id: id.to_string(),
        name: name.to_string(),
        city: "City".to_string(),
        country: "Country".to_string(),
        iata: "\\N".to_string(),
        icao: icao.to_string(),
        latitude: "0".to_string(),
        longitude: "0".to_string(),
        altitude: "0".to_string(),
        offset: "0".to_string(),
        dst: "U".to_string(),
        timezone: "UTC".to_string(),
        airport_type: "airport".to_string(),
        source: "Test".to_string(),
    }
}

fn airline(id: &str, iata: &str, icao: &str, name: &str) -> Airline {
    Airline {
        id: id.to_string(),
        name: name.to_string(),
        alias: "\\N".to_string(),
        iata: iata.to_string(),
        icao: icao.to_string(),
        callsign: "\\N".to_string(),
        country: "Country".to_string(),
        active: "Y".to_string(),
    }
}

#[test]
fn test_airport_registry_new_is_empty() {
    let registry = AirportRegistry::new(PathBuf::from("airports.dat"));
    assert!(registry.is_empty());
    assert_eq!(registry.source_path(), PathBuf::from("airports.dat").as_path());
}

#[test]
fn test_duplicate_airport_icao_later_row_wins() {
    let (registry, stats) = AirportRegistry::from_airports(
        PathBuf::from("airports.dat"),
        vec![
            airport("1", "XAAA", "First"),
            airport("2", "XBBB", "Other"),
            airport("3", "XAAA", "Second"),
        ],
    );

    assert_eq!(stats.rows_read, 3);
    assert_eq!(stats.keys_indexed, 2);
    assert_eq!(stats.duplicate_keys, 1);
    assert_eq!(registry.get("XAAA").unwrap().name, "Second");
}

#[test]
fn test_unknown_airport_fails() {
    let (registry, _) =
        AirportRegistry::from_airports(PathBuf::new(), vec![airport("1", "XAAA", "A")]);

    match registry.get("ZZZZ") {
        Err(Error::AirportNotFound { icao }) => assert_eq!(icao, "ZZZZ"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_airline_reachable_under_both_codes() {
    let (registry, _) = AirlineRegistry::from_airlines(
        PathBuf::new(),
        vec![airline("1", "AA", "BBBB", "Test Air")],
    );

    let by_iata = registry.get("AA").unwrap();
    let by_icao = registry.get("BBBB").unwrap();
    assert_eq!(by_iata, by_icao);
    assert!(std::ptr::eq(by_iata, by_icao));
}

#[test]
fn test_duplicate_airline_codes_later_row_wins() {
    let (registry, stats) = AirlineRegistry::from_airlines(
        PathBuf::new(),
        vec![
            airline("1", "XX", "XXA", "Defunct Air"),
            airline("2", "XX", "XXB", "Current Air"),
        ],
    );

    assert_eq!(stats.duplicate_keys, 1);
    assert_eq!(registry.get("XX").unwrap().name, "Current Air");
    // The ICAO key of the replaced airline still resolves to it
    assert_eq!(registry.get("XXA").unwrap().name, "Defunct Air");
}

#[test]
fn test_unknown_airline_fails() {
    let registry = AirlineRegistry::new(PathBuf::new());
    assert!(matches!(
        registry.get("QQ"),
        Err(Error::AirlineNotFound { .. })
    ));
}
