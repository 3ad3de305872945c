//! End-to-end tests for the convert command
//!
//! These tests write small OpenFlights reference files and MyFlightRadar24
//! exports into a temporary directory and run the full conversion through
//! the same entry point the binary uses.

use clap::Parser;
use flightlog_converter::Error;
use flightlog_converter::cli::args::Args;
use flightlog_converter::cli::commands::run_convert;
use flightlog_converter::constants::OUTPUT_COLUMNS;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const AIRPORTS: &str = r#"3797,"John F Kennedy International Airport","New York","United States","JFK","KJFK",40.63980103,-73.77890015,13,-5,"A","America/New_York","airport","OurAirports"
3682,"Hartsfield Jackson Atlanta International Airport","Atlanta","United States","ATL","KATL",33.6367,-84.428101,1026,-5,"A","America/New_York","airport","OurAirports"
507,"London Heathrow Airport","London","United Kingdom","LHR","EGLL",51.4706,-0.461941,83,0,"E","Europe/London","airport","OurAirports"
"#;

const AIRLINES: &str = r#"2009,"Delta Air Lines",\N,"DL","DAL","DELTA","United States","Y"
1355,"British Airways",\N,"BA","BAW","SPEEDBIRD","United Kingdom","Y"
"#;

const EXPORT: &str = r#"Date,Flight number,From,To,Dep time,Arr time,Duration,Airline,Aircraft,Registration,Seat number,Seat type,Flight class,Flight reason,Note
01/15/24,DL123,"New York / John F Kennedy International Airport (JFK/KJFK)","Atlanta / Hartsfield-Jackson Atlanta International Airport (ATL/KATL)",08:00:00,10:30:00,2:30:00,"Delta Air Lines (DL/DAL)","Boeing 737-900 (B739)",N812DN,23B,2,4,1,
01/20/24,BA178,"New York / John F Kennedy International Airport (JFK/KJFK)","London / Heathrow Airport (LHR/EGLL)",22:00:00,10:05:00,7:00:00,"British Airways (BA/BAW)","Boeing 777-200 (B772)",G-VIIA,12K,1,2,1,"Night flight"
"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("airports.dat"), AIRPORTS).unwrap();
        fs::write(dir.path().join("airlines.dat"), AIRLINES).unwrap();
        fs::write(dir.path().join("flights.csv"), EXPORT).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn args(&self, extra: &[&str]) -> Args {
        let infile = self.path("flights.csv");
        let airports = self.path("airports.dat");
        let airlines = self.path("airlines.dat");

        let mut argv: Vec<String> = vec![
            "flightlog-converter".to_string(),
            infile.display().to_string(),
            "--airports".to_string(),
            airports.display().to_string(),
            "--airlines".to_string(),
            airlines.display().to_string(),
            "-q".to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::parse_from(argv)
    }
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let content = fs::read_to_string(path).unwrap();
    content
        .split("\r\n")
        .filter(|line| !line.is_empty())
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}

fn column(rows: &[Vec<String>], row: usize, name: &str) -> String {
    let index = OUTPUT_COLUMNS.iter().position(|c| *c == name).unwrap();
    rows[row][index].clone()
}

#[test]
fn test_convert_writes_default_output_file() {
    let fixture = Fixture::new();

    let stats = run_convert(fixture.args(&[])).unwrap();
    assert_eq!(stats.rows_read, 2);
    assert_eq!(stats.rows_converted, 2);

    let output = fixture.path("flights.atltsv");
    assert!(output.exists());

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], OUTPUT_COLUMNS);
    assert!(rows.iter().all(|row| row.len() == OUTPUT_COLUMNS.len()));

    assert_eq!(column(&rows, 1, "FlightNumber"), "DL123");
    assert_eq!(column(&rows, 1, "OriginCode"), "JFK");
    assert_eq!(column(&rows, 1, "DestinationCode"), "ATL");
    assert_eq!(column(&rows, 1, "STD"), "2024-01-15 08:00");
    assert_eq!(column(&rows, 1, "STA"), "2024-01-15 10:30");
    assert_eq!(column(&rows, 1, "ScheduledDuration"), "2:30");
    assert_eq!(column(&rows, 1, "ATD"), column(&rows, 1, "STD"));
    assert_eq!(column(&rows, 1, "ATA"), column(&rows, 1, "STA"));
    assert_eq!(column(&rows, 1, "SeatTypeCode"), "M");
    assert_eq!(column(&rows, 1, "FlightClassName"), "Premium Economy");
    assert_eq!(column(&rows, 1, "Remark"), "");

    assert_eq!(column(&rows, 2, "FlightNumber"), "BA178");
    assert_eq!(column(&rows, 2, "STA"), "2024-01-21 10:05");
    assert_eq!(column(&rows, 2, "AirlineName"), "British Airways");
    assert_eq!(column(&rows, 2, "EquipmentCode"), "B772");
    assert_eq!(column(&rows, 2, "OperatingCarrierCode"), "BA");
    assert_eq!(column(&rows, 2, "Remark"), "Night flight");

    let distance: f64 = column(&rows, 2, "DistanceInKm").parse().unwrap();
    assert!((5520.0..5580.0).contains(&distance));
}

#[test]
fn test_convert_honours_explicit_output_path() {
    let fixture = Fixture::new();
    let output = fixture.path("custom.tsv");

    run_convert(fixture.args(&["-o", &output.display().to_string()])).unwrap();

    assert!(output.exists());
    assert!(!fixture.path("flights.atltsv").exists());
}

#[test]
fn test_input_column_order_does_not_matter() {
    let fixture = Fixture::new();
    let reordered = "Note,Flight class,Seat type,Seat number,Registration,Aircraft,Airline,Duration,Arr time,Dep time,Date,To,From,Flight number\n\
,4,2,23B,N812DN,\"Boeing 737-900 (B739)\",\"Delta Air Lines (DL/DAL)\",2:30:00,10:30:00,08:00:00,01/15/24,\"Atlanta (ATL/KATL)\",\"New York (JFK/KJFK)\",DL123\n";
    fs::write(fixture.path("flights.csv"), reordered).unwrap();

    run_convert(fixture.args(&[])).unwrap();

    let rows = read_rows(&fixture.path("flights.atltsv"));
    assert_eq!(rows[0], OUTPUT_COLUMNS);
    assert_eq!(column(&rows, 1, "FlightNumber"), "DL123");
    assert_eq!(column(&rows, 1, "OriginCode"), "JFK");
    assert_eq!(column(&rows, 1, "STA"), "2024-01-15 10:30");
}

#[test]
fn test_missing_reference_file_writes_no_output() {
    let fixture = Fixture::new();
    fs::remove_file(fixture.path("airports.dat")).unwrap();

    let error = run_convert(fixture.args(&[])).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<Error>(),
        Some(Error::ReferenceDataMissing { .. })
    ));
    assert!(error.to_string().contains("https://openflights.org/data"));
    assert!(!fixture.path("flights.atltsv").exists());
}

#[test]
fn test_unknown_airline_aborts_without_output() {
    let fixture = Fixture::new();
    let content = EXPORT.replace("BA178", "QQ178");
    fs::write(fixture.path("flights.csv"), content).unwrap();

    let error = run_convert(fixture.args(&[])).unwrap_err();

    match error.downcast_ref::<Error>() {
        Some(Error::Row {
            row, flight_number, ..
        }) => {
            assert_eq!(*row, 2);
            assert_eq!(flight_number, "QQ178");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(format!("{:#}", error).contains("Airline not found: code = QQ"));
    assert!(!fixture.path("flights.atltsv").exists());
}

#[test]
fn test_missing_input_file_is_reported() {
    let fixture = Fixture::new();
    fs::remove_file(fixture.path("flights.csv")).unwrap();

    let error = run_convert(fixture.args(&[])).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<Error>(),
        Some(Error::FileNotFound { .. })
    ));
    assert!(!fixture.path("flights.atltsv").exists());
}
