//! Shared test utilities and fixtures for reference data tests

use std::fs;
use std::path::{Path, PathBuf};

pub mod registry_tests;

/// Airports used across the test suite, in OpenFlights `airports.dat` layout
pub const TEST_AIRPORTS: &str = r#"3797,"John F Kennedy International Airport","New York","United States","JFK","KJFK",40.63980103,-73.77890015,13,-5,"A","America/New_York","airport","OurAirports"
3682,"Hartsfield Jackson Atlanta International Airport","Atlanta","United States","ATL","KATL",33.6367,-84.428101,1026,-5,"A","America/New_York","airport","OurAirports"
507,"London Heathrow Airport","London","United Kingdom","LHR","EGLL",51.4706,-0.461941,83,0,"E","Europe/London","airport","OurAirports"
2359,"Tokyo Haneda International Airport","Tokyo","Japan","HND","RJTT",35.552299,139.779999,35,9,"U","Asia/Tokyo","airport","OurAirports"
"#;

/// Airlines used across the test suite, in OpenFlights `airlines.dat` layout
pub const TEST_AIRLINES: &str = r#"2009,"Delta Air Lines",\N,"DL","DAL","DELTA","United States","Y"
1355,"British Airways",\N,"BA","BAW","SPEEDBIRD","United Kingdom","Y"
4385,"Ryanair Sun",\N,"","RYS","BUZZ","Poland","Y"
"#;

/// Write a reference file fixture into a directory
pub fn write_fixture(dir: &Path, file_name: &str, content: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, content)?;
    Ok(path)
}
