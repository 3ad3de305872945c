//! Reference data service for O(1) airport and airline lookups
//!
//! This module loads the OpenFlights `airports.dat` and `airlines.dat`
//! databases into memory once and provides point lookups by code. The
//! registries are immutable after loading and are passed by reference into
//! the converter.

use crate::app::models::{Airline, Airport};
use crate::config::ReferenceDataConfig;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod loader;
pub mod metadata;

#[cfg(test)]
pub mod tests;

pub use metadata::LoadStats;

/// Airport registry keyed by ICAO code
#[derive(Debug, Clone)]
pub struct AirportRegistry {
    /// Airports indexed by ICAO code
    pub(crate) airports: HashMap<String, Airport>,

    /// File the registry was loaded from
    pub(crate) source_path: PathBuf,
}

impl AirportRegistry {
    /// Create a new empty airport registry
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            airports: HashMap::new(),
            source_path,
        }
    }

    /// Build a registry from already-parsed airports
    ///
    /// Later airports with the same ICAO code replace earlier ones.
    pub fn from_airports(
        source_path: PathBuf,
        airports: impl IntoIterator<Item = Airport>,
    ) -> (Self, LoadStats) {
        let mut registry = Self::new(source_path);
        let mut stats = LoadStats::new();

        for airport in airports {
            stats.rows_read += 1;
            if registry
                .airports
                .insert(airport.icao.clone(), airport)
                .is_some()
            {
                stats.duplicate_keys += 1;
            }
        }
        stats.keys_indexed = registry.airports.len();

        (registry, stats)
    }

    /// Get an airport by ICAO code
    pub fn get(&self, icao: &str) -> Result<&Airport> {
        self.airports
            .get(icao)
            .ok_or_else(|| Error::airport_not_found(icao))
    }

    /// Check if an airport exists in the registry
    pub fn contains(&self, icao: &str) -> bool {
        self.airports.contains_key(icao)
    }

    /// Number of indexed airports
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

/// Airline registry keyed by IATA and ICAO code
///
/// Each airline is stored once; the index maps every key to its record so
/// that lookups by IATA and ICAO code return the same record.
#[derive(Debug, Clone)]
pub struct AirlineRegistry {
    pub(crate) airlines: Vec<Airline>,

    /// Code -> position in `airlines`
    pub(crate) index: HashMap<String, usize>,

    pub(crate) source_path: PathBuf,
}

impl AirlineRegistry {
    /// Create a new empty airline registry
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            airlines: Vec::new(),
            index: HashMap::new(),
            source_path,
        }
    }

    /// Build a registry from already-parsed airlines
    ///
    /// Airlines are indexed by IATA code when it is non-empty and always by
    /// ICAO code. Later airlines with the same key replace earlier ones.
    pub fn from_airlines(
        source_path: PathBuf,
        airlines: impl IntoIterator<Item = Airline>,
    ) -> (Self, LoadStats) {
        let mut registry = Self::new(source_path);
        let mut stats = LoadStats::new();

        for airline in airlines {
            stats.rows_read += 1;
            let position = registry.airlines.len();

            if !airline.iata.is_empty()
                && registry.index.insert(airline.iata.clone(), position).is_some()
            {
                stats.duplicate_keys += 1;
            }
            if registry
                .index
                .insert(airline.icao.clone(), position)
                .is_some()
            {
                stats.duplicate_keys += 1;
            }

            registry.airlines.push(airline);
        }
        stats.keys_indexed = registry.index.len();

        (registry, stats)
    }

    /// Get an airline by IATA or ICAO code
    pub fn get(&self, code: &str) -> Result<&Airline> {
        self.index
            .get(code)
            .map(|&position| &self.airlines[position])
            .ok_or_else(|| Error::airline_not_found(code))
    }

    /// Check if a code is indexed
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Number of indexed codes
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}

/// Both OpenFlights databases, loaded once per run
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub airports: AirportRegistry,
    pub airlines: AirlineRegistry,
}

impl ReferenceData {
    /// Load airports and airlines from the configured locations
    ///
    /// # Errors
    /// * Returns `Error::ReferenceDataMissing` if either file does not exist
    /// * Returns `Error::CsvParsing` if either file cannot be read as CSV
    pub fn load(config: &ReferenceDataConfig) -> Result<Self> {
        let (airports, airport_stats) =
            AirportRegistry::load(&config.airports_path, config.delimiter)?;
        info!("Airports: {}", airport_stats.summary());

        let (airlines, airline_stats) =
            AirlineRegistry::load(&config.airlines_path, config.delimiter)?;
        info!("Airlines: {}", airline_stats.summary());

        Ok(Self { airports, airlines })
    }
}
