//! Conversion statistics and result structures

use crate::app::models::AirTravelLogRecord;
use std::collections::BTreeSet;

/// Statistics for a conversion run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionStats {
    /// Number of input rows read
    pub rows_read: usize,
    /// Number of output rows produced
    pub rows_converted: usize,
    /// Sum of great-circle distances over all flights
    pub total_distance_km: f64,
    /// Distinct airport codes seen as origin or destination
    pub airports_visited: BTreeSet<String>,
    /// Distinct airline codes seen
    pub airlines_flown: BTreeSet<String>,
}

impl ConversionStats {
    /// Create new empty conversion statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a converted row into the statistics
    pub fn record(&mut self, row: &AirTravelLogRecord) {
        self.rows_converted += 1;
        self.total_distance_km += row.distance_in_km;
        self.airports_visited.insert(row.origin_code.clone());
        self.airports_visited.insert(row.destination_code.clone());
        self.airlines_flown.insert(row.airline_code.clone());
    }

    /// Average flight distance in kilometres
    pub fn average_distance_km(&self) -> f64 {
        if self.rows_converted == 0 {
            0.0
        } else {
            self.total_distance_km / self.rows_converted as f64
        }
    }

    /// Get a summary string of the conversion
    pub fn summary(&self) -> String {
        format!(
            "Converted {}/{} flights, {:.0} km total, {} airports, {} airlines",
            self.rows_converted,
            self.rows_read,
            self.total_distance_km,
            self.airports_visited.len(),
            self.airlines_flown.len()
        )
    }
}

/// Converted rows together with the statistics of the run
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Output rows in input order
    pub records: Vec<AirTravelLogRecord>,
    pub stats: ConversionStats,
}

impl ConversionResult {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
