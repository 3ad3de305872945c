//! Configuration management and validation.
//!
//! Provides the configuration structure for a conversion run: where the
//! OpenFlights reference data lives, how the output path is derived and
//! which terminal features are enabled.

use crate::constants::{
    DEFAULT_AIRLINES_FILE, DEFAULT_AIRPORTS_FILE, OUTPUT_EXTENSION, REFERENCE_DELIMITER,
};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reference data locations and format
#[derive(Debug, Clone)]
pub struct ReferenceDataConfig {
    /// Path to the OpenFlights `airports.dat` file
    pub airports_path: PathBuf,

    /// Path to the OpenFlights `airlines.dat` file
    pub airlines_path: PathBuf,

    /// Field delimiter of both reference files
    pub delimiter: u8,
}

impl Default for ReferenceDataConfig {
    fn default() -> Self {
        Self {
            airports_path: PathBuf::from(DEFAULT_AIRPORTS_FILE),
            airlines_path: PathBuf::from(DEFAULT_AIRLINES_FILE),
            delimiter: REFERENCE_DELIMITER,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Extension used when deriving the output path from the input path
    pub extension: String,

    /// Show a progress bar while converting rows
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: OUTPUT_EXTENSION.to_string(),
            show_progress: true,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub reference_data: ReferenceDataConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Apply command-line overrides on top of the defaults
    pub fn with_overrides(
        mut self,
        airports_path: Option<PathBuf>,
        airlines_path: Option<PathBuf>,
        show_progress: Option<bool>,
    ) -> Self {
        if let Some(path) = airports_path {
            debug!("Overriding airports path: {}", path.display());
            self.reference_data.airports_path = path;
        }
        if let Some(path) = airlines_path {
            debug!("Overriding airlines path: {}", path.display());
            self.reference_data.airlines_path = path;
        }
        if let Some(show) = show_progress {
            self.output.show_progress = show;
        }
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.reference_data.airports_path.as_os_str().is_empty() {
            return Err(Error::configuration("Airports path cannot be empty"));
        }

        if self.reference_data.airlines_path.as_os_str().is_empty() {
            return Err(Error::configuration("Airlines path cannot be empty"));
        }

        if self.output.extension.trim().is_empty() || self.output.extension.contains('/') {
            return Err(Error::configuration(format!(
                "Invalid output extension '{}'",
                self.output.extension
            )));
        }

        if !self.reference_data.delimiter.is_ascii() {
            return Err(Error::configuration(
                "Reference data delimiter must be an ASCII character",
            ));
        }

        Ok(())
    }

    /// Derive the output path for an input file by replacing its extension
    pub fn default_output_path(&self, input_path: &Path) -> PathBuf {
        input_path.with_extension(&self.output.extension)
    }
}
