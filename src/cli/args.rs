//! Command-line argument definitions for the flight log converter
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::Config;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the flight log converter
///
/// Converts MyFlightRadar24 CSV export files to TSV files for import into
/// Air Travel Log.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flightlog-converter",
    version,
    about = "Convert MyFlightRadar24 CSV export files to TSV files for import to Air Travel Log.",
    long_about = "Converts a MyFlightRadar24 CSV export into the tab-separated format imported by \
                  the Air Travel Log app. Airports and airlines are resolved against the OpenFlights \
                  airports.dat and airlines.dat databases (https://openflights.org/data), which must \
                  be present in the working directory unless other locations are given."
)]
pub struct Args {
    /// MyFlightRadar24 CSV file to convert
    #[arg(value_name = "INFILE")]
    pub infile: PathBuf,

    /// Output filename for the Air Travel Log TSV file
    ///
    /// If not specified, the name of the input file will be used with an
    /// .atltsv extension.
    #[arg(
        short = 'o',
        long = "outfile",
        value_name = "OUTFILE",
        help = "Output filename for Air Travel Log TSV file"
    )]
    pub outfile: Option<PathBuf>,

    /// Location of the OpenFlights airports database
    #[arg(
        long = "airports",
        value_name = "PATH",
        help = "Path to airports.dat (default: ./airports.dat)"
    )]
    pub airports: Option<PathBuf>,

    /// Location of the OpenFlights airlines database
    #[arg(
        long = "airlines",
        value_name = "PATH",
        help = "Path to airlines.dat (default: ./airlines.dat)"
    )]
    pub airlines: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long = "no-progress", help = "Disable the progress bar")]
    pub no_progress: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments before any file is read or written
    pub fn validate(&self) -> Result<()> {
        if !self.infile.exists() {
            return Err(Error::file_not_found(self.infile.display().to_string()));
        }

        if let Some(outfile) = &self.outfile {
            if outfile == &self.infile {
                return Err(Error::configuration(format!(
                    "Output file {} would overwrite the input file",
                    outfile.display()
                )));
            }
        }

        Ok(())
    }

    /// Build the run configuration from defaults and command-line overrides
    pub fn to_config(&self) -> Config {
        Config::default().with_overrides(
            self.airports.clone(),
            self.airlines.clone(),
            Some(self.show_progress()),
        )
    }

    /// Resolve the output path, deriving it from the input path if needed
    pub fn output_path(&self, config: &Config) -> PathBuf {
        match &self.outfile {
            Some(path) => path.clone(),
            None => config.default_output_path(&self.infile),
        }
    }

    /// Get the log level filter based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}
