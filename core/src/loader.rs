//! Dataset ingestion
//!
//! Parses the launch-records CSV into the in-memory dataset the store
//! owns. Loading happens once at startup; any schema problem here is
//! fatal and surfaces as a descriptive [`LoadError`], the only failure
//! class in the system. Queries never fail.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::record::LaunchRecord;

/// Column headers the dataset must carry
const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

/// Load-time failure. All variants abort startup; there is no partial
/// load and no query-time counterpart.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Dataset file could not be opened or read
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// A required column is absent from the header row
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A row failed to parse into a launch record
    #[error("malformed dataset row {line}: {source}")]
    Malformed {
        /// 1-based data row number (header excluded)
        line: usize,
        source: csv::Error,
    },

    /// A row violates the non-negative payload invariant
    #[error("dataset row {line} has negative payload mass {value} kg")]
    NegativePayload {
        /// 1-based data row number (header excluded)
        line: usize,
        value: f64,
    },
}

/// Load launch records from a CSV file on disk.
pub fn load_csv_path<P: AsRef<Path>>(path: P) -> Result<Vec<LaunchRecord>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = load_csv_reader(file)?;
    info!("loaded {} launch records from {}", records.len(), path.display());
    Ok(records)
}

/// Load launch records from any CSV source.
///
/// Validates that every required column is present before reading rows,
/// so a schema failure names the missing column rather than surfacing
/// as a per-row parse error.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<Vec<LaunchRecord>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers().map_err(|source| LoadError::Malformed {
        line: 0,
        source,
    })?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<LaunchRecord>().enumerate() {
        let line = index + 1;
        let record = row.map_err(|source| LoadError::Malformed { line, source })?;
        if record.payload_mass_kg < 0.0 {
            return Err(LoadError::NegativePayload {
                line,
                value: record.payload_mass_kg,
            });
        }
        records.push(record);
    }
    Ok(records)
}
