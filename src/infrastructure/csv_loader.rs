// Dataset loading - CSV file to observations, once at startup
use crate::domain::observation::{Observation, EXPECTED_COLUMNS};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use thiserror::Error;

/// Startup-fatal dataset fault: the caller aborts the process with a
/// diagnostic, there is no recovery path.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read dataset file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is missing expected columns: {0}")]
    MissingColumns(String),
    #[error("malformed dataset row: {0}")]
    Malformed(#[from] csv::Error),
}

/// Reads the dataset file and returns its rows in file order.
pub fn load_dataset(path: &str) -> Result<Vec<Observation>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_observations(file)
}

/// Verifies the header row carries every expected column, then
/// deserializes the records. Empty numeric cells become `None`; extra
/// columns are ignored.
pub fn parse_observations<R: Read>(reader: R) -> Result<Vec<Observation>, LoadError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<&str> = EXPECTED_COLUMNS
        .iter()
        .copied()
        .filter(|expected| !headers.iter().any(|h| h == *expected))
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing.join(", ")));
    }

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}
