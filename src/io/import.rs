//! CSV import of hourly load series.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::calendar::HOURS_PER_YEAR;
use crate::error::ImportError;

/// Parses a `hour,value` load CSV into an 8760-entry series (kW).
///
/// The value is taken from the last column of each row, so a bare
/// one-column file works too. A header row, blank lines and rows whose value
/// is not a finite number are skipped. Rows are placed by their position
/// among the valid rows, not by the `hour` column. Negative values clamp to 0. The
/// series is padded with zeros up to 8760 entries and truncated beyond.
///
/// # Errors
///
/// Returns [`ImportError::Malformed`] when no row yields a value.
pub fn parse_load_csv(raw: &str) -> Result<Vec<f64>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let mut series = Vec::with_capacity(HOURS_PER_YEAR);
    let mut skipped = 0_usize;
    let mut clamped = 0_usize;

    for (line, record) in rdr.records().enumerate() {
        let value = record
            .ok()
            .and_then(|r| r.iter().last().and_then(|v| v.parse::<f64>().ok()))
            .filter(|v| v.is_finite());
        let Some(value) = value else {
            debug!("load row {} skipped", line + 1);
            skipped += 1;
            continue;
        };
        if value < 0.0 {
            clamped += 1;
        }
        series.push(value.max(0.0));
    }

    if series.is_empty() {
        return Err(ImportError::Malformed(
            "no valid load rows found".to_string(),
        ));
    }
    if clamped > 0 {
        warn!("{clamped} negative load values clamped to 0 kW");
    }
    debug!("{} load rows read, {skipped} skipped", series.len());
    if series.len() < HOURS_PER_YEAR {
        warn!(
            "load series has {} h, padding with zeros to {HOURS_PER_YEAR} h",
            series.len()
        );
    }
    series.resize(HOURS_PER_YEAR, 0.0);

    Ok(series)
}

/// Reads and parses a load CSV file.
///
/// # Errors
///
/// Returns [`ImportError::Io`] if the file cannot be read, otherwise as
/// [`parse_load_csv`].
pub fn parse_load_path(path: &Path) -> Result<Vec<f64>, ImportError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ImportError::Io(format!("{}: {e}", path.display())))?;
    parse_load_csv(&raw)
}
