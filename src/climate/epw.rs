//! Parser for line-oriented hourly weather text (EPW-style columns).
//!
//! Data rows are comma-separated with more than 30 fields. Only five columns
//! are read (0-indexed):
//!
//! | column | field                  |
//! |--------|------------------------|
//! | 1      | month (1-12)           |
//! | 2      | day of month           |
//! | 3      | hour (1-24)            |
//! | 6      | dry-bulb temperature °C|
//! | 8      | relative humidity %    |
//!
//! Header lines and rows that fail to parse are skipped, not fatal.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use super::ClimatePoint;
use super::psychro::wet_bulb;
use crate::calendar::HOURS_PER_YEAR;
use crate::error::ImportError;

/// Minimum number of comma-separated fields in a data row.
const MIN_FIELDS: usize = 31;

const COL_MONTH: usize = 1;
const COL_DAY: usize = 2;
const COL_HOUR: usize = 3;
const COL_DRY_BULB: usize = 6;
const COL_RELATIVE_HUMIDITY: usize = 8;

/// Parses hourly weather text into a climate series.
///
/// `hour_index` is the running index of accepted rows, not the source hour.
/// At most 8760 points are returned. Source hours 1..=24 become hours of day
/// 0..=23.
///
/// # Errors
///
/// Returns [`ImportError::Malformed`] when no row could be parsed.
pub fn parse_weather_file(raw: &str) -> Result<Vec<ClimatePoint>, ImportError> {
    let mut series = Vec::with_capacity(HOURS_PER_YEAR);
    let mut skipped = 0usize;

    for (line_no, line) in raw.lines().enumerate() {
        if series.len() == HOURS_PER_YEAR {
            break;
        }
        match parse_row(line, series.len()) {
            Some(point) => series.push(point),
            None => {
                skipped += 1;
                debug!("weather import: skipping line {}", line_no + 1);
            }
        }
    }

    if series.is_empty() {
        return Err(ImportError::Malformed(format!(
            "no valid weather rows (expected at least {MIN_FIELDS} comma-separated fields \
             with numeric month, day, hour, dry-bulb and humidity)"
        )));
    }
    if series.len() < HOURS_PER_YEAR {
        warn!(
            "weather import: {} hourly rows parsed, a full year needs {HOURS_PER_YEAR}",
            series.len()
        );
    }
    debug!(
        "weather import: {} rows accepted, {skipped} skipped",
        series.len()
    );

    Ok(series)
}

/// Reads and parses a weather file from disk.
///
/// # Errors
///
/// Returns [`ImportError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_weather_file`].
pub fn parse_weather_path(path: &Path) -> Result<Vec<ClimatePoint>, ImportError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ImportError::Io(format!("\"{}\": {e}", path.display())))?;
    parse_weather_file(&raw)
}

fn parse_row(line: &str, hour_index: usize) -> Option<ClimatePoint> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let month: u8 = fields[COL_MONTH].trim().parse().ok()?;
    let day: u8 = fields[COL_DAY].trim().parse().ok()?;
    let hour: u8 = fields[COL_HOUR].trim().parse().ok()?;
    let dry_bulb_c: f64 = fields[COL_DRY_BULB].trim().parse().ok()?;
    let rh: f64 = fields[COL_RELATIVE_HUMIDITY].trim().parse().ok()?;

    if !(1..=12).contains(&month) || !dry_bulb_c.is_finite() || !rh.is_finite() {
        return None;
    }

    let relative_humidity_pct = rh.clamp(0.0, 100.0);
    Some(ClimatePoint {
        hour_index,
        month,
        day,
        hour: hour.saturating_sub(1),
        dry_bulb_c,
        relative_humidity_pct,
        wet_bulb_c: wet_bulb(dry_bulb_c, relative_humidity_pct),
    })
}
