//! CSV export for hourly simulation records and load series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::HourlyPerformance;

/// Column header of the hourly performance export.
const HOURLY_HEADER: &str = "hour,outdoor_temp_c,load_kw,thermal_output_kw,load_ratio_pct,\
                             part_load_factor,temp_correction,real_efficiency,\
                             electrical_input_kw";

/// Column header of the load series export.
const LOAD_HEADER: [&str; 2] = ["hour", "load_kw"];

/// Exports hourly records to a CSV file at `path`.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_hourly_csv(rows: &[HourlyPerformance], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_hourly_csv(rows, io::BufWriter::new(file))
}

/// Writes hourly records as CSV to any writer.
///
/// One header row, then one row per record in the given order. Output is
/// deterministic for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_hourly_csv(rows: &[HourlyPerformance], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HOURLY_HEADER.split(',').map(str::trim))?;

    for h in rows {
        wtr.write_record(&[
            h.hour_index.to_string(),
            format!("{:.1}", h.outdoor_temp_c),
            format!("{:.3}", h.load_kw),
            format!("{:.3}", h.thermal_output_kw),
            format!("{:.2}", h.load_ratio_pct),
            format!("{:.4}", h.part_load_factor),
            format!("{:.4}", h.temp_correction),
            format!("{:.4}", h.real_efficiency),
            format!("{:.4}", h.electrical_input_kw),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports a load series to a CSV file at `path`.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_load_csv(load: &[f64], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_load_csv(load, io::BufWriter::new(file))
}

/// Writes a load series as `hour,load_kw` rows, readable by
/// [`parse_load_csv`](crate::io::import::parse_load_csv).
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_load_csv(load: &[f64], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(LOAD_HEADER)?;
    for (i, kw) in load.iter().enumerate() {
        wtr.write_record(&[i.to_string(), format!("{kw:.3}")])?;
    }
    wtr.flush()?;
    Ok(())
}
