//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::sim::{OperatingMode, SeasonalReport};
use crate::stats::{HistogramBin, MonthlyClimate, SeriesStats};

/// Headline figures of the run.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub scenario: String,
    pub operating_mode: OperatingMode,
    pub report: SeasonalReport,
    /// Statistics of the thermal load series.
    pub load: SeriesStats,
}

/// One month of climate and energy figures.
#[derive(Debug, Serialize)]
pub struct MonthlyRecord {
    /// Month (1..=12).
    pub month: u8,
    /// Climate averages; absent when the series has no hours in this month.
    pub climate: Option<MonthlyClimate>,
    pub load_mwh: f64,
    pub electrical_mwh: f64,
}

/// Climate distributions.
#[derive(Debug, Serialize)]
pub struct HistogramsResponse {
    /// 1 °C bins.
    pub dry_bulb_c: Vec<HistogramBin>,
    /// 1 °C bins.
    pub wet_bulb_c: Vec<HistogramBin>,
    /// 5 % bins.
    pub relative_humidity_pct: Vec<HistogramBin>,
}

/// Optional range and stride for the hourly endpoint.
#[derive(Debug, Deserialize)]
pub struct HourlyQuery {
    /// First hour (inclusive).
    pub from: Option<usize>,
    /// Last hour (inclusive).
    pub to: Option<usize>,
    /// Keep every `stride`-th hour of the range; defaults to the scenario's
    /// sample stride.
    pub stride: Option<usize>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
