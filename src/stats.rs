//! Series statistics, calendar rollups and sparse histograms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calendar::{DAYS_PER_YEAR, HOURS_PER_YEAR, month_index_of_hour};
use crate::climate::ClimatePoint;

/// Bin width of the dry-bulb and wet-bulb histograms (°C).
pub const TEMPERATURE_BIN_C: f64 = 1.0;
/// Bin width of the relative-humidity histogram (%).
pub const HUMIDITY_BIN_PCT: f64 = 5.0;

/// Summary of an hourly power series (kW per hour).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    /// Highest hourly value (kW).
    pub peak_kw: f64,
    /// Mean over all hours (kW).
    pub average_kw: f64,
    /// Average / peak (%).
    pub load_factor_pct: f64,
    /// Total energy / peak (h).
    pub full_load_hours: f64,
    pub total_kwh: f64,
    pub annual_mwh: f64,
}

impl SeriesStats {
    /// Computes the summary of `series`.
    ///
    /// An empty series, or one whose peak is not positive, yields zeros for
    /// every ratio.
    pub fn from_series(series: &[f64]) -> Self {
        if series.is_empty() {
            return Self::default();
        }

        let total_kwh: f64 = series.iter().sum();
        let peak_kw = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let average_kw = total_kwh / series.len() as f64;
        let (load_factor_pct, full_load_hours) = if peak_kw > 0.0 {
            (average_kw / peak_kw * 100.0, total_kwh / peak_kw)
        } else {
            (0.0, 0.0)
        };

        Self {
            peak_kw,
            average_kw,
            load_factor_pct,
            full_load_hours,
            total_kwh,
            annual_mwh: total_kwh / 1000.0,
        }
    }
}

/// Averages of one month of climate data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyClimate {
    /// Month (1..=12).
    pub month: u8,
    pub hours: usize,
    pub avg_dry_bulb_c: f64,
    pub min_dry_bulb_c: f64,
    pub max_dry_bulb_c: f64,
    pub avg_wet_bulb_c: f64,
    pub avg_relative_humidity_pct: f64,
}

#[derive(Default)]
struct MonthAccumulator {
    hours: usize,
    dry: f64,
    wet: f64,
    rh: f64,
    min: f64,
    max: f64,
}

/// Per-month climate averages keyed by each point's `month` field.
///
/// Ordered by month; months with no points are absent.
pub fn monthly_climate(climate: &[ClimatePoint]) -> Vec<MonthlyClimate> {
    let mut months: BTreeMap<u8, MonthAccumulator> = BTreeMap::new();
    for p in climate {
        let acc = months.entry(p.month).or_insert_with(|| MonthAccumulator {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            ..Default::default()
        });
        acc.hours += 1;
        acc.dry += p.dry_bulb_c;
        acc.wet += p.wet_bulb_c;
        acc.rh += p.relative_humidity_pct;
        acc.min = acc.min.min(p.dry_bulb_c);
        acc.max = acc.max.max(p.dry_bulb_c);
    }

    months
        .into_iter()
        .map(|(month, acc)| {
            let n = acc.hours as f64;
            MonthlyClimate {
                month,
                hours: acc.hours,
                avg_dry_bulb_c: acc.dry / n,
                min_dry_bulb_c: acc.min,
                max_dry_bulb_c: acc.max,
                avg_wet_bulb_c: acc.wet / n,
                avg_relative_humidity_pct: acc.rh / n,
            }
        })
        .collect()
}

/// Energy per calendar month (MWh) of an hourly power series (kW).
///
/// Hour `i` is attributed to the month containing hour `i` of a non-leap
/// year; entries past the end of the year are ignored.
pub fn monthly_energy_mwh(series: &[f64]) -> [f64; 12] {
    let mut months = [0.0; 12];
    for (i, &kw) in series.iter().take(HOURS_PER_YEAR).enumerate() {
        months[month_index_of_hour(i)] += kw / 1000.0;
    }
    months
}

/// Energy per day (kWh) of an hourly power series (kW).
///
/// A trailing partial day is summed over the hours present. At most 365
/// days are produced.
pub fn daily_energy_kwh(series: &[f64]) -> Vec<f64> {
    series
        .chunks(24)
        .take(DAYS_PER_YEAR)
        .map(|day| day.iter().sum())
        .collect()
}

/// One populated histogram bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Lower edge of the bin.
    pub bin: f64,
    pub count: usize,
}

/// Sparse histogram of `values` with bins `floor(v / width) × width`.
///
/// Only populated bins are returned, in ascending order. Non-finite values
/// are skipped. A width that is not a positive finite number yields no bins.
pub fn histogram(values: impl IntoIterator<Item = f64>, bin_width: f64) -> Vec<HistogramBin> {
    if !(bin_width.is_finite() && bin_width > 0.0) {
        return Vec::new();
    }

    let mut bins: BTreeMap<i64, usize> = BTreeMap::new();
    for v in values.into_iter().filter(|v| v.is_finite()) {
        *bins.entry((v / bin_width).floor() as i64).or_default() += 1;
    }

    bins.into_iter()
        .map(|(k, count)| HistogramBin {
            bin: k as f64 * bin_width,
            count,
        })
        .collect()
}

/// Dry-bulb temperature histogram, 1 °C bins.
pub fn dry_bulb_histogram(climate: &[ClimatePoint]) -> Vec<HistogramBin> {
    histogram(climate.iter().map(|p| p.dry_bulb_c), TEMPERATURE_BIN_C)
}

/// Wet-bulb temperature histogram, 1 °C bins.
pub fn wet_bulb_histogram(climate: &[ClimatePoint]) -> Vec<HistogramBin> {
    histogram(climate.iter().map(|p| p.wet_bulb_c), TEMPERATURE_BIN_C)
}

/// Relative-humidity histogram, 5 % bins.
pub fn humidity_histogram(climate: &[ClimatePoint]) -> Vec<HistogramBin> {
    histogram(
        climate.iter().map(|p| p.relative_humidity_pct),
        HUMIDITY_BIN_PCT,
    )
}
