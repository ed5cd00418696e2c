//! Annual climate series: data shapes, region table, synthesis and import.
//!
//! - [`ClimatePoint`]: one hour of outdoor conditions
//! - [`RegionClimateProfile`]: the three numbers the synthetic model needs
//! - [`synthetic`]: seeded seasonal + diurnal generator
//! - [`epw`]: parser for line-oriented hourly weather text
//! - [`psychro`]: wet-bulb estimate

pub mod epw;
pub mod psychro;
pub mod synthetic;

use serde::{Deserialize, Serialize};

use crate::calendar::HOURS_PER_YEAR;

pub use epw::{parse_weather_file, parse_weather_path};
pub use psychro::wet_bulb;
pub use synthetic::{generate_annual_weather, generate_annual_weather_with};

/// One hour of outdoor conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimatePoint {
    /// Hour of year (0..8760).
    pub hour_index: usize,
    /// Month (1..=12).
    pub month: u8,
    /// Day of month (1..=31).
    pub day: u8,
    /// Hour of day (0..24).
    pub hour: u8,
    /// Dry-bulb temperature (°C).
    pub dry_bulb_c: f64,
    /// Relative humidity (%), 0..=100.
    pub relative_humidity_pct: f64,
    /// Wet-bulb temperature (°C), derived from the two above.
    pub wet_bulb_c: f64,
}

/// Whether `series` covers a full simulated year.
pub fn is_complete(series: &[ClimatePoint]) -> bool {
    series.len() >= HOURS_PER_YEAR
}

/// Seasonal envelope of a region used by the synthetic generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionClimateProfile {
    /// Coldest monthly mean temperature (°C).
    pub min_temp_c: f64,
    /// Warmest monthly mean temperature (°C).
    pub max_temp_c: f64,
    /// Annual mean relative humidity (%).
    pub avg_relative_humidity_pct: f64,
}

/// Built-in region table.
pub const REGIONS: &[(&str, RegionClimateProfile)] = &[
    (
        "mediterranean",
        RegionClimateProfile {
            min_temp_c: 6.0,
            max_temp_c: 30.0,
            avg_relative_humidity_pct: 65.0,
        },
    ),
    (
        "continental",
        RegionClimateProfile {
            min_temp_c: -2.0,
            max_temp_c: 28.0,
            avg_relative_humidity_pct: 70.0,
        },
    ),
    (
        "alpine",
        RegionClimateProfile {
            min_temp_c: -8.0,
            max_temp_c: 20.0,
            avg_relative_humidity_pct: 72.0,
        },
    ),
    (
        "oceanic",
        RegionClimateProfile {
            min_temp_c: 4.0,
            max_temp_c: 21.0,
            avg_relative_humidity_pct: 80.0,
        },
    ),
    (
        "subtropical",
        RegionClimateProfile {
            min_temp_c: 14.0,
            max_temp_c: 33.0,
            avg_relative_humidity_pct: 75.0,
        },
    ),
    (
        "arid",
        RegionClimateProfile {
            min_temp_c: 10.0,
            max_temp_c: 40.0,
            avg_relative_humidity_pct: 30.0,
        },
    ),
];

/// Looks up a region in [`REGIONS`] by name.
pub fn region(name: &str) -> Option<RegionClimateProfile> {
    REGIONS
        .iter()
        .find_map(|(n, p)| if *n == name { Some(*p) } else { None })
}
