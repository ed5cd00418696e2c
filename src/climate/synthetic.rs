//! Synthetic hourly climate from a region's seasonal envelope.

use std::f64::consts::PI;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::psychro::wet_bulb;
use super::{ClimatePoint, RegionClimateProfile};
use crate::calendar::{HOURS_PER_YEAR, YearClock};

/// Amplitude of the daily temperature swing (°C).
const DIURNAL_TEMP_AMPLITUDE_C: f64 = 5.0;
/// Amplitude of the daily humidity swing (% RH), opposite in phase to temperature.
const DIURNAL_RH_AMPLITUDE_PCT: f64 = 15.0;
/// Half-width of the uniform temperature noise (°C).
const TEMP_NOISE_C: f64 = 1.0;
/// Half-width of the uniform humidity noise (% RH).
const RH_NOISE_PCT: f64 = 2.0;
/// Zero-based month of the seasonal temperature peak.
const WARM_MONTH_INDEX: f64 = 7.0;
/// Hour of day at which the diurnal sine crosses zero on the way up.
const DIURNAL_PHASE_HOUR: f64 = 8.0;

/// Illustrative (not measured) climate generator.
///
/// Each hour combines a cosine seasonal envelope between the region's
/// minimum and maximum temperature, a sine diurnal swing, and uniform noise.
/// Output is reproducible only for a fixed seed.
#[derive(Debug, Clone)]
pub struct WeatherGenerator {
    /// Region envelope driving the seasonal curve.
    pub profile: RegionClimateProfile,

    /// Random number generator for the noise terms.
    rng: StdRng,
}

impl WeatherGenerator {
    /// Creates a generator for `profile` with a seeded random source.
    pub fn new(profile: RegionClimateProfile, seed: u64) -> Self {
        Self {
            profile,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produces one full year (8760 points).
    pub fn generate(&mut self) -> Vec<ClimatePoint> {
        generate_annual_weather_with(&self.profile, &mut self.rng)
    }
}

/// Generates a synthetic year for `profile` seeded with `seed`.
///
/// # Examples
///
/// ```
/// use chiller_sim::climate::{generate_annual_weather, region};
///
/// let profile = region("mediterranean").unwrap();
/// let year = generate_annual_weather(&profile, 7);
/// assert_eq!(year.len(), 8760);
/// ```
pub fn generate_annual_weather(profile: &RegionClimateProfile, seed: u64) -> Vec<ClimatePoint> {
    WeatherGenerator::new(*profile, seed).generate()
}

/// Generates a synthetic year drawing noise from `rng`.
pub fn generate_annual_weather_with<R: Rng>(
    profile: &RegionClimateProfile,
    rng: &mut R,
) -> Vec<ClimatePoint> {
    let span = profile.max_temp_c - profile.min_temp_c;
    let mut series = Vec::with_capacity(HOURS_PER_YEAR);

    YearClock::new().run(|h| {
        let seasonal = ((h.month_index as f64 - WARM_MONTH_INDEX) * PI / 6.0).cos();
        let monthly_avg = profile.min_temp_c + span * (seasonal + 1.0) / 2.0;
        let diurnal = ((h.hour_of_day as f64 - DIURNAL_PHASE_HOUR) * PI / 12.0).sin();

        let dry_bulb = monthly_avg
            + DIURNAL_TEMP_AMPLITUDE_C * diurnal
            + rng.random_range(-TEMP_NOISE_C..TEMP_NOISE_C);
        let rh = (profile.avg_relative_humidity_pct - DIURNAL_RH_AMPLITUDE_PCT * diurnal
            + rng.random_range(-RH_NOISE_PCT..RH_NOISE_PCT))
        .clamp(0.0, 100.0);
        let wet = wet_bulb(dry_bulb, rh);

        series.push(ClimatePoint {
            hour_index: h.hour_index,
            month: h.month(),
            day: h.day(),
            hour: h.hour_of_day as u8,
            dry_bulb_c: round1(dry_bulb),
            relative_humidity_pct: round1(rh),
            wet_bulb_c: round1(wet),
        });
    });

    series
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
