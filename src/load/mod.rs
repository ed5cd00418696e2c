//! Thermal load profiles: parametric description and named standard shapes.

pub mod synth;

use serde::{Deserialize, Serialize};

pub use synth::synthesize_annual_load;

/// Compact description of an annual thermal load.
///
/// Hourly load is `peak_power_kw × shape[hour] × weekly_factor[dow] ×
/// monthly_factor[month]`, where the shape is the weekend shape on days 5
/// and 6 of the repeating week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadProfileParameters {
    /// Peak thermal power (kW).
    pub peak_power_kw: f64,
    /// Fraction of peak per hour on weekdays.
    pub weekday_shape: [f64; 24],
    /// Fraction of peak per hour on weekend days.
    pub weekend_shape: [f64; 24],
    /// Multiplier per day of the repeating week (index 0 = first day).
    pub weekly_factor: [f64; 7],
    /// Multiplier per month (index 0 = January).
    pub monthly_factor: [f64; 12],
}

impl LoadProfileParameters {
    /// Creates parameters from a standard profile scaled to `peak_power_kw`.
    pub fn from_standard(peak_power_kw: f64, profile: StandardProfile) -> Self {
        let mut params = Self {
            peak_power_kw,
            weekday_shape: [0.0; 24],
            weekend_shape: [0.0; 24],
            weekly_factor: [1.0; 7],
            monthly_factor: [1.0; 12],
        };
        params.apply_standard(profile);
        params
    }

    /// Replaces all four shape arrays with those of `profile`.
    ///
    /// The peak power is kept.
    pub fn apply_standard(&mut self, profile: StandardProfile) {
        let (weekday, weekend, weekly, monthly) = profile.arrays();
        self.weekday_shape = weekday;
        self.weekend_shape = weekend;
        self.weekly_factor = weekly;
        self.monthly_factor = monthly;
    }
}

/// Named building-use profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardProfile {
    Office,
    Retail,
    Hotel,
    Hospital,
    Residential,
    Industrial,
}

type ProfileArrays = ([f64; 24], [f64; 24], [f64; 7], [f64; 12]);

const COOLING_SEASON: [f64; 12] = [0.2, 0.2, 0.35, 0.5, 0.7, 0.9, 1.0, 1.0, 0.8, 0.5, 0.3, 0.2];

impl StandardProfile {
    /// Names accepted by [`StandardProfile::from_name`].
    pub const NAMES: &[&str] = &[
        "office",
        "retail",
        "hotel",
        "hospital",
        "residential",
        "industrial",
    ];

    /// Looks up a profile by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "office" => Some(Self::Office),
            "retail" => Some(Self::Retail),
            "hotel" => Some(Self::Hotel),
            "hospital" => Some(Self::Hospital),
            "residential" => Some(Self::Residential),
            "industrial" => Some(Self::Industrial),
            _ => None,
        }
    }

    fn arrays(self) -> ProfileArrays {
        match self {
            Self::Office => (
                [
                    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.3, 0.7, 0.9, 1.0, 1.0, 1.0, 0.9, 1.0,
                    1.0, 0.95, 0.8, 0.5, 0.2, 0.0, 0.0, 0.0, 0.0,
                ],
                [
                    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2,
                    0.2, 0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
                ],
                [1.0, 1.0, 1.0, 1.0, 0.95, 1.0, 1.0],
                COOLING_SEASON,
            ),
            Self::Retail => (
                [
                    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.4, 0.8, 0.9, 1.0, 1.0, 1.0, 1.0,
                    1.0, 1.0, 1.0, 0.9, 0.8, 0.5, 0.1, 0.0, 0.0,
                ],
                [
                    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 0.7, 0.9, 1.0, 1.0, 1.0, 1.0,
                    1.0, 1.0, 0.9, 0.8, 0.6, 0.3, 0.0, 0.0, 0.0,
                ],
                [0.9, 0.9, 0.9, 0.95, 1.0, 1.0, 0.8],
                COOLING_SEASON,
            ),
            Self::Hotel => {
                let day = [
                    0.5, 0.45, 0.4, 0.4, 0.4, 0.45, 0.6, 0.8, 0.8, 0.7, 0.65, 0.65, 0.7, 0.7,
                    0.65, 0.65, 0.7, 0.8, 0.9, 1.0, 1.0, 0.9, 0.75, 0.6,
                ];
                (
                    day,
                    day,
                    [0.9, 0.9, 0.9, 0.95, 1.0, 1.0, 0.95],
                    [0.3, 0.3, 0.4, 0.55, 0.75, 0.9, 1.0, 1.0, 0.85, 0.55, 0.35, 0.3],
                )
            }
            Self::Hospital => (
                [
                    0.7, 0.65, 0.65, 0.65, 0.65, 0.7, 0.8, 0.9, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
                    1.0, 1.0, 0.95, 0.9, 0.85, 0.8, 0.8, 0.75, 0.75, 0.7,
                ],
                [
                    0.7, 0.65, 0.65, 0.65, 0.65, 0.7, 0.75, 0.8, 0.85, 0.85, 0.85, 0.85, 0.85,
                    0.85, 0.85, 0.85, 0.85, 0.8, 0.8, 0.8, 0.75, 0.75, 0.7, 0.7,
                ],
                [1.0; 7],
                [0.4, 0.4, 0.5, 0.6, 0.8, 0.95, 1.0, 1.0, 0.9, 0.65, 0.45, 0.4],
            ),
            Self::Residential => (
                [
                    0.3, 0.25, 0.2, 0.2, 0.2, 0.25, 0.4, 0.6, 0.5, 0.3, 0.25, 0.25, 0.3, 0.3,
                    0.3, 0.35, 0.45, 0.6, 0.8, 1.0, 1.0, 0.9, 0.7, 0.45,
                ],
                [
                    0.35, 0.3, 0.25, 0.2, 0.2, 0.2, 0.3, 0.45, 0.6, 0.7, 0.7, 0.7, 0.75, 0.75,
                    0.7, 0.7, 0.7, 0.75, 0.85, 1.0, 1.0, 0.9, 0.7, 0.5,
                ],
                [1.0; 7],
                [0.2, 0.2, 0.3, 0.45, 0.65, 0.9, 1.0, 1.0, 0.75, 0.45, 0.25, 0.2],
            ),
            Self::Industrial => (
                [
                    0.8, 0.8, 0.8, 0.8, 0.8, 0.8, 0.9, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
                    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.9, 0.8,
                ],
                [0.5; 24],
                [1.0; 7],
                // August shutdown
                [0.8, 0.8, 0.85, 0.9, 0.95, 1.0, 1.0, 0.7, 1.0, 0.95, 0.85, 0.8],
            ),
        }
    }
}
