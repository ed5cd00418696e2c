//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::climate::{self, REGIONS, RegionClimateProfile};
use crate::equipment::{
    CondensationMedium, EquipmentRecord, MAX_PART_LOAD_PCT, MIN_PART_LOAD_PCT, PartLoadPoint,
};
use crate::load::{LoadProfileParameters, StandardProfile};
use crate::sim::kpi::DEFAULT_CO2_KG_PER_KWH;
use crate::sim::types::CHART_SAMPLE_STRIDE_HOURS;

/// Top-level scenario configuration parsed from TOML.
///
/// All sections have defaults matching the `office_chiller` preset. Load
/// from TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Run-wide parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Where the climate series comes from.
    #[serde(default)]
    pub climate: ClimateConfig,
    /// Where the load series comes from.
    #[serde(default)]
    pub load: LoadConfig,
    /// The unit under evaluation.
    #[serde(default = "office_air_chiller")]
    pub equipment: EquipmentRecord,
}

/// Run-wide parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Seed of the synthetic weather generator.
    pub seed: u64,
    /// Supply water temperature (°C); above 25 °C the run is a heating duty.
    pub target_output_temp_c: f64,
    /// Grid emission factor (kg CO2 per kWh).
    pub co2_kg_per_kwh: f64,
    /// Hour stride of the sampled series served over the API (must be > 0).
    pub sample_stride_hours: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            target_output_temp_c: 7.0,
            co2_kg_per_kwh: DEFAULT_CO2_KG_PER_KWH,
            sample_stride_hours: CHART_SAMPLE_STRIDE_HOURS,
        }
    }
}

/// Climate source: a named region (optionally overridden) or a weather file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClimateConfig {
    /// Region name from [`climate::REGIONS`].
    pub region: String,
    /// Overrides the region's coldest monthly mean (°C).
    pub min_temp_c: Option<f64>,
    /// Overrides the region's warmest monthly mean (°C).
    pub max_temp_c: Option<f64>,
    /// Overrides the region's mean relative humidity (%).
    pub avg_relative_humidity_pct: Option<f64>,
    /// Hourly weather file; takes precedence over the synthetic series.
    pub weather_file: Option<PathBuf>,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            region: "mediterranean".to_string(),
            min_temp_c: None,
            max_temp_c: None,
            avg_relative_humidity_pct: None,
            weather_file: None,
        }
    }
}

impl ClimateConfig {
    /// Region profile with overrides applied, or `None` for an unknown region.
    pub fn profile(&self) -> Option<RegionClimateProfile> {
        let base = climate::region(&self.region)?;
        Some(RegionClimateProfile {
            min_temp_c: self.min_temp_c.unwrap_or(base.min_temp_c),
            max_temp_c: self.max_temp_c.unwrap_or(base.max_temp_c),
            avg_relative_humidity_pct: self
                .avg_relative_humidity_pct
                .unwrap_or(base.avg_relative_humidity_pct),
        })
    }
}

/// Load source: a standard profile (optionally overridden) or a load CSV.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    /// Standard profile name (see [`StandardProfile::NAMES`]).
    pub profile: String,
    /// Peak thermal power (kW, must be > 0).
    pub peak_power_kw: f64,
    /// Replaces the profile's weekday shape (24 values).
    pub weekday_shape: Option<Vec<f64>>,
    /// Replaces the profile's weekend shape (24 values).
    pub weekend_shape: Option<Vec<f64>>,
    /// Replaces the profile's weekly factors (7 values).
    pub weekly_factor: Option<Vec<f64>>,
    /// Replaces the profile's monthly factors (12 values).
    pub monthly_factor: Option<Vec<f64>>,
    /// `hour,value` CSV; takes precedence over the synthesized series.
    pub load_file: Option<PathBuf>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            profile: "office".to_string(),
            peak_power_kw: 250.0,
            weekday_shape: None,
            weekend_shape: None,
            weekly_factor: None,
            monthly_factor: None,
            load_file: None,
        }
    }
}

impl LoadConfig {
    /// Profile parameters with overrides applied.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an unknown profile name or an override of
    /// the wrong length.
    pub fn parameters(&self) -> Result<LoadProfileParameters, ConfigError> {
        let profile = StandardProfile::from_name(&self.profile).ok_or_else(|| ConfigError {
            field: "load.profile".into(),
            message: format!(
                "unknown profile \"{}\", available: {}",
                self.profile,
                StandardProfile::NAMES.join(", ")
            ),
        })?;
        let mut params = LoadProfileParameters::from_standard(self.peak_power_kw, profile);
        if let Some(v) = &self.weekday_shape {
            params.weekday_shape = fixed("load.weekday_shape", v)?;
        }
        if let Some(v) = &self.weekend_shape {
            params.weekend_shape = fixed("load.weekend_shape", v)?;
        }
        if let Some(v) = &self.weekly_factor {
            params.weekly_factor = fixed("load.weekly_factor", v)?;
        }
        if let Some(v) = &self.monthly_factor {
            params.monthly_factor = fixed("load.monthly_factor", v)?;
        }
        Ok(params)
    }
}

fn fixed<const N: usize>(field: &str, values: &[f64]) -> Result<[f64; N], ConfigError> {
    values.try_into().map_err(|_| ConfigError {
        field: field.into(),
        message: format!("must have {N} values, got {}", values.len()),
    })
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"load.peak_power_kw"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

/// Monthly space-heating factors, peaking in January.
const HEATING_SEASON: [f64; 12] = [1.0, 0.95, 0.75, 0.5, 0.25, 0.1, 0.05, 0.05, 0.15, 0.4, 0.7, 0.9];

/// Air-cooled scroll chiller used by the baseline scenario.
fn office_air_chiller() -> EquipmentRecord {
    EquipmentRecord {
        name: "ACS-300".to_string(),
        cooling_capacity_kw: 300.0,
        heating_capacity_kw: 0.0,
        eer: 3.1,
        cop: 0.0,
        part_load_curve: vec![
            PartLoadPoint::new(25.0, 1.08),
            PartLoadPoint::new(50.0, 1.18),
            PartLoadPoint::new(75.0, 1.12),
            PartLoadPoint::new(100.0, 1.0),
        ],
        condensation_medium: CondensationMedium::Air,
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: an office cooled by an air-cooled chiller.
    pub fn baseline() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            climate: ClimateConfig::default(),
            load: LoadConfig::default(),
            equipment: office_air_chiller(),
        }
    }

    /// Returns the hotel heat-pump preset: space heating in a cold climate.
    pub fn hotel_heat_pump() -> Self {
        Self {
            simulation: SimulationConfig {
                target_output_temp_c: 45.0,
                co2_kg_per_kwh: 0.25,
                ..SimulationConfig::default()
            },
            climate: ClimateConfig {
                region: "continental".to_string(),
                ..ClimateConfig::default()
            },
            load: LoadConfig {
                profile: "hotel".to_string(),
                peak_power_kw: 180.0,
                monthly_factor: Some(HEATING_SEASON.to_vec()),
                ..LoadConfig::default()
            },
            equipment: EquipmentRecord {
                name: "AHP-220".to_string(),
                cooling_capacity_kw: 200.0,
                heating_capacity_kw: 220.0,
                eer: 2.9,
                cop: 3.3,
                part_load_curve: vec![
                    PartLoadPoint::new(25.0, 0.92),
                    PartLoadPoint::new(50.0, 1.05),
                    PartLoadPoint::new(75.0, 1.06),
                    PartLoadPoint::new(100.0, 1.0),
                ],
                condensation_medium: CondensationMedium::Air,
            },
        }
    }

    /// Returns the process-water preset: flat industrial load on a
    /// water-cooled screw chiller.
    pub fn process_water_chiller() -> Self {
        Self {
            simulation: SimulationConfig {
                target_output_temp_c: 12.0,
                ..SimulationConfig::default()
            },
            climate: ClimateConfig {
                region: "subtropical".to_string(),
                ..ClimateConfig::default()
            },
            load: LoadConfig {
                profile: "industrial".to_string(),
                peak_power_kw: 600.0,
                ..LoadConfig::default()
            },
            equipment: EquipmentRecord {
                name: "WSC-700".to_string(),
                cooling_capacity_kw: 700.0,
                heating_capacity_kw: 0.0,
                eer: 5.6,
                cop: 0.0,
                part_load_curve: vec![
                    PartLoadPoint::new(25.0, 0.85),
                    PartLoadPoint::new(50.0, 1.02),
                    PartLoadPoint::new(75.0, 1.07),
                    PartLoadPoint::new(100.0, 1.0),
                ],
                condensation_medium: CondensationMedium::Water,
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["office_chiller", "hotel_heat_pump", "process_water_chiller"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "office_chiller" => Ok(Self::baseline()),
            "hotel_heat_pump" => Ok(Self::hotel_heat_pump()),
            "process_water_chiller" => Ok(Self::process_water_chiller()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// Relative `weather_file` and `load_file` paths are resolved against the
    /// directory containing the scenario file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        let mut cfg = Self::from_toml_str(&content)?;
        if let Some(dir) = path.parent() {
            for file in [&mut cfg.climate.weather_file, &mut cfg.load.load_file]
                .into_iter()
                .flatten()
            {
                if file.is_relative() {
                    *file = dir.join(&*file);
                }
            }
        }
        Ok(cfg)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut push = |field: &str, message: String| {
            errors.push(ConfigError {
                field: field.into(),
                message,
            });
        };

        let s = &self.simulation;
        if s.sample_stride_hours == 0 {
            push("simulation.sample_stride_hours", "must be > 0".into());
        }
        if !(s.co2_kg_per_kwh.is_finite() && s.co2_kg_per_kwh >= 0.0) {
            push("simulation.co2_kg_per_kwh", "must be finite and >= 0".into());
        }
        if !s.target_output_temp_c.is_finite() {
            push("simulation.target_output_temp_c", "must be a finite number".into());
        }

        let c = &self.climate;
        if c.weather_file.is_none() {
            match c.profile() {
                None => {
                    let names: Vec<&str> = REGIONS.iter().map(|(n, _)| *n).collect();
                    push(
                        "climate.region",
                        format!(
                            "unknown region \"{}\", available: {}",
                            c.region,
                            names.join(", ")
                        ),
                    );
                }
                Some(p) => {
                    for (field, value) in [
                        ("climate.min_temp_c", p.min_temp_c),
                        ("climate.max_temp_c", p.max_temp_c),
                    ] {
                        if !value.is_finite() {
                            push(field, "must be a finite number".into());
                        }
                    }
                    if !(p.min_temp_c < p.max_temp_c) {
                        push("climate.min_temp_c", "must be < climate.max_temp_c".into());
                    }
                    if !(0.0..=100.0).contains(&p.avg_relative_humidity_pct) {
                        push(
                            "climate.avg_relative_humidity_pct",
                            "must be in [0, 100]".into(),
                        );
                    }
                }
            }
        }

        let l = &self.load;
        if l.load_file.is_none() {
            if !(l.peak_power_kw.is_finite() && l.peak_power_kw > 0.0) {
                push("load.peak_power_kw", "must be finite and > 0".into());
            }
            if StandardProfile::from_name(&l.profile).is_none() {
                push(
                    "load.profile",
                    format!(
                        "unknown profile \"{}\", available: {}",
                        l.profile,
                        StandardProfile::NAMES.join(", ")
                    ),
                );
            }
            for (field, values, len) in [
                ("load.weekday_shape", &l.weekday_shape, 24),
                ("load.weekend_shape", &l.weekend_shape, 24),
                ("load.weekly_factor", &l.weekly_factor, 7),
                ("load.monthly_factor", &l.monthly_factor, 12),
            ] {
                if let Some(v) = values {
                    if v.len() != len {
                        push(field, format!("must have {len} values, got {}", v.len()));
                    }
                    if v.iter().any(|x| !(x.is_finite() && *x >= 0.0)) {
                        push(field, "values must be finite and >= 0".into());
                    }
                }
            }
        }

        let e = &self.equipment;
        for (field, value) in [
            ("equipment.cooling_capacity_kw", e.cooling_capacity_kw),
            ("equipment.heating_capacity_kw", e.heating_capacity_kw),
            ("equipment.eer", e.eer),
            ("equipment.cop", e.cop),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                push(field, "must be finite and >= 0".into());
            }
        }
        let curve = &e.part_load_curve;
        match (curve.first(), curve.last()) {
            (Some(first), Some(last)) => {
                if curve
                    .windows(2)
                    .any(|w| !(w[0].load_percent < w[1].load_percent))
                {
                    push(
                        "equipment.part_load_curve",
                        "load_percent must be strictly ascending".into(),
                    );
                }
                if first.load_percent > MIN_PART_LOAD_PCT || last.load_percent < MAX_PART_LOAD_PCT
                {
                    push(
                        "equipment.part_load_curve",
                        format!("must span {MIN_PART_LOAD_PCT}..{MAX_PART_LOAD_PCT} %"),
                    );
                }
                if curve
                    .iter()
                    .any(|p| !(p.efficiency_factor.is_finite() && p.efficiency_factor >= 0.0))
                {
                    push(
                        "equipment.part_load_curve",
                        "efficiency_factor must be finite and >= 0".into(),
                    );
                }
                if curve.iter().any(|p| !p.load_percent.is_finite()) {
                    push(
                        "equipment.part_load_curve",
                        "load_percent must be a finite number".into(),
                    );
                }
            }
            _ => push("equipment.part_load_curve", "must not be empty".into()),
        }

        errors
    }
}
