//! Resolves a scenario into input series and runs it end to end.

use std::sync::Arc;

use log::info;
use thiserror::Error;

use crate::climate::{ClimatePoint, generate_annual_weather, parse_weather_path};
use crate::config::{ConfigError, ScenarioConfig};
use crate::equipment::EquipmentRecord;
use crate::error::{ImportError, SimulationError};
use crate::io::import::parse_load_path;
use crate::load::{LoadProfileParameters, synthesize_annual_load};
use crate::reporting::AnnualStatistics;
use crate::sim::{ResultSlot, SimulationResult};

/// Why a scenario could not be run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Concrete inputs of one run.
#[derive(Debug, Clone)]
pub struct ScenarioInputs {
    pub climate: Vec<ClimatePoint>,
    pub load: Vec<f64>,
    /// Parameters the load was synthesized from; `None` for an imported load.
    pub load_parameters: Option<LoadProfileParameters>,
    pub equipment: EquipmentRecord,
    pub target_output_temp_c: f64,
    pub co2_kg_per_kwh: f64,
    pub sample_stride_hours: usize,
}

impl ScenarioInputs {
    /// Builds the climate and load series described by `cfg`.
    ///
    /// Files named in the configuration take precedence over synthesis.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Import`] when a file cannot be read or holds no
    /// valid rows, and [`RunError::Config`] for an unknown region or profile.
    pub fn prepare(cfg: &ScenarioConfig) -> Result<Self, RunError> {
        let climate = match &cfg.climate.weather_file {
            Some(path) => {
                info!("reading weather from {}", path.display());
                parse_weather_path(path)?
            }
            None => {
                let profile = cfg.climate.profile().ok_or_else(|| ConfigError {
                    field: "climate.region".into(),
                    message: format!("unknown region \"{}\"", cfg.climate.region),
                })?;
                generate_annual_weather(&profile, cfg.simulation.seed)
            }
        };

        let (load, load_parameters) = match &cfg.load.load_file {
            Some(path) => {
                info!("reading load from {}", path.display());
                (parse_load_path(path)?, None)
            }
            None => {
                let params = cfg.load.parameters()?;
                (synthesize_annual_load(&params), Some(params))
            }
        };

        Ok(Self {
            climate,
            load,
            load_parameters,
            equipment: cfg.equipment.clone(),
            target_output_temp_c: cfg.simulation.target_output_temp_c,
            co2_kg_per_kwh: cfg.simulation.co2_kg_per_kwh,
            sample_stride_hours: cfg.simulation.sample_stride_hours,
        })
    }

    /// Simulates through `slot`, reusing its result when the inputs are unchanged.
    ///
    /// # Errors
    ///
    /// Returns the simulator's error; `slot` keeps its previous result.
    pub fn simulate(&self, slot: &mut ResultSlot) -> Result<Arc<SimulationResult>, SimulationError> {
        slot.refresh(
            Some(&self.equipment),
            &self.climate,
            &self.load,
            self.target_output_temp_c,
        )
    }

    pub fn statistics(&self, result: &SimulationResult) -> AnnualStatistics {
        AnnualStatistics::collect(
            result,
            &self.equipment,
            &self.climate,
            &self.load,
            self.co2_kg_per_kwh,
        )
    }
}

/// A finished scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    pub inputs: ScenarioInputs,
    pub result: Arc<SimulationResult>,
    pub statistics: AnnualStatistics,
}

/// Prepares the inputs of `cfg` and simulates them once.
///
/// # Errors
///
/// See [`ScenarioInputs::prepare`] and [`ScenarioInputs::simulate`].
pub fn run_scenario(cfg: &ScenarioConfig) -> Result<ScenarioRun, RunError> {
    let inputs = ScenarioInputs::prepare(cfg)?;
    let mut slot = ResultSlot::new();
    let result = inputs.simulate(&mut slot)?;
    let statistics = inputs.statistics(&result);
    Ok(ScenarioRun {
        inputs,
        result,
        statistics,
    })
}
