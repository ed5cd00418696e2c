//! Core simulation types: operating mode, per-hour records and run results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target output temperature above which a run is a heating duty (°C).
pub const HEATING_THRESHOLD_C: f64 = 25.0;

/// Stride (hours) of the chart sample series.
pub const CHART_SAMPLE_STRIDE_HOURS: usize = 24;

/// Duty of a whole simulation run.
///
/// One mode applies to every hour; mixed heating/cooling years are not
/// modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingMode {
    /// Chilled-water duty, rated by EER.
    Cooling,
    /// Hot-water duty, rated by COP.
    Heating,
}

impl OperatingMode {
    /// Heating when `target_output_temp_c` is above 25 °C, cooling otherwise.
    pub fn from_target(target_output_temp_c: f64) -> Self {
        if target_output_temp_c > HEATING_THRESHOLD_C {
            Self::Heating
        } else {
            Self::Cooling
        }
    }

    /// Label of the seasonal metric for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cooling => "seasonal EER",
            Self::Heating => "seasonal COP",
        }
    }

    /// Label of the nominal metric for this mode.
    pub fn nominal_label(self) -> &'static str {
        match self {
            Self::Cooling => "EER",
            Self::Heating => "COP",
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cooling => f.write_str("cooling"),
            Self::Heating => f.write_str("heating"),
        }
    }
}

/// Complete record of one simulated hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPerformance {
    /// Hour of year.
    pub hour_index: usize,
    /// Outdoor dry-bulb temperature (°C).
    pub outdoor_temp_c: f64,
    /// Thermal load requested this hour (kW).
    pub load_kw: f64,
    /// Thermal output delivered (kW); 0 when the unit has no capacity in this mode.
    pub thermal_output_kw: f64,
    /// Part-load ratio after clamping to 25..=100 (%).
    pub load_ratio_pct: f64,
    /// Part-load efficiency factor from the curve.
    pub part_load_factor: f64,
    /// Outdoor-temperature correction factor (1.0 for water-cooled units).
    pub temp_correction: f64,
    /// Nominal efficiency × part-load factor × temperature correction.
    pub real_efficiency: f64,
    /// Electrical input (kW).
    pub electrical_input_kw: f64,
}

/// Reduced per-hour record for charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSample {
    pub hour_index: usize,
    pub real_efficiency: f64,
    pub load_kw: f64,
    pub electrical_input_kw: f64,
    pub outdoor_temp_c: f64,
}

impl From<&HourlyPerformance> for ChartSample {
    fn from(h: &HourlyPerformance) -> Self {
        Self {
            hour_index: h.hour_index,
            real_efficiency: h.real_efficiency,
            load_kw: h.load_kw,
            electrical_input_kw: h.electrical_input_kw,
            outdoor_temp_c: h.outdoor_temp_c,
        }
    }
}

/// Outcome of one annual simulation.
///
/// Built fresh by each run and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Duty of the run.
    pub operating_mode: OperatingMode,
    /// All 8760 hourly records.
    pub hourly: Vec<HourlyPerformance>,
    /// Delivered thermal energy (MWh).
    pub total_thermal_energy_mwh: f64,
    /// Electrical energy drawn (MWh).
    pub total_electrical_energy_mwh: f64,
    /// Thermal / electrical energy; 0 when no electricity was drawn.
    pub seasonal_efficiency: f64,
    /// Load the unit could not serve because it has no capacity in this mode (MWh).
    pub unserved_thermal_energy_mwh: f64,
    /// Hours where the load exceeded nominal capacity.
    pub hours_above_capacity: usize,
}

impl SimulationResult {
    /// `"seasonal EER"` or `"seasonal COP"`.
    pub fn label(&self) -> &'static str {
        self.operating_mode.label()
    }

    /// Every `stride`-th hour as a chart sample, starting at hour 0.
    pub fn samples(&self, stride: usize) -> Vec<ChartSample> {
        decimate(&self.hourly, stride)
            .iter()
            .map(ChartSample::from)
            .collect()
    }

    /// Samples at the default chart stride of 24 hours.
    pub fn chart_samples(&self) -> Vec<ChartSample> {
        self.samples(CHART_SAMPLE_STRIDE_HOURS)
    }

    /// CO2 emitted by the electrical energy (tonnes) at `kg_per_kwh`.
    pub fn co2_tonnes(&self, kg_per_kwh: f64) -> f64 {
        self.total_electrical_energy_mwh * kg_per_kwh
    }
}

/// Keeps every `stride`-th item starting at index 0. A stride of 0 is treated as 1.
pub fn decimate<T: Clone>(items: &[T], stride: usize) -> Vec<T> {
    items.iter().step_by(stride.max(1)).cloned().collect()
}
