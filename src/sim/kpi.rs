//! Seasonal performance report derived from a finished simulation run.

use std::fmt;

use serde::Serialize;

use super::types::{OperatingMode, SimulationResult};
use crate::equipment::EquipmentRecord;

/// Default grid emission factor (kg CO2 per kWh of electricity).
pub const DEFAULT_CO2_KG_PER_KWH: f64 = 0.4;

/// Headline figures of one annual run.
///
/// Computed post-hoc from [`SimulationResult`] so the hourly records and the
/// reported totals cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalReport {
    pub equipment_name: String,
    pub operating_mode: OperatingMode,
    /// `"seasonal EER"` or `"seasonal COP"`.
    pub label: &'static str,
    pub seasonal_efficiency: f64,
    /// Rated EER (cooling) or COP (heating).
    pub nominal_efficiency: f64,
    /// Seasonal / nominal efficiency; 0 when the nominal value is 0.
    pub seasonal_to_nominal_ratio: f64,
    pub thermal_energy_mwh: f64,
    pub electrical_energy_mwh: f64,
    /// CO2 from the electrical energy (t).
    pub co2_tonnes: f64,
    pub unserved_thermal_energy_mwh: f64,
    pub hours_above_capacity: usize,
    /// Lowest, mean and highest real efficiency over hours with load.
    pub min_real_efficiency: f64,
    pub mean_real_efficiency: f64,
    pub max_real_efficiency: f64,
}

impl SeasonalReport {
    /// Builds the report for `result`, simulated with `equipment`.
    ///
    /// Hours with no thermal output are left out of the min/mean/max real
    /// efficiency; if there are none, all three are 0.
    pub fn from_result(
        result: &SimulationResult,
        equipment: &EquipmentRecord,
        co2_kg_per_kwh: f64,
    ) -> Self {
        let nominal_efficiency = match result.operating_mode {
            OperatingMode::Cooling => equipment.eer,
            OperatingMode::Heating => equipment.cop,
        };
        let seasonal_to_nominal_ratio = if nominal_efficiency > 0.0 {
            result.seasonal_efficiency / nominal_efficiency
        } else {
            0.0
        };

        let mut served = 0_usize;
        let mut sum = 0.0_f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for h in result.hourly.iter().filter(|h| h.thermal_output_kw > 0.0) {
            served += 1;
            sum += h.real_efficiency;
            min = min.min(h.real_efficiency);
            max = max.max(h.real_efficiency);
        }
        let (min_real_efficiency, mean_real_efficiency, max_real_efficiency) = if served > 0 {
            (min, sum / served as f64, max)
        } else {
            (0.0, 0.0, 0.0)
        };

        Self {
            equipment_name: equipment.name.clone(),
            operating_mode: result.operating_mode,
            label: result.label(),
            seasonal_efficiency: result.seasonal_efficiency,
            nominal_efficiency,
            seasonal_to_nominal_ratio,
            thermal_energy_mwh: result.total_thermal_energy_mwh,
            electrical_energy_mwh: result.total_electrical_energy_mwh,
            co2_tonnes: result.co2_tonnes(co2_kg_per_kwh),
            unserved_thermal_energy_mwh: result.unserved_thermal_energy_mwh,
            hours_above_capacity: result.hours_above_capacity,
            min_real_efficiency,
            mean_real_efficiency,
            max_real_efficiency,
        }
    }
}

impl fmt::Display for SeasonalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Seasonal Report ---")?;
        writeln!(f, "Equipment:             {}", self.equipment_name)?;
        writeln!(f, "Operating mode:        {}", self.operating_mode)?;
        writeln!(
            f,
            "{:<23}{:.2}",
            format!("{}:", capitalize(self.label)),
            self.seasonal_efficiency
        )?;
        writeln!(
            f,
            "{:<23}{:.2}",
            format!("Nominal {}:", self.operating_mode.nominal_label()),
            self.nominal_efficiency
        )?;
        writeln!(
            f,
            "Seasonal/nominal:      {:.1}%",
            self.seasonal_to_nominal_ratio * 100.0
        )?;
        writeln!(f, "Thermal energy:        {:.2} MWh", self.thermal_energy_mwh)?;
        writeln!(f, "Electrical energy:     {:.2} MWh", self.electrical_energy_mwh)?;
        writeln!(f, "CO2 emissions:         {:.2} t", self.co2_tonnes)?;
        writeln!(
            f,
            "Unserved energy:       {:.2} MWh",
            self.unserved_thermal_energy_mwh
        )?;
        writeln!(f, "Hours above capacity:  {}", self.hours_above_capacity)?;
        write!(
            f,
            "Real efficiency:       {:.2} min / {:.2} mean / {:.2} max",
            self.min_real_efficiency, self.mean_real_efficiency, self.max_real_efficiency
        )
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
