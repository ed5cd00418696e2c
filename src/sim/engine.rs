//! Hour-by-hour annual performance simulation.

use log::{debug, info, warn};

use super::types::{HourlyPerformance, OperatingMode, SimulationResult};
use crate::calendar::HOURS_PER_YEAR;
use crate::climate::ClimatePoint;
use crate::equipment::{
    CondensationMedium, EquipmentRecord, MAX_PART_LOAD_PCT, MIN_PART_LOAD_PCT,
};
use crate::error::SimulationError;

/// Condenser-entering air temperature at which EER is rated (°C).
pub const COOLING_REFERENCE_TEMP_C: f64 = 35.0;
/// Fractional EER change per °C away from the cooling reference.
pub const COOLING_TEMP_COEFFICIENT: f64 = 0.032;
/// Evaporator-entering air temperature at which COP is rated (°C).
pub const HEATING_REFERENCE_TEMP_C: f64 = 7.0;
/// Fractional COP change per °C away from the heating reference.
pub const HEATING_TEMP_COEFFICIENT: f64 = 0.025;

/// Outdoor-temperature correction applied to the nominal efficiency.
///
/// Air-cooled cooling loses 3.2 %/°C above 35 °C (and gains below it);
/// air-source heating gains 2.5 %/°C above 7 °C and loses below it.
/// Water-cooled units are pinned at 1.0.
pub fn temperature_correction(
    medium: CondensationMedium,
    mode: OperatingMode,
    outdoor_temp_c: f64,
) -> f64 {
    match (medium, mode) {
        (CondensationMedium::Water, _) => 1.0,
        (CondensationMedium::Air, OperatingMode::Cooling) => {
            1.0 - (outdoor_temp_c - COOLING_REFERENCE_TEMP_C) * COOLING_TEMP_COEFFICIENT
        }
        (CondensationMedium::Air, OperatingMode::Heating) => {
            1.0 + (outdoor_temp_c - HEATING_REFERENCE_TEMP_C) * HEATING_TEMP_COEFFICIENT
        }
    }
}

/// One equipment record bound to the operating mode of a run.
#[derive(Debug, Clone)]
pub struct PerformanceModel<'a> {
    equipment: &'a EquipmentRecord,
    mode: OperatingMode,
    nominal_capacity_kw: f64,
    nominal_efficiency: f64,
}

impl<'a> PerformanceModel<'a> {
    /// Binds `equipment` to the mode implied by `target_output_temp_c`.
    pub fn new(equipment: &'a EquipmentRecord, target_output_temp_c: f64) -> Self {
        let mode = OperatingMode::from_target(target_output_temp_c);
        let (nominal_capacity_kw, nominal_efficiency) = match mode {
            OperatingMode::Heating => (equipment.heating_capacity_kw, equipment.cop),
            OperatingMode::Cooling => (equipment.cooling_capacity_kw, equipment.eer),
        };
        Self {
            equipment,
            mode,
            nominal_capacity_kw,
            nominal_efficiency,
        }
    }

    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    pub fn nominal_capacity_kw(&self) -> f64 {
        self.nominal_capacity_kw
    }

    pub fn nominal_efficiency(&self) -> f64 {
        self.nominal_efficiency
    }

    /// Evaluates a single hour.
    ///
    /// With no nominal capacity in this mode the unit delivers nothing: output,
    /// efficiency and electrical input are all 0.
    pub fn hour(&self, hour_index: usize, outdoor_temp_c: f64, load_kw: f64) -> HourlyPerformance {
        let load_kw = load_kw.max(0.0);
        let has_capacity = self.nominal_capacity_kw > 0.0;

        let raw_ratio = if has_capacity {
            load_kw / self.nominal_capacity_kw * 100.0
        } else {
            0.0
        };
        let load_ratio_pct = raw_ratio.clamp(MIN_PART_LOAD_PCT, MAX_PART_LOAD_PCT);
        let part_load_factor = self.equipment.efficiency_factor(load_ratio_pct);
        let temp_correction =
            temperature_correction(self.equipment.condensation_medium, self.mode, outdoor_temp_c);

        let (thermal_output_kw, real_efficiency) = if has_capacity {
            (
                load_kw,
                self.nominal_efficiency * part_load_factor * temp_correction,
            )
        } else {
            (0.0, 0.0)
        };
        let electrical_input_kw = if real_efficiency > 0.0 {
            thermal_output_kw / real_efficiency
        } else {
            0.0
        };

        HourlyPerformance {
            hour_index,
            outdoor_temp_c,
            load_kw,
            thermal_output_kw,
            load_ratio_pct,
            part_load_factor,
            temp_correction,
            real_efficiency,
            electrical_input_kw,
        }
    }
}

/// Simulates one year hour by hour.
///
/// Uses the first 8760 entries of `climate` and `load`; hour `i` pairs
/// `climate[i].dry_bulb_c` with `load[i]`. Heating duty applies when
/// `target_output_temp_c > 25`.
///
/// # Errors
///
/// Returns [`SimulationError::InsufficientData`] without computing anything
/// when `equipment` is `None` or either series has fewer than 8760 entries.
pub fn simulate_annual_performance(
    equipment: Option<&EquipmentRecord>,
    climate: &[ClimatePoint],
    load: &[f64],
    target_output_temp_c: f64,
) -> Result<SimulationResult, SimulationError> {
    let equipment = match equipment {
        Some(e) if climate.len() >= HOURS_PER_YEAR && load.len() >= HOURS_PER_YEAR => e,
        _ => {
            return Err(SimulationError::InsufficientData {
                equipment: equipment.is_some(),
                climate_len: climate.len(),
                load_len: load.len(),
                required: HOURS_PER_YEAR,
            });
        }
    };

    let model = PerformanceModel::new(equipment, target_output_temp_c);
    debug!(
        "simulating {} in {} mode: capacity {:.1} kW, nominal {} {:.2}",
        equipment.name,
        model.mode(),
        model.nominal_capacity_kw(),
        model.mode().nominal_label(),
        model.nominal_efficiency()
    );

    let mut hourly = Vec::with_capacity(HOURS_PER_YEAR);
    let mut thermal_kwh = 0.0_f64;
    let mut electrical_kwh = 0.0_f64;
    let mut unserved_kwh = 0.0_f64;
    let mut hours_above_capacity = 0_usize;

    for (i, (point, &load_kw)) in climate.iter().zip(load).take(HOURS_PER_YEAR).enumerate() {
        let h = model.hour(i, point.dry_bulb_c, load_kw);

        thermal_kwh += h.thermal_output_kw;
        electrical_kwh += h.electrical_input_kw;
        unserved_kwh += h.load_kw - h.thermal_output_kw;
        if model.nominal_capacity_kw() > 0.0 && h.load_kw > model.nominal_capacity_kw() {
            hours_above_capacity += 1;
        }

        hourly.push(h);
    }

    let seasonal_efficiency = if electrical_kwh > 0.0 {
        thermal_kwh / electrical_kwh
    } else {
        0.0
    };

    if unserved_kwh > 0.0 {
        warn!(
            "{} has no {} capacity: {:.1} MWh of load left unserved",
            equipment.name,
            model.mode(),
            unserved_kwh / 1000.0
        );
    }
    if hours_above_capacity > 0 {
        warn!(
            "load exceeds the nominal capacity of {} during {hours_above_capacity} h",
            equipment.name
        );
    }
    info!(
        "{}: {} = {:.2} ({:.1} MWh thermal / {:.1} MWh electrical)",
        equipment.name,
        model.mode().label(),
        seasonal_efficiency,
        thermal_kwh / 1000.0,
        electrical_kwh / 1000.0
    );

    Ok(SimulationResult {
        operating_mode: model.mode(),
        hourly,
        total_thermal_energy_mwh: thermal_kwh / 1000.0,
        total_electrical_energy_mwh: electrical_kwh / 1000.0,
        seasonal_efficiency,
        unserved_thermal_energy_mwh: unserved_kwh / 1000.0,
        hours_above_capacity,
    })
}
