//! Annual statistics bundle, console output and the narrative collaborator.

use std::fmt::Write as _;

use serde::Serialize;

use crate::climate::ClimatePoint;
use crate::equipment::EquipmentRecord;
use crate::error::NarrativeError;
use crate::sim::{SeasonalReport, SimulationResult};
use crate::stats::{MonthlyClimate, SeriesStats, monthly_climate, monthly_energy_mwh};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Everything a report writer needs about one annual run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualStatistics {
    pub report: SeasonalReport,
    /// Summary of the thermal load series.
    pub load: SeriesStats,
    pub monthly_climate: Vec<MonthlyClimate>,
    /// Thermal load per month (MWh).
    pub monthly_load_mwh: [f64; 12],
    /// Electrical input per month (MWh).
    pub monthly_electrical_mwh: [f64; 12],
}

impl AnnualStatistics {
    pub fn collect(
        result: &SimulationResult,
        equipment: &EquipmentRecord,
        climate: &[ClimatePoint],
        load: &[f64],
        co2_kg_per_kwh: f64,
    ) -> Self {
        let electrical: Vec<f64> = result.hourly.iter().map(|h| h.electrical_input_kw).collect();
        Self {
            report: SeasonalReport::from_result(result, equipment, co2_kg_per_kwh),
            load: SeriesStats::from_series(load),
            monthly_climate: monthly_climate(climate),
            monthly_load_mwh: monthly_energy_mwh(load),
            monthly_electrical_mwh: monthly_energy_mwh(&electrical),
        }
    }

    /// Monthly climate and energy table, one row per month.
    pub fn monthly_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Month  Dry-bulb  Wet-bulb    RH   Load MWh  Elec MWh"
        );
        for (i, name) in MONTH_NAMES.iter().enumerate() {
            let climate = self
                .monthly_climate
                .iter()
                .find(|m| usize::from(m.month) == i + 1);
            let (dry, wet, rh) = climate
                .map(|m| {
                    (
                        m.avg_dry_bulb_c,
                        m.avg_wet_bulb_c,
                        m.avg_relative_humidity_pct,
                    )
                })
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "{name:<5} {dry:>9.1} {wet:>9.1} {rh:>5.0} {:>10.2} {:>9.2}",
                self.monthly_load_mwh[i], self.monthly_electrical_mwh[i]
            );
        }
        out
    }
}

/// Load summary lines for the console.
pub fn print_load_summary(load: &SeriesStats) {
    println!("\n--- Load Profile ---");
    println!("Peak load:             {:.1} kW", load.peak_kw);
    println!("Average load:          {:.1} kW", load.average_kw);
    println!("Load factor:           {:.1}%", load.load_factor_pct);
    println!("Full-load hours:       {:.0} h", load.full_load_hours);
    println!("Annual thermal demand: {:.2} MWh", load.annual_mwh);
}

/// Turns structured annual statistics into prose.
///
/// The crate ships no implementation; hosts plug in whatever text service
/// they use and surface its errors as [`NarrativeError`].
pub trait NarrativeGenerator {
    fn generate(&self, stats: &AnnualStatistics) -> Result<String, NarrativeError>;
}
