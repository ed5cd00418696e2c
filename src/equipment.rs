//! Equipment records and part-load efficiency curves.

use serde::{Deserialize, Serialize};

/// Lowest part-load ratio (%) the model lets a unit run at.
pub const MIN_PART_LOAD_PCT: f64 = 25.0;
/// Full load (%).
pub const MAX_PART_LOAD_PCT: f64 = 100.0;

/// How the unit rejects (cooling) or sources (heating) heat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CondensationMedium {
    /// Ambient air; efficiency depends on outdoor dry-bulb.
    Air,
    /// Water loop held at a stable temperature (tower, ground loop).
    Water,
}

/// One point of a part-load efficiency curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartLoadPoint {
    /// Part-load ratio (% of nominal capacity).
    pub load_percent: f64,
    /// Multiplier on the nominal EER/COP at that ratio.
    pub efficiency_factor: f64,
}

impl PartLoadPoint {
    pub const fn new(load_percent: f64, efficiency_factor: f64) -> Self {
        Self {
            load_percent,
            efficiency_factor,
        }
    }
}

/// A vendor chiller / heat-pump unit as read from the catalog.
///
/// Only the capacity, efficiency, curve and medium fields drive the
/// simulation; `name` is descriptive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EquipmentRecord {
    /// Catalog model name.
    pub name: String,
    /// Nominal cooling capacity (kW).
    pub cooling_capacity_kw: f64,
    /// Nominal heating capacity (kW); 0 when the unit is not a heat pump.
    #[serde(default)]
    pub heating_capacity_kw: f64,
    /// Nominal energy efficiency ratio (cooling).
    pub eer: f64,
    /// Nominal coefficient of performance (heating).
    #[serde(default)]
    pub cop: f64,
    /// Part-load curve, sorted by ascending `load_percent`.
    pub part_load_curve: Vec<PartLoadPoint>,
    /// Condenser / source medium.
    pub condensation_medium: CondensationMedium,
}

impl EquipmentRecord {
    /// Efficiency factor at `part_load_pct`; see [`interpolate_efficiency_factor`].
    pub fn efficiency_factor(&self, part_load_pct: f64) -> f64 {
        interpolate_efficiency_factor(&self.part_load_curve, part_load_pct)
    }

    /// Whether the unit can deliver heat.
    pub fn is_heat_pump(&self) -> bool {
        self.heating_capacity_kw > 0.0
    }
}

/// Linearly interpolates a part-load curve.
///
/// `part_load_pct` is clamped to 25..=100 first, so the curve is never
/// extrapolated. Points must already be sorted by ascending
/// `load_percent`; they are not re-sorted here. An empty curve yields the
/// neutral factor `1.0`.
///
/// # Examples
///
/// ```
/// use chiller_sim::equipment::{PartLoadPoint, interpolate_efficiency_factor};
///
/// let curve = [PartLoadPoint::new(50.0, 0.9), PartLoadPoint::new(75.0, 1.0)];
/// assert!((interpolate_efficiency_factor(&curve, 62.5) - 0.95).abs() < 1e-12);
/// ```
pub fn interpolate_efficiency_factor(curve: &[PartLoadPoint], part_load_pct: f64) -> f64 {
    let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
        return 1.0;
    };
    let pct = part_load_pct.clamp(MIN_PART_LOAD_PCT, MAX_PART_LOAD_PCT);

    let lower = curve
        .iter()
        .rev()
        .find(|p| p.load_percent <= pct)
        .unwrap_or(first);
    let upper = curve
        .iter()
        .find(|p| p.load_percent >= pct)
        .unwrap_or(last);

    if lower.load_percent == upper.load_percent {
        return lower.efficiency_factor;
    }

    lower.efficiency_factor
        + (upper.efficiency_factor - lower.efficiency_factor) * (pct - lower.load_percent)
            / (upper.load_percent - lower.load_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> Vec<PartLoadPoint> {
        vec![
            PartLoadPoint::new(25.0, 1.05),
            PartLoadPoint::new(50.0, 1.15),
            PartLoadPoint::new(75.0, 1.10),
            PartLoadPoint::new(100.0, 1.0),
        ]
    }

    #[test]
    fn endpoints_return_endpoint_factors() {
        let c = curve();
        assert_eq!(interpolate_efficiency_factor(&c, 25.0), 1.05);
        assert_eq!(interpolate_efficiency_factor(&c, 100.0), 1.0);
    }

    #[test]
    fn out_of_range_clamps_without_extrapolation() {
        let c = curve();
        assert_eq!(interpolate_efficiency_factor(&c, 5.0), 1.05);
        assert_eq!(interpolate_efficiency_factor(&c, -40.0), 1.05);
        assert_eq!(interpolate_efficiency_factor(&c, 130.0), 1.0);
    }

    #[test]
    fn exact_linear_midpoint() {
        let c = [PartLoadPoint::new(50.0, 0.9), PartLoadPoint::new(75.0, 1.0)];
        assert_relative_eq!(interpolate_efficiency_factor(&c, 62.5), 0.95, epsilon = 1e-12);
    }

    #[test]
    fn exact_point_hit_returns_its_factor() {
        assert_eq!(interpolate_efficiency_factor(&curve(), 50.0), 1.15);
        assert_eq!(interpolate_efficiency_factor(&curve(), 75.0), 1.10);
    }

    #[test]
    fn curve_narrower_than_domain_uses_nearest_endpoint() {
        let c = [PartLoadPoint::new(40.0, 0.8), PartLoadPoint::new(80.0, 1.2)];
        assert_eq!(interpolate_efficiency_factor(&c, 30.0), 0.8);
        assert_eq!(interpolate_efficiency_factor(&c, 95.0), 1.2);
        assert_relative_eq!(interpolate_efficiency_factor(&c, 60.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn single_point_and_empty_curves() {
        let c = [PartLoadPoint::new(100.0, 0.97)];
        assert_eq!(interpolate_efficiency_factor(&c, 40.0), 0.97);
        assert_eq!(interpolate_efficiency_factor(&[], 40.0), 1.0);
    }

    #[test]
    fn medium_parses_lowercase() {
        let r: EquipmentRecord = toml::from_str(
            r#"
name = "WC-200"
cooling_capacity_kw = 200.0
eer = 5.2
condensation_medium = "water"
part_load_curve = [{ load_percent = 25.0, efficiency_factor = 1.0 }, { load_percent = 100.0, efficiency_factor = 1.0 }]
"#,
        )
        .expect("record should parse");
        assert_eq!(r.condensation_medium, CondensationMedium::Water);
        assert_eq!(r.heating_capacity_kw, 0.0);
        assert!(!r.is_heat_pump());
    }
}
