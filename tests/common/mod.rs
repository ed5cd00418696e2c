//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use chiller_sim::calendar::{HOURS_PER_YEAR, YearClock};
use chiller_sim::climate::{ClimatePoint, wet_bulb};
use chiller_sim::equipment::{CondensationMedium, EquipmentRecord, PartLoadPoint};
use chiller_sim::load::LoadProfileParameters;

/// A year at constant outdoor conditions.
pub fn flat_climate(dry_bulb_c: f64, relative_humidity_pct: f64) -> Vec<ClimatePoint> {
    let mut series = Vec::with_capacity(HOURS_PER_YEAR);
    YearClock::new().run(|h| {
        series.push(ClimatePoint {
            hour_index: h.hour_index,
            month: h.month(),
            day: h.day(),
            hour: h.hour_of_day as u8,
            dry_bulb_c,
            relative_humidity_pct,
            wet_bulb_c: wet_bulb(dry_bulb_c, relative_humidity_pct),
        });
    });
    series
}

/// 100 kW cooling / 110 kW heating unit with a humped part-load curve.
pub fn chiller(medium: CondensationMedium) -> EquipmentRecord {
    EquipmentRecord {
        name: "TEST-100".to_string(),
        cooling_capacity_kw: 100.0,
        heating_capacity_kw: 110.0,
        eer: 3.0,
        cop: 3.5,
        part_load_curve: vec![
            PartLoadPoint::new(25.0, 1.05),
            PartLoadPoint::new(50.0, 1.15),
            PartLoadPoint::new(75.0, 1.10),
            PartLoadPoint::new(100.0, 1.0),
        ],
        condensation_medium: medium,
    }
}

/// 100 kW from 09:00 to 17:00 on weekdays, nothing on days 5 and 6.
pub fn office_block_profile() -> LoadProfileParameters {
    let mut weekday_shape = [0.0; 24];
    for v in &mut weekday_shape[9..17] {
        *v = 1.0;
    }
    LoadProfileParameters {
        peak_power_kw: 100.0,
        weekday_shape,
        weekend_shape: [0.0; 24],
        weekly_factor: [1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0],
        monthly_factor: [1.0; 12],
    }
}

/// One weather data row with `dry` and `rh` in the dry-bulb and humidity columns.
pub fn weather_row(month: u8, day: u8, hour: u8, dry: f64, rh: f64) -> String {
    let mut fields: Vec<String> = vec![
        "2005".into(),
        month.to_string(),
        day.to_string(),
        hour.to_string(),
        "60".into(),
        "?9?9?9?9E0".into(),
        format!("{dry:.1}"),
        "5.0".into(),
        format!("{rh:.0}"),
    ];
    fields.resize(35, "0".into());
    fields.join(",")
}

/// Weather text for a full year with header lines, dry-bulb following `dry_of`.
pub fn weather_text(dry_of: impl Fn(usize) -> f64) -> String {
    let mut lines = vec![
        "LOCATION,Testville,XX,USA,TMY3,000000,40.0,-105.0,-7.0,1600.0".to_string(),
        "DESIGN CONDITIONS,0".to_string(),
        "DATA PERIODS,1,1,Data,Sunday, 1/ 1,12/31".to_string(),
    ];
    YearClock::new().run(|h| {
        lines.push(weather_row(
            h.month(),
            h.day(),
            h.hour_of_day as u8 + 1,
            dry_of(h.hour_index),
            55.0,
        ));
    });
    lines.join("\n")
}
