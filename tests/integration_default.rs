//! End-to-end tests: series in, seasonal figures out.

mod common;

use approx::assert_relative_eq;

use chiller_sim::calendar::HOURS_PER_YEAR;
use chiller_sim::climate::{
    RegionClimateProfile, generate_annual_weather, parse_weather_file, region, wet_bulb,
};
use chiller_sim::equipment::{CondensationMedium, interpolate_efficiency_factor};
use chiller_sim::io::export::write_load_csv;
use chiller_sim::io::import::parse_load_csv;
use chiller_sim::load::{LoadProfileParameters, StandardProfile, synthesize_annual_load};
use chiller_sim::reporting::AnnualStatistics;
use chiller_sim::sim::{InputsFingerprint, OperatingMode, is_stale, simulate_annual_performance};
use chiller_sim::stats::{SeriesStats, dry_bulb_histogram, histogram, monthly_energy_mwh};

#[test]
fn synthesized_and_imported_series_cover_one_year() {
    for (name, profile) in chiller_sim::climate::REGIONS {
        assert_eq!(
            generate_annual_weather(profile, 1).len(),
            HOURS_PER_YEAR,
            "{name}"
        );
    }
    for name in StandardProfile::NAMES {
        let params = LoadProfileParameters::from_standard(
            50.0,
            StandardProfile::from_name(name).expect("known profile"),
        );
        assert_eq!(synthesize_annual_load(&params).len(), HOURS_PER_YEAR, "{name}");
    }
    let short = parse_load_csv("hour,load_kw\n0,5\n1,6\n").expect("parses");
    assert_eq!(short.len(), HOURS_PER_YEAR);
}

#[test]
fn weekday_block_profile_energy_matches_day_count() {
    let load = synthesize_annual_load(&common::office_block_profile());
    let weekday_days = 261.0;
    let expected_mwh = 100.0 * 8.0 * weekday_days / 1000.0;
    let total: f64 = load.iter().sum();
    assert_eq!(total / 1000.0, expected_mwh);
    assert_eq!(SeriesStats::from_series(&load).annual_mwh, 208.8);
}

#[test]
fn weekday_block_profile_simulates_with_closed_form_totals() {
    // Water-cooled at a constant 100 kW (full load): factor 1.0, EER 3.0.
    let equipment = common::chiller(CondensationMedium::Water);
    let climate = common::flat_climate(28.0, 60.0);
    let load = synthesize_annual_load(&common::office_block_profile());

    let result = simulate_annual_performance(Some(&equipment), &climate, &load, 7.0)
        .expect("simulation should run");
    assert_eq!(result.operating_mode, OperatingMode::Cooling);
    assert_relative_eq!(result.total_thermal_energy_mwh, 208.8, epsilon = 1e-9);
    assert_relative_eq!(result.total_electrical_energy_mwh, 69.6, epsilon = 1e-9);
    assert_relative_eq!(result.seasonal_efficiency, 3.0, epsilon = 1e-9);
    assert_eq!(result.hours_above_capacity, 0);
}

#[test]
fn zero_capacity_year_has_no_output_and_no_nan() {
    let mut equipment = common::chiller(CondensationMedium::Air);
    equipment.cooling_capacity_kw = 0.0;
    let climate = common::flat_climate(30.0, 50.0);
    let load = synthesize_annual_load(&LoadProfileParameters::from_standard(
        120.0,
        StandardProfile::Office,
    ));

    let result = simulate_annual_performance(Some(&equipment), &climate, &load, 7.0)
        .expect("zero capacity is not an error");
    assert_eq!(result.total_thermal_energy_mwh, 0.0);
    assert_eq!(result.seasonal_efficiency, 0.0);
    assert!(result.hourly.iter().all(|h| h.real_efficiency.is_finite()));

    let stats = AnnualStatistics::collect(&result, &equipment, &climate, &load, 0.4);
    assert_eq!(stats.report.co2_tonnes, 0.0);
    assert!(!stats.report.seasonal_to_nominal_ratio.is_nan());
}

#[test]
fn water_cooled_ignores_weather_air_cooled_does_not() {
    let load = vec![60.0; HOURS_PER_YEAR];
    let mild = common::flat_climate(20.0, 50.0);
    let hot = common::flat_climate(38.0, 50.0);

    let water = common::chiller(CondensationMedium::Water);
    let w_mild = simulate_annual_performance(Some(&water), &mild, &load, 7.0).expect("runs");
    let w_hot = simulate_annual_performance(Some(&water), &hot, &load, 7.0).expect("runs");
    assert_eq!(w_mild.seasonal_efficiency, w_hot.seasonal_efficiency);

    let air = common::chiller(CondensationMedium::Air);
    let a_mild = simulate_annual_performance(Some(&air), &mild, &load, 7.0).expect("runs");
    let a_hot = simulate_annual_performance(Some(&air), &hot, &load, 7.0).expect("runs");
    assert!(a_hot.seasonal_efficiency < a_mild.seasonal_efficiency);
}

#[test]
fn air_cooled_efficiency_drops_between_35_and_45_degrees() {
    let air = common::chiller(CondensationMedium::Air);
    let load = vec![75.0; HOURS_PER_YEAR];
    let at_35 = simulate_annual_performance(Some(&air), &common::flat_climate(35.0, 40.0), &load, 7.0)
        .expect("runs");
    let at_45 = simulate_annual_performance(Some(&air), &common::flat_climate(45.0, 40.0), &load, 7.0)
        .expect("runs");
    let ratio = at_45.hourly[0].real_efficiency / at_35.hourly[0].real_efficiency;
    assert!(ratio < 1.0);
    assert_relative_eq!(ratio, 0.68, epsilon = 1e-12);
}

#[test]
fn heat_pump_in_heating_duty_uses_cop() {
    let hp = common::chiller(CondensationMedium::Air);
    let climate = common::flat_climate(7.0, 70.0);
    let load = vec![55.0; HOURS_PER_YEAR];
    let result = simulate_annual_performance(Some(&hp), &climate, &load, 45.0).expect("runs");
    assert_eq!(result.label(), "seasonal COP");
    // 55 / 110 = 50 % → factor 1.15; 7 °C → correction 1.0.
    assert_relative_eq!(result.seasonal_efficiency, 3.5 * 1.15, epsilon = 1e-9);
}

#[test]
fn interpolator_endpoints_and_midpoint() {
    let curve = common::chiller(CondensationMedium::Air).part_load_curve;
    assert_eq!(interpolate_efficiency_factor(&curve, 25.0), 1.05);
    assert_eq!(interpolate_efficiency_factor(&curve, 100.0), 1.0);
    assert_eq!(interpolate_efficiency_factor(&curve, 10.0), 1.05);
    assert_eq!(interpolate_efficiency_factor(&curve, 120.0), 1.0);
}

#[test]
fn imported_weather_drives_the_simulation() {
    let raw = common::weather_text(|i| if i < 4380 { 30.0 } else { 40.0 });
    let climate = parse_weather_file(&raw).expect("weather parses");
    assert_eq!(climate.len(), HOURS_PER_YEAR);
    assert_eq!(climate[0].hour, 0);
    assert_eq!(climate[HOURS_PER_YEAR - 1].month, 12);

    let air = common::chiller(CondensationMedium::Air);
    let result = simulate_annual_performance(Some(&air), &climate, &vec![50.0; HOURS_PER_YEAR], 7.0)
        .expect("runs");
    assert!(result.hourly[5000].real_efficiency < result.hourly[100].real_efficiency);
}

#[test]
fn histogram_counts_every_defined_point() {
    let profile = region("oceanic").expect("known region");
    let climate = generate_annual_weather(&profile, 9);
    let total: usize = dry_bulb_histogram(&climate).iter().map(|b| b.count).sum();
    assert_eq!(total, HOURS_PER_YEAR);

    let mut values: Vec<f64> = climate.iter().map(|p| p.relative_humidity_pct).collect();
    values[0] = f64::NAN;
    values[1] = f64::NAN;
    let total: usize = histogram(values, 5.0).iter().map(|b| b.count).sum();
    assert_eq!(total, HOURS_PER_YEAR - 2);
}

#[test]
fn wet_bulb_is_below_dry_bulb() {
    let w = wet_bulb(30.0, 50.0);
    assert!(w > 0.0 && w < 30.0);
}

#[test]
fn staleness_follows_input_edits() {
    let equipment = common::chiller(CondensationMedium::Air);
    let profile = RegionClimateProfile {
        min_temp_c: 0.0,
        max_temp_c: 25.0,
        avg_relative_humidity_pct: 70.0,
    };
    let climate = generate_annual_weather(&profile, 5);
    let mut params = LoadProfileParameters::from_standard(80.0, StandardProfile::Retail);
    let load = synthesize_annual_load(&params);

    let used = InputsFingerprint::capture(Some(&equipment), &climate, &load, 7.0);
    assert!(is_stale(None, &used));
    assert!(!is_stale(
        Some(&used),
        &InputsFingerprint::capture(Some(&equipment), &climate, &load, 7.0)
    ));

    params.peak_power_kw = 90.0;
    let edited = synthesize_annual_load(&params);
    assert!(is_stale(
        Some(&used),
        &InputsFingerprint::capture(Some(&equipment), &climate, &edited, 7.0)
    ));
}

#[test]
fn load_csv_export_import_preserves_monthly_energy() {
    let load = synthesize_annual_load(&LoadProfileParameters::from_standard(
        200.0,
        StandardProfile::Hospital,
    ));
    let mut buf = Vec::new();
    write_load_csv(&load, &mut buf).expect("writes");
    let back = parse_load_csv(&String::from_utf8(buf).expect("utf8")).expect("parses");
    let a = monthly_energy_mwh(&load);
    let b = monthly_energy_mwh(&back);
    for (x, y) in a.iter().zip(&b) {
        assert_relative_eq!(*x, *y, epsilon = 1e-3);
    }
}
