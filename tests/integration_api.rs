//! Integration tests for the REST API feature.

#![cfg(feature = "api")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::util::ServiceExt;

use chiller_sim::api::{AppState, router};
use chiller_sim::config::ScenarioConfig;
use chiller_sim::runner::run_scenario;

/// Run the heat-pump preset and wrap it as API state.
fn build_api_state() -> Arc<AppState> {
    let cfg = ScenarioConfig::hotel_heat_pump();
    let run = run_scenario(&cfg).expect("preset runs");
    Arc::new(AppState {
        scenario: "hotel_heat_pump".to_string(),
        sample_stride_hours: cfg.simulation.sample_stride_hours,
        climate: run.inputs.climate,
        result: run.result,
        statistics: run.statistics,
    })
}

async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = router(build_api_state());
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn heat_pump_summary_reports_cop() {
    let (status, json) = get("/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["operating_mode"], "heating");
    assert_eq!(json["report"]["label"], "seasonal COP");
    assert_eq!(json["report"]["equipment_name"], "AHP-220");

    let thermal = json["report"]["thermal_energy_mwh"].as_f64().unwrap();
    let electrical = json["report"]["electrical_energy_mwh"].as_f64().unwrap();
    let seasonal = json["report"]["seasonal_efficiency"].as_f64().unwrap();
    assert!((thermal / electrical - seasonal).abs() < 1e-9);

    let co2 = json["report"]["co2_tonnes"].as_f64().unwrap();
    assert!((co2 - electrical * 0.25).abs() < 1e-9);
}

#[tokio::test]
async fn hourly_records_expose_every_column() {
    let (status, json) = get("/hourly?from=0&to=47&stride=1").await;
    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 48);
    for key in [
        "hour_index",
        "outdoor_temp_c",
        "load_kw",
        "thermal_output_kw",
        "load_ratio_pct",
        "part_load_factor",
        "temp_correction",
        "real_efficiency",
        "electrical_input_kw",
    ] {
        assert!(rows[0].get(key).is_some(), "missing `{key}`");
    }
}

#[tokio::test]
async fn hourly_stride_decimates_whole_year() {
    let (status, json) = get("/hourly?stride=168").await;
    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 53); // ceil(8760 / 168)
    assert_eq!(rows[1]["hour_index"], 168);
}

#[tokio::test]
async fn monthly_load_sums_to_annual_demand() {
    let (_, summary) = get("/summary").await;
    let (status, json) = get("/monthly").await;
    assert_eq!(status, StatusCode::OK);
    let total: f64 = json
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["load_mwh"].as_f64().unwrap())
        .sum();
    let annual = summary["load"]["annual_mwh"].as_f64().unwrap();
    assert!((total - annual).abs() < 1e-6);
}

#[tokio::test]
async fn continental_winter_is_colder_than_summer() {
    let (_, json) = get("/monthly").await;
    let months = json.as_array().unwrap();
    let jan = months[0]["climate"]["avg_dry_bulb_c"].as_f64().unwrap();
    let jul = months[6]["climate"]["avg_dry_bulb_c"].as_f64().unwrap();
    assert!(jan < jul);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, _) = get_raw("/telemetry").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

async fn get_raw(uri: &str) -> (StatusCode, Vec<u8>) {
    let app = router(build_api_state());
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}
