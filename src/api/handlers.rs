//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{
    ErrorResponse, HistogramsResponse, HourlyQuery, MonthlyRecord, SummaryResponse,
};
use crate::sim::HourlyPerformance;
use crate::stats::{dry_bulb_histogram, humidity_histogram, wet_bulb_histogram};

fn bad_request(error: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

/// `GET /summary` → 200 + `SummaryResponse` JSON
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        scenario: state.scenario.clone(),
        operating_mode: state.result.operating_mode,
        report: state.statistics.report.clone(),
        load: state.statistics.load.clone(),
    })
}

/// Returns hourly records, optionally restricted to a range and decimated.
///
/// `GET /hourly` → every sample-stride hour of the year
/// `GET /hourly?from=N&to=M&stride=S` → hours N..=M, every S-th
/// `GET /hourly?from=10&to=5` or `stride=0` → 400 + `ErrorResponse`
pub async fn get_hourly(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HourlyQuery>,
) -> impl IntoResponse {
    let from = query.from.unwrap_or(0);
    let to = query.to.unwrap_or(usize::MAX);
    let stride = query.stride.unwrap_or(state.sample_stride_hours);

    if from > to {
        return Err(bad_request(format!(
            "`from` ({from}) must be <= `to` ({to})"
        )));
    }
    if stride == 0 {
        return Err(bad_request("`stride` must be > 0".to_string()));
    }

    let records: Vec<HourlyPerformance> = state
        .result
        .hourly
        .iter()
        .filter(|h| h.hour_index >= from && h.hour_index <= to)
        .step_by(stride)
        .cloned()
        .collect();

    Ok(Json(records))
}

/// `GET /monthly` → 200 + twelve `MonthlyRecord`s, January first
pub async fn get_monthly(State(state): State<Arc<AppState>>) -> Json<Vec<MonthlyRecord>> {
    let stats = &state.statistics;
    let records = (1..=12_u8)
        .map(|month| {
            let i = usize::from(month - 1);
            MonthlyRecord {
                month,
                climate: stats
                    .monthly_climate
                    .iter()
                    .find(|m| m.month == month)
                    .cloned(),
                load_mwh: stats.monthly_load_mwh[i],
                electrical_mwh: stats.monthly_electrical_mwh[i],
            }
        })
        .collect();
    Json(records)
}

/// `GET /histograms` → 200 + `HistogramsResponse` JSON
pub async fn get_histograms(State(state): State<Arc<AppState>>) -> Json<HistogramsResponse> {
    Json(HistogramsResponse {
        dry_bulb_c: dry_bulb_histogram(&state.climate),
        wet_bulb_c: wet_bulb_histogram(&state.climate),
        relative_humidity_pct: humidity_histogram(&state.climate),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::config::ScenarioConfig;
    use crate::runner::run_scenario;

    fn make_test_state() -> Arc<AppState> {
        let run = run_scenario(&ScenarioConfig::baseline()).expect("baseline runs");
        Arc::new(AppState {
            scenario: "office_chiller".to_string(),
            sample_stride_hours: 24,
            climate: run.inputs.climate,
            result: run.result,
            statistics: run.statistics,
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = router(make_test_state());
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn summary_returns_200() {
        let (status, json) = get_json("/summary").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["scenario"], "office_chiller");
        assert_eq!(json["operating_mode"], "cooling");
        assert_eq!(json["report"]["label"], "seasonal EER");
        assert!(json["load"]["peak_kw"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn hourly_defaults_to_sample_stride() {
        let (status, json) = get_json("/hourly").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 365);
        assert_eq!(rows[1]["hour_index"], 24);
    }

    #[tokio::test]
    async fn hourly_range_query() {
        let (status, json) = get_json("/hourly?from=5&to=10&stride=1").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 6); // hours 5,6,7,8,9,10
        assert_eq!(rows[0]["hour_index"], 5);
        assert_eq!(rows[5]["hour_index"], 10);
    }

    #[tokio::test]
    async fn hourly_invalid_range_returns_400() {
        let (status, json) = get_json("/hourly?from=10&to=5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn hourly_zero_stride_returns_400() {
        let (status, _) = get_json("/hourly?stride=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn monthly_has_twelve_months() {
        let (status, json) = get_json("/monthly").await;
        assert_eq!(status, StatusCode::OK);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0]["month"], 1);
        assert_eq!(rows[6]["climate"]["month"], 7);
    }

    #[tokio::test]
    async fn histograms_count_every_hour() {
        let (status, json) = get_json("/histograms").await;
        assert_eq!(status, StatusCode::OK);
        let total: u64 = json["dry_bulb_c"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["count"].as_u64().unwrap())
            .sum();
        assert_eq!(total, 8760);
    }
}
