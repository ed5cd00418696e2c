//! REST API over a finished annual run.
//!
//! Read-only GET endpoints:
//! - `/summary`: seasonal report and load statistics
//! - `/hourly`: hourly records with optional range and stride
//! - `/monthly`: per-month climate and energy
//! - `/histograms`: dry-bulb, wet-bulb and humidity distributions

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use log::info;

use crate::climate::ClimatePoint;
use crate::reporting::AnnualStatistics;
use crate::sim::SimulationResult;

pub use types::{
    ErrorResponse, HistogramsResponse, HourlyQuery, MonthlyRecord, SummaryResponse,
};

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the simulation run completes and wrapped in
/// `Arc`; no locks needed since all data is read-only.
pub struct AppState {
    /// Scenario label (preset name or scenario file).
    pub scenario: String,
    /// Default stride of `/hourly` (hours).
    pub sample_stride_hours: usize,
    pub climate: Vec<ClimatePoint>,
    pub result: Arc<SimulationResult>,
    pub statistics: AnnualStatistics,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/summary", get(handlers::get_summary))
        .route("/hourly", get(handlers::get_hourly))
        .route("/monthly", get(handlers::get_monthly))
        .route("/histograms", get(handlers::get_histograms))
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on http://{addr}");
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app).await
}
