//! Annual energy-performance simulator for chillers and heat pumps.

/// Read-only HTTP API over a finished run.
#[cfg(feature = "api")]
pub mod api;
pub mod calendar;
/// Hourly climate series: synthesis, import and psychrometrics.
pub mod climate;
pub mod config;
pub mod equipment;
pub mod error;
pub mod io;
pub mod load;
pub mod logging;
pub mod reporting;
pub mod runner;
/// Hourly simulation engine, staleness tracking and the seasonal report.
pub mod sim;
pub mod stats;
