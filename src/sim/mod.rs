pub mod engine;
pub mod kpi;
/// Input fingerprints and the result slot.
pub mod staleness;
pub mod types;

pub use engine::simulate_annual_performance;
pub use kpi::SeasonalReport;
pub use staleness::{InputsFingerprint, ResultSlot, is_stale};
pub use types::{ChartSample, HourlyPerformance, OperatingMode, SimulationResult};
