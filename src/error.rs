//! Error types for imports, simulation runs and the narrative collaborator.

use thiserror::Error;

/// Failure to turn external text (weather file, load CSV) into a series.
///
/// Callers keep whatever series they already had when this is returned;
/// nothing is partially overwritten.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    /// The input yielded zero valid records.
    #[error("malformed input: {0}")]
    Malformed(String),
    /// The input could not be read.
    #[error("cannot read input: {0}")]
    Io(String),
}

/// The simulator refused to run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Equipment is missing or a series is shorter than a full year.
    #[error(
        "insufficient data: equipment selected = {equipment}, climate = {climate_len} h, \
         load = {load_len} h (need {required} h)"
    )]
    InsufficientData {
        equipment: bool,
        climate_len: usize,
        load_len: usize,
        required: usize,
    },
}

/// Failure reported by a [`NarrativeGenerator`](crate::reporting::NarrativeGenerator).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NarrativeError {
    #[error("narrative service unavailable: {0}")]
    Unavailable(String),
    #[error("narrative service rejected the request: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_data_message_names_lengths() {
        let err = SimulationError::InsufficientData {
            equipment: true,
            climate_len: 100,
            load_len: 8760,
            required: 8760,
        };
        let msg = err.to_string();
        assert!(msg.contains("climate = 100 h"));
        assert!(msg.contains("need 8760 h"));
    }

    #[test]
    fn malformed_message_carries_detail() {
        let err = ImportError::Malformed("no data rows".to_string());
        assert_eq!(err.to_string(), "malformed input: no data rows");
    }
}
