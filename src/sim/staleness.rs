//! Input fingerprints and a result slot that only ever holds a good result.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::engine::simulate_annual_performance;
use super::types::SimulationResult;
use crate::climate::ClimatePoint;
use crate::equipment::EquipmentRecord;
use crate::error::SimulationError;

/// Digest and length of one input series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesDigest {
    pub len: usize,
    pub hash: u64,
}

impl SeriesDigest {
    fn of_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut hasher = DefaultHasher::new();
        let mut len = 0_usize;
        for v in values {
            v.to_bits().hash(&mut hasher);
            len += 1;
        }
        len.hash(&mut hasher);
        Self {
            len,
            hash: hasher.finish(),
        }
    }

    /// Digest of a load series.
    pub fn of_load(load: &[f64]) -> Self {
        Self::of_values(load.iter().copied())
    }

    /// Digest of the values of a climate series that the simulator reads.
    pub fn of_climate(climate: &[ClimatePoint]) -> Self {
        Self::of_values(
            climate
                .iter()
                .flat_map(|p| [p.dry_bulb_c, p.relative_humidity_pct, p.wet_bulb_c]),
        )
    }
}

/// Structural identity of everything a simulation run depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct InputsFingerprint {
    pub equipment: Option<EquipmentRecord>,
    pub climate: SeriesDigest,
    pub load: SeriesDigest,
    pub target_output_temp_c: f64,
}

impl InputsFingerprint {
    pub fn capture(
        equipment: Option<&EquipmentRecord>,
        climate: &[ClimatePoint],
        load: &[f64],
        target_output_temp_c: f64,
    ) -> Self {
        Self {
            equipment: equipment.cloned(),
            climate: SeriesDigest::of_climate(climate),
            load: SeriesDigest::of_load(load),
            target_output_temp_c,
        }
    }
}

/// Whether a result computed for `last` is out of date for `current`.
///
/// With no previous run there is nothing up to date, so this is `true`.
pub fn is_stale(last: Option<&InputsFingerprint>, current: &InputsFingerprint) -> bool {
    last != Some(current)
}

/// Latest successful result together with the inputs it was computed from.
#[derive(Debug, Clone, Default)]
pub struct ResultSlot {
    latest: Option<(InputsFingerprint, Arc<SimulationResult>)>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint of the stored result, if any.
    pub fn fingerprint(&self) -> Option<&InputsFingerprint> {
        self.latest.as_ref().map(|(fp, _)| fp)
    }

    /// The stored result when it matches `current`.
    pub fn current(&self, current: &InputsFingerprint) -> Option<Arc<SimulationResult>> {
        match &self.latest {
            Some((fp, result)) if fp == current => Some(Arc::clone(result)),
            _ => None,
        }
    }

    /// The stored result regardless of staleness.
    pub fn last(&self) -> Option<Arc<SimulationResult>> {
        self.latest.as_ref().map(|(_, r)| Arc::clone(r))
    }

    /// Runs the simulator for the given inputs and stores the result.
    ///
    /// If the stored result already matches the inputs it is returned without
    /// recomputing. On error the previous result stays in place.
    pub fn refresh(
        &mut self,
        equipment: Option<&EquipmentRecord>,
        climate: &[ClimatePoint],
        load: &[f64],
        target_output_temp_c: f64,
    ) -> Result<Arc<SimulationResult>, SimulationError> {
        let fp = InputsFingerprint::capture(equipment, climate, load, target_output_temp_c);
        if let Some(result) = self.current(&fp) {
            return Ok(result);
        }
        let result = Arc::new(simulate_annual_performance(
            equipment,
            climate,
            load,
            target_output_temp_c,
        )?);
        self.latest = Some((fp, Arc::clone(&result)));
        Ok(result)
    }
}
