//! Temporal analysis
//!
//! Summaries of an allele frequency trajectory collected from a drift run.

use crate::simulation::GenerationRecord;
use serde::{Deserialize, Serialize};

/// An allele frequency trajectory in generation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    records: Vec<GenerationRecord>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Records are expected in increasing generation order.
    pub fn push(&mut self, record: GenerationRecord) {
        debug_assert!(
            self.records
                .last()
                .is_none_or(|last| last.generation < record.generation),
            "records must arrive in generation order"
        );
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    /// Frequencies only, in generation order.
    pub fn frequencies(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.frequency).collect()
    }

    pub fn last(&self) -> Option<&GenerationRecord> {
        self.records.last()
    }

    /// `true` when the last recorded frequency is 0 or 1.
    pub fn is_fixed(&self) -> bool {
        self.last().is_some_and(GenerationRecord::is_absorbed)
    }

    /// First generation at which the allele was lost or fixed.
    ///
    /// Without mutation an absorbed allele never recovers, so this is also the
    /// generation from which the trajectory stays flat.
    pub fn fixation_generation(&self) -> Option<usize> {
        self.records
            .iter()
            .find(|r| r.is_absorbed())
            .map(|r| r.generation)
    }

    pub fn min(&self) -> Option<f64> {
        self.records.iter().map(|r| r.frequency).reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.records.iter().map(|r| r.frequency).reduce(f64::max)
    }

    /// Mean frequency over all records.
    pub fn mean(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let sum: f64 = self.records.iter().map(|r| r.frequency).sum();
        Some(sum / self.records.len() as f64)
    }
}

impl FromIterator<GenerationRecord> for Trajectory {
    fn from_iter<I: IntoIterator<Item = GenerationRecord>>(iter: I) -> Self {
        let mut trajectory = Self::new();
        trajectory.extend(iter);
        trajectory
    }
}

impl Extend<GenerationRecord> for Trajectory {
    fn extend<I: IntoIterator<Item = GenerationRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}
