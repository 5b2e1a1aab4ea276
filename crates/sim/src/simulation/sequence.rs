//! Lazy, pull-based drift run.
//!
//! A [`SimulationSequence`] owns the current population and advances it one
//! generation each time the consumer asks for the next record. It is finite
//! and strictly forward: once `total_generations` records have been produced
//! it stays exhausted. Replaying a run means building a new sequence from the
//! same configuration and an equally seeded RNG.

use crate::analysis::allele_frequency;
use crate::errors::{ConfigError, SimulationError};
use crate::simulation::{advance, Population, SimulationConfig};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use tracing::{debug, error, trace};

/// Allele frequency observed after one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Generation index, starting at 1
    pub generation: usize,
    /// Frequency of allele `1` at the reported locus, in `[0, 1]`
    pub frequency: f64,
}

impl GenerationRecord {
    /// `true` when the allele has been lost (0) or fixed (1).
    #[inline]
    pub fn is_absorbed(&self) -> bool {
        self.frequency == 0.0 || self.frequency == 1.0
    }
}

/// Lifecycle of a sequence.
#[derive(Debug, Clone)]
enum State {
    /// No population exists yet.
    Uninitialized,
    /// The current generation's population.
    Running(Population),
    /// Terminal: no further records.
    Exhausted,
}

/// Lazy, finite sequence of [`GenerationRecord`]s.
///
/// The population is created on the first request, so constructing a
/// sequence is cheap and draws nothing from the RNG.
///
/// ```
/// use drift_sim::simulation::{SimulationConfig, SimulationSequence};
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256PlusPlus;
///
/// let config = SimulationConfig::new(10, 3, None).unwrap();
/// let rng = Xoshiro256PlusPlus::seed_from_u64(42);
/// let mut sequence = SimulationSequence::new(config, rng).unwrap();
///
/// let generations: Vec<usize> = sequence.by_ref().map(|r| r.generation).collect();
/// assert_eq!(generations, vec![1, 2, 3]);
/// assert!(sequence.next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct SimulationSequence<R> {
    config: SimulationConfig,
    state: State,
    generation: usize,
    rng: R,
}

impl<R: Rng> SimulationSequence<R> {
    /// Create a sequence driven by an explicit RNG.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidConfiguration`] if `config` does not
    /// validate; an invalid configuration is never run.
    pub fn new(config: SimulationConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: State::Uninitialized,
            generation: 0,
            rng,
        })
    }

    /// The configuration this sequence was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Records still to be produced.
    pub fn remaining(&self) -> usize {
        match self.state {
            State::Exhausted => 0,
            _ => self.config.total_generations - self.generation,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }

    /// Produce the next record, surfacing internal failures.
    ///
    /// Returns `Ok(None)` once the sequence is exhausted. On error the
    /// sequence is exhausted as well.
    pub fn try_next(&mut self) -> Result<Option<GenerationRecord>, SimulationError> {
        let population = match std::mem::replace(&mut self.state, State::Exhausted) {
            State::Exhausted => return Ok(None),
            State::Uninitialized => {
                debug!(
                    population_size = self.config.population_size,
                    genotype_length = self.config.genotype_length,
                    total_generations = self.config.total_generations,
                    "initializing population"
                );
                Population::random(
                    self.config.population_size,
                    self.config.genotype_length,
                    &mut self.rng,
                )?
            }
            State::Running(population) => population,
        };

        let next = advance(&population, self.config.crossover_probability, &mut self.rng)?;
        drop(population);
        let frequency = allele_frequency(&next, self.config.locus)?;
        self.generation += 1;

        let record = GenerationRecord {
            generation: self.generation,
            frequency,
        };
        trace!(generation = record.generation, frequency, "generation record");

        if self.generation < self.config.total_generations {
            self.state = State::Running(next);
        } else {
            debug!(generation = self.generation, "simulation exhausted");
        }
        Ok(Some(record))
    }
}

impl SimulationSequence<Xoshiro256PlusPlus> {
    /// Create a sequence with its own Xoshiro256++ generator, seeded from
    /// `config.seed` or from OS entropy when no seed is set.
    pub fn from_config(config: SimulationConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };
        Self::new(config, rng)
    }
}

impl<R: Rng> Iterator for SimulationSequence<R> {
    type Item = GenerationRecord;

    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(record) => record,
            Err(e) => {
                error!(generation = self.generation, "simulation step failed: {e}");
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<R: Rng> FusedIterator for SimulationSequence<R> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(size: usize, generations: usize, seed: u64) -> SimulationSequence<Xoshiro256PlusPlus> {
        let config = SimulationConfig::new(size, generations, Some(seed)).unwrap();
        SimulationSequence::from_config(config).unwrap()
    }

    #[test]
    fn test_sequence_yields_exact_generations() {
        let records: Vec<_> = sequence(20, 15, 42).collect();
        assert_eq!(records.len(), 15);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.generation, i + 1);
            assert!((0.0..=1.0).contains(&record.frequency));
        }
    }

    #[test]
    fn test_sequence_stays_exhausted() {
        let mut seq = sequence(5, 2, 1);
        assert!(!seq.is_exhausted());
        assert!(seq.next().is_some());
        assert!(seq.next().is_some());
        assert!(seq.is_exhausted());
        for _ in 0..10 {
            assert!(seq.next().is_none());
        }
        assert_eq!(seq.generation(), 2);
    }

    #[test]
    fn test_sequence_lazy_initialization() {
        let seq = sequence(5, 3, 1);
        assert_eq!(seq.generation(), 0);
        assert!(matches!(seq.state, State::Uninitialized));
    }

    #[test]
    fn test_sequence_size_hint() {
        let mut seq = sequence(5, 4, 1);
        assert_eq!(seq.size_hint(), (4, Some(4)));
        seq.next();
        assert_eq!(seq.size_hint(), (3, Some(3)));
        assert_eq!(seq.remaining(), 3);
        seq.by_ref().for_each(drop);
        assert_eq!(seq.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_sequence_reproducible_with_seed() {
        let a: Vec<_> = sequence(50, 30, 7).collect();
        let b: Vec<_> = sequence(50, 30, 7).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sequence_different_seeds_diverge() {
        let a: Vec<_> = sequence(200, 30, 1).collect();
        let b: Vec<_> = sequence(200, 30, 2).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sequence_single_individual_is_fixed() {
        // One individual: the next generation is always a copy of it.
        let records: Vec<_> = sequence(1, 10, 3).collect();
        let first = records[0].frequency;
        assert!(first == 0.0 || first == 1.0);
        assert!(records.iter().all(|r| r.frequency == first));
    }

    #[test]
    fn test_sequence_absorbing_states() {
        // Without mutation a lost or fixed allele never returns.
        let records: Vec<_> = sequence(10, 500, 9).collect();
        if let Some(pos) = records.iter().position(GenerationRecord::is_absorbed) {
            let absorbed = records[pos].frequency;
            assert!(records[pos..].iter().all(|r| r.frequency == absorbed));
        }
    }

    #[test]
    fn test_sequence_rejects_invalid_config() {
        let mut config = SimulationConfig::new(5, 5, None).unwrap();
        config.population_size = 0;
        assert!(SimulationSequence::from_config(config).is_err());
    }

    #[test]
    fn test_sequence_injected_rng() {
        let config = SimulationConfig::new(10, 5, None).unwrap();
        let rng = rand::rngs::StdRng::seed_from_u64(3);
        let seq = SimulationSequence::new(config, rng).unwrap();
        assert_eq!(seq.count(), 5);
    }

    #[test]
    fn test_record_is_absorbed() {
        assert!(GenerationRecord { generation: 1, frequency: 0.0 }.is_absorbed());
        assert!(GenerationRecord { generation: 1, frequency: 1.0 }.is_absorbed());
        assert!(!GenerationRecord { generation: 1, frequency: 0.5 }.is_absorbed());
    }
}
