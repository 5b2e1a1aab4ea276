//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring a drift run with sensible defaults
//! and validation at `build()`.

use crate::analysis::REFERENCE_LOCUS;
pub use crate::errors::ConfigError;
use crate::simulation::configs::{DEFAULT_CROSSOVER_PROBABILITY, DEFAULT_GENOTYPE_LENGTH};
use crate::simulation::{SimulationConfig, SimulationSequence};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Builder for constructing [`SimulationConfig`] and [`SimulationSequence`]
/// instances with a fluent API.
///
/// # Examples
///
/// ```
/// use drift_sim::simulation::SimulationBuilder;
///
/// // Simple run with defaults
/// let config = SimulationBuilder::new()
///     .population_size(50)
///     .generations(100)
///     .build()
///     .unwrap();
/// assert_eq!(config.crossover_probability, 0.5);
///
/// // Fully specified and ready to iterate
/// let records: Vec<_> = SimulationBuilder::new()
///     .population_size(50)
///     .generations(10)
///     .crossover_probability(1.0)
///     .genotype_length(8)
///     .locus(3)
///     .seed(42)
///     .build_sequence()
///     .unwrap()
///     .collect();
/// assert_eq!(records.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    // Required parameters
    population_size: Option<usize>,
    generations: Option<usize>,

    crossover_probability: f64, // Default: 0.5
    genotype_length: usize,     // Default: 2
    locus: usize,               // Default: 0
    seed: Option<u64>,          // Default: None (random)
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self {
            population_size: None,
            generations: None,
            crossover_probability: DEFAULT_CROSSOVER_PROBABILITY,
            genotype_length: DEFAULT_GENOTYPE_LENGTH,
            locus: REFERENCE_LOCUS,
            seed: None,
        }
    }

    /// Set the population size (required).
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the number of generations to run (required).
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Set the probability that an offspring pair recombines.
    pub fn crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability;
        self
    }

    /// Set the number of loci per genotype.
    pub fn genotype_length(mut self, length: usize) -> Self {
        self.genotype_length = length;
        self
    }

    /// Set the locus whose allele frequency is reported.
    pub fn locus(mut self, locus: usize) -> Self {
        self.locus = locus;
        self
    }

    /// Set random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingRequired`] if the population size or
    /// generation count was never set, and
    /// [`ConfigError::InvalidConfiguration`] if any value is out of range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let population_size = self
            .population_size
            .ok_or(ConfigError::MissingRequired("population_size"))?;
        let total_generations = self
            .generations
            .ok_or(ConfigError::MissingRequired("generations"))?;

        let config = SimulationConfig {
            population_size,
            total_generations,
            crossover_probability: self.crossover_probability,
            genotype_length: self.genotype_length,
            locus: self.locus,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the configuration and wrap it in a seeded [`SimulationSequence`].
    pub fn build_sequence(self) -> Result<SimulationSequence<Xoshiro256PlusPlus>, ConfigError> {
        self.build().and_then(SimulationSequence::from_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_minimal() {
        let config = SimulationBuilder::new()
            .population_size(10)
            .generations(5)
            .build()
            .unwrap();

        assert_eq!(config.population_size, 10);
        assert_eq!(config.total_generations, 5);
        assert_eq!(config.crossover_probability, 0.5);
        assert_eq!(config.genotype_length, 2);
        assert_eq!(config.locus, 0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_all_fields() {
        let config = SimulationBuilder::new()
            .population_size(10)
            .generations(5)
            .crossover_probability(0.1)
            .genotype_length(4)
            .locus(3)
            .seed(9)
            .build()
            .unwrap();

        assert_eq!(config.crossover_probability, 0.1);
        assert_eq!(config.genotype_length, 4);
        assert_eq!(config.locus, 3);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_builder_missing_population_size() {
        let result = SimulationBuilder::new().generations(5).build();
        assert_eq!(result, Err(ConfigError::MissingRequired("population_size")));
    }

    #[test]
    fn test_builder_missing_generations() {
        let result = SimulationBuilder::new().population_size(5).build();
        assert_eq!(result, Err(ConfigError::MissingRequired("generations")));
    }

    #[test]
    fn test_builder_invalid_values() {
        assert!(SimulationBuilder::new()
            .population_size(0)
            .generations(5)
            .build()
            .is_err());
        assert!(SimulationBuilder::new()
            .population_size(5)
            .generations(5)
            .crossover_probability(2.0)
            .build()
            .is_err());
        assert!(SimulationBuilder::new()
            .population_size(5)
            .generations(5)
            .locus(2)
            .build()
            .is_err());
    }

    #[test]
    fn test_builder_sequence() {
        let sequence = SimulationBuilder::new()
            .population_size(4)
            .generations(3)
            .seed(1)
            .build_sequence()
            .unwrap();
        assert_eq!(sequence.count(), 3);
    }
}
