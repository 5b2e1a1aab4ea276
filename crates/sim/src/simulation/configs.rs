//! Simulation parameters and configuration.
//!
//! A [`SimulationConfig`] is supplied once when a run starts and never
//! changes afterwards. It can be deserialized from JSON; every field except
//! `population_size` and `total_generations` has a default.

use crate::analysis::REFERENCE_LOCUS;
use crate::errors::ConfigError;
use crate::evolution::recombination::validate_probability;
use serde::{Deserialize, Serialize};

/// Per-pair crossover probability used when none is configured.
pub const DEFAULT_CROSSOVER_PROBABILITY: f64 = 0.5;

/// Genotype length used when none is configured.
pub const DEFAULT_GENOTYPE_LENGTH: usize = 2;

/// High-level simulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of haploid individuals in the population
    pub population_size: usize,
    /// Total number of generations to simulate
    pub total_generations: usize,
    /// Probability that an adjacent offspring pair recombines
    #[serde(default = "default_crossover_probability")]
    pub crossover_probability: f64,
    /// Number of loci per genotype
    #[serde(default = "default_genotype_length")]
    pub genotype_length: usize,
    /// Locus whose allele frequency is reported
    #[serde(default)]
    pub locus: usize,
    /// Optional RNG seed for reproducibility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_crossover_probability() -> f64 {
    DEFAULT_CROSSOVER_PROBABILITY
}

fn default_genotype_length() -> usize {
    DEFAULT_GENOTYPE_LENGTH
}

impl SimulationConfig {
    /// Create a validated configuration with default crossover probability,
    /// genotype length and locus.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidConfiguration`] if either count is zero.
    pub fn new(
        population_size: usize,
        total_generations: usize,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            population_size,
            total_generations,
            crossover_probability: DEFAULT_CROSSOVER_PROBABILITY,
            genotype_length: DEFAULT_GENOTYPE_LENGTH,
            locus: REFERENCE_LOCUS,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter against its domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "population_size must be a positive integer".into(),
            ));
        }
        if self.total_generations == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "total_generations must be a positive integer".into(),
            ));
        }
        validate_probability(self.crossover_probability)
            .map_err(|e| ConfigError::InvalidConfiguration(e.to_string()))?;
        if self.genotype_length == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "genotype_length must be a positive integer".into(),
            ));
        }
        if self.locus >= self.genotype_length {
            return Err(ConfigError::InvalidConfiguration(format!(
                "locus {} out of range for genotype length {}",
                self.locus, self.genotype_length
            )));
        }
        Ok(())
    }
}
