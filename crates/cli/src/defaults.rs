//! Shared default values for simulation configuration.
//! These values are used by both the clap arguments and the interactive prompts.

use drift_sim::simulation::configs::{DEFAULT_CROSSOVER_PROBABILITY, DEFAULT_GENOTYPE_LENGTH};

pub const CROSSOVER_PROB: f64 = DEFAULT_CROSSOVER_PROBABILITY;
pub const GENOTYPE_LENGTH: usize = DEFAULT_GENOTYPE_LENGTH;
pub const LOCUS: usize = 0;

pub const POPULATION_PROMPT: &str = "What's the population size? ";
pub const GENERATIONS_PROMPT: &str = "How many generations? ";
pub const INVALID_INPUT: &str = "Invalid input!";
