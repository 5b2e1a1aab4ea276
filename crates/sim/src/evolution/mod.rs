//! Evolutionary operators for the drift model.
//!
//! - **Selection**: uniform sampling with replacement, no fitness weighting
//! - **Recombination**: two-point crossover between paired offspring

pub mod recombination;
pub mod selection;

pub use recombination::{cross_at, cross_two_point, CrossoverPoints, RecombinationError};
pub use selection::select_random;
