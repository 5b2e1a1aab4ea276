//! Simulation engine and population management.
//!
//! - `Population`: in-memory container for the individuals of one generation.
//! - `advance`: one generation of random selection and pairwise recombination.
//! - `SimulationSequence`: lazy iterator that runs generations on demand and
//!   yields one `GenerationRecord` per generation.
//! - `SimulationBuilder`: fluent builder with defaults and validation.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod population;
pub mod sequence;

pub use builder::SimulationBuilder;
pub use configs::SimulationConfig;
pub use engine::advance;
pub use population::Population;
pub use sequence::{GenerationRecord, SimulationSequence};
