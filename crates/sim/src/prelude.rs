//! Commonly used imports for convenience.
//!
//! ```
//! use drift_sim::prelude::*;
//!
//! let ind = Individual::from_bits(&[1, 0]).unwrap();
//! assert_eq!(ind.get(0), Some(Allele::One));
//! ```

pub use crate::analysis::{allele_frequency, reference_frequency, Trajectory};
pub use crate::base::Allele;
pub use crate::errors;
pub use crate::evolution::{cross_two_point, select_random, CrossoverPoints};
pub use crate::genome::Individual;
pub use crate::simulation::{
    advance, GenerationRecord, Population, SimulationBuilder, SimulationConfig,
    SimulationSequence,
};
