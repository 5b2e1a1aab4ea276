//! # Drift Simulation Crate
//!
//! The `drift_sim` crate provides the core engine for simulating genetic drift
//! in a haploid population with a bi-allelic locus. Each generation the
//! population is resampled uniformly at random (no fitness weighting) and
//! adjacent offspring pairs undergo two-point recombination with a fixed
//! probability. The frequency of allele `1` at a reference locus is reported
//! once per generation through a lazy, pull-based [`SimulationSequence`].
//!
//! ```
//! use drift_sim::prelude::*;
//!
//! let config = SimulationBuilder::new()
//!     .population_size(50)
//!     .generations(20)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! let records: Vec<GenerationRecord> = SimulationSequence::from_config(config).unwrap().collect();
//! assert_eq!(records.len(), 20);
//! assert!(records.iter().all(|r| (0.0..=1.0).contains(&r.frequency)));
//! ```

pub mod analysis;
pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::Allele;
pub use simulation::{GenerationRecord, SimulationSequence};
