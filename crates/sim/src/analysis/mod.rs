//! Population genetics statistics for drift runs.
//!
//! - Allele frequency at a locus (the per-generation statistic)
//! - Temporal summaries over a stream of generation records

pub mod frequency;
pub mod temporal;

pub use frequency::{allele_count, allele_frequency, reference_frequency, REFERENCE_LOCUS};
pub use temporal::Trajectory;
