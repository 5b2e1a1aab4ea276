//! Genome structures for representing haploid individuals.

mod individual;

pub use individual::Individual;
