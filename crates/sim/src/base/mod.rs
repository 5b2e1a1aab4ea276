//! Base types for genotype representation.

mod allele;

pub use allele::Allele;
