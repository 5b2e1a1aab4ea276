//! Allele frequency
//!
//! The frequency of allele `1` at a locus is the number of individuals
//! carrying `1` there divided by the population size.

use crate::errors::AnalysisError;
use crate::simulation::Population;

/// Locus reported when none is configured.
pub const REFERENCE_LOCUS: usize = 0;

/// Count individuals carrying allele `1` at `locus`.
///
/// # Errors
///
/// Returns [`AnalysisError::LocusOutOfBounds`] if any individual's genotype
/// is too short to have `locus`.
pub fn allele_count(population: &Population, locus: usize) -> Result<usize, AnalysisError> {
    population.iter().try_fold(0usize, |count, ind| {
        let allele = ind.get(locus).ok_or(AnalysisError::LocusOutOfBounds {
            locus,
            length: ind.len(),
        })?;
        Ok(count + usize::from(allele.is_one()))
    })
}

/// Frequency of allele `1` at `locus`, in `[0, 1]`.
///
/// # Arguments
///
/// * `population` - Population to summarize
/// * `locus` - Position within the genotype
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyPopulation`] for an empty population and
/// [`AnalysisError::LocusOutOfBounds`] when `locus` is past the genotype end.
pub fn allele_frequency(population: &Population, locus: usize) -> Result<f64, AnalysisError> {
    if population.is_empty() {
        return Err(AnalysisError::EmptyPopulation);
    }
    let count = allele_count(population, locus)?;
    Ok(count as f64 / population.size() as f64)
}

/// Frequency of allele `1` at [`REFERENCE_LOCUS`].
pub fn reference_frequency(population: &Population) -> Result<f64, AnalysisError> {
    allele_frequency(population, REFERENCE_LOCUS)
}
