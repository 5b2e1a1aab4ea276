//! Fitness-blind selection.
//!
//! Drift is change in allele frequency caused by sampling alone, so every
//! individual has the same chance of contributing to the next generation.
//! Parents are drawn uniformly and independently with replacement; a single
//! individual may be picked many times or not at all.

use crate::genome::Individual;
use crate::simulation::Population;
use rand::Rng;

/// Draw `k` individuals from `population` uniformly at random, with replacement.
///
/// The returned references borrow from `population`; callers that intend to
/// mutate offspring must clone them first.
///
/// # Panics
/// Panics if `population` is empty and `k > 0`. Population sizes are
/// validated as positive before any simulation starts.
pub fn select_random<'a, R: Rng + ?Sized>(
    population: &'a Population,
    k: usize,
    rng: &mut R,
) -> Vec<&'a Individual> {
    let individuals = population.individuals();
    assert!(
        k == 0 || !individuals.is_empty(),
        "cannot select from an empty population"
    );

    (0..k)
        .map(|_| &individuals[rng.random_range(0..individuals.len())])
        .collect()
}
