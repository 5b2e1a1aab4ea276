//! Generation update for the drift model.
//!
//! One generation is: sample parents uniformly with replacement, clone them
//! into independent offspring, pair offspring in order and recombine each
//! pair with a fixed probability. Fitness is never evaluated.

use crate::errors::RecombinationError;
use crate::evolution::recombination::{cross_two_point, validate_probability};
use crate::genome::Individual;
use crate::simulation::Population;
use rand::Rng;
use tracing::{debug, instrument};

/// Produce the next generation from `population`.
///
/// 1. Select `population.size()` parents uniformly with replacement.
/// 2. Clone each selected parent so offspring never alias the prior
///    generation or each other.
/// 3. Pair offspring as `(0, 1), (2, 3), ...`; an odd trailing offspring is
///    left unpaired.
/// 4. For each pair draw `u ~ U[0, 1)` and apply two-point crossover when
///    `u < crossover_probability`.
///
/// The input population is never modified and the output has the same size.
///
/// # Errors
/// Returns [`RecombinationError::InvalidProbability`] if the probability is
/// outside `[0, 1]`, or [`RecombinationError::LengthMismatch`] if the
/// population mixes genotype lengths.
#[instrument(level = "debug", skip(population, rng), fields(size = population.size()))]
pub fn advance<R: Rng + ?Sized>(
    population: &Population,
    crossover_probability: f64,
    rng: &mut R,
) -> Result<Population, RecombinationError> {
    validate_probability(crossover_probability)?;

    // 1-2. Select first, then detach the offspring from their parents.
    let mut offspring: Vec<Individual> = population
        .select_random(rng)
        .into_iter()
        .cloned()
        .collect();

    // 3-4. Recombine adjacent pairs.
    let mut recombined = 0usize;
    for pair in offspring.chunks_exact_mut(2) {
        if rng.random::<f64>() < crossover_probability {
            let (left, right) = pair.split_at_mut(1);
            cross_two_point(&mut left[0], &mut right[0], rng)?;
            recombined += 1;
        }
    }

    debug!(pairs = offspring.len() / 2, recombined, "generation advanced");
    Ok(Population::new(offspring))
}
