//! Two-point recombination between haploid genotypes.
//!
//! Two cut points are drawn and the segment between them is exchanged
//! between the two partners in place. The swapped range is half-open:
//! `[start, end)`.

pub use crate::errors::RecombinationError;
use crate::genome::Individual;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Half-open range `[start, end)` of loci exchanged by a two-point crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossoverPoints {
    pub start: usize,
    pub end: usize,
}

impl CrossoverPoints {
    /// Create cut points after checking them against `length`.
    ///
    /// # Errors
    /// Returns [`RecombinationError::InvalidRange`] unless
    /// `start < end <= length`.
    pub fn new(start: usize, end: usize, length: usize) -> Result<Self, RecombinationError> {
        if start >= end || end > length {
            return Err(RecombinationError::InvalidRange { start, end, length });
        }
        Ok(Self { start, end })
    }

    /// Sample two distinct cut points for a genotype of `length` loci.
    ///
    /// The first point is uniform on `1..=length`, the second uniform on
    /// `1..length` and shifted past the first when they collide, and the pair
    /// is ordered. Locus 0 therefore never moves; for `length == 2` the only
    /// possible range is `[1, 2)`. Returns `None` when `length < 2`, where no
    /// exchange is possible.
    pub fn sample<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Option<Self> {
        if length < 2 {
            return None;
        }

        let first = rng.random_range(1..=length);
        let mut second = rng.random_range(1..length);
        let (start, end) = if second >= first {
            second += 1;
            (first, second)
        } else {
            (second, first)
        };

        debug_assert!(start < end && end <= length);
        Some(Self { start, end })
    }

    /// Number of loci exchanged.
    #[inline]
    pub fn span(&self) -> usize {
        self.end - self.start
    }
}

/// Exchange the genes of `a` and `b` inside `points`.
///
/// # Errors
/// Returns [`RecombinationError::LengthMismatch`] if the genotypes differ in
/// length and [`RecombinationError::InvalidRange`] if the points fall outside
/// them. Neither individual is touched on error.
pub fn cross_at(
    a: &mut Individual,
    b: &mut Individual,
    points: CrossoverPoints,
) -> Result<(), RecombinationError> {
    if a.len() != b.len() {
        return Err(RecombinationError::LengthMismatch {
            len1: a.len(),
            len2: b.len(),
        });
    }
    let CrossoverPoints { start, end } = CrossoverPoints::new(points.start, points.end, a.len())?;

    a.genes_mut()[start..end].swap_with_slice(&mut b.genes_mut()[start..end]);
    Ok(())
}

/// Two-point crossover: sample cut points and exchange the segment in place.
///
/// Genotypes of length 1 are left untouched. Returns the points used, if any.
///
/// # Errors
/// Returns [`RecombinationError::LengthMismatch`] if the genotypes differ in
/// length.
///
/// ```
/// use drift_sim::evolution::cross_two_point;
/// use drift_sim::genome::Individual;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256PlusPlus;
///
/// let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
/// let mut a = Individual::from_bits(&[0, 0]).unwrap();
/// let mut b = Individual::from_bits(&[1, 1]).unwrap();
///
/// cross_two_point(&mut a, &mut b, &mut rng).unwrap();
/// assert_eq!(a.to_string(), "01");
/// assert_eq!(b.to_string(), "10");
/// ```
pub fn cross_two_point<R: Rng + ?Sized>(
    a: &mut Individual,
    b: &mut Individual,
    rng: &mut R,
) -> Result<Option<CrossoverPoints>, RecombinationError> {
    if a.len() != b.len() {
        return Err(RecombinationError::LengthMismatch {
            len1: a.len(),
            len2: b.len(),
        });
    }

    let Some(points) = CrossoverPoints::sample(a.len(), rng) else {
        return Ok(None);
    };
    trace!(start = points.start, end = points.end, "two-point crossover");
    cross_at(a, b, points)?;
    Ok(Some(points))
}

/// Validate a per-pair crossover probability.
pub fn validate_probability(probability: f64) -> Result<f64, RecombinationError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(RecombinationError::InvalidProbability(
            "crossover_probability",
            probability,
        ));
    }
    Ok(probability)
}
