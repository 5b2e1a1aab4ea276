//! Population management and operations.
//!
//! A population is an ordered, fixed-size collection of haploid individuals.
//! Each generation it is replaced wholesale by the output of
//! [`advance`](crate::simulation::advance); no structure is shared between
//! consecutive generations.

use crate::errors::GenotypeError;
use crate::evolution::select_random;
use crate::genome::Individual;
use rand::Rng;

/// A population of haploid individuals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
}

impl Population {
    /// Create a new population from individuals.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Create a population of `size` individuals whose genes are drawn
    /// independently and uniformly from `{0, 1}`.
    ///
    /// # Errors
    /// Returns [`GenotypeError::Empty`] when `genotype_length` is zero.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        genotype_length: usize,
        rng: &mut R,
    ) -> Result<Self, GenotypeError> {
        let individuals = (0..size)
            .map(|_| Individual::random(genotype_length, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { individuals })
    }

    /// Build a population from raw 0/1 genotypes.
    ///
    /// ```
    /// use drift_sim::simulation::Population;
    ///
    /// let pop = Population::from_bits(&[&[1, 1], &[0, 1]]).unwrap();
    /// assert_eq!(pop.size(), 2);
    /// ```
    pub fn from_bits(genotypes: &[&[u8]]) -> Result<Self, GenotypeError> {
        genotypes.iter().map(|bits| Individual::from_bits(bits)).collect()
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get all individuals as a slice.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Get a specific individual by index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Genotype length of the first individual, or `None` for an empty population.
    pub fn genotype_length(&self) -> Option<usize> {
        self.individuals.first().map(Individual::len)
    }

    /// Iterate over the individuals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// Sample `self.size()` individuals uniformly with replacement.
    pub fn select_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&Individual> {
        select_random(self, self.size(), rng)
    }

    /// Consume the population and return its individuals.
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
