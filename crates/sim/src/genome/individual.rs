use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::Allele;
use crate::errors::GenotypeError;

/// A haploid organism carrying a fixed-length genotype.
///
/// The genotype length is fixed at construction. Genes are only ever
/// rewritten in place by recombination, which swaps alleles between two
/// individuals without changing either length. Cloning an `Individual`
/// produces a fully independent copy, which is what the generation step
/// relies on before recombining offspring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Individual {
    genes: Vec<Allele>,
}

impl Individual {
    /// Create a new `Individual` from a non-empty genotype.
    ///
    /// # Errors
    /// Returns [`GenotypeError::Empty`] when `genes` is empty.
    pub fn new(genes: Vec<Allele>) -> Result<Self, GenotypeError> {
        if genes.is_empty() {
            return Err(GenotypeError::Empty);
        }
        Ok(Self { genes })
    }

    /// Draw a genotype of `length` independent, uniformly random alleles.
    ///
    /// # Errors
    /// Returns [`GenotypeError::Empty`] when `length` is zero.
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self, GenotypeError> {
        Self::new((0..length).map(|_| rng.random::<Allele>()).collect())
    }

    /// Build an individual from raw 0/1 values.
    ///
    /// ```
    /// use drift_sim::genome::Individual;
    ///
    /// let ind = Individual::from_bits(&[1, 0, 1]).unwrap();
    /// assert_eq!(ind.to_string(), "101");
    /// assert!(Individual::from_bits(&[2]).is_err());
    /// ```
    pub fn from_bits(bits: &[u8]) -> Result<Self, GenotypeError> {
        let genes = bits
            .iter()
            .map(|&b| Allele::try_from(b))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(genes)
    }

    /// Number of loci in the genotype.
    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always `false`: empty genotypes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Borrow the genotype.
    #[inline]
    pub fn genes(&self) -> &[Allele] {
        &self.genes
    }

    /// Allele at `locus`, or `None` if out of range.
    #[inline]
    pub fn get(&self, locus: usize) -> Option<Allele> {
        self.genes.get(locus).copied()
    }

    /// Mutable view of the genes. The slice cannot grow or shrink, so the
    /// fixed-length invariant holds for every caller.
    #[inline]
    pub(crate) fn genes_mut(&mut self) -> &mut [Allele] {
        &mut self.genes
    }
}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for gene in &self.genes {
            write!(f, "{gene}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_individual_new() {
        let ind = Individual::new(vec![Allele::One, Allele::Zero]).unwrap();
        assert_eq!(ind.len(), 2);
        assert!(!ind.is_empty());
        assert_eq!(ind.get(0), Some(Allele::One));
        assert_eq!(ind.get(1), Some(Allele::Zero));
        assert_eq!(ind.get(2), None);
    }

    #[test]
    fn test_individual_empty_rejected() {
        assert_eq!(Individual::new(Vec::new()), Err(GenotypeError::Empty));
        assert_eq!(Individual::from_bits(&[]), Err(GenotypeError::Empty));
    }

    #[test]
    fn test_individual_from_bits_invalid() {
        assert_eq!(
            Individual::from_bits(&[0, 1, 3]),
            Err(GenotypeError::InvalidAllele(3))
        );
    }

    #[test]
    fn test_individual_random_length() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let ind = Individual::random(8, &mut rng).unwrap();
        assert_eq!(ind.len(), 8);
        assert!(Individual::random(0, &mut rng).is_err());
    }

    #[test]
    fn test_individual_random_is_reproducible() {
        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(99);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(99);
        assert_eq!(
            Individual::random(16, &mut rng1).unwrap(),
            Individual::random(16, &mut rng2).unwrap()
        );
    }

    #[test]
    fn test_individual_clone_is_independent() {
        let original = Individual::from_bits(&[0, 0]).unwrap();
        let mut copy = original.clone();
        copy.genes_mut()[1] = Allele::One;

        assert_eq!(original.to_string(), "00");
        assert_eq!(copy.to_string(), "01");
    }
}
