use core::fmt;

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GenotypeError;

/// A bi-valued gene.
///
/// `Allele` is a compact, Copyable representation backed by a single byte.
/// The mapping of variants to integers is stable (Zero=0, One=1) and is what
/// allele frequencies count: the frequency of a population is the share of
/// `One` at the reference locus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Allele {
    Zero = 0,
    One = 1,
}

impl Allele {
    /// Convert from u8 index (0-1)
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-1).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub const fn from_bool(bit: bool) -> Self {
        if bit { Self::One } else { Self::Zero }
    }

    /// Return `true` for the counted allele.
    #[inline(always)]
    pub const fn is_one(self) -> bool {
        matches!(self, Self::One)
    }

    /// Return the other allele.
    #[inline(always)]
    pub const fn flip(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl TryFrom<u8> for Allele {
    type Error = GenotypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(value).ok_or(GenotypeError::InvalidAllele(value))
    }
}

impl From<Allele> for u8 {
    #[inline]
    fn from(allele: Allele) -> Self {
        allele.to_index()
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_index())
    }
}

/// Each allele is drawn with probability 1/2.
impl Distribution<Allele> for StandardUniform {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Allele {
        Allele::from_bool(rng.random::<bool>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_index_roundtrip() {
        assert_eq!(Allele::from_index(0), Some(Allele::Zero));
        assert_eq!(Allele::from_index(1), Some(Allele::One));
        assert_eq!(Allele::from_index(2), None);
        assert_eq!(Allele::One.to_index(), 1);
        assert_eq!(u8::from(Allele::Zero), 0);
    }

    #[test]
    fn test_try_from_rejects_other_values() {
        assert_eq!(Allele::try_from(1), Ok(Allele::One));
        assert_eq!(Allele::try_from(7), Err(GenotypeError::InvalidAllele(7)));
    }

    #[test]
    fn test_flip_and_is_one() {
        assert_eq!(Allele::Zero.flip(), Allele::One);
        assert_eq!(Allele::One.flip(), Allele::Zero);
        assert!(Allele::One.is_one());
        assert!(!Allele::Zero.is_one());
        assert_eq!(Allele::from_bool(true), Allele::One);
    }

    #[test]
    fn test_display() {
        assert_eq!(Allele::Zero.to_string(), "0");
        assert_eq!(Allele::One.to_string(), "1");
    }

    #[test]
    fn test_sampling_is_roughly_uniform() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let n = 10_000;
        let ones = (0..n)
            .filter(|_| rng.random::<Allele>().is_one())
            .count();
        let share = ones as f64 / n as f64;
        assert!(share > 0.47 && share < 0.53, "share of ones was {share}");
    }
}
