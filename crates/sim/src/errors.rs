use thiserror::Error;

/// Error returned when a genotype cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenotypeError {
    /// A genotype must carry at least one locus.
    #[error("Empty genotype not allowed")]
    Empty,

    /// A raw value other than 0 or 1 was supplied as an allele.
    #[error("Invalid allele value: {0} (must be 0 or 1)")]
    InvalidAllele(u8),
}

/// Errors that can occur during recombination operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecombinationError {
    /// Invalid probability value
    #[error("Invalid probability for {0}: {1} (must be between 0.0 and 1.0)")]
    InvalidProbability(&'static str, f64),

    /// Genotypes have different lengths
    #[error("Genotype length mismatch: {len1} vs {len2}")]
    LengthMismatch { len1: usize, len2: usize },

    /// Swap range lies outside the genotype or is empty
    #[error("Invalid range [{start}, {end}) for genotype of length {length}")]
    InvalidRange {
        start: usize,
        end: usize,
        length: usize,
    },
}

/// Errors raised when a simulation configuration is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A parameter is outside its valid domain.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A required builder parameter was never set.
    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),
}

/// Errors that can occur while summarizing a population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Cannot compute statistics for an empty population")]
    EmptyPopulation,

    #[error("Locus {locus} out of bounds (genotype length = {length})")]
    LocusOutOfBounds { locus: usize, length: usize },
}

/// Errors surfaced while stepping a simulation.
///
/// None of these can occur once the configuration has been validated; they
/// indicate a programming error rather than a runtime condition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to initialize population: {0}")]
    Genotype(#[from] GenotypeError),

    #[error("Recombination failed: {0}")]
    Recombination(#[from] RecombinationError),

    #[error("Failed to measure allele frequency: {0}")]
    Analysis(#[from] AnalysisError),
}
