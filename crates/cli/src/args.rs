use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::input::parse_positive;

/// Parameters shared by every command that runs a simulation.
///
/// Population size and generation count are prompted for when neither a flag
/// nor a config file supplies them.
#[derive(Args, Debug, Clone)]
pub struct SimulationArgs {
    /// Population size
    #[arg(short = 'n', long, value_parser = parse_positive)]
    pub population_size: Option<usize>,

    /// Number of generations
    #[arg(short = 'g', long, value_parser = parse_positive)]
    pub generations: Option<usize>,

    /// Probability that an adjacent offspring pair recombines
    #[arg(long)]
    pub crossover_prob: Option<f64>,

    /// Loci per genotype
    ///
    /// Defaults to 2. With two loci only the second can be exchanged by crossover.
    #[arg(long, value_parser = parse_positive)]
    pub genotype_length: Option<usize>,

    /// Locus whose allele frequency is reported (0-based)
    #[arg(long)]
    pub locus: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Output format for generation records
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Serialization of the record stream.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `generation,frequency` rows with a header
    #[default]
    Csv,
    /// One JSON object per line
    Json,
}
