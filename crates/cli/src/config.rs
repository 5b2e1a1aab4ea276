//! Resolution of a [`SimulationConfig`] from flags, a config file and prompts.
//!
//! Precedence, highest first: command-line flag, JSON config file, interactive
//! prompt (size and generations only), built-in default.

use anyhow::{Context, Result};
use drift_sim::simulation::SimulationConfig;
use serde::Deserialize;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::args::SimulationArgs;
use crate::defaults;
use crate::input::prompt_positive;

/// Config file contents. Every field is optional so a file may pin only part
/// of a run and leave the rest to flags or prompts.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub population_size: Option<usize>,
    pub total_generations: Option<usize>,
    pub crossover_probability: Option<f64>,
    pub genotype_length: Option<usize>,
    pub locus: Option<usize>,
    pub seed: Option<u64>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Build a validated configuration, prompting on `reader`/`writer` for
/// anything required that neither flags nor the config file provide.
pub fn resolve<R: BufRead, W: Write>(
    args: &SimulationArgs,
    reader: &mut R,
    writer: &mut W,
) -> Result<SimulationConfig> {
    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };

    let population_size = match args.population_size.or(file.population_size) {
        Some(n) => n,
        None => prompt_positive(defaults::POPULATION_PROMPT, reader, writer)?,
    };
    let total_generations = match args.generations.or(file.total_generations) {
        Some(n) => n,
        None => prompt_positive(defaults::GENERATIONS_PROMPT, reader, writer)?,
    };

    let config = SimulationConfig {
        population_size,
        total_generations,
        crossover_probability: args
            .crossover_prob
            .or(file.crossover_probability)
            .unwrap_or(defaults::CROSSOVER_PROB),
        genotype_length: args
            .genotype_length
            .or(file.genotype_length)
            .unwrap_or(defaults::GENOTYPE_LENGTH),
        locus: args.locus.or(file.locus).unwrap_or(defaults::LOCUS),
        seed: args.seed.or(file.seed),
    };
    config
        .validate()
        .context("Invalid simulation configuration")?;

    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}
