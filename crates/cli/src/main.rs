mod args;
mod commands;
mod config;
mod defaults;
mod input;
mod output;
mod printing;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use args::{RunArgs, SummaryArgs};
use commands::{run, summary};

/// Drift: A Genetic Drift Simulator
///
/// This tool follows the frequency of one allele in a haploid population
/// that reproduces by random, fitness-blind sampling and pairwise
/// recombination.
#[derive(Parser, Debug)]
#[command(name = "drift")]
#[command(author, version, about = "Simulates genetic drift of a bi-allelic locus", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation and stream one record per generation.
    ///
    /// Records are `(generation, frequency)` pairs written as CSV or JSON
    /// lines. Missing population size or generation count is prompted for.
    Run(RunArgs),

    /// Run a simulation and print summary statistics of the trajectory.
    Summary(SummaryArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run(args) => {
            run::run_simulation(&args)?;
        }
        Commands::Summary(args) => {
            summary::summarize_simulation(&args)?;
        }
    }

    Ok(())
}
