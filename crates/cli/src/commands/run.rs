use anyhow::{Context, Result};
use drift_sim::SimulationSequence;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use tracing::info;

use crate::args::RunArgs;
use crate::config;
use crate::output::RecordWriter;
use crate::printing::print_parameters;

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    let config = config::resolve(&args.simulation, &mut io::stdin().lock(), &mut io::stderr())?;
    print_parameters(&config);

    let total_generations = config.total_generations;
    let sequence =
        SimulationSequence::from_config(config).context("Failed to start simulation")?;
    let mut writer = RecordWriter::open(args.output.as_deref(), args.format)?;

    let pb = if args.progress {
        let pb = ProgressBar::new(total_generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    info!(total_generations, "running simulation");
    let mut last = None;
    for record in sequence {
        writer
            .write(&record)
            .with_context(|| format!("Failed to write generation {}", record.generation))?;
        last = Some(record);

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }
    writer.finish()?;

    match last {
        Some(record) if record.generation == total_generations => {
            info!(frequency = record.frequency, "simulation complete");
        }
        _ => anyhow::bail!("Simulation stopped before generation {total_generations}"),
    }

    if let Some(path) = &args.output {
        eprintln!("✓ Records written to: {}", path.display());
    }
    Ok(())
}
