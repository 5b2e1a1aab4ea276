use anyhow::{Context, Result};
use drift_sim::analysis::Trajectory;
use drift_sim::SimulationSequence;
use serde::Serialize;
use std::io;

use crate::args::SummaryArgs;
use crate::config;
use crate::printing::print_parameters;

/// End-of-run statistics for one trajectory.
#[derive(Debug, Serialize, PartialEq)]
pub struct Summary {
    pub generations: usize,
    pub final_frequency: f64,
    pub min_frequency: f64,
    pub max_frequency: f64,
    pub mean_frequency: f64,
    pub absorbed: bool,
    pub absorbed_at: Option<usize>,
}

impl Summary {
    pub fn from_trajectory(trajectory: &Trajectory) -> Option<Self> {
        let last = trajectory.last()?;
        Some(Self {
            generations: trajectory.len(),
            final_frequency: last.frequency,
            min_frequency: trajectory.min()?,
            max_frequency: trajectory.max()?,
            mean_frequency: trajectory.mean()?,
            absorbed: trajectory.is_fixed(),
            absorbed_at: trajectory.fixation_generation(),
        })
    }
}

pub fn summarize_simulation(args: &SummaryArgs) -> Result<()> {
    let config = config::resolve(&args.simulation, &mut io::stdin().lock(), &mut io::stderr())?;
    print_parameters(&config);

    let trajectory: Trajectory = SimulationSequence::from_config(config)
        .context("Failed to start simulation")?
        .collect();
    let summary =
        Summary::from_trajectory(&trajectory).context("Simulation produced no records")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("📈 Drift Summary");
    println!("  • Generations: {}", summary.generations);
    println!("  • Final Frequency: {:.4}", summary.final_frequency);
    println!(
        "  • Range: {:.4} - {:.4} (mean {:.4})",
        summary.min_frequency, summary.max_frequency, summary.mean_frequency
    );
    match summary.absorbed_at {
        Some(generation) if summary.final_frequency == 1.0 => {
            println!("  • Allele fixed at generation {generation}");
        }
        Some(generation) => println!("  • Allele lost at generation {generation}"),
        None => println!("  • Allele still segregating"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_sim::GenerationRecord;

    #[test]
    fn test_summary_from_trajectory() {
        let trajectory: Trajectory = [0.5, 0.75, 1.0]
            .into_iter()
            .enumerate()
            .map(|(i, frequency)| GenerationRecord {
                generation: i + 1,
                frequency,
            })
            .collect();

        let summary = Summary::from_trajectory(&trajectory).unwrap();
        assert_eq!(summary.generations, 3);
        assert_eq!(summary.final_frequency, 1.0);
        assert_eq!(summary.min_frequency, 0.5);
        assert_eq!(summary.max_frequency, 1.0);
        assert_eq!(summary.mean_frequency, 0.75);
        assert!(summary.absorbed);
        assert_eq!(summary.absorbed_at, Some(3));
    }

    #[test]
    fn test_summary_empty_trajectory() {
        assert_eq!(Summary::from_trajectory(&Trajectory::new()), None);
    }
}
