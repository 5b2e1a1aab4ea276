use drift_sim::simulation::SimulationConfig;

/// Print the run parameters to stderr, keeping stdout free for records.
pub fn print_parameters(config: &SimulationConfig) {
    eprintln!("\n📋 Simulation Configuration");
    eprintln!(
        "  • Population Size: {} [-n, --population-size]",
        config.population_size
    );
    eprintln!(
        "  • Generations: {} [-g, --generations]",
        config.total_generations
    );
    if let Some(seed) = config.seed {
        eprintln!("  • Random Seed: {seed} [--seed]");
    } else {
        eprintln!("  • Random Seed: Random [--seed]");
    }

    eprintln!("\n🧬 Genotype");
    eprintln!(
        "  • Loci per Individual: {} [--genotype-length]",
        config.genotype_length
    );
    eprintln!("  • Reported Locus: {} [--locus]", config.locus);
    eprintln!("  • Ploidy: Haploid, bi-allelic (0/1)");

    eprintln!("\n🔀 Reproduction");
    eprintln!("  • Selection: Uniform with replacement (neutral drift)");
    eprintln!(
        "  • Crossover Probability: {:.2} per pair [--crossover-prob]",
        config.crossover_probability
    );
    eprintln!();
}
