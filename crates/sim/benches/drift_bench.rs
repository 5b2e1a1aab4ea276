use drift_sim::analysis::reference_frequency;
use drift_sim::simulation::{advance, Population, SimulationBuilder};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    let sizes = [100, 1_000, 10_000];
    let probabilities = [0.0, 0.5, 1.0];

    for &size in &sizes {
        let population = Population::random(size, 2, &mut rng).unwrap();
        group.throughput(Throughput::Elements(size as u64));

        for &p in &probabilities {
            group.bench_with_input(
                BenchmarkId::new(format!("p={p}"), size),
                &population,
                |b, pop| b.iter(|| advance(black_box(pop), p, &mut rng).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_frequency(c: &mut Criterion) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let population = Population::random(10_000, 2, &mut rng).unwrap();

    c.bench_function("reference_frequency/10000", |b| {
        b.iter(|| reference_frequency(black_box(&population)).unwrap())
    });
}

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");
    group.sample_size(20);

    for &size in &[100, 1_000] {
        group.bench_with_input(BenchmarkId::new("100_generations", size), &size, |b, &size| {
            b.iter(|| {
                SimulationBuilder::new()
                    .population_size(size)
                    .generations(100)
                    .seed(7)
                    .build_sequence()
                    .unwrap()
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance, bench_frequency, bench_sequence);
criterion_main!(benches);
