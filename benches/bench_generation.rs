use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bwo::{
    breeding::{BlackWidowStrategy, BreedStrategy},
    evolution::EvolutionOptions,
    objective::NetworkCost,
    population::Population,
    rng::RandomNumberGenerator,
};

fn bench_generation(c: &mut Criterion) {
    let strategy = BlackWidowStrategy::new();
    let objective = NetworkCost::default();
    let mut rng = RandomNumberGenerator::from_seed(1);

    let mut group = c.benchmark_group("black_widow_breeding");
    for size in [10, 100, 1000, 10000].iter() {
        let options = EvolutionOptions::builder()
            .population_size(*size)
            .dimensions(3)
            .build();
        let population =
            Population::initialize(*size, 3, options.get_bounds(), &objective, &mut rng).unwrap();

        group.bench_function(&format!("black_widow_breeding_{}", size), |b| {
            b.iter(|| {
                let result = strategy.breed(
                    black_box(&population),
                    black_box(&options),
                    black_box(&mut rng),
                );
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
