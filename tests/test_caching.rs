use bwo::{
    caching::CachedObjective,
    evolution::{EvolutionLauncher, EvolutionOptions},
    objective::Objective,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

// An objective that counts how often it is actually computed
#[derive(Clone)]
struct CostlyObjective {
    // Use Arc<AtomicUsize> to track evaluations across clones
    evaluations: Arc<AtomicUsize>,
}

impl CostlyObjective {
    fn new() -> Self {
        Self {
            evaluations: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn get_evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }
}

impl Objective for CostlyObjective {
    fn evaluate(&self, point: &[f64]) -> bwo::Result<f64> {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        Ok(point.iter().map(|v| (v - 1.0).powi(2)).sum())
    }
}

#[test]
fn test_cache_skips_repeated_points() {
    let objective = CostlyObjective::new();
    let counter = objective.clone();

    // No mutation: every child is a crossover of earlier points, so many repeat
    let options = EvolutionOptions::builder()
        .population_size(20)
        .dimensions(2)
        .cannibalism_rate(0.5)
        .mutation_rate(0.0)
        .max_iterations(30)
        .seed(12)
        .build();

    let cached = CachedObjective::new(objective);
    let result = EvolutionLauncher::black_widow(cached.clone())
        .evolve(&options)
        .unwrap();

    // The launcher counts requested scores, the inner objective counts computed ones
    assert!(counter.get_evaluations() < result.evaluations);
    assert_eq!(counter.get_evaluations(), cached.cache_size());
}

#[test]
fn test_cache_does_not_change_the_run() {
    let options = EvolutionOptions::builder()
        .population_size(20)
        .dimensions(2)
        .max_iterations(15)
        .seed(99)
        .build();

    let plain = EvolutionLauncher::black_widow(CostlyObjective::new())
        .evolve(&options)
        .unwrap();
    let cached = EvolutionLauncher::black_widow(CachedObjective::new(CostlyObjective::new()))
        .evolve(&options)
        .unwrap();

    assert_eq!(plain, cached);
}
