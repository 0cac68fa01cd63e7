use rayon::prelude::*;
use tracing::{debug, info, instrument};

use super::options::EvolutionOptions;
use crate::{
    breeding::{BlackWidowStrategy, BreedStrategy},
    error::Result,
    individual::Individual,
    objective::Objective,
    population::Population,
    rng::RandomNumberGenerator,
};

/// Snapshot of one generation, recorded after it has been scored.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// Generation index. The initial population is generation 0.
    pub generation: usize,
    pub population_size: usize,
    /// Lowest fitness within this generation.
    pub best_fitness: f64,
    pub mean_fitness: f64,
    /// Best fitness seen so far, this generation included.
    pub incumbent_fitness: f64,
}

/// Represents the result of a run: the best individual ever evaluated and its score.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The best individual found.
    pub best: Individual,
    /// The fitness score of the best individual.
    pub fitness: f64,
    /// Number of generations bred after initialization.
    pub generations: usize,
    /// Total number of objective evaluations.
    pub evaluations: usize,
    /// One entry per generation, starting with the initial population.
    pub history: Vec<GenerationStats>,
}

/// Runs the optimizer loop with a breeding strategy and an objective.
///
/// A run goes through three phases. Initialization draws and scores the
/// starting population and seeds the incumbent from it. Each of the
/// `max_iterations` generations then breeds a new population, scores it, and
/// replaces the incumbent when it finds a strictly lower fitness. Finally the
/// incumbent is returned. Any error aborts the run.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Obj, Strategy = BlackWidowStrategy>
where
    Obj: Objective,
    Strategy: BreedStrategy,
{
    strategy: Strategy,
    objective: Obj,
}

impl<Obj> EvolutionLauncher<Obj, BlackWidowStrategy>
where
    Obj: Objective,
{
    /// Creates a launcher that breeds with [`BlackWidowStrategy`].
    pub fn black_widow(objective: Obj) -> Self {
        Self::new(BlackWidowStrategy::new(), objective)
    }
}

impl<Obj, Strategy> EvolutionLauncher<Obj, Strategy>
where
    Obj: Objective,
    Strategy: BreedStrategy,
{
    /// Creates a new `EvolutionLauncher` instance with the specified breeding strategy and objective.
    pub fn new(strategy: Strategy, objective: Obj) -> Self {
        Self {
            strategy,
            objective,
        }
    }

    pub fn objective(&self) -> &Obj {
        &self.objective
    }

    /// Runs the optimizer with a generator seeded from `options`, or from
    /// system entropy when no seed is set.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation
    /// - The objective fails or returns NaN
    /// - The breeding strategy fails
    pub fn evolve(&self, options: &EvolutionOptions) -> Result<EvolutionResult> {
        let mut rng = match options.get_seed() {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };

        self.evolve_with_rng(options, &mut rng)
    }

    /// Runs the optimizer drawing all randomness from `rng`.
    ///
    /// The seed stored in `options` is ignored.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            population_size = options.get_population_size(),
            dimensions = options.get_dimensions(),
            max_iterations = options.get_max_iterations()
        )
    )]
    pub fn evolve_with_rng(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;
        info!("Optimization run started");

        let mut population = Population::initialize(
            options.get_population_size(),
            options.get_dimensions(),
            options.get_bounds(),
            &self.objective,
            rng,
        )?;
        let mut evaluations = population.len();

        let (best, fitness) = population.best()?;
        let mut best = best.clone();
        let mut best_fitness = fitness;

        let mut history = Vec::with_capacity(options.get_max_iterations() + 1);
        history.push(snapshot(0, &population, best_fitness)?);

        for generation in 1..=options.get_max_iterations() {
            let children = self.strategy.breed(&population, options, rng)?;
            population = Population::evaluate(children, &self.objective)?;
            evaluations += population.len();

            let (candidate, candidate_fitness) = population.best()?;
            if candidate_fitness < best_fitness {
                best = candidate.clone();
                best_fitness = candidate_fitness;
            }

            let stats = snapshot(generation, &population, best_fitness)?;
            debug!(
                generation,
                population_size = stats.population_size,
                generation_best = stats.best_fitness,
                incumbent = best_fitness,
                "Generation complete"
            );
            history.push(stats);
        }

        info!(best_fitness, evaluations, "Optimization run finished");

        Ok(EvolutionResult {
            best,
            fitness: best_fitness,
            generations: options.get_max_iterations(),
            evaluations,
            history,
        })
    }
}

impl<Obj, Strategy> EvolutionLauncher<Obj, Strategy>
where
    Obj: Objective + Sync,
    Strategy: BreedStrategy,
{
    /// Runs one independent optimization per seed on the rayon thread pool.
    ///
    /// Every run owns a generator built from its seed, so the results match
    /// sequential `evolve` calls with those seeds. Results are returned in
    /// seed order. If any run fails, one of the failures is returned instead.
    pub fn evolve_independent(
        &self,
        options: &EvolutionOptions,
        seeds: &[u64],
    ) -> Result<Vec<EvolutionResult>> {
        options.validate()?;

        seeds
            .par_iter()
            .map(|&seed| {
                let mut rng = RandomNumberGenerator::from_seed(seed);
                self.evolve_with_rng(options, &mut rng)
            })
            .collect()
    }
}

fn snapshot(generation: usize, population: &Population, incumbent: f64) -> Result<GenerationStats> {
    let (_, best_fitness) = population.best()?;

    Ok(GenerationStats {
        generation,
        population_size: population.len(),
        best_fitness,
        mean_fitness: population.mean_fitness().unwrap_or(best_fitness),
        incumbent_fitness: incumbent,
    })
}

/// Minimizes `objective` with the Black Widow strategy and returns the best
/// point found with its fitness.
///
/// Coordinates of the initial population are drawn from `bounds`. Use
/// [`EvolutionOptions::DEFAULT_BOUNDS`] for the usual `[-5, 5]`.
///
/// # Example
///
/// ```rust
/// use bwo::evolution::{optimize, EvolutionOptions};
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// let (point, fitness) =
///     optimize(30, 2, 0.6, 0.2, 0.3, 50, sphere, EvolutionOptions::DEFAULT_BOUNDS).unwrap();
///
/// assert_eq!(point.len(), 2);
/// assert!(fitness >= 0.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn optimize<O>(
    population_size: usize,
    dimensions: usize,
    reproduction_rate: f64,
    cannibalism_rate: f64,
    mutation_rate: f64,
    max_iterations: usize,
    objective: O,
    (lower, upper): (f64, f64),
) -> Result<(Vec<f64>, f64)>
where
    O: Objective,
{
    let mut options = EvolutionOptions::new(
        population_size,
        dimensions,
        reproduction_rate,
        cannibalism_rate,
        mutation_rate,
        max_iterations,
    );
    options.set_bounds(lower, upper);

    let result = EvolutionLauncher::black_widow(objective).evolve(&options)?;
    Ok((result.best.into_genes(), result.fitness))
}
