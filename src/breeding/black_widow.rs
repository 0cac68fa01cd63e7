//! # BlackWidowStrategy
//!
//! One Black Widow generation:
//!
//! 1. The first `N_R` individuals of the current population are ranked by
//!    ascending fitness. Only this prefix is ranked, not the whole population.
//! 2. Every child slot takes two parents drawn uniformly (with replacement)
//!    from the ranking and applies single-point crossover at a uniform point
//!    in `[0, D)`.
//! 3. Cannibalism: the first `floor(cannibalism_rate * N_R)` slots are
//!    overwritten with the top-ranked parents, in rank order.
//! 4. Each child, independently with probability `mutation_rate`, has every
//!    coordinate moved by a uniform draw from `[-1, 1]`. Slots written by
//!    cannibalism are not exempt.
//!
//! The number of slots is `N_R`, or `N` under `PopulationPolicy::Replenish`.
use tracing::{instrument, trace};

use super::BreedStrategy;
use crate::{
    error::{OptimizerError, Result},
    evolution::options::EvolutionOptions,
    individual::Individual,
    population::Population,
    rng::RandomNumberGenerator,
};

/// Half-width of the uniform mutation perturbation.
pub const MUTATION_MAGNITUDE: f64 = 1.0;

#[derive(Debug, Clone, Default)]
pub struct BlackWidowStrategy {
    // No fields needed
}

impl BlackWidowStrategy {
    pub fn new() -> Self {
        Self {}
    }

    /// Ranks indices `0..num_reproducing` of `population` by ascending fitness.
    pub fn select_parents(population: &Population, num_reproducing: usize) -> Result<Vec<usize>> {
        if num_reproducing == 0 {
            return Err(OptimizerError::InvalidConfiguration(
                "Number of reproducing individuals cannot be zero".to_string(),
            ));
        }

        population.rank_prefix(num_reproducing)
    }

    /// Fills `num_children` slots by single-point crossover of parents drawn
    /// from `parents`.
    ///
    /// # Errors
    ///
    /// Returns `OptimizerError::InvalidInput` if `parents` is empty, names an
    /// index outside `population`, or the parents have no coordinates to cross.
    pub fn procreate(
        population: &Population,
        parents: &[usize],
        num_children: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        let individuals = population.individuals();

        if parents.is_empty() {
            return Err(OptimizerError::InvalidInput(
                "Cannot procreate without parents".to_string(),
            ));
        }
        if let Some(&index) = parents.iter().find(|&&index| index >= individuals.len()) {
            return Err(OptimizerError::InvalidInput(format!(
                "Parent index {} is out of range for a population of {}",
                index,
                individuals.len()
            )));
        }

        (0..num_children)
            .map(|slot| {
                let first = parents[rng.gen_index(parents.len())];
                let second = parents[rng.gen_index(parents.len())];
                let dimensions = individuals[first].dimensions();
                if dimensions == 0 {
                    return Err(OptimizerError::InvalidInput(
                        "Cannot cross parents without coordinates".to_string(),
                    ));
                }
                let point = rng.gen_index(dimensions);

                trace!(slot, first, second, point, "crossover");
                individuals[first].crossover_at(&individuals[second], point)
            })
            .collect()
    }

    /// Overwrites the first `count` children with the top `count` ranked parents.
    pub fn cannibalize(
        children: &mut [Individual],
        population: &Population,
        parents: &[usize],
        count: usize,
    ) {
        let individuals = population.individuals();

        for (child, &parent) in children.iter_mut().zip(parents).take(count) {
            *child = individuals[parent].clone();
        }
    }

    /// Perturbs each child with probability `mutation_rate`.
    pub fn mutate(
        children: &mut [Individual],
        mutation_rate: f64,
        rng: &mut RandomNumberGenerator,
    ) {
        for (slot, child) in children.iter_mut().enumerate() {
            if rng.gen_bool(mutation_rate) {
                trace!(slot, "mutation");
                child.perturb(MUTATION_MAGNITUDE, rng);
            }
        }
    }
}

impl BreedStrategy for BlackWidowStrategy {
    #[instrument(level = "trace", skip_all, fields(population = population.len()))]
    fn breed(
        &self,
        population: &Population,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        let parents = Self::select_parents(population, options.num_reproducing())?;

        let mut children = Self::procreate(population, &parents, options.num_offspring(), rng)?;
        Self::cannibalize(
            &mut children,
            population,
            &parents,
            options.num_cannibalized(),
        );
        Self::mutate(&mut children, options.get_mutation_rate(), rng);

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::options::PopulationPolicy;

    fn scored(genes: &[[f64; 2]], fitness: &[f64]) -> Population {
        Population::from_scored(
            genes.iter().map(|g| Individual::new(g.to_vec())).collect(),
            fitness.to_vec(),
        )
        .unwrap()
    }

    fn sample_population() -> Population {
        scored(
            &[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0], [5.0, 5.0]],
            &[4.0, 2.0, 3.0, 1.0, -10.0],
        )
    }

    #[test]
    fn test_select_parents_ranks_prefix() {
        let population = sample_population();
        let parents = BlackWidowStrategy::select_parents(&population, 4).unwrap();
        // Index 4 has the lowest fitness but lies outside the prefix
        assert_eq!(parents, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_select_parents_rejects_zero_and_oversized() {
        let population = sample_population();
        assert!(matches!(
            BlackWidowStrategy::select_parents(&population, 0),
            Err(OptimizerError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            BlackWidowStrategy::select_parents(&population, 6),
            Err(OptimizerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_procreate_children_come_from_parents() {
        let population = scored(
            &[[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [9.0, 90.0]],
            &[0.0, 0.0, 0.0, 0.0],
        );
        let parents = vec![0, 1, 2];
        let mut rng = RandomNumberGenerator::from_seed(17);
        let children = BlackWidowStrategy::procreate(&population, &parents, 50, &mut rng).unwrap();

        assert_eq!(children.len(), 50);
        for child in &children {
            assert!([1.0, 2.0, 3.0].contains(&child[0]));
            assert!([10.0, 20.0, 30.0].contains(&child[1]));
        }
    }

    #[test]
    fn test_procreate_rejects_missing_parents() {
        let population = sample_population();
        let mut rng = RandomNumberGenerator::from_seed(17);

        assert!(matches!(
            BlackWidowStrategy::procreate(&population, &[], 3, &mut rng),
            Err(OptimizerError::InvalidInput(_))
        ));
        assert!(matches!(
            BlackWidowStrategy::procreate(&population, &[0, 5], 3, &mut rng),
            Err(OptimizerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_procreate_rejects_mismatched_parents() {
        let population = Population::from_scored(
            vec![Individual::new(vec![1.0, 2.0]), Individual::new(vec![3.0])],
            vec![0.0, 0.0],
        )
        .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(4);

        // Enough slots that both parents get paired with each other
        assert!(matches!(
            BlackWidowStrategy::procreate(&population, &[0, 1], 64, &mut rng),
            Err(OptimizerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_cannibalize_copies_top_ranked() {
        let population = sample_population();
        let parents = vec![3, 1, 2, 0];
        let mut children = vec![Individual::new(vec![0.0, 0.0]); 4];

        BlackWidowStrategy::cannibalize(&mut children, &population, &parents, 2);

        assert_eq!(children[0].genes(), &[4.0, 4.0]);
        assert_eq!(children[1].genes(), &[2.0, 2.0]);
        assert_eq!(children[2].genes(), &[0.0, 0.0]);
        assert_eq!(children[3].genes(), &[0.0, 0.0]);
    }

    #[test]
    fn test_zero_mutation_rate_changes_nothing() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let original = vec![Individual::new(vec![0.25, -0.5, 1.0]); 20];
        let mut children = original.clone();

        BlackWidowStrategy::mutate(&mut children, 0.0, &mut rng);
        assert_eq!(children, original);
    }

    #[test]
    fn test_full_mutation_rate_moves_every_coordinate() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let original = vec![Individual::new(vec![0.25, -0.5, 1.0]); 20];
        let mut children = original.clone();

        BlackWidowStrategy::mutate(&mut children, 1.0, &mut rng);

        for (before, after) in original.iter().zip(&children) {
            for (b, a) in before.genes().iter().zip(after.genes()) {
                assert_ne!(a, b);
                assert!((a - b).abs() <= MUTATION_MAGNITUDE);
            }
        }
    }

    #[test]
    fn test_breed_shrinks_to_reproducing_count() {
        let population = sample_population();
        let options = EvolutionOptions::new(5, 2, 0.8, 0.5, 0.0, 1);
        let mut rng = RandomNumberGenerator::from_seed(8);

        let children = BlackWidowStrategy::new()
            .breed(&population, &options, &mut rng)
            .unwrap();

        // N_R = 4, cannibalism count = 2
        assert_eq!(children.len(), 4);
        assert_eq!(children[0].genes(), &[4.0, 4.0]);
        assert_eq!(children[1].genes(), &[2.0, 2.0]);
        // The out-of-prefix individual never reproduces
        assert!(children.iter().all(|c| c[0] != 5.0 && c[1] != 5.0));
    }

    #[test]
    fn test_breed_replenishes_to_population_size() {
        let population = sample_population();
        let mut options = EvolutionOptions::new(5, 2, 0.4, 1.0, 0.0, 1);
        options.set_population_policy(PopulationPolicy::Replenish);
        let mut rng = RandomNumberGenerator::from_seed(8);

        let children = BlackWidowStrategy::new()
            .breed(&population, &options, &mut rng)
            .unwrap();

        // N_R = 2 ranks [2.0, 1.0]; both are cannibalized into the first slots
        assert_eq!(children.len(), 5);
        assert_eq!(children[0].genes(), &[2.0, 2.0]);
        assert_eq!(children[1].genes(), &[1.0, 1.0]);
    }

    #[test]
    fn test_breed_same_seed_same_children() {
        let population = sample_population();
        let options = EvolutionOptions::new(5, 2, 0.8, 0.25, 0.5, 1);
        let strategy = BlackWidowStrategy::new();

        let mut rng1 = RandomNumberGenerator::from_seed(21);
        let mut rng2 = RandomNumberGenerator::from_seed(21);

        assert_eq!(
            strategy.breed(&population, &options, &mut rng1).unwrap(),
            strategy.breed(&population, &options, &mut rng2).unwrap()
        );
    }
}
