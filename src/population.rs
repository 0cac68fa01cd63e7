//! # Population
//!
//! A `Population` is a generation of individuals together with their fitness
//! values. Both live in the same value so that `fitness[i]` always scores
//! `individuals[i]`: the only ways to build one are to evaluate a set of
//! individuals or to hand over an already scored pair of equal length.
//!
//! The module also provides the three leaf operations of a run:
//! [`Population::initialize`] draws the starting set, [`evaluate`] scores a
//! single point, and [`find_best`] locates the minimum.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{OptimizerError, Result};
use crate::individual::Individual;
use crate::objective::Objective;
use crate::rng::RandomNumberGenerator;

/// Scores a single individual.
///
/// # Errors
///
/// - Any error from the objective is returned unchanged.
/// - `OptimizerError::InvalidNumericValue` if the objective returns NaN.
pub fn evaluate<O>(individual: &Individual, objective: &O) -> Result<f64>
where
    O: Objective + ?Sized,
{
    let score = objective.evaluate(individual.genes())?;

    if score.is_nan() {
        return Err(OptimizerError::InvalidNumericValue(format!(
            "Objective returned NaN for {:?}",
            individual.genes()
        )));
    }

    Ok(score)
}

/// Returns the individual with the lowest fitness and that fitness.
///
/// Ties go to the first occurrence.
///
/// # Errors
///
/// Returns `OptimizerError::InvalidInput` if the slices are empty or differ in
/// length.
pub fn find_best<'a>(
    individuals: &'a [Individual],
    fitness: &[f64],
) -> Result<(&'a Individual, f64)> {
    if individuals.is_empty() {
        return Err(OptimizerError::InvalidInput(
            "Cannot find the best individual of an empty population".to_string(),
        ));
    }

    if fitness.len() != individuals.len() {
        return Err(OptimizerError::InvalidInput(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            individuals.len()
        )));
    }

    let mut best_index = 0;
    for (index, &score) in fitness.iter().enumerate().skip(1) {
        if score < fitness[best_index] {
            best_index = index;
        }
    }

    Ok((&individuals[best_index], fitness[best_index]))
}

/// One generation: individuals and their parallel fitness values.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
    fitness: Vec<f64>,
}

impl Population {
    /// Draws `size` individuals with every coordinate uniform in
    /// `[lower, upper]` and scores them.
    ///
    /// # Errors
    ///
    /// Returns `OptimizerError::InvalidInput` if `lower > upper`, either
    /// bound is not finite or `upper - lower` overflows, and propagates
    /// objective errors.
    pub fn initialize<O>(
        size: usize,
        dimensions: usize,
        (lower, upper): (f64, f64),
        objective: &O,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self>
    where
        O: Objective + ?Sized,
    {
        if !lower.is_finite()
            || !upper.is_finite()
            || lower > upper
            || !(upper - lower).is_finite()
        {
            return Err(OptimizerError::InvalidInput(format!(
                "Cannot sample from bounds [{}, {}]",
                lower, upper
            )));
        }

        let individuals = (0..size)
            .map(|_| Individual::random(dimensions, lower, upper, rng))
            .collect();

        Self::evaluate(individuals, objective)
    }

    /// Scores every individual, in order.
    pub fn evaluate<O>(individuals: Vec<Individual>, objective: &O) -> Result<Self>
    where
        O: Objective + ?Sized,
    {
        let fitness = individuals
            .iter()
            .map(|individual| evaluate(individual, objective))
            .collect::<Result<Vec<_>>>()?;

        trace!(size = individuals.len(), "population evaluated");

        Ok(Self {
            individuals,
            fitness,
        })
    }

    /// Pairs individuals with fitness values that were computed elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `OptimizerError::InvalidInput` if the lengths differ.
    pub fn from_scored(individuals: Vec<Individual>, fitness: Vec<f64>) -> Result<Self> {
        if individuals.len() != fitness.len() {
            return Err(OptimizerError::InvalidInput(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                individuals.len()
            )));
        }

        Ok(Self {
            individuals,
            fitness,
        })
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The lowest-fitness individual of this generation.
    pub fn best(&self) -> Result<(&Individual, f64)> {
        find_best(&self.individuals, &self.fitness)
    }

    /// Mean fitness, or `None` for an empty population.
    pub fn mean_fitness(&self) -> Option<f64> {
        if self.fitness.is_empty() {
            None
        } else {
            Some(self.fitness.iter().sum::<f64>() / self.fitness.len() as f64)
        }
    }

    /// Indices `0..count` ordered by ascending fitness.
    ///
    /// The sort is stable, so equal scores keep their index order.
    ///
    /// # Errors
    ///
    /// Returns `OptimizerError::InvalidInput` if `count` exceeds the population.
    pub fn rank_prefix(&self, count: usize) -> Result<Vec<usize>> {
        if count > self.len() {
            return Err(OptimizerError::InvalidInput(format!(
                "Cannot rank {} individuals in a population of {}",
                count,
                self.len()
            )));
        }

        let mut ranking: Vec<usize> = (0..count).collect();
        ranking.sort_by(|&a, &b| {
            self.fitness[a]
                .partial_cmp(&self.fitness[b])
                .unwrap_or(Ordering::Equal)
        });
        Ok(ranking)
    }
}
