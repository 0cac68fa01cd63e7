//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies that turn a
//! scored generation into the individuals of the next one. Scoring the new
//! individuals is left to the caller.
pub mod black_widow;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, individual::Individual,
    population::Population, rng::RandomNumberGenerator,
};

pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds the next generation from `population`.
    ///
    /// ## Parameters
    ///
    /// - `population`: The current generation and its fitness values.
    /// - `options`: The run parameters.
    /// - `rng`: The run's random number generator.
    ///
    /// ## Errors
    ///
    /// This method can fail if the population is too small for the
    /// configured reproduction count.
    fn breed(
        &self,
        population: &Population,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

pub use black_widow::BlackWidowStrategy;
