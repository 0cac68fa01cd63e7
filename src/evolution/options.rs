//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the immutable parameters of one
//! optimization run: population size, dimensionality, the three rates, the
//! iteration budget, the initialization bounds, an optional seed and the
//! population policy.
//!
//! ## Example
//!
//! ```rust
//! use bwo::evolution::options::{EvolutionOptions, PopulationPolicy};
//!
//! // The defaults describe a 50-individual, 3-dimensional run over [-5, 5]
//! let default_options = EvolutionOptions::default();
//! assert!(default_options.validate().is_ok());
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(40)
//!     .dimensions(2)
//!     .reproduction_rate(0.5)
//!     .max_iterations(25)
//!     .bounds(-1.0, 1.0)
//!     .population_policy(PopulationPolicy::Replenish)
//!     .seed(7)
//!     .build();
//!
//! assert_eq!(options.num_reproducing(), 20);
//! ```

use crate::error::{OptimizerError, Result};

/// What the population size does across generations.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopulationPolicy {
    /// The next generation holds only the `N_R` bred children, so the
    /// population drops from `N` to `N_R` after the first generation and stays
    /// there.
    #[default]
    Shrink,
    /// Extra children are bred until the next generation holds `N` again.
    Replenish,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    dimensions: usize,
    reproduction_rate: f64,
    cannibalism_rate: f64,
    mutation_rate: f64,
    max_iterations: usize,
    lower_bound: f64,
    upper_bound: f64,
    seed: Option<u64>,
    population_policy: PopulationPolicy,
}

impl EvolutionOptions {
    pub const DEFAULT_POPULATION_SIZE: usize = 50;
    pub const DEFAULT_DIMENSIONS: usize = 3;
    pub const DEFAULT_REPRODUCTION_RATE: f64 = 0.6;
    pub const DEFAULT_CANNIBALISM_RATE: f64 = 0.2;
    pub const DEFAULT_MUTATION_RATE: f64 = 0.3;
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;
    pub const DEFAULT_BOUNDS: (f64, f64) = (-5.0, 5.0);

    /// Creates options with the given run parameters, the default bounds,
    /// no seed and the `Shrink` policy.
    pub fn new(
        population_size: usize,
        dimensions: usize,
        reproduction_rate: f64,
        cannibalism_rate: f64,
        mutation_rate: f64,
        max_iterations: usize,
    ) -> Self {
        Self {
            population_size,
            dimensions,
            reproduction_rate,
            cannibalism_rate,
            mutation_rate,
            max_iterations,
            ..Self::default()
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn get_reproduction_rate(&self) -> f64 {
        self.reproduction_rate
    }

    pub fn get_cannibalism_rate(&self) -> f64 {
        self.cannibalism_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the `(lower, upper)` initialization bounds.
    pub fn get_bounds(&self) -> (f64, f64) {
        (self.lower_bound, self.upper_bound)
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_population_policy(&self) -> PopulationPolicy {
        self.population_policy
    }

    /// Number of reproducing individuals, `floor(N * reproduction_rate)`.
    pub fn num_reproducing(&self) -> usize {
        (self.population_size as f64 * self.reproduction_rate).floor() as usize
    }

    /// Number of child slots overwritten by ranked parents,
    /// `floor(cannibalism_rate * N_R)`.
    pub fn num_cannibalized(&self) -> usize {
        (self.cannibalism_rate * self.num_reproducing() as f64).floor() as usize
    }

    /// Number of children bred per generation under the population policy.
    pub fn num_offspring(&self) -> usize {
        match self.population_policy {
            PopulationPolicy::Shrink => self.num_reproducing(),
            PopulationPolicy::Replenish => self.population_size,
        }
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_dimensions(&mut self, dimensions: usize) {
        self.dimensions = dimensions;
    }

    pub fn set_reproduction_rate(&mut self, rate: f64) {
        self.reproduction_rate = rate;
    }

    pub fn set_cannibalism_rate(&mut self, rate: f64) {
        self.cannibalism_rate = rate;
    }

    pub fn set_mutation_rate(&mut self, rate: f64) {
        self.mutation_rate = rate;
    }

    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations;
    }

    pub fn set_bounds(&mut self, lower: f64, upper: f64) {
        self.lower_bound = lower;
        self.upper_bound = upper;
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn set_population_policy(&mut self, policy: PopulationPolicy) {
        self.population_policy = policy;
    }

    /// Checks every parameter and the derived reproduction count.
    ///
    /// # Errors
    ///
    /// Returns `OptimizerError::InvalidConfiguration` if:
    /// - the population size, dimensionality or iteration budget is zero
    /// - a rate is not a finite value in `[0, 1]`
    /// - a bound is not finite, or the lower bound exceeds the upper bound
    /// - `floor(N * reproduction_rate)` is zero
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(OptimizerError::InvalidConfiguration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.dimensions == 0 {
            return Err(OptimizerError::InvalidConfiguration(
                "Dimensions cannot be zero".to_string(),
            ));
        }

        if self.max_iterations == 0 {
            return Err(OptimizerError::InvalidConfiguration(
                "Maximum iterations cannot be zero".to_string(),
            ));
        }

        for (name, rate) in [
            ("Reproduction rate", self.reproduction_rate),
            ("Cannibalism rate", self.cannibalism_rate),
            ("Mutation rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(OptimizerError::InvalidConfiguration(format!(
                    "{} must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }

        if !self.lower_bound.is_finite() || !self.upper_bound.is_finite() {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "Bounds must be finite, got [{}, {}]",
                self.lower_bound, self.upper_bound
            )));
        }

        if self.lower_bound > self.upper_bound {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "Lower bound {} exceeds upper bound {}",
                self.lower_bound, self.upper_bound
            )));
        }

        if !(self.upper_bound - self.lower_bound).is_finite() {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "Bounds span [{}, {}] is too wide to sample from",
                self.lower_bound, self.upper_bound
            )));
        }

        if self.num_reproducing() == 0 {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "Reproduction rate {} leaves no reproducing individuals in a population of {}",
                self.reproduction_rate, self.population_size
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: Self::DEFAULT_POPULATION_SIZE,
            dimensions: Self::DEFAULT_DIMENSIONS,
            reproduction_rate: Self::DEFAULT_REPRODUCTION_RATE,
            cannibalism_rate: Self::DEFAULT_CANNIBALISM_RATE,
            mutation_rate: Self::DEFAULT_MUTATION_RATE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            lower_bound: Self::DEFAULT_BOUNDS.0,
            upper_bound: Self::DEFAULT_BOUNDS.1,
            seed: None,
            population_policy: PopulationPolicy::default(),
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the `EvolutionOptions::default()` values.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    dimensions: Option<usize>,
    reproduction_rate: Option<f64>,
    cannibalism_rate: Option<f64>,
    mutation_rate: Option<f64>,
    max_iterations: Option<usize>,
    bounds: Option<(f64, f64)>,
    seed: Option<u64>,
    population_policy: Option<PopulationPolicy>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn dimensions(mut self, value: usize) -> Self {
        self.dimensions = Some(value);
        self
    }

    pub fn reproduction_rate(mut self, value: f64) -> Self {
        self.reproduction_rate = Some(value);
        self
    }

    pub fn cannibalism_rate(mut self, value: f64) -> Self {
        self.cannibalism_rate = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = Some(value);
        self
    }

    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        self.bounds = Some((lower, upper));
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn population_policy(mut self, value: PopulationPolicy) -> Self {
        self.population_policy = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance. Validation happens when a run
    /// starts, or explicitly through [`EvolutionOptions::validate`].
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        let (lower_bound, upper_bound) = self
            .bounds
            .unwrap_or((defaults.lower_bound, defaults.upper_bound));

        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            dimensions: self.dimensions.unwrap_or(defaults.dimensions),
            reproduction_rate: self.reproduction_rate.unwrap_or(defaults.reproduction_rate),
            cannibalism_rate: self.cannibalism_rate.unwrap_or(defaults.cannibalism_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            lower_bound,
            upper_bound,
            seed: self.seed.or(defaults.seed),
            population_policy: self
                .population_policy
                .unwrap_or(defaults.population_policy),
        }
    }
}
