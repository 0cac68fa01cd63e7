//! Black Widow Optimization for continuous black-box minimization.
//!
//! A run draws a population uniformly from a box, then repeatedly ranks the
//! reproducing prefix, breeds children by single-point crossover, copies the
//! best-ranked parents over the first child slots (cannibalism), perturbs
//! children at random (mutation) and replaces the population, keeping the best
//! point ever evaluated.
//!
//! ```rust
//! use bwo::{EvolutionLauncher, EvolutionOptions, NetworkCost};
//!
//! let options = EvolutionOptions::builder().seed(42).max_iterations(20).build();
//! let result = EvolutionLauncher::black_widow(NetworkCost::default())
//!     .evolve(&options)
//!     .unwrap();
//!
//! assert_eq!(result.best.dimensions(), 3);
//! ```

pub mod breeding;
pub mod caching;
pub mod error;
pub mod evolution;
pub mod individual;
pub mod objective;
pub mod population;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{OptimizerError, Result};
pub use evolution::{optimize, EvolutionLauncher, EvolutionOptions, EvolutionResult};
pub use individual::Individual;
pub use objective::{NetworkCost, Objective};
