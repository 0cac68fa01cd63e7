pub mod launcher;
pub mod options;

pub use launcher::{optimize, EvolutionLauncher, EvolutionResult, GenerationStats};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, PopulationPolicy};
