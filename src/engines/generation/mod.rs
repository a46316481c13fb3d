pub mod individual;
pub mod operators;
pub mod ranking;
pub mod progress;
pub mod evolution_engine;

pub use individual::Individual;
pub use operators::ReproductionParams;
pub use ranking::{rank_population, select_winners, Population};
pub use progress::{GenerationReporter, GenerationSummary, JsonReporter, TextReporter};
pub use evolution_engine::EvolutionEngine;
