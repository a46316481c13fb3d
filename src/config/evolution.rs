use super::traits::ConfigSection;
use crate::engines::generation::operators::ReproductionParams;
use crate::error::GasimError;
use crate::types::MAX_GENE_CARDINALITY;
use serde::{Deserialize, Serialize};

/// Parameters of a simulation run. Fixed once the engine is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Individuals per generation (n).
    pub population_size: usize,
    /// Top-ranked individuals allowed to reproduce (k).
    pub winner_count: usize,
    /// Generations simulated, counting the initial one (r).
    pub round_count: usize,
    /// Chromosome length of the initial population (c0).
    pub initial_chromosome_length: usize,
    /// Upper bound on chromosome length (cMax).
    pub max_chromosome_length: usize,
    /// Per-gene mutation probability (m).
    pub mutation_rate: f64,
    /// Number of distinct gene symbols (g).
    pub gene_cardinality: usize,
    /// Score offspring on the rayon pool instead of the calling thread.
    pub parallel_scoring: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            winner_count: 15,
            round_count: 100,
            initial_chromosome_length: 8,
            max_chromosome_length: 20,
            mutation_rate: 0.01,
            gene_cardinality: 5,
            parallel_scoring: false,
        }
    }
}

impl EvolutionConfig {
    pub fn reproduction_params(&self) -> ReproductionParams {
        ReproductionParams {
            min_length: self.initial_chromosome_length,
            max_length: self.max_chromosome_length,
            mutation_rate: self.mutation_rate,
            gene_cardinality: self.gene_cardinality,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), GasimError> {
        if self.population_size < 1 {
            return Err(GasimError::Configuration(
                "Population size must be at least 1".to_string()
            ));
        }
        if self.winner_count < 1 {
            return Err(GasimError::Configuration(
                "Winner count must be at least 1".to_string()
            ));
        }
        if self.winner_count > self.population_size {
            return Err(GasimError::Configuration(format!(
                "Winner count ({}) cannot exceed population size ({})",
                self.winner_count, self.population_size
            )));
        }
        if self.round_count < 1 {
            return Err(GasimError::Configuration(
                "Round count must be at least 1".to_string()
            ));
        }
        if self.initial_chromosome_length < 1 {
            return Err(GasimError::Configuration(
                "Initial chromosome length must be at least 1".to_string()
            ));
        }
        if self.max_chromosome_length < self.initial_chromosome_length {
            return Err(GasimError::Configuration(format!(
                "Max chromosome length ({}) cannot be less than initial chromosome length ({})",
                self.max_chromosome_length, self.initial_chromosome_length
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GasimError::Configuration(format!(
                "Mutation rate must be between 0 and 1, got {}",
                self.mutation_rate
            )));
        }
        if self.gene_cardinality < 2 || self.gene_cardinality > MAX_GENE_CARDINALITY {
            return Err(GasimError::Configuration(format!(
                "Gene cardinality must be between 2 and {}, got {}",
                MAX_GENE_CARDINALITY, self.gene_cardinality
            )));
        }
        Ok(())
    }
}
