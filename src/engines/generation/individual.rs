use super::operators::{breed, random_chromosome, ReproductionParams};
use crate::engines::evaluation::FitnessFunction;
use crate::types::{chromosome_string, Chromosome, Fitness, Gene};
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// One member of a population.
///
/// Fitness is computed once when the individual is built; there is no way to
/// change the chromosome afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Individual {
    chromosome: Chromosome,
    fitness: Fitness,
}

impl Individual {
    pub fn new<F: FitnessFunction + ?Sized>(chromosome: Chromosome, fitness_fn: &F) -> Self {
        let fitness = fitness_fn.score(&chromosome);
        Self { chromosome, fitness }
    }

    /// Fresh individual with `length` uniformly random genes.
    pub fn random<R: Rng, F: FitnessFunction + ?Sized>(
        length: usize,
        gene_cardinality: usize,
        rng: &mut R,
        fitness_fn: &F,
    ) -> Self {
        Self::new(random_chromosome(length, gene_cardinality, rng), fitness_fn)
    }

    /// Child of two parents by crossover and mutation.
    pub fn offspring<R: Rng, F: FitnessFunction + ?Sized>(
        parent1: &Individual,
        parent2: &Individual,
        params: &ReproductionParams,
        rng: &mut R,
        fitness_fn: &F,
    ) -> Self {
        Self::new(breed(&parent1.chromosome, &parent2.chromosome, params, rng), fitness_fn)
    }

    pub fn chromosome(&self) -> &[Gene] {
        &self.chromosome
    }

    pub fn fitness(&self) -> Fitness {
        self.fitness
    }

    pub fn len(&self) -> usize {
        self.chromosome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosome.is_empty()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&chromosome_string(&self.chromosome))
    }
}
