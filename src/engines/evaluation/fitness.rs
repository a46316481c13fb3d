use crate::types::{Fitness, Gene};

/// Scores a chromosome. Must be a pure function of the genes.
pub trait FitnessFunction: Sync {
    fn score(&self, chromosome: &[Gene]) -> Fitness;
}

/// Rewards palindromic chromosomes and penalises runs of repeated genes.
///
/// Each mirrored pair `(i, len - 1 - i)` contributes +1 when the genes match
/// and -1 otherwise. Every adjacent pair of identical genes then costs 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct PalindromeFitness;

impl FitnessFunction for PalindromeFitness {
    fn score(&self, chromosome: &[Gene]) -> Fitness {
        let len = chromosome.len();

        let mirror: Fitness = (0..len / 2)
            .map(|i| if chromosome[i] == chromosome[len - 1 - i] { 1 } else { -1 })
            .sum();

        let repeats = chromosome.windows(2).filter(|w| w[0] == w[1]).count() as Fitness;

        mirror - repeats
    }
}

impl<F> FitnessFunction for F
where
    F: Fn(&[Gene]) -> Fitness + Sync,
{
    fn score(&self, chromosome: &[Gene]) -> Fitness {
        self(chromosome)
    }
}
