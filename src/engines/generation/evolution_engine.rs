use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::evaluation::{FitnessFunction, PalindromeFitness};
use crate::engines::generation::{
    individual::Individual,
    operators::{breed, random_chromosome, ReproductionParams},
    progress::{GenerationReporter, GenerationSummary},
    ranking::{is_ranked, rank_population, select_winners, Population},
};
use crate::error::{GasimError, Result};
use crate::types::Chromosome;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use rayon::prelude::*;

/// Owns the generation loop.
///
/// All randomness comes from the one generator handed to `new`, drawn in a
/// fixed order, so a given seed and configuration always replay the same run.
pub struct EvolutionEngine<R = StdRng, F = PalindromeFitness> {
    config: EvolutionConfig,
    params: ReproductionParams,
    rng: R,
    fitness: F,
}

impl<R: Rng, F: FitnessFunction> EvolutionEngine<R, F> {
    /// Validates `config` before anything runs.
    pub fn new(config: EvolutionConfig, rng: R, fitness: F) -> Result<Self> {
        config.validate()?;
        let params = config.reproduction_params();

        Ok(Self {
            config,
            params,
            rng,
            fitness,
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Generation 1: `population_size` random individuals of the initial length.
    pub fn initialize(&mut self) -> Population {
        let length = self.config.initial_chromosome_length;
        let cardinality = self.config.gene_cardinality;

        let chromosomes: Vec<Chromosome> = (0..self.config.population_size)
            .map(|_| random_chromosome(length, cardinality, &mut self.rng))
            .collect();

        self.score(chromosomes)
    }

    /// Breed the next generation from the top `winner_count` of `current`.
    ///
    /// `current` must already be ranked. Both parents of every slot are drawn
    /// uniformly from the winners, so an individual may pair with itself.
    pub fn evolve_one_round(&mut self, current: &[Individual]) -> Result<Population> {
        if current.len() < self.config.winner_count {
            return Err(GasimError::Population(format!(
                "Expected at least {} individuals to select winners from, got {}",
                self.config.winner_count,
                current.len()
            )));
        }
        debug_assert!(is_ranked(current), "population must be ranked before evolving");

        let winners = select_winners(current, self.config.winner_count);
        let params = self.params;

        let chromosomes: Vec<Chromosome> = (0..self.config.population_size)
            .map(|_| {
                let parent1 = &winners[self.rng.gen_range(0..winners.len())];
                let parent2 = &winners[self.rng.gen_range(0..winners.len())];
                breed(parent1.chromosome(), parent2.chromosome(), &params, &mut self.rng)
            })
            .collect();

        Ok(self.score(chromosomes))
    }

    /// Run every round, reporting each ranked generation.
    ///
    /// Returns the best individual of the final round.
    pub fn run<P: GenerationReporter + ?Sized>(&mut self, reporter: &mut P) -> Result<Individual> {
        info!(
            "Starting simulation: {} rounds, population {}, {} winners, mutation rate {}",
            self.config.round_count,
            self.config.population_size,
            self.config.winner_count,
            self.config.mutation_rate
        );

        let mut population = self.initialize();
        rank_population(&mut population);
        self.describe(1, &population, reporter)?;

        for round in 2..=self.config.round_count {
            population = self.evolve_one_round(&population)?;
            rank_population(&mut population);
            self.describe(round, &population, reporter)?;
        }

        let champion = population
            .into_iter()
            .next()
            .ok_or_else(|| GasimError::Population("Final population is empty".to_string()))?;

        info!(
            "Simulation complete. Best fitness: {}, chromosome: {}",
            champion.fitness(),
            champion
        );
        Ok(champion)
    }

    fn describe<P: GenerationReporter + ?Sized>(
        &self,
        round: usize,
        ranked: &[Individual],
        reporter: &mut P,
    ) -> Result<()> {
        let summary = GenerationSummary::from_ranked(round, ranked, self.config.winner_count);
        debug!(
            "Round {}: best {}, k-th {}, least {}",
            summary.round, summary.best_fitness, summary.kth_fitness, summary.least_fitness
        );
        reporter.report(&summary)
    }

    // Scoring draws nothing from the generator, so it is free to run in parallel.
    fn score(&self, chromosomes: Vec<Chromosome>) -> Population {
        let fitness = &self.fitness;

        if self.config.parallel_scoring {
            chromosomes
                .into_par_iter()
                .map(|chromosome| Individual::new(chromosome, fitness))
                .collect()
        } else {
            chromosomes
                .into_iter()
                .map(|chromosome| Individual::new(chromosome, fitness))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::progress::TextReporter;
    use crate::types::Gene;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;

    fn small_config() -> EvolutionConfig {
        EvolutionConfig {
            population_size: 4,
            winner_count: 2,
            round_count: 2,
            initial_chromosome_length: 5,
            max_chromosome_length: 10,
            mutation_rate: 0.0,
            gene_cardinality: 2,
            parallel_scoring: false,
        }
    }

    fn engine(config: EvolutionConfig, seed: u64) -> EvolutionEngine {
        EvolutionEngine::new(config, StdRng::seed_from_u64(seed), PalindromeFitness).unwrap()
    }

    fn run_to_string(config: EvolutionConfig, seed: u64) -> String {
        let mut reporter = TextReporter::new(Vec::new());
        engine(config, seed).run(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    // True when `child` is some prefix of `a` followed by some suffix of `b`
    fn is_splice(child: &[Gene], a: &[Gene], b: &[Gene]) -> bool {
        (0..=a.len().min(child.len())).any(|head| {
            let tail = &child[head..];
            child[..head] == a[..head] && tail.len() <= b.len() && b.ends_with(tail)
        })
    }

    #[test]
    fn test_initialize() {
        let config = EvolutionConfig {
            population_size: 30,
            initial_chromosome_length: 8,
            gene_cardinality: 5,
            ..Default::default()
        };
        let population = engine(config, 1).initialize();

        assert_eq!(population.len(), 30);
        for individual in &population {
            assert_eq!(individual.len(), 8);
            assert!(individual.chromosome().iter().all(|&g| g < 5));
        }
    }

    #[test]
    fn test_winner_count_above_population_rejected() {
        let config = EvolutionConfig { winner_count: 5, ..small_config() };
        let result = EvolutionEngine::new(config, StdRng::seed_from_u64(0), PalindromeFitness);

        match result {
            Err(GasimError::Configuration(msg)) => assert!(msg.contains("cannot exceed")),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("configuration should have been rejected"),
        }
    }

    #[test]
    fn test_zero_mutation_children_come_from_winners() {
        let mut engine = engine(small_config(), 42);
        let mut population = engine.initialize();
        rank_population(&mut population);
        let winners = select_winners(&population, 2).to_vec();

        let next = engine.evolve_one_round(&population).unwrap();
        assert_eq!(next.len(), 4);

        for child in &next {
            assert!((5..=10).contains(&child.len()));
            let spliced = winners.iter().any(|a| {
                winners
                    .iter()
                    .any(|b| is_splice(child.chromosome(), a.chromosome(), b.chromosome()))
            });
            assert!(spliced, "child {} is not a splice of the winners", child);
        }
    }

    #[test]
    fn test_single_winner_fixed_length_clones() {
        let config = EvolutionConfig {
            population_size: 6,
            winner_count: 1,
            initial_chromosome_length: 7,
            max_chromosome_length: 7,
            gene_cardinality: 4,
            ..small_config()
        };
        let mut engine = engine(config, 8);
        let mut population = engine.initialize();
        rank_population(&mut population);

        let next = engine.evolve_one_round(&population).unwrap();
        assert!(next.iter().all(|child| child == &population[0]));
    }

    #[test]
    fn test_no_elimination_when_all_win() {
        let config = EvolutionConfig {
            population_size: 10,
            winner_count: 10,
            round_count: 5,
            mutation_rate: 0.2,
            gene_cardinality: 3,
            ..small_config()
        };
        let mut engine = engine(config, 3);
        let mut population = engine.initialize();

        for _ in 0..5 {
            rank_population(&mut population);
            population = engine.evolve_one_round(&population).unwrap();
            assert_eq!(population.len(), 10);
            assert!(population.iter().all(|i| (5..=10).contains(&i.len())));
        }
    }

    #[test]
    fn test_short_population_rejected() {
        let mut engine = engine(small_config(), 0);
        let population = vec![Individual::new(vec![0; 5], &PalindromeFitness)];

        assert!(matches!(
            engine.evolve_one_round(&population),
            Err(GasimError::Population(_))
        ));
    }

    #[test]
    fn test_same_seed_same_output() {
        let config = EvolutionConfig {
            population_size: 20,
            winner_count: 5,
            round_count: 15,
            mutation_rate: 0.05,
            gene_cardinality: 4,
            ..small_config()
        };

        let first = run_to_string(config.clone(), 24601);
        let second = run_to_string(config, 24601);

        assert_eq!(first, second);
        assert_eq!(first.lines().filter(|l| l.starts_with("Round ")).count(), 15);
    }

    #[test]
    fn test_parallel_scoring_matches_serial() {
        let serial = EvolutionConfig {
            population_size: 50,
            winner_count: 10,
            round_count: 10,
            mutation_rate: 0.1,
            gene_cardinality: 5,
            ..small_config()
        };
        let parallel = EvolutionConfig { parallel_scoring: true, ..serial.clone() };

        assert_eq!(run_to_string(serial, 7), run_to_string(parallel, 7));
    }

    #[test]
    fn test_injected_generator() {
        // Every draw from this generator is zero, so every gene and every redraw is 'A'
        let config = EvolutionConfig {
            initial_chromosome_length: 4,
            max_chromosome_length: 4,
            mutation_rate: 0.5,
            ..small_config()
        };
        let mut engine = EvolutionEngine::new(config, StepRng::new(0, 0), PalindromeFitness).unwrap();
        let mut reporter = TextReporter::new(Vec::new());

        let champion = engine.run(&mut reporter).unwrap();
        assert_eq!(champion.to_string(), "AAAA");
        assert_eq!(champion.fitness(), -1);
    }
}
