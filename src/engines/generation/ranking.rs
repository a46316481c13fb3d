use super::individual::Individual;

/// A generation. Exactly `population_size` individuals after every step.
pub type Population = Vec<Individual>;

/// Sort by fitness, best first. Ties keep their current relative order.
pub fn rank_population(population: &mut [Individual]) {
    population.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
}

/// True when no individual is fitter than the one before it.
pub fn is_ranked(population: &[Individual]) -> bool {
    population
        .windows(2)
        .all(|pair| pair[0].fitness() >= pair[1].fitness())
}

/// Truncation selection: the first `winner_count` entries of a ranked population.
pub fn select_winners(ranked: &[Individual], winner_count: usize) -> &[Individual] {
    &ranked[..winner_count.min(ranked.len())]
}
