use crate::types::{Chromosome, Gene};
use rand::Rng;

/// Everything the reproduction operators need besides the parents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReproductionParams {
    pub min_length: usize,
    pub max_length: usize,
    pub mutation_rate: f64,
    pub gene_cardinality: usize,
}

/// Generate random chromosome
pub fn random_chromosome<R: Rng>(
    length: usize,
    gene_cardinality: usize,
    rng: &mut R,
) -> Chromosome {
    (0..length)
        .map(|_| random_gene(gene_cardinality, rng))
        .collect()
}

fn random_gene<R: Rng>(gene_cardinality: usize, rng: &mut R) -> Gene {
    rng.gen_range(0..gene_cardinality) as Gene
}

/// Cut-and-splice crossover: the head of `parent1` joined to the tail of `parent2`.
///
/// The first cut is uniform over `parent1`. The second cut is uniform over the
/// positions of `parent2` that keep the child within
/// `[min_length, max_length]`, which is always non-empty when both parents
/// are themselves within bounds.
pub fn crossover<R: Rng>(
    parent1: &[Gene],
    parent2: &[Gene],
    params: &ReproductionParams,
    rng: &mut R,
) -> Chromosome {
    let head = rng.gen_range(0..=parent1.len());
    let total = head + parent2.len();

    let lo = total.saturating_sub(params.max_length).min(parent2.len());
    let hi = total.saturating_sub(params.min_length).min(parent2.len()).max(lo);
    let tail = rng.gen_range(lo..=hi);

    let mut child = Vec::with_capacity(head + parent2.len() - tail);
    child.extend_from_slice(&parent1[..head]);
    child.extend_from_slice(&parent2[tail..]);
    child.truncate(params.max_length);
    child
}

/// Mutation: each gene is redrawn with probability `mutation_rate`
pub fn mutate<R: Rng>(
    chromosome: &mut [Gene],
    mutation_rate: f64,
    gene_cardinality: usize,
    rng: &mut R,
) {
    for gene in chromosome.iter_mut() {
        if rng.gen_bool(mutation_rate) {
            *gene = random_gene(gene_cardinality, rng);
        }
    }
}

/// Crossover followed by mutation.
pub fn breed<R: Rng>(
    parent1: &[Gene],
    parent2: &[Gene],
    params: &ReproductionParams,
    rng: &mut R,
) -> Chromosome {
    let mut child = crossover(parent1, parent2, params, rng);
    mutate(&mut child, params.mutation_rate, params.gene_cardinality, rng);
    child
}
