/// A single gene: a symbol index in `[0, gene_cardinality)`.
pub type Gene = u8;

/// Fitness score. Higher is better.
pub type Fitness = i32;

/// Ordered sequence of genes making up one candidate solution.
pub type Chromosome = Vec<Gene>;

/// Largest alphabet that can be rendered with `gene_symbol`.
pub const MAX_GENE_CARDINALITY: usize = 26;

/// Render a gene as a letter: 0 -> 'A', 1 -> 'B', ...
pub fn gene_symbol(gene: Gene) -> char {
    char::from_u32('A' as u32 + u32::from(gene)).unwrap_or('?')
}

/// Render a whole chromosome as a string of letters.
pub fn chromosome_string(chromosome: &[Gene]) -> String {
    chromosome.iter().map(|&g| gene_symbol(g)).collect()
}
