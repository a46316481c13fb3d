use super::individual::Individual;
use crate::error::Result;
use crate::types::Fitness;
use serde::Serialize;
use std::io::Write;

/// Per-round statistics taken from a ranked population.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub round: usize,
    pub best_fitness: Fitness,
    pub kth_fitness: Fitness,
    pub winner_count: usize,
    pub least_fitness: Fitness,
    pub best_chromosome: String,
}

impl GenerationSummary {
    /// Read the best, k-th and last entries of `ranked`.
    ///
    /// Requires `1 <= winner_count <= ranked.len()`, which engine
    /// construction guarantees.
    pub fn from_ranked(round: usize, ranked: &[Individual], winner_count: usize) -> Self {
        let best = &ranked[0];
        Self {
            round,
            best_fitness: best.fitness(),
            kth_fitness: ranked[winner_count - 1].fitness(),
            winner_count,
            least_fitness: ranked[ranked.len() - 1].fitness(),
            best_chromosome: best.to_string(),
        }
    }
}

pub trait GenerationReporter {
    fn report(&mut self, summary: &GenerationSummary) -> Result<()>;
}

/// Labelled block of lines per round, followed by a blank line.
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GenerationReporter for TextReporter<W> {
    fn report(&mut self, summary: &GenerationSummary) -> Result<()> {
        writeln!(self.out, "Round {}:", summary.round)?;
        writeln!(self.out, "Best fitness: {}", summary.best_fitness)?;
        writeln!(self.out, "k-th ({}) fitness: {}", summary.winner_count, summary.kth_fitness)?;
        writeln!(self.out, "Least fit: {}", summary.least_fitness)?;
        writeln!(self.out, "Best chromosome: {}", summary.best_chromosome)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON object per line per round.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GenerationReporter for JsonReporter<W> {
    fn report(&mut self, summary: &GenerationSummary) -> Result<()> {
        serde_json::to_writer(&mut self.out, summary)?;
        writeln!(self.out)?;
        Ok(())
    }
}
