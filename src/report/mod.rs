//! Per-generation growth statistics.
//!
//! Statistics are computed from symbol counts rather than expanded sequences, so
//! a report for generation 60 of a fractal plant costs about as much as one for
//! generation 6.

use crate::language::{Sequence, is_rewritable};
use crate::rewriting::{Ruleset, SymbolCounts};
use serde::Serialize;
use tabled::Tabled;

pub use formatter::{CsvFormatter, PrettyFormatter};

pub mod formatter;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Tabled)]
pub struct GenerationStats {
    #[serde(rename = "Generation")]
    #[tabled(rename = "Generation")]
    pub generation: usize,
    #[serde(rename = "Length")]
    #[tabled(rename = "Length")]
    pub length: u128,
    /// Letters that have a production in the ruleset.
    #[serde(rename = "Rewritten")]
    #[tabled(rename = "Rewritten")]
    pub rewritten: u128,
    #[serde(rename = "Passed Through")]
    #[tabled(rename = "Passed Through")]
    pub passed_through: u128,
}

impl GenerationStats {
    fn from_counts(generation: usize, counts: &SymbolCounts, rules: &Ruleset) -> Self {
        let length = counts.total();
        let rewritten = counts
            .iter()
            .filter(|(symbol, _)| is_rewritable(*symbol) && rules.get(*symbol).is_some())
            .fold(0u128, |total, (_, count)| total.saturating_add(count));

        Self {
            generation,
            length,
            rewritten,
            passed_through: length - rewritten,
        }
    }
}

/// Lazily yields statistics for generations `0..=iterations`, one step at a time.
pub fn generation_stats<'a>(
    axiom: &'a Sequence,
    rules: &'a Ruleset,
    iterations: usize,
) -> impl Iterator<Item = GenerationStats> + 'a {
    let mut previous: Option<SymbolCounts> = None;
    (0..=iterations).map(move |generation| {
        let counts = match previous.take() {
            Some(counts) => counts.step(rules),
            None => SymbolCounts::from_sequence(axiom),
        };
        let stats = GenerationStats::from_counts(generation, &counts, rules);
        previous = Some(counts);
        stats
    })
}

/// Statistics for generations `0..=iterations`.
pub fn collect(axiom: &Sequence, rules: &Ruleset, iterations: usize) -> Vec<GenerationStats> {
    generation_stats(axiom, rules, iterations).collect()
}
