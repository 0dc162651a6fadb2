//! Generational rewriting of symbol sequences.
//!
//! Every generation is built from the previous one only: each symbol of
//! generation `n` is replaced by its production and appended, in order, to
//! generation `n + 1`. Symbols produced during a pass are never expanded again in
//! that same pass. Two buffers (the current and the next generation) are alive
//! at a time and are swapped after every pass.

use crate::error::{Error, Result};
use crate::language::{Sequence, Symbol, is_rewritable};
use std::collections::HashMap;

pub use ruleset::Ruleset;

pub mod rule;
pub mod ruleset;

/// What `symbol` turns into in the next generation.
fn rewrite_symbol<'a>(rules: &'a Ruleset, symbol: &'a Symbol) -> &'a [Symbol] {
    if is_rewritable(*symbol) {
        rules.replacement(symbol)
    } else {
        std::slice::from_ref(symbol)
    }
}

/// Length of the generation following `current`, without building it.
fn next_len(current: &Sequence, rules: &Ruleset) -> usize {
    current
        .iter()
        .map(|symbol| rewrite_symbol(rules, symbol).len())
        .fold(0usize, usize::saturating_add)
}

/// Expands `axiom` for `iterations` generations.
///
/// Zero iterations return the axiom unchanged. The result can grow exponentially
/// with `iterations`; see [`expand_bounded`] and [`expanded_length`] for ways to
/// keep that in check.
pub fn expand(axiom: &Sequence, rules: &Ruleset, iterations: usize) -> Sequence {
    let mut generations = Generations::new(axiom.clone(), rules);
    for _ in 0..iterations {
        generations.step();
    }
    generations.into_current()
}

/// Like [`expand`], but fails once any generation would hold more than `limit`
/// symbols. The check happens before the oversized generation is allocated.
pub fn expand_bounded(
    axiom: &Sequence,
    rules: &Ruleset,
    iterations: usize,
    limit: usize,
) -> Result<Sequence> {
    if axiom.len() > limit {
        return Err(Error::LengthLimitExceeded {
            generation: 0,
            length: axiom.len(),
            limit,
        });
    }

    let mut generations = Generations::new(axiom.clone(), rules);
    for _ in 0..iterations {
        let length = next_len(generations.current(), rules);
        if length > limit {
            return Err(Error::LengthLimitExceeded {
                generation: generations.generation() + 1,
                length,
                limit,
            });
        }
        generations.step();
    }
    Ok(generations.into_current())
}

/// Length of `expand(axiom, rules, iterations)` computed from symbol counts.
///
/// Only the multiplicity of each distinct symbol is tracked, so this stays cheap
/// even when the expanded sequence would not fit in memory. Saturates at
/// `u128::MAX`.
pub fn expanded_length(axiom: &Sequence, rules: &Ruleset, iterations: usize) -> u128 {
    let mut counts = SymbolCounts::from_sequence(axiom);
    for _ in 0..iterations {
        counts = counts.step(rules);
    }
    counts.total()
}

/// How many times each distinct symbol occurs in a generation.
///
/// Symbol order is lost, but counts of the next generation follow from counts of
/// the current one alone.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct SymbolCounts {
    counts: HashMap<Symbol, u128>,
}

impl SymbolCounts {
    pub fn from_sequence(sequence: &Sequence) -> Self {
        let mut counts: HashMap<Symbol, u128> = HashMap::new();
        for symbol in sequence {
            *counts.entry(*symbol).or_default() += 1;
        }
        Self { counts }
    }

    pub fn step(&self, rules: &Ruleset) -> Self {
        let mut next: HashMap<Symbol, u128> = HashMap::with_capacity(self.counts.len());
        for (symbol, count) in &self.counts {
            for produced in rewrite_symbol(rules, symbol) {
                let entry = next.entry(*produced).or_default();
                *entry = entry.saturating_add(*count);
            }
        }
        Self { counts: next }
    }

    pub fn get(&self, symbol: Symbol) -> u128 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u128)> + '_ {
        self.counts.iter().map(|(symbol, count)| (*symbol, *count))
    }

    pub fn total(&self) -> u128 {
        self.counts
            .values()
            .fold(0u128, |total, count| total.saturating_add(*count))
    }
}

/// Walks the generations of an L-system one at a time.
///
/// Starts at generation 0 (the axiom). [`Generations::step`] rewrites the current
/// generation into a reused second buffer and swaps the two.
pub struct Generations<'r> {
    rules: &'r Ruleset,
    current: Sequence,
    next: Sequence,
    generation: usize,
}

impl<'r> Generations<'r> {
    pub fn new(axiom: Sequence, rules: &'r Ruleset) -> Self {
        Self {
            rules,
            current: axiom,
            next: Sequence::new(),
            generation: 0,
        }
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn current(&self) -> &Sequence {
        &self.current
    }

    /// Rewrites the current generation into the next one.
    pub fn step(&mut self) -> &Sequence {
        self.next.clear();
        for symbol in &self.current {
            self.next.extend_from_slice(rewrite_symbol(self.rules, symbol));
        }
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        tracing::debug!(
            generation = self.generation,
            length = self.current.len(),
            "expanded generation"
        );
        &self.current
    }

    pub fn into_current(self) -> Sequence {
        self.current
    }
}
