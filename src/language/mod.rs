pub use sequence::Sequence;

pub mod sequence;

/// A single L-system symbol.
pub type Symbol = char;

/// Whether `symbol` takes part in rewriting.
///
/// Only alphabetic symbols are ever replaced. Marks such as `+`, `-`, `[` and `]`
/// are copied into the next generation unchanged, even if a rule exists for them.
pub fn is_rewritable(symbol: Symbol) -> bool {
    symbol.is_alphabetic()
}
