//! Generational rewriting for deterministic, context-free L-systems.
//!
//! An L-system is an axiom plus one production per letter. Every generation
//! replaces all letters of the previous generation in parallel; symbols that are
//! not letters (`+`, `-`, `[`, `]`, ...) are copied through unchanged.
//!
//! ```
//! use lindenmayer::{language::Sequence, rewriting::expand, rules};
//!
//! let rules = rules!('A' => "AB", 'B' => "A");
//! let word = expand(&Sequence::from("A"), &rules, 3);
//! assert_eq!(word.to_string(), "ABAAB");
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod language;
pub mod report;
pub mod rewriting;
pub mod shell;
pub mod system;
pub mod utils;
