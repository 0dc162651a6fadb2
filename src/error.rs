//! Errors raised at the boundary of the rewrite engine.
//!
//! [`crate::rewriting::expand`] itself is total; everything here comes from
//! reading definitions (rule strings, numeric fields, JSON files) or from the
//! length-bounded expansion variant.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed rule {line:?}: a rule needs at least the symbol it defines")]
    MalformedRule { line: String },

    #[error("expected a number for {field}, got {input:?}")]
    NonNumeric { field: &'static str, input: String },

    #[error("iteration count must not be negative, got {0}")]
    NegativeIterations(i64),

    #[error(
        "generation {generation} has {length} symbols, which exceeds the limit of {limit}"
    )]
    LengthLimitExceeded {
        generation: usize,
        length: usize,
        limit: usize,
    },

    #[error("input ended while reading {field}")]
    UnexpectedEof { field: &'static str },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
