use crate::error::{Error, Result};
use crate::language::{Sequence, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A production: `symbol` is replaced by `replacement` in every generation.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rule {
    symbol: Symbol,
    replacement: Sequence,
}

impl Rule {
    pub fn new(symbol: Symbol, replacement: impl Into<Sequence>) -> Self {
        Self {
            symbol,
            replacement: replacement.into(),
        }
    }

    /// Parses the compact rule form used on the console and command line.
    ///
    /// The first character is the symbol being defined and everything after it
    /// is the replacement, so `"XF[+X]F[-X]+X"` means `X -> F[+X]F[-X]+X` and a
    /// lone `"B"` deletes every `B`. There is no separator between the two.
    pub fn parse(line: &str) -> Result<Self> {
        let mut chars = line.chars();
        let symbol = chars.next().ok_or_else(|| Error::MalformedRule {
            line: line.to_string(),
        })?;

        Ok(Self::new(symbol, chars.as_str()))
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn replacement(&self) -> &Sequence {
        &self.replacement
    }

    pub fn into_parts(self) -> (Symbol, Sequence) {
        (self.symbol, self.replacement)
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.replacement)
    }
}
