use super::Symbol;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// An ordered run of symbols: an axiom, a replacement or one generation.
///
/// Serializes as a plain string.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Sequence {
    symbols: Vec<Symbol>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn extend_from_slice(&mut self, symbols: &[Symbol]) {
        self.symbols.extend_from_slice(symbols);
    }

    pub(crate) fn clear(&mut self) {
        self.symbols.clear();
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl From<String> for Sequence {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Sequence> for String {
    fn from(sequence: Sequence) -> Self {
        sequence.symbols.into_iter().collect()
    }
}

impl From<Vec<Symbol>> for Sequence {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl FromStr for Sequence {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl FromIterator<Symbol> for Sequence {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'s> IntoIterator for &'s Sequence {
    type Item = &'s Symbol;
    type IntoIter = std::slice::Iter<'s, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.symbols.iter().try_for_each(|symbol| f.write_char(*symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::Sequence;

    #[test]
    fn display_concatenates_symbols() {
        let sequence = Sequence::from("F[+X]F[-X]+X");

        assert_eq!(sequence.len(), 12);
        assert_eq!(sequence.to_string(), "F[+X]F[-X]+X");
    }

    #[test]
    fn empty_sequence() {
        let sequence: Sequence = "".parse().unwrap();

        assert!(sequence.is_empty());
        assert_eq!(sequence.to_string(), "");
    }

    #[test]
    fn multibyte_symbols_count_once() {
        let sequence = Sequence::from("αβ+");

        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.as_slice(), &['α', 'β', '+']);
    }

    #[test]
    fn sequence_serializes_as_string() {
        let sequence = Sequence::from("AB+");
        let serialized = serde_json::to_string(&sequence).unwrap();

        assert_eq!(serialized, "\"AB+\"");
        let deserialized: Sequence = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, sequence);
    }
}
