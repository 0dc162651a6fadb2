use crate::language::{Sequence, Symbol, is_rewritable};
use crate::rewriting::rule::Rule;
use itertools::Itertools;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Productions keyed by the symbol they rewrite. Each symbol has at most one.
///
/// A symbol without a production is its own replacement. Ordered so that
/// display and serialized forms are stable. Serializes as a map from symbol to
/// replacement string.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Ruleset {
    rules: BTreeMap<Symbol, Sequence>,
}

impl Ruleset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines the production for `symbol`, returning the one it replaces.
    pub fn insert(&mut self, symbol: Symbol, replacement: impl Into<Sequence>) -> Option<Sequence> {
        let replacement = replacement.into();
        if !is_rewritable(symbol) {
            tracing::warn!(%symbol, "rule for a non-alphabetic symbol will never be applied");
        }
        tracing::trace!(%symbol, %replacement, "defining rule");

        let previous = self.rules.insert(symbol, replacement);
        if let Some(previous) = &previous {
            tracing::warn!(%symbol, %previous, "rule redefined, keeping the later definition");
        }
        previous
    }

    pub fn add_rule(&mut self, rule: Rule) -> Option<Sequence> {
        let (symbol, replacement) = rule.into_parts();
        self.insert(symbol, replacement)
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Sequence> {
        self.rules.get(&symbol)
    }

    /// The replacement for `symbol`, or `symbol` itself when it has no production.
    pub fn replacement<'a>(&'a self, symbol: &'a Symbol) -> &'a [Symbol] {
        match self.rules.get(symbol) {
            Some(replacement) => replacement.as_slice(),
            None => std::slice::from_ref(symbol),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Sequence)> {
        self.rules.iter().map(|(symbol, replacement)| (*symbol, replacement))
    }

    /// Longest replacement, counting the implicit identity production as 1.
    pub fn max_replacement_len(&self) -> usize {
        self.rules
            .values()
            .map(Sequence::len)
            .max()
            .map_or(1, |len| len.max(1))
    }
}

impl FromIterator<Rule> for Ruleset {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut ruleset = Self::new();
        for rule in iter {
            ruleset.add_rule(rule);
        }
        ruleset
    }
}

impl Extend<Rule> for Ruleset {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        for rule in iter {
            self.add_rule(rule);
        }
    }
}

impl Serialize for Ruleset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(&self.rules)
    }
}

// Entries go through `insert` so that redefinitions and rules for marks are
// reported the same way as rules entered on the console.
impl<'de> Deserialize<'de> for Ruleset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RulesetVisitor;

        impl<'de> Visitor<'de> for RulesetVisitor {
            type Value = Ruleset;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from single symbols to replacements")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Ruleset, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut ruleset = Ruleset::new();
                while let Some((symbol, replacement)) = map.next_entry::<Symbol, Sequence>()? {
                    ruleset.insert(symbol, replacement);
                }
                Ok(ruleset)
            }
        }

        deserializer.deserialize_map(RulesetVisitor)
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .iter()
            .map(|(symbol, replacement)| format!("{symbol} -> {replacement}"))
            .join("\n");
        f.write_str(&lines)
    }
}

#[cfg(test)]
mod tests {
    use super::Ruleset;
    use crate::language::Sequence;
    use crate::rewriting::rule::Rule;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn missing_symbol_maps_to_itself() {
        let ruleset = Ruleset::new();

        assert_eq!(ruleset.replacement(&'Q'), &['Q']);
    }

    #[test]
    fn later_definition_overwrites() {
        let mut ruleset = Ruleset::new();

        assert_eq!(ruleset.insert('A', "AB"), None);
        assert_eq!(ruleset.insert('A', "BA"), Some(Sequence::from("AB")));
        assert_eq!(ruleset.len(), 1);
        assert_eq!(ruleset.replacement(&'A'), &['B', 'A']);
    }

    #[test]
    fn collects_rules_in_order() {
        let ruleset: Ruleset = [Rule::new('A', "AB"), Rule::new('B', "A"), Rule::new('A', "C")]
            .into_iter()
            .collect();

        assert_eq!(ruleset.len(), 2);
        assert_eq!(ruleset.get('A'), Some(&Sequence::from("C")));
    }

    #[test]
    fn deletion_rule_has_empty_replacement() {
        let mut ruleset = Ruleset::new();
        ruleset.insert('B', "");

        assert!(ruleset.replacement(&'B').is_empty());
    }

    #[test]
    fn max_replacement_len_counts_identity() {
        let mut ruleset = Ruleset::new();
        assert_eq!(ruleset.max_replacement_len(), 1);

        ruleset.insert('B', "");
        assert_eq!(ruleset.max_replacement_len(), 1);

        ruleset.insert('F', "F+F-F");
        assert_eq!(ruleset.max_replacement_len(), 5);
    }

    #[test]
    fn display_lists_rules_by_symbol() {
        let ruleset = rules!('B' => "A", 'A' => "AB");

        assert_eq!(ruleset.to_string(), "A -> AB\nB -> A");
    }

    #[test]
    fn test_ruleset_serialization() {
        let ruleset = rules!('X' => "F[+X]F[-X]+X", 'F' => "FF");
        let serialized = serde_json::to_string(&ruleset).unwrap();

        assert_eq!(serialized, r#"{"F":"FF","X":"F[+X]F[-X]+X"}"#);
        let deserialized: Ruleset = serde_json::from_str(&serialized).unwrap();
        assert_eq!(ruleset, deserialized);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn loading_warns_like_inserting() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        let ruleset = tracing::subscriber::with_default(subscriber, || {
            serde_json::from_str::<Ruleset>(r#"{"A":"AB","A":"C","+":"-"}"#).unwrap()
        });
        let logs = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();

        assert_eq!(ruleset, rules!('A' => "C", '+' => "-"));
        assert!(logs.contains("rule redefined"), "{logs}");
        assert!(logs.contains("non-alphabetic symbol"), "{logs}");
    }

    #[test]
    fn multi_character_key_is_rejected() {
        assert!(serde_json::from_str::<Ruleset>(r#"{"XY":"F"}"#).is_err());
    }
}
