use crate::error::Result;
use crate::language::Sequence;
use crate::rewriting::{self, Generations, Ruleset};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod presets;

/// A complete L-system definition: axiom, productions and turning angle.
///
/// The angle is only carried along for renderers; expansion never reads it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LSystem {
    #[serde(default)]
    angle: f64,
    axiom: Sequence,
    #[serde(default)]
    rules: Ruleset,
}

impl LSystem {
    pub fn new(angle: f64, axiom: impl Into<Sequence>, rules: Ruleset) -> Self {
        Self {
            angle,
            axiom: axiom.into(),
            rules,
        }
    }

    /// Load an L-system from a JSON file of the form
    /// `{"angle": 25.0, "axiom": "X", "rules": {"X": "F[+X]F[-X]+X"}}`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let system: Self = crate::utils::json::load_json(path)?;
        tracing::debug!(path = %path.display(), rules = system.rules.len(), "loaded L-system");
        Ok(system)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::utils::json::save_json(self, path)
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn axiom(&self) -> &Sequence {
        &self.axiom
    }

    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut Ruleset {
        &mut self.rules
    }

    pub fn expand(&self, iterations: usize) -> Sequence {
        rewriting::expand(&self.axiom, &self.rules, iterations)
    }

    pub fn expand_bounded(&self, iterations: usize, limit: usize) -> Result<Sequence> {
        rewriting::expand_bounded(&self.axiom, &self.rules, iterations, limit)
    }

    pub fn expanded_length(&self, iterations: usize) -> u128 {
        rewriting::expanded_length(&self.axiom, &self.rules, iterations)
    }

    pub fn generations(&self) -> Generations<'_> {
        Generations::new(self.axiom.clone(), &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::LSystem;
    use crate::language::Sequence;

    #[test]
    fn expands_with_own_rules() {
        let system = lsystem!(angle: 25.0, axiom: "X", rules: 'X' => "F[+X]F[-X]+X");

        assert_eq!(system.angle(), 25.0);
        assert_eq!(system.expand(1).to_string(), "F[+X]F[-X]+X");
        assert_eq!(system.expanded_length(2), system.expand(2).len() as u128);
    }

    #[test]
    fn generations_start_at_the_axiom() {
        let system = lsystem!(axiom: "A", rules: 'A' => "AB", 'B' => "A");
        let mut generations = system.generations();

        assert_eq!(generations.generation(), 0);
        assert_eq!(generations.current(), &Sequence::from("A"));
        assert_eq!(generations.step(), &Sequence::from("AB"));
        assert_eq!(generations.step(), &Sequence::from("ABA"));
        assert_eq!(generations.generation(), 2);
    }

    #[test]
    fn test_lsystem_serialization() {
        let system = lsystem!(angle: 90.0, axiom: "F", rules: 'F' => "F+F-F-F+F");
        let serialized = serde_json::to_string(&system).unwrap();
        let deserialized: LSystem = serde_json::from_str(&serialized).unwrap();

        assert_eq!(system, deserialized);
    }

    #[test]
    fn angle_and_rules_are_optional() {
        let system: LSystem = serde_json::from_str(r#"{"axiom": "AB"}"#).unwrap();

        assert_eq!(system.angle(), 0.0);
        assert!(system.rules().is_empty());
        assert_eq!(system.expand(3).to_string(), "AB");
    }

    #[test]
    fn save_and_load() {
        let system = LSystem::dragon_curve();
        let path = std::env::temp_dir().join(format!(
            "lindenmayer-save-and-load-{}.json",
            std::process::id()
        ));

        system.save(&path).unwrap();
        let loaded = LSystem::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(system, loaded);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("lindenmayer-does-not-exist/system.json");

        assert!(LSystem::from_file(path).is_err());
    }
}
