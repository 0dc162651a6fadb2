use super::LSystem;

/// Names accepted by [`LSystem::preset`].
pub const PRESETS: [&str; 5] = [
    "algae",
    "koch-curve",
    "fractal-plant",
    "dragon-curve",
    "sierpinski-triangle",
];

impl LSystem {
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "algae" => Some(Self::algae()),
            "koch-curve" => Some(Self::koch_curve()),
            "fractal-plant" => Some(Self::fractal_plant()),
            "dragon-curve" => Some(Self::dragon_curve()),
            "sierpinski-triangle" => Some(Self::sierpinski_triangle()),
            _ => None,
        }
    }

    /// Lindenmayer's original algae model. Lengths follow the Fibonacci numbers.
    pub fn algae() -> Self {
        lsystem!(axiom: "A", rules: 'A' => "AB", 'B' => "A")
    }

    pub fn koch_curve() -> Self {
        lsystem!(angle: 90.0, axiom: "F", rules: 'F' => "F+F-F-F+F")
    }

    pub fn fractal_plant() -> Self {
        lsystem!(
            angle: 25.0,
            axiom: "X",
            rules: 'X' => "F+[[X]-X]-F[-FX]+X", 'F' => "FF"
        )
    }

    pub fn dragon_curve() -> Self {
        lsystem!(angle: 90.0, axiom: "F", rules: 'F' => "F+G", 'G' => "F-G")
    }

    pub fn sierpinski_triangle() -> Self {
        lsystem!(
            angle: 120.0,
            axiom: "F-G-G",
            rules: 'F' => "F-G+F+G-F", 'G' => "GG"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PRESETS;
    use crate::system::LSystem;

    #[test]
    fn every_preset_resolves() {
        for name in PRESETS {
            assert!(LSystem::preset(name).is_some(), "missing preset {name}");
        }
        assert!(LSystem::preset("cantor-dust").is_none());
    }

    #[test]
    fn algae_grows_like_fibonacci() {
        let algae = LSystem::algae();

        assert_eq!(algae.expand(5).to_string(), "ABAABABAABAAB");
    }

    #[test]
    fn koch_curve_second_generation() {
        let koch = LSystem::koch_curve();

        assert_eq!(
            koch.expand(2).to_string(),
            "F+F-F-F+F+F+F-F-F+F-F+F-F-F+F-F+F-F-F+F+F+F-F-F+F"
        );
    }

    #[test]
    fn dragon_curve_doubles_its_letters() {
        let dragon = LSystem::dragon_curve();

        assert_eq!(dragon.expand(2).to_string(), "F+G+F-G");
        let letters = dragon
            .expand(8)
            .iter()
            .filter(|symbol| symbol.is_alphabetic())
            .count();
        assert_eq!(letters, 1 << 8);
    }

    #[test]
    fn sierpinski_first_generation() {
        let sierpinski = LSystem::sierpinski_triangle();

        assert_eq!(sierpinski.expand(1).to_string(), "F-G+F+G-F-GG-GG");
    }
}
