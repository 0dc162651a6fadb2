// Macros to simplify ruleset and L-system declarations

#[macro_export]
macro_rules! rules {
    () => {
        $crate::rewriting::Ruleset::new()
    };
    ($( $symbol:expr => $replacement:expr ),+ $(,)?) => {{
        let mut ruleset = $crate::rewriting::Ruleset::new();
        $( ruleset.insert($symbol, $replacement); )+
        ruleset
    }};
}

#[macro_export]
macro_rules! lsystem {
    (angle: $angle:expr, axiom: $axiom:expr, rules: $($rules:tt)* ) => {
        $crate::system::LSystem::new($angle, $axiom, $crate::rules!($($rules)*))
    };
    (axiom: $axiom:expr, rules: $($rules:tt)* ) => {
        $crate::lsystem!(angle: 0.0, axiom: $axiom, rules: $($rules)*)
    };
}
