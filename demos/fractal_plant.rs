//! Grows the classic fractal plant and prints a few generations.
//!
//! Run with `cargo run --example fractal_plant`.

use lindenmayer::report::{self, PrettyFormatter};
use lindenmayer::system::LSystem;

fn main() {
    let plant = LSystem::fractal_plant();
    println!("Axiom: {}", plant.axiom());
    println!("Rules:\n{}", plant.rules());

    let mut generations = plant.generations();
    for _ in 0..2 {
        generations.step();
        println!(
            "\nGeneration {}: {}",
            generations.generation(),
            generations.current()
        );
    }

    // Far past anything that fits in memory; lengths come from symbol counts.
    println!("\nLength after 40 generations: {}", plant.expanded_length(40));

    let stats = report::collect(plant.axiom(), plant.rules(), 8);
    println!("\n{}", PrettyFormatter::format(&stats));
}
