//! Run a random Life soup and print per-generation metrics.
//!
//! Demonstrates: build a profile -> propagate -> read metrics -> crop.

use egol_bench::reference_profile;
use egol_core::State;
use egol_grid::Backend;

fn main() {
    println!("=== egol soup ===\n");

    let mut game = reference_profile(Backend::default(), 42);
    for _ in 0..200 {
        let m = game.propagate();
        if m.generation % 20 == 0 {
            println!(
                "gen {:>3}: {:>5} candidates, {:>4} changes, {:>5} alive, {} storage, {} us",
                m.generation,
                m.candidates,
                m.changes,
                game.grid().occupancy(State(1)),
                m.mode,
                m.elapsed_us
            );
        }
    }

    match game.crop() {
        Some(bbox) => println!("\nlive region: {}x{}", bbox.width(), bbox.height()),
        None => println!("\nsoup died out"),
    }
}
