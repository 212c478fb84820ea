//! Benchmark profiles for the egol engine.
//!
//! - [`reference_profile`]: 100x100 periodic Life soup (10K cells)
//! - [`stress_profile`]: 316x316 periodic Life soup (~100K cells)
//! - [`soup`]: deterministic random fill via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use egol_core::State;
use egol_engine::{Game, GameConfig};
use egol_grid::{Backend, Snapshot};
use egol_rules::{CountingRule, GameRuleDict, StateRuleList};
use egol_space::EdgeBehavior;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Conway's Game of Life (B3/S23).
pub fn life_rules() -> GameRuleDict {
    let (dead, alive) = (State(0), State(1));
    GameRuleDict::from_lists(vec![
        StateRuleList::new(vec![CountingRule::new(alive, [1], [(3, alive)])], dead),
        StateRuleList::new(
            vec![CountingRule::new(alive, [1], [(2, alive), (3, alive)])],
            dead,
        ),
    ])
}

/// A `width` x `height` snapshot where each cell is state 1 with
/// probability `density`, else state 0.
pub fn soup(width: u32, height: u32, density: f64, seed: u64) -> Snapshot {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cells = (0..width as usize * height as usize)
        .map(|_| State(u32::from(rng.random_bool(density))))
        .collect();
    Snapshot::new(width, height, cells).expect("dimensions match cell count")
}

fn profile(size: u32, backend: Backend, seed: u64) -> Game {
    let mut cfg = GameConfig::new(size, size, EdgeBehavior::Wrap);
    cfg.backend = backend;
    let mut game = Game::new(cfg, life_rules()).expect("valid benchmark config");
    game.load(&soup(size, size, 0.3, seed))
        .expect("soup matches grid");
    game
}

/// 100x100 periodic Life grid seeded with a 30% soup.
pub fn reference_profile(backend: Backend, seed: u64) -> Game {
    profile(100, backend, seed)
}

/// 316x316 periodic Life grid seeded with a 30% soup.
pub fn stress_profile(backend: Backend, seed: u64) -> Game {
    profile(316, backend, seed)
}
