//! The incremental engine against a brute-force full-grid oracle.
//!
//! Every storage backend, every evaluation order and every mix of clicks
//! must produce the same grid as recomputing each cell from scratch.

use egol_core::State;
use egol_engine::propagate::{apply, collect_candidates, evaluate};
use egol_engine::{Game, GameConfig};
use egol_grid::{Backend, Grid, Mode, Snapshot, StorageConfig};
use egol_rules::GameRuleDict;
use egol_space::{EdgeBehavior, SquareGrid};
use egol_test_utils::fixtures::{cascade, conway, zombie};
use egol_test_utils::reference_step;
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn backend_strategy() -> impl Strategy<Value = Backend> {
    prop_oneof![
        Just(Backend::Adaptive {
            initial: Mode::Dense
        }),
        Just(Backend::Adaptive {
            initial: Mode::Sparse
        }),
        Just(Backend::Bincount),
    ]
}

fn edge_strategy() -> impl Strategy<Value = EdgeBehavior> {
    prop_oneof![Just(EdgeBehavior::Wrap), Just(EdgeBehavior::Absorb)]
}

fn game_with(
    rules: GameRuleDict,
    w: u32,
    h: u32,
    edge: EdgeBehavior,
    backend: Backend,
    threshold: f64,
) -> Game {
    let mut cfg = GameConfig::new(w, h, edge);
    cfg.backend = backend;
    cfg.storage = StorageConfig {
        sparse_threshold: threshold,
        rebalance_interval: 1,
    };
    Game::new(cfg, rules).unwrap()
}

fn random_cells(rng: &mut ChaCha8Rng, n: usize, states: u32) -> Vec<State> {
    (0..n).map(|_| State(rng.random_range(0..states))).collect()
}

#[test]
fn shuffled_evaluation_order_is_irrelevant() {
    let shape = SquareGrid::new(12, 9, EdgeBehavior::Wrap).unwrap();
    let rules = zombie();
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let start = Snapshot::new(12, 9, random_cells(&mut rng, 108, 3)).unwrap();

    let mut results = Vec::new();
    for seed in 0..4u64 {
        let mut order_rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid =
            Grid::new(shape, State(0), Backend::default(), &StorageConfig::default()).unwrap();
        grid.load(&start).unwrap();
        let mut bound = rules.bind(shape).unwrap();
        for _ in 0..10 {
            let mut candidates: Vec<usize> =
                collect_candidates(&grid, &mut bound).into_iter().collect();
            candidates.shuffle(&mut order_rng);
            let mut pending = evaluate(&grid, &mut bound, candidates);
            pending.shuffle(&mut order_rng);
            apply(&mut grid, &pending);
        }
        results.push(grid.snapshot());
    }
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn long_zombie_run_matches_reference() {
    let shape = SquareGrid::new(16, 16, EdgeBehavior::Wrap).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let cells = random_cells(&mut rng, 256, 3);
    let mut game = game_with(zombie(), 16, 16, EdgeBehavior::Wrap, Backend::default(), 0.75);
    game.load(&Snapshot::new(16, 16, cells.clone()).unwrap()).unwrap();
    let rules = zombie();
    let mut expected = cells;
    for generation in 1..=40 {
        game.propagate();
        expected = reference_step(&shape, &rules, &expected);
        assert_eq!(game.snapshot().cells(), &expected[..], "generation {generation}");
    }
}

#[test]
fn cascade_matches_reference_on_every_backend() {
    let shape = SquareGrid::new(10, 7, EdgeBehavior::Absorb).unwrap();
    let rules = cascade(5);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let cells = random_cells(&mut rng, 70, 5);
    let snapshot = Snapshot::new(10, 7, cells.clone()).unwrap();
    let mut expected = cells;
    for _ in 0..12 {
        expected = reference_step(&shape, &rules, &expected);
    }
    for backend in [
        Backend::Adaptive {
            initial: Mode::Dense,
        },
        Backend::Adaptive {
            initial: Mode::Sparse,
        },
        Backend::Bincount,
    ] {
        let mut game = game_with(cascade(5), 10, 7, EdgeBehavior::Absorb, backend, 0.5);
        game.load(&snapshot).unwrap();
        for _ in 0..12 {
            game.propagate();
        }
        assert_eq!(game.snapshot().cells(), &expected[..], "{backend:?}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn incremental_matches_full_grid_step(
        w in 2u32..9,
        h in 1u32..9,
        edge in edge_strategy(),
        backend in backend_strategy(),
        threshold in 0.0f64..=1.0,
        zombies in any::<bool>(),
        seed in any::<u64>(),
        generations in 1usize..12,
        clicks in proptest::collection::vec((0u32..9, 0u32..9, 0u32..3), 0..6),
    ) {
        let (rules, states) = if zombies { (zombie(), 3) } else { (conway(), 2) };
        let shape = SquareGrid::new(w, h, edge).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut expected = random_cells(&mut rng, (w * h) as usize, states);
        let mut game = game_with(rules.clone(), w, h, edge, backend, threshold);
        game.load(&Snapshot::new(w, h, expected.clone()).unwrap()).unwrap();

        for generation in 0..generations {
            // Direct writes between the first and second generation.
            if generation == 1 {
                for &(x, y, s) in &clicks {
                    if x < w && y < h {
                        let state = State(s % states);
                        game.set(x, y, state);
                        expected[shape.index(x, y)] = state;
                    }
                }
            }
            game.propagate();
            expected = reference_step(&shape, &rules, &expected);
            let snapshot = game.snapshot();
            prop_assert_eq!(snapshot.cells(), &expected[..]);
        }
        let mut recount = 0;
        for s in 0..states {
            recount += game.grid().occupancy(State(s));
        }
        prop_assert_eq!(recount, (w * h) as usize);
    }
}
