//! Conway's Game of Life through the full `Game` facade.
//!
//! Covers the classic behaviours the incremental engine must reproduce:
//! glider translation on a torus, still lifes, oscillators, and the
//! empty-candidate no-op once the grid reaches a fixed point.

use egol_core::{ActionToken, State};
use egol_engine::{Game, GameConfig};
use egol_grid::{Backend, Mode, Snapshot};
use egol_space::{EdgeBehavior, Topology};
use egol_test_utils::fixtures::{blinker, block, conway, glider, ALIVE, DEAD};

fn backends() -> [Backend; 3] {
    [
        Backend::Adaptive {
            initial: Mode::Dense,
        },
        Backend::Adaptive {
            initial: Mode::Sparse,
        },
        Backend::Bincount,
    ]
}

fn life(w: u32, h: u32, edge: EdgeBehavior, backend: Backend) -> Game {
    let mut cfg = GameConfig::new(w, h, edge);
    cfg.backend = backend;
    Game::new(cfg, conway()).unwrap()
}

fn alive_cells(game: &Game) -> Vec<(u32, u32)> {
    (0..game.cell_count())
        .filter(|&i| game.query_index(i) == ALIVE)
        .map(|i| game.shape().coords(i))
        .collect()
}

fn shifted(cells: &[(u32, u32)], by: u32, size: u32) -> Vec<(u32, u32)> {
    let mut out: Vec<(u32, u32)> = cells
        .iter()
        .map(|&(x, y)| ((x + by) % size, (y + by) % size))
        .collect();
    out.sort_by_key(|&(x, y)| (y, x));
    out
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    for backend in backends() {
        let mut game = life(6, 6, EdgeBehavior::Wrap, backend);
        game.stamp(&glider(), 0, 0).unwrap();
        let start = alive_cells(&game);
        assert_eq!(start.len(), 5);

        for _ in 0..4 {
            game.propagate();
        }
        assert_eq!(alive_cells(&game), shifted(&start, 1, 6), "{backend:?}");

        for _ in 4..24 {
            game.propagate();
        }
        assert_eq!(alive_cells(&game), start, "{backend:?}");
        assert_eq!(game.generation(), 24);
    }
}

#[test]
fn block_is_a_still_life() {
    for edge in [EdgeBehavior::Wrap, EdgeBehavior::Absorb] {
        for backend in backends() {
            let mut game = life(6, 6, edge, backend);
            game.stamp(&block(), 2, 2).unwrap();
            let before = game.snapshot();
            for _ in 0..5 {
                let m = game.propagate();
                assert_eq!(m.changes, 0, "{edge:?} {backend:?}");
            }
            assert_eq!(game.snapshot(), before, "{edge:?} {backend:?}");
        }
    }
}

#[test]
fn block_straddling_the_seam_is_a_still_life() {
    let mut game = life(6, 6, EdgeBehavior::Wrap, Backend::default());
    game.stamp(&block(), 5, 5).unwrap();
    assert_eq!(game.grid().occupancy(ALIVE), 4);
    let before = game.snapshot();
    for _ in 0..5 {
        assert_eq!(game.propagate().changes, 0);
    }
    assert_eq!(game.snapshot(), before);
}

#[test]
fn fixed_point_leads_to_idle_generations() {
    let mut game = life(6, 6, EdgeBehavior::Absorb, Backend::default());
    game.stamp(&block(), 1, 1).unwrap();
    // Stamping and the initial sweep are evaluated once.
    assert!(game.propagate().candidates > 0);
    let idle = game.propagate();
    assert!(idle.is_idle());
    assert_eq!(idle.changes, 0);
    let before = game.snapshot();
    assert!(game.propagate().is_idle());
    assert_eq!(game.snapshot(), before);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut game = life(5, 5, EdgeBehavior::Absorb, Backend::default());
    game.stamp(&blinker(), 1, 2).unwrap();
    let horizontal = game.snapshot();
    game.propagate();
    let vertical = game.snapshot();
    assert_ne!(horizontal, vertical);
    assert_eq!(vertical.get(2, 1), Some(ALIVE));
    assert_eq!(vertical.get(2, 3), Some(ALIVE));
    game.propagate();
    assert_eq!(game.snapshot(), horizontal);
}

#[test]
fn corner_sees_three_neighbours_without_wrap_and_eight_with_it() {
    // A corner cell with all of its absorb-mode neighbours alive has
    // exactly three, so it is born. With wrap it has eight and stays dead.
    let rows = [
        [DEAD, ALIVE, DEAD, DEAD],
        [ALIVE, ALIVE, DEAD, DEAD],
        [DEAD, DEAD, DEAD, DEAD],
        [DEAD, DEAD, DEAD, DEAD],
    ];
    let snapshot = Snapshot::from_rows(&rows).unwrap();

    let mut absorb = life(4, 4, EdgeBehavior::Absorb, Backend::default());
    absorb.load(&snapshot).unwrap();
    absorb.propagate();
    assert_eq!(absorb.query(0, 0), ALIVE);

    let mut wrap = life(4, 4, EdgeBehavior::Wrap, Backend::default());
    // Fill every wrap neighbour of (0, 0).
    for (x, y) in [(1, 0), (3, 0), (0, 1), (1, 1), (3, 1), (0, 3), (1, 3), (3, 3)] {
        wrap.set(x, y, ALIVE);
    }
    assert_eq!(wrap.shape().ring(0, 1).len(), 8);
    wrap.propagate();
    assert_eq!(wrap.query(0, 0), DEAD);
}

#[test]
fn clicks_feed_the_next_generation() {
    let mut game = life(6, 6, EdgeBehavior::Absorb, Backend::default());
    game.propagate();
    for x in 2..4 {
        for y in 2..4 {
            game.queue_click(ActionToken::PRIMARY, x, y);
        }
    }
    let m = game.propagate();
    assert_eq!(m.clicks_applied, 4);
    assert_eq!(m.changes, 0);
    assert_eq!(game.grid().occupancy(ALIVE), 4);
    // Kill one corner of the block: the remaining three form a stable
    // block again next generation.
    game.click_action(ActionToken::SECONDARY, 2, 2);
    game.propagate();
    assert_eq!(game.query(2, 2), ALIVE);
    assert_eq!(game.grid().occupancy(ALIVE), 4);
}

#[test]
fn changed_since_last_draw_reports_each_mutation_once() {
    let mut game = life(5, 5, EdgeBehavior::Absorb, Backend::default());
    assert_eq!(game.changed_since_last_draw().len(), 25);
    assert!(game.changed_since_last_draw().is_empty());
    game.stamp(&blinker(), 1, 2).unwrap();
    let mut drawn = game.changed_since_last_draw();
    drawn.sort_unstable();
    let shape = *game.shape();
    assert_eq!(
        drawn,
        vec![shape.index(1, 2), shape.index(2, 2), shape.index(3, 2)]
    );
    game.propagate();
    assert_eq!(game.changed_since_last_draw().len(), 4);
    assert_eq!(game.query(0, 0), State(0));
}
