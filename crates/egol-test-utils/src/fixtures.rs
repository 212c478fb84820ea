//! Standard rule sets and patterns.
//!
//! - [`conway`]: two-state Game of Life (B3/S23).
//! - [`zombie`]: three states; zombies infect the living and die off when
//!   crowded.
//! - [`cascade`]: an n-state rule where crowded cells climb and lonely
//!   cells decay one state per generation.

use egol_core::State;
use egol_grid::Pattern;
use egol_rules::{CountingRule, GameRuleDict, StateRuleList};

pub const DEAD: State = State(0);
pub const ALIVE: State = State(1);
pub const ZOMBIE: State = State(2);

// ── Rule sets ───────────────────────────────────────────────────

pub fn conway() -> GameRuleDict {
    GameRuleDict::from_lists(vec![
        StateRuleList::new(vec![CountingRule::new(ALIVE, [1], [(3, ALIVE)])], DEAD),
        StateRuleList::new(
            vec![CountingRule::new(ALIVE, [1], [(2, ALIVE), (3, ALIVE)])],
            DEAD,
        ),
    ])
}

/// Life with a third, infectious state.
///
/// Rule order matters: a living cell checks for zombies before checking
/// its living neighbours, and a zombie is killed by a crowd in shells 1
/// and 2 only after both single-shell rules miss.
pub fn zombie() -> GameRuleDict {
    GameRuleDict::from_lists(vec![
        StateRuleList::new(
            vec![
                CountingRule::new(ALIVE, [1], [(3, ALIVE)]),
                CountingRule::new(ZOMBIE, [1], [(3, ZOMBIE)]),
            ],
            DEAD,
        ),
        StateRuleList::new(
            vec![
                CountingRule::new(ZOMBIE, [1], (2..9).map(|c| (c, ZOMBIE))),
                CountingRule::new(ALIVE, [1], [(2, ALIVE), (3, ALIVE)]),
            ],
            DEAD,
        ),
        StateRuleList::new(
            vec![
                CountingRule::new(ZOMBIE, [1], [(2, ZOMBIE), (3, ZOMBIE)]),
                CountingRule::new(
                    ALIVE,
                    [1],
                    (1..4).map(|c| (c, ZOMBIE)).chain((4..9).map(|c| (c, DEAD))),
                ),
                CountingRule::new(ZOMBIE, [1, 2], (6..22).map(|c| (c, DEAD))),
            ],
            DEAD,
        ),
    ])
}

/// `states`-state cascade.
///
/// A cell in state `s` with 2 or 3 neighbours in `s` or `s + 1` jumps to
/// `count + 2` (capped at the top state); otherwise it decays to `s - 1`.
///
/// # Panics
///
/// Panics if `states < 2`.
pub fn cascade(states: u32) -> GameRuleDict {
    assert!(states >= 2, "a cascade needs at least two states");
    let top = states - 1;
    GameRuleDict::from_lists(
        (0..states)
            .map(|s| {
                let rules = (s..(s + 2).min(states))
                    .map(|counted| {
                        CountingRule::new(
                            State(counted),
                            [1],
                            (2..4).map(|c| (c, State((c + 2).min(top)))),
                        )
                    })
                    .collect();
                StateRuleList::new(rules, State(s.saturating_sub(1)))
            })
            .collect(),
    )
}

// ── Patterns ────────────────────────────────────────────────────

/// Conway glider heading towards +x, +y.
pub fn glider() -> Pattern {
    Pattern::uniform(DEAD, ALIVE, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)])
}

/// 2x2 still life.
pub fn block() -> Pattern {
    Pattern::uniform(DEAD, ALIVE, &[(0, 0), (1, 0), (0, 1), (1, 1)])
}

/// Period-2 horizontal blinker.
pub fn blinker() -> Pattern {
    Pattern::uniform(DEAD, ALIVE, &[(0, 0), (1, 0), (2, 0)])
}
