//! egol: an extendable cellular-automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all egol sub-crates. For most users, adding `egol` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use egol::prelude::*;
//!
//! const DEAD: State = State(0);
//! const ALIVE: State = State(1);
//!
//! // Conway's Game of Life: born with 3, survives with 2 or 3.
//! let rules = GameRuleDict::from_lists(vec![
//!     StateRuleList::new(vec![CountingRule::new(ALIVE, [1], [(3, ALIVE)])], DEAD),
//!     StateRuleList::new(
//!         vec![CountingRule::new(ALIVE, [1], [(2, ALIVE), (3, ALIVE)])],
//!         DEAD,
//!     ),
//! ]);
//!
//! // A glider on a 6x6 torus.
//! let mut game = Game::new(GameConfig::new(6, 6, EdgeBehavior::Wrap), rules).unwrap();
//! let glider = Pattern::uniform(DEAD, ALIVE, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
//! game.stamp(&glider, 0, 0).unwrap();
//!
//! for _ in 0..4 {
//!     game.propagate();
//! }
//! // Four generations later it has moved one cell down and right.
//! assert_eq!(game.query(3, 2), ALIVE);
//! assert_eq!(game.query(4, 4), ALIVE);
//! assert_eq!(game.grid().occupancy(ALIVE), 5);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `egol-core` | `State`, `ActionToken`, error types |
//! | [`space`] | `egol-space` | Square grid shape, edge behavior, shell rings and cache |
//! | [`grid`] | `egol-grid` | Storage backends, `Grid`, snapshots and patterns |
//! | [`rules`] | `egol-rules` | Counting rules, rule dictionaries and binding |
//! | [`engine`] | `egol-engine` | Propagation phases, `Game`, configuration, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core identifiers and error types (`egol-core`).
pub use egol_core as types;

/// Grid shape and neighbourhood shells (`egol-space`).
///
/// [`space::SquareGrid`] implements [`space::Topology`]; rings are
/// memoized by [`space::ShellCache`].
pub use egol_space as space;

/// Cell storage (`egol-grid`).
///
/// [`grid::Grid`] wraps one of the [`grid::Storage`] backends and tracks
/// occupancy and changed cells.
pub use egol_grid as grid;

/// The rule model (`egol-rules`).
///
/// Build a [`rules::GameRuleDict`], then bind it to a shape to get
/// [`rules::BoundRules`].
pub use egol_rules as rules;

/// Propagation and the game facade (`egol-engine`).
pub use egol_engine as engine;

/// Common imports for typical egol usage.
///
/// ```rust
/// use egol::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use egol_core::{ActionToken, ConfigError, State};

    // Space
    pub use egol_space::{EdgeBehavior, SquareGrid, Topology};

    // Grid
    pub use egol_grid::{Backend, Mode, Pattern, Snapshot, StorageConfig};

    // Rules
    pub use egol_rules::{BoundRules, CountingRule, GameRuleDict, StateRuleList};

    // Engine
    pub use egol_engine::{Action, ActionMap, Game, GameConfig, GenerationMetrics};
}
