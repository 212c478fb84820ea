//! The transition function of an egol automaton, as data.
//!
//! A [`GameRuleDict`] maps every state to a [`StateRuleList`]: an ordered
//! list of [`CountingRule`]s plus a default outcome. Rules are plain
//! configuration until [`GameRuleDict::bind`] validates them against a
//! topology and compiles them into [`BoundRules`], the only form that can
//! evaluate a cell.
//!
//! ```
//! use egol_core::State;
//! use egol_grid::{Backend, Grid, StorageConfig};
//! use egol_rules::{CountingRule, GameRuleDict, StateRuleList};
//! use egol_space::{EdgeBehavior, SquareGrid};
//!
//! const DEAD: State = State(0);
//! const ALIVE: State = State(1);
//!
//! let rules = GameRuleDict::from_lists(vec![
//!     StateRuleList::new(vec![CountingRule::new(ALIVE, [1], [(3, ALIVE)])], DEAD),
//!     StateRuleList::new(
//!         vec![CountingRule::new(ALIVE, [1], [(2, ALIVE), (3, ALIVE)])],
//!         DEAD,
//!     ),
//! ]);
//! let shape = SquareGrid::new(5, 5, EdgeBehavior::Absorb).unwrap();
//! let mut bound = rules.bind(shape).unwrap();
//!
//! let mut grid = Grid::new(shape, DEAD, Backend::default(), &StorageConfig::default()).unwrap();
//! for x in 1..4 {
//!     grid.set_xy(x, 2, ALIVE);
//! }
//! // The blinker's centre survives, its ends die, cells above and below are born.
//! assert_eq!(bound.next_state(grid.storage(), shape.index(2, 2)), ALIVE);
//! assert_eq!(bound.next_state(grid.storage(), shape.index(1, 2)), DEAD);
//! assert_eq!(bound.next_state(grid.storage(), shape.index(2, 1)), ALIVE);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bound;
pub mod rule;

pub use bound::{BoundCountingRule, BoundRuleList, BoundRules};
pub use rule::{CountingRule, GameRuleDict, StateRuleList};
