//! Error types for the egol engine.
//!
//! Every error here is raised before the simulation starts: at grid
//! construction, rule validation, binding, or bulk load. The steady-state
//! `propagate()` loop has no error path. Out-of-range cell indices are
//! caller bugs and panic instead of appearing in this taxonomy.

use crate::id::State;
use std::error::Error;
use std::fmt;

/// Errors arising from grid shape construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension (or the resulting cell count) exceeds what cell
    /// indices can address.
    DimensionTooLarge {
        /// Which dimension overflowed (`"width"`, `"height"`, `"cells"`).
        name: &'static str,
        /// The offending value.
        value: u64,
        /// The largest accepted value.
        max: u64,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for SpaceError {}

/// A bound rule set was paired with a grid it was not bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindError {
    /// The rules were bound to a grid of a different shape or topology.
    ShapeMismatch {
        /// Shape the rules were bound to.
        expected: String,
        /// Shape of the grid they were paired with.
        found: String,
    },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, found } => {
                write!(f, "rules bound to {expected} but grid is {found}")
            }
        }
    }
}

impl Error for BindError {}

/// Errors detected while validating a game before it runs.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid shape is invalid.
    Space(SpaceError),
    /// Rule binding failed.
    Bind(BindError),
    /// The rule dictionary defines no states at all.
    EmptyRules,
    /// The rule dictionary is not total over `0..=max_state`.
    MissingState {
        /// The first state without a rule list.
        state: State,
        /// Largest state the dictionary defines.
        max_state: State,
    },
    /// A state outside `0..=max_state` was referenced.
    UnknownState {
        /// The offending state.
        state: State,
        /// Where it was referenced.
        context: String,
    },
    /// A counting rule uses a shell distance the topology cannot serve.
    UnsupportedShell {
        /// The offending shell distance.
        shell: u32,
        /// Largest shell distance the topology supports.
        max: u32,
    },
    /// A counting rule lists no neighbourhood shells.
    EmptyNeighbourhood {
        /// Source state of the rule list holding the rule.
        state: State,
        /// Position of the rule within its list.
        rule: usize,
    },
    /// The sparse-mode occupancy threshold is outside `[0, 1]` or not finite.
    InvalidThreshold {
        /// The invalid value.
        value: f64,
    },
    /// The rebalance interval is zero.
    InvalidRebalanceInterval,
    /// A snapshot's dimensions do not match the grid.
    SnapshotShape {
        /// `(width, height)` of the grid.
        expected: (u32, u32),
        /// `(width, height)` of the snapshot.
        found: (u32, u32),
    },
    /// A snapshot's cell data does not cover its declared rectangle.
    SnapshotLength {
        /// Number of cells the dimensions imply.
        expected: usize,
        /// Number of cells supplied.
        found: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::Bind(e) => write!(f, "binding: {e}"),
            Self::EmptyRules => write!(f, "rule dictionary defines no states"),
            Self::MissingState { state, max_state } => {
                write!(
                    f,
                    "rule dictionary has no entry for state {state} (max state {max_state})"
                )
            }
            Self::UnknownState { state, context } => {
                write!(f, "unknown state {state} in {context}")
            }
            Self::UnsupportedShell { shell, max } => {
                write!(f, "shell distance {shell} outside supported range [1, {max}]")
            }
            Self::EmptyNeighbourhood { state, rule } => {
                write!(f, "rule {rule} of state {state} counts no shells")
            }
            Self::InvalidThreshold { value } => {
                write!(f, "sparse_threshold must be finite and within [0, 1], got {value}")
            }
            Self::InvalidRebalanceInterval => {
                write!(f, "rebalance_interval must be at least 1")
            }
            Self::SnapshotShape { expected, found } => {
                write!(
                    f,
                    "snapshot is {}x{} but grid is {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
            Self::SnapshotLength { expected, found } => {
                write!(f, "snapshot holds {found} cells, expected {expected}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Bind(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<BindError> for ConfigError {
    fn from(e: BindError) -> Self {
        Self::Bind(e)
    }
}
