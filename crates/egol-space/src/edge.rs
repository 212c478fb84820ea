//! Grid edge (boundary) behavior.

use std::fmt;

/// How a grid handles neighbour lookups that fall off its edges.
///
/// # Examples
///
/// ```
/// use egol_space::{EdgeBehavior, SquareGrid, Topology};
///
/// // Absorb: a corner has 3 shell-1 neighbours, an interior cell 8.
/// let absorb = SquareGrid::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.ring(0, 1).len(), 3);
/// assert_eq!(absorb.ring(absorb.index(1, 1), 1).len(), 8);
///
/// // Wrap: every cell has 8 (torus).
/// let wrap = SquareGrid::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.ring(0, 1).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    Absorb,
}

impl EdgeBehavior {
    /// `Wrap` when `periodic` is set, else `Absorb`.
    pub fn from_periodic(periodic: bool) -> Self {
        if periodic {
            Self::Wrap
        } else {
            Self::Absorb
        }
    }

    /// Whether this edge behavior is periodic.
    pub fn is_periodic(self) -> bool {
        matches!(self, Self::Wrap)
    }

    /// Resolve a single axis value against an axis of length `len`.
    ///
    /// Returns the in-range value, or `None` when `Absorb` drops it.
    pub fn resolve_axis(self, val: i64, len: u32) -> Option<u32> {
        let n = i64::from(len);
        if (0..n).contains(&val) {
            return Some(val as u32);
        }
        match self {
            Self::Absorb => None,
            Self::Wrap => Some(val.rem_euclid(n) as u32),
        }
    }
}

impl fmt::Display for EdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wrap => write!(f, "wrap"),
            Self::Absorb => write!(f, "absorb"),
        }
    }
}
