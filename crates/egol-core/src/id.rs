//! Strongly-typed identifiers: cell [`State`] tags and input [`ActionToken`]s.

use std::fmt;

/// The discrete condition of a single cell (dead, alive, zombie, ...).
///
/// The states of a game form the contiguous range `0..=max_state`; the
/// numeric value carries no meaning beyond identity and ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State(pub u32);

impl State {
    /// Position of this state in dense per-state tables.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for State {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Opaque identity of a boundary interaction, e.g. a mouse button.
///
/// The engine never interprets tokens itself; drivers pick a numbering and
/// the game's action map translates tokens into state assignments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionToken(pub u32);

impl ActionToken {
    /// Conventional token for the primary (left) pointer button.
    pub const PRIMARY: Self = Self(0);
    /// Conventional token for the middle pointer button.
    pub const MIDDLE: Self = Self(1);
    /// Conventional token for the secondary (right) pointer button.
    pub const SECONDARY: Self = Self(2);
}

impl fmt::Display for ActionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action#{}", self.0)
    }
}

impl From<u32> for ActionToken {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_orders_by_value() {
        assert!(State(0) < State(1));
        assert_eq!(State::from(7).as_usize(), 7);
        assert_eq!(State::default(), State(0));
    }

    #[test]
    fn display_formats() {
        assert_eq!(State(3).to_string(), "3");
        assert_eq!(ActionToken::SECONDARY.to_string(), "action#2");
    }
}
