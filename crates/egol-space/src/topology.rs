//! The [`Topology`] trait: shell-based neighbourhood geometry.

use smallvec::SmallVec;
use std::fmt;

/// Neighbour indices on one shell. Inline storage covers the common
/// shell-1 case (8 cells) without heap allocation.
pub type Ring = SmallVec<[usize; 8]>;

/// Geometry consumed by the rule engine.
///
/// A topology numbers its cells `0..cell_count()` and, for any cell and
/// shell distance, enumerates the cells on that shell. Implementations must
/// be pure: the same `(index, nth)` always yields the same ring, which is
/// what makes [`ShellCache`](crate::ShellCache) sound.
///
/// Shell membership must be symmetric (`b` on shell `k` of `a` implies `a`
/// on shell `k` of `b`). The propagation engine relies on this to find the
/// cells whose counts a state change can affect.
pub trait Topology: fmt::Display + PartialEq {
    /// Total number of cells.
    fn cell_count(&self) -> usize;

    /// Largest shell distance this topology serves.
    fn max_shell(&self) -> u32;

    /// Cells at exactly distance `nth` from `index`, without duplicates,
    /// in a deterministic backend-defined order.
    ///
    /// `index` must be `< cell_count()` and `nth` within
    /// `1..=max_shell()`; anything else is a caller bug.
    fn ring(&self, index: usize, nth: u32) -> Ring;
}
