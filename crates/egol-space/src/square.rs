//! 2D square grid with Chebyshev shell neighbourhoods.

use crate::edge::EdgeBehavior;
use crate::topology::{Ring, Topology};
use egol_core::SpaceError;
use std::fmt;

/// A rectangular grid of `width * height` cells stored row-major
/// (`index = y * width + x`).
///
/// Shell `nth` around `(x, y)` is the square ring of cells whose Chebyshev
/// distance is exactly `nth`: the rows `y - nth` and `y + nth` spanning
/// `2*nth + 1` columns, plus the columns `x - nth` and `x + nth` spanning the
/// `2*nth - 1` rows in between. Boundary handling follows [`EdgeBehavior`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SquareGrid {
    width: u32,
    height: u32,
    edge: EdgeBehavior,
}

impl SquareGrid {
    /// Maximum size of either dimension.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid shape.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0 and
    /// `Err(SpaceError::DimensionTooLarge)` if a dimension exceeds
    /// [`MAX_DIM`](Self::MAX_DIM) or the cell count overflows `usize`.
    pub fn new(width: u32, height: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(SpaceError::DimensionTooLarge {
                    name,
                    value: u64::from(value),
                    max: u64::from(Self::MAX_DIM),
                });
            }
        }
        if (width as usize).checked_mul(height as usize).is_none() {
            return Err(SpaceError::DimensionTooLarge {
                name: "cells",
                value: u64::from(width) * u64::from(height),
                max: usize::MAX as u64,
            });
        }
        Ok(Self {
            width,
            height,
            edge,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat row-major index of an in-bounds coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "coordinate ({x}, {y}) out of bounds for {self}"
        );
        y as usize * self.width as usize + x as usize
    }

    /// Coordinates `(x, y)` of a flat index.
    #[inline]
    pub fn coords(&self, index: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((index % w) as u32, (index / w) as u32)
    }

    /// Whether `(x, y)` lies inside the grid (ignoring edge behavior).
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    /// Map an arbitrary signed coordinate onto the grid: wrapped under
    /// `Wrap`, `None` when out of bounds under `Absorb`.
    pub fn resolve(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        let rx = self.edge.resolve_axis(x, self.width)?;
        let ry = self.edge.resolve_axis(y, self.height)?;
        Some((rx, ry))
    }

    /// Resolve `(x, y)` and return its flat index.
    pub fn resolve_index(&self, x: i64, y: i64) -> Option<usize> {
        self.resolve(x, y)
            .map(|(rx, ry)| ry as usize * self.width as usize + rx as usize)
    }

    fn push_resolved(&self, out: &mut Ring, x: i64, y: i64) {
        if let Some(i) = self.resolve_index(x, y) {
            if !out.contains(&i) {
                out.push(i);
            }
        }
    }
}

impl Topology for SquareGrid {
    fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn max_shell(&self) -> u32 {
        self.width.max(self.height)
    }

    fn ring(&self, index: usize, nth: u32) -> Ring {
        debug_assert!(nth >= 1, "shell distance must be at least 1");
        let (cx, cy) = self.coords(index);
        let (x, y, d) = (i64::from(cx), i64::from(cy), i64::from(nth));
        let mut out = Ring::new();
        for row in [y - d, y + d] {
            for col in (x - d)..=(x + d) {
                self.push_resolved(&mut out, col, row);
            }
        }
        for row in (y - d + 1)..(y + d) {
            for col in [x - d, x + d] {
                self.push_resolved(&mut out, col, row);
            }
        }
        out
    }
}

impl fmt::Display for SquareGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {}", self.width, self.height, self.edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(w: u32, h: u32, edge: EdgeBehavior) -> SquareGrid {
        SquareGrid::new(w, h, edge).unwrap()
    }

    fn chebyshev(g: &SquareGrid, a: usize, b: usize) -> u32 {
        let (ax, ay) = g.coords(a);
        let (bx, by) = g.coords(b);
        let axis = |p: u32, q: u32, len: u32| {
            let d = p.abs_diff(q);
            match g.edge_behavior() {
                EdgeBehavior::Wrap => d.min(len - d),
                EdgeBehavior::Absorb => d,
            }
        };
        axis(ax, bx, g.width()).max(axis(ay, by, g.height()))
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_zero_dimension_returns_error() {
        assert_eq!(
            SquareGrid::new(0, 5, EdgeBehavior::Absorb),
            Err(SpaceError::EmptySpace)
        );
        assert_eq!(
            SquareGrid::new(5, 0, EdgeBehavior::Wrap),
            Err(SpaceError::EmptySpace)
        );
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            SquareGrid::new(big, 5, EdgeBehavior::Absorb),
            Err(SpaceError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            SquareGrid::new(5, big, EdgeBehavior::Absorb),
            Err(SpaceError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn index_and_coords_are_row_major() {
        let g = grid(4, 3, EdgeBehavior::Absorb);
        assert_eq!(g.index(0, 0), 0);
        assert_eq!(g.index(3, 0), 3);
        assert_eq!(g.index(1, 2), 9);
        assert_eq!(g.coords(9), (1, 2));
        assert_eq!(g.cell_count(), 12);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_bounds_panics() {
        grid(4, 3, EdgeBehavior::Absorb).index(4, 0);
    }

    #[test]
    fn resolve_follows_edge_behavior() {
        let wrap = grid(4, 3, EdgeBehavior::Wrap);
        assert_eq!(wrap.resolve(-1, -1), Some((3, 2)));
        assert_eq!(wrap.resolve_index(4, 3), Some(0));
        let absorb = grid(4, 3, EdgeBehavior::Absorb);
        assert_eq!(absorb.resolve(-1, 0), None);
        assert!(absorb.contains(3, 2));
        assert!(!absorb.contains(3, 3));
    }

    // ── Rings ───────────────────────────────────────────────────

    #[test]
    fn corner_shell_one_absorb_has_three() {
        let g = grid(5, 5, EdgeBehavior::Absorb);
        let mut ring = g.ring(0, 1).to_vec();
        ring.sort_unstable();
        assert_eq!(ring, vec![1, 5, 6]);
    }

    #[test]
    fn corner_shell_one_wrap_has_eight() {
        let g = grid(5, 5, EdgeBehavior::Wrap);
        let ring = g.ring(0, 1);
        assert_eq!(ring.len(), 8);
        assert!(ring.contains(&24)); // (4, 4) wraps on both axes
        assert!(ring.contains(&20)); // (0, 4)
        assert!(ring.contains(&4)); // (4, 0)
        assert!(!ring.contains(&0));
    }

    #[test]
    fn edge_shell_one_absorb_has_five() {
        let g = grid(5, 5, EdgeBehavior::Absorb);
        assert_eq!(g.ring(g.index(2, 0), 1).len(), 5);
    }

    #[test]
    fn interior_shell_two_has_sixteen() {
        let g = grid(9, 9, EdgeBehavior::Absorb);
        let ring = g.ring(g.index(4, 4), 2);
        assert_eq!(ring.len(), 16);
        assert!(ring.iter().all(|&i| chebyshev(&g, g.index(4, 4), i) == 2));
    }

    #[test]
    fn wrap_ring_wider_than_grid_is_deduplicated() {
        // Shell 3 on a 6-wide torus: columns x-3 and x+3 coincide.
        let g = grid(6, 6, EdgeBehavior::Wrap);
        let ring = g.ring(g.index(2, 2), 3);
        let mut sorted = ring.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ring.len());
        assert_eq!(ring.len(), 11);
    }

    #[test]
    fn single_cell_wrap_ring_is_self_once() {
        let g = grid(1, 1, EdgeBehavior::Wrap);
        assert_eq!(g.ring(0, 1).as_slice(), &[0]);
        let absorb = grid(1, 1, EdgeBehavior::Absorb);
        assert!(absorb.ring(0, 1).is_empty());
    }

    #[test]
    fn display_names_shape_and_edge() {
        assert_eq!(grid(6, 4, EdgeBehavior::Wrap).to_string(), "6x4 wrap");
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_edge() -> impl Strategy<Value = EdgeBehavior> {
        prop_oneof![Just(EdgeBehavior::Absorb), Just(EdgeBehavior::Wrap)]
    }

    proptest! {
        #[test]
        fn wrap_ring_has_eight_nth_cells_on_large_grids(
            w in 9u32..16,
            h in 9u32..16,
            cell in 0usize..256,
            nth in 1u32..4,
        ) {
            let g = grid(w, h, EdgeBehavior::Wrap);
            let idx = cell % g.cell_count();
            prop_assert_eq!(g.ring(idx, nth).len(), 8 * nth as usize);
        }

        #[test]
        fn ring_cells_are_at_exact_distance(
            w in 1u32..10,
            h in 1u32..10,
            edge in arb_edge(),
            cell in 0usize..100,
            nth in 1u32..4,
        ) {
            let g = grid(w, h, edge);
            let idx = cell % g.cell_count();
            let ring = g.ring(idx, nth);
            let mut seen = ring.to_vec();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), ring.len(), "duplicate in ring");
            if edge == EdgeBehavior::Absorb {
                for &i in &ring {
                    prop_assert_eq!(chebyshev(&g, idx, i), nth);
                }
            }
        }

        #[test]
        fn rings_are_symmetric(
            w in 1u32..10,
            h in 1u32..10,
            edge in arb_edge(),
            cell in 0usize..100,
            nth in 1u32..4,
        ) {
            let g = grid(w, h, edge);
            let idx = cell % g.cell_count();
            for nb in g.ring(idx, nth) {
                prop_assert!(
                    g.ring(nb, nth).contains(&idx),
                    "{} on shell {} of {} but not vice versa", nb, nth, idx
                );
            }
        }
    }
}
