//! Free-standing cell patterns that can be stamped onto a grid.

use crate::snapshot::Snapshot;
use egol_core::State;

/// A set of `(x, y, state)` placements relative to an origin, with the
/// background state used to fill its minimal rectangle.
///
/// Patterns are how seed configurations (gliders, blocks, ...) are carried
/// around independently of any grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    background: State,
    cells: Vec<(u32, u32, State)>,
}

impl Pattern {
    /// A pattern from explicit placements. Later placements of the same
    /// coordinate win.
    pub fn new(background: State, cells: Vec<(u32, u32, State)>) -> Self {
        Self { background, cells }
    }

    /// Every `(x, y)` in `coords` set to `state`.
    pub fn uniform(background: State, state: State, coords: &[(u32, u32)]) -> Self {
        Self::new(
            background,
            coords.iter().map(|&(x, y)| (x, y, state)).collect(),
        )
    }

    /// Non-background cells of a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot, background: State) -> Self {
        let mut cells = Vec::new();
        for (y, row) in snapshot.rows().enumerate() {
            for (x, &s) in row.iter().enumerate() {
                if s != background {
                    cells.push((x as u32, y as u32, s));
                }
            }
        }
        Self { background, cells }
    }

    /// Background state of the pattern.
    pub fn background(&self) -> State {
        self.background
    }

    /// Placements in insertion order.
    pub fn cells(&self) -> &[(u32, u32, State)] {
        &self.cells
    }

    /// Number of placements.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the pattern places nothing.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Inclusive `(min_x, min_y, max_x, max_y)` over all placements.
    pub fn bounding_box(&self) -> Option<(u32, u32, u32, u32)> {
        let (&(x0, y0, _), rest) = self.cells.split_first()?;
        Some(rest.iter().fold((x0, y0, x0, y0), |(a, b, c, d), &(x, y, _)| {
            (a.min(x), b.min(y), c.max(x), d.max(y))
        }))
    }

    /// The same pattern shifted so its bounding box starts at the origin.
    pub fn normalized(&self) -> Self {
        let Some((x0, y0, _, _)) = self.bounding_box() else {
            return self.clone();
        };
        Self {
            background: self.background,
            cells: self
                .cells
                .iter()
                .map(|&(x, y, s)| (x - x0, y - y0, s))
                .collect(),
        }
    }

    /// Rotate 90 degrees clockwise, re-anchored at the origin.
    pub fn rotate(&self) -> Self {
        let norm = self.normalized();
        let Some((_, _, _, max_y)) = norm.bounding_box() else {
            return norm;
        };
        Self {
            background: self.background,
            cells: norm
                .cells
                .iter()
                .map(|&(x, y, s)| (max_y - y, x, s))
                .collect(),
        }
    }

    /// The minimal rectangle holding the pattern, filled with its
    /// background. `None` for an empty pattern.
    pub fn to_snapshot(&self) -> Option<Snapshot> {
        let norm = self.normalized();
        let (_, _, max_x, max_y) = norm.bounding_box()?;
        let (w, h) = (max_x + 1, max_y + 1);
        let mut cells = vec![self.background; w as usize * h as usize];
        for &(x, y, s) in &norm.cells {
            cells[y as usize * w as usize + x as usize] = s;
        }
        Some(Snapshot::from_parts(w, h, cells))
    }
}
