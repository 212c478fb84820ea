//! Complete row-major snapshots for bulk load and save.

use egol_core::{ConfigError, State};

/// Every cell state of a rectangle, row-major (`cells[y * width + x]`).
///
/// This is the only contract with persistence collaborators: loading a
/// snapshot taken from a grid reproduces that grid's query results exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Snapshot {
    width: u32,
    height: u32,
    cells: Vec<State>,
}

impl Snapshot {
    /// Build a snapshot, checking that `cells` covers the rectangle.
    pub fn new(width: u32, height: u32, cells: Vec<State>) -> Result<Self, ConfigError> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(ConfigError::SnapshotLength {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Storage always covers its shape, so grids skip the length check.
    pub(crate) fn from_parts(width: u32, height: u32, cells: Vec<State>) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a snapshot from nested rows; ragged input is rejected.
    pub fn from_rows<R: AsRef<[State]>>(rows: &[R]) -> Result<Self, ConfigError> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        let cells: Vec<State> = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        if rows.iter().any(|r| r.as_ref().len() != width as usize) {
            return Err(ConfigError::SnapshotLength {
                expected: width as usize * height as usize,
                found: cells.len(),
            });
        }
        Self::new(width, height, cells)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[State] {
        &self.cells
    }

    /// Consume the snapshot, returning its cells.
    pub fn into_cells(self) -> Vec<State> {
        self.cells
    }

    /// State at `(x, y)`, or `None` outside the rectangle.
    pub fn get(&self, x: u32, y: u32) -> Option<State> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }
}
