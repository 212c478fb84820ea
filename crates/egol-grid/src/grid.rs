//! The [`Grid`]: storage plus occupancy and change bookkeeping.

use crate::config::{Backend, StorageConfig};
use crate::pattern::Pattern;
use crate::snapshot::Snapshot;
use crate::storage::{Mode, Storage};
use crate::store::StateStore;
use egol_core::{ConfigError, State};
use egol_space::{SquareGrid, Topology};
use indexmap::{IndexMap, IndexSet};

/// Per-cell state of a rectangular automaton.
///
/// Every mutation goes through [`set`](Grid::set), which keeps three
/// pieces of bookkeeping consistent with the store:
///
/// - **occupancy**: number of cells in each state (states with zero cells
///   have no entry);
/// - **changed**: cells mutated since the engine last took the set, mapped
///   to the state they held before their first mutation;
/// - **undrawn**: cells mutated since the renderer last asked.
#[derive(Clone, Debug)]
pub struct Grid {
    shape: SquareGrid,
    background: State,
    storage: Storage,
    mode_change_allowed: bool,
    sparse_threshold: f64,
    occupancy: IndexMap<State, usize>,
    changed: IndexMap<usize, State>,
    undrawn: IndexSet<usize>,
}

impl Grid {
    /// An all-`background` grid.
    ///
    /// The change sets start empty; callers that need a full first sweep
    /// use [`mark_all_changed`](Grid::mark_all_changed).
    pub fn new(
        shape: SquareGrid,
        background: State,
        backend: Backend,
        config: &StorageConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let n = shape.cell_count();
        let mut occupancy = IndexMap::new();
        occupancy.insert(background, n);
        Ok(Self {
            shape,
            background,
            storage: Storage::new(backend, n, background),
            mode_change_allowed: backend.mode_change_allowed(),
            sparse_threshold: config.sparse_threshold,
            occupancy,
            changed: IndexMap::new(),
            undrawn: IndexSet::new(),
        })
    }

    /// Grid shape.
    pub fn shape(&self) -> &SquareGrid {
        &self.shape
    }

    /// Background state (the implied state of unstored sparse cells).
    pub fn background(&self) -> State {
        self.background
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Always `false`: shapes cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Current representation.
    pub fn mode(&self) -> Mode {
        self.storage.mode()
    }

    /// Whether this grid may switch representation.
    pub fn mode_change_allowed(&self) -> bool {
        self.mode_change_allowed
    }

    /// The underlying storage, for read-only evaluation.
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// State of cell `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn query(&self, index: usize) -> State {
        self.storage.query(index)
    }

    /// State of cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn query_xy(&self, x: u32, y: u32) -> State {
        self.query(self.shape.index(x, y))
    }

    /// Set cell `index` to `state`, returning whether anything changed.
    ///
    /// Setting a cell to its current state is a complete no-op: no
    /// occupancy update and no change record.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, state: State) -> bool {
        let old = self.query(index);
        if old == state {
            return false;
        }
        if let Some(count) = self.occupancy.get_mut(&old) {
            *count -= 1;
            if *count == 0 {
                self.occupancy.swap_remove(&old);
            }
        }
        *self.occupancy.entry(state).or_insert(0) += 1;
        self.storage.write(index, state);
        self.changed.entry(index).or_insert(old);
        self.undrawn.insert(index);
        true
    }

    /// Set cell `(x, y)` to `state`.
    pub fn set_xy(&mut self, x: u32, y: u32, state: State) -> bool {
        self.set(self.shape.index(x, y), state)
    }

    /// How many of `indices` hold `state`.
    #[inline]
    pub fn count_state_in_indices(&self, state: State, indices: &[usize]) -> u32 {
        self.storage.count_state_in_indices(state, indices)
    }

    /// Number of cells in `state`.
    pub fn occupancy(&self, state: State) -> usize {
        self.occupancy.get(&state).copied().unwrap_or(0)
    }

    /// Occupancy of every state with at least one cell.
    pub fn occupancy_table(&self) -> &IndexMap<State, usize> {
        &self.occupancy
    }

    /// Rebuild the occupancy table from the store.
    pub fn recount_states(&mut self) {
        let mut occupancy = IndexMap::new();
        for i in 0..self.len() {
            *occupancy.entry(self.storage.query(i)).or_insert(0) += 1;
        }
        self.occupancy = occupancy;
    }

    // ── Change tracking ─────────────────────────────────────────

    /// Cells changed since the last [`take_changed`](Grid::take_changed),
    /// with the state each held before its first change.
    pub fn changed(&self) -> &IndexMap<usize, State> {
        &self.changed
    }

    /// Hand over and reset the changed-since-last-generation record.
    pub fn take_changed(&mut self) -> IndexMap<usize, State> {
        std::mem::take(&mut self.changed)
    }

    /// Flag every cell as changed and undrawn, forcing a full sweep on the
    /// next generation and a full redraw.
    pub fn mark_all_changed(&mut self) {
        for i in 0..self.len() {
            let s = self.storage.query(i);
            self.changed.entry(i).or_insert(s);
            self.undrawn.insert(i);
        }
    }

    /// Return and clear the cells mutated since the last call.
    pub fn take_undrawn(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.undrawn).into_iter().collect()
    }

    // ── Representation switching ────────────────────────────────

    /// The representation the occupancy policy currently calls for.
    pub fn preferred_mode(&self) -> Mode {
        let background = self.occupancy(self.background) as f64;
        if background > self.sparse_threshold * self.len() as f64 {
            Mode::Sparse
        } else {
            Mode::Dense
        }
    }

    /// Switch representation if the occupancy policy calls for it.
    ///
    /// Returns whether the representation changed. Never switches when
    /// mode changes are disabled for this grid.
    pub fn rebalance(&mut self) -> bool {
        match self.preferred_mode() {
            Mode::Sparse => self.make_sparse(),
            Mode::Dense => self.make_dense(),
        }
    }

    /// Switch to the dense representation. Returns whether it switched.
    pub fn make_dense(&mut self) -> bool {
        self.convert(Mode::Dense)
    }

    /// Switch to the sparse representation. Returns whether it switched.
    pub fn make_sparse(&mut self) -> bool {
        self.convert(Mode::Sparse)
    }

    fn convert(&mut self, target: Mode) -> bool {
        if !self.mode_change_allowed || self.mode() == target {
            return false;
        }
        let background = self.background;
        let old = std::mem::replace(&mut self.storage, Storage::Dense(Default::default()));
        self.storage = match target {
            Mode::Dense => old.into_dense(),
            Mode::Sparse => old.into_sparse(background),
        };
        log::debug!(
            "grid {} switched to {} storage ({} of {} cells in background)",
            self.shape,
            target,
            self.occupancy(background),
            self.len()
        );
        true
    }

    // ── Bulk load / save ────────────────────────────────────────

    /// Every cell, row-major.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_parts(
            self.shape.width(),
            self.shape.height(),
            self.storage.to_cells(),
        )
    }

    /// Replace every cell with the snapshot's contents.
    ///
    /// Every cell is flagged changed and undrawn, occupancy is recounted,
    /// and the representation is rebalanced.
    pub fn load(&mut self, snapshot: &Snapshot) -> Result<(), ConfigError> {
        let expected = (self.shape.width(), self.shape.height());
        let found = (snapshot.width(), snapshot.height());
        if expected != found {
            return Err(ConfigError::SnapshotShape { expected, found });
        }
        self.storage
            .replace_cells(snapshot.cells().to_vec(), self.background);
        self.recount_states();
        self.changed.clear();
        self.mark_all_changed();
        self.rebalance();
        log::debug!("loaded {}x{} snapshot into {}", found.0, found.1, self.shape);
        Ok(())
    }

    /// Write a pattern with its origin at `(x, y)`.
    ///
    /// Placements are resolved through the grid's edge behavior: wrapped
    /// on periodic grids, dropped when they fall off an absorbing one.
    /// Returns the number of cells that changed.
    pub fn stamp(&mut self, pattern: &Pattern, x: i64, y: i64) -> usize {
        let mut changed = 0;
        for &(px, py, state) in pattern.cells() {
            if let Some(i) = self
                .shape
                .resolve_index(x + i64::from(px), y + i64::from(py))
            {
                if self.set(i, state) {
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Inclusive `(min_x, min_y, max_x, max_y)` of the non-background
    /// cells, or `None` if every cell is background.
    pub fn bounding_box(&self) -> Option<(u32, u32, u32, u32)> {
        let mut bbox: Option<(u32, u32, u32, u32)> = None;
        let mut extend = |i: usize| {
            let (x, y) = self.shape.coords(i);
            bbox = Some(match bbox {
                None => (x, y, x, y),
                Some((a, b, c, d)) => (a.min(x), b.min(y), c.max(x), d.max(y)),
            });
        };
        match &self.storage {
            Storage::Sparse(s) => s.iter().for_each(|(i, _)| extend(i)),
            other => (0..other.len())
                .filter(|&i| other.query(i) != self.background)
                .for_each(extend),
        }
        bbox
    }

    /// The minimal rectangle holding every non-background cell.
    pub fn crop(&self) -> Option<Snapshot> {
        let (x0, y0, x1, y1) = self.bounding_box()?;
        let (w, h) = (x1 - x0 + 1, y1 - y0 + 1);
        let mut cells = Vec::with_capacity(w as usize * h as usize);
        for y in y0..=y1 {
            for x in x0..=x1 {
                cells.push(self.query_xy(x, y));
            }
        }
        Some(Snapshot::from_parts(w, h, cells))
    }
}
