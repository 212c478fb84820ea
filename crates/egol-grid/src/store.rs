//! The [`StateStore`] capability and its three backends.
//!
//! Stores are raw: they hold states and answer counts, nothing else.
//! Occupancy bookkeeping and change tracking live one level up in
//! [`Grid`](crate::Grid), so every backend stays a few lines of indexing.

use egol_core::State;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Read/write access to per-cell states.
///
/// Indices are flat cell indices in `0..len()`. Passing anything else is a
/// caller bug; implementations panic rather than clamp.
pub trait StateStore {
    /// Number of cells.
    fn len(&self) -> usize;

    /// Whether the store holds zero cells. Grids never do.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current state of `index`.
    fn query(&self, index: usize) -> State;

    /// Overwrite the state of `index`.
    fn write(&mut self, index: usize, state: State);

    /// How many of `indices` currently hold `state`.
    ///
    /// This is the innermost loop of propagation. Every backend must agree
    /// exactly with a per-index `query(i) == state` tally.
    fn count_state_in_indices(&self, state: State, indices: &[usize]) -> u32 {
        indices.iter().filter(|&&i| self.query(i) == state).count() as u32
    }
}

// ── Dense ───────────────────────────────────────────────────────

/// One explicit state per cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DenseStore {
    cells: Vec<State>,
}

impl DenseStore {
    /// A store of `len` cells, all in `fill`.
    pub fn new(len: usize, fill: State) -> Self {
        Self {
            cells: vec![fill; len],
        }
    }

    /// Wrap an existing row-major cell vector.
    pub fn from_cells(cells: Vec<State>) -> Self {
        Self { cells }
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[State] {
        &self.cells
    }

    /// Consume the store, returning its cells.
    pub fn into_cells(self) -> Vec<State> {
        self.cells
    }
}

impl StateStore for DenseStore {
    fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn query(&self, index: usize) -> State {
        self.cells[index]
    }

    #[inline]
    fn write(&mut self, index: usize, state: State) {
        self.cells[index] = state;
    }
}

// ── Sparse ──────────────────────────────────────────────────────

/// Only non-background cells are stored; absent indices read as the
/// background state.
#[derive(Clone, Debug)]
pub struct SparseStore {
    background: State,
    len: usize,
    cells: IndexMap<usize, State>,
}

impl SparseStore {
    /// An all-background store of `len` cells.
    pub fn new(len: usize, background: State) -> Self {
        Self {
            background,
            len,
            cells: IndexMap::new(),
        }
    }

    /// Build from a dense cell slice, keeping only non-background entries.
    pub fn from_dense(cells: &[State], background: State) -> Self {
        let stored = cells
            .iter()
            .enumerate()
            .filter(|(_, &s)| s != background)
            .map(|(i, &s)| (i, s))
            .collect();
        Self {
            background,
            len: cells.len(),
            cells: stored,
        }
    }

    /// Expand into one state per cell.
    pub fn to_dense(&self) -> Vec<State> {
        let mut out = vec![self.background; self.len];
        for (&i, &s) in &self.cells {
            out[i] = s;
        }
        out
    }

    /// The implied state of every unstored cell.
    pub fn background(&self) -> State {
        self.background
    }

    /// Number of explicitly stored (non-background) cells.
    pub fn stored(&self) -> usize {
        self.cells.len()
    }

    /// Stored `(index, state)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, State)> + '_ {
        self.cells.iter().map(|(&i, &s)| (i, s))
    }
}

impl StateStore for SparseStore {
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn query(&self, index: usize) -> State {
        assert!(
            index < self.len,
            "cell index {index} out of range for {} cells",
            self.len
        );
        self.cells.get(&index).copied().unwrap_or(self.background)
    }

    fn write(&mut self, index: usize, state: State) {
        assert!(
            index < self.len,
            "cell index {index} out of range for {} cells",
            self.len
        );
        if state == self.background {
            self.cells.swap_remove(&index);
        } else {
            self.cells.insert(index, state);
        }
    }

    fn count_state_in_indices(&self, state: State, indices: &[usize]) -> u32 {
        if state == self.background {
            let stored = indices
                .iter()
                .filter(|i| self.cells.contains_key(*i))
                .count();
            return (indices.len() - stored) as u32;
        }
        indices
            .iter()
            .filter(|i| self.cells.get(*i) == Some(&state))
            .count() as u32
    }
}

// ── Bincount ────────────────────────────────────────────────────

/// Histogram width that fits inline; wider games count without one.
const INLINE_BINS: usize = 16;

/// Dense storage whose neighbour counts come from a per-call state
/// histogram over the requested indices.
///
/// Grids built on this backend never switch to sparse mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BincountStore {
    cells: Vec<State>,
    /// One past the largest state ever written; histogram width.
    bins: usize,
}

impl BincountStore {
    /// A store of `len` cells, all in `fill`.
    pub fn new(len: usize, fill: State) -> Self {
        Self::from_cells(vec![fill; len])
    }

    /// Wrap an existing row-major cell vector.
    pub fn from_cells(cells: Vec<State>) -> Self {
        let bins = cells.iter().map(|s| s.as_usize() + 1).max().unwrap_or(1);
        Self { cells, bins }
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[State] {
        &self.cells
    }

    /// Histogram of the states at `indices`, indexed by state value.
    pub fn bincount(&self, indices: &[usize]) -> SmallVec<[u32; INLINE_BINS]> {
        let mut bins: SmallVec<[u32; INLINE_BINS]> = SmallVec::from_elem(0, self.bins);
        for &i in indices {
            bins[self.cells[i].as_usize()] += 1;
        }
        bins
    }
}

impl StateStore for BincountStore {
    fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn query(&self, index: usize) -> State {
        self.cells[index]
    }

    #[inline]
    fn write(&mut self, index: usize, state: State) {
        self.cells[index] = state;
        self.bins = self.bins.max(state.as_usize() + 1);
    }

    fn count_state_in_indices(&self, state: State, indices: &[usize]) -> u32 {
        if state.as_usize() >= self.bins {
            return 0;
        }
        if self.bins > INLINE_BINS {
            return indices.iter().filter(|&&i| self.cells[i] == state).count() as u32;
        }
        self.bincount(indices)[state.as_usize()]
    }
}
