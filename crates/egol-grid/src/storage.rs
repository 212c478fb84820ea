//! The [`Storage`] tagged union over concrete stores.

use crate::config::Backend;
use crate::store::{BincountStore, DenseStore, SparseStore, StateStore};
use egol_core::State;
use std::fmt;

/// Representation of a grid's state data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every cell stored explicitly.
    #[default]
    Dense,
    /// Only non-background cells stored.
    Sparse,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense => write!(f, "dense"),
            Self::Sparse => write!(f, "sparse"),
        }
    }
}

/// The backend currently holding a grid's states.
///
/// Conversions consume the old variant and re-derive the new one from it,
/// so there is never a moment with two live backing stores.
#[derive(Clone, Debug)]
pub enum Storage {
    /// Array-backed.
    Dense(DenseStore),
    /// Map-backed.
    Sparse(SparseStore),
    /// Array-backed with histogram counting; never converted.
    Bincount(BincountStore),
}

impl Storage {
    /// An all-`background` store of `len` cells for `backend`.
    pub fn new(backend: Backend, len: usize, background: State) -> Self {
        match backend {
            Backend::Adaptive {
                initial: Mode::Dense,
            } => Self::Dense(DenseStore::new(len, background)),
            Backend::Adaptive {
                initial: Mode::Sparse,
            } => Self::Sparse(SparseStore::new(len, background)),
            Backend::Bincount => Self::Bincount(BincountStore::new(len, background)),
        }
    }

    /// Current representation.
    pub fn mode(&self) -> Mode {
        match self {
            Self::Dense(_) | Self::Bincount(_) => Mode::Dense,
            Self::Sparse(_) => Mode::Sparse,
        }
    }

    /// Convert to the dense representation. Bincount storage is returned
    /// unchanged.
    pub fn into_dense(self) -> Self {
        match self {
            Self::Sparse(s) => Self::Dense(DenseStore::from_cells(s.to_dense())),
            other => other,
        }
    }

    /// Convert to the sparse representation over `background`. Bincount
    /// storage is returned unchanged.
    pub fn into_sparse(self, background: State) -> Self {
        match self {
            Self::Dense(d) => Self::Sparse(SparseStore::from_dense(d.cells(), background)),
            other => other,
        }
    }

    /// Replace every cell, keeping the current variant.
    pub fn replace_cells(&mut self, cells: Vec<State>, background: State) {
        *self = match self {
            Self::Dense(_) => Self::Dense(DenseStore::from_cells(cells)),
            Self::Sparse(_) => Self::Sparse(SparseStore::from_dense(&cells, background)),
            Self::Bincount(_) => Self::Bincount(BincountStore::from_cells(cells)),
        };
    }

    /// Every cell, row-major.
    pub fn to_cells(&self) -> Vec<State> {
        match self {
            Self::Dense(d) => d.cells().to_vec(),
            Self::Sparse(s) => s.to_dense(),
            Self::Bincount(b) => b.cells().to_vec(),
        }
    }
}

impl StateStore for Storage {
    fn len(&self) -> usize {
        match self {
            Self::Dense(d) => d.len(),
            Self::Sparse(s) => s.len(),
            Self::Bincount(b) => b.len(),
        }
    }

    #[inline]
    fn query(&self, index: usize) -> State {
        match self {
            Self::Dense(d) => d.query(index),
            Self::Sparse(s) => s.query(index),
            Self::Bincount(b) => b.query(index),
        }
    }

    #[inline]
    fn write(&mut self, index: usize, state: State) {
        match self {
            Self::Dense(d) => d.write(index, state),
            Self::Sparse(s) => s.write(index, state),
            Self::Bincount(b) => b.write(index, state),
        }
    }

    #[inline]
    fn count_state_in_indices(&self, state: State, indices: &[usize]) -> u32 {
        match self {
            Self::Dense(d) => d.count_state_in_indices(state, indices),
            Self::Sparse(s) => s.count_state_in_indices(state, indices),
            Self::Bincount(b) => b.count_state_in_indices(state, indices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: State = State(0);

    #[test]
    fn new_honours_backend() {
        let dense = Storage::new(Backend::default(), 4, BG);
        assert!(matches!(dense, Storage::Dense(_)));
        let sparse = Storage::new(
            Backend::Adaptive {
                initial: Mode::Sparse,
            },
            4,
            BG,
        );
        assert_eq!(sparse.mode(), Mode::Sparse);
        let bincount = Storage::new(Backend::Bincount, 4, BG);
        assert_eq!(bincount.mode(), Mode::Dense);
    }

    #[test]
    fn conversion_preserves_every_cell() {
        let mut s = Storage::new(Backend::default(), 6, BG);
        s.write(1, State(2));
        s.write(4, State(1));
        let before = s.to_cells();
        let sparse = s.into_sparse(BG);
        assert_eq!(sparse.mode(), Mode::Sparse);
        assert_eq!(sparse.to_cells(), before);
        let dense = sparse.into_dense();
        assert_eq!(dense.mode(), Mode::Dense);
        assert_eq!(dense.to_cells(), before);
    }

    #[test]
    fn bincount_is_never_converted() {
        let s = Storage::new(Backend::Bincount, 3, BG).into_sparse(BG);
        assert!(matches!(s, Storage::Bincount(_)));
    }

    #[test]
    fn replace_cells_keeps_variant() {
        let mut s = Storage::new(
            Backend::Adaptive {
                initial: Mode::Sparse,
            },
            3,
            BG,
        );
        s.replace_cells(vec![State(1), BG, State(1)], BG);
        assert_eq!(s.mode(), Mode::Sparse);
        assert_eq!(s.query(2), State(1));
        assert_eq!(s.count_state_in_indices(State(1), &[0, 1, 2]), 2);
    }
}
