//! Memoized ring lookups.

use crate::topology::Topology;

/// Per-`(cell, shell)` memo of [`Topology::ring`] results.
///
/// Owns its topology, so the cached rings can never outlive the shape they
/// were computed for: a different shape means a different cache. Rings are
/// computed on first request and kept for the lifetime of the cache.
#[derive(Debug, Clone)]
pub struct ShellCache<T: Topology> {
    topology: T,
    /// `tables[nth - 1][index]`, grown lazily per shell.
    tables: Vec<Vec<Option<Box<[usize]>>>>,
    entries: usize,
}

impl<T: Topology> ShellCache<T> {
    /// Create an empty cache over `topology`.
    pub fn new(topology: T) -> Self {
        Self {
            topology,
            tables: Vec::new(),
            entries: 0,
        }
    }

    /// The topology rings are computed against.
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// Cells on shell `nth` around `index`.
    ///
    /// # Panics
    ///
    /// Panics if `nth` is zero or `index` is outside the topology.
    pub fn ring(&mut self, index: usize, nth: u32) -> &[usize] {
        assert!(nth >= 1, "shell distance must be at least 1");
        let cells = self.topology.cell_count();
        assert!(
            index < cells,
            "cell index {index} out of range for {} cells",
            cells
        );
        let shell = nth as usize - 1;
        if self.tables.len() <= shell {
            self.tables.resize_with(shell + 1, Vec::new);
        }
        let table = &mut self.tables[shell];
        if table.is_empty() {
            table.resize_with(cells, || None);
        }
        let slot = &mut table[index];
        if slot.is_none() {
            *slot = Some(self.topology.ring(index, nth).into_vec().into_boxed_slice());
            self.entries += 1;
        }
        slot.as_deref().unwrap_or(&[])
    }

    /// Number of memoized `(cell, shell)` pairs.
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Whether nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Drop every memoized ring.
    pub fn clear(&mut self) {
        self.tables.clear();
        self.entries = 0;
    }
}
