//! Cell-state storage for egol grids.
//!
//! [`Grid`] holds one [`State`](egol_core::State) per cell on top of a
//! [`Storage`] backend, maintains per-state occupancy counts, and records
//! which cells changed since the last generation and since the last draw.
//!
//! # Backends
//!
//! - [`DenseStore`]: one slot per cell.
//! - [`SparseStore`]: only non-background cells, everything else implied.
//! - [`BincountStore`]: dense slots with histogram-based neighbour counts;
//!   pins the grid to dense mode.
//!
//! Adaptive grids flip between dense and sparse as background occupancy
//! crosses [`StorageConfig::sparse_threshold`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod grid;
pub mod pattern;
pub mod snapshot;
pub mod storage;
pub mod store;

pub use config::{Backend, StorageConfig};
pub use grid::Grid;
pub use pattern::Pattern;
pub use snapshot::Snapshot;
pub use storage::{Mode, Storage};
pub use store::{BincountStore, DenseStore, SparseStore, StateStore};
