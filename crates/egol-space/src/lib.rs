//! Spatial topology and neighbourhood indexing for egol.
//!
//! A [`Topology`] answers one question: which cells lie on the ring at
//! exactly Chebyshev distance `nth` from a given cell. [`SquareGrid`] is the
//! 2D square lattice backend with configurable [`EdgeBehavior`], and
//! [`ShellCache`] memoizes ring lookups since the same queries repeat every
//! generation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod edge;
pub mod square;
pub mod topology;

pub use cache::ShellCache;
pub use edge::EdgeBehavior;
pub use square::SquareGrid;
pub use topology::{Ring, Topology};
