//! Incremental propagation and the [`Game`] facade.
//!
//! A generation re-evaluates only the cells that could have changed: those
//! mutated in the previous generation (or by clicks since) and, when the
//! mutated state matters to some rule, the cells that can see them. The
//! three phases are public in [`propagate`] so callers can drive or
//! inspect them individually; most users only need [`Game`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod game;
pub mod metrics;
pub mod propagate;

pub use config::{Action, ActionMap, GameConfig};
pub use game::Game;
pub use metrics::GenerationMetrics;
