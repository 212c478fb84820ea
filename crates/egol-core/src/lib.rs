//! Core types for the egol cellular-automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! cell [`State`] tag, the [`ActionToken`] used by input drivers, and the
//! error taxonomy shared by every other crate in the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{BindError, ConfigError, SpaceError};
pub use id::{ActionToken, State};
