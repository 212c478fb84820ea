//! Storage backend selection and mode-switching policy.

use crate::storage::Mode;
use egol_core::ConfigError;

/// Which storage backend a grid is built on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Dense or sparse, switching automatically with occupancy.
    Adaptive {
        /// Representation used until the first rebalance.
        initial: Mode,
    },
    /// Dense histogram-counting backend. Mode switching is disabled.
    Bincount,
}

impl Default for Backend {
    fn default() -> Self {
        Self::Adaptive {
            initial: Mode::Dense,
        }
    }
}

impl Backend {
    /// Whether grids on this backend may change representation.
    pub fn mode_change_allowed(self) -> bool {
        matches!(self, Self::Adaptive { .. })
    }
}

/// Policy for dense/sparse representation switching.
#[derive(Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Fraction of cells in the background state above which the grid goes
    /// sparse. At or below it the grid goes dense. Default: 0.75.
    pub sparse_threshold: f64,
    /// Generations between rebalance checks. Default: 1.
    pub rebalance_interval: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            sparse_threshold: 0.75,
            rebalance_interval: 1,
        }
    }
}

impl StorageConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sparse_threshold.is_finite() || !(0.0..=1.0).contains(&self.sparse_threshold) {
            return Err(ConfigError::InvalidThreshold {
                value: self.sparse_threshold,
            });
        }
        if self.rebalance_interval == 0 {
            return Err(ConfigError::InvalidRebalanceInterval);
        }
        Ok(())
    }
}
