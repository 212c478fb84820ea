//! One generation of incremental propagation, split into phases.
//!
//! 1. [`collect_candidates`]: cells changed last generation, plus every
//!    cell that can see one of them if the old or new state is counted by
//!    some rule.
//! 2. [`evaluate`]: next state of each candidate, read from the unmodified
//!    grid. Produces the pending changes; writes nothing.
//! 3. [`apply`]: clear the change record and write the pending changes,
//!    which become the next generation's change record.
//!
//! Because evaluation only reads, the candidate order cannot affect the
//! result. [`step`] runs all three.

use egol_core::State;
use egol_grid::Grid;
use egol_rules::BoundRules;
use indexmap::IndexSet;

/// Sizes of the phases of one [`step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounts {
    /// Cells evaluated.
    pub candidates: usize,
    /// Cells that changed state.
    pub changes: usize,
}

/// Cells whose next state may differ from their current one.
///
/// A cell's outcome depends only on its own state and the counts over its
/// shells, so only cells that changed, and the cells whose shells contain
/// them, can change next. Neighbours are skipped when neither the old nor
/// the new state of the changed cell is counted by any rule.
pub fn collect_candidates(grid: &Grid, rules: &mut BoundRules) -> IndexSet<usize> {
    let mut candidates = IndexSet::with_capacity(grid.changed().len());
    for (&index, &previous) in grid.changed() {
        candidates.insert(index);
        if rules.is_counted(grid.query(index)) || rules.is_counted(previous) {
            rules.extend_with_neighbours(index, &mut candidates);
        }
    }
    candidates
}

/// Next state of every candidate, keeping only the ones that differ.
///
/// Reads `grid` without modifying it; every candidate sees the same
/// generation.
pub fn evaluate<I>(grid: &Grid, rules: &mut BoundRules, candidates: I) -> Vec<(usize, State)>
where
    I: IntoIterator<Item = usize>,
{
    let storage = grid.storage();
    candidates
        .into_iter()
        .filter_map(|index| {
            let next = rules.next_state(storage, index);
            (next != grid.query(index)).then_some((index, next))
        })
        .collect()
}

/// Start a new generation: forget the previous change record and write
/// `pending`. Returns how many cells changed.
pub fn apply(grid: &mut Grid, pending: &[(usize, State)]) -> usize {
    grid.take_changed();
    pending
        .iter()
        .filter(|&&(index, state)| grid.set(index, state))
        .count()
}

/// Run one full generation. An empty change record is a no-op.
pub fn step(grid: &mut Grid, rules: &mut BoundRules) -> StepCounts {
    debug_assert!(rules.check_shape(grid.shape()).is_ok());
    let candidates = collect_candidates(grid, rules);
    if candidates.is_empty() {
        return StepCounts::default();
    }
    let pending = evaluate(grid, rules, candidates.iter().copied());
    let changes = apply(grid, &pending);
    StepCounts {
        candidates: candidates.len(),
        changes,
    }
}
