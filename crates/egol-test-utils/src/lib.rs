//! Test fixtures and a brute-force reference stepper for egol development.
//!
//! [`reference_step`] recomputes every cell from scratch with no caching,
//! no candidate tracking and no storage backends, so it can serve as an
//! oracle for the incremental engine.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeSet;

use egol_core::State;
use egol_rules::GameRuleDict;
use egol_space::SquareGrid;

/// Cells at Chebyshev distance exactly `nth` from `(x, y)`, resolved
/// through the grid's edges and deduplicated.
pub fn shell_cells(shape: &SquareGrid, x: u32, y: u32, nth: u32) -> BTreeSet<usize> {
    let n = i64::from(nth);
    let (x, y) = (i64::from(x), i64::from(y));
    let mut out = BTreeSet::new();
    for dy in -n..=n {
        for dx in -n..=n {
            if dx.abs().max(dy.abs()) != n {
                continue;
            }
            if let Some(i) = shape.resolve_index(x + dx, y + dy) {
                out.insert(i);
            }
        }
    }
    out
}

/// One full-grid generation of `rules` over row-major `cells`.
///
/// # Panics
///
/// Panics if a cell holds a state without a rule list.
pub fn reference_step(shape: &SquareGrid, rules: &GameRuleDict, cells: &[State]) -> Vec<State> {
    (0..cells.len())
        .map(|i| {
            let (x, y) = shape.coords(i);
            let list = rules
                .get(cells[i])
                .unwrap_or_else(|| panic!("no rule list for state {}", cells[i]));
            list.rules()
                .iter()
                .find_map(|rule| {
                    let count: u32 = rule
                        .shells()
                        .iter()
                        .map(|&nth| {
                            shell_cells(shape, x, y, nth)
                                .into_iter()
                                .filter(|&j| cells[j] == rule.counted_state())
                                .count() as u32
                        })
                        .sum();
                    rule.outcome(count)
                })
                .unwrap_or(list.default_outcome())
        })
        .collect()
}

/// Run [`reference_step`] `generations` times.
pub fn reference_run(
    shape: &SquareGrid,
    rules: &GameRuleDict,
    cells: &[State],
    generations: usize,
) -> Vec<State> {
    let mut cells = cells.to_vec();
    for _ in 0..generations {
        cells = reference_step(shape, rules, &cells);
    }
    cells
}
