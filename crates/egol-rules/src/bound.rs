//! Rules compiled against one topology.

use egol_core::{BindError, State};
use egol_grid::StateStore;
use egol_space::{ShellCache, SquareGrid, Topology};
use smallvec::SmallVec;

use crate::rule::CountingRule;

// ── BoundCountingRule ───────────────────────────────────────────

/// A [`CountingRule`] with its outcome map flattened into a table indexed
/// by count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundCountingRule {
    counted_state: State,
    shells: SmallVec<[u32; 2]>,
    table: Vec<Option<State>>,
}

impl BoundCountingRule {
    /// Compile `rule` for a topology of `cell_count` cells.
    ///
    /// Counts that no neighbourhood of that size can reach are dropped: shell
    /// `n` holds at most `8 * n` cells, and never more than the grid.
    pub(crate) fn compile(rule: &CountingRule, cell_count: usize) -> Self {
        let reachable: usize = rule
            .shells()
            .iter()
            .map(|&nth| (nth as usize).saturating_mul(8).min(cell_count))
            .fold(0, usize::saturating_add);
        let width = rule
            .count_outcomes()
            .keys()
            .map(|&c| c as usize)
            .filter(|&c| c <= reachable)
            .max()
            .map_or(0, |c| c + 1);
        let mut table = vec![None; width];
        for (&count, &outcome) in rule.count_outcomes() {
            if let Some(slot) = table.get_mut(count as usize) {
                *slot = Some(outcome);
            }
        }
        Self {
            counted_state: rule.counted_state(),
            shells: rule.shells().iter().copied().collect(),
            table,
        }
    }

    /// The state being counted.
    pub fn counted_state(&self) -> State {
        self.counted_state
    }

    /// Shell distances summed into the count.
    pub fn shells(&self) -> &[u32] {
        &self.shells
    }

    /// Neighbours of `index` in `counted_state`, summed over every shell.
    pub fn count<S, T>(&self, store: &S, cache: &mut ShellCache<T>, index: usize) -> u32
    where
        S: StateStore + ?Sized,
        T: Topology,
    {
        self.shells
            .iter()
            .map(|&nth| store.count_state_in_indices(self.counted_state, cache.ring(index, nth)))
            .sum()
    }

    /// Outcome for `index`, or `None` when the count has no entry.
    pub fn matches<S, T>(&self, store: &S, cache: &mut ShellCache<T>, index: usize) -> Option<State>
    where
        S: StateStore + ?Sized,
        T: Topology,
    {
        let count = self.count(store, cache, index) as usize;
        self.table.get(count).copied().flatten()
    }
}

// ── BoundRuleList ───────────────────────────────────────────────

/// Compiled rules for one source state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundRuleList {
    rules: Vec<BoundCountingRule>,
    default_outcome: State,
}

impl BoundRuleList {
    pub(crate) fn new(rules: Vec<BoundCountingRule>, default_outcome: State) -> Self {
        Self {
            rules,
            default_outcome,
        }
    }

    /// The compiled rules, in evaluation order.
    pub fn rules(&self) -> &[BoundCountingRule] {
        &self.rules
    }

    /// Outcome when no rule matches.
    pub fn default_outcome(&self) -> State {
        self.default_outcome
    }

    /// Next state of `index`: the first matching rule's outcome, otherwise
    /// the default. Later rules are not evaluated once one matches.
    pub fn evaluate<S, T>(&self, store: &S, cache: &mut ShellCache<T>, index: usize) -> State
    where
        S: StateStore + ?Sized,
        T: Topology,
    {
        self.rules
            .iter()
            .find_map(|rule| rule.matches(store, cache, index))
            .unwrap_or(self.default_outcome)
    }
}

// ── BoundRules ──────────────────────────────────────────────────

/// A validated [`GameRuleDict`](crate::GameRuleDict) tied to one topology.
///
/// Owns the [`ShellCache`] for that topology. Pair it only with storage
/// built for the same shape; [`check_shape`](Self::check_shape) reports a
/// mismatch.
#[derive(Clone, Debug)]
pub struct BoundRules<T: Topology = SquareGrid> {
    cache: ShellCache<T>,
    /// Indexed by source state.
    lists: Vec<BoundRuleList>,
    /// Indexed by state: does any rule count it?
    counted: Vec<bool>,
    counted_states: Vec<State>,
    shells: SmallVec<[u32; 4]>,
    max_state: State,
}

impl<T: Topology> BoundRules<T> {
    pub(crate) fn new(cache: ShellCache<T>, lists: Vec<BoundRuleList>, max_state: State) -> Self {
        let mut counted = vec![false; lists.len()];
        let mut shells: SmallVec<[u32; 4]> = SmallVec::new();
        for rule in lists.iter().flat_map(|l| l.rules.iter()) {
            counted[rule.counted_state.as_usize()] = true;
            shells.extend_from_slice(&rule.shells);
        }
        shells.sort_unstable();
        shells.dedup();
        let counted_states = counted
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(s, _)| State(s as u32))
            .collect();
        Self {
            cache,
            lists,
            counted,
            counted_states,
            shells,
            max_state,
        }
    }

    /// The topology these rules were bound to.
    pub fn shape(&self) -> &T {
        self.cache.topology()
    }

    /// `Ok` when `found` is the shape these rules were bound to.
    pub fn check_shape(&self, found: &T) -> Result<(), BindError> {
        if self.shape() == found {
            Ok(())
        } else {
            Err(BindError::ShapeMismatch {
                expected: self.shape().to_string(),
                found: found.to_string(),
            })
        }
    }

    /// Largest valid state.
    pub fn max_state(&self) -> State {
        self.max_state
    }

    /// Number of states, `max_state + 1`.
    pub fn state_count(&self) -> u32 {
        self.max_state.0 + 1
    }

    /// Whether `state` is in `0..=max_state`.
    pub fn is_valid_state(&self, state: State) -> bool {
        state <= self.max_state
    }

    /// Compiled rule list for cells in `state`.
    pub fn rule_list(&self, state: State) -> Option<&BoundRuleList> {
        self.lists.get(state.as_usize())
    }

    /// Every state counted by at least one rule, ascending.
    pub fn counted_states(&self) -> &[State] {
        &self.counted_states
    }

    /// Whether any rule counts `state`.
    pub fn is_counted(&self, state: State) -> bool {
        self.counted.get(state.as_usize()).copied().unwrap_or(false)
    }

    /// Every shell distance used by any rule, ascending.
    pub fn shells(&self) -> &[u32] {
        &self.shells
    }

    /// The ring memo.
    pub fn cache(&self) -> &ShellCache<T> {
        &self.cache
    }

    /// Push every cell that any rule can see from `index` into `out`.
    ///
    /// These are exactly the cells whose next state may depend on `index`,
    /// since shell membership is symmetric.
    pub fn extend_with_neighbours<E: Extend<usize>>(&mut self, index: usize, out: &mut E) {
        for &nth in &self.shells {
            out.extend(self.cache.ring(index, nth).iter().copied());
        }
    }

    /// Next state of `index` under the rule list of its current state.
    ///
    /// # Panics
    ///
    /// Panics if the cell holds a state above [`max_state`](Self::max_state).
    pub fn next_state<S: StateStore + ?Sized>(&mut self, store: &S, index: usize) -> State {
        let state = store.query(index);
        match self.lists.get(state.as_usize()) {
            Some(list) => list.evaluate(store, &mut self.cache, index),
            None => panic!(
                "cell {index} holds state {state} but rules stop at {}",
                self.max_state
            ),
        }
    }
}
