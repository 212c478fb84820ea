//! Unbound rule configuration: [`CountingRule`], [`StateRuleList`] and
//! [`GameRuleDict`].
//!
//! Nothing in this module can evaluate a cell. Call
//! [`GameRuleDict::bind`] to validate the dictionary and obtain
//! [`BoundRules`](crate::BoundRules).

use std::collections::BTreeMap;
use std::fmt;

use egol_core::{ConfigError, State};
use egol_space::{ShellCache, Topology};
use smallvec::SmallVec;

use crate::bound::{BoundCountingRule, BoundRuleList, BoundRules};

// ── CountingRule ────────────────────────────────────────────────

/// Count one state over a set of shells and map the total to an outcome.
///
/// The count is the sum over every listed shell of the neighbours holding
/// `counted_state`. A count with no entry in the outcome map is "no match",
/// which hands evaluation to the next rule of the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountingRule {
    counted_state: State,
    shells: SmallVec<[u32; 2]>,
    count_outcomes: BTreeMap<u32, State>,
}

impl CountingRule {
    /// A rule counting `counted_state` over `shells`.
    ///
    /// Later duplicates in `count_outcomes` overwrite earlier ones.
    pub fn new(
        counted_state: State,
        shells: impl IntoIterator<Item = u32>,
        count_outcomes: impl IntoIterator<Item = (u32, State)>,
    ) -> Self {
        Self {
            counted_state,
            shells: shells.into_iter().collect(),
            count_outcomes: count_outcomes.into_iter().collect(),
        }
    }

    /// The state being counted.
    pub fn counted_state(&self) -> State {
        self.counted_state
    }

    /// Shell distances summed into the count, in declaration order.
    pub fn shells(&self) -> &[u32] {
        &self.shells
    }

    /// Count to outcome map.
    pub fn count_outcomes(&self) -> &BTreeMap<u32, State> {
        &self.count_outcomes
    }

    /// Outcome for an already computed count.
    pub fn outcome(&self, count: u32) -> Option<State> {
        self.count_outcomes.get(&count).copied()
    }
}

impl fmt::Display for CountingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountingRule({}, [", self.counted_state)?;
        for (i, shell) in self.shells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{shell}")?;
        }
        write!(f, "], {{")?;
        for (i, (count, outcome)) in self.count_outcomes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{count}: {outcome}")?;
        }
        write!(f, "}})")
    }
}

// ── StateRuleList ───────────────────────────────────────────────

/// The ordered rules for cells currently in one state.
///
/// Rules are tried in order and the first match wins; when none match the
/// cell takes `default_outcome`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateRuleList {
    rules: Vec<CountingRule>,
    default_outcome: State,
}

impl StateRuleList {
    /// A list trying `rules` in order, falling back to `default_outcome`.
    pub fn new(rules: Vec<CountingRule>, default_outcome: State) -> Self {
        Self {
            rules,
            default_outcome,
        }
    }

    /// A list with no rules: every cell in this state becomes
    /// `default_outcome`.
    pub fn constant(default_outcome: State) -> Self {
        Self::new(Vec::new(), default_outcome)
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[CountingRule] {
        &self.rules
    }

    /// Outcome when no rule matches.
    pub fn default_outcome(&self) -> State {
        self.default_outcome
    }
}

// ── GameRuleDict ────────────────────────────────────────────────

/// The complete transition function: one [`StateRuleList`] per state.
///
/// A valid dictionary is total over `0..=max_state`. Totality and every
/// other structural check are deferred to [`bind`](Self::bind), so the
/// dictionary can be assembled in any order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameRuleDict {
    lists: BTreeMap<State, StateRuleList>,
}

impl GameRuleDict {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// A dictionary whose `i`th list governs `State(i)`.
    pub fn from_lists(lists: Vec<StateRuleList>) -> Self {
        lists
            .into_iter()
            .enumerate()
            .map(|(i, list)| (State(i as u32), list))
            .collect()
    }

    /// Set the rule list for `state`, returning the one it replaces.
    pub fn insert(&mut self, state: State, list: StateRuleList) -> Option<StateRuleList> {
        self.lists.insert(state, list)
    }

    /// Rule list for `state`, if defined.
    pub fn get(&self, state: State) -> Option<&StateRuleList> {
        self.lists.get(&state)
    }

    /// Largest state with a rule list.
    pub fn max_state(&self) -> Option<State> {
        self.lists.keys().next_back().copied()
    }

    /// Number of states with a rule list.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether no state has a rule list.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// `(state, list)` pairs in state order.
    pub fn iter(&self) -> impl Iterator<Item = (State, &StateRuleList)> + '_ {
        self.lists.iter().map(|(&s, l)| (s, l))
    }

    /// Check the dictionary against a topology supporting shells up to
    /// `max_shell`.
    ///
    /// Returns the dictionary's `max_state` on success.
    pub fn validate(&self, max_shell: u32) -> Result<State, ConfigError> {
        let max_state = self.max_state().ok_or(ConfigError::EmptyRules)?;
        if let Some(missing) =
            (0..=max_state.0).map(State).find(|s| !self.lists.contains_key(s))
        {
            return Err(ConfigError::MissingState {
                state: missing,
                max_state,
            });
        }
        let check_state = |state: State, context: &dyn Fn() -> String| {
            if state > max_state {
                Err(ConfigError::UnknownState {
                    state,
                    context: context(),
                })
            } else {
                Ok(())
            }
        };
        for (&source, list) in &self.lists {
            check_state(list.default_outcome, &|| {
                format!("default outcome of state {source}")
            })?;
            for (i, rule) in list.rules.iter().enumerate() {
                if rule.shells.is_empty() {
                    return Err(ConfigError::EmptyNeighbourhood {
                        state: source,
                        rule: i,
                    });
                }
                if let Some(&shell) = rule.shells.iter().find(|&&s| s == 0 || s > max_shell) {
                    return Err(ConfigError::UnsupportedShell {
                        shell,
                        max: max_shell,
                    });
                }
                check_state(rule.counted_state, &|| {
                    format!("counted state of rule {i} for state {source}")
                })?;
                for (&count, &outcome) in &rule.count_outcomes {
                    check_state(outcome, &|| {
                        format!("outcome for count {count} of rule {i} for state {source}")
                    })?;
                }
            }
        }
        Ok(max_state)
    }

    /// Validate against `topology` and compile into [`BoundRules`].
    ///
    /// Every call produces a fresh, empty [`ShellCache`]; rings memoized
    /// for another shape are never reused.
    pub fn bind<T: Topology>(&self, topology: T) -> Result<BoundRules<T>, ConfigError> {
        let max_state = self.validate(topology.max_shell())?;
        let cell_count = topology.cell_count();
        let lists: Vec<BoundRuleList> = self
            .lists
            .values()
            .map(|list| {
                let rules = list
                    .rules
                    .iter()
                    .map(|rule| BoundCountingRule::compile(rule, cell_count))
                    .collect();
                BoundRuleList::new(rules, list.default_outcome)
            })
            .collect();
        let bound = BoundRules::new(ShellCache::new(topology), lists, max_state);
        log::debug!(
            "bound {} states to {} (shells {:?}, counted {:?})",
            self.lists.len(),
            bound.shape(),
            bound.shells(),
            bound.counted_states()
        );
        Ok(bound)
    }
}

impl FromIterator<(State, StateRuleList)> for GameRuleDict {
    fn from_iter<I: IntoIterator<Item = (State, StateRuleList)>>(iter: I) -> Self {
        Self {
            lists: iter.into_iter().collect(),
        }
    }
}
