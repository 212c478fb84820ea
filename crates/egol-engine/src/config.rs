//! Game configuration: grid shape, storage policy and the action map.

use egol_core::{ActionToken, ConfigError, State};
use egol_grid::{Backend, StorageConfig};
use egol_space::{EdgeBehavior, SquareGrid};
use indexmap::IndexMap;

// ── Action ──────────────────────────────────────────────────────

/// What a click does to the clicked cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Set the cell to a fixed state.
    Set(State),
    /// Advance the cell to the next state, wrapping after the last.
    Cycle,
}

impl Action {
    /// State a cell currently in `current` takes, for a game with
    /// `state_count` states.
    pub fn apply(self, current: State, state_count: u32) -> State {
        match self {
            Self::Set(state) => state,
            Self::Cycle => State((current.0 + 1) % state_count.max(1)),
        }
    }
}

// ── ActionMap ───────────────────────────────────────────────────

/// Maps [`ActionToken`]s to [`Action`]s.
///
/// The default map sets state 1 on [`ActionToken::PRIMARY`] and state 0 on
/// [`ActionToken::SECONDARY`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionMap {
    actions: IndexMap<ActionToken, Action>,
}

impl Default for ActionMap {
    fn default() -> Self {
        Self::new()
            .with(ActionToken::PRIMARY, Action::Set(State(1)))
            .with(ActionToken::SECONDARY, Action::Set(State(0)))
    }
}

impl ActionMap {
    /// A map with no bindings.
    pub fn new() -> Self {
        Self {
            actions: IndexMap::new(),
        }
    }

    /// Builder form of [`bind`](Self::bind).
    pub fn with(mut self, token: ActionToken, action: Action) -> Self {
        self.bind(token, action);
        self
    }

    /// Bind `token` to `action`, returning the previous binding.
    pub fn bind(&mut self, token: ActionToken, action: Action) -> Option<Action> {
        self.actions.insert(token, action)
    }

    /// Remove the binding for `token`.
    pub fn unbind(&mut self, token: ActionToken) -> Option<Action> {
        self.actions.shift_remove(&token)
    }

    /// The action bound to `token`.
    pub fn get(&self, token: ActionToken) -> Option<Action> {
        self.actions.get(&token).copied()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no token is bound.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionToken, Action)> + '_ {
        self.actions.iter().map(|(&t, &a)| (t, a))
    }

    /// Check that every `Set` target is below `state_count`.
    pub fn validate(&self, state_count: u32) -> Result<(), ConfigError> {
        for (token, action) in self.iter() {
            if let Action::Set(state) = action {
                if state.0 >= state_count {
                    return Err(ConfigError::UnknownState {
                        state,
                        context: format!("action bound to {token}"),
                    });
                }
            }
        }
        Ok(())
    }
}

// ── GameConfig ──────────────────────────────────────────────────

/// Everything needed to build a [`Game`](crate::Game) besides its rules.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Cells per row. Default: 64.
    pub width: u32,
    /// Number of rows. Default: 64.
    pub height: u32,
    /// Boundary behavior. Default: [`EdgeBehavior::Absorb`].
    pub edge: EdgeBehavior,
    /// Initial state of every cell, and the implicit state of sparse
    /// storage. Default: state 0.
    pub background: State,
    /// Storage backend.
    pub backend: Backend,
    /// Dense/sparse switching policy.
    pub storage: StorageConfig,
    /// Click bindings.
    pub actions: ActionMap,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            edge: EdgeBehavior::Absorb,
            background: State(0),
            backend: Backend::default(),
            storage: StorageConfig::default(),
            actions: ActionMap::default(),
        }
    }
}

impl GameConfig {
    /// A default configuration with the given dimensions and edges.
    pub fn new(width: u32, height: u32, edge: EdgeBehavior) -> Self {
        Self {
            width,
            height,
            edge,
            ..Self::default()
        }
    }

    /// The grid shape this configuration describes.
    pub fn shape(&self) -> Result<SquareGrid, ConfigError> {
        Ok(SquareGrid::new(self.width, self.height, self.edge)?)
    }

    /// Check structural invariants that do not depend on the rules.
    ///
    /// State-range checks (background, action targets) need the rules'
    /// state count and run when the game is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shape()?;
        self.storage.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egol_core::SpaceError;

    #[test]
    fn default_config_is_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.shape().unwrap().to_string(), "64x64 absorb");
    }

    #[test]
    fn zero_dimension_rejected() {
        let cfg = GameConfig::new(0, 4, EdgeBehavior::Wrap);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Space(SpaceError::EmptySpace))
        );
    }

    #[test]
    fn storage_policy_checked() {
        let mut cfg = GameConfig::default();
        cfg.storage.rebalance_interval = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidRebalanceInterval));
    }

    #[test]
    fn cycle_wraps_after_last_state() {
        assert_eq!(Action::Cycle.apply(State(0), 2), State(1));
        assert_eq!(Action::Cycle.apply(State(1), 2), State(0));
        assert_eq!(Action::Cycle.apply(State(2), 3), State(0));
        assert_eq!(Action::Set(State(2)).apply(State(0), 3), State(2));
    }

    #[test]
    fn default_map_sets_and_clears() {
        let map = ActionMap::default();
        assert_eq!(map.get(ActionToken::PRIMARY), Some(Action::Set(State(1))));
        assert_eq!(map.get(ActionToken::SECONDARY), Some(Action::Set(State(0))));
        assert_eq!(map.get(ActionToken::MIDDLE), None);
    }

    #[test]
    fn bind_and_unbind() {
        let mut map = ActionMap::new();
        assert!(map.is_empty());
        assert_eq!(map.bind(ActionToken::MIDDLE, Action::Cycle), None);
        assert_eq!(
            map.bind(ActionToken::MIDDLE, Action::Set(State(0))),
            Some(Action::Cycle)
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.unbind(ActionToken::MIDDLE), Some(Action::Set(State(0))));
        assert!(map.is_empty());
    }

    #[test]
    fn action_targets_validated_against_state_count() {
        let map = ActionMap::new().with(ActionToken(7), Action::Set(State(3)));
        assert!(map.validate(4).is_ok());
        match map.validate(3) {
            Err(ConfigError::UnknownState { state, context }) => {
                assert_eq!(state, State(3));
                assert_eq!(context, "action bound to action#7");
            }
            other => panic!("expected UnknownState, got {other:?}"),
        }
    }
}
