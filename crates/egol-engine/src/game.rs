//! The [`Game`] facade: grid, bound rules, clicks and generation count.

use std::time::Instant;

use egol_core::{ActionToken, ConfigError, State};
use egol_grid::{Grid, Pattern, Snapshot};
use egol_rules::{BoundRules, GameRuleDict};
use egol_space::{SquareGrid, Topology};
use indexmap::IndexMap;

use crate::config::GameConfig;
use crate::metrics::GenerationMetrics;
use crate::propagate;

/// A running automaton.
///
/// Owns its grid exclusively. Clicks either apply immediately
/// ([`click_action`](Self::click_action)) or are queued and applied at the
/// start of the next [`propagate`](Self::propagate), so they always land
/// between generations.
///
/// # Examples
///
/// ```
/// use egol_core::State;
/// use egol_engine::{Game, GameConfig};
/// use egol_rules::{CountingRule, GameRuleDict, StateRuleList};
/// use egol_space::EdgeBehavior;
///
/// let (dead, alive) = (State(0), State(1));
/// let rules = GameRuleDict::from_lists(vec![
///     StateRuleList::new(vec![CountingRule::new(alive, [1], [(3, alive)])], dead),
///     StateRuleList::new(
///         vec![CountingRule::new(alive, [1], [(2, alive), (3, alive)])],
///         dead,
///     ),
/// ]);
/// let mut game = Game::new(GameConfig::new(5, 5, EdgeBehavior::Absorb), rules).unwrap();
/// for x in 1..4 {
///     game.set(x, 2, alive);
/// }
/// game.propagate();
/// assert_eq!(game.query(2, 1), alive);
/// assert_eq!(game.query(1, 2), dead);
/// ```
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    rules: BoundRules,
    generation: u64,
    /// Queued clicks keyed by cell; the first click on a cell wins.
    clicks: IndexMap<usize, ActionToken>,
    last_metrics: GenerationMetrics,
}

impl Game {
    /// Validate `config`, bind `rules` to its shape and build an
    /// all-background game.
    pub fn new(config: GameConfig, rules: GameRuleDict) -> Result<Self, ConfigError> {
        config.validate()?;
        let shape = config.shape()?;
        let bound = rules.bind(shape)?;
        Self::build(config, shape, bound)
    }

    /// Build a game from rules already bound to a shape.
    ///
    /// Fails with [`ConfigError::Bind`] when the rules were bound to a
    /// different shape than `config` describes.
    pub fn with_bound(config: GameConfig, rules: BoundRules) -> Result<Self, ConfigError> {
        config.validate()?;
        let shape = config.shape()?;
        rules.check_shape(&shape)?;
        Self::build(config, shape, rules)
    }

    fn build(
        config: GameConfig,
        shape: SquareGrid,
        rules: BoundRules,
    ) -> Result<Self, ConfigError> {
        if !rules.is_valid_state(config.background) {
            return Err(ConfigError::UnknownState {
                state: config.background,
                context: "background".into(),
            });
        }
        config.actions.validate(rules.state_count())?;
        let mut grid = Grid::new(shape, config.background, config.backend, &config.storage)?;
        grid.mark_all_changed();
        log::info!(
            "created {} game with {} states on {:?} backend ({} storage)",
            shape,
            rules.state_count(),
            config.backend,
            grid.mode()
        );
        Ok(Self {
            config,
            grid,
            rules,
            generation: 0,
            clicks: IndexMap::new(),
            last_metrics: GenerationMetrics::default(),
        })
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Apply queued clicks, then advance one generation.
    pub fn propagate(&mut self) -> GenerationMetrics {
        let start = Instant::now();
        let clicks_applied = self.flush_clicks();
        let counts = propagate::step(&mut self.grid, &mut self.rules);
        self.generation += 1;
        let interval = u64::from(self.config.storage.rebalance_interval);
        let mode_switched = self.generation % interval == 0 && self.grid.rebalance();
        let metrics = GenerationMetrics {
            generation: self.generation,
            clicks_applied,
            candidates: counts.candidates,
            changes: counts.changes,
            elapsed_us: start.elapsed().as_micros() as u64,
            mode: self.grid.mode(),
            mode_switched,
        };
        log::trace!(
            "generation {}: {} candidates, {} changes, {} storage",
            metrics.generation,
            metrics.candidates,
            metrics.changes,
            metrics.mode
        );
        self.last_metrics = metrics.clone();
        metrics
    }

    /// Metrics of the most recent [`propagate`](Self::propagate).
    pub fn last_metrics(&self) -> &GenerationMetrics {
        &self.last_metrics
    }

    /// Generations run so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ── Clicks ──────────────────────────────────────────────────

    /// Apply the action bound to `token` to cell `(x, y)` immediately.
    ///
    /// Unbound tokens and coordinates outside the grid are ignored.
    /// Returns whether the cell changed.
    pub fn click_action(&mut self, token: ActionToken, x: i64, y: i64) -> bool {
        match self.click_target(token, x, y) {
            Some(index) => self.apply_click(token, index),
            None => false,
        }
    }

    /// Queue a click for the start of the next generation.
    ///
    /// Returns whether it was queued: unbound tokens, coordinates outside
    /// the grid, and cells already holding a queued click are ignored.
    pub fn queue_click(&mut self, token: ActionToken, x: i64, y: i64) -> bool {
        let Some(index) = self.click_target(token, x, y) else {
            return false;
        };
        if self.clicks.contains_key(&index) {
            return false;
        }
        self.clicks.insert(index, token);
        true
    }

    /// Number of clicks waiting for the next generation.
    pub fn pending_clicks(&self) -> usize {
        self.clicks.len()
    }

    /// Apply every queued click now, in queue order. Returns how many
    /// cells changed.
    pub fn flush_clicks(&mut self) -> usize {
        let clicks = std::mem::take(&mut self.clicks);
        clicks
            .into_iter()
            .filter(|&(index, token)| self.apply_click(token, index))
            .count()
    }

    fn click_target(&self, token: ActionToken, x: i64, y: i64) -> Option<usize> {
        self.config.actions.get(token)?;
        let shape = self.grid.shape();
        shape
            .contains(x, y)
            .then(|| shape.index(x as u32, y as u32))
    }

    fn apply_click(&mut self, token: ActionToken, index: usize) -> bool {
        let Some(action) = self.config.actions.get(token) else {
            return false;
        };
        let next = action.apply(self.grid.query(index), self.rules.state_count());
        self.grid.set(index, next)
    }

    // ── Cell access ─────────────────────────────────────────────

    /// State of cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn query(&self, x: u32, y: u32) -> State {
        self.grid.query_xy(x, y)
    }

    /// State of cell `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the grid.
    pub fn query_index(&self, index: usize) -> State {
        self.grid.query(index)
    }

    /// Set cell `(x, y)`, returning whether it changed.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid or `state` is above the
    /// rules' maximum state.
    pub fn set(&mut self, x: u32, y: u32, state: State) -> bool {
        self.set_index(self.grid.shape().index(x, y), state)
    }

    /// Set cell `index`, returning whether it changed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the grid or `state` is above the
    /// rules' maximum state.
    pub fn set_index(&mut self, index: usize, state: State) -> bool {
        assert!(
            self.rules.is_valid_state(state),
            "state {state} out of range for rules with max state {}",
            self.rules.max_state()
        );
        self.grid.set(index, state)
    }

    /// Return and clear the cells mutated since the previous call.
    pub fn changed_since_last_draw(&mut self) -> Vec<usize> {
        self.grid.take_undrawn()
    }

    // ── Bulk operations ─────────────────────────────────────────

    /// Every cell, row-major.
    pub fn snapshot(&self) -> Snapshot {
        self.grid.snapshot()
    }

    /// Replace the whole grid. The next generation re-evaluates every cell.
    ///
    /// Queued clicks are kept and apply on top of the loaded cells.
    pub fn load(&mut self, snapshot: &Snapshot) -> Result<(), ConfigError> {
        if let Some((i, &state)) = snapshot
            .cells()
            .iter()
            .enumerate()
            .find(|(_, &s)| !self.rules.is_valid_state(s))
        {
            return Err(ConfigError::UnknownState {
                state,
                context: format!("snapshot cell {i}"),
            });
        }
        self.grid.load(snapshot)
    }

    /// Write `pattern` with its origin at `(x, y)`, wrapping or clipping
    /// at the edges. Returns the number of cells that changed.
    pub fn stamp(&mut self, pattern: &Pattern, x: i64, y: i64) -> Result<usize, ConfigError> {
        if let Some(&(px, py, state)) = pattern
            .cells()
            .iter()
            .find(|(_, _, s)| !self.rules.is_valid_state(*s))
        {
            return Err(ConfigError::UnknownState {
                state,
                context: format!("pattern cell ({px}, {py})"),
            });
        }
        Ok(self.grid.stamp(pattern, x, y))
    }

    /// Minimal rectangle holding every non-background cell.
    pub fn crop(&self) -> Option<Snapshot> {
        self.grid.crop()
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The grid, read-only.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The bound rules.
    pub fn rules(&self) -> &BoundRules {
        &self.rules
    }

    /// The configuration the game was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Grid shape.
    pub fn shape(&self) -> &SquareGrid {
        self.grid.shape()
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.grid.shape().cell_count()
    }
}
