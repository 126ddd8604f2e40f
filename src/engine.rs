//! Generation stepping over a [`Grid`] for any [`Rule`].

use std::marker::PhantomData;

use log::{debug, trace};
use rand::{Rng, SeedableRng};

use crate::{
    grid::Grid,
    rules::{Life, LifeState, Rule, Wireworld},
    Result,
};

pub type LifeEngine = Engine<Life>;
pub type WireworldEngine = Engine<Wireworld>;

/// How neighbor counts are brought up to date after a generation.
///
/// Both strategies evaluate every transition of a tick against the counts of
/// the previous generation and therefore produce identical evolutions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateStrategy {
    /// Decide all transitions first, then apply them one by one, adjusting
    /// the eight neighbors of every changed cell.
    #[default]
    Incremental,
    /// Apply transitions in row-major order without touching any count, then
    /// rebuild all counts from scratch.
    Recount,
}

/// A cell that changed state, as reported to renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Change<S> {
    pub row: usize,
    pub column: usize,
    pub state: S,
}

/// Outcome of [`Engine::set_cell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edit<S> {
    /// `false` when the cell already was in the requested state.
    pub changed: bool,
    pub previous: S,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport<S> {
    pub generation: u64,
    pub population: usize,
    pub changes: Vec<Change<S>>,
}

/// A grid together with the rule that evolves it.
#[derive(Clone, Debug)]
pub struct Engine<R: Rule> {
    grid: Grid<R::State>,
    strategy: UpdateStrategy,
    // An edit without side effects changed an active cell since the last recount.
    counts_stale: bool,
    rule: PhantomData<R>,
}

impl<R: Rule> Engine<R> {
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(rows, columns)?,
            strategy: UpdateStrategy::default(),
            counts_stale: false,
            rule: PhantomData,
        })
    }

    pub fn with_strategy(mut self, strategy: UpdateStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> UpdateStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: UpdateStrategy) {
        self.strategy = strategy;
    }

    pub fn grid(&self) -> &Grid<R::State> {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    pub fn state(&self, row: usize, column: usize) -> Result<R::State> {
        self.grid.state(row, column)
    }

    /// Interior states in row-major order.
    pub fn states(&self) -> impl Iterator<Item = R::State> + '_ {
        self.grid.interior().map(|(_, _, cell)| cell.state())
    }

    /// Puts one interior cell into `target`.
    ///
    /// Population follows every actual change. Neighbor counts are adjusted
    /// only with `apply_side_effects` and only while they are not already
    /// stale; otherwise they stay stale until
    /// [`Engine::recount_all_neighbors`] or the next [`Engine::step`], which
    /// recounts before deciding any transition.
    pub fn set_cell(
        &mut self,
        row: usize,
        column: usize,
        target: R::State,
        apply_side_effects: bool,
    ) -> Result<Edit<R::State>> {
        let idx = self.grid.checked_index(row, column)?;
        Ok(self.write(idx, target, apply_side_effects))
    }

    fn write(&mut self, idx: usize, target: R::State, apply_side_effects: bool) -> Edit<R::State> {
        let previous = self.grid.replace_state(idx, target);
        if previous == target {
            return Edit {
                changed: false,
                previous,
            };
        }
        // stale counts are rebuilt wholesale before the next step
        let shift = apply_side_effects && !self.counts_stale;
        let delta = match (R::is_active(previous), R::is_active(target)) {
            (false, true) => {
                self.grid.gain_population();
                1
            }
            (true, false) => {
                self.grid.lose_population();
                -1
            }
            _ => 0,
        };
        if delta != 0 {
            if shift {
                self.grid.shift_neighbors(idx, delta);
            } else {
                self.counts_stale = true;
            }
        }
        Edit {
            changed: true,
            previous,
        }
    }

    /// Writes an interior cell without touching neighbor counts.
    pub(crate) fn put(&mut self, row: usize, column: usize, state: R::State) {
        debug_assert!(self.grid.contains(row, column));
        let idx = self.grid.index_of(row, column);
        self.write(idx, state, false);
    }

    pub fn recount_all_neighbors(&mut self) {
        self.grid.recount_all_neighbors(|cell| R::is_active(cell.state()));
        self.counts_stale = false;
    }

    /// `true` while some edit made without side effects awaits a recount.
    pub fn counts_stale(&self) -> bool {
        self.counts_stale
    }

    /// Back to an empty grid at generation 0.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.counts_stale = false;
        debug!(
            "cleared {} grid {}x{}",
            R::NAME,
            self.grid.rows(),
            self.grid.columns()
        );
    }

    /// Advances the automaton by one generation.
    pub fn step(&mut self) -> StepReport<R::State> {
        if self.counts_stale {
            debug!("{}: recounting neighbors left stale by edits", R::NAME);
            self.recount_all_neighbors();
        }
        let changes = match self.strategy {
            UpdateStrategy::Incremental => self.step_incremental(),
            UpdateStrategy::Recount => self.step_recount(),
        };
        self.grid.advance_generation();
        trace!(
            "{} generation {}: {} changes, population {}",
            R::NAME,
            self.grid.generation(),
            changes.len(),
            self.grid.population()
        );
        StepReport {
            generation: self.grid.generation(),
            population: self.grid.population(),
            changes,
        }
    }

    fn step_incremental(&mut self) -> Vec<Change<R::State>> {
        let changes = self
            .grid
            .interior()
            .filter_map(|(row, column, cell)| {
                let next = R::transition(cell.state(), cell.neighbor_count());
                (next != cell.state()).then_some(Change {
                    row,
                    column,
                    state: next,
                })
            })
            .collect::<Vec<_>>();
        for change in &changes {
            let idx = self.grid.index_of(change.row, change.column);
            self.write(idx, change.state, true);
        }
        changes
    }

    fn step_recount(&mut self) -> Vec<Change<R::State>> {
        let mut changes = vec![];
        for row in 1..=self.grid.rows() {
            for column in 1..=self.grid.columns() {
                let idx = self.grid.index_of(row, column);
                let cell = *self.grid.cell_at(idx);
                let next = R::transition(cell.state(), cell.neighbor_count());
                if next != cell.state() {
                    self.write(idx, next, false);
                    changes.push(Change {
                        row,
                        column,
                        state: next,
                    });
                }
            }
        }
        self.recount_all_neighbors();
        changes
    }
}

impl Engine<Life> {
    /// Brings `count` randomly chosen dead cells to life.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn fill_random(&mut self, count: usize, seed: Option<u64>) -> Vec<Change<LifeState>> {
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        self.fill_random_with(count, &mut rng)
    }

    /// Same as [`Engine::fill_random`] with a caller supplied generator.
    ///
    /// `count` is clamped to the number of dead cells, so this terminates
    /// even when asked for more cells than the grid holds.
    pub fn fill_random_with(&mut self, count: usize, rng: &mut impl Rng) -> Vec<Change<LifeState>> {
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        let count = count.min(rows * columns - self.grid.population());
        let mut changes = Vec::with_capacity(count);
        while changes.len() < count {
            let row = rng.gen_range(1..=rows);
            let column = rng.gen_range(1..=columns);
            let idx = self.grid.index_of(row, column);
            if self.write(idx, LifeState::Alive, true).changed {
                changes.push(Change {
                    row,
                    column,
                    state: LifeState::Alive,
                });
            }
        }
        debug!(
            "random fill: {} new cells, population {}",
            count,
            self.grid.population()
        );
        changes
    }
}
