//! Generations-family automaton stepping.
//!
//! [`step`] is pure: it reads an immutable snapshot and returns a new grid,
//! so every cell can be computed in parallel without locking. Only the
//! `state` field changes between generations; neighbor lists and tags are
//! carried over from the seed grid untouched.

pub mod job;
pub mod postprocess;

use rayon::prelude::*;

use crate::grid::Grid;
use crate::rules::RuleSet;
use crate::types::{Cell, Position};

/// One cell's next state under the Generations rules.
///
/// Dead cells are born fully alive when their alive-neighbor count is in
/// the birth set. Fully-alive cells begin to decay when their count leaves
/// the survival set. Decaying cells lose one state per step no matter what
/// their neighbors do.
fn transition(state: i32, alive_neighbors: usize, rules: &RuleSet) -> i32 {
  let max = rules.max_state();
  if state == 0 {
    if rules.birth.contains(alive_neighbors) {
      max
    } else {
      0
    }
  } else if state == max {
    if rules.survival.contains(alive_neighbors) {
      max
    } else {
      max - 1
    }
  } else {
    state - 1
  }
}

/// Advance the automaton by one generation.
pub fn step(grid: &Grid, rules: &RuleSet) -> Grid {
  // Snapshot in canonical order so the parallel pass has a stable index
  // space; the collect below is the join barrier.
  let snapshot: Vec<(Position, &Cell)> = grid.iter_canonical().collect();
  let next: Vec<(Position, Cell)> = snapshot
    .par_iter()
    .map(|&(pos, cell)| {
      let alive = grid.alive_neighbor_count(cell);
      let mut next_cell = cell.clone();
      next_cell.state = transition(cell.state, alive, rules);
      (pos, next_cell)
    })
    .collect();
  Grid::from_cells(grid.dims(), next)
}

/// Owns a grid and steps it in place.
pub struct Simulation {
  grid: Grid,
  rules: RuleSet,
}

impl Simulation {
  pub fn new(grid: Grid, rules: RuleSet) -> Self {
    Self { grid, rules }
  }

  pub fn step_once(&mut self) {
    self.grid = step(&self.grid, &self.rules);
  }

  /// Run `generations` steps.
  pub fn run(&mut self, generations: u32) {
    for _ in 0..generations {
      self.step_once();
    }
  }

  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  pub fn into_grid(self) -> Grid {
    self.grid
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
