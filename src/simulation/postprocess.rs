//! Grid post-processing between simulation and extraction.

use tracing::debug;

use crate::grid::Grid;
use crate::types::Neighborhood;

/// Safety bound on the isolated-cell promotion loop. Promotion can in
/// principle re-create isolated cells elsewhere, so the cap is a heuristic
/// stop, not a proven termination bound.
const MAX_SIMPLIFY_PASSES: usize = 500;

/// Force walls on every boundary face except far-x.
///
/// Leaves the cavity open on the `x == width - 1` face only, so the cave
/// has exactly one exit.
pub fn seal_walls(grid: &mut Grid) {
  let dims = grid.dims();
  let positions: Vec<_> = grid.positions().collect();
  for pos in positions {
    let boundary = pos.x == 0
      || pos.y == 0
      || pos.y == dims.y - 1
      || pos.z == 0
      || pos.z == dims.z - 1;
    if boundary {
      if let Some(cell) = grid.get_mut(pos) {
        cell.state = 0;
      }
    }
  }
}

/// Remove noise the automaton leaves behind.
///
/// First pass: any cell with more wall neighbors than half its neighborhood
/// (13 Moore, 3 von Neumann) is merged into the walls; counts come from a
/// snapshot so the pass does not cascade. Second pass: repeatedly promote
/// cells with zero wall neighbors to fully alive, until a fixed point or
/// [`MAX_SIMPLIFY_PASSES`].
pub fn simplify(grid: &mut Grid, neighborhood: Neighborhood, num_states: i32) {
  let threshold = neighborhood.wall_threshold();
  let max_state = num_states - 1;

  let to_wall: Vec<_> = grid
    .iter_canonical()
    .filter(|(_, cell)| grid.wall_neighbor_count(cell) > threshold)
    .map(|(pos, _)| pos)
    .collect();
  for pos in &to_wall {
    if let Some(cell) = grid.get_mut(*pos) {
      cell.state = 0;
    }
  }

  let mut passes = 0;
  loop {
    let to_promote: Vec<_> = grid
      .iter_canonical()
      .filter(|(_, cell)| cell.state != max_state && grid.wall_neighbor_count(cell) == 0)
      .map(|(pos, _)| pos)
      .collect();
    passes += 1;
    if to_promote.is_empty() {
      break;
    }
    for pos in &to_promote {
      if let Some(cell) = grid.get_mut(*pos) {
        cell.state = max_state;
      }
    }
    if passes >= MAX_SIMPLIFY_PASSES {
      debug!(passes, "simplify promotion loop hit the pass cap");
      break;
    }
  }
  debug!(
    walled = to_wall.len(),
    passes, "grid simplification finished"
  );
}

#[cfg(test)]
#[path = "postprocess_test.rs"]
mod postprocess_test;
