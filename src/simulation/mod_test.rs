use glam::IVec3;

use super::*;
use crate::grid::neighbors::neighbor_positions;
use crate::types::Neighborhood;

/// Grid with every cell present, all walls except the listed positions,
/// which start fully alive.
fn grid_with_alive(dims: IVec3, alive: &[IVec3], rules: &RuleSet) -> Grid {
  let mut grid = Grid::empty(dims);
  let mut tag = 0u64;
  for x in 0..dims.x {
    for y in 0..dims.y {
      for z in 0..dims.z {
        let pos = IVec3::new(x, y, z);
        let state = if alive.contains(&pos) { rules.max_state() } else { 0 };
        grid.insert(
          pos,
          Cell {
            state,
            neighbors: neighbor_positions(pos, dims, Neighborhood::Moore),
            tag,
          },
        );
        tag += 1;
      }
    }
  }
  grid
}

#[test]
fn transition_laws() {
  let rules = RuleSet::parse("4", "4", 5).unwrap();
  // Birth only at exactly 4 alive neighbors.
  assert_eq!(transition(0, 4, &rules), 4);
  assert_eq!(transition(0, 3, &rules), 0);
  assert_eq!(transition(0, 5, &rules), 0);
  // Survival at 4, otherwise decay starts.
  assert_eq!(transition(4, 4, &rules), 4);
  assert_eq!(transition(4, 5, &rules), 3);
  assert_eq!(transition(4, 0, &rules), 3);
  // Decaying states ignore neighbors entirely.
  for alive in 0..=26 {
    assert_eq!(transition(3, alive, &rules), 2);
    assert_eq!(transition(1, alive, &rules), 0);
  }
}

#[test]
fn single_alive_cell_births_its_moore_shell() {
  let rules = RuleSet::parse("1-26", "1-26", 2).unwrap();
  let center = IVec3::splat(2);
  let grid = grid_with_alive(IVec3::splat(5), &[center], &rules);

  let next = step(&grid, &rules);

  // Each of the 26 shell cells saw exactly one alive neighbor and was born;
  // the center saw none and died (numStates=2 skips the decay tail).
  assert_eq!(next.state(center), Some(0));
  assert_eq!(next.alive_count(), 26);
  for nbr in &grid.get(center).unwrap().neighbors {
    assert_eq!(next.state(*nbr), Some(1));
  }
}

#[test]
fn decay_runs_to_zero_without_rescue() {
  let rules = RuleSet::parse("27", "27", 5).unwrap();
  let pos = IVec3::splat(1);
  let grid = grid_with_alive(IVec3::splat(3), &[pos], &rules);

  let mut sim = Simulation::new(grid, rules);
  for expected in [3, 2, 1, 0] {
    sim.step_once();
    assert_eq!(sim.grid().state(pos), Some(expected));
  }
  // Stays dead.
  sim.step_once();
  assert_eq!(sim.grid().state(pos), Some(0));
}

#[test]
fn step_preserves_neighbors_and_tags() {
  let rules = RuleSet::parse("4", "4", 5).unwrap();
  let grid = grid_with_alive(IVec3::splat(4), &[IVec3::splat(1), IVec3::splat(2)], &rules);

  let next = step(&grid, &rules);

  assert_eq!(next.len(), grid.len());
  for (pos, cell) in grid.iter_canonical() {
    let after = next.get(pos).unwrap();
    assert_eq!(after.neighbors, cell.neighbors);
    assert_eq!(after.tag, cell.tag);
  }
}

#[test]
fn run_applies_requested_generation_count() {
  let rules = RuleSet::parse("27", "27", 5).unwrap();
  let pos = IVec3::splat(1);
  let grid = grid_with_alive(IVec3::splat(3), &[pos], &rules);

  let mut sim = Simulation::new(grid, rules);
  sim.run(2);
  assert_eq!(sim.grid().state(pos), Some(2));

  sim.run(0);
  assert_eq!(sim.grid().state(pos), Some(2));
}
