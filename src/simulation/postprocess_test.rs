use glam::IVec3;

use super::*;
use crate::grid::neighbors::neighbor_positions;
use crate::types::Cell;

fn full_grid(dims: IVec3, neighborhood: Neighborhood, state_at: impl Fn(IVec3) -> i32) -> Grid {
  let mut grid = Grid::empty(dims);
  let mut tag = 0u64;
  for x in 0..dims.x {
    for y in 0..dims.y {
      for z in 0..dims.z {
        let pos = IVec3::new(x, y, z);
        grid.insert(
          pos,
          Cell {
            state: state_at(pos),
            neighbors: neighbor_positions(pos, dims, neighborhood),
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
fn seal_walls_leaves_far_x_open() {
  let dims = IVec3::splat(4);
  let mut grid = full_grid(dims, Neighborhood::Moore, |_| 1);
  seal_walls(&mut grid);

  for pos in grid.positions().collect::<Vec<_>>() {
    let sealed = pos.x == 0 || pos.y == 0 || pos.y == 3 || pos.z == 0 || pos.z == 3;
    let expected = if sealed { 0 } else { 1 };
    assert_eq!(grid.state(pos), Some(expected), "at {pos:?}");
  }
  // x in 1..4, y and z in 1..3.
  assert_eq!(grid.alive_count(), 3 * 2 * 2);
}

#[test]
fn simplify_walls_off_mostly_buried_cells() {
  let dims = IVec3::splat(4);
  let mut grid = full_grid(dims, Neighborhood::Moore, |_| 1);
  seal_walls(&mut grid);
  simplify(&mut grid, Neighborhood::Moore, 2);

  // Of the 12 sealed-grid survivors, only the x==3 column sits next to the
  // open face and keeps enough non-wall neighbors.
  let expected: Vec<IVec3> = [(3, 1, 1), (3, 1, 2), (3, 2, 1), (3, 2, 2)]
    .iter()
    .map(|&(x, y, z)| IVec3::new(x, y, z))
    .collect();
  assert_eq!(grid.alive_count(), expected.len());
  for pos in expected {
    assert_eq!(grid.state(pos), Some(1), "at {pos:?}");
  }
}

#[test]
fn simplify_is_idempotent_at_fixed_point() {
  let dims = IVec3::splat(5);
  let hole = IVec3::splat(2);
  let mut once = full_grid(dims, Neighborhood::Moore, |pos| if pos == hole { 0 } else { 4 });
  simplify(&mut once, Neighborhood::Moore, 5);

  let mut twice = once.clone();
  simplify(&mut twice, Neighborhood::Moore, 5);

  for pos in once.positions().collect::<Vec<_>>() {
    assert_eq!(once.state(pos), twice.state(pos), "at {pos:?}");
  }
}

#[test]
fn simplify_fills_fully_enclosed_holes() {
  let dims = IVec3::splat(5);
  let hole = IVec3::splat(2);
  let mut grid = full_grid(dims, Neighborhood::Moore, |pos| if pos == hole { 0 } else { 4 });
  simplify(&mut grid, Neighborhood::Moore, 5);

  // The hole has zero wall neighbors, so the promotion pass closes it.
  assert_eq!(grid.state(hole), Some(4));
  assert_eq!(grid.alive_count(), 125);
}

#[test]
fn von_neumann_threshold_is_stricter() {
  let dims = IVec3::splat(3);
  // Alive center with all 6 axis neighbors dead.
  let center = IVec3::splat(1);
  let mut grid = full_grid(dims, Neighborhood::VonNeumann, |pos| {
    if pos == center || (pos - center).abs().element_sum() > 1 {
      3
    } else {
      0
    }
  });
  simplify(&mut grid, Neighborhood::VonNeumann, 4);

  // 6 wall neighbors > 3: the center joins the walls.
  assert_eq!(grid.state(center), Some(0));
}
