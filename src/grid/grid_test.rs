use glam::IVec3;
use smallvec::smallvec;

use super::*;
use crate::types::NeighborList;

fn cell(state: i32, neighbors: NeighborList) -> Cell {
  Cell {
    state,
    neighbors,
    tag: 0,
  }
}

#[test]
fn bounds_checks() {
  let grid = Grid::empty(IVec3::new(3, 4, 5));
  assert!(grid.in_bounds(IVec3::ZERO));
  assert!(grid.in_bounds(IVec3::new(2, 3, 4)));
  assert!(!grid.in_bounds(IVec3::new(3, 0, 0)));
  assert!(!grid.in_bounds(IVec3::new(0, -1, 0)));
  assert!(!grid.in_bounds(IVec3::new(0, 0, 5)));
}

#[test]
fn insert_and_lookup() {
  let mut grid = Grid::empty(IVec3::splat(2));
  let pos = IVec3::new(1, 0, 1);
  grid.insert(pos, cell(3, smallvec![]));
  assert_eq!(grid.state(pos), Some(3));
  assert_eq!(grid.state(IVec3::ZERO), None);

  grid.get_mut(pos).unwrap().state = 0;
  assert_eq!(grid.state(pos), Some(0));
}

#[test]
fn positions_follow_canonical_order() {
  let grid = Grid::empty(IVec3::new(2, 2, 2));
  let order: Vec<IVec3> = grid.positions().collect();
  assert_eq!(order.len(), 8);
  assert_eq!(order[0], IVec3::new(0, 0, 0));
  assert_eq!(order[1], IVec3::new(0, 0, 1));
  assert_eq!(order[2], IVec3::new(0, 1, 0));
  assert_eq!(order[7], IVec3::new(1, 1, 1));
}

#[test]
fn alive_count_ignores_walls() {
  let mut grid = Grid::empty(IVec3::splat(2));
  grid.insert(IVec3::new(0, 0, 0), cell(0, smallvec![]));
  grid.insert(IVec3::new(0, 0, 1), cell(1, smallvec![]));
  grid.insert(IVec3::new(0, 1, 0), cell(4, smallvec![]));
  assert_eq!(grid.len(), 3);
  assert_eq!(grid.alive_count(), 2);
}

#[test]
fn neighbor_counts_classify_by_state() {
  let mut grid = Grid::empty(IVec3::new(3, 1, 1));
  let a = IVec3::new(0, 0, 0);
  let b = IVec3::new(1, 0, 0);
  let c = IVec3::new(2, 0, 0);
  grid.insert(a, cell(0, smallvec![b]));
  grid.insert(b, cell(2, smallvec![a, c]));
  grid.insert(c, cell(4, smallvec![b]));

  let middle = grid.get(b).unwrap().clone();
  assert_eq!(grid.wall_neighbor_count(&middle), 1);
  assert_eq!(grid.alive_neighbor_count(&middle), 1);
}
