use glam::IVec3;

use super::*;

#[test]
fn interior_moore_cell_has_26_neighbors() {
  let dims = IVec3::splat(5);
  let nbrs = neighbor_positions(IVec3::splat(2), dims, Neighborhood::Moore);
  assert_eq!(nbrs.len(), 26);
  assert!(!nbrs.contains(&IVec3::splat(2)));
}

#[test]
fn interior_von_neumann_cell_has_6_neighbors() {
  let dims = IVec3::splat(5);
  let nbrs = neighbor_positions(IVec3::splat(2), dims, Neighborhood::VonNeumann);
  assert_eq!(nbrs.len(), 6);
  for nbr in &nbrs {
    assert_eq!((*nbr - IVec3::splat(2)).abs().element_sum(), 1);
  }
}

#[test]
fn corner_cells_are_clipped() {
  let dims = IVec3::splat(5);
  let moore = neighbor_positions(IVec3::ZERO, dims, Neighborhood::Moore);
  assert_eq!(moore.len(), 7);

  let von_neumann = neighbor_positions(IVec3::ZERO, dims, Neighborhood::VonNeumann);
  assert_eq!(von_neumann.len(), 3);
}

#[test]
fn face_cell_moore_count() {
  let dims = IVec3::splat(5);
  // Centered on a face: one layer of the 3x3x3 block is clipped.
  let nbrs = neighbor_positions(IVec3::new(0, 2, 2), dims, Neighborhood::Moore);
  assert_eq!(nbrs.len(), 17);
}

#[test]
fn all_neighbors_are_in_bounds() {
  let dims = IVec3::new(3, 4, 5);
  for x in 0..dims.x {
    for y in 0..dims.y {
      for z in 0..dims.z {
        let pos = IVec3::new(x, y, z);
        for nbr in neighbor_positions(pos, dims, Neighborhood::Moore) {
          assert!(nbr.cmpge(IVec3::ZERO).all() && nbr.cmplt(dims).all());
        }
      }
    }
  }
}
