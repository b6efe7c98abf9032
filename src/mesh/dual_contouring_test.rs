use std::collections::HashMap;

use glam::{IVec3, Vec3};

use super::*;
use crate::grid::Grid;
use crate::mesh::FieldSampler;
use crate::types::{Cell, NeighborList};

fn grid_from_fn(dims: IVec3, state_at: impl Fn(IVec3) -> i32) -> Grid {
  let mut grid = Grid::empty(dims);
  let positions: Vec<_> = grid.positions().collect();
  for pos in positions {
    grid.insert(
      pos,
      Cell {
        state: state_at(pos),
        neighbors: NeighborList::new(),
        tag: 0,
      },
    );
  }
  grid
}

fn key(v: Vec3) -> [u32; 3] {
  [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]
}

#[test]
fn uniform_fields_produce_no_quads() {
  let empty = grid_from_fn(IVec3::splat(4), |_| 0);
  let full = grid_from_fn(IVec3::splat(4), |_| 4);
  assert!(extract(&FieldSampler::new(&empty, 1)).is_empty());
  assert!(extract(&FieldSampler::new(&full, 1)).is_empty());
}

#[test]
fn single_cell_meshes_to_a_closed_hull() {
  // With iso 1 the lone max-state point is the only non-negative sample;
  // the six lattice edges around it each contribute one quad.
  let centre = IVec3::splat(2);
  let grid = grid_from_fn(IVec3::splat(5), |pos| if pos == centre { 4 } else { 0 });
  let triangles = extract(&FieldSampler::new(&grid, 1));

  assert_eq!(triangles.len(), 12);

  // Every directed edge pairs with its reverse: closed, consistent winding.
  let mut edges: HashMap<([u32; 3], [u32; 3]), i32> = HashMap::new();
  for tri in &triangles {
    let k = [key(tri.a), key(tri.b), key(tri.c)];
    for i in 0..3 {
      *edges.entry((k[i], k[(i + 1) % 3])).or_insert(0) += 1;
    }
  }
  for (&(a, b), &count) in &edges {
    assert_eq!(count, 1);
    assert_eq!(edges.get(&(b, a)).copied().unwrap_or(0), 1);
  }

  // The hull uses the QEF vertex of each of the eight cells around the
  // point, and each sits inside its own cell.
  let distinct: std::collections::HashSet<[u32; 3]> = triangles
    .iter()
    .flat_map(|t| [key(t.a), key(t.b), key(t.c)])
    .collect();
  assert_eq!(distinct.len(), 8);
  for tri in &triangles {
    for v in [tri.a, tri.b, tri.c] {
      assert!(v.cmpge(Vec3::splat(1.0)).all() && v.cmple(Vec3::splat(3.0)).all(), "{v:?}");
    }
  }
}

#[test]
fn quad_count_follows_crossing_edge_count() {
  // Two adjacent max-state points: their shared lattice edge is not sign
  // changing, so the hulls merge into one box with ten quads.
  let grid = grid_from_fn(IVec3::new(6, 5, 5), |pos| {
    if pos == IVec3::new(2, 2, 2) || pos == IVec3::new(3, 2, 2) {
      4
    } else {
      0
    }
  });
  let triangles = extract(&FieldSampler::new(&grid, 1));
  assert_eq!(triangles.len(), 20);
}
