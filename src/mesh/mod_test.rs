use glam::{IVec3, Vec2, Vec3};

use super::*;
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

#[test]
fn midpoint_crossing_is_symmetric_in_its_endpoints() {
  let p1 = Vec3::new(2.0, 3.0, 1.0);
  let p2 = Vec3::new(3.0, 3.0, 1.0);
  let forward = midpoint_crossing(p1, -1, p2, 3);
  let backward = midpoint_crossing(p2, 3, p1, -1);
  // Bit-identical, not merely close: shared cell seams depend on it.
  assert_eq!(forward, backward);
}

#[test]
fn midpoint_crossing_lands_at_the_half_band() {
  let p1 = Vec3::ZERO;
  let p2 = Vec3::X;
  // Values 0 and 3 cross the 0.5 band a sixth of the way along.
  let crossing = midpoint_crossing(p1, 0, p2, 3);
  assert!((crossing.x - 1.0 / 6.0).abs() < 1e-6);
  assert_eq!(crossing.y, 0.0);

  // Equal values degenerate to the lexicographically smaller endpoint.
  assert_eq!(midpoint_crossing(p2, 2, p1, 2), p1);
}

#[test]
fn perturbed_sampling_collapses_to_the_band_boundary() {
  let grid = grid_from_fn(IVec3::splat(3), |pos| if pos.x < 1 { 0 } else { 4 });
  let sampler = FieldSampler::new(&grid, 0);

  // On-lattice probes return the sample itself.
  assert_eq!(sampler.perturbed(Vec3::new(1.0, 1.0, 1.0)), 4.0);
  // Probes between differing samples flatten to 0.5.
  assert_eq!(sampler.perturbed(Vec3::new(0.5, 1.0, 1.0)), 0.5);
  // Probes between equal samples keep the value.
  assert_eq!(sampler.perturbed(Vec3::new(1.5, 1.0, 1.0)), 4.0);
  // Out-of-bounds probes clamp to the boundary sample.
  assert_eq!(sampler.perturbed(Vec3::new(-2.0, 1.0, 1.0)), 0.0);
}

#[test]
fn normals_follow_the_field_gradient() {
  let grid = grid_from_fn(IVec3::splat(3), |pos| if pos.x < 1 { 0 } else { 4 });
  let sampler = FieldSampler::new(&grid, 0);
  let normal = sampler.normal_at(Vec3::new(0.5, 1.0, 1.0));
  assert!(normal.x > 0.9, "{normal:?}");
  assert!(normal.y.abs() < 1e-6 && normal.z.abs() < 1e-6);
}

#[test]
fn assemble_emits_a_flat_soup_with_sequential_indices() {
  let tris = [
    Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y),
    Triangle::new(Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y),
  ];
  let mesh = assemble(&tris, &[], IVec3::splat(4));

  assert_eq!(mesh.vertices.len(), 6);
  assert_eq!(mesh.normals.len(), 6);
  assert_eq!(mesh.uvs.len(), 6);
  assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
  assert_eq!(mesh.triangle_count(), 2);
}

#[test]
fn assemble_averages_normals_at_shared_positions() {
  // Two faces meeting at a right angle along the x axis.
  let tris = [
    Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y),
    Triangle::new(Vec3::X, Vec3::ZERO, Vec3::Z),
  ];
  let mesh = assemble(&tris, &[], IVec3::splat(4));

  let n0 = tris[0].face_normal();
  let n1 = tris[1].face_normal();
  let blended = (n0 + n1).normalize_or_zero();

  // Vertices at shared positions (origin and +x) get the blended normal,
  // the lone corners keep their face normal.
  assert!((mesh.normals[0] - blended).length() < 1e-6);
  assert!((mesh.normals[1] - blended).length() < 1e-6);
  assert!((mesh.normals[2] - n0).length() < 1e-6);
  assert!((mesh.normals[5] - n1).length() < 1e-6);
}

#[test]
fn uvs_project_on_the_dominant_axis_plane() {
  // A single face with a +z normal projects onto the xy plane.
  let tris = [Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y)];
  let mesh = assemble(&tris, &[], IVec3::splat(4));
  let scale = 1.0 / 4.0;
  assert_eq!(mesh.uvs[1], Vec2::new(1.0, 0.0) * scale);
  assert_eq!(mesh.uvs[2], Vec2::new(0.0, 1.0) * scale);

  // A face with an +x-dominant normal projects onto the zy plane.
  let tris = [Triangle::new(Vec3::ZERO, Vec3::Z, Vec3::Y)];
  let mesh = assemble(&tris, &[], IVec3::splat(4));
  assert_eq!(mesh.uvs[1], Vec2::new(1.0, 0.0) * scale);
}

#[test]
fn speleothem_triangles_get_banner_uvs() {
  let surface = [Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y)];
  let spire = [Triangle::new(Vec3::Z, Vec3::new(1.0, 0.0, 1.0), Vec3::new(0.5, 1.0, 1.0))];
  let mesh = assemble(&surface, &spire, IVec3::splat(4));

  assert_eq!(mesh.vertices.len(), 6);
  assert_eq!(mesh.uvs[3], Vec2::new(0.0, 0.0));
  assert_eq!(mesh.uvs[4], Vec2::new(1.0, 0.0));
  assert_eq!(mesh.uvs[5], Vec2::new(0.5, 1.0));
}

#[test]
fn extract_dispatches_both_extractors() {
  let centre = IVec3::splat(2);
  let grid = grid_from_fn(IVec3::splat(5), |pos| if pos == centre { 4 } else { 0 });

  let mc = extract(&grid, 0, Extractor::MarchingCubes);
  assert_eq!(mc.len(), 8);

  let dc = extract(&grid, 1, Extractor::DualContouring);
  assert_eq!(dc.len(), 12);
}
