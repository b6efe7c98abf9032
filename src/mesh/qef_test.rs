use glam::Vec3;

use super::*;

#[test]
fn single_constraint_has_minimal_residual_along_normal() {
  let point = Vec3::new(0.5, 0.25, 0.75);
  let normal = Vec3::new(0.0, 1.0, 0.0);
  let solved = solve(&[point], &[normal]);

  // The solved point must sit on the constraint plane.
  assert!((solved.dot(normal) - point.dot(normal)).abs() < 1e-4);
}

#[test]
fn three_orthogonal_planes_intersect_exactly() {
  let target = Vec3::new(0.3, 0.6, 0.4);
  let points = [
    Vec3::new(target.x, 0.0, 0.0),
    Vec3::new(0.0, target.y, 0.0),
    Vec3::new(0.0, 0.0, target.z),
  ];
  let normals = [Vec3::X, Vec3::Y, Vec3::Z];
  let solved = solve(&points, &normals);

  assert!((solved - target).length() < 1e-3, "solved {solved:?}");
}

#[test]
fn parallel_planes_fall_back_toward_centroid() {
  // Two constraints with the same normal leave two free directions; the
  // bias pulls the solution to the centroid in those directions.
  let points = [Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.5, 1.0, 1.0)];
  let normals = [Vec3::X, Vec3::X];
  let solved = solve(&points, &normals);

  assert!((solved.x - 0.5).abs() < 1e-3);
  assert!((solved.y - 0.5).abs() < 1e-2);
  assert!((solved.z - 0.5).abs() < 1e-2);
}

#[test]
fn invdet_floors_degenerate_inverses() {
  assert_eq!(invdet(0.0, TINY), 0.0);
  assert_eq!(invdet(1e-25, TINY), 0.0);
  assert!((invdet(2.0, TINY) - 0.5).abs() < 1e-7);
}

#[test]
fn jacobi_diagonalizes_a_symmetric_matrix() {
  // Eigenvalues of diag(3, 2, 1) rotated into a dense symmetric matrix
  // must come back out (order fixed by the rotation schedule).
  let a: Sym3 = [[2.0, 1.0, 0.0], [0.0, 2.0, 1.0], [0.0, 0.0, 2.0]];
  let mut v = [[0.0; 3]; 3];
  for (i, row) in v.iter_mut().enumerate() {
    row[i] = 1.0;
  }
  let sigma = solve_sym(a, &mut v);

  // Known spectrum of the tridiagonal (2,1) matrix.
  let mut eigen = [sigma.x, sigma.y, sigma.z];
  eigen.sort_by(|a, b| a.partial_cmp(b).unwrap());
  let expected = [2.0 - 2.0_f32.sqrt(), 2.0, 2.0 + 2.0_f32.sqrt()];
  for (got, want) in eigen.iter().zip(expected) {
    assert!((got - want).abs() < 1e-3, "got {got}, want {want}");
  }
}
