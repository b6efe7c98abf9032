//! Least-squares vertex placement for Dual Contouring.
//!
//! Minimizes `sum((n_i . (x - p_i))^2)` over x. The symmetric 3x3 normal
//! system is diagonalized with a fixed-sweep cyclic Jacobi rotation
//! schedule and solved through an eigenvalue pseudoinverse; a stability
//! floor zeroes near-singular inverses so degenerate constraint sets fall
//! back to the centroid instead of exploding.

use glam::Vec3;

const TINY: f32 = 1e-20;
const SVD_SWEEPS: usize = 3;
/// Length of the axis-aligned regularizer normals appended through the
/// centroid. Short enough to only matter when the real constraints are
/// ambiguous.
const BIAS_STRENGTH: f32 = 0.01;

/// Symmetric 3x3 matrix, upper triangle maintained.
type Sym3 = [[f32; 3]; 3];

fn givens_coeffs_sym(a_pp: f32, a_pq: f32, a_qq: f32) -> (f32, f32) {
  if a_pq == 0.0 {
    return (1.0, 0.0);
  }
  let tau = (a_qq - a_pp) / (2.0 * a_pq);
  let stt = (1.0 + tau * tau).sqrt();
  let tan = 1.0 / if tau >= 0.0 { tau + stt } else { tau - stt };
  let c = 1.0 / (1.0 + tan * tan).sqrt();
  (c, tan * c)
}

fn rotate_xy(x: &mut f32, y: &mut f32, c: f32, s: f32) {
  let u = *x;
  let v = *y;
  *x = c * u - s * v;
  *y = s * u + c * v;
}

fn rotateq_xy(x: &mut f32, y: &mut f32, a: f32, c: f32, s: f32) {
  let cc = c * c;
  let ss = s * s;
  let mx = 2.0 * c * s * a;
  let u = *x;
  let v = *y;
  *x = cc * u - mx + ss * v;
  *y = ss * u + mx + cc * v;
}

/// One Givens rotation zeroing `vtav[a][b]`, accumulated into `v`.
fn svd_rotate(vtav: &mut Sym3, v: &mut [[f32; 3]; 3], a: usize, b: usize) {
  if vtav[a][b] == 0.0 {
    return;
  }
  let (c, s) = givens_coeffs_sym(vtav[a][a], vtav[a][b], vtav[b][b]);

  let (mut x, mut y, mut z) = (vtav[a][a], vtav[b][b], vtav[a][b]);
  rotateq_xy(&mut x, &mut y, z, c, s);
  vtav[a][a] = x;
  vtav[b][b] = y;
  vtav[a][b] = z;

  // The two off-diagonal entries not on the (a,b) pivot.
  let (mut x, mut y) = (vtav[0][3 - b], vtav[1 - a][2]);
  rotate_xy(&mut x, &mut y, c, s);
  vtav[0][3 - b] = x;
  vtav[1 - a][2] = y;

  vtav[a][b] = 0.0;

  for row in v.iter_mut() {
    let (mut x, mut y) = (row[a], row[b]);
    rotate_xy(&mut x, &mut y, c, s);
    row[a] = x;
    row[b] = y;
  }
}

/// Cyclic Jacobi diagonalization; returns the eigenvalues and writes the
/// eigenvectors into `v` (columns).
fn solve_sym(a: Sym3, v: &mut [[f32; 3]; 3]) -> Vec3 {
  let mut vtav = a;
  for _ in 0..SVD_SWEEPS {
    svd_rotate(&mut vtav, v, 0, 1);
    svd_rotate(&mut vtav, v, 0, 2);
    svd_rotate(&mut vtav, v, 1, 2);
  }
  Vec3::new(vtav[0][0], vtav[1][1], vtav[2][2])
}

/// Inverse with a stability floor: near-zero and near-infinite inverses
/// both collapse to exactly zero.
fn invdet(x: f32, tol: f32) -> f32 {
  if x.abs() < tol || (1.0 / x).abs() < tol {
    0.0
  } else {
    1.0 / x
  }
}

/// `V . diag(invdet(sigma)) . V^T . b`.
fn pseudoinverse_mul(sigma: Vec3, v: &[[f32; 3]; 3], b: Vec3) -> Vec3 {
  let mut x = Vec3::ZERO;
  for k in 0..3 {
    let d = invdet(sigma[k], TINY);
    let col = Vec3::new(v[0][k], v[1][k], v[2][k]);
    x += col * (d * col.dot(b));
  }
  x
}

/// Symmetric matrix-vector product reading only the upper triangle.
fn vmul_sym(a: &Sym3, v: Vec3) -> Vec3 {
  Vec3::new(
    a[0][0] * v.x + a[0][1] * v.y + a[0][2] * v.z,
    a[0][1] * v.x + a[1][1] * v.y + a[1][2] * v.z,
    a[0][2] * v.x + a[1][2] * v.y + a[2][2] * v.z,
  )
}

/// Solve for the point minimizing the summed plane-distance error.
///
/// `points` and `normals` are index-aligned and non-empty. Three weak
/// axis-aligned constraints through the centroid are appended before
/// accumulation, biasing under-constrained solves toward the centroid.
pub fn solve(points: &[Vec3], normals: &[Vec3]) -> Vec3 {
  debug_assert_eq!(points.len(), normals.len());
  debug_assert!(!points.is_empty());

  let centroid = points.iter().copied().sum::<Vec3>() / points.len() as f32;
  let bias = [
    Vec3::new(BIAS_STRENGTH, 0.0, 0.0),
    Vec3::new(0.0, BIAS_STRENGTH, 0.0),
    Vec3::new(0.0, 0.0, BIAS_STRENGTH),
  ];

  let mut ata: Sym3 = [[0.0; 3]; 3];
  let mut atb = Vec3::ZERO;
  let mut point_sum = Vec3::ZERO;
  let mut point_count = 0.0f32;

  let constraints = points
    .iter()
    .copied()
    .zip(normals.iter().copied())
    .chain(bias.iter().map(|&n| (centroid, n)));
  for (p, n) in constraints {
    ata[0][0] += n.x * n.x;
    ata[0][1] += n.x * n.y;
    ata[0][2] += n.x * n.z;
    ata[1][1] += n.y * n.y;
    ata[1][2] += n.y * n.z;
    ata[2][2] += n.z * n.z;
    atb += n * p.dot(n);
    point_sum += p;
    point_count += 1.0;
  }

  let mass_point = point_sum / point_count;
  let atb = atb - vmul_sym(&ata, mass_point);

  let mut v = [[0.0; 3]; 3];
  for (i, row) in v.iter_mut().enumerate() {
    row[i] = 1.0;
  }
  let sigma = solve_sym(ata, &mut v);

  pseudoinverse_mul(sigma, &v, atb) + mass_point
}

#[cfg(test)]
#[path = "qef_test.rs"]
mod qef_test;
