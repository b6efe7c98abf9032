use glam::{IVec3, Vec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

/// A flat floor quad plus a flat ceiling quad, well inside the volume.
fn slab_mesh() -> Vec<Triangle> {
  let mut tris = Vec::new();
  for &y in &[2.0f32, 14.0] {
    tris.push(Triangle::new(
      Vec3::new(4.0, y, 4.0),
      Vec3::new(12.0, y, 4.0),
      Vec3::new(12.0, y, 12.0),
    ));
    tris.push(Triangle::new(
      Vec3::new(4.0, y, 4.0),
      Vec3::new(12.0, y, 12.0),
      Vec3::new(4.0, y, 12.0),
    ));
  }
  tris
}

#[test]
fn no_spawns_at_zero_percent() {
  let mut rng = ChaCha8Rng::seed_from_u64(1);
  let out = generate(&slab_mesh(), IVec3::splat(16), 0.0, &mut rng);
  assert!(out.is_empty());
}

#[test]
fn full_percent_spawns_paired_formations() {
  let mut rng = ChaCha8Rng::seed_from_u64(1);
  let out = generate(&slab_mesh(), IVec3::splat(16), 100.0, &mut rng);
  assert!(!out.is_empty());

  // Every prism contributes 20 triangles; each spawn site grows a pair of
  // stacks of 5 to 9 segments, so the total is a multiple of 20.
  assert_eq!(out.len() % 20, 0);

  // Pairing puts growth both above the floor band and below the ceiling.
  let has_low = out.iter().any(|t| t.a.y < 8.0);
  let has_high = out.iter().any(|t| t.a.y > 8.0);
  assert!(has_low && has_high);
}

#[test]
fn duplicate_positions_spawn_once() {
  // The same ceiling vertex appears in both triangles of the quad; with a
  // 100% spawn rate it must still only produce one pair per position.
  let mut rng = ChaCha8Rng::seed_from_u64(7);
  let tris = slab_mesh();
  let candidate_positions: std::collections::HashSet<[u32; 3]> = tris
    .iter()
    .flat_map(|t| [t.a, t.b, t.c])
    .map(super::position_key)
    .collect();
  let out = generate(&tris, IVec3::splat(16), 100.0, &mut rng);

  // At most one pair (two stacks, each at most 9 prisms) per candidate.
  let max_tris = candidate_positions.len() * 2 * 9 * 20;
  assert!(out.len() <= max_tris);
}

#[test]
fn generation_is_deterministic_per_seed() {
  let tris = slab_mesh();
  let mut a = ChaCha8Rng::seed_from_u64(42);
  let mut b = ChaCha8Rng::seed_from_u64(42);
  let first = generate(&tris, IVec3::splat(16), 50.0, &mut a);
  let second = generate(&tris, IVec3::splat(16), 50.0, &mut b);
  assert_eq!(first.len(), second.len());
  for (x, y) in first.iter().zip(&second) {
    assert_eq!(x.a, y.a);
    assert_eq!(x.b, y.b);
    assert_eq!(x.c, y.c);
  }
}

#[test]
fn taper_narrows_monotonically() {
  let mut last = taper(0.0);
  for i in 1..=10 {
    let t = taper(i as f32 / 10.0);
    assert!(t >= last);
    last = t;
  }
  assert_eq!(taper(0.0), 0.0);
  assert_eq!(taper(1.0), 1.0);
}
