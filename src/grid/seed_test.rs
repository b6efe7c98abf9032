use glam::IVec3;

use super::*;

#[test]
fn hash_is_stable_and_seed_sensitive() {
  assert_eq!(hash_seed("cave"), hash_seed("cave"));
  assert_ne!(hash_seed("cave"), hash_seed("cavf"));
  assert_ne!(hash_seed(""), hash_seed("0"));
}

#[test]
fn same_seed_reproduces_the_grid() {
  let dims = IVec3::splat(6);
  let a = random_fill(dims, 50.0, "abc", Neighborhood::Moore, 5);
  let b = random_fill(dims, 50.0, "abc", Neighborhood::Moore, 5);
  for pos in a.positions() {
    assert_eq!(a.state(pos), b.state(pos));
  }
}

#[test]
fn different_seeds_diverge() {
  let dims = IVec3::splat(8);
  let a = random_fill(dims, 50.0, "abc", Neighborhood::Moore, 5);
  let b = random_fill(dims, 50.0, "xyz", Neighborhood::Moore, 5);
  let differing = a
    .positions()
    .filter(|&pos| a.state(pos) != b.state(pos))
    .count();
  assert!(differing > 0);
}

#[test]
fn fill_extremes() {
  let dims = IVec3::splat(4);
  let full = random_fill(dims, 100.0, "s", Neighborhood::Moore, 5);
  assert_eq!(full.alive_count(), 64);
  assert!(full.positions().all(|p| full.state(p) == Some(4)));

  let empty = random_fill(dims, 0.0, "s", Neighborhood::Moore, 5);
  assert_eq!(empty.alive_count(), 0);
}

#[test]
fn cells_carry_neighbor_lists_and_sequential_tags() {
  let dims = IVec3::splat(3);
  let grid = random_fill(dims, 50.0, "s", Neighborhood::VonNeumann, 2);
  let center = grid.get(IVec3::splat(1)).unwrap();
  assert_eq!(center.neighbors.len(), 6);

  let mut tags: Vec<u64> = grid.iter_canonical().map(|(_, c)| c.tag).collect();
  assert_eq!(tags.len(), 27);
  let sorted = {
    tags.sort_unstable();
    tags
  };
  assert_eq!(sorted, (0..27).collect::<Vec<u64>>());
}
