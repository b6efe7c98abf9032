//! Deterministic initial grid seeding.

use glam::IVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::neighbors::neighbor_positions;
use super::Grid;
use crate::types::{Cell, Neighborhood};

/// FNV-1a over the seed string's bytes. Stable across platforms so the
/// same seed text always reproduces the same cave.
pub fn hash_seed(seed: &str) -> u64 {
  const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
  const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
  let mut hash = FNV_OFFSET;
  for byte in seed.bytes() {
    hash ^= u64::from(byte);
    hash = hash.wrapping_mul(FNV_PRIME);
  }
  hash
}

/// Seeded PRNG for everything randomized in the pipeline.
pub fn rng_for_seed(seed: &str) -> ChaCha8Rng {
  ChaCha8Rng::seed_from_u64(hash_seed(seed))
}

/// Build the generation-zero grid.
///
/// Cells are visited in canonical x/y/z order, each drawing one sample from
/// the PRNG stream: below `fill_percent` the cell starts fully alive,
/// otherwise it is a wall. Neighbor lists are computed once here and never
/// change afterwards. Tags are assigned sequentially in visit order.
pub fn random_fill(
  dims: IVec3,
  fill_percent: f32,
  seed: &str,
  neighborhood: Neighborhood,
  num_states: i32,
) -> Grid {
  let mut rng = rng_for_seed(seed);
  let mut grid = Grid::empty(dims);
  let max_state = num_states - 1;
  let mut next_tag = 0u64;
  for x in 0..dims.x {
    for y in 0..dims.y {
      for z in 0..dims.z {
        let pos = IVec3::new(x, y, z);
        let state = if rng.random_range(0.0..100.0) < fill_percent {
          max_state
        } else {
          0
        };
        grid.insert(
          pos,
          Cell {
            state,
            neighbors: neighbor_positions(pos, dims, neighborhood),
            tag: next_tag,
          },
        );
        next_tag += 1;
      }
    }
  }
  grid
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;
