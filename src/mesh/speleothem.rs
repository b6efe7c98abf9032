//! Stalagmite/stalactite decoration for extracted cave meshes.
//!
//! Spawn sites are mesh vertices near the vertical extremes of the cave.
//! Each site grows a tapered stack of hexagonal prism segments, plus a
//! matching partner on the opposite surface so formations come in
//! floor/ceiling pairs.

use std::collections::HashSet;
use std::f32::consts::PI;

use glam::{IVec3, Vec3};
use rand::Rng;
use tracing::debug;

use crate::types::Triangle;

fn position_key(v: Vec3) -> [u32; 3] {
  [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]
}

/// Ease-in-out taper controlling how fast segments narrow toward the tip.
fn taper(t: f32) -> f32 {
  t * t * (3.0 - 2.0 * t)
}

/// Grow speleothems over the extracted surface.
///
/// `percent` is the per-candidate-vertex spawn chance in `[0, 100]`.
/// Returned triangles are appended to the cave mesh by the caller.
pub fn generate(
  triangles: &[Triangle],
  dims: IVec3,
  percent: f32,
  rng: &mut impl Rng,
) -> Vec<Triangle> {
  let mut out = Vec::new();

  // Mesh bounds, seeded at the volume centre so a sparse mesh cannot
  // collapse the spawn band to a single plane.
  let centre = (dims - IVec3::ONE).as_vec3() / 2.0;
  let (mut min_x, mut max_x) = (centre.x, centre.x);
  let (mut min_y, mut max_y) = (centre.y, centre.y);
  let (mut min_z, mut max_z) = (centre.z, centre.z);
  let vertices = triangles.iter().flat_map(|t| [t.a, t.b, t.c]);
  for v in vertices.clone() {
    min_x = min_x.min(v.x);
    max_x = max_x.max(v.x);
    min_y = min_y.min(v.y);
    max_y = max_y.max(v.y);
    min_z = min_z.min(v.z);
    max_z = max_z.max(v.z);
  }

  // Keep a small standoff from the absolute highest and lowest points.
  let max_y = (max_y * 10.0).floor() / 10.0 * 0.95;
  let min_y = (min_y * 10.0).ceil() / 10.0 * 1.05;

  let base_width = dims.x as f32 * 0.05;
  let base_height = dims.y as f32 * 0.025;
  let mut used: HashSet<[u32; 3]> = HashSet::new();

  for v in vertices {
    // Only ceiling/floor vertices are candidates. A vertex exactly at the
    // origin is indistinguishable from the no-candidate marker and never
    // spawns.
    let pos = if v.y <= min_y || v.y >= max_y {
      v
    } else {
      Vec3::ZERO
    };
    if pos == Vec3::ZERO
      || pos.x < min_x
      || pos.x > max_x
      || pos.z < min_z
      || pos.z > max_z
      || used.contains(&position_key(pos))
    {
      continue;
    }
    if rng.random_range(0.0..100.0) >= percent {
      continue;
    }

    let size = rng.random_range(0.1..1.5f32);
    let partner_size = size * rng.random_range(1.0..1.5f32);
    let (opposite_y, stalagmite) = if pos.y >= max_y {
      (min_y, false)
    } else {
      (max_y, true)
    };
    let partner = Vec3::new(pos.x, opposite_y, pos.z);

    grow(base_width * size, base_height * size, pos, stalagmite, rng, &mut out);
    grow(
      base_width * partner_size,
      base_height * partner_size,
      partner,
      !stalagmite,
      rng,
      &mut out,
    );
    used.insert(position_key(pos));
    used.insert(position_key(partner));
  }

  debug!(count = out.len(), "speleothem triangles");
  out
}

/// One tapered stack of prism segments, growing up for stalagmites and
/// down for stalactites.
fn grow(
  max_width: f32,
  height: f32,
  base: Vec3,
  stalagmite: bool,
  rng: &mut impl Rng,
  out: &mut Vec<Triangle>,
) {
  let num_segments = rng.random_range(5.0..10.0f32);
  let max_height = height * num_segments;
  let mut shift = Vec3::ZERO;

  for i in 0..num_segments as i32 {
    let width = if i > 0 {
      let ratio = (i as f32 / (num_segments - 1.0)).clamp(0.0, 1.0);
      max_width - taper(ratio) * max_width
    } else {
      max_width
    };

    hexagon_prism(width, max_height / num_segments, base + shift, out);

    if stalagmite {
      shift.y += max_height / num_segments;
    } else {
      shift.y -= max_height / num_segments;
    }
  }
}

/// Hexagonal prism with capped top and bottom, extending `height` below
/// `centre`.
fn hexagon_prism(width: f32, height: f32, centre: Vec3, out: &mut Vec<Triangle>) {
  let radius = width / 2.0;
  let mut top = [Vec3::ZERO; 6];
  let mut bottom = [Vec3::ZERO; 6];
  for i in 0..6 {
    let angle = i as f32 * PI / 3.0;
    let x = radius * angle.cos();
    let z = radius * angle.sin();
    top[i] = centre + Vec3::new(x, 0.0, z);
    bottom[i] = centre + Vec3::new(x, -height, z);
  }

  for i in 1..5 {
    out.push(Triangle::new(top[i + 1], top[i], top[0]));
  }
  for i in 1..5 {
    out.push(Triangle::new(bottom[i], bottom[i + 1], bottom[0]));
  }
  for i in 0..6 {
    let next = (i + 1) % 6;
    out.push(Triangle::new(top[next], bottom[i], top[i]));
    out.push(Triangle::new(top[next], bottom[next], bottom[i]));
  }
}

#[cfg(test)]
#[path = "speleothem_test.rs"]
mod speleothem_test;
