//! Isosurface extraction and mesh assembly.
//!
//! Both extractors share the same signed field evaluation and the same
//! midpoint-crossing edge interpolation. The interpolation deliberately
//! crosses at 0.5 between the two signed corner values instead of the true
//! zero crossing; with integer-banded states this produces the stepped
//! cave-wall look and must not be replaced with exact interpolation.

pub mod dual_contouring;
pub mod marching_cubes;
pub mod qef;
pub mod speleothem;

use std::collections::HashMap;

use glam::{IVec3, Vec2, Vec3};
use tracing::debug;

use crate::grid::Grid;
use crate::types::{Extractor, MeshOutput, Triangle};

/// Signed scalar view of the grid: `state - iso_level`, with positions
/// outside the grid evaluating to 0.
#[derive(Clone, Copy)]
pub struct FieldSampler<'a> {
  grid: &'a Grid,
  iso_level: i32,
}

impl<'a> FieldSampler<'a> {
  pub fn new(grid: &'a Grid, iso_level: i32) -> Self {
    Self { grid, iso_level }
  }

  pub fn dims(&self) -> IVec3 {
    self.grid.dims()
  }

  /// Signed value at a lattice position.
  #[inline]
  pub fn value(&self, pos: IVec3) -> i32 {
    match self.grid.state(pos) {
      Some(state) => state - self.iso_level,
      None => 0,
    }
  }

  /// Signed value at a possibly non-integral probe point.
  ///
  /// Samples the lattice points below and above the probe (clamped to the
  /// grid) and blends at the 0.5 crossing. Over a banded field the blend
  /// collapses to 0.5 whenever the two samples differ.
  pub fn perturbed(&self, point: Vec3) -> f32 {
    let dims = self.grid.dims();
    let hi_bound = dims - IVec3::ONE;
    let down = IVec3::new(
      point.x.floor() as i32,
      point.y.floor() as i32,
      point.z.floor() as i32,
    )
    .clamp(IVec3::ZERO, hi_bound);
    let up = IVec3::new(
      point.x.ceil() as i32,
      point.y.ceil() as i32,
      point.z.ceil() as i32,
    )
    .clamp(IVec3::ZERO, hi_bound);

    let a = self.value(down).min(self.value(up));
    let b = self.value(down).max(self.value(up));
    if a == b {
      a as f32
    } else {
      0.5
    }
  }

  /// Surface normal estimated by central differences of the perturbed
  /// evaluator.
  pub fn normal_at(&self, point: Vec3) -> Vec3 {
    let dx = self.perturbed(point + Vec3::X) - self.perturbed(point - Vec3::X);
    let dy = self.perturbed(point + Vec3::Y) - self.perturbed(point - Vec3::Y);
    let dz = self.perturbed(point + Vec3::Z) - self.perturbed(point - Vec3::Z);
    Vec3::new(dx, dy, dz).normalize_or_zero()
  }
}

/// Total lexicographic order on points, ties broken x then y then z.
#[inline]
fn pos_less(left: Vec3, right: Vec3) -> bool {
  if left.x != right.x {
    return left.x < right.x;
  }
  if left.y != right.y {
    return left.y < right.y;
  }
  left.z < right.z
}

/// Edge interpolation at the fixed 0.5 midpoint crossing.
///
/// Endpoints are reordered lexicographically first so both cubes sharing
/// an edge compute bit-identical points, which keeps shared seams closed.
pub fn midpoint_crossing(p1: Vec3, v1: i32, p2: Vec3, v2: i32) -> Vec3 {
  let (lo_p, lo_v, hi_p, hi_v) = if pos_less(p2, p1) {
    (p2, v2, p1, v1)
  } else {
    (p1, v1, p2, v2)
  };
  if lo_v == hi_v {
    return lo_p;
  }
  let lo_v = lo_v as f32;
  let hi_v = hi_v as f32;
  lo_p + (hi_p - lo_p) / (hi_v - lo_v) * (0.5 - lo_v)
}

/// Run the configured extractor over the finalized grid.
pub fn extract(grid: &Grid, iso_level: i32, extractor: Extractor) -> Vec<Triangle> {
  let sampler = FieldSampler::new(grid, iso_level);
  let triangles = match extractor {
    Extractor::MarchingCubes => marching_cubes::extract(&sampler),
    Extractor::DualContouring => dual_contouring::extract(&sampler),
  };
  debug!(count = triangles.len(), ?extractor, "extracted triangles");
  triangles
}

fn position_key(v: Vec3) -> [u32; 3] {
  [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()]
}

/// Flatten the cave surface plus any speleothem triangles into
/// renderer-ready buffers.
///
/// Vertices are emitted as a soup (three per triangle, sequential indices).
/// Normals average the face normals of every triangle touching the same
/// position, so seams between cubes still shade smoothly. Surface UVs
/// project each vertex onto the dominant axis plane of its face, scaled
/// by the grid width; speleothem triangles carry a fixed banner mapping
/// instead.
pub fn assemble(triangles: &[Triangle], speleothems: &[Triangle], dims: IVec3) -> MeshOutput {
  let total = triangles.len() + speleothems.len();
  if total == 0 {
    return MeshOutput::default();
  }

  let mut mesh = MeshOutput {
    vertices: Vec::with_capacity(total * 3),
    indices: Vec::with_capacity(total * 3),
    normals: Vec::with_capacity(total * 3),
    uvs: Vec::with_capacity(total * 3),
  };

  let mut accum: HashMap<[u32; 3], Vec3> = HashMap::new();
  for tri in triangles.iter().chain(speleothems) {
    let face = tri.face_normal();
    for v in [tri.a, tri.b, tri.c] {
      *accum.entry(position_key(v)).or_insert(Vec3::ZERO) += face;
    }
  }

  let mut push = |mesh: &mut MeshOutput, v: Vec3, uv: Vec2| {
    let index = mesh.vertices.len() as u32;
    mesh.vertices.push(v);
    mesh.indices.push(index);
    mesh.normals.push(accum[&position_key(v)].normalize_or_zero());
    mesh.uvs.push(uv);
  };

  let texture_scale = 1.0 / dims.x as f32;
  for tri in triangles {
    let face = tri.face_normal();
    for v in [tri.a, tri.b, tri.c] {
      push(&mut mesh, v, cube_face_uv(v, face, texture_scale));
    }
  }
  for tri in speleothems {
    push(&mut mesh, tri.a, Vec2::new(0.0, 0.0));
    push(&mut mesh, tri.b, Vec2::new(1.0, 0.0));
    push(&mut mesh, tri.c, Vec2::new(0.5, 1.0));
  }
  mesh
}

/// Project a vertex onto the axis plane its face normal points along.
fn cube_face_uv(vertex: Vec3, normal: Vec3, texture_scale: f32) -> Vec2 {
  if normal.x.abs() > 0.5 {
    Vec2::new(vertex.z, vertex.y) * texture_scale
  } else if normal.y.abs() > 0.5 {
    Vec2::new(vertex.x, vertex.z) * texture_scale
  } else {
    Vec2::new(vertex.x, vertex.y) * texture_scale
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
