//! Dual Contouring extractor.
//!
//! Phase one scans every cell and collects Hermite data: one crossing
//! point and surface normal per sign-changing cell edge, condensed into a
//! representative cell vertex by the QEF solver. Phase two walks the
//! lattice edges and, for each sign-changing edge, stitches a quad from
//! the vertices of the four cells around it. The sign split here is
//! `value < 0`, so with a banded field the surface sits below the
//! configured iso level.

use std::collections::HashMap;

use glam::{IVec3, Vec3};

use super::{midpoint_crossing, qef, FieldSampler};
use crate::types::{HermiteData, Triangle};

/// Endpoint offsets of the 12 cell edges, bottom ring, top ring, verticals.
static EDGE_OFFSETS: [[IVec3; 2]; 12] = [
  [IVec3::new(0, 0, 0), IVec3::new(1, 0, 0)],
  [IVec3::new(1, 0, 0), IVec3::new(1, 0, 1)],
  [IVec3::new(1, 0, 1), IVec3::new(0, 0, 1)],
  [IVec3::new(0, 0, 1), IVec3::new(0, 0, 0)],
  [IVec3::new(0, 1, 0), IVec3::new(1, 1, 0)],
  [IVec3::new(1, 1, 0), IVec3::new(1, 1, 1)],
  [IVec3::new(1, 1, 1), IVec3::new(0, 1, 1)],
  [IVec3::new(0, 1, 1), IVec3::new(0, 1, 0)],
  [IVec3::new(0, 0, 0), IVec3::new(0, 1, 0)],
  [IVec3::new(1, 0, 0), IVec3::new(1, 1, 0)],
  [IVec3::new(1, 0, 1), IVec3::new(1, 1, 1)],
  [IVec3::new(0, 0, 1), IVec3::new(0, 1, 1)],
];

pub fn extract(sampler: &FieldSampler) -> Vec<Triangle> {
  let dims = sampler.dims();
  let mut hermite: HashMap<IVec3, HermiteData> = HashMap::new();
  for x in 0..dims.x - 1 {
    for y in 0..dims.y - 1 {
      for z in 0..dims.z - 1 {
        let cell = IVec3::new(x, y, z);
        hermite.insert(cell, hermite_for_cell(sampler, cell));
      }
    }
  }

  let mut triangles = Vec::new();
  for x in 0..dims.x - 1 {
    for y in 0..dims.y - 1 {
      for z in 0..dims.z - 1 {
        emit_edge_quads(sampler, &hermite, IVec3::new(x, y, z), &mut triangles);
      }
    }
  }
  triangles
}

/// Collect crossings and normals over a cell's 12 edges and solve for the
/// representative vertex. Cells without crossings keep the zero vertex;
/// their entry still exists so the quad phase can look them up.
fn hermite_for_cell(sampler: &FieldSampler, cell: IVec3) -> HermiteData {
  let mut data = HermiteData::default();
  for [from, to] in EDGE_OFFSETS {
    let start = cell + from;
    let end = cell + to;
    let start_value = sampler.value(start);
    let end_value = sampler.value(end);
    if (start_value < 0) != (end_value < 0) {
      let intersection =
        midpoint_crossing(start.as_vec3(), start_value, end.as_vec3(), end_value);
      data.normals.push(sampler.normal_at(intersection));
      data.intersections.push(intersection);
    }
  }
  if !data.intersections.is_empty() {
    data.vertex = qef::solve(&data.intersections, &data.normals);
  }
  data
}

/// Emit quads for the three lattice edges owned by `corner` (towards +x,
/// +y and +z) when they cross the surface. The quad connects the vertices
/// of the four cells sharing the edge; the guards keep all four in range.
fn emit_edge_quads(
  sampler: &FieldSampler,
  hermite: &HashMap<IVec3, HermiteData>,
  corner: IVec3,
  out: &mut Vec<Triangle>,
) {
  let solid = |pos: IVec3| sampler.value(pos) < 0;
  let vertex = |cell: IVec3| hermite.get(&cell).map(|h| h.vertex).unwrap_or(Vec3::ZERO);

  if corner.x > 0 && corner.y > 0 {
    let start = solid(corner);
    let end = solid(corner + IVec3::Z);
    if start != end {
      let v1 = vertex(corner - IVec3::new(1, 1, 0));
      let v2 = vertex(corner - IVec3::new(0, 1, 0));
      let v3 = vertex(corner);
      let v4 = vertex(corner - IVec3::new(1, 0, 0));
      push_quad(out, v1, v2, v3, v4, !end);
    }
  }

  if corner.x > 0 && corner.z > 0 {
    let start = solid(corner);
    let end = solid(corner + IVec3::Y);
    if start != end {
      let v1 = vertex(corner - IVec3::new(1, 0, 1));
      let v2 = vertex(corner - IVec3::new(0, 0, 1));
      let v3 = vertex(corner);
      let v4 = vertex(corner - IVec3::new(1, 0, 0));
      push_quad(out, v1, v2, v3, v4, !start);
    }
  }

  if corner.y > 0 && corner.z > 0 {
    let start = solid(corner);
    let end = solid(corner + IVec3::X);
    if start != end {
      let v1 = vertex(corner - IVec3::new(0, 1, 1));
      let v2 = vertex(corner - IVec3::new(0, 0, 1));
      let v3 = vertex(corner);
      let v4 = vertex(corner - IVec3::new(0, 1, 0));
      push_quad(out, v1, v2, v3, v4, !end);
    }
  }
}

/// Split a quad into two triangles, flipping the winding for edges that
/// cross the surface in the opposite direction.
fn push_quad(out: &mut Vec<Triangle>, v1: Vec3, v2: Vec3, v3: Vec3, v4: Vec3, forward: bool) {
  if forward {
    out.push(Triangle::new(v1, v2, v3));
    out.push(Triangle::new(v1, v3, v4));
  } else {
    out.push(Triangle::new(v4, v3, v1));
    out.push(Triangle::new(v3, v2, v1));
  }
}

#[cfg(test)]
#[path = "dual_contouring_test.rs"]
mod dual_contouring_test;
