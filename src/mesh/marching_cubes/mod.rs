//! Marching Cubes extractor with topological disambiguation.
//!
//! Each cell is classified into one of 15 topological cases by its corner
//! sign mask. Ambiguous cases resolve face saddles with an integer test on
//! the face corner products and interior saddles by slicing the cell at
//! the reference-edge crossing, then pick the matching precomputed tiling.
//! A synthetic centre vertex (tiling index 12) anchors tilings whose
//! surface passes through the cell interior.

mod tables;

use glam::{IVec3, Vec3};

use super::{midpoint_crossing, FieldSampler};
use crate::types::Triangle;

use tables::{
  AMB_FACES_10, AMB_FACES_12, AMB_FACES_13, AMB_FACES_3, AMB_FACES_6, AMB_FACES_7, CASES,
  CORNER_OFFSETS, EDGE_CORNERS, FACE_CORNERS, INTERIOR_EDGE_12, INTERIOR_EDGE_13,
  INTERIOR_EDGE_6, INTERIOR_EDGE_7, INTERIOR_S_10, INTERIOR_S_12, INTERIOR_S_13, INTERIOR_S_4,
  INTERIOR_S_6, INTERIOR_S_7, INTERIOR_SLICE, TILING_1, TILING_10, TILING_11, TILING_12,
  TILING_13, TILING_14, TILING_2, TILING_3, TILING_4, TILING_5, TILING_6, TILING_7, TILING_8,
  TILING_9, TUNNEL_10, TUNNEL_12, TUNNEL_13, TUNNEL_4, TUNNEL_6, TUNNEL_7,
};

/// Walk every cell of the grid and emit the tiling for its case.
pub fn extract(sampler: &FieldSampler) -> Vec<Triangle> {
  let dims = sampler.dims();
  let mut triangles = Vec::new();
  for x in 0..dims.x - 1 {
    for y in 0..dims.y - 1 {
      for z in 0..dims.z - 1 {
        process_cell(sampler, IVec3::new(x, y, z), &mut triangles);
      }
    }
  }
  triangles
}

fn process_cell(sampler: &FieldSampler, cell: IVec3, out: &mut Vec<Triangle>) {
  let mut values = [0i32; 8];
  let mut positions = [Vec3::ZERO; 8];
  for (i, off) in CORNER_OFFSETS.iter().enumerate() {
    let corner = cell + IVec3::new(off[0], off[1], off[2]);
    values[i] = sampler.value(corner);
    positions[i] = corner.as_vec3();
  }

  let mut mask = 0usize;
  for (i, &v) in values.iter().enumerate() {
    if v > 0 {
      mask |= 1 << i;
    }
  }
  if mask == 0 || mask == 0xFF {
    return;
  }

  let tiling = select_tiling(mask, &values);
  emit_triangles(tiling, &positions, &values, out);
}

/// Resolve the (case, config) pair and any face/interior ambiguity down to
/// a single tiling row.
fn select_tiling(mask: usize, values: &[i32; 8]) -> &'static [i8] {
  let case = CASES[mask][0];
  let config = CASES[mask][1] as usize;
  match case {
    1 => &TILING_1[config],
    2 => &TILING_2[config],
    3 => {
      let vec = face_vector(values, &[AMB_FACES_3[config]]);
      &TILING_3[config][vec]
    }
    4 => resolve_interior(
      &TILING_4[config],
      &TUNNEL_4[config],
      values,
      case,
      INTERIOR_S_4[config],
      -1,
    ),
    5 => &TILING_5[config],
    6 => {
      let vec = face_vector(values, &[AMB_FACES_6[config]]);
      resolve_interior(
        &TILING_6[config][vec],
        &TUNNEL_6[config][vec],
        values,
        case,
        INTERIOR_S_6[config],
        INTERIOR_EDGE_6[config],
      )
    }
    7 => {
      let vec = face_vector(values, &AMB_FACES_7[config]);
      resolve_interior(
        &TILING_7[config][vec],
        &TUNNEL_7[config][vec],
        values,
        case,
        INTERIOR_S_7[config],
        INTERIOR_EDGE_7[config],
      )
    }
    8 => &TILING_8[config],
    9 => &TILING_9[config],
    10 => {
      let vec = face_vector(values, &AMB_FACES_10[config]);
      resolve_interior(
        &TILING_10[config][vec],
        &TUNNEL_10[config][vec],
        values,
        case,
        INTERIOR_S_10[config],
        -1,
      )
    }
    11 => &TILING_11[config],
    12 => {
      let vec = face_vector(values, &AMB_FACES_12[config]);
      resolve_interior(
        &TILING_12[config][vec],
        &TUNNEL_12[config][vec],
        values,
        case,
        INTERIOR_S_12[config],
        INTERIOR_EDGE_12[config],
      )
    }
    13 => {
      let vec = face_vector(values, &AMB_FACES_13[config]);
      resolve_interior(
        &TILING_13[config][vec],
        &TUNNEL_13[config][vec],
        values,
        case,
        INTERIOR_S_13[config],
        INTERIOR_EDGE_13[config],
      )
    }
    14 => &TILING_14[config],
    _ => &[],
  }
}

/// Outcome bits of the ambiguous-face tests, low bit first.
fn face_vector(values: &[i32; 8], faces: &[i8]) -> usize {
  let mut vec = 0;
  for (i, &face) in faces.iter().enumerate() {
    if test_face(values, face) {
      vec |= 1 << i;
    }
  }
  vec
}

/// Saddle test on an ambiguous face: does the positive diagonal connect?
///
/// Both cells sharing the face see the same four corner values, so the
/// decision is identical on either side and seams stay closed.
fn test_face(values: &[i32; 8], face: i8) -> bool {
  let [a, b, c, d] = FACE_CORNERS[(face - 1) as usize];
  let (a, b, c, d) = (values[a], values[b], values[c], values[d]);
  if a > 0 {
    a * c - b * d > 0
  } else {
    b * d - a * c > 0
  }
}

/// Pick the capped tiling or, when the interior test says the two surface
/// sheets join through the cell, the centre-fanned tunnel tiling. A
/// leading -1 marks vectors with no tunnel alternative.
fn resolve_interior(
  capped: &'static [i8],
  tunnel: &'static [i8],
  values: &[i32; 8],
  case: i8,
  s: i8,
  edge: i8,
) -> &'static [i8] {
  if tunnel.first().copied().unwrap_or(-1) < 0 {
    return capped;
  }
  if test_interior(values, case, s, edge) {
    capped
  } else {
    tunnel
  }
}

/// Interior saddle test.
///
/// Cases 4 and 10 slice along the main diagonal axis at the extremum of
/// the quadratic; the remaining cases slice the three edges parallel to
/// the reference edge at its crossing parameter. The sign pattern of the
/// four sliced values classifies the interior; `s` carries the
/// orientation of the configuration so complementary configurations read
/// the pattern mirrored. Arithmetic stays in integers, matching the
/// banded field.
fn test_interior(values: &[i32; 8], case: i8, s: i8, edge: i8) -> bool {
  let v = values;
  let (at, bt, ct, dt);
  match case {
    4 | 10 => {
      let mut a = (v[4] - v[0]) * (v[6] - v[2]) - (v[7] - v[3]) * (v[5] - v[1]);
      let b = v[2] * (v[4] - v[0]) + v[0] * (v[6] - v[2])
        - v[1] * (v[7] - v[3])
        - v[3] * (v[5] - v[1]);
      if a == 0 {
        a = 1;
      }
      let t = -b / (2 * a);
      if !(0..=1).contains(&t) {
        return s > 0;
      }
      at = v[0] + (v[4] - v[0]) * t;
      bt = v[3] + (v[7] - v[3]) * t;
      ct = v[2] + (v[6] - v[2]) * t;
      dt = v[1] + (v[5] - v[1]) * t;
    }
    _ => {
      let row = INTERIOR_SLICE[edge as usize];
      let mut a = v[row[0]] - v[row[1]];
      if a == 0 {
        a = 1;
      }
      let t = v[row[0]] / a;
      at = 0;
      bt = v[row[2]] + (v[row[3]] - v[row[2]]) * t;
      ct = v[row[4]] + (v[row[5]] - v[row[4]]) * t;
      dt = v[row[6]] + (v[row[7]] - v[row[6]]) * t;
    }
  }

  let mut pattern = 0;
  if at >= 0 {
    pattern += 1;
  }
  if bt >= 0 {
    pattern += 2;
  }
  if ct >= 0 {
    pattern += 4;
  }
  if dt >= 0 {
    pattern += 8;
  }
  match pattern {
    0..=4 | 6 | 8 | 9 | 12 => s > 0,
    5 => {
      if at * ct - bt * dt <= 0 {
        s > 0
      } else {
        s < 0
      }
    }
    10 => {
      if at * ct - bt * dt > 0 {
        s > 0
      } else {
        s < 0
      }
    }
    _ => s < 0,
  }
}

fn emit_triangles(
  tiling: &[i8],
  positions: &[Vec3; 8],
  values: &[i32; 8],
  out: &mut Vec<Triangle>,
) {
  if tiling.is_empty() || tiling[0] < 0 {
    return;
  }

  // Average of all 12 edge interpolations, crossing or not.
  let mut centre = Vec3::ZERO;
  for pair in EDGE_CORNERS {
    centre += edge_point(pair, positions, values);
  }
  centre /= 12.0;

  let vertex = |index: i8| -> Vec3 {
    if index == 12 {
      centre
    } else {
      edge_point(EDGE_CORNERS[index as usize], positions, values)
    }
  };

  for tri in tiling.chunks_exact(3) {
    if tri[0] < 0 {
      break;
    }
    let v1 = vertex(tri[0]);
    let v2 = vertex(tri[1]);
    let v3 = vertex(tri[2]);
    // Tilings store the outward orientation; the cave is viewed from the
    // air side, so wind the triangle inward.
    out.push(Triangle {
      a: v3,
      b: v2,
      c: v1,
    });
  }
}

#[inline]
fn edge_point(pair: [usize; 2], positions: &[Vec3; 8], values: &[i32; 8]) -> Vec3 {
  midpoint_crossing(
    positions[pair[0]],
    values[pair[0]],
    positions[pair[1]],
    values[pair[1]],
  )
}

#[cfg(test)]
#[path = "marching_cubes_test.rs"]
mod marching_cubes_test;
