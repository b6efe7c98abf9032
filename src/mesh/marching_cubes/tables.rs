//! Lookup tables for the disambiguated (MC33) Marching Cubes cases.
//!
//! Corner numbering walks the bottom face 0-1-2-3 counterclockwise
//! (0 at the cell origin, 1 at +x, 2 at +x+z, 3 at +z) and repeats on the
//! top face as 4-7. Edges 0-3 ring the bottom face, 4-7 the top, 8-11 the
//! verticals. Index 12 in a tiling refers to the synthetic centre vertex.
//!
//! `CASES` maps the 8-bit corner mask to a topological case and a
//! configuration index into the per-case tables. Ambiguous cases carry one
//! tiling row per outcome vector of their face tests: bit `i` of the row
//! index is the result of testing face `AMB_FACES_N[config][i]`. Cases
//! with an interior ambiguity additionally carry a `TUNNEL_N` row per
//! vector holding the interior-connected tiling (a leading -1 marks
//! vectors with no interior alternative); `INTERIOR_S_N` gives the signed
//! orientation code fed to the interior test and `INTERIOR_EDGE_N` the
//! cube edge the test slices along. Rows are -1 padded. The case split
//! follows Lewiner, Lopes, Vieira and Tavares, "Efficient implementation
//! of Marching Cubes' cases with topological guarantees" (JGT 2003).

/// Corner pairs for the 12 cube edges.
pub static EDGE_CORNERS: [[usize; 2]; 12] = [
  [0, 1],
  [1, 2],
  [2, 3],
  [3, 0],
  [4, 5],
  [5, 6],
  [6, 7],
  [7, 4],
  [0, 4],
  [1, 5],
  [2, 6],
  [3, 7],
];

/// Corner quadruples (A, B, C, D) ringing each cube face, indexed by the
/// 1-based face codes used in the test tables.
pub static FACE_CORNERS: [[usize; 4]; 6] = [
  [0, 4, 5, 1],
  [1, 5, 6, 2],
  [2, 6, 7, 3],
  [3, 7, 4, 0],
  [0, 3, 2, 1],
  [4, 7, 6, 5],
];

/// Case and configuration index for each of the 256 corner masks.
#[rustfmt::skip]
pub static CASES: [[i8; 2]; 256] = [
  [ 0, -1], [ 1,  0], [ 1,  1], [ 2,  0], [ 1,  2], [ 3,  0], [ 2,  1], [ 5,  0],
  [ 1,  3], [ 2,  2], [ 3,  1], [ 5,  1], [ 2,  3], [ 5,  2], [ 5,  3], [ 8,  0],
  [ 1,  4], [ 2,  4], [ 3,  2], [ 5,  4], [ 4,  0], [ 6,  0], [ 6,  1], [11,  0],
  [ 3,  3], [ 5,  5], [ 7,  0], [ 9,  0], [ 6,  2], [14,  0], [12,  0], [ 5,  6],
  [ 1,  5], [ 3,  4], [ 2,  5], [ 5,  7], [ 3,  5], [ 7,  1], [ 5,  8], [ 9,  1],
  [ 4,  1], [ 6,  3], [ 6,  4], [14,  1], [ 6,  5], [12,  1], [11,  1], [ 5,  9],
  [ 2,  6], [ 5, 10], [ 5, 11], [ 8,  1], [ 6,  6], [12,  2], [14,  2], [ 5, 12],
  [ 6,  7], [11,  2], [12,  3], [ 5, 13], [10,  0], [ 6,  8], [ 6,  9], [ 2,  7],
  [ 1,  6], [ 4,  2], [ 3,  6], [ 6, 10], [ 2,  8], [ 6, 11], [ 5, 14], [14,  3],
  [ 3,  7], [ 6, 12], [ 7,  2], [12,  4], [ 5, 15], [11,  3], [ 9,  2], [ 5, 16],
  [ 3,  8], [ 6, 13], [ 7,  3], [12,  5], [ 6, 14], [10,  1], [12,  6], [ 6, 15],
  [ 7,  4], [12,  7], [13,  0], [ 7,  5], [12,  8], [ 6, 16], [ 7,  6], [ 3,  9],
  [ 2,  9], [ 6, 17], [ 5, 17], [11,  4], [ 5, 18], [12,  9], [ 8,  2], [ 5, 19],
  [ 6, 18], [10,  2], [12, 10], [ 6, 19], [14,  4], [ 6, 20], [ 5, 20], [ 2, 10],
  [ 5, 21], [14,  5], [ 9,  3], [ 5, 22], [11,  5], [ 6, 21], [ 5, 23], [ 2, 11],
  [12, 11], [ 6, 22], [ 7,  7], [ 3, 10], [ 6, 23], [ 4,  3], [ 3, 11], [ 1,  7],
  [ 1,  8], [ 3, 12], [ 4,  4], [ 6, 24], [ 3, 13], [ 7,  8], [ 6, 25], [12, 12],
  [ 2, 12], [ 5, 24], [ 6, 26], [11,  6], [ 5, 25], [ 9,  4], [14,  6], [ 5, 26],
  [ 2, 13], [ 5, 27], [ 6, 27], [14,  7], [ 6, 28], [12, 13], [10,  3], [ 6, 29],
  [ 5, 28], [ 8,  3], [12, 14], [ 5, 29], [11,  7], [ 5, 30], [ 6, 30], [ 2, 14],
  [ 3, 14], [ 7,  9], [ 6, 31], [12, 15], [ 7, 10], [13,  1], [12, 16], [ 7, 11],
  [ 6, 32], [12, 17], [10,  4], [ 6, 33], [12, 18], [ 7, 12], [ 6, 34], [ 3, 15],
  [ 5, 31], [ 9,  5], [11,  8], [ 5, 32], [12, 19], [ 7, 13], [ 6, 35], [ 3, 16],
  [14,  8], [ 5, 33], [ 6, 36], [ 2, 15], [ 6, 37], [ 3, 17], [ 4,  5], [ 1,  9],
  [ 2, 16], [ 6, 38], [ 6, 39], [10,  5], [ 5, 34], [12, 20], [11,  9], [ 6, 40],
  [ 5, 35], [14,  9], [12, 21], [ 6, 41], [ 8,  4], [ 5, 36], [ 5, 37], [ 2, 17],
  [ 5, 38], [11, 10], [12, 22], [ 6, 42], [14, 10], [ 6, 43], [ 6, 44], [ 4,  6],
  [ 9,  6], [ 5, 39], [ 7, 14], [ 3, 18], [ 5, 40], [ 2, 18], [ 3, 19], [ 1, 10],
  [ 5, 41], [12, 23], [14, 11], [ 6, 45], [ 9,  7], [ 7, 15], [ 5, 42], [ 3, 20],
  [11, 11], [ 6, 46], [ 6, 47], [ 4,  7], [ 5, 43], [ 3, 21], [ 2, 19], [ 1, 11],
  [ 8,  5], [ 5, 44], [ 5, 45], [ 2, 20], [ 5, 46], [ 3, 22], [ 2, 21], [ 1, 12],
  [ 5, 47], [ 2, 22], [ 3, 23], [ 1, 13], [ 2, 23], [ 1, 14], [ 1, 15], [ 0, -1],
];

#[rustfmt::skip]
pub static TILING_1: [[i8; 3]; 16] = [
  [  8,   3,   0],
  [  0,   1,   9],
  [  1,   2,  10],
  [  3,  11,   2],
  [  8,   4,   7],
  [  9,   5,   4],
  [ 10,   6,   5],
  [ 11,   6,   7],
  [ 11,   7,   6],
  [ 10,   5,   6],
  [  9,   4,   5],
  [  8,   7,   4],
  [  3,   2,  11],
  [  1,  10,   2],
  [  0,   9,   1],
  [  0,   3,   8],
];

#[rustfmt::skip]
pub static TILING_2: [[i8; 6]; 24] = [
  [  8,   1,   9,   8,   3,   1],
  [  0,  10,   9,   0,   2,  10],
  [  8,   2,   0,   8,  11,   2],
  [  3,  10,   1,   3,  11,  10],
  [  0,   7,   3,   0,   4,   7],
  [  0,   5,   4,   0,   1,   5],
  [  8,   5,   7,   8,   9,   5],
  [ 10,   7,  11,  10,   5,   7],
  [  1,   6,   5,   1,   2,   6],
  [  9,   6,   4,   9,  10,   6],
  [  8,   6,   4,   8,  11,   6],
  [  2,   7,   3,   2,   6,   7],
  [  2,   7,   6,   2,   3,   7],
  [  8,   6,  11,   8,   4,   6],
  [  9,   6,  10,   9,   4,   6],
  [  1,   6,   2,   1,   5,   6],
  [ 10,   7,   5,  10,  11,   7],
  [  8,   5,   9,   8,   7,   5],
  [  0,   5,   1,   0,   4,   5],
  [  0,   7,   4,   0,   3,   7],
  [  3,  10,  11,   3,   1,  10],
  [  0,  11,   8,   0,   2,  11],
  [  0,  10,   2,   0,   9,  10],
  [  8,   1,   3,   8,   9,   1],
];

#[rustfmt::skip]
pub static TILING_3: [[[i8; 18]; 2]; 24] = [
  [
    [  0,   8,   3,   1,   2,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0],
  ],
  [
    [  0,   1,   9,   2,   3,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0],
  ],
  [
    [  0,   1,   9,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0],
  ],
  [
    [  2,   3,  11,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2],
  ],
  [
    [  0,   8,   3,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0],
  ],
  [
    [  1,   2,  10,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1],
  ],
  [
    [  0,   1,   9,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0],
  ],
  [
    [  2,   3,  11,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2],
  ],
  [
    [  4,   7,   8,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4],
  ],
  [
    [  4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4],
    [  4,   5,   9,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1],
    [  1,  10,   2,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,   3,   8,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   8,   3,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0],
  ],
  [
    [  1,   2,  10,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1],
  ],
  [
    [  4,   9,   5,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4],
  ],
  [
    [  4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4],
    [  4,   8,   7,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2],
    [  2,  11,   3,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,   9,   1,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1],
    [  1,  10,   2,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0],
    [  0,   3,   8,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2],
    [  2,  11,   3,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,   9,   1,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0],
    [  0,   9,   1,   2,  11,   3,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,   3,   8,   1,  10,   2,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
];

#[rustfmt::skip]
pub static AMB_FACES_3: [i8; 24] = [5, 5, 1, 4, 1, 2, 2, 3, 6, 6, 3, 4, 4, 3, 6, 6, 3, 2, 2, 1, 4, 1, 5, 5];

#[rustfmt::skip]
pub static TILING_4: [[i8; 6]; 8] = [
  [  1,   2,  10,   4,   7,   8],
  [  2,   3,  11,   4,   9,   5],
  [  0,   8,   3,   5,  10,   6],
  [  0,   9,   1,   6,   7,  11],
  [  0,   1,   9,   6,  11,   7],
  [  0,   3,   8,   5,   6,  10],
  [  2,  11,   3,   4,   5,   9],
  [  1,  10,   2,   4,   8,   7],
];

#[rustfmt::skip]
pub static TUNNEL_4: [[i8; 18]; 8] = [
  [  1,  12,  10,  10,  12,   2,   2,  12,   1,   4,  12,   8,   8,  12,   7,   7,  12,   4],
  [  2,  12,  11,  11,  12,   3,   3,  12,   2,   4,  12,   5,   5,  12,   9,   9,  12,   4],
  [  0,  12,   3,   3,  12,   8,   8,  12,   0,   5,  12,   6,   6,  12,  10,  10,  12,   5],
  [  0,  12,   1,   1,  12,   9,   9,  12,   0,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  [  0,  12,   9,   9,  12,   1,   1,  12,   0,   6,  12,   7,   7,  12,  11,  11,  12,   6],
  [  0,  12,   8,   8,  12,   3,   3,  12,   0,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  [  2,  12,   3,   3,  12,  11,  11,  12,   2,   4,  12,   9,   9,  12,   5,   5,  12,   4],
  [  1,  12,   2,   2,  12,  10,  10,  12,   1,   4,  12,   7,   7,  12,   8,   8,  12,   4],
];

pub static INTERIOR_S_4: [i8; 8] = [ 7,  7,  7, -7,  7, -7, -7, -7];

#[rustfmt::skip]
pub static TILING_5: [[i8; 9]; 48] = [
  [  2,   8,   3,   2,   9,   8,   2,  10,   9],
  [  1,  11,   2,   1,   8,  11,   1,   9,   8],
  [  0,  10,   1,   0,  11,  10,   0,   8,  11],
  [  0,  10,   9,   0,  11,  10,   0,   3,  11],
  [  1,   7,   3,   1,   4,   7,   1,   9,   4],
  [  0,  11,   2,   0,   7,  11,   0,   4,   7],
  [  4,  10,   9,   4,  11,  10,   4,   7,  11],
  [  1,   8,   3,   1,   4,   8,   1,   5,   4],
  [  0,   5,   4,   0,  10,   5,   0,   2,  10],
  [  4,  10,   5,   4,  11,  10,   4,   8,  11],
  [  0,   7,   3,   0,   5,   7,   0,   9,   5],
  [  0,   7,   8,   0,   5,   7,   0,   1,   5],
  [  2,   7,   3,   2,   5,   7,   2,  10,   5],
  [  1,  11,   2,   1,   7,  11,   1,   5,   7],
  [  0,   5,   9,   0,   6,   5,   0,   2,   6],
  [  1,   6,   5,   1,  11,   6,   1,   3,  11],
  [  5,  11,   6,   5,   8,  11,   5,   9,   8],
  [  0,   6,   4,   0,  10,   6,   0,   1,  10],
  [  1,   4,   9,   1,   6,   4,   1,   2,   6],
  [  2,   8,   3,   2,   4,   8,   2,   6,   4],
  [  0,   6,   4,   0,  11,   6,   0,   3,  11],
  [  6,   9,  10,   6,   8,   9,   6,   7,   8],
  [  1,   7,   3,   1,   6,   7,   1,  10,   6],
  [  0,   7,   8,   0,   6,   7,   0,   2,   6],
  [  0,   6,   2,   0,   7,   6,   0,   8,   7],
  [  1,   6,  10,   1,   7,   6,   1,   3,   7],
  [  6,   8,   7,   6,   9,   8,   6,  10,   9],
  [  0,  11,   3,   0,   6,  11,   0,   4,   6],
  [  2,   4,   6,   2,   8,   4,   2,   3,   8],
  [  1,   6,   2,   1,   4,   6,   1,   9,   4],
  [  0,  10,   1,   0,   6,  10,   0,   4,   6],
  [  5,   8,   9,   5,  11,   8,   5,   6,  11],
  [  1,  11,   3,   1,   6,  11,   1,   5,   6],
  [  0,   6,   2,   0,   5,   6,   0,   9,   5],
  [  1,   7,   5,   1,  11,   7,   1,   2,  11],
  [  2,   5,  10,   2,   7,   5,   2,   3,   7],
  [  0,   5,   1,   0,   7,   5,   0,   8,   7],
  [  0,   5,   9,   0,   7,   5,   0,   3,   7],
  [  4,  11,   8,   4,  10,  11,   4,   5,  10],
  [  0,  10,   2,   0,   5,  10,   0,   4,   5],
  [  1,   4,   5,   1,   8,   4,   1,   3,   8],
  [  4,  11,   7,   4,  10,  11,   4,   9,  10],
  [  0,   7,   4,   0,  11,   7,   0,   2,  11],
  [  1,   4,   9,   1,   7,   4,   1,   3,   7],
  [  0,  11,   3,   0,  10,  11,   0,   9,  10],
  [  0,  11,   8,   0,  10,  11,   0,   1,  10],
  [  1,   8,   9,   1,  11,   8,   1,   2,  11],
  [  2,   9,  10,   2,   8,   9,   2,   3,   8],
];

#[rustfmt::skip]
pub static TILING_6: [[[i8; 21]; 2]; 48] = [
  [
    [  0,   7,   3,   0,   4,   7,   1,   2,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   7,   7,  12,   4,   4,  12,   0],
  ],
  [
    [  0,  10,   9,   0,   2,  10,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,  10,  10,  12,   2,   2,  12,   0],
  ],
  [
    [  1,  11,  10,   1,   3,  11,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,  10,  10,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   1],
  ],
  [
    [  0,  11,   2,   0,   8,  11,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   2,   2,  12,  11,  11,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0],
  ],
  [
    [  0,   5,   4,   0,   1,   5,   2,   3,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   4,   4,  12,   5,   5,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0],
  ],
  [
    [  1,  11,  10,   1,   3,  11,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,  11,  11,  12,   3,   3,  12,   1],
  ],
  [
    [  1,   2,  10,   5,   8,   9,   5,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   8,   8,  12,   7,   7,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1],
  ],
  [
    [  2,   3,  11,   5,   8,   9,   5,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  11,  11,  12,   7,   7,  12,   5,   5,  12,   9,   9,  12,   8,   8,  12,   3,   3,  12,   2],
  ],
  [
    [  0,  12,   1,   1,  12,  10,  10,  12,  11,  11,  12,   7,   7,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,   9,   1,   5,  11,  10,   5,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   8,   8,  12,   7,   7,  12,   5,   5,  12,  10,  10,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,   3,   8,   5,  11,  10,   5,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,   8,   3,   1,   9,   8,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   3,   3,  12,   8,   8,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1],
  ],
  [
    [  0,   8,   3,   1,   6,   5,   1,   2,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   5,   5,  12,   6,   6,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0],
  ],
  [
    [  0,  11,   2,   0,   8,  11,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   8,   8,  12,   0],
  ],
  [
    [  0,   7,   3,   0,   4,   7,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   0],
  ],
  [
    [  1,   6,   5,   1,   2,   6,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,   2,   2,  12,   1],
  ],
  [
    [  2,  12,   3,   3,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,   2],
    [  2,   7,   3,   2,   6,   7,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   1,   1,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   0],
    [  0,   5,   1,   0,   4,   5,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   8,   3,   4,  10,   6,   4,   9,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   6,   6,  12,  10,  10,  12,   9,   9,  12,   0],
  ],
  [
    [  2,   3,  11,   4,  10,   6,   4,   9,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  10,  10,  12,   9,   9,  12,   4,   4,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2],
  ],
  [
    [  1,  12,   2,   2,  12,  11,  11,  12,   8,   8,  12,   4,   4,  12,   6,   6,  12,  10,  10,  12,   1],
    [  1,  10,   2,   4,  11,   6,   4,   8,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   6,   6,  12,  11,  11,  12,   8,   8,  12,   0],
    [  0,   9,   1,   4,  11,   6,   4,   8,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   3,   3,  12,   7,   7,  12,   6,   6,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0],
    [  0,   9,   1,   2,   7,   3,   2,   6,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   9,   9,  12,   0],
    [  0,  10,   2,   0,   9,  10,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,   9,   9,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   1],
    [  1,   8,   9,   1,   3,   8,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,   8,   3,   1,   9,   8,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   9,   9,  12,   1],
  ],
  [
    [  0,  10,   9,   0,   2,  10,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   0],
  ],
  [
    [  0,   1,   9,   2,   7,   6,   2,   3,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,   6,   6,  12,   7,   7,  12,   3,   3,  12,   0],
  ],
  [
    [  0,   1,   9,   4,  11,   8,   4,   6,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,  11,  11,  12,   6,   6,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0],
  ],
  [
    [  1,   2,  10,   4,  11,   8,   4,   6,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,  10,  10,  12,   6,   6,  12,   4,   4,  12,   8,   8,  12,  11,  11,  12,   2,   2,  12,   1],
  ],
  [
    [  2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   4,   4,  12,   9,   9,  12,  10,  10,  12,   2],
    [  2,  11,   3,   4,  10,   9,   4,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   9,   9,  12,  10,  10,  12,   6,   6,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0],
    [  0,   3,   8,   4,  10,   9,   4,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   5,   4,   0,   1,   5,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   1,   1,  12,   0],
  ],
  [
    [  2,   7,   6,   2,   3,   7,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   3,   3,  12,   2],
  ],
  [
    [  1,  12,   2,   2,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   1],
    [  1,   6,   2,   1,   5,   6,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   3,   3,  12,   0],
    [  0,   7,   4,   0,   3,   7,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   8,   8,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   0],
    [  0,  11,   8,   0,   2,  11,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,   6,   6,  12,   5,   5,  12,   1,   1,  12,   0],
    [  0,   3,   8,   1,   6,   2,   1,   5,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   8,   8,  12,   3,   3,  12,   1],
    [  1,   8,   9,   1,   3,   8,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   8,   3,   5,  11,   7,   5,  10,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,  10,  10,  12,   5,   5,  12,   7,   7,  12,   8,   8,  12,   0],
  ],
  [
    [  0,   1,   9,   5,  11,   7,   5,  10,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   7,   7,  12,  11,  11,  12,  10,  10,  12,   1,   1,  12,   0],
  ],
  [
    [  2,  12,   3,   3,  12,   8,   8,  12,   9,   9,  12,   5,   5,  12,   7,   7,  12,  11,  11,  12,   2],
    [  2,  11,   3,   5,   8,   7,   5,   9,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   7,   7,  12,   8,   8,  12,   9,   9,  12,   1],
    [  1,  10,   2,   5,   8,   7,   5,   9,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,   3,   3,  12,  11,  11,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1],
    [  1,  11,   3,   1,  10,  11,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   5,   5,  12,   4,   4,  12,   0],
    [  0,   5,   1,   0,   4,   5,   2,  11,   3,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,  11,  11,  12,   2,   2,  12,   0],
    [  0,  11,   8,   0,   2,  11,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,  10,  10,  12,   1],
    [  1,  11,   3,   1,  10,  11,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   2,   2,  12,  10,  10,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  10,   2,   0,   9,  10,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   4,   4,  12,   7,   7,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,   7,   4,   0,   3,   7,   1,  10,   2,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
];

#[rustfmt::skip]
pub static TUNNEL_6: [[[i8; 21]; 2]; 48] = [
  [
    [  0,  12,   3,   3,  12,   7,   7,  12,   4,   4,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   9,   9,  12,  10,  10,  12,   2,   2,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,  10,  10,  12,  11,  11,  12,   3,   3,  12,   1,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   2,   2,  12,  11,  11,  12,   8,   8,  12,   0,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   4,   4,  12,   5,   5,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,  10,  10,  12,  11,  11,  12,   3,   3,  12,   1,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,  10,  10,  12,   2,   2,  12,   1,   5,  12,   9,   9,  12,   8,   8,  12,   7,   7,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  2,  12,  11,  11,  12,   3,   3,  12,   2,   5,  12,   9,   9,  12,   8,   8,  12,   7,   7,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   5,  12,  10,  10,  12,  11,  11,  12,   7,   7,  12,   5],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   5,  12,  10,  10,  12,  11,  11,  12,   7,   7,  12,   5],
  ],
  [
    [  1,  12,   3,   3,  12,   8,   8,  12,   9,   9,  12,   1,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,   5,   5,  12,   6,   6,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   2,   2,  12,  11,  11,  12,   8,   8,  12,   0,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   3,   3,  12,   7,   7,  12,   4,   4,  12,   0,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,   5,   5,  12,   6,   6,  12,   2,   2,  12,   1,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,   3,   3,  12,   7,   7,  12,   6,   6,  12,   2,   4,  12,   9,   9,  12,   5,   5,  12,   4],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   5,   5,  12,   4,   4,  12,   0,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  ],
  [
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   4,  12,   6,   6,  12,  10,  10,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  2,  12,  11,  11,  12,   3,   3,  12,   2,   4,  12,   6,   6,  12,  10,  10,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   2,   2,  12,  10,  10,  12,   1,   4,  12,   6,   6,  12,  11,  11,  12,   8,   8,  12,   4],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   4,  12,   6,   6,  12,  11,  11,  12,   8,   8,  12,   4],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,   7,   7,  12,   6,   6,  12,   2],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   2,   2,  12,  10,  10,  12,   9,   9,  12,   0,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   8,   8,  12,   3,   3,  12,   1,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  ],
  [
    [  1,  12,   3,   3,  12,   8,   8,  12,   9,   9,  12,   1,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   9,   9,  12,  10,  10,  12,   2,   2,  12,   0,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,   6,   6,  12,   7,   7,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   4,  12,   8,   8,  12,  11,  11,  12,   6,   6,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,  10,  10,  12,   2,   2,  12,   1,   4,  12,   8,   8,  12,  11,  11,  12,   6,   6,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,   3,   3,  12,  11,  11,  12,   2,   4,  12,   9,   9,  12,  10,  10,  12,   6,   6,  12,   4],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   4,  12,   9,   9,  12,  10,  10,  12,   6,   6,  12,   4],
  ],
  [
    [  0,  12,   4,   4,  12,   5,   5,  12,   1,   1,  12,   0,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  2,  12,   6,   6,  12,   7,   7,  12,   3,   3,  12,   2,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   2,   2,  12,   6,   6,  12,   5,   5,  12,   1,   4,  12,   7,   7,  12,   8,   8,  12,   4],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   4,   4,  12,   7,   7,  12,   3,   3,  12,   0,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,  11,  11,  12,   2,   2,  12,   0,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,   6,   6,  12,   5,   5,  12,   1],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   8,   8,  12,   3,   3,  12,   1,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  ],
  [
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   5,  12,   7,   7,  12,  11,  11,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   5,  12,   7,   7,  12,  11,  11,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,   3,   3,  12,  11,  11,  12,   2,   5,  12,   7,   7,  12,   8,   8,  12,   9,   9,  12,   5],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   2,   2,  12,  10,  10,  12,   1,   5,  12,   7,   7,  12,   8,   8,  12,   9,   9,  12,   5],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   3,   3,  12,  11,  11,  12,  10,  10,  12,   1,   4,  12,   9,   9,  12,   5,   5,  12,   4],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   5,   5,  12,   4,   4,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,  11,  11,  12,   2,   2,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   4],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   3,   3,  12,  11,  11,  12,  10,  10,  12,   1,   4,  12,   7,   7,  12,   8,   8,  12,   4],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   2,   2,  12,  10,  10,  12,   9,   9,  12,   0,   4,  12,   7,   7,  12,   8,   8,  12,   4],
  ],
  [
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   4,   4,  12,   7,   7,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1],
  ],
];

#[rustfmt::skip]
pub static AMB_FACES_6: [i8; 48] = [5, 1, 4, 1, 5, 2, 2, 4, 2, 4, 2, 5, 3, 6, 6, 6, 6, 1, 3, 3, 1, 5, 3, 4, 4, 3, 5, 1, 3, 3, 1, 6, 6, 6, 6, 3, 5, 2, 4, 2, 4, 2, 2, 5, 1, 4, 1, 5];

pub static INTERIOR_S_6: [i8; 48] = [ 7,  7,  7,  7,  7,  7,  7,  7, -7, -7,  7,  7,  7,  7,  7, -7, -7,  7,  7, -7, -7, -7, -7, -7,  7,  7,  7,  7,  7, -7, -7,  7,  7, -7, -7, -7, -7, -7,  7,  7, -7, -7, -7, -7, -7, -7, -7, -7];
pub static INTERIOR_EDGE_6: [i8; 48] = [ 1,  4,  4,  4,  2,  4,  1,  2,  0,  0,  5,  0,  5,  5,  4,  4,  6,  0,  2,  1,  0,  0,  6,  6,  6,  6,  0,  0,  1,  2,  0,  6,  4,  4,  5,  5,  0,  5,  0,  0,  2,  1,  4,  2,  4,  4,  4,  1];

#[rustfmt::skip]
pub static TILING_7: [[[i8; 27]; 8]; 16] = [
  [
    [  0,   1,   9,   2,   3,  11,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   2,   3,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   1,   9,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0],
    [  0,   3,   8,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   8,   3,   1,   2,  10,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   1,   2,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   8,   3,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0],
    [  0,   9,   1,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   1,   9,   2,   3,  11,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,   3,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   1,   9,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  10,   2,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   1,   9,   4,   7,   8,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,   1,   9,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  2,   3,  11,   4,   7,   8,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2],
    [  2,   3,  11,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2],
    [  2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2],
    [  2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1],
    [  1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1],
    [  1,  10,   2,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1],
    [  1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  10,   2,   4,   5,   9,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0],
    [  0,   3,   8,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   3,   8,   4,   5,   9,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,   3,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  10,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   3,   8,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   3,   8,   1,  10,   2,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   8,   3,   1,   2,  10,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   8,   3,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   1,   2,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   2,  11,   3,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   8,   3,   4,   9,   5,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,   8,   3,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,   2,  10,   4,   9,   5,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1],
    [  1,   2,  10,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1],
    [  1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1],
    [  1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2],
    [  2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2],
    [  2,  11,   3,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2],
    [  2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  11,   3,   4,   8,   7,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,   9,   1,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   9,   1,   4,   8,   7,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   1,   2,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,   9,   1,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   2,  11,   3,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   9,   1,   2,  11,   3,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   1,   9,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0],
    [  0,   3,   8,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   1,  10,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   3,   8,   1,  10,   2,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   8,   3,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0],
    [  0,   9,   1,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   2,  11,   3,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   9,   1,   2,  11,   3,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
];

#[rustfmt::skip]
pub static TUNNEL_7: [[[i8; 27]; 8]; 16] = [
  [
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2],
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1],
  ],
  [
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2],
  ],
  [
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2],
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1],
  ],
  [
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   4,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   4],
  ],
  [
    [  2,  12,  11,  11,  12,   3,   3,  12,   2,   4,  12,   8,   8,  12,   7,   7,  12,   4,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [  2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [  2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  11,  11,  12,   3,   3,  12,   2,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  ],
  [
    [  1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   2,   2,  12,  10,  10,  12,   1,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   4,  12,   9,   9,  12,   5,   5,  12,   4],
    [  1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   6,  12,  11,  11,  12,   7,   7,  12,   6],
    [  1,  12,   2,   2,  12,  10,  10,  12,   1,   4,  12,   9,   9,  12,   5,   5,  12,   4,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  ],
  [
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   4],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   6,  12,  11,  11,  12,   7,   7,  12,   6],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   4,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  ],
  [
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   6,  12,  11,  11,  12,   7,   7,  12,   6],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  ],
  [
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2],
  ],
  [
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   4,  12,   5,   5,  12,   9,   9,  12,   4,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   4,  12,   7,   7,  12,   8,   8,  12,   4],
  ],
  [
    [  1,  12,  10,  10,  12,   2,   2,  12,   1,   4,  12,   5,   5,  12,   9,   9,  12,   4,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,  10,  10,  12,   2,   2,  12,   1,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  ],
  [
    [  2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,   3,   3,  12,  11,  11,  12,   2,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   5,  12,  10,  10,  12,   6,   6,  12,   5],
    [  2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   4,  12,   7,   7,  12,   8,   8,  12,   4],
    [  2,  12,   3,   3,  12,  11,  11,  12,   2,   4,  12,   7,   7,  12,   8,   8,  12,   4,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  ],
  [
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   4,  12,   7,   7,  12,   8,   8,  12,   4],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   5,  12,  10,  10,  12,   6,   6,  12,   5],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   4,  12,   7,   7,  12,   8,   8,  12,   4,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  ],
  [
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   5,  12,  10,  10,  12,   6,   6,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  ],
  [
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1,   4,  12,   9,   9,  12,   5,   5,  12,   4],
  ],
  [
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   4,  12,   7,   7,  12,   8,   8,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2,   4,  12,   7,   7,  12,   8,   8,  12,   4],
  ],
];

#[rustfmt::skip]
pub static AMB_FACES_7: [[i8; 3]; 16] = [
  [1, 4, 5], [1, 2, 5], [2, 3, 5], [1, 2, 6], [3, 4, 6], [2, 3, 6], [1, 4, 6], [3, 4, 5],
  [3, 4, 5], [1, 4, 6], [2, 3, 6], [3, 4, 6], [1, 2, 6], [2, 3, 5], [1, 2, 5], [1, 4, 5],
];

pub static INTERIOR_S_7: [i8; 16] = [ 7,  7,  7,  7,  7, -7, -7, -7,  7,  7,  7, -7, -7, -7, -7, -7];
pub static INTERIOR_EDGE_7: [i8; 16] = [ 0,  0,  0,  0,  2,  1,  0,  0,  0,  0,  1,  2,  0,  0,  0,  0];

#[rustfmt::skip]
pub static TILING_8: [[i8; 6]; 6] = [
  [  8,  10,   9,   8,  11,  10],
  [  1,   7,   3,   1,   5,   7],
  [  0,   6,   4,   0,   2,   6],
  [  0,   6,   2,   0,   4,   6],
  [  1,   7,   5,   1,   3,   7],
  [  8,  10,  11,   8,   9,  10],
];

#[rustfmt::skip]
pub static TILING_9: [[i8; 18]; 8] = [
  [  1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1],
  [  2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2],
  [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0],
  [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0],
  [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0],
  [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0],
  [  2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2],
  [  1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1],
];

#[rustfmt::skip]
pub static TILING_10: [[[i8; 24]; 4]; 6] = [
  [
    [  1,  11,  10,   1,   3,  11,   5,   8,   9,   5,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   8,   8,  12,   7,   7,  12,   5,   5,  12,  10,  10,  12,  11,  11,  12,   3,   3,  12,   1],
    [  1,  12,  10,  10,  12,  11,  11,  12,   7,   7,  12,   5,   5,  12,   9,   9,  12,   8,   8,  12,   3,   3,  12,   1],
    [  1,   8,   9,   1,   3,   8,   5,  11,  10,   5,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   7,   3,   0,   4,   7,   1,   6,   5,   1,   2,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   5,   5,  12,   6,   6,  12,   2,   2,  12,   3,   3,  12,   7,   7,  12,   4,   4,  12,   0],
    [  0,  12,   3,   3,  12,   7,   7,  12,   6,   6,  12,   2,   2,  12,   1,   1,  12,   5,   5,  12,   4,   4,  12,   0],
    [  0,   5,   1,   0,   4,   5,   2,   7,   3,   2,   6,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  11,   2,   0,   8,  11,   4,  10,   6,   4,   9,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   2,   2,  12,  11,  11,  12,   8,   8,  12,   4,   4,  12,   6,   6,  12,  10,  10,  12,   9,   9,  12,   0],
    [  0,  12,   2,   2,  12,  10,  10,  12,   9,   9,  12,   4,   4,  12,   6,   6,  12,  11,  11,  12,   8,   8,  12,   0],
    [  0,  10,   2,   0,   9,  10,   4,  11,   6,   4,   8,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  10,   9,   0,   2,  10,   4,  11,   8,   4,   6,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,  11,  11,  12,   6,   6,  12,   4,   4,  12,   9,   9,  12,  10,  10,  12,   2,   2,  12,   0],
    [  0,  12,   9,   9,  12,  10,  10,  12,   6,   6,  12,   4,   4,  12,   8,   8,  12,  11,  11,  12,   2,   2,  12,   0],
    [  0,  11,   8,   0,   2,  11,   4,  10,   9,   4,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   5,   4,   0,   1,   5,   2,   7,   6,   2,   3,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   4,   4,  12,   5,   5,  12,   1,   1,  12,   2,   2,  12,   6,   6,  12,   7,   7,  12,   3,   3,  12,   0],
    [  0,  12,   4,   4,  12,   7,   7,  12,   3,   3,  12,   2,   2,  12,   6,   6,  12,   5,   5,  12,   1,   1,  12,   0],
    [  0,   7,   4,   0,   3,   7,   1,   6,   2,   1,   5,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,   8,   3,   1,   9,   8,   5,  11,   7,   5,  10,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   3,   3,  12,   8,   8,  12,   9,   9,  12,   5,   5,  12,   7,   7,  12,  11,  11,  12,  10,  10,  12,   1],
    [  1,  12,   3,   3,  12,  11,  11,  12,  10,  10,  12,   5,   5,  12,   7,   7,  12,   8,   8,  12,   9,   9,  12,   1],
    [  1,  11,   3,   1,  10,  11,   5,   8,   7,   5,   9,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
];

#[rustfmt::skip]
pub static TUNNEL_10: [[[i8; 24]; 4]; 6] = [
  [
    [  1,  12,  10,  10,  12,  11,  11,  12,   3,   3,  12,   1,   5,  12,   9,   9,  12,   8,   8,  12,   7,   7,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   8,   8,  12,   3,   3,  12,   1,   5,  12,  10,  10,  12,  11,  11,  12,   7,   7,  12,   5],
  ],
  [
    [  0,  12,   3,   3,  12,   7,   7,  12,   4,   4,  12,   0,   1,  12,   5,   5,  12,   6,   6,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   5,   5,  12,   4,   4,  12,   0,   2,  12,   3,   3,  12,   7,   7,  12,   6,   6,  12,   2],
  ],
  [
    [  0,  12,   2,   2,  12,  11,  11,  12,   8,   8,  12,   0,   4,  12,   6,   6,  12,  10,  10,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   2,   2,  12,  10,  10,  12,   9,   9,  12,   0,   4,  12,   6,   6,  12,  11,  11,  12,   8,   8,  12,   4],
  ],
  [
    [  0,  12,   9,   9,  12,  10,  10,  12,   2,   2,  12,   0,   4,  12,   8,   8,  12,  11,  11,  12,   6,   6,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,  11,  11,  12,   2,   2,  12,   0,   4,  12,   9,   9,  12,  10,  10,  12,   6,   6,  12,   4],
  ],
  [
    [  0,  12,   4,   4,  12,   5,   5,  12,   1,   1,  12,   0,   2,  12,   6,   6,  12,   7,   7,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   4,   4,  12,   7,   7,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,   6,   6,  12,   5,   5,  12,   1],
  ],
  [
    [  1,  12,   3,   3,  12,   8,   8,  12,   9,   9,  12,   1,   5,  12,   7,   7,  12,  11,  11,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   3,   3,  12,  11,  11,  12,  10,  10,  12,   1,   5,  12,   7,   7,  12,   8,   8,  12,   9,   9,  12,   5],
  ],
];

#[rustfmt::skip]
pub static AMB_FACES_10: [[i8; 2]; 6] = [
  [2, 4], [5, 6], [1, 3], [1, 3], [5, 6], [2, 4],
];

pub static INTERIOR_S_10: [i8; 6] = [ 7, -7,  7, -7,  7, -7];

#[rustfmt::skip]
pub static TILING_11: [[i8; 18]; 12] = [
  [  2,  12,   3,   3,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,  10,  10,  12,   2],
  [  0,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,  11,  11,  12,   3,   3,  12,   0],
  [  0,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   5,   5,  12,   9,   9,  12,   0],
  [  0,  12,   1,   1,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   8,   8,  12,   0],
  [  1,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   6,   6,  12,  10,  10,  12,   1],
  [  1,  12,   9,   9,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,   2,   2,  12,   1],
  [  1,  12,   2,   2,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   9,   9,  12,   1],
  [  1,  12,  10,  10,  12,   6,   6,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   1],
  [  0,  12,   8,   8,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   1,   1,  12,   0],
  [  0,  12,   9,   9,  12,   5,   5,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   0],
  [  0,  12,   3,   3,  12,  11,  11,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   0],
  [  2,  12,  10,  10,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   3,   3,  12,   2],
];

#[rustfmt::skip]
pub static TILING_12: [[[i8; 24]; 4]; 24] = [
  [
    [  0,  10,   9,   0,  11,  10,   0,   3,  11,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,  10,  10,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   9,   9,  12,  10,  10,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0],
    [  0,   3,   8,   4,  10,   9,   4,  11,  10,   4,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  10,   1,   0,  11,  10,   0,   8,  11,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,  11,  11,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,  11,  11,  12,   8,   8,  12,   0],
    [  0,   9,   1,   4,  10,   5,   4,  11,  10,   4,   8,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   7,   3,   0,   5,   7,   0,   9,   5,   1,   2,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   7,   7,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   7,   7,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,   9,   1,   2,   7,   3,   2,   5,   7,   2,  10,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   7,   8,   0,   5,   7,   0,   1,   5,   2,   3,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   5,   5,  12,   1,   1,  12,   0],
    [  0,  12,   8,   8,  12,   7,   7,  12,   5,   5,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,   3,   8,   1,  11,   2,   1,   7,  11,   1,   5,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,  11,   2,   1,   8,  11,   1,   9,   8,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   2,   2,  12,  11,  11,  12,   8,   8,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1],
    [  1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   8,   8,  12,   9,   9,  12,   1],
    [  1,  10,   2,   5,  11,   6,   5,   8,  11,   5,   9,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,   7,   3,   1,   4,   7,   1,   9,   4,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   3,   3,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1],
    [  1,  12,   3,   3,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1],
    [  1,   7,   3,   1,   6,   7,   1,  10,   6,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   5,   9,   0,   6,   5,   0,   2,   6,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,   2,   2,  12,   0],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,   2,   2,  12,   0],
    [  0,   7,   8,   0,   6,   7,   0,   2,   6,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  11,   2,   0,   7,  11,   0,   4,   7,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   0],
    [  0,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   0],
    [  0,  10,   2,   0,   5,  10,   0,   4,   5,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,   6,   5,   1,  11,   6,   1,   3,  11,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   1],
    [  1,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   1],
    [  1,   4,   5,   1,   8,   4,   1,   3,   8,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   8,   3,   1,   4,   9,   1,   6,   4,   1,   2,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   6,   6,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   6,   6,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0],
    [  0,   9,   1,   2,   8,   3,   2,   4,   8,   2,   6,   4,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   6,   4,   0,  10,   6,   0,   1,  10,   2,   3,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   4,   4,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,  12,   4,   4,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,   6,   4,   0,  11,   6,   0,   3,  11,   1,  10,   2,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  2,   3,  11,   6,   9,  10,   6,   8,   9,   6,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  10,  10,  12,   9,   9,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2],
    [  2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   9,   9,  12,   8,   8,  12,   3,   3,  12,   2],
    [  2,   9,  10,   2,   8,   9,   2,   3,   8,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  2,   8,   3,   2,   9,   8,   2,  10,   9,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,   3,   3,  12,   8,   8,  12,   9,   9,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2],
    [  2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   9,   9,  12,  10,  10,  12,   2],
    [  2,  11,   3,   6,   8,   7,   6,   9,   8,   6,  10,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,  11,   3,   0,   6,  11,   0,   4,   6,   1,   2,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   4,   4,  12,   0],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   4,   4,  12,   0],
    [  0,  10,   1,   0,   6,  10,   0,   4,   6,   2,  11,   3,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   1,   9,   2,   4,   6,   2,   8,   4,   2,   3,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,   6,   6,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,   6,   6,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0],
    [  0,   3,   8,   1,   6,   2,   1,   4,   6,   1,   9,   4,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,   8,   3,   1,   4,   8,   1,   5,   4,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   1],
    [  1,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   1],
    [  1,  11,   3,   1,   6,  11,   1,   5,   6,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   5,   4,   0,  10,   5,   0,   2,  10,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   0],
    [  0,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   0],
    [  0,   7,   4,   0,  11,   7,   0,   2,  11,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   6,   2,   0,   7,   6,   0,   8,   7,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   2,   2,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,  12,   2,   2,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,   6,   2,   0,   5,   6,   0,   9,   5,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,   6,  10,   1,   7,   6,   1,   3,   7,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   3,   3,  12,   1],
    [  1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   3,   3,  12,   1],
    [  1,   4,   9,   1,   7,   4,   1,   3,   7,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  1,   2,  10,   5,   8,   9,   5,  11,   8,   5,   6,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   8,   8,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1],
    [  1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   8,   8,  12,  11,  11,  12,   2,   2,  12,   1],
    [  1,   8,   9,   1,  11,   8,   1,   2,  11,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   8,   3,   1,   7,   5,   1,  11,   7,   1,   2,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   5,   5,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  12,   1,   1,  12,   5,   5,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0],
    [  0,   5,   1,   0,   7,   5,   0,   8,   7,   2,  11,   3,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   1,   9,   2,   5,  10,   2,   7,   5,   2,   3,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   7,   7,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   7,   7,  12,   3,   3,  12,   0],
    [  0,   5,   9,   0,   7,   5,   0,   3,   7,   1,  10,   2,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   1,   9,   4,  11,   8,   4,  10,  11,   4,   5,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,  11,  11,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,  11,  11,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,  11,   8,   0,  10,  11,   0,   1,  10,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   8,   3,   4,  11,   7,   4,  10,  11,   4,   9,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,  10,  10,  12,   9,   9,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,  10,  10,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  11,   3,   0,  10,  11,   0,   9,  10,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
];

#[rustfmt::skip]
pub static TUNNEL_12: [[[i8; 24]; 4]; 24] = [
  [
    [  0,  12,   9,   9,  12,  10,  10,  12,  11,  11,  12,   3,   3,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   4,  12,   9,   9,  12,  10,  10,  12,  11,  11,  12,   7,   7,  12,   4],
  ],
  [
    [  0,  12,   1,   1,  12,  10,  10,  12,  11,  11,  12,   8,   8,  12,   0,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   4,  12,   5,   5,  12,  10,  10,  12,  11,  11,  12,   8,   8,  12,   4],
  ],
  [
    [  0,  12,   3,   3,  12,   7,   7,  12,   5,   5,  12,   9,   9,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,   7,   7,  12,   5,   5,  12,  10,  10,  12,   2],
  ],
  [
    [  0,  12,   8,   8,  12,   7,   7,  12,   5,   5,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   5,   5,  12,   1],
  ],
  [
    [  1,  12,   2,   2,  12,  11,  11,  12,   8,   8,  12,   9,   9,  12,   1,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   2,   2,  12,  10,  10,  12,   1,   5,  12,   6,   6,  12,  11,  11,  12,   8,   8,  12,   9,   9,  12,   5],
  ],
  [
    [  1,  12,   3,   3,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   3,   3,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   4,  12,   9,   9,  12,   5,   5,  12,   4],
  ],
  [
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,   2,   2,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,   2,   2,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   4],
  ],
  [
    [  0,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   0,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   0,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  ],
  [
    [  1,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   1,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   1,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  ],
  [
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,   9,   9,  12,   4,   4,  12,   6,   6,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   6,   6,  12,   2],
  ],
  [
    [  0,  12,   4,   4,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   4,   4,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1],
  ],
  [
    [  2,  12,  11,  11,  12,   3,   3,  12,   2,   6,  12,  10,  10,  12,   9,   9,  12,   8,   8,  12,   7,   7,  12,   6],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,  10,  10,  12,   9,   9,  12,   8,   8,  12,   3,   3,  12,   2,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  ],
  [
    [  2,  12,   3,   3,  12,   8,   8,  12,   9,   9,  12,  10,  10,  12,   2,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  2,  12,   3,   3,  12,  11,  11,  12,   2,   6,  12,   7,   7,  12,   8,   8,  12,   9,   9,  12,  10,  10,  12,   6],
  ],
  [
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   4,   4,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   4,   4,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2],
  ],
  [
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,   6,   6,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,   6,   6,  12,   4,   4,  12,   9,   9,  12,   1],
  ],
  [
    [  1,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   1,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   1,   4,  12,   7,   7,  12,   8,   8,  12,   4],
  ],
  [
    [  0,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   0,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   0,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  ],
  [
    [  0,  12,   2,   2,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   2,   2,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   4,  12,   7,   7,  12,   8,   8,  12,   4],
  ],
  [
    [  1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   3,   3,  12,   1,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   3,   3,  12,   1,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  ],
  [
    [  1,  12,  10,  10,  12,   2,   2,  12,   1,   5,  12,   9,   9,  12,   8,   8,  12,  11,  11,  12,   6,   6,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  1,  12,   9,   9,  12,   8,   8,  12,  11,  11,  12,   2,   2,  12,   1,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  ],
  [
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,   5,   5,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   5,   5,  12,   7,   7,  12,   8,   8,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2],
  ],
  [
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  10,  10,  12,   5,   5,  12,   7,   7,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   7,   7,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1],
  ],
  [
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   4,  12,   8,   8,  12,  11,  11,  12,  10,  10,  12,   5,   5,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,  11,  11,  12,  10,  10,  12,   1,   1,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   4],
  ],
  [
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   4,  12,   7,   7,  12,  11,  11,  12,  10,  10,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,  10,  10,  12,   9,   9,  12,   0,   4,  12,   7,   7,  12,   8,   8,  12,   4],
  ],
];

#[rustfmt::skip]
pub static AMB_FACES_12: [[i8; 2]; 24] = [
  [1, 4], [1, 2], [2, 5], [4, 5], [2, 3], [2, 6], [1, 6], [3, 6],
  [4, 6], [1, 5], [3, 5], [3, 4], [3, 4], [3, 5], [1, 5], [4, 6],
  [3, 6], [1, 6], [2, 6], [2, 3], [4, 5], [2, 5], [1, 2], [1, 4],
];

pub static INTERIOR_S_12: [i8; 24] = [ 7, -7, -7,  7,  7,  7,  7,  7,  7, -7,  7,  7, -7, -7,  7, -7, -7, -7, -7, -7, -7,  7,  7, -7];
pub static INTERIOR_EDGE_12: [i8; 24] = [ 4,  4,  1,  2,  5,  5,  4,  5,  4,  0,  2,  2,  6,  1,  0,  6,  6,  4,  4,  1,  0,  0,  0,  0];

#[rustfmt::skip]
pub static TILING_13: [[[i8; 36]; 64]; 2] = [
  [
    [  0,   1,   9,   2,   3,  11,   4,   7,   8,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   2,   3,  11,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,   3,  11,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,   3,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   1,   9,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,   1,   9,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,   1,   9,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   4,   7,   8,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  10,   2,   4,   7,   8,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  10,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   3,   8,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   5,  10,   6,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0],
    [  0,   3,   8,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0],
    [  0,   3,   8,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   1,  10,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   3,   8,   1,  10,   2,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   1,   9,   2,   3,  11,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   2,   3,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,   3,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,   3,  11,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   1,   9,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   1,   9,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   1,   9,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   4,   5,   9,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  10,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  10,   2,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0],
    [  0,   3,   8,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1],
    [  0,   3,   8,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   4,   5,   9,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   3,   8,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   1,  10,   2,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   3,   8,   1,  10,   2,   4,   5,   9,   6,   7,  11,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
  [
    [  0,   8,   3,   1,   2,  10,   4,   9,   5,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   1,   2,  10,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   8,   3,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   8,   3,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1],
    [  0,   8,   3,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   1,   2,  10,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   1,   2,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   4,   9,   5,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   9,   1,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   6,  11,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0],
    [  0,   9,   1,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,   9,   1,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   2,  11,   3,   4,   9,   5,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   2,  11,   3,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   2,  11,   3,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   9,   1,   2,  11,   3,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   8,   3,   1,   2,  10,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   1,   2,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   8,   3,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0],
    [  0,   8,   3,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,   8,   3,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   1,   2,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   1,   2,  10,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   4,   8,   7,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0],
    [  0,   9,   1,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   9,   1,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2],
    [  0,   9,   1,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   2,  11,   3,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   2,  11,   3,   4,   8,   7,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   2,  11,   3,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,   9,   1,   2,  11,   3,   4,   8,   7,   5,   6,  10,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
  ],
];

#[rustfmt::skip]
pub static TUNNEL_13: [[[i8; 36]; 64]; 2] = [
  [
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2,   4,  12,   8,   8,  12,   7,   7,  12,   4,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2],
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   4,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1,   4,  12,   8,   8,  12,   7,   7,  12,   4],
    [  0,  12,   8,   8,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1,   5,  12,   6,   6,  12,  10,  10,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  10,  10,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   9,   9,  12,   1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1,   4,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,  11,  11,  12,   7,   7,  12,   4],
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   3,   3,  12,   2,   4,  12,   9,   9,  12,   5,   5,  12,   4],
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   4],
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   4],
    [  0,  12,   9,   9,  12,   1,   1,  12,   0,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   6,  12,  11,  11,  12,   7,   7,  12,   6],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   1,  12,   0,   6,  12,  11,  11,  12,   7,   7,  12,   6],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   6,  12,  11,  11,  12,   7,   7,  12,   6],
    [  0,  12,   8,   8,  12,   3,   3,  12,   2,   2,  12,  10,  10,  12,   1,   1,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   4,   6,  12,  11,  11,  12,   7,   7,  12,   6],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   1,  12,   2,   2,  12,  11,  11,  12,   3,   3,  12,   0,   4,  12,   9,   9,  12,   5,   5,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1],
    [  0,  12,   8,   8,  12,   7,   7,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1,   4,  12,   9,   9,  12,   5,   5,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  11,  11,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   1,   4,  12,   9,   9,  12,   5,   5,  12,   4],
    [  0,  12,   9,   9,  12,   1,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   6,  12,  11,  11,  12,   7,   7,  12,   6],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   4,   4,  12,   9,   9,  12,   1,   6,  12,  11,  11,  12,   7,   7,  12,   6],
    [  0,  12,   9,   9,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1,   6,  12,  11,  11,  12,   7,   7,  12,   6],
    [  0,  12,   8,   8,  12,   3,   3,  12,   0,   1,  12,   2,   2,  12,  10,  10,  12,   1,   4,  12,   9,   9,  12,   5,   5,  12,   4,   6,  12,  11,  11,  12,   7,   7,  12,   6],
  ],
  [
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1,   4,  12,   5,   5,  12,   9,   9,  12,   4,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   4,  12,   5,   5,  12,   9,   9,  12,   4,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2,   6,  12,   7,   7,  12,  11,  11,  12,   6],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,  11,  11,  12,   2],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   2],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2,   4,  12,   5,   5,  12,   9,   9,  12,   4],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2,   4,  12,   5,   5,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   8,   8,  12,   4],
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,   8,   8,  12,   0,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   5,  12,  10,  10,  12,   6,   6,  12,   5],
    [  0,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   5,  12,  10,  10,  12,   6,   6,  12,   5],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   1,  12,  10,  10,  12,   2,   2,  12,   1,   4,  12,   7,   7,  12,   8,   8,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   4,  12,   7,   7,  12,   8,   8,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   4,  12,   7,   7,  12,   8,   8,  12,   4],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   5,  12,  10,  10,  12,   6,   6,  12,   5],
    [  0,  12,   3,   3,  12,  11,  11,  12,   2,   2,  12,   1,   1,  12,   9,   9,  12,   0,   4,  12,   7,   7,  12,   8,   8,  12,   4,   5,  12,  10,  10,  12,   6,   6,  12,   5],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   2,  12,   3,   3,  12,   8,   8,  12,   0,   5,  12,  10,  10,  12,   6,   6,  12,   5],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,   8,   8,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,   2,   5,  12,  10,  10,  12,   6,   6,  12,   5],
    [ -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1,  -1],
    [  0,  12,   1,   1,  12,  10,  10,  12,   2,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   4,  12,   7,   7,  12,   8,   8,  12,   4],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   5,   5,  12,  10,  10,  12,   2,   4,  12,   7,   7,  12,   8,   8,  12,   4],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2],
    [  0,  12,   1,   1,  12,  10,  10,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2,   4,  12,   7,   7,  12,   8,   8,  12,   4],
    [  0,  12,   1,   1,  12,   9,   9,  12,   4,   4,  12,   7,   7,  12,   8,   8,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2,   5,  12,  10,  10,  12,   6,   6,  12,   5],
    [  0,  12,   1,   1,  12,   9,   9,  12,   0,   2,  12,   3,   3,  12,  11,  11,  12,   2,   4,  12,   7,   7,  12,   8,   8,  12,   4,   5,  12,  10,  10,  12,   6,   6,  12,   5],
  ],
];

#[rustfmt::skip]
pub static AMB_FACES_13: [[i8; 6]; 2] = [
  [1, 2, 3, 4, 5, 6], [1, 2, 3, 4, 5, 6],
];

pub static INTERIOR_S_13: [i8; 2] = [ 7, -7];
pub static INTERIOR_EDGE_13: [i8; 2] = [ 0,  0];

#[rustfmt::skip]
pub static TILING_14: [[i8; 18]; 12] = [
  [  0,  12,   1,   1,  12,  10,  10,  12,  11,  11,  12,   7,   7,  12,   4,   4,  12,   0],
  [  1,  12,   2,   2,  12,  11,  11,  12,   8,   8,  12,   4,   4,  12,   5,   5,  12,   1],
  [  0,  12,   8,   8,  12,   7,   7,  12,   5,   5,  12,  10,  10,  12,   2,   2,  12,   0],
  [  2,  12,   3,   3,  12,   8,   8,  12,   9,   9,  12,   5,   5,  12,   6,   6,  12,   2],
  [  1,  12,   9,   9,  12,   4,   4,  12,   6,   6,  12,  11,  11,  12,   3,   3,  12,   1],
  [  0,  12,   3,   3,  12,   7,   7,  12,   6,   6,  12,  10,  10,  12,   9,   9,  12,   0],
  [  0,  12,   9,   9,  12,  10,  10,  12,   6,   6,  12,   7,   7,  12,   3,   3,  12,   0],
  [  1,  12,   3,   3,  12,  11,  11,  12,   6,   6,  12,   4,   4,  12,   9,   9,  12,   1],
  [  2,  12,   6,   6,  12,   5,   5,  12,   9,   9,  12,   8,   8,  12,   3,   3,  12,   2],
  [  0,  12,   2,   2,  12,  10,  10,  12,   5,   5,  12,   7,   7,  12,   8,   8,  12,   0],
  [  1,  12,   5,   5,  12,   4,   4,  12,   8,   8,  12,  11,  11,  12,   2,   2,  12,   1],
  [  0,  12,   4,   4,  12,   7,   7,  12,  11,  11,  12,  10,  10,  12,   1,   1,  12,   0],
];


/// Lattice offsets of the 8 cube corners in mask bit order.
pub static CORNER_OFFSETS: [[i32; 3]; 8] = [
  [0, 0, 0],
  [1, 0, 0],
  [1, 0, 1],
  [0, 0, 1],
  [0, 1, 0],
  [1, 1, 0],
  [1, 1, 1],
  [0, 1, 1],
];

/// Corner rows for the interior test's slicing planes, one per cube edge:
/// the reference edge pair followed by the three parallel edge pairs
/// sampled at the reference crossing parameter.
#[rustfmt::skip]
pub static INTERIOR_SLICE: [[usize; 8]; 12] = [
  [0, 1,  3, 2,  7, 6,  4, 5],
  [1, 2,  0, 3,  4, 7,  5, 6],
  [2, 3,  1, 0,  5, 4,  6, 7],
  [3, 0,  2, 1,  6, 5,  7, 4],
  [4, 5,  7, 6,  3, 2,  0, 1],
  [5, 6,  4, 7,  0, 3,  1, 2],
  [6, 7,  5, 4,  1, 0,  2, 3],
  [7, 4,  6, 5,  2, 1,  3, 0],
  [0, 4,  3, 7,  2, 6,  1, 5],
  [1, 5,  0, 4,  3, 7,  2, 6],
  [2, 6,  1, 5,  0, 4,  3, 7],
  [3, 7,  2, 6,  1, 5,  0, 4],
];
