//! Bounded 3-D cell grid keyed by position.
//!
//! The grid is a dense `Position -> Cell` map over
//! `[0,width) x [0,height) x [0,depth)`. Map iteration order is
//! unspecified; whenever deterministic output matters (parallel stepping,
//! extraction, tests) callers iterate [`Grid::positions`], the canonical
//! nested x/y/z order.

pub mod neighbors;
pub mod seed;

use std::collections::HashMap;

use glam::IVec3;

use crate::types::{Cell, Position};

/// Dense cell grid with fixed bounds.
#[derive(Clone, Debug, Default)]
pub struct Grid {
  dims: IVec3,
  cells: HashMap<Position, Cell>,
}

impl Grid {
  /// Create an empty grid with the given bounds.
  pub fn empty(dims: IVec3) -> Self {
    Self {
      dims,
      cells: HashMap::with_capacity((dims.x * dims.y * dims.z).max(0) as usize),
    }
  }

  /// Rebuild a grid from per-position cells, keeping the bounds.
  pub fn from_cells(dims: IVec3, cells: impl IntoIterator<Item = (Position, Cell)>) -> Self {
    Self {
      dims,
      cells: cells.into_iter().collect(),
    }
  }

  pub fn dims(&self) -> IVec3 {
    self.dims
  }

  pub fn width(&self) -> i32 {
    self.dims.x
  }

  pub fn height(&self) -> i32 {
    self.dims.y
  }

  pub fn depth(&self) -> i32 {
    self.dims.z
  }

  #[inline]
  pub fn in_bounds(&self, pos: Position) -> bool {
    pos.x >= 0
      && pos.x < self.dims.x
      && pos.y >= 0
      && pos.y < self.dims.y
      && pos.z >= 0
      && pos.z < self.dims.z
  }

  pub fn insert(&mut self, pos: Position, cell: Cell) {
    self.cells.insert(pos, cell);
  }

  #[inline]
  pub fn get(&self, pos: Position) -> Option<&Cell> {
    self.cells.get(&pos)
  }

  pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
    self.cells.get_mut(&pos)
  }

  /// Cell state at `pos`, if present.
  #[inline]
  pub fn state(&self, pos: Position) -> Option<i32> {
    self.cells.get(&pos).map(|c| c.state)
  }

  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Number of cells with non-zero state.
  pub fn alive_count(&self) -> usize {
    self.cells.values().filter(|c| c.state != 0).count()
  }

  /// Canonical position order: x outermost, then y, then z.
  pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
    let dims = self.dims;
    (0..dims.x)
      .flat_map(move |x| (0..dims.y).flat_map(move |y| (0..dims.z).map(move |z| IVec3::new(x, y, z))))
  }

  /// Canonical-order iteration over existing cells.
  pub fn iter_canonical(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
    self.positions().filter_map(move |pos| self.get(pos).map(|cell| (pos, cell)))
  }

  /// Count wall (state 0) entries among a cell's neighbors.
  pub fn wall_neighbor_count(&self, cell: &Cell) -> usize {
    cell
      .neighbors
      .iter()
      .filter(|&&nbr| self.state(nbr) == Some(0))
      .count()
  }

  /// Count alive (state != 0) entries among a cell's neighbors.
  pub fn alive_neighbor_count(&self, cell: &Cell) -> usize {
    cell
      .neighbors
      .iter()
      .filter(|&&nbr| matches!(self.state(nbr), Some(s) if s != 0))
      .count()
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
