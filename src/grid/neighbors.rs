//! Neighborhood offset enumeration, clipped to the grid bounds.

use glam::IVec3;

use crate::types::{NeighborList, Neighborhood, Position};

const VON_NEUMANN_OFFSETS: [IVec3; 6] = [
  IVec3::new(1, 0, 0),
  IVec3::new(-1, 0, 0),
  IVec3::new(0, 1, 0),
  IVec3::new(0, -1, 0),
  IVec3::new(0, 0, 1),
  IVec3::new(0, 0, -1),
];

#[inline]
fn in_bounds(pos: IVec3, dims: IVec3) -> bool {
  pos.x >= 0 && pos.x < dims.x && pos.y >= 0 && pos.y < dims.y && pos.z >= 0 && pos.z < dims.z
}

/// All in-bounds neighbor positions of `pos`, excluding `pos` itself.
///
/// Moore enumerates the full 3x3x3 block minus the center; von Neumann the
/// six axis-aligned unit offsets. Out-of-bounds candidates are dropped, so
/// boundary cells simply have shorter lists.
pub fn neighbor_positions(pos: Position, dims: IVec3, neighborhood: Neighborhood) -> NeighborList {
  let mut out = NeighborList::new();
  match neighborhood {
    Neighborhood::Moore => {
      for dx in -1..=1 {
        for dy in -1..=1 {
          for dz in -1..=1 {
            if dx == 0 && dy == 0 && dz == 0 {
              continue;
            }
            let nbr = pos + IVec3::new(dx, dy, dz);
            if in_bounds(nbr, dims) {
              out.push(nbr);
            }
          }
        }
      }
    }
    Neighborhood::VonNeumann => {
      for offset in VON_NEUMANN_OFFSETS {
        let nbr = pos + offset;
        if in_bounds(nbr, dims) {
          out.push(nbr);
        }
      }
    }
  }
  out
}

#[cfg(test)]
#[path = "neighbors_test.rs"]
mod neighbors_test;
