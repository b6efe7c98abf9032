//! Core data types for cave generation and meshing.

use glam::{IVec3, Vec2, Vec3};
use smallvec::SmallVec;

use crate::error::ConfigError;
use crate::rules::RulePreset;

/// Grid position, the unique key of a cell. Bounds are
/// `[0,width) x [0,height) x [0,depth)` with no wraparound.
pub type Position = IVec3;

/// Inline-capacity list of neighbor positions (at most 26 for Moore).
pub type NeighborList = SmallVec<[Position; 26]>;

/// Neighborhood connectivity of the automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Neighborhood {
  /// 26-connected: all non-zero offsets in `{-1,0,1}³`.
  Moore,
  /// 6-connected: unit offsets along each axis.
  VonNeumann,
}

impl Neighborhood {
  /// Wall-neighbor count above which a cell is merged into the walls
  /// during simplification (more than half of the full neighborhood).
  pub fn wall_threshold(self) -> usize {
    match self {
      Neighborhood::Moore => 13,
      Neighborhood::VonNeumann => 3,
    }
  }
}

/// Isosurface extraction algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extractor {
  MarchingCubes,
  DualContouring,
}

/// One lattice site of the automaton.
///
/// `tag` is an opaque presentation-layer handle (e.g. an index into a
/// renderer-side proxy table). The core passes it through unchanged and
/// never dereferences it.
#[derive(Clone, Debug)]
pub struct Cell {
  /// State in `[0, num_states - 1]`; `num_states - 1` is fully alive.
  pub state: i32,
  /// In-bounds neighbor positions, computed once at seeding and immutable
  /// for the whole run.
  pub neighbors: NeighborList,
  /// Opaque external handle, passed through every pass unchanged.
  pub tag: u64,
}

/// A single output triangle. The vertex ordering encodes winding/facing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
  pub a: Vec3,
  pub b: Vec3,
  pub c: Vec3,
}

impl Triangle {
  pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
    Self { a, b, c }
  }

  /// Unit face normal from the winding order (zero for degenerate faces).
  pub fn face_normal(&self) -> Vec3 {
    (self.b - self.a).cross(self.c - self.a).normalize_or_zero()
  }
}

/// Per-corner Hermite data collected during Dual Contouring.
///
/// Created lazily while scanning a corner's 12 cell edges and discarded
/// once the mesh is assembled.
#[derive(Clone, Debug, Default)]
pub struct HermiteData {
  /// Surface crossing points, index-aligned with `normals`.
  pub intersections: Vec<Vec3>,
  /// Estimated surface normals at each crossing.
  pub normals: Vec<Vec3>,
  /// Representative cell vertex solved from the constraints above.
  pub vertex: Vec3,
}

/// Renderer-consumable mesh: flat triangle soup with per-vertex attributes.
#[derive(Clone, Debug, Default)]
pub struct MeshOutput {
  pub vertices: Vec<Vec3>,
  /// Triangle indices, 3 per triangle (consecutive triples).
  pub indices: Vec<u32>,
  /// Per-vertex normals, parallel to `vertices`.
  pub normals: Vec<Vec3>,
  /// Per-vertex cube-face projected UVs, parallel to `vertices`.
  pub uvs: Vec<Vec2>,
}

impl MeshOutput {
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }
}

/// Full pipeline parameters.
///
/// Validation happens up front via [`CaveConfig::validate`]; no partial
/// state is produced for an invalid configuration.
#[derive(Clone, Debug)]
pub struct CaveConfig {
  pub width: i32,
  pub height: i32,
  pub depth: i32,
  /// Probability (in percent) that a seeded cell starts fully alive.
  pub fill_percent: f32,
  /// Reproducibility seed; hashed into the PRNG stream.
  pub seed: String,
  pub neighborhood: Neighborhood,
  /// Number of automaton states; `num_states - 1` is fully alive.
  pub num_states: i32,
  /// Range-list spec for survival neighbor counts, e.g. `"9-26"`.
  pub survival: String,
  /// Range-list spec for birth neighbor counts, e.g. `"5-7,12-13,15"`.
  pub birth: String,
  pub num_generations: u32,
  pub iso_level: i32,
  pub extractor: Extractor,
  /// Percent chance per candidate anchor to grow a speleothem pair.
  pub speleothem_percent: f32,
  pub generate_speleothems: bool,
}

impl Default for CaveConfig {
  fn default() -> Self {
    Self {
      width: 32,
      height: 32,
      depth: 32,
      fill_percent: 90.0,
      seed: String::from("cave"),
      neighborhood: Neighborhood::Moore,
      num_states: 5,
      survival: String::from("4"),
      birth: String::from("4"),
      num_generations: 1,
      iso_level: 0,
      extractor: Extractor::MarchingCubes,
      speleothem_percent: 10.0,
      generate_speleothems: false,
    }
  }
}

impl CaveConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_dimensions(mut self, width: i32, height: i32, depth: i32) -> Self {
    self.width = width;
    self.height = height;
    self.depth = depth;
    self
  }

  pub fn with_fill_percent(mut self, fill_percent: f32) -> Self {
    self.fill_percent = fill_percent;
    self
  }

  pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
    self.seed = seed.into();
    self
  }

  pub fn with_rules(
    mut self,
    survival: impl Into<String>,
    birth: impl Into<String>,
    num_states: i32,
  ) -> Self {
    self.survival = survival.into();
    self.birth = birth.into();
    self.num_states = num_states;
    self
  }

  pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
    self.neighborhood = neighborhood;
    self
  }

  pub fn with_generations(mut self, num_generations: u32) -> Self {
    self.num_generations = num_generations;
    self
  }

  pub fn with_iso_level(mut self, iso_level: i32) -> Self {
    self.iso_level = iso_level;
    self
  }

  pub fn with_extractor(mut self, extractor: Extractor) -> Self {
    self.extractor = extractor;
    self
  }

  pub fn with_speleothems(mut self, percent: f32) -> Self {
    self.generate_speleothems = true;
    self.speleothem_percent = percent;
    self
  }

  /// Apply a named rule preset (survival/birth/num_states/neighborhood).
  pub fn with_preset(mut self, preset: RulePreset) -> Self {
    let rule = preset.rule();
    self.survival = rule.survival.to_string();
    self.birth = rule.birth.to_string();
    self.num_states = rule.num_states;
    self.neighborhood = rule.neighborhood;
    self
  }

  pub fn dims(&self) -> IVec3 {
    IVec3::new(self.width, self.height, self.depth)
  }

  /// Check every caller-facing constraint, including the rule spec grammar.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.width <= 0 || self.height <= 0 || self.depth <= 0 {
      return Err(ConfigError::Dimension {
        width: self.width,
        height: self.height,
        depth: self.depth,
      });
    }
    if !(0.0..=100.0).contains(&self.fill_percent) {
      return Err(ConfigError::FillPercent(self.fill_percent));
    }
    if self.num_states < 2 {
      return Err(ConfigError::NumStates(self.num_states));
    }
    if self.iso_level < 0 || self.iso_level > self.num_states - 1 {
      return Err(ConfigError::IsoLevel {
        iso_level: self.iso_level,
        max: self.num_states - 1,
      });
    }
    crate::rules::NeighborCounts::parse(&self.survival)?;
    crate::rules::NeighborCounts::parse(&self.birth)?;
    Ok(())
  }
}

/// Result of a full pipeline run: the stable field plus its mesh.
#[derive(Clone, Debug)]
pub struct CaveOutput {
  pub grid: crate::grid::Grid,
  pub triangles: Vec<Triangle>,
  pub mesh: MeshOutput,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
