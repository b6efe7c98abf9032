//! Procedural volumetric cave generation.
//!
//! The pipeline seeds a multi-state cellular automaton, steps it for a
//! configured number of generations, seals and simplifies the resulting
//! field, then extracts a render mesh with either a disambiguated
//! Marching Cubes or a Dual Contouring pass. Optionally the extracted
//! surface is decorated with stalagmite/stalactite pairs.
//!
//! [`generate`] runs everything synchronously; [`RegenerationJob`] runs
//! the same pipeline on the rayon pool for callers that cannot block.

pub mod error;
pub mod grid;
pub mod mesh;
pub mod rules;
pub mod simulation;
pub mod types;

use std::time::Instant;

use tracing::debug;

pub use crate::error::{ConfigError, JoinTimeout};
pub use crate::grid::Grid;
pub use crate::rules::{RulePreset, RuleSet};
pub use crate::simulation::job::RegenerationJob;
pub use crate::types::{
  CaveConfig, CaveOutput, Extractor, MeshOutput, Neighborhood, Triangle,
};

/// Run the full pipeline for one configuration.
pub fn generate(config: &CaveConfig) -> Result<CaveOutput, ConfigError> {
  config.validate()?;
  Ok(run_pipeline(config))
}

/// Pipeline body shared by [`generate`] and [`RegenerationJob`].
///
/// Callers validate the configuration first; the rule specs are known to
/// parse by the time this runs.
pub(crate) fn run_pipeline(config: &CaveConfig) -> CaveOutput {
  let rules = RuleSet::parse(&config.survival, &config.birth, config.num_states)
    .expect("rule specs checked by CaveConfig::validate");
  let dims = config.dims();

  let started = Instant::now();
  let grid = grid::seed::random_fill(
    dims,
    config.fill_percent,
    &config.seed,
    config.neighborhood,
    config.num_states,
  );

  let mut sim = simulation::Simulation::new(grid, rules);
  sim.run(config.num_generations);
  let mut grid = sim.into_grid();
  debug!(
    elapsed_ms = started.elapsed().as_millis() as u64,
    generations = config.num_generations,
    "automaton settled"
  );

  let post_started = Instant::now();
  simulation::postprocess::seal_walls(&mut grid);
  simulation::postprocess::simplify(&mut grid, config.neighborhood, config.num_states);
  debug!(
    elapsed_ms = post_started.elapsed().as_millis() as u64,
    alive = grid.alive_count(),
    "field sealed and simplified"
  );

  let mesh_started = Instant::now();
  let mut triangles = mesh::extract(&grid, config.iso_level, config.extractor);
  let speleothems = if config.generate_speleothems {
    let mut rng = grid::seed::rng_for_seed(&config.seed);
    mesh::speleothem::generate(&triangles, dims, config.speleothem_percent, &mut rng)
  } else {
    Vec::new()
  };
  let mesh = mesh::assemble(&triangles, &speleothems, dims);
  triangles.extend(speleothems);
  debug!(
    elapsed_ms = mesh_started.elapsed().as_millis() as u64,
    triangles = triangles.len(),
    "mesh assembled"
  );

  CaveOutput {
    grid,
    triangles,
    mesh,
  }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
