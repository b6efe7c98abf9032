//! Cave pipeline benchmarks.
//!
//! Measures the three dominant stages in isolation (stepping, extraction,
//! assembly) and the full pipeline at typical volume sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cave_plugin::grid::seed::random_fill;
use cave_plugin::mesh;
use cave_plugin::rules::RuleSet;
use cave_plugin::simulation::{self, postprocess};
use cave_plugin::{generate, CaveConfig, Extractor, Grid, Neighborhood};

fn bench_config(size: i32) -> CaveConfig {
  CaveConfig::default()
    .with_dimensions(size, size, size)
    .with_seed("bench")
    .with_generations(3)
}

/// A sealed, simplified grid ready for extraction.
fn settled_grid(size: i32) -> Grid {
  let config = bench_config(size);
  let rules = RuleSet::parse(&config.survival, &config.birth, config.num_states).unwrap();
  let grid = random_fill(
    config.dims(),
    config.fill_percent,
    &config.seed,
    config.neighborhood,
    config.num_states,
  );
  let mut sim = simulation::Simulation::new(grid, rules);
  sim.run(config.num_generations);
  let mut grid = sim.into_grid();
  postprocess::seal_walls(&mut grid);
  postprocess::simplify(&mut grid, config.neighborhood, config.num_states);
  grid
}

fn bench_stepping(c: &mut Criterion) {
  let mut group = c.benchmark_group("isolated/step");
  for size in [16, 32] {
    let rules = RuleSet::parse("4", "4", 5).unwrap();
    let grid = random_fill(
      glam::IVec3::splat(size),
      90.0,
      "bench",
      Neighborhood::Moore,
      5,
    );
    group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
      b.iter(|| simulation::step(black_box(&grid), black_box(&rules)))
    });
  }
  group.finish();
}

fn bench_extraction(c: &mut Criterion) {
  let mut group = c.benchmark_group("isolated/extract");
  for size in [16, 32] {
    let grid = settled_grid(size);
    group.bench_with_input(
      BenchmarkId::new("marching_cubes", size),
      &size,
      |b, _| b.iter(|| mesh::extract(black_box(&grid), 0, Extractor::MarchingCubes)),
    );
    group.bench_with_input(
      BenchmarkId::new("dual_contouring", size),
      &size,
      |b, _| b.iter(|| mesh::extract(black_box(&grid), 1, Extractor::DualContouring)),
    );
  }
  group.finish();
}

fn bench_assembly(c: &mut Criterion) {
  let mut group = c.benchmark_group("isolated/assemble");
  let grid = settled_grid(32);
  let triangles = mesh::extract(&grid, 0, Extractor::MarchingCubes);
  group.bench_function("marching_cubes_32", |b| {
    b.iter(|| {
      mesh::assemble(
        black_box(&triangles),
        black_box(&[]),
        glam::IVec3::splat(32),
      )
    })
  });
  group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
  let mut group = c.benchmark_group("pipeline/generate");
  group.sample_size(10);
  for size in [16, 32] {
    let mc = bench_config(size);
    group.bench_with_input(BenchmarkId::new("marching_cubes", size), &size, |b, _| {
      b.iter(|| generate(black_box(&mc)).unwrap())
    });

    let dc = bench_config(size)
      .with_extractor(Extractor::DualContouring)
      .with_iso_level(1);
    group.bench_with_input(BenchmarkId::new("dual_contouring", size), &size, |b, _| {
      b.iter(|| generate(black_box(&dc)).unwrap())
    });
  }

  let decorated = bench_config(32).with_speleothems(25.0);
  group.bench_function("marching_cubes_32_speleothems", |b| {
    b.iter(|| generate(black_box(&decorated)).unwrap())
  });
  group.finish();
}

criterion_group!(
  benches,
  bench_stepping,
  bench_extraction,
  bench_assembly,
  bench_full_pipeline,
);
criterion_main!(benches);
