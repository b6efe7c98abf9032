use super::*;

fn small_config() -> CaveConfig {
  CaveConfig::default()
    .with_dimensions(10, 10, 10)
    .with_seed("pipeline-test")
    .with_generations(2)
}

#[test]
fn generate_rejects_invalid_configs() {
  assert!(generate(&small_config().with_dimensions(0, 10, 10)).is_err());
  assert!(generate(&small_config().with_fill_percent(150.0)).is_err());
  assert!(generate(&small_config().with_rules("4", "", 1)).is_err());
}

#[test]
fn generate_produces_a_consistent_output() {
  let output = generate(&small_config()).unwrap();

  assert_eq!(output.grid.len(), 1000);
  assert!(!output.triangles.is_empty());
  assert_eq!(output.mesh.indices.len(), output.triangles.len() * 3);
  assert_eq!(output.mesh.vertices.len(), output.mesh.normals.len());
  assert_eq!(output.mesh.vertices.len(), output.mesh.uvs.len());

  // Sealed boundary: every face cell except far-x is a wall.
  let dims = output.grid.dims();
  for pos in output.grid.positions() {
    let sealed = pos.x == 0
      || pos.y == 0
      || pos.y == dims.y - 1
      || pos.z == 0
      || pos.z == dims.z - 1;
    if sealed {
      assert_eq!(output.grid.state(pos), Some(0));
    }
  }
}

#[test]
fn same_seed_reproduces_the_same_cave() {
  let first = generate(&small_config()).unwrap();
  let second = generate(&small_config()).unwrap();

  assert_eq!(first.triangles.len(), second.triangles.len());
  for (a, b) in first.triangles.iter().zip(&second.triangles) {
    assert_eq!(a, b);
  }
  assert_eq!(first.mesh.vertices, second.mesh.vertices);

  let other = generate(&small_config().with_seed("another-cave")).unwrap();
  assert_ne!(first.mesh.vertices, other.mesh.vertices);
}

#[test]
fn dual_contouring_path_runs_end_to_end() {
  let config = small_config()
    .with_extractor(Extractor::DualContouring)
    .with_iso_level(1);
  let output = generate(&config).unwrap();
  assert!(!output.triangles.is_empty());
  assert_eq!(output.mesh.indices.len(), output.triangles.len() * 3);
}

#[test]
fn speleothems_only_add_whole_prisms() {
  let plain = generate(&small_config()).unwrap();
  let decorated = generate(&small_config().with_speleothems(100.0)).unwrap();

  assert!(decorated.triangles.len() >= plain.triangles.len());
  let added = decorated.triangles.len() - plain.triangles.len();
  assert_eq!(added % 20, 0);
}

#[test]
fn presets_run_through_the_pipeline() {
  let config = small_config().with_preset(RulePreset::Clouds1);
  let output = generate(&config).unwrap();
  assert_eq!(output.grid.len(), 1000);
}
