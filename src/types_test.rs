use glam::Vec3;

use super::*;

#[test]
fn default_config_validates() {
  assert!(CaveConfig::default().validate().is_ok());
}

#[test]
fn rejects_non_positive_dimensions() {
  let cfg = CaveConfig::default().with_dimensions(0, 8, 8);
  assert!(matches!(cfg.validate(), Err(ConfigError::Dimension { .. })));

  let cfg = CaveConfig::default().with_dimensions(8, -1, 8);
  assert!(matches!(cfg.validate(), Err(ConfigError::Dimension { .. })));
}

#[test]
fn rejects_fill_percent_out_of_range() {
  let cfg = CaveConfig::default().with_fill_percent(100.5);
  assert!(matches!(cfg.validate(), Err(ConfigError::FillPercent(_))));

  let cfg = CaveConfig::default().with_fill_percent(-0.1);
  assert!(matches!(cfg.validate(), Err(ConfigError::FillPercent(_))));
}

#[test]
fn rejects_single_state_automaton() {
  let cfg = CaveConfig::default().with_rules("4", "4", 1);
  assert!(matches!(cfg.validate(), Err(ConfigError::NumStates(1))));
}

#[test]
fn rejects_iso_level_outside_state_range() {
  let cfg = CaveConfig::default().with_rules("4", "4", 5).with_iso_level(5);
  assert!(matches!(cfg.validate(), Err(ConfigError::IsoLevel { .. })));

  let cfg = CaveConfig::default().with_iso_level(-1);
  assert!(matches!(cfg.validate(), Err(ConfigError::IsoLevel { .. })));
}

#[test]
fn rejects_malformed_rule_specs() {
  let cfg = CaveConfig::default().with_rules("4-", "4", 5);
  assert!(matches!(cfg.validate(), Err(ConfigError::RuleSpec { .. })));
}

#[test]
fn preset_overrides_rules_and_neighborhood() {
  let cfg = CaveConfig::default().with_preset(RulePreset::Amoeba);
  assert_eq!(cfg.survival, "9-26");
  assert_eq!(cfg.birth, "5-7,12-13,15");
  assert_eq!(cfg.num_states, 5);
  assert_eq!(cfg.neighborhood, Neighborhood::Moore);
  assert!(cfg.validate().is_ok());
}

#[test]
fn wall_threshold_is_majority_of_neighborhood() {
  assert_eq!(Neighborhood::Moore.wall_threshold(), 13);
  assert_eq!(Neighborhood::VonNeumann.wall_threshold(), 3);
}

#[test]
fn face_normal_follows_winding() {
  let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
  assert!((tri.face_normal() - Vec3::Z).length() < 1e-6);

  let flipped = Triangle::new(Vec3::ZERO, Vec3::Y, Vec3::X);
  assert!((flipped.face_normal() + Vec3::Z).length() < 1e-6);
}

#[test]
fn degenerate_triangle_has_zero_normal() {
  let tri = Triangle::new(Vec3::ONE, Vec3::ONE, Vec3::ONE);
  assert_eq!(tri.face_normal(), Vec3::ZERO);
}
