use super::*;

#[test]
fn parses_single_values() {
  let counts = NeighborCounts::parse("4").unwrap();
  assert!(counts.contains(4));
  assert!(!counts.contains(3));
  assert!(!counts.contains(5));
}

#[test]
fn parses_ranges_and_lists() {
  let counts = NeighborCounts::parse("5-7,12-13,15").unwrap();
  for n in [5, 6, 7, 12, 13, 15] {
    assert!(counts.contains(n), "expected {n} to be a member");
  }
  for n in [0, 4, 8, 11, 14, 16, 26] {
    assert!(!counts.contains(n), "expected {n} to be excluded");
  }
}

#[test]
fn tolerates_whitespace_around_tokens() {
  let counts = NeighborCounts::parse(" 4 , 6 - 8 ").unwrap();
  assert!(counts.contains(4));
  assert!(counts.contains(6));
  assert!(counts.contains(7));
  assert!(counts.contains(8));
}

#[test]
fn rejects_empty_and_malformed_tokens() {
  assert!(NeighborCounts::parse("").is_err());
  assert!(NeighborCounts::parse("4,,6").is_err());
  assert!(NeighborCounts::parse("4-").is_err());
  assert!(NeighborCounts::parse("-4").is_err());
  assert!(NeighborCounts::parse("a-b").is_err());
  assert!(NeighborCounts::parse("3.5").is_err());
}

#[test]
fn rejects_inverted_ranges() {
  assert!(NeighborCounts::parse("7-5").is_err());
}

#[test]
fn unreachable_count_is_always_false() {
  // "27" is the conventional never-survive spec for Moore neighborhoods.
  let counts = NeighborCounts::parse("27").unwrap();
  for n in 0..=26 {
    assert!(!counts.contains(n));
  }
  assert!(!counts.is_empty());
}

#[test]
fn ruleset_rejects_too_few_states() {
  assert!(RuleSet::parse("4", "4", 1).is_err());
  assert!(RuleSet::parse("4", "4", 2).is_ok());
}

#[test]
fn ruleset_max_state() {
  let rules = RuleSet::parse("9-26", "5-7,12-13,15", 5).unwrap();
  assert_eq!(rules.max_state(), 4);
}

#[test]
fn every_preset_parses() {
  for preset in RulePreset::ALL {
    let rule = preset.rule();
    let parsed = RuleSet::parse(rule.survival, rule.birth, rule.num_states);
    assert!(parsed.is_ok(), "preset {preset:?} failed to parse");
  }
}
