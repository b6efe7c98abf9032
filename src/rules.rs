//! Automaton rule sets: range-list parsing and the preset catalog.
//!
//! A rule spec is a comma-separated list of tokens, each either a single
//! non-negative integer or an inclusive range `a-b` with `a <= b`, e.g.
//! `"5-7,12-13,15"`. Survival and birth specs are independent; together
//! with `num_states` they define a "Generations"-family automaton.

use crate::error::ConfigError;
use crate::types::Neighborhood;

/// Membership mask over neighbor counts (0..=63 representable; a Moore
/// neighborhood never exceeds 26, presets use 27 as an always-false count).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NeighborCounts(u64);

impl NeighborCounts {
  /// Parse a range-list spec into a count mask.
  pub fn parse(spec: &str) -> Result<Self, ConfigError> {
    let fail = |reason: &str| ConfigError::RuleSpec {
      spec: spec.to_string(),
      reason: reason.to_string(),
    };

    let mut mask = 0u64;
    for token in spec.split(',') {
      let token = token.trim();
      if token.is_empty() {
        return Err(fail("empty token"));
      }
      if let Some((lo, hi)) = token.split_once('-') {
        let lo = parse_count(lo).ok_or_else(|| fail("range bound is not a non-negative integer"))?;
        let hi = parse_count(hi).ok_or_else(|| fail("range bound is not a non-negative integer"))?;
        if lo > hi {
          return Err(fail("range start exceeds range end"));
        }
        for n in lo..=hi {
          mask |= 1 << n;
        }
      } else {
        let n = parse_count(token).ok_or_else(|| fail("token is not a non-negative integer"))?;
        mask |= 1 << n;
      }
    }
    Ok(Self(mask))
  }

  /// True when `count` is a member of the set.
  #[inline]
  pub fn contains(self, count: usize) -> bool {
    count < 64 && (self.0 >> count) & 1 == 1
  }

  pub fn is_empty(self) -> bool {
    self.0 == 0
  }
}

fn parse_count(token: &str) -> Option<u32> {
  let n: u32 = token.trim().parse().ok()?;
  (n < 64).then_some(n)
}

/// Parsed survival/birth predicates plus the state count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
  pub survival: NeighborCounts,
  pub birth: NeighborCounts,
  /// `num_states - 1` is the fully-alive state.
  pub num_states: i32,
}

impl RuleSet {
  pub fn parse(survival: &str, birth: &str, num_states: i32) -> Result<Self, ConfigError> {
    if num_states < 2 {
      return Err(ConfigError::NumStates(num_states));
    }
    Ok(Self {
      survival: NeighborCounts::parse(survival)?,
      birth: NeighborCounts::parse(birth)?,
      num_states,
    })
  }

  #[inline]
  pub fn max_state(&self) -> i32 {
    self.num_states - 1
  }
}

/// Raw preset definition: rule strings plus state count and connectivity.
#[derive(Clone, Copy, Debug)]
pub struct PresetRule {
  pub survival: &'static str,
  pub birth: &'static str,
  pub num_states: i32,
  pub neighborhood: Neighborhood,
}

/// Catalog of known-good rule presets for cave-like structures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RulePreset {
  Brain3d,
  FourFourFive,
  Amoeba,
  Architecture,
  Builder1,
  Builder2,
  Clouds1,
  Clouds2,
  Construction,
  Coral,
  CrystalGrowth1,
  CrystalGrowth2,
  DiamondGrowth,
  ExpandingShell,
  MoreStructures,
  PulseWaves,
  Pyroclastic,
  Sample1,
  Shells,
  SinglePointReplication,
  SlowDecay1,
  SlowDecay2,
  SpikyGrowth,
  StableStructures,
  Symmetry,
  VonNeumannBuilder,
}

impl RulePreset {
  pub const ALL: [RulePreset; 26] = [
    RulePreset::Brain3d,
    RulePreset::FourFourFive,
    RulePreset::Amoeba,
    RulePreset::Architecture,
    RulePreset::Builder1,
    RulePreset::Builder2,
    RulePreset::Clouds1,
    RulePreset::Clouds2,
    RulePreset::Construction,
    RulePreset::Coral,
    RulePreset::CrystalGrowth1,
    RulePreset::CrystalGrowth2,
    RulePreset::DiamondGrowth,
    RulePreset::ExpandingShell,
    RulePreset::MoreStructures,
    RulePreset::PulseWaves,
    RulePreset::Pyroclastic,
    RulePreset::Sample1,
    RulePreset::Shells,
    RulePreset::SinglePointReplication,
    RulePreset::SlowDecay1,
    RulePreset::SlowDecay2,
    RulePreset::SpikyGrowth,
    RulePreset::StableStructures,
    RulePreset::Symmetry,
    RulePreset::VonNeumannBuilder,
  ];

  /// The preset's rule definition. Survival `"27"` means "always die",
  /// since 27 is an unreachable Moore neighbor count.
  pub fn rule(self) -> PresetRule {
    use Neighborhood::{Moore, VonNeumann};
    let (survival, birth, num_states, neighborhood) = match self {
      RulePreset::Brain3d => ("27", "4", 2, Moore),
      RulePreset::FourFourFive => ("4", "4", 5, Moore),
      RulePreset::Amoeba => ("9-26", "5-7,12-13,15", 5, Moore),
      RulePreset::Architecture => ("4-6", "3", 2, Moore),
      RulePreset::Builder1 => ("2,6,9", "4,6,8-9", 10, Moore),
      RulePreset::Builder2 => ("5-7", "1", 2, Moore),
      RulePreset::Clouds1 => ("13-26", "13-14,17-19", 2, Moore),
      RulePreset::Clouds2 => ("12-26", "13-14", 2, Moore),
      RulePreset::Construction => ("0-2,4,6-11,13-17,21-26", "9-10,16,23-24", 2, Moore),
      RulePreset::Coral => ("5-8", "6-7,9,12", 4, Moore),
      RulePreset::CrystalGrowth1 => ("0-6", "1,3", 2, VonNeumann),
      RulePreset::CrystalGrowth2 => ("1-2", "1,3", 5, VonNeumann),
      RulePreset::DiamondGrowth => ("5-6", "1-3", 7, VonNeumann),
      RulePreset::ExpandingShell => ("6,7-9,11,13,15-16,18", "6-10,13-14,16,18-19,22-25", 5, Moore),
      RulePreset::MoreStructures => ("7-26", "4", 4, Moore),
      RulePreset::PulseWaves => ("3", "1-3", 10, Moore),
      RulePreset::Pyroclastic => ("4-7", "6-8", 10, Moore),
      RulePreset::Sample1 => ("10-26", "5,8-26", 4, Moore),
      RulePreset::Shells => ("3,5,7,9,11,15,17,19,21,23-24,26", "3,6,8-9,11,14-17,19,24", 7, Moore),
      RulePreset::SinglePointReplication => ("27", "1", 2, Moore),
      RulePreset::SlowDecay1 => ("13-26", "10-26", 3, Moore),
      RulePreset::SlowDecay2 => ("1,4,8,11,13-26", "13-26", 5, Moore),
      RulePreset::SpikyGrowth => ("0-3,7-9,11-13,18,21-22,24,26", "13,17,20-26", 4, Moore),
      RulePreset::StableStructures => ("13-26", "14-19", 2, Moore),
      RulePreset::Symmetry => ("27", "2", 10, Moore),
      RulePreset::VonNeumannBuilder => ("1-3", "1,4-5", 5, VonNeumann),
    };
    PresetRule {
      survival,
      birth,
      num_states,
      neighborhood,
    }
  }
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;
