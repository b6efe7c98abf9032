//! Error types surfaced by the cave pipeline.

use thiserror::Error;

/// Configuration problems detected before any simulation state is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
  /// A survival/birth range-list string failed to parse.
  #[error("invalid rule spec `{spec}`: {reason}")]
  RuleSpec { spec: String, reason: String },

  /// One or more grid dimensions is not a positive integer.
  #[error("grid dimensions must be positive, got {width}x{height}x{depth}")]
  Dimension { width: i32, height: i32, depth: i32 },

  /// Fill percent outside `[0, 100]`.
  #[error("fill percent must be within [0, 100], got {0}")]
  FillPercent(f32),

  /// Fewer than two automaton states.
  #[error("num_states must be at least 2, got {0}")]
  NumStates(i32),

  /// Iso level outside the representable state range.
  #[error("iso level {iso_level} outside [0, {max}]")]
  IsoLevel { iso_level: i32, max: i32 },
}

/// A bounded wait on an in-flight regeneration expired.
///
/// The job itself keeps running and releases its own buffers on completion;
/// the waiter merely abandons the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("regeneration join exceeded {waited_ms} ms")]
pub struct JoinTimeout {
  /// How long the caller waited before giving up.
  pub waited_ms: u64,
}
