//! Background regeneration with a join-then-drop teardown discipline.
//!
//! A [`RegenerationJob`] runs the whole pipeline on the rayon pool and
//! hands the result back over a bounded channel. The worker owns every
//! intermediate buffer; a waiter that times out simply abandons the
//! result, and the worker's send into the disconnected channel fails
//! harmlessly. Buffers are never freed out from under a running worker.

use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, TryRecvError};
use tracing::{debug, error};

use crate::error::{ConfigError, JoinTimeout};
use crate::types::{CaveConfig, CaveOutput};

/// Handle to one in-flight cave regeneration.
pub struct RegenerationJob {
  rx: Receiver<CaveOutput>,
}

impl RegenerationJob {
  /// Validate the configuration and start the pipeline on the rayon pool.
  ///
  /// Validation failures are reported before any work is scheduled.
  pub fn spawn(config: CaveConfig) -> Result<Self, ConfigError> {
    config.validate()?;
    let (tx, rx) = bounded(1);
    rayon::spawn(move || {
      let output = crate::run_pipeline(&config);
      // A dropped receiver means the waiter gave up; the output is
      // discarded here, on the worker side.
      if tx.send(output).is_err() {
        debug!("regeneration finished after its waiter left");
      }
    });
    Ok(Self { rx })
  }

  /// Block until the job completes, up to `timeout`.
  ///
  /// On timeout the job keeps running detached and its result is
  /// abandoned; this handle is consumed either way.
  pub fn join_timeout(self, timeout: Duration) -> Result<CaveOutput, JoinTimeout> {
    match self.rx.recv_timeout(timeout) {
      Ok(output) => Ok(output),
      Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
        let waited_ms = timeout.as_millis() as u64;
        error!(waited_ms, "abandoning regeneration job after timeout");
        Err(JoinTimeout { waited_ms })
      }
    }
  }

  /// Non-blocking completion check.
  pub fn try_poll(&self) -> Option<CaveOutput> {
    match self.rx.try_recv() {
      Ok(output) => Some(output),
      Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Extractor;

  fn small_config() -> CaveConfig {
    CaveConfig::default()
      .with_dimensions(8, 8, 8)
      .with_seed("job-test")
      .with_generations(2)
  }

  #[test]
  fn spawn_rejects_invalid_config() {
    let bad = small_config().with_dimensions(0, 8, 8);
    assert!(RegenerationJob::spawn(bad).is_err());
  }

  #[test]
  fn join_returns_pipeline_output() {
    let job = RegenerationJob::spawn(small_config()).unwrap();
    let output = job.join_timeout(Duration::from_secs(30)).unwrap();
    assert_eq!(output.grid.dims().x, 8);
    assert_eq!(output.mesh.indices.len(), output.triangles.len() * 3);
  }

  #[test]
  fn join_matches_synchronous_run() {
    let config = small_config().with_extractor(Extractor::DualContouring);
    let job = RegenerationJob::spawn(config.clone()).unwrap();
    let threaded = job.join_timeout(Duration::from_secs(30)).unwrap();
    let direct = crate::generate(&config).unwrap();
    assert_eq!(threaded.triangles.len(), direct.triangles.len());
  }

  #[test]
  fn try_poll_eventually_sees_completion() {
    let job = RegenerationJob::spawn(small_config()).unwrap();
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    loop {
      if let Some(output) = job.try_poll() {
        assert!(output.grid.len() > 0);
        break;
      }
      assert!(std::time::Instant::now() < deadline, "job never completed");
      std::thread::sleep(Duration::from_millis(10));
    }
  }
}
