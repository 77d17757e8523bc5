use std::time::{Duration, Instant};

use crate::inspect::diagnostic::EngineDiagnoser;

/// Wall-clock probe.
#[derive(Debug, Default)]
pub struct TimeDiagnoser {
	started: Option<Instant>,
	elapsed: Duration,
}

impl TimeDiagnoser {
	/// Elapsed time of the last bracketed evaluation; resets the probe.
	pub fn take_elapsed(&mut self) -> Duration {
		self.started = None;
		std::mem::take(&mut self.elapsed)
	}
}

impl EngineDiagnoser for TimeDiagnoser {
	fn start_monitoring(&mut self) {
		self.started = Some(Instant::now());
	}

	fn stop_monitoring(&mut self) {
		if let Some(started) = self.started.take() {
			self.elapsed = started.elapsed();
		}
	}
}
