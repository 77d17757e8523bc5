//! Measurement probes bracketing a single member evaluation.

use serde::Serialize;

mod memory;
mod time;

pub use memory::{MemoryDiagnoser, TrackingAllocator, thread_allocated_bytes};
pub use time::TimeDiagnoser;

/// A probe started before and stopped after one evaluation.
pub trait EngineDiagnoser {
	/// Start measuring.
	fn start_monitoring(&mut self);

	/// Stop measuring.
	fn stop_monitoring(&mut self);
}

/// Cost of one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Measurement {
	/// Elapsed wall time in milliseconds.
	pub computation_time: f64,
	/// Bytes allocated on the evaluating thread.
	pub allocated_bytes: u64,
}

/// Time and memory probes used together.
#[derive(Debug, Default)]
pub struct Probe {
	time: TimeDiagnoser,
	memory: MemoryDiagnoser,
}

impl Probe {
	/// Run `evaluate` between start and stop of both probes.
	pub fn measure<T>(&mut self, evaluate: impl FnOnce() -> T) -> T {
		self.time.start_monitoring();
		self.memory.start_monitoring();

		let result = evaluate();

		self.memory.stop_monitoring();
		self.time.stop_monitoring();
		result
	}

	/// Read the last measurement and reset both probes.
	pub fn take(&mut self) -> Measurement {
		Measurement {
			computation_time: self.time.take_elapsed().as_secs_f64() * 1000.0,
			allocated_bytes: self.memory.take_allocated_bytes(),
		}
	}
}

#[cfg(test)]
mod tests;
