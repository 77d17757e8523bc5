use std::alloc::{GlobalAlloc, Layout};
use std::thread;
use std::time::Duration;

use crate::inspect::diagnostic::{EngineDiagnoser, MemoryDiagnoser, Probe, TimeDiagnoser, TrackingAllocator, thread_allocated_bytes};

#[test]
fn probe_measures_and_resets() {
	let mut probe = Probe::default();
	let value = probe.measure(|| {
		thread::sleep(Duration::from_millis(5));
		7
	});

	assert_eq!(value, 7);
	let first = probe.take();
	assert!(first.computation_time >= 5.0, "expected at least 5ms, got {}", first.computation_time);

	let second = probe.take();
	assert_eq!(second.computation_time, 0.0);
	assert_eq!(second.allocated_bytes, 0);
}

#[test]
fn time_diagnoser_without_start_reports_zero() {
	let mut time = TimeDiagnoser::default();
	time.stop_monitoring();

	assert_eq!(time.take_elapsed(), Duration::ZERO);
}

#[test]
fn memory_diagnoser_never_underflows() {
	let mut memory = MemoryDiagnoser::default();
	memory.start_monitoring();
	let _buffer = vec![0_u8; 1024];
	memory.stop_monitoring();

	// Without the tracking allocator installed the counter does not move.
	assert_eq!(memory.take_allocated_bytes(), 0);
}

#[test]
fn tracking_allocator_counts_growth_only() {
	let layout = Layout::from_size_align(64, 8).expect("valid layout");
	let start = thread_allocated_bytes();

	// SAFETY: the block is allocated, grown, shrunk and freed with matching layouts.
	unsafe {
		let ptr = TrackingAllocator.alloc(layout);
		assert!(!ptr.is_null());
		assert_eq!(thread_allocated_bytes() - start, 64);

		let grown = TrackingAllocator.realloc(ptr, layout, 256);
		assert!(!grown.is_null());
		assert_eq!(thread_allocated_bytes() - start, 256);

		let grown_layout = Layout::from_size_align(256, 8).expect("valid layout");
		let shrunk = TrackingAllocator.realloc(grown, grown_layout, 32);
		assert!(!shrunk.is_null());
		assert_eq!(thread_allocated_bytes() - start, 256);

		TrackingAllocator.dealloc(shrunk, Layout::from_size_align(32, 8).expect("valid layout"));
	}
	assert_eq!(thread_allocated_bytes() - start, 256);
}
