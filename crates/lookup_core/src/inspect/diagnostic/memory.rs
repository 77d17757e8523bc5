use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use crate::inspect::diagnostic::EngineDiagnoser;

thread_local! {
	static ALLOCATED: Cell<u64> = const { Cell::new(0) };
}

/// Total bytes allocated on this thread through [`TrackingAllocator`].
///
/// Stays at zero unless the allocator is installed as the global allocator.
pub fn thread_allocated_bytes() -> u64 {
	ALLOCATED.try_with(Cell::get).unwrap_or(0)
}

fn record(bytes: usize) {
	let _ = ALLOCATED.try_with(|total| total.set(total.get().wrapping_add(bytes as u64)));
}

/// System allocator wrapper counting allocated bytes per thread.
///
/// Install with `#[global_allocator]` to make [`MemoryDiagnoser`] report
/// allocations.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingAllocator;

// SAFETY: every call is forwarded unchanged to `System`; only a thread-local counter is updated.
unsafe impl GlobalAlloc for TrackingAllocator {
	unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
		record(layout.size());
		unsafe { System.alloc(layout) }
	}

	unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
		record(layout.size());
		unsafe { System.alloc_zeroed(layout) }
	}

	unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
		unsafe { System.dealloc(ptr, layout) }
	}

	unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
		if new_size > layout.size() {
			record(new_size - layout.size());
		}
		unsafe { System.realloc(ptr, layout, new_size) }
	}
}

/// Probe for bytes allocated by the current thread.
#[derive(Debug, Default)]
pub struct MemoryDiagnoser {
	initial: u64,
	last: u64,
}

impl MemoryDiagnoser {
	/// Bytes allocated during the last bracketed evaluation; resets the probe.
	pub fn take_allocated_bytes(&mut self) -> u64 {
		let allocated = self.last.saturating_sub(self.initial);
		self.initial = 0;
		self.last = 0;
		allocated
	}
}

impl EngineDiagnoser for MemoryDiagnoser {
	fn start_monitoring(&mut self) {
		self.initial = thread_allocated_bytes();
	}

	fn stop_monitoring(&mut self) {
		self.last = thread_allocated_bytes();
	}
}
