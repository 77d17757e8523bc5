//! Shared test helpers for workspace crates.

use lookup::inspect::DecomposedObject;
use tracing_subscriber::EnvFilter;

pub mod model;
pub mod registry;

/// Install a test-friendly tracing subscriber honoring `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

/// Serialize a decomposition into a JSON tree for snapshot-style assertions.
pub fn to_json<C>(object: &DecomposedObject<C>) -> serde_json::Result<serde_json::Value> {
	serde_json::to_value(object)
}
