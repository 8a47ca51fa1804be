//! Integration test utilities for Folio
//!
//! Shared helpers for the end-to-end tests that drive the paginator through
//! the `folio` facade.

use folio::{PageNumber, Paginator};
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Installs a test-writer subscriber once per test binary
pub fn init_tracing() {
	INIT.call_once(|| {
		tracing_subscriber::fmt()
			.with_max_level(Level::TRACE)
			.with_test_writer()
			.try_init()
			.ok();
	});
}

/// Window of a paginator as display strings, e.g. `["1", "...", "5"]`
pub fn window_labels(paginator: &Paginator) -> Vec<String> {
	paginator.window().iter().map(PageNumber::to_string).collect()
}

/// Builds the expected window labels from page numbers, with `0` standing
/// for an ellipsis
pub fn labels(slots: &[u64]) -> Vec<String> {
	slots
		.iter()
		.map(|&slot| match slot {
			0 => PageNumber::Ellipsis.to_string(),
			page => PageNumber::Page(page).to_string(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_labels_helper() {
		assert_eq!(labels(&[1, 0, 7]), ["1", "...", "7"]);
	}
}
