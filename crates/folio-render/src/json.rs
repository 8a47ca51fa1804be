//! JSON rendering for client-side pagination controls

use crate::error::Result;
use crate::nav::Navigation;
use crate::renderer::NavRenderer;

/// Serializes a [`Navigation`] with `serde_json`
///
/// The document has the shape
/// `{"items": [{"kind", "label", "page", "url", "active", "disabled"}, ...],
/// "outer_classes": [...], "inner_classes": [...]}`. An empty navigation still
/// renders a document, with an empty `items` array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonRenderer {
	pretty: bool,
}

impl JsonRenderer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Indents the output
	pub fn pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}

	pub fn is_pretty(&self) -> bool {
		self.pretty
	}

	/// Converts the navigation into a JSON value
	pub fn to_value(&self, navigation: &Navigation) -> Result<serde_json::Value> {
		Ok(serde_json::to_value(navigation)?)
	}
}

impl NavRenderer for JsonRenderer {
	fn render(&self, navigation: &Navigation) -> Result<String> {
		let json = if self.pretty {
			serde_json::to_string_pretty(navigation)?
		} else {
			serde_json::to_string(navigation)?
		};
		Ok(json)
	}

	fn format(&self) -> &'static str {
		"json"
	}
}
