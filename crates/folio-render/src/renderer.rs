//! Renderer trait

use crate::error::Result;
use crate::nav::Navigation;

/// Serializes a [`Navigation`] into an output format
///
/// Implementors only format; building the navigation is done once by
/// [`Navigation::from_paginator`] and shared between renderers.
pub trait NavRenderer {
	/// Renders the navigation. An empty navigation renders as an empty string
	/// for markup formats.
	fn render(&self, navigation: &Navigation) -> Result<String>;

	/// Short name of the output format, e.g. `"html"`
	fn format(&self) -> &'static str;
}
