//! Page URL patterns

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder replaced with the page number when resolving a [`UrlPattern`]
pub const NUM_PLACEHOLDER: &str = "(:num)";

/// A URL template containing [`NUM_PLACEHOLDER`]
///
/// Resolution is plain text substitution. The page number is not URL-encoded
/// and every occurrence of the placeholder is replaced.
///
/// # Examples
///
/// ```
/// use folio_core::UrlPattern;
///
/// let pattern = UrlPattern::new("/posts?page=(:num)");
/// assert_eq!(pattern.resolve(3), "/posts?page=3");
///
/// let twice = UrlPattern::new("/p/(:num)#page-(:num)");
/// assert_eq!(twice.resolve(7), "/p/7#page-7");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlPattern(String);

impl UrlPattern {
	/// Creates a pattern from any string
	pub fn new(pattern: impl Into<String>) -> Self {
		Self(pattern.into())
	}

	/// Returns the raw pattern text
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Whether the pattern contains the page placeholder at least once
	pub fn has_placeholder(&self) -> bool {
		self.0.contains(NUM_PLACEHOLDER)
	}

	/// Substitutes `page` for every placeholder occurrence
	pub fn resolve(&self, page: u64) -> String {
		self.0.replace(NUM_PLACEHOLDER, &page.to_string())
	}
}

impl From<&str> for UrlPattern {
	fn from(pattern: &str) -> Self {
		Self::new(pattern)
	}
}

impl From<String> for UrlPattern {
	fn from(pattern: String) -> Self {
		Self(pattern)
	}
}

impl AsRef<str> for UrlPattern {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for UrlPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
