//! Pagination settings
//!
//! Settings hold the per-site presentation defaults of a paginator (window
//! width, labels, URL pattern and extra classes) so they can live in a TOML
//! file next to the rest of an application's configuration.
//!
//! Keys may sit at the top level of the document or inside a `[pagination]`
//! table:
//!
//! ```toml
//! [pagination]
//! max_pages_to_show = 7
//! previous_label = "Newer"
//! next_label = "Older"
//! url_pattern = "/blog/page/(:num)"
//! outer_classes = ["pagination-sm"]
//! ```

use crate::error::{PaginationError, Result};
use crate::paginator::{DEFAULT_NEXT_LABEL, DEFAULT_PREVIOUS_LABEL};
use crate::url::UrlPattern;
use crate::window::{DEFAULT_MAX_PAGES_TO_SHOW, MIN_MAX_PAGES_TO_SHOW};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the table that may wrap the settings keys
pub const SETTINGS_SECTION: &str = "pagination";

/// Presentation defaults applied by [`crate::Paginator::from_settings`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
	/// Maximum number of page numbers in the window (at least 3)
	pub max_pages_to_show: u64,
	/// Label of the "previous page" control
	pub previous_label: String,
	/// Label of the "next page" control
	pub next_label: String,
	/// Page URL pattern with `(:num)` placeholder
	pub url_pattern: UrlPattern,
	/// Classes added to the pagination container
	pub outer_classes: Vec<String>,
	/// Classes added to every entry
	pub inner_classes: Vec<String>,
}

impl Default for PaginationSettings {
	fn default() -> Self {
		Self {
			max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
			previous_label: DEFAULT_PREVIOUS_LABEL.to_string(),
			next_label: DEFAULT_NEXT_LABEL.to_string(),
			url_pattern: UrlPattern::default(),
			outer_classes: Vec::new(),
			inner_classes: Vec::new(),
		}
	}
}

impl PaginationSettings {
	/// Parses and validates settings from a TOML document
	///
	/// Missing keys fall back to their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use folio_core::PaginationSettings;
	///
	/// let settings = PaginationSettings::from_toml_str(
	///     "[pagination]\nmax_pages_to_show = 5\nnext_label = \"Older\"",
	/// )
	/// .unwrap();
	/// assert_eq!(settings.max_pages_to_show, 5);
	/// assert_eq!(settings.next_label, "Older");
	/// assert_eq!(settings.previous_label, "Previous");
	/// ```
	pub fn from_toml_str(contents: &str) -> Result<Self> {
		let mut document: toml::Table = toml::from_str(contents)?;

		let section = match document.remove(SETTINGS_SECTION) {
			Some(toml::Value::Table(section)) => section,
			Some(other) => {
				return Err(PaginationError::InvalidArgument(format!(
					"[{}] must be a table, found {}",
					SETTINGS_SECTION,
					other.type_str()
				)));
			}
			None => document,
		};

		let settings: Self = toml::Value::Table(section).try_into()?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates settings from a TOML file
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&contents)?;
		tracing::debug!(path = %path.display(), "loaded pagination settings");
		Ok(settings)
	}

	/// Checks that `max_pages_to_show` is at least 3
	pub fn validate(&self) -> Result<()> {
		if self.max_pages_to_show < MIN_MAX_PAGES_TO_SHOW {
			return Err(PaginationError::InvalidArgument(format!(
				"max_pages_to_show cannot be less than {}, got {}",
				MIN_MAX_PAGES_TO_SHOW, self.max_pages_to_show
			)));
		}
		Ok(())
	}
}
