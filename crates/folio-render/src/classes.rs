//! Class-name tokens used by the HTML renderer

use serde::{Deserialize, Serialize};

/// Class tokens written into the markup
///
/// Defaults follow Bootstrap's pagination component. Every field can be
/// overridden, and the struct deserializes with per-field defaults so a
/// settings file only needs the tokens it changes.
///
/// # Examples
///
/// ```
/// use folio_render::MarkupClasses;
///
/// let classes = MarkupClasses {
///     screen_reader: "visually-hidden".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(classes.container, "pagination");
/// assert_eq!(classes.screen_reader, "visually-hidden");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupClasses {
	/// Class of the `<ul>` container
	pub container: String,
	/// Class of every `<li>` entry
	pub item: String,
	/// Class of the `<a>` link inside an entry
	pub link: String,
	/// Added to the current page's entry
	pub active: String,
	/// Added to entries without a link
	pub disabled: String,
	/// Class of the text only shown to screen readers
	pub screen_reader: String,
}

impl Default for MarkupClasses {
	fn default() -> Self {
		Self {
			container: "pagination".to_string(),
			item: "page-item".to_string(),
			link: "page-link".to_string(),
			active: "active".to_string(),
			disabled: "disabled".to_string(),
			screen_reader: "sr-only".to_string(),
		}
	}
}

/// Joins class tokens with single spaces, skipping empty ones
///
/// # Examples
///
/// ```
/// use folio_render::classes::class_list;
///
/// assert_eq!(class_list(["pagination", "", "pagination-sm"]), "pagination pagination-sm");
/// assert_eq!(class_list(Vec::<&str>::new()), "");
/// ```
pub fn class_list<'a, I>(tokens: I) -> String
where
	I: IntoIterator<Item = &'a str>,
{
	tokens
		.into_iter()
		.map(str::trim)
		.filter(|token| !token.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}
