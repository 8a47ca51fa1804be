//! Page-window computation
//!
//! A window is the ordered list of page numbers shown in a pagination
//! control. Small page counts are listed in full. Large page counts show the
//! first page, a sliding run of pages around the current one and the last
//! page, with ellipsis markers standing in for the omitted ranges:
//!
//! ```text
//! [1] 2 3 4 5 6 7 8 9 … 100
//! 1 … 47 48 49 [50] 51 52 53 54 … 100
//! 1 … 92 93 94 95 96 97 98 99 [100]
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Smallest accepted `max_pages_to_show`: first page, one interior slot and last page
pub const MIN_MAX_PAGES_TO_SHOW: u64 = 3;

/// Default `max_pages_to_show`
pub const DEFAULT_MAX_PAGES_TO_SHOW: u64 = 10;

/// Text used for ellipsis markers
pub const ELLIPSIS_TEXT: &str = "...";

/// A single slot of a page window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageNumber {
	/// A navigable page (1-based)
	Page(u64),
	/// Placeholder for one or more omitted pages
	Ellipsis,
}

impl PageNumber {
	/// Returns the page number, or `None` for an ellipsis
	pub fn page(&self) -> Option<u64> {
		match self {
			Self::Page(number) => Some(*number),
			Self::Ellipsis => None,
		}
	}

	/// Whether this slot is an ellipsis marker
	pub fn is_ellipsis(&self) -> bool {
		matches!(self, Self::Ellipsis)
	}
}

impl fmt::Display for PageNumber {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Page(number) => write!(f, "{}", number),
			Self::Ellipsis => f.write_str(ELLIPSIS_TEXT),
		}
	}
}

// Pages serialize as numbers, ellipses as "..."
impl Serialize for PageNumber {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Page(number) => serializer.serialize_u64(*number),
			Self::Ellipsis => serializer.serialize_str(ELLIPSIS_TEXT),
		}
	}
}

/// A page window entry with its URL and current-page flag
///
/// The URL is present exactly when the entry is a page; ellipsis entries
/// never carry one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PageEntry {
	number: PageNumber,
	url: Option<String>,
	is_current: bool,
}

impl PageEntry {
	/// Creates a navigable page entry
	pub fn page(number: u64, url: impl Into<String>, is_current: bool) -> Self {
		Self {
			number: PageNumber::Page(number),
			url: Some(url.into()),
			is_current,
		}
	}

	/// Creates an ellipsis entry
	pub fn ellipsis() -> Self {
		Self {
			number: PageNumber::Ellipsis,
			url: None,
			is_current: false,
		}
	}

	/// Returns the slot this entry represents
	pub fn number(&self) -> PageNumber {
		self.number
	}

	/// Returns the page URL, `None` for ellipses
	pub fn url(&self) -> Option<&str> {
		self.url.as_deref()
	}

	/// Whether this entry is the current page
	pub fn is_current(&self) -> bool {
		self.is_current
	}

	/// Whether this entry is an ellipsis marker
	pub fn is_ellipsis(&self) -> bool {
		self.number.is_ellipsis()
	}
}

/// Computes the page window for the given page count and current page
///
/// Returns an empty window when there is at most one page, and every page
/// when `num_pages <= max_pages_to_show`. Otherwise the window is the first
/// page, an optional ellipsis, the sliding run, an optional ellipsis and the
/// last page.
///
/// `current_page` is not range-checked. Values of `max_pages_to_show` below
/// [`MIN_MAX_PAGES_TO_SHOW`] are treated as the minimum.
///
/// A gap of exactly one page before the sliding run still yields an
/// ellipsis rather than the hidden page.
///
/// # Examples
///
/// ```
/// use folio_core::window::{compute_window, PageNumber::{Ellipsis, Page}};
///
/// assert!(compute_window(1, 1, 10).is_empty());
/// assert_eq!(compute_window(3, 2, 10), vec![Page(1), Page(2), Page(3)]);
/// assert_eq!(
///     compute_window(20, 10, 7),
///     vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
/// );
/// ```
pub fn compute_window(num_pages: u64, current_page: u64, max_pages_to_show: u64) -> Vec<PageNumber> {
	let max_pages_to_show = max_pages_to_show.max(MIN_MAX_PAGES_TO_SHOW);

	if num_pages <= 1 {
		return Vec::new();
	}

	if num_pages <= max_pages_to_show {
		return (1..=num_pages).map(PageNumber::Page).collect();
	}

	let (start, end) = sliding_bounds(num_pages, current_page, max_pages_to_show);
	tracing::trace!(
		num_pages,
		current_page,
		max_pages_to_show,
		start,
		end,
		"computed sliding window"
	);

	let mut window = Vec::with_capacity(max_pages_to_show as usize + 2);
	window.push(PageNumber::Page(1));
	if start > 2 {
		window.push(PageNumber::Ellipsis);
	}
	window.extend((start..=end).map(PageNumber::Page));
	if end < num_pages - 1 {
		window.push(PageNumber::Ellipsis);
	}
	window.push(PageNumber::Page(num_pages));

	window
}

/// Inclusive bounds of the interior run, excluding the first and last page
///
/// Requires `num_pages > max_pages_to_show >= MIN_MAX_PAGES_TO_SHOW`. The
/// run is empty (`start > end`) only when it would have to begin on the
/// last page.
fn sliding_bounds(num_pages: u64, current_page: u64, max_pages_to_show: u64) -> (u64, u64) {
	let num_adjacent = (max_pages_to_show - 3) / 2;

	let start = if current_page.saturating_add(num_adjacent) > num_pages {
		// Near the end: slide left so the run keeps its width
		num_pages - max_pages_to_show + 2
	} else {
		current_page.saturating_sub(num_adjacent)
	};
	let start = start.max(2);

	let end = start
		.saturating_add(max_pages_to_show - 3)
		.min(num_pages - 1);

	(start, end)
}
