//! Navigation entries
//!
//! [`Navigation`] is the intermediate representation between the page model
//! and any output format: the "previous" control, the page window and the
//! "next" control, each with its URL and state already resolved.

use folio_core::{PageEntry, PageNumber, Paginator};
use serde::Serialize;
use std::fmt;

/// The role of a navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavKind {
	/// Link to the previous page
	Previous,
	/// A page of the window
	Page,
	/// Placeholder for omitted pages
	Ellipsis,
	/// Link to the next page
	Next,
}

/// One entry of a pagination control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
	kind: NavKind,
	label: String,
	page: Option<u64>,
	url: Option<String>,
	active: bool,
	disabled: bool,
}

impl NavItem {
	/// Creates the "previous" control; disabled when there is no previous page
	pub fn previous(label: impl Into<String>, page: Option<u64>, url: Option<String>) -> Self {
		Self::control(NavKind::Previous, label.into(), page, url)
	}

	/// Creates the "next" control; disabled when there is no next page
	pub fn next(label: impl Into<String>, page: Option<u64>, url: Option<String>) -> Self {
		Self::control(NavKind::Next, label.into(), page, url)
	}

	fn control(kind: NavKind, label: String, page: Option<u64>, url: Option<String>) -> Self {
		let disabled = url.is_none();
		Self {
			kind,
			label,
			page,
			url,
			active: false,
			disabled,
		}
	}

	/// Creates an entry from a page window entry
	pub fn from_entry(entry: &PageEntry) -> Self {
		match entry.number() {
			PageNumber::Page(number) => Self {
				kind: NavKind::Page,
				label: number.to_string(),
				page: Some(number),
				url: entry.url().map(str::to_string),
				active: entry.is_current(),
				disabled: false,
			},
			PageNumber::Ellipsis => Self {
				kind: NavKind::Ellipsis,
				label: PageNumber::Ellipsis.to_string(),
				page: None,
				url: None,
				active: false,
				disabled: true,
			},
		}
	}

	pub fn kind(&self) -> NavKind {
		self.kind
	}

	/// Display text: the page number, the ellipsis text or the control label
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Target page, `None` for ellipses and unavailable controls
	pub fn page(&self) -> Option<u64> {
		self.page
	}

	pub fn url(&self) -> Option<&str> {
		self.url.as_deref()
	}

	/// Whether this entry is the current page
	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Whether this entry is rendered without a link
	pub fn is_disabled(&self) -> bool {
		self.disabled
	}
}

/// The ordered entries of a pagination control plus its extra classes
///
/// Empty when the paginator has at most one page.
///
/// # Examples
///
/// ```
/// use folio_core::Paginator;
/// use folio_render::{NavKind, Navigation};
///
/// let paginator = Paginator::new(30, 10, 1, "/p/(:num)");
/// let navigation = Navigation::from_paginator(&paginator);
///
/// let kinds: Vec<NavKind> = navigation.items().iter().map(|item| item.kind()).collect();
/// assert_eq!(
///     kinds,
///     [NavKind::Previous, NavKind::Page, NavKind::Page, NavKind::Page, NavKind::Next]
/// );
/// assert!(navigation.items()[0].is_disabled());
/// assert_eq!(navigation.items()[4].url(), Some("/p/2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Navigation {
	items: Vec<NavItem>,
	outer_classes: Vec<String>,
	inner_classes: Vec<String>,
}

impl Navigation {
	/// Builds the navigation for the paginator's current state
	pub fn from_paginator(paginator: &Paginator) -> Self {
		let pages = paginator.pages();
		let mut items = Vec::new();

		if !pages.is_empty() {
			items.reserve(pages.len() + 2);
			items.push(NavItem::previous(
				paginator.previous_label(),
				paginator.prev_page(),
				paginator.prev_url(),
			));
			items.extend(pages.iter().map(NavItem::from_entry));
			items.push(NavItem::next(
				paginator.next_label(),
				paginator.next_page(),
				paginator.next_url(),
			));
		}

		tracing::trace!(
			num_pages = paginator.num_pages(),
			current_page = paginator.current_page(),
			items = items.len(),
			"built navigation"
		);

		Self {
			items,
			outer_classes: paginator.outer_classes().to_vec(),
			inner_classes: paginator.inner_classes().to_vec(),
		}
	}

	pub fn items(&self) -> &[NavItem] {
		&self.items
	}

	/// Entries of the page window only, without the previous/next controls
	pub fn page_items(&self) -> impl Iterator<Item = &NavItem> {
		self.items
			.iter()
			.filter(|item| matches!(item.kind, NavKind::Page | NavKind::Ellipsis))
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Classes added to the container element
	pub fn outer_classes(&self) -> &[String] {
		&self.outer_classes
	}

	/// Classes added to every entry element
	pub fn inner_classes(&self) -> &[String] {
		&self.inner_classes
	}
}

impl From<&Paginator> for Navigation {
	fn from(paginator: &Paginator) -> Self {
		Self::from_paginator(paginator)
	}
}

// Formats as HTML with the default class tokens
impl fmt::Display for Navigation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		crate::html::HtmlRenderer::new().write_html(self, f)
	}
}
