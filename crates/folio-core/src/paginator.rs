//! The page model
//!
//! [`Paginator`] holds the pagination parameters of one view, keeps the
//! derived page count in sync with them and answers the questions a
//! pagination control needs: which pages to show, where the neighbors are and
//! which items the current page covers.

use crate::error::{PaginationError, Result};
use crate::settings::PaginationSettings;
use crate::url::UrlPattern;
use crate::window::{
	DEFAULT_MAX_PAGES_TO_SHOW, MIN_MAX_PAGES_TO_SHOW, PageEntry, PageNumber, compute_window,
};

/// Default label of the "previous page" control
pub const DEFAULT_PREVIOUS_LABEL: &str = "Previous";

/// Default label of the "next page" control
pub const DEFAULT_NEXT_LABEL: &str = "Next";

/// Pagination state for a single view
///
/// Construct one per request. Setters take `&mut self` and return `&mut Self`
/// so calls can be chained; the `with_*` methods consume and return the
/// paginator for builder-style construction.
///
/// # Examples
///
/// ```
/// use folio_core::Paginator;
///
/// let paginator = Paginator::new(52, 10, 1, "/items?page=(:num)");
/// assert_eq!(paginator.num_pages(), 6);
/// assert_eq!(paginator.next_page(), Some(2));
/// assert_eq!(paginator.prev_page(), None);
/// assert_eq!(paginator.pages().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
	total_items: u64,
	items_per_page: u64,
	current_page: u64,
	num_pages: u64,
	url_pattern: UrlPattern,
	max_pages_to_show: u64,
	previous_label: String,
	next_label: String,
	outer_classes: Vec<String>,
	inner_classes: Vec<String>,
}

impl Paginator {
	/// Creates a paginator with default window width, labels and no extra classes
	///
	/// # Arguments
	///
	/// * `total_items` - Total number of items across all pages
	/// * `items_per_page` - Page size; zero yields no pages
	/// * `current_page` - 1-based current page, not range-checked
	/// * `url_pattern` - Page URL with `(:num)` as the page placeholder
	pub fn new(
		total_items: u64,
		items_per_page: u64,
		current_page: u64,
		url_pattern: impl Into<UrlPattern>,
	) -> Self {
		Self {
			total_items,
			items_per_page,
			current_page,
			num_pages: count_pages(total_items, items_per_page),
			url_pattern: url_pattern.into(),
			max_pages_to_show: DEFAULT_MAX_PAGES_TO_SHOW,
			previous_label: DEFAULT_PREVIOUS_LABEL.to_string(),
			next_label: DEFAULT_NEXT_LABEL.to_string(),
			outer_classes: Vec::new(),
			inner_classes: Vec::new(),
		}
	}

	/// Creates a paginator configured from loaded settings
	///
	/// Fails when the settings carry an invalid `max_pages_to_show`.
	///
	/// # Examples
	///
	/// ```
	/// use folio_core::{PaginationSettings, Paginator};
	///
	/// let settings = PaginationSettings {
	///     max_pages_to_show: 7,
	///     url_pattern: "/p/(:num)".into(),
	///     ..Default::default()
	/// };
	/// let paginator = Paginator::from_settings(500, 20, 3, &settings).unwrap();
	/// assert_eq!(paginator.max_pages_to_show(), 7);
	/// assert_eq!(paginator.page_url(2), "/p/2");
	/// ```
	pub fn from_settings(
		total_items: u64,
		items_per_page: u64,
		current_page: u64,
		settings: &PaginationSettings,
	) -> Result<Self> {
		settings.validate()?;

		let mut paginator = Self::new(
			total_items,
			items_per_page,
			current_page,
			settings.url_pattern.clone(),
		);
		paginator.max_pages_to_show = settings.max_pages_to_show;
		paginator.previous_label = settings.previous_label.clone();
		paginator.next_label = settings.next_label.clone();
		paginator.outer_classes = settings.outer_classes.clone();
		paginator.inner_classes = settings.inner_classes.clone();
		Ok(paginator)
	}

	/// Sets the window width, consuming the paginator
	pub fn with_max_pages_to_show(mut self, max_pages_to_show: u64) -> Result<Self> {
		self.set_max_pages_to_show(max_pages_to_show)?;
		Ok(self)
	}

	/// Sets the previous/next labels, consuming the paginator
	pub fn with_labels(mut self, previous: impl Into<String>, next: impl Into<String>) -> Self {
		self.previous_label = previous.into();
		self.next_label = next.into();
		self
	}

	/// Sets the classes added to the pagination container, consuming the paginator
	pub fn with_outer_classes<I, S>(mut self, classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.set_outer_classes(classes);
		self
	}

	/// Sets the classes added to every entry, consuming the paginator
	pub fn with_inner_classes<I, S>(mut self, classes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.set_inner_classes(classes);
		self
	}

	/// Sets the maximum number of page numbers in the window
	///
	/// Fails with [`PaginationError::InvalidArgument`] when `max_pages_to_show`
	/// is below 3, leaving the paginator unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use folio_core::Paginator;
	///
	/// let mut paginator = Paginator::new(100, 10, 1, "");
	/// assert!(paginator.set_max_pages_to_show(2).is_err());
	/// assert_eq!(paginator.max_pages_to_show(), 10);
	/// assert!(paginator.set_max_pages_to_show(3).is_ok());
	/// ```
	pub fn set_max_pages_to_show(&mut self, max_pages_to_show: u64) -> Result<&mut Self> {
		if max_pages_to_show < MIN_MAX_PAGES_TO_SHOW {
			tracing::warn!(max_pages_to_show, "rejected max_pages_to_show");
			return Err(PaginationError::InvalidArgument(format!(
				"max_pages_to_show cannot be less than {}, got {}",
				MIN_MAX_PAGES_TO_SHOW, max_pages_to_show
			)));
		}
		self.max_pages_to_show = max_pages_to_show;
		Ok(self)
	}

	/// Sets the page size and recomputes the page count
	pub fn set_items_per_page(&mut self, items_per_page: u64) -> &mut Self {
		self.items_per_page = items_per_page;
		self.update_num_pages();
		self
	}

	/// Sets the total item count and recomputes the page count
	pub fn set_total_items(&mut self, total_items: u64) -> &mut Self {
		self.total_items = total_items;
		self.update_num_pages();
		self
	}

	/// Sets the current page without range checking
	pub fn set_current_page(&mut self, current_page: u64) -> &mut Self {
		self.current_page = current_page;
		self
	}

	/// Replaces the page URL pattern
	pub fn set_url_pattern(&mut self, url_pattern: impl Into<UrlPattern>) -> &mut Self {
		self.url_pattern = url_pattern.into();
		self
	}

	/// Sets the label of the "previous page" control
	pub fn set_previous_label(&mut self, label: impl Into<String>) -> &mut Self {
		self.previous_label = label.into();
		self
	}

	/// Sets the label of the "next page" control
	pub fn set_next_label(&mut self, label: impl Into<String>) -> &mut Self {
		self.next_label = label.into();
		self
	}

	/// Replaces the classes added to the pagination container
	pub fn set_outer_classes<I, S>(&mut self, classes: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.outer_classes = classes.into_iter().map(Into::into).collect();
		self
	}

	/// Replaces the classes added to every entry
	pub fn set_inner_classes<I, S>(&mut self, classes: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.inner_classes = classes.into_iter().map(Into::into).collect();
		self
	}

	fn update_num_pages(&mut self) {
		self.num_pages = count_pages(self.total_items, self.items_per_page);
	}

	pub fn total_items(&self) -> u64 {
		self.total_items
	}

	pub fn items_per_page(&self) -> u64 {
		self.items_per_page
	}

	pub fn current_page(&self) -> u64 {
		self.current_page
	}

	/// Total number of pages, zero when the page size is zero
	pub fn num_pages(&self) -> u64 {
		self.num_pages
	}

	pub fn url_pattern(&self) -> &UrlPattern {
		&self.url_pattern
	}

	pub fn max_pages_to_show(&self) -> u64 {
		self.max_pages_to_show
	}

	pub fn previous_label(&self) -> &str {
		&self.previous_label
	}

	pub fn next_label(&self) -> &str {
		&self.next_label
	}

	pub fn outer_classes(&self) -> &[String] {
		&self.outer_classes
	}

	pub fn inner_classes(&self) -> &[String] {
		&self.inner_classes
	}

	/// Resolves the URL of `page`; no range check is performed
	pub fn page_url(&self, page: u64) -> String {
		self.url_pattern.resolve(page)
	}

	/// The page after the current one, if there is one
	pub fn next_page(&self) -> Option<u64> {
		(self.current_page < self.num_pages).then(|| self.current_page + 1)
	}

	/// The page before the current one, if there is one
	pub fn prev_page(&self) -> Option<u64> {
		(self.current_page > 1).then(|| self.current_page - 1)
	}

	pub fn next_url(&self) -> Option<String> {
		self.next_page().map(|page| self.page_url(page))
	}

	pub fn prev_url(&self) -> Option<String> {
		self.prev_page().map(|page| self.page_url(page))
	}

	/// 1-based index of the first item on the current page
	///
	/// `None` when the current page starts past the last item, or when the
	/// current page is zero.
	///
	/// # Examples
	///
	/// ```
	/// use folio_core::Paginator;
	///
	/// let paginator = Paginator::new(25, 10, 3, "");
	/// assert_eq!(paginator.current_page_first_item(), Some(21));
	/// assert_eq!(paginator.current_page_last_item(), Some(25));
	///
	/// let beyond = Paginator::new(25, 10, 4, "");
	/// assert_eq!(beyond.current_page_first_item(), None);
	/// ```
	pub fn current_page_first_item(&self) -> Option<u64> {
		let first = self
			.current_page
			.checked_sub(1)?
			.checked_mul(self.items_per_page)?
			.checked_add(1)?;
		(first <= self.total_items).then_some(first)
	}

	/// 1-based index of the last item on the current page, clamped to the total
	pub fn current_page_last_item(&self) -> Option<u64> {
		let first = self.current_page_first_item()?;
		let last = first.saturating_add(self.items_per_page).saturating_sub(1);
		Some(last.min(self.total_items))
	}

	/// The page numbers of the visible window, without URLs
	pub fn window(&self) -> Vec<PageNumber> {
		compute_window(self.num_pages, self.current_page, self.max_pages_to_show)
	}

	/// The visible window as entries carrying URLs and the current-page flag
	///
	/// Recomputed on every call.
	///
	/// # Examples
	///
	/// ```
	/// use folio_core::Paginator;
	///
	/// let paginator = Paginator::new(1000, 10, 50, "/p/(:num)");
	/// let pages = paginator.pages();
	/// assert_eq!(pages.first().and_then(|e| e.url()), Some("/p/1"));
	/// assert!(pages[1].is_ellipsis());
	/// assert_eq!(pages.last().and_then(|e| e.url()), Some("/p/100"));
	/// assert_eq!(pages.iter().filter(|e| e.is_current()).count(), 1);
	/// ```
	pub fn pages(&self) -> Vec<PageEntry> {
		self.window()
			.into_iter()
			.map(|slot| match slot {
				PageNumber::Page(number) => {
					PageEntry::page(number, self.page_url(number), number == self.current_page)
				}
				PageNumber::Ellipsis => PageEntry::ellipsis(),
			})
			.collect()
	}

	/// Alias of [`Paginator::pages`]
	pub fn compute_window(&self) -> Vec<PageEntry> {
		self.pages()
	}
}

fn count_pages(total_items: u64, items_per_page: u64) -> u64 {
	if items_per_page == 0 {
		0
	} else {
		total_items.div_ceil(items_per_page)
	}
}
