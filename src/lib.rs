//! # Folio
//!
//! Page-window pagination for web views.
//!
//! Folio derives the page count from a total item count and a page size,
//! answers neighbor-page and item-range questions, and computes the window of
//! page numbers a pagination control shows: the first and last page, a run of
//! pages around the current one, and ellipsis markers for the gaps. The window
//! can be rendered as Bootstrap-compatible HTML or as JSON.
//!
//! ## Feature Flags
//!
//! - `minimal` - Page model only ([`core`])
//! - `render` - Navigation building and HTML rendering ([`render`])
//! - `json` - JSON rendering of the navigation
//! - `full` (default) - All of the above
//!
//! ## Quick Example
//!
//! ```rust
//! use folio::prelude::*;
//!
//! let paginator = Paginator::new(1000, 10, 50, "/articles?page=(:num)");
//!
//! assert_eq!(paginator.num_pages(), 100);
//! assert_eq!(paginator.next_url().as_deref(), Some("/articles?page=51"));
//!
//! let html = folio::to_html(&paginator);
//! assert!(html.starts_with("<ul class=\"pagination\">"));
//! assert!(html.contains("<li class=\"page-item active\"><a class=\"page-link\" href=\"/articles?page=50\">50</a></li>"));
//! ```
//!
//! ## Configuration
//!
//! Defaults for the window size, labels, URL pattern and classes can be read
//! from a TOML file, either at the top level or under a `[pagination]` table:
//!
//! ```rust
//! use folio::prelude::*;
//!
//! let settings = PaginationSettings::from_toml_str(
//!     r#"
//!     [pagination]
//!     max_pages_to_show = 5
//!     url_pattern = "/blog/page/(:num)"
//!     "#,
//! )
//! .unwrap();
//! let paginator = Paginator::from_settings(200, 10, 10, &settings).unwrap();
//!
//! let window: Vec<String> = paginator.window().iter().map(ToString::to_string).collect();
//! assert_eq!(window, ["1", "...", "9", "10", "11", "...", "20"]);
//! ```

pub mod core;
#[cfg(feature = "render")]
pub mod render;

pub use folio_core::{
	PageEntry, PageNumber, PaginationError, PaginationSettings, Paginator, Result, UrlPattern,
	compute_window,
};

#[cfg(feature = "render")]
pub use folio_render::{HtmlRenderer, NavRenderer, Navigation};

/// Renders the paginator as HTML with the default class tokens
///
/// Returns an empty string when there is at most one page.
#[cfg(feature = "render")]
pub fn to_html(paginator: &Paginator) -> String {
	Navigation::from_paginator(paginator).to_string()
}

/// Commonly used types
pub mod prelude {
	pub use crate::core::{
		PageEntry, PageNumber, PaginationError, PaginationSettings, Paginator, UrlPattern,
	};

	#[cfg(feature = "render")]
	pub use crate::render::{HtmlRenderer, MarkupClasses, NavItem, NavKind, NavRenderer, Navigation};

	#[cfg(feature = "json")]
	pub use crate::render::JsonRenderer;
}
