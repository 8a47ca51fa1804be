//! # Folio Core
//!
//! Page model for Folio: derives the page count from a total item count and a
//! page size, answers neighbor-page and item-range questions, and computes
//! the window of page numbers a pagination control displays.
//!
//! ## Window Shape
//!
//! When the page count fits into `max_pages_to_show` every page is listed.
//! Otherwise the first and last page are always shown, a run of pages slides
//! around the current page, and ellipsis markers fill the gaps:
//!
//! ```text
//! 1 … 47 48 49 [50] 51 52 53 54 … 100
//! ```
//!
//! ## Example
//!
//! ```rust
//! use folio_core::{PageNumber, Paginator};
//!
//! let paginator = Paginator::new(1000, 10, 50, "/articles?page=(:num)");
//!
//! assert_eq!(paginator.num_pages(), 100);
//! assert_eq!(paginator.current_page_first_item(), Some(491));
//! assert_eq!(paginator.current_page_last_item(), Some(500));
//!
//! let window: Vec<String> = paginator.window().iter().map(PageNumber::to_string).collect();
//! assert_eq!(
//!     window,
//!     ["1", "...", "47", "48", "49", "50", "51", "52", "53", "54", "...", "100"]
//! );
//! ```

pub mod error;
pub mod paginator;
pub mod settings;
pub mod url;
pub mod window;

// Re-exports for convenience
pub use error::{PaginationError, Result};
pub use paginator::{DEFAULT_NEXT_LABEL, DEFAULT_PREVIOUS_LABEL, Paginator};
pub use settings::PaginationSettings;
pub use url::{NUM_PLACEHOLDER, UrlPattern};
pub use window::{
	DEFAULT_MAX_PAGES_TO_SHOW, ELLIPSIS_TEXT, MIN_MAX_PAGES_TO_SHOW, PageEntry, PageNumber,
	compute_window,
};
