//! Page model module.
//!
//! This module provides the paginator, the page-window computation,
//! URL patterns, settings and errors.
//!
//! # Examples
//!
//! ```rust
//! use folio::core::{PageNumber, compute_window};
//!
//! let window = compute_window(20, 1, 5);
//! assert_eq!(window[..3], [PageNumber::Page(1), PageNumber::Page(2), PageNumber::Page(3)]);
//! assert_eq!(window[4], PageNumber::Ellipsis);
//! ```

pub use folio_core::*;
