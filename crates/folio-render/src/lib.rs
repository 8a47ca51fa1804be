//! # Folio Render
//!
//! Turns a [`folio_core::Paginator`] into a pagination control.
//!
//! Rendering happens in two steps. [`Navigation::from_paginator`] resolves
//! the "previous" control, the page window and the "next" control into a list
//! of [`NavItem`]s with their URLs and states. A [`NavRenderer`] then writes
//! that list out:
//!
//! - [`HtmlRenderer`]: Bootstrap-compatible `<ul class="pagination">` markup
//! - [`JsonRenderer`]: a JSON document for client-side controls (feature `json`)
//!
//! ## Example
//!
//! ```rust
//! use folio_core::Paginator;
//! use folio_render::Navigation;
//!
//! let paginator = Paginator::new(30, 10, 3, "/p/(:num)");
//! let html = Navigation::from_paginator(&paginator).to_string();
//!
//! assert!(html.contains("<li class=\"page-item active\"><a class=\"page-link\" href=\"/p/3\">3</a></li>"));
//! assert!(html.contains("<li class=\"page-item disabled\"><span class=\"page-link\"><span aria-hidden=\"true\">&raquo;</span>"));
//! ```

pub mod classes;
pub mod error;
pub mod escape;
pub mod html;
#[cfg(feature = "json")]
pub mod json;
pub mod nav;
pub mod renderer;

pub use classes::MarkupClasses;
pub use error::{RenderError, Result};
pub use html::HtmlRenderer;
#[cfg(feature = "json")]
pub use json::JsonRenderer;
pub use nav::{NavItem, NavKind, Navigation};
pub use renderer::NavRenderer;
