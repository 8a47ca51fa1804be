//! Navigation and rendering module.
//!
//! This module provides the navigation entries built from a paginator and
//! the HTML and JSON renderers.
//!
//! # Examples
//!
//! ```rust
//! use folio::core::Paginator;
//! use folio::render::{HtmlRenderer, MarkupClasses, NavRenderer, Navigation};
//!
//! let renderer = HtmlRenderer::new().with_classes(MarkupClasses {
//!     screen_reader: "visually-hidden".to_string(),
//!     ..Default::default()
//! });
//! let navigation = Navigation::from_paginator(&Paginator::new(30, 10, 2, "/p/(:num)"));
//! let html = renderer.render(&navigation).unwrap();
//! assert!(html.contains("<span class=\"visually-hidden\">Previous</span>"));
//! ```

pub use folio_render::*;
