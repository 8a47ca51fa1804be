//! HTML markup rendering
//!
//! Produces a Bootstrap-compatible `<ul>` list:
//!
//! ```html
//! <ul class="pagination">
//!   <li class="page-item"><a class="page-link" href="/p/1" aria-label="Previous">
//!     <span aria-hidden="true">&laquo;</span><span class="sr-only">Previous</span></a></li>
//!   <li class="page-item"><a class="page-link" href="/p/1">1</a></li>
//!   <li class="page-item active"><a class="page-link" href="/p/2">2</a></li>
//!   <li class="page-item disabled"><span class="page-link">...</span></li>
//!   ...
//! </ul>
//! ```
//!
//! The actual output has no whitespace between tags. Labels and page numbers
//! are escaped as text, URLs and class names as attribute values.

use crate::classes::{MarkupClasses, class_list};
use crate::error::Result;
use crate::escape::{escape, escape_attr};
use crate::nav::{NavItem, NavKind, Navigation};
use crate::renderer::NavRenderer;
use std::fmt::{self, Write};

const PREVIOUS_SYMBOL: &str = "&laquo;";
const NEXT_SYMBOL: &str = "&raquo;";

/// Renders a [`Navigation`] as HTML
///
/// # Examples
///
/// ```
/// use folio_core::Paginator;
/// use folio_render::{HtmlRenderer, NavRenderer, Navigation};
///
/// let paginator = Paginator::new(20, 10, 2, "/p/(:num)");
/// let html = HtmlRenderer::new()
///     .render(&Navigation::from_paginator(&paginator))
///     .unwrap();
///
/// assert!(html.starts_with("<ul class=\"pagination\">"));
/// assert!(html.contains("<li class=\"page-item active\"><a class=\"page-link\" href=\"/p/2\">2</a></li>"));
/// assert!(html.ends_with("</ul>"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlRenderer {
	classes: MarkupClasses,
}

impl HtmlRenderer {
	/// Creates a renderer with the default class tokens
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the class tokens
	pub fn with_classes(mut self, classes: MarkupClasses) -> Self {
		self.classes = classes;
		self
	}

	pub fn classes(&self) -> &MarkupClasses {
		&self.classes
	}

	/// Writes the markup into any [`fmt::Write`] sink
	///
	/// Writes nothing for an empty navigation.
	pub fn write_html<W: Write>(&self, navigation: &Navigation, out: &mut W) -> fmt::Result {
		if navigation.is_empty() {
			return Ok(());
		}

		let container = class_list(
			std::iter::once(self.classes.container.as_str())
				.chain(navigation.outer_classes().iter().map(String::as_str)),
		);
		write!(out, "<ul class=\"{}\">", escape_attr(&container))?;
		for item in navigation.items() {
			self.write_item(item, navigation.inner_classes(), out)?;
		}
		out.write_str("</ul>")
	}

	fn write_item<W: Write>(&self, item: &NavItem, inner_classes: &[String], out: &mut W) -> fmt::Result {
		let mut tokens = vec![self.classes.item.as_str()];
		tokens.extend(inner_classes.iter().map(String::as_str));
		if item.is_active() {
			tokens.push(&self.classes.active);
		}
		if item.is_disabled() {
			tokens.push(&self.classes.disabled);
		}
		write!(out, "<li class=\"{}\">", escape_attr(&class_list(tokens)))?;

		let link_class = escape_attr(&self.classes.link);
		match item.kind() {
			NavKind::Previous | NavKind::Next => {
				let symbol = if item.kind() == NavKind::Previous {
					PREVIOUS_SYMBOL
				} else {
					NEXT_SYMBOL
				};
				let content = format!(
					"<span aria-hidden=\"true\">{}</span><span class=\"{}\">{}</span>",
					symbol,
					escape_attr(&self.classes.screen_reader),
					escape(item.label())
				);
				match item.url() {
					Some(url) if !item.is_disabled() => write!(
						out,
						"<a class=\"{}\" href=\"{}\" aria-label=\"{}\">{}</a>",
						link_class,
						escape_attr(url),
						escape_attr(item.label()),
						content
					)?,
					_ => write!(out, "<span class=\"{}\">{}</span>", link_class, content)?,
				}
			}
			NavKind::Page | NavKind::Ellipsis => match item.url() {
				Some(url) if !item.is_disabled() => write!(
					out,
					"<a class=\"{}\" href=\"{}\">{}</a>",
					link_class,
					escape_attr(url),
					escape(item.label())
				)?,
				_ => write!(
					out,
					"<span class=\"{}\">{}</span>",
					link_class,
					escape(item.label())
				)?,
			},
		}

		out.write_str("</li>")
	}
}

impl NavRenderer for HtmlRenderer {
	fn render(&self, navigation: &Navigation) -> Result<String> {
		let mut html = String::new();
		self.write_html(navigation, &mut html)?;
		Ok(html)
	}

	fn format(&self) -> &'static str {
		"html"
	}
}
