//! HTML escaping for text content and attribute values

/// Escape HTML special characters in text content
///
/// # Examples
///
/// ```
/// use folio_render::escape::escape;
///
/// assert_eq!(escape("Next"), "Next");
/// assert_eq!(escape("<b>Next</b>"), "&lt;b&gt;Next&lt;/b&gt;");
/// assert_eq!(escape("Tom & Jerry's"), "Tom &amp; Jerry&#x27;s");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape an attribute value, including whitespace control characters
///
/// # Examples
///
/// ```
/// use folio_render::escape::escape_attr;
///
/// assert_eq!(escape_attr("/p/2?a=1&b=2"), "/p/2?a=1&amp;b=2");
/// assert_eq!(escape_attr("\" onclick=\"x"), "&quot; onclick=&quot;x");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}
