//! Rendering through the facade: HTML markup and JSON documents

use folio::prelude::*;
use folio_integration_tests::init_tracing;
use rstest::*;
use serde_json::json;

#[fixture]
fn paginator() -> Paginator {
	init_tracing();
	Paginator::new(52, 10, 3, "/p/(:num)")
}

#[rstest]
fn test_html_markup(paginator: Paginator) {
	let html = folio::to_html(&paginator);

	assert_eq!(
		html,
		concat!(
			"<ul class=\"pagination\">",
			"<li class=\"page-item\"><a class=\"page-link\" href=\"/p/2\" aria-label=\"Previous\">",
			"<span aria-hidden=\"true\">&laquo;</span><span class=\"sr-only\">Previous</span></a></li>",
			"<li class=\"page-item\"><a class=\"page-link\" href=\"/p/1\">1</a></li>",
			"<li class=\"page-item\"><a class=\"page-link\" href=\"/p/2\">2</a></li>",
			"<li class=\"page-item active\"><a class=\"page-link\" href=\"/p/3\">3</a></li>",
			"<li class=\"page-item\"><a class=\"page-link\" href=\"/p/4\">4</a></li>",
			"<li class=\"page-item\"><a class=\"page-link\" href=\"/p/5\">5</a></li>",
			"<li class=\"page-item\"><a class=\"page-link\" href=\"/p/6\">6</a></li>",
			"<li class=\"page-item\"><a class=\"page-link\" href=\"/p/4\" aria-label=\"Next\">",
			"<span aria-hidden=\"true\">&raquo;</span><span class=\"sr-only\">Next</span></a></li>",
			"</ul>"
		)
	);
}

#[rstest]
fn test_html_with_ellipses_and_classes() {
	init_tracing();
	let paginator = Paginator::new(1000, 10, 1, "/p/(:num)")
		.with_max_pages_to_show(5)
		.unwrap()
		.with_outer_classes(["justify-content-center"])
		.with_inner_classes(["shadow-sm"]);
	let html = folio::to_html(&paginator);

	assert!(html.starts_with("<ul class=\"pagination justify-content-center\">"));
	assert!(html.contains(
		"<li class=\"page-item shadow-sm disabled\"><span class=\"page-link\"><span aria-hidden=\"true\">&laquo;</span>"
	));
	assert_eq!(
		html.matches("<li class=\"page-item shadow-sm disabled\"><span class=\"page-link\">...</span></li>")
			.count(),
		1
	);
	assert!(html.contains("<a class=\"page-link\" href=\"/p/100\">100</a>"));
}

#[rstest]
fn test_renderers_share_navigation(paginator: Paginator) {
	let navigation = Navigation::from_paginator(&paginator);
	let renderers: Vec<Box<dyn NavRenderer>> =
		vec![Box::new(HtmlRenderer::new()), Box::new(JsonRenderer::new())];

	let formats: Vec<&str> = renderers.iter().map(|renderer| renderer.format()).collect();
	assert_eq!(formats, ["html", "json"]);

	for renderer in &renderers {
		assert!(!renderer.render(&navigation).unwrap().is_empty());
	}
}

#[rstest]
fn test_json_document(paginator: Paginator) {
	let navigation = Navigation::from_paginator(&paginator);
	let rendered = JsonRenderer::new().render(&navigation).unwrap();
	let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

	let items = value["items"].as_array().unwrap();
	assert_eq!(items.len(), 8);
	assert_eq!(
		items[0],
		json!({"kind": "previous", "label": "Previous", "page": 2, "url": "/p/2", "active": false, "disabled": false})
	);
	assert_eq!(
		items[3],
		json!({"kind": "page", "label": "3", "page": 3, "url": "/p/3", "active": true, "disabled": false})
	);
	assert_eq!(items[7]["kind"], "next");
	assert_eq!(value["outer_classes"], json!([]));
}

#[rstest]
fn test_window_serializes_with_ellipsis_strings() {
	let paginator = Paginator::new(1000, 10, 50, "/p/(:num)");
	let value = serde_json::to_value(paginator.window()).unwrap();

	assert_eq!(value, json!([1, "...", 47, 48, 49, 50, 51, 52, 53, 54, "...", 100]));
}
