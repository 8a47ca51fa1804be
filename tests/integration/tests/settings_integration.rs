//! Settings files applied to paginators and renderers

use folio::prelude::*;
use folio_integration_tests::{init_tracing, labels, window_labels};
use rstest::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn settings_file(contents: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

#[rstest]
fn test_file_settings_apply_to_paginator() {
	init_tracing();
	let file = settings_file(
		r#"
[server]
port = 8080

[pagination]
max_pages_to_show = 7
previous_label = "Prev"
next_label = "More"
url_pattern = "/blog/page/(:num)"
outer_classes = ["pagination-sm"]
"#,
	);
	let settings = PaginationSettings::from_toml_file(file.path()).unwrap();
	let paginator = Paginator::from_settings(300, 10, 15, &settings).unwrap();

	assert_eq!(paginator.max_pages_to_show(), 7);
	assert_eq!(paginator.previous_label(), "Prev");
	assert_eq!(paginator.next_url().as_deref(), Some("/blog/page/16"));
	assert_eq!(window_labels(&paginator), labels(&[1, 0, 13, 14, 15, 16, 17, 0, 30]));

	let html = folio::to_html(&paginator);
	assert!(html.starts_with("<ul class=\"pagination pagination-sm\">"));
	assert!(html.contains("aria-label=\"More\""));
}

#[rstest]
fn test_top_level_settings_without_section() {
	let settings = PaginationSettings::from_toml_str("max_pages_to_show = 4\n").unwrap();
	let paginator = Paginator::from_settings(100, 10, 5, &settings).unwrap();
	assert_eq!(paginator.max_pages_to_show(), 4);
	assert_eq!(paginator.url_pattern().as_str(), "");
}

#[rstest]
#[case("[pagination]\nmax_pages_to_show = 2\n")]
#[case("max_pages_to_show = 0\n")]
fn test_invalid_window_size_is_rejected(#[case] contents: &str) {
	let error = PaginationSettings::from_toml_str(contents).unwrap_err();
	assert!(error.is_invalid_argument());
}

#[rstest]
#[case("pagination = 5\n")]
#[case("[pagination]\nmax_pages_to_show = \"ten\"\n")]
#[case("not toml at all")]
fn test_malformed_settings(#[case] contents: &str) {
	assert!(PaginationSettings::from_toml_str(contents).is_err());
}

#[rstest]
fn test_missing_file() {
	let directory = tempfile::tempdir().unwrap();
	let error = PaginationSettings::from_toml_file(directory.path().join("missing.toml")).unwrap_err();
	assert!(matches!(error, PaginationError::Io(_)));
}
