//! End-to-end paginator scenarios through the `folio` facade

use folio::prelude::*;
use folio_integration_tests::{init_tracing, labels, window_labels};
use rstest::*;

#[fixture]
fn articles() -> Paginator {
	init_tracing();
	Paginator::new(1000, 10, 50, "/articles?page=(:num)")
}

#[rstest]
fn test_small_set_lists_every_page() {
	init_tracing();
	let paginator = Paginator::new(52, 10, 1, "/p/(:num)");

	assert_eq!(paginator.num_pages(), 6);
	assert_eq!(window_labels(&paginator), labels(&[1, 2, 3, 4, 5, 6]));
	assert_eq!(paginator.prev_page(), None);
	assert_eq!(paginator.next_page(), Some(2));

	let current: Vec<u64> = paginator
		.pages()
		.iter()
		.filter(|entry| entry.is_current())
		.filter_map(|entry| entry.number().page())
		.collect();
	assert_eq!(current, [1]);
}

#[rstest]
fn test_large_set_centers_current_page(articles: Paginator) {
	assert_eq!(articles.num_pages(), 100);
	assert_eq!(
		window_labels(&articles),
		labels(&[1, 0, 47, 48, 49, 50, 51, 52, 53, 54, 0, 100])
	);
	assert_eq!(articles.prev_url().as_deref(), Some("/articles?page=49"));
	assert_eq!(articles.next_url().as_deref(), Some("/articles?page=51"));
}

#[rstest]
#[case(1, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 100])]
#[case(5, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 100])]
#[case(6, &[1, 0, 3, 4, 5, 6, 7, 8, 9, 10, 0, 100])]
#[case(97, &[1, 0, 94, 95, 96, 97, 98, 99, 100])]
#[case(100, &[1, 0, 92, 93, 94, 95, 96, 97, 98, 99, 100])]
fn test_window_slides(mut articles: Paginator, #[case] current: u64, #[case] expected: &[u64]) {
	articles.set_current_page(current);
	assert_eq!(window_labels(&articles), labels(expected));
}

#[rstest]
#[case(25, 10, 3, Some(21), Some(25))]
#[case(25, 10, 1, Some(1), Some(10))]
#[case(25, 10, 4, None, None)]
#[case(25, 10, 0, None, None)]
#[case(25, 0, 1, Some(1), Some(0))]
fn test_item_range(
	#[case] total: u64,
	#[case] per_page: u64,
	#[case] current: u64,
	#[case] first: Option<u64>,
	#[case] last: Option<u64>,
) {
	let paginator = Paginator::new(total, per_page, current, "");
	assert_eq!(paginator.current_page_first_item(), first);
	assert_eq!(paginator.current_page_last_item(), last);
}

#[rstest]
fn test_max_pages_validation() {
	init_tracing();
	let mut paginator = Paginator::new(1000, 10, 50, "/p/(:num)");
	let before = paginator.window();

	let error = paginator.set_max_pages_to_show(2).unwrap_err();
	assert!(error.is_invalid_argument());
	assert_eq!(paginator.max_pages_to_show(), 10);
	assert_eq!(paginator.window(), before);

	paginator.set_max_pages_to_show(3).unwrap();
	assert_eq!(window_labels(&paginator), labels(&[1, 0, 50, 0, 100]));
}

#[rstest]
fn test_page_url_replaces_placeholder() {
	let paginator = Paginator::new(100, 10, 1, "/p/(:num)");
	assert_eq!(paginator.page_url(5), "/p/5");

	let paginator = Paginator::new(100, 10, 1, "/p/(:num)?from=(:num)");
	assert_eq!(paginator.page_url(7), "/p/7?from=7");
}

#[rstest]
fn test_mutation_recomputes_everything(mut articles: Paginator) {
	articles.set_items_per_page(100).set_current_page(2);
	assert_eq!(articles.num_pages(), 10);
	assert_eq!(window_labels(&articles), labels(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));

	articles.set_total_items(5);
	assert_eq!(articles.num_pages(), 1);
	assert!(articles.window().is_empty());
	assert!(folio::to_html(&articles).is_empty());
}

#[rstest]
fn test_paginator_is_send_and_sync() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<Paginator>();
	assert_send_sync::<Navigation>();
	assert_send_sync::<PaginationError>();
}
