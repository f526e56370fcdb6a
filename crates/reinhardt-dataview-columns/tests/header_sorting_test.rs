//! Sort link negotiation for column headers
//!
//! **Test Coverage:**
//! 1. A column cycles unsorted → ascending → descending → unsorted
//! 2. In multi-sort mode the other columns keep their order
//! 3. Headers stay untouched when sorting is off or the property is not allowed
//! 4. Data column headers render the negotiated link

mod fixtures;

use std::sync::Arc;

use fixtures::{list_context, sortable_context};
use proptest::prelude::*;
use reinhardt_dataview_columns::{
	Column, ColumnRenderer, DataColumn, DataColumnRenderer, GlobalContext, HeaderContext,
	InMemoryDataReader,
};
use reinhardt_dataview_core::{
	Cell, RouteUrlCreator, Sort, SortDirection, SortOrder, SortableHeaderTheme,
};
use rstest::*;

fn next_sort(url: &str) -> Option<String> {
	url.split_once("sort=")
		.map(|(_, sort)| sort.replace("%2C", ","))
}

#[rstest]
#[case("", "sort=name", "sortable", None)]
#[case("name", "sort=-name", "sortable sorted-asc", Some("asc"))]
#[case("-name", "", "sortable sorted-desc", Some("desc"))]
fn test_single_sort_cycle(
	#[case] current: &str,
	#[case] expected_sort: &str,
	#[case] expected_class: &str,
	#[case] link_class: Option<&str>,
) {
	let global = list_context(Sort::only(["name", "email"]).with_order_string(current), false);
	let header = HeaderContext::new(&global).prepare_sortable(Cell::new(), "name");

	let link = header.link.expect("name is sortable");
	let expected_url = if expected_sort.is_empty() {
		"/list?pagesize=20".to_string()
	} else {
		format!("/list?pagesize=20&{expected_sort}")
	};
	assert_eq!(link.url, expected_url);
	assert_eq!(
		header.cell.get_attributes().get("class").and_then(|class| class.resolve()),
		Some(expected_class.to_string())
	);
	assert_eq!(
		link.attributes.get("class").and_then(|class| class.resolve()),
		link_class.map(str::to_string)
	);
}

#[rstest]
fn test_single_sort_replaces_other_columns() {
	let global = list_context(Sort::only(["name", "email"]).with_order_string("email"), false);
	let header = HeaderContext::new(&global).prepare_sortable(Cell::new(), "name");
	assert_eq!(header.link.unwrap().url, "/list?pagesize=20&sort=name");
}

#[rstest]
fn test_multi_sort_appends_and_removes() {
	let global = list_context(Sort::any().with_order_string("email,-name"), true);
	let context = HeaderContext::new(&global);

	let name = context.prepare_sortable(Cell::new(), "name").link.unwrap();
	let id = context.prepare_sortable(Cell::new(), "id").link.unwrap();

	assert_eq!(next_sort(&name.url).as_deref(), Some("email"));
	assert_eq!(next_sort(&id.url).as_deref(), Some("email,-name,id"));
}

fn order_strategy() -> impl Strategy<Value = SortOrder> {
	proptest::collection::vec(
		(prop::sample::select(vec!["a", "b", "c", "d"]), any::<bool>()),
		0..4,
	)
	.prop_map(|entries| {
		entries
			.into_iter()
			.map(|(property, ascending)| {
				let direction = if ascending {
					SortDirection::Asc
				} else {
					SortDirection::Desc
				};
				(property, direction)
			})
			.collect()
	})
}

proptest! {
	#[test]
	fn prop_multi_sort_leaves_other_columns(
		order in order_strategy(),
		property in prop::sample::select(vec!["a", "b", "c", "d"]),
	) {
		let global = list_context(Sort::any().with_order(order.clone()), true);
		let link = HeaderContext::new(&global)
			.prepare_sortable(Cell::new(), property)
			.link
			.unwrap();
		let next = SortOrder::parse(&next_sort(&link.url).unwrap_or_default());

		for (other, direction) in order.iter().filter(|(other, _)| *other != property) {
			prop_assert_eq!(next.get(other), Some(direction));
		}
		match order.get(property) {
			None => {
				prop_assert_eq!(next.get(property), Some(SortDirection::Asc));
			}
			Some(SortDirection::Asc) => {
				prop_assert_eq!(next.get(property), Some(SortDirection::Desc));
			}
			Some(SortDirection::Desc) => {
				prop_assert_eq!(next.get(property), None);
			}
		}
	}
}

#[rstest]
fn test_no_sort_leaves_header_untouched() {
	let global = GlobalContext::builder(Arc::new(InMemoryDataReader::default()))
		.url_creator(RouteUrlCreator::new("/list"))
		.build();
	let cell = Cell::new().attribute("id", "h");

	let header = HeaderContext::new(&global).prepare_sortable(cell.clone(), "name");

	assert_eq!(header.cell, cell);
	assert!(header.link.is_none());
	assert!(header.prepend.is_empty() && header.append.is_empty());
}

#[rstest]
fn test_disallowed_property_leaves_header_untouched(sortable_context: GlobalContext) {
	let header = HeaderContext::new(&sortable_context).prepare_sortable(Cell::new(), "password");
	assert!(!header.is_sortable());
	assert_eq!(header.cell, Cell::new());
}

#[rstest]
fn test_original_sort_decides_allowed_properties() {
	let global = GlobalContext::builder(Arc::new(InMemoryDataReader::default()))
		.sort(Sort::any())
		.original_sort(Sort::only(["name"]))
		.build();
	let context = HeaderContext::new(&global);

	assert!(context.prepare_sortable(Cell::new(), "name").is_sortable());
	assert!(!context.prepare_sortable(Cell::new(), "email").is_sortable());
}

#[rstest]
fn test_theme_markup_and_link_attributes() {
	let mut theme = SortableHeaderTheme::arrows();
	theme.link_attributes.insert("rel".into(), "nofollow".into());
	let global = GlobalContext::builder(Arc::new(InMemoryDataReader::default()))
		.sort(Sort::any().with_order_string("-name"))
		.theme(theme)
		.build();

	let header = HeaderContext::new(&global).prepare_sortable(Cell::new(), "name");

	assert_eq!(
		header.decorate("Name"),
		r#"<a href="" rel="nofollow" class="desc">Name</a> <span class="sort-indicator">&#8595;</span>"#
	);
}

#[rstest]
fn test_data_column_header_end_to_end() {
	let global = list_context(Sort::only(["name"]), false);
	let column = Column::from(DataColumn::new("name"));

	let cell = DataColumnRenderer::new()
		.render_header(&column, Cell::new(), &HeaderContext::new(&global))
		.unwrap()
		.unwrap();

	assert_eq!(
		cell.render("th").unwrap(),
		r#"<th class="sortable"><a href="/list?pagesize=20&amp;sort=name">Name</a></th>"#
	);
}
