//! Common test fixtures for reinhardt-dataview-columns tests

#![allow(dead_code)]

use std::sync::Arc;

use reinhardt_dataview_columns::{Column, DataContext, GlobalContext, InMemoryDataReader};
use reinhardt_dataview_core::{Cell, RouteUrlCreator, Sort};
use rstest::*;
use serde_json::{Value, json};

/// Fixture providing sample user records keyed by `id`
#[fixture]
pub fn sample_users() -> Vec<Value> {
	vec![
		json!({"id": 1, "name": "Alice", "email": "alice@example.com", "active": true}),
		json!({"id": 2, "name": "Bob", "email": "bob@example.com", "active": false}),
		json!({"id": 3, "name": "Charlie", "email": "charlie@example.com", "active": true}),
	]
}

/// Fixture providing a reader over the sample users
#[fixture]
pub fn users_reader(sample_users: Vec<Value>) -> Arc<InMemoryDataReader> {
	Arc::new(InMemoryDataReader::keyed_by(sample_users, "id"))
}

/// Builds a context over the sample users linking to `/list` with page size 20.
pub fn list_context(sort: Sort, multi_sort: bool) -> GlobalContext {
	GlobalContext::builder(users_reader(sample_users()))
		.sort(sort)
		.multi_sort(multi_sort)
		.page_size(20)
		.url_creator(RouteUrlCreator::new("/list"))
		.build()
}

/// Fixture providing a context that allows sorting by `name` and `email`
#[fixture]
pub fn sortable_context() -> GlobalContext {
	list_context(Sort::only(["name", "email"]), false)
}

/// Renders the body cell of `column` for `row` at position `index`.
pub fn render_body_cell(
	renderer: &dyn reinhardt_dataview_columns::ColumnRenderer,
	column: &Column,
	key: &Value,
	row: &Value,
	index: usize,
) -> reinhardt_dataview_columns::Result<String> {
	let context = DataContext::new(column, row, key, index);
	Ok(renderer
		.render_body(column, Cell::new(), &context)?
		.render("td")?)
}
