//! Table rendering
//!
//! **Test Coverage:**
//! 1. Suppressed header cells and fully suppressed header rows
//! 2. Empty data renders one spanning row
//! 3. Invisible columns are skipped in every section
//! 4. Optional column group and footer sections

mod fixtures;

use std::sync::Arc;

use fixtures::{sample_users, users_reader};
use reinhardt_dataview_columns::{
	CheckboxColumn, DataColumn, GlobalContext, GridRenderer, InMemoryDataReader, RadioColumn,
	SerialColumn,
};
use reinhardt_dataview_core::{Attributes, CatalogTranslator, Translator};
use rstest::*;
use serde_json::Value;

fn unsorted_context(reader: Arc<InMemoryDataReader>) -> GlobalContext {
	GlobalContext::builder(reader).build()
}

#[rstest]
fn test_suppressed_header_cell(users_reader: Arc<InMemoryDataReader>) {
	let grid = GridRenderer::new(vec![
		RadioColumn::new().into(),
		DataColumn::new("name").into(),
	]);

	let html = grid.render(&unsorted_context(users_reader)).unwrap();

	assert!(html.contains("<thead><tr><th>Name</th></tr></thead>"));
}

#[rstest]
fn test_all_headers_suppressed_omits_thead(users_reader: Arc<InMemoryDataReader>) {
	let grid = GridRenderer::new(vec![
		RadioColumn::new().into(),
		CheckboxColumn::new().with_multiple(false).into(),
	]);

	let html = grid.render(&unsorted_context(users_reader)).unwrap();

	assert!(!html.contains("<thead>"));
	assert!(html.starts_with("<table><tbody>"));
}

#[rstest]
fn test_empty_data_spans_visible_columns() {
	let translator: Arc<dyn Translator> = Arc::new(CatalogTranslator::new().with_translation(
		"reinhardt-dataview",
		"No results found.",
		"Keine Ergebnisse.",
	));
	let context = GlobalContext::builder(Arc::new(InMemoryDataReader::default()))
		.translator(translator)
		.build();
	let grid = GridRenderer::new(vec![
		SerialColumn::new().into(),
		DataColumn::new("name").into(),
		DataColumn::new("email").with_visible(false).into(),
	]);

	let html = grid.render(&context).unwrap();

	assert!(html.contains(r#"<tbody><tr><td colspan="2">Keine Ergebnisse.</td></tr></tbody>"#));
}

#[rstest]
fn test_empty_text_disabled() {
	let context = GlobalContext::builder(Arc::new(InMemoryDataReader::default())).build();
	let grid = GridRenderer::new(vec![DataColumn::new("name").into()]).with_empty_text(None);

	assert!(grid.render(&context).unwrap().contains("<tbody></tbody>"));
}

#[rstest]
fn test_invisible_columns_skipped(users_reader: Arc<InMemoryDataReader>) {
	let grid = GridRenderer::new(vec![
		DataColumn::new("name").into(),
		DataColumn::new("email").with_visible(false).into(),
	])
	.with_column_grouping(true)
	.with_footer(true);

	let html = grid.render(&unsorted_context(users_reader)).unwrap();

	assert!(!html.contains("example.com"));
	assert!(!html.contains("Email"));
	assert_eq!(html.matches("<col>").count(), 1);
	assert_eq!(html.matches("<td>").count(), 3 + 1);
}

#[rstest]
fn test_full_table(sample_users: Vec<Value>) {
	let reader = InMemoryDataReader::keyed_by(sample_users.into_iter().take(1).collect(), "id");
	let grid = GridRenderer::new(vec![
		SerialColumn::new()
			.with_column_attributes(Attributes::new().with("class", "narrow"))
			.into(),
		DataColumn::new("name").with_footer("Total: 1").into(),
	])
	.with_table_attributes(Attributes::new().with("class", "grid"))
	.with_body_row_attributes(Attributes::new().with("class", "row"))
	.with_column_grouping(true)
	.with_footer(true);

	let html = grid.render(&unsorted_context(Arc::new(reader))).unwrap();

	assert_eq!(
		html,
		concat!(
			r#"<table class="grid">"#,
			r#"<colgroup><col class="narrow"><col></colgroup>"#,
			"<thead><tr><th>#</th><th>Name</th></tr></thead>",
			r#"<tbody><tr class="row"><td>1</td><td>Alice</td></tr></tbody>"#,
			"<tfoot><tr><td></td><td>Total: 1</td></tr></tfoot>",
			"</table>"
		)
	);
}
