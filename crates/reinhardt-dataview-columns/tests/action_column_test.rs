//! Action column rendering
//!
//! **Test Coverage:**
//! 1. Templates lay out built-in and custom buttons
//! 2. Per-row visibility hides buttons
//! 3. URL creators resolve from column, renderer arguments and services
//! 4. A visible button without a URL creator fails

mod fixtures;

use std::sync::Arc;

use fixtures::render_body_cell;
use indexmap::IndexMap;
use reinhardt_dataview_columns::{
	ActionButton, ActionColumn, ActionColumnRenderer, ActionUrlCreator, Column, ColumnError,
	ColumnRenderer, DataContext, GlobalContext, HeaderContext, InMemoryDataReader, RendererArgs,
	RendererContainer, RendererId, Resolvable, Services,
};
use reinhardt_dataview_core::{Attributes, CatalogTranslator, Cell, Translator};
use rstest::*;
use serde_json::{Value, json};

fn view_url(action: &str, context: &DataContext<'_>) -> String {
	format!("/{action}/{}", context.key_string())
}

#[fixture]
fn row() -> (Value, Value) {
	(json!(7), json!({"id": 7, "name": "Alice"}))
}

#[rstest]
fn test_template_with_hidden_delete(row: (Value, Value)) {
	let column = Column::from(
		ActionColumn::new()
			.with_template("{view} {delete}")
			.with_visible_button("delete", false)
			.with_url_creator(view_url),
	);
	let (key, data) = row;

	let html = render_body_cell(&ActionColumnRenderer::new(), &column, &key, &data, 0).unwrap();

	assert_eq!(html, r#"<td><a href="/view/7" title="View">🔎</a> </td>"#);
}

#[rstest]
fn test_default_template_renders_three_buttons(row: (Value, Value)) {
	let column = Column::from(ActionColumn::new().with_url_creator(view_url));
	let (key, data) = row;

	let html = render_body_cell(&ActionColumnRenderer::new(), &column, &key, &data, 0).unwrap();

	assert_eq!(
		html,
		"<td><a href=\"/view/7\" title=\"View\">🔎</a>\n\
		 <a href=\"/update/7\" title=\"Update\">✎</a>\n\
		 <a href=\"/delete/7\" title=\"Delete\">❌</a></td>"
	);
}

#[rstest]
fn test_visibility_computed_per_row() {
	let column = Column::from(
		ActionColumn::new()
			.with_template("{delete}")
			.with_visible_button(
				"delete",
				Resolvable::computed(|context| context.data["active"] == json!(false)),
			)
			.with_url_creator(view_url),
	);
	let renderer = ActionColumnRenderer::new();

	let active = render_body_cell(&renderer, &column, &json!(1), &json!({"active": true}), 0);
	let inactive = render_body_cell(&renderer, &column, &json!(2), &json!({"active": false}), 1);

	assert_eq!(active.unwrap(), "<td></td>");
	assert!(inactive.unwrap().contains("/delete/2"));
}

#[rstest]
fn test_custom_and_unknown_buttons(row: (Value, Value)) {
	let column = Column::from(
		ActionColumn::new()
			.with_template("{edit}|{archive}|{missing}")
			.with_button("edit", ActionButton::link("Edit", Attributes::new().with("class", "btn")))
			.with_url_creator(view_url),
	);
	let renderer = ActionColumnRenderer::new().with_button(
		"archive",
		ActionButton::new(|url| format!("<button formaction=\"{url}\">Archive</button>")),
	);
	let (key, data) = row;

	let html = render_body_cell(&renderer, &column, &key, &data, 0).unwrap();

	assert_eq!(
		html,
		r#"<td><a href="/edit/7" class="btn">Edit</a>|<button formaction="/archive/7">Archive</button>|</td>"#
	);
}

#[rstest]
fn test_missing_url_creator(row: (Value, Value)) {
	let column = Column::from(ActionColumn::new().with_template("{view}"));
	let (key, data) = row;

	let error = render_body_cell(&ActionColumnRenderer::new(), &column, &key, &data, 0).unwrap_err();

	assert!(matches!(error, ColumnError::MissingUrlCreator { ref action } if action == "view"));
}

#[rstest]
fn test_hidden_buttons_need_no_url_creator(row: (Value, Value)) {
	let column = Column::from(
		ActionColumn::new()
			.with_template("{view}")
			.with_visible_button("view", false),
	);
	let (key, data) = row;

	let html = render_body_cell(&ActionColumnRenderer::new(), &column, &key, &data, 0).unwrap();
	assert_eq!(html, "<td></td>");
}

#[rstest]
fn test_url_creator_from_renderer_argument(row: (Value, Value)) {
	let id = RendererId::of::<ActionColumnRenderer>();
	let creator: Arc<dyn ActionUrlCreator> = Arc::new(|action: &str, context: &DataContext<'_>| {
		format!("/admin/{action}?id={}", context.key_string())
	});
	let container = RendererContainer::new().add_configs([(
		id,
		RendererArgs::new()
			.with("url_creator", creator)
			.with("template", "{update}".to_string()),
	)]);
	let column = Column::from(ActionColumn::new());
	let (key, data) = row;

	let renderer = container.get(id).unwrap();
	let html = render_body_cell(renderer.as_ref(), &column, &key, &data, 0).unwrap();

	assert_eq!(html, r#"<td><a href="/admin/update?id=7" title="Update">✎</a></td>"#);
}

#[rstest]
fn test_services_provide_creator_translator_and_buttons(row: (Value, Value)) {
	let creator: Arc<dyn ActionUrlCreator> = Arc::new(view_url);
	let translator: Arc<dyn Translator> = Arc::new(
		CatalogTranslator::new().with_translation("reinhardt-dataview", "View", "Ansehen"),
	);
	let mut buttons = IndexMap::new();
	buttons.insert("print".to_string(), ActionButton::link("Print", Attributes::new()));
	let container = RendererContainer::with_services(
		Services::new()
			.with(creator)
			.with(translator)
			.with(buttons),
	);
	let column = Column::from(ActionColumn::new().with_template("{view} {print}"));
	let (key, data) = row;

	let renderer = container.get(RendererId::of::<ActionColumnRenderer>()).unwrap();
	let html = render_body_cell(renderer.as_ref(), &column, &key, &data, 0).unwrap();

	assert_eq!(
		html,
		r#"<td><a href="/view/7" title="Ansehen">🔎</a> <a href="/print/7">Print</a></td>"#
	);
}

#[rstest]
fn test_header_defaults_to_translated_actions() {
	let translator: Arc<dyn Translator> = Arc::new(
		CatalogTranslator::new().with_translation("reinhardt-dataview", "Actions", "Aktionen"),
	);
	let global = GlobalContext::builder(Arc::new(InMemoryDataReader::default()))
		.translator(translator)
		.build();
	let renderer = ActionColumnRenderer::new();

	let default = renderer
		.render_header(&ActionColumn::new().into(), Cell::new(), &HeaderContext::new(&global))
		.unwrap()
		.unwrap();
	let explicit = renderer
		.render_header(
			&ActionColumn::new().with_header("Ops").into(),
			Cell::new(),
			&HeaderContext::new(&global),
		)
		.unwrap()
		.unwrap();

	assert_eq!(default.render("th").unwrap(), "<th>Aktionen</th>");
	assert_eq!(explicit.render("th").unwrap(), "<th>Ops</th>");
}
