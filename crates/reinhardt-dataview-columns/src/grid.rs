//! Table rendering
//!
//! [`GridRenderer`] drives the column renderers over the rows of a
//! [`GlobalContext`] and assembles a `<table>`.

use std::sync::Arc;

use reinhardt_dataview_core::{Attributes, Cell, Content, Tag};

use crate::column::Column;
use crate::container::RendererContainer;
use crate::context::{DataContext, GlobalContext, HeaderContext};
use crate::error::Result;
use crate::renderer::ColumnRenderer;

/// Renders columns and rows into an HTML table.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use reinhardt_dataview_columns::{
///     DataColumn, GlobalContext, GridRenderer, InMemoryDataReader, SerialColumn,
/// };
/// use serde_json::json;
///
/// let reader = InMemoryDataReader::from_records(vec![json!({"name": "Alice"})]);
/// let context = GlobalContext::builder(Arc::new(reader)).build();
/// let grid = GridRenderer::new(vec![SerialColumn::new().into(), DataColumn::new("name").into()]);
///
/// assert_eq!(
///     grid.render(&context).unwrap(),
///     "<table><thead><tr><th>#</th><th>Name</th></tr></thead>\
///      <tbody><tr><td>1</td><td>Alice</td></tr></tbody></table>"
/// );
/// ```
#[derive(Debug)]
pub struct GridRenderer {
	columns: Vec<Column>,
	container: RendererContainer,
	table_attributes: Attributes,
	header_row_attributes: Attributes,
	body_row_attributes: Attributes,
	footer_row_attributes: Attributes,
	column_grouping: bool,
	show_header: bool,
	show_footer: bool,
	empty_text: Option<String>,
	empty_text_attributes: Attributes,
}

impl GridRenderer {
	/// Creates a grid over `columns` with a fresh renderer container.
	pub fn new(columns: Vec<Column>) -> Self {
		Self {
			columns,
			container: RendererContainer::new(),
			table_attributes: Attributes::new(),
			header_row_attributes: Attributes::new(),
			body_row_attributes: Attributes::new(),
			footer_row_attributes: Attributes::new(),
			column_grouping: false,
			show_header: true,
			show_footer: false,
			empty_text: Some("No results found.".to_string()),
			empty_text_attributes: Attributes::new(),
		}
	}

	/// Resolves renderers from `container`.
	pub fn with_container(mut self, container: RendererContainer) -> Self {
		self.container = container;
		self
	}

	/// Sets `<table>` attributes.
	pub fn with_table_attributes(mut self, attributes: Attributes) -> Self {
		self.table_attributes = attributes;
		self
	}

	/// Sets attributes of the header row.
	pub fn with_header_row_attributes(mut self, attributes: Attributes) -> Self {
		self.header_row_attributes = attributes;
		self
	}

	/// Sets attributes of every body row.
	pub fn with_body_row_attributes(mut self, attributes: Attributes) -> Self {
		self.body_row_attributes = attributes;
		self
	}

	/// Sets attributes of the footer row.
	pub fn with_footer_row_attributes(mut self, attributes: Attributes) -> Self {
		self.footer_row_attributes = attributes;
		self
	}

	/// Emits a `<colgroup>` with one `<col>` per column.
	pub fn with_column_grouping(mut self, column_grouping: bool) -> Self {
		self.column_grouping = column_grouping;
		self
	}

	/// Emits the `<thead>` section.
	pub fn with_header(mut self, show_header: bool) -> Self {
		self.show_header = show_header;
		self
	}

	/// Emits the `<tfoot>` section.
	pub fn with_footer(mut self, show_footer: bool) -> Self {
		self.show_footer = show_footer;
		self
	}

	/// Sets the text shown when there are no rows; `None` renders an empty body.
	pub fn with_empty_text(mut self, empty_text: Option<String>) -> Self {
		self.empty_text = empty_text;
		self
	}

	/// Sets attributes of the empty-text cell.
	pub fn with_empty_text_attributes(mut self, attributes: Attributes) -> Self {
		self.empty_text_attributes = attributes;
		self
	}

	/// The renderer container.
	pub fn container(&self) -> &RendererContainer {
		&self.container
	}

	/// Renders the table.
	pub fn render(&self, context: &GlobalContext) -> Result<String> {
		let columns = self
			.columns
			.iter()
			.filter(|column| column.is_visible())
			.map(|column| Ok((column, self.container.get(column.renderer())?)))
			.collect::<Result<Vec<_>>>()?;
		let rows = context.reader().read();
		tracing::debug!(columns = columns.len(), rows = rows.len(), "Rendering grid");

		let mut html = String::new();
		if self.column_grouping {
			html.push_str(&self.render_column_group(&columns, context)?);
		}
		if self.show_header {
			html.push_str(&self.render_header(&columns, context)?);
		}
		html.push_str(&self.render_body(&columns, &rows, context)?);
		if self.show_footer {
			html.push_str(&self.render_footer(&columns, context)?);
		}

		Ok(Tag::known("table")
			.attributes(self.table_attributes.clone())
			.content(Content::markup(html))
			.render())
	}

	fn render_column_group(
		&self,
		columns: &[(&Column, Arc<dyn ColumnRenderer>)],
		context: &GlobalContext,
	) -> Result<String> {
		let mut cols = String::new();
		for (column, renderer) in columns {
			cols.push_str(&renderer.render_column(column, Cell::new(), context)?.render("col")?);
		}
		Ok(wrap("colgroup", &Attributes::new(), cols))
	}

	fn render_header(
		&self,
		columns: &[(&Column, Arc<dyn ColumnRenderer>)],
		context: &GlobalContext,
	) -> Result<String> {
		let header_context = HeaderContext::new(context);
		let mut cells = String::new();
		let mut rendered = 0;
		for (column, renderer) in columns {
			if let Some(cell) = renderer.render_header(column, Cell::new(), &header_context)? {
				cells.push_str(&cell.render("th")?);
				rendered += 1;
			}
		}
		if rendered == 0 {
			tracing::trace!("All header cells suppressed, omitting thead");
			return Ok(String::new());
		}
		Ok(wrap("thead", &Attributes::new(), wrap("tr", &self.header_row_attributes, cells)))
	}

	fn render_body(
		&self,
		columns: &[(&Column, Arc<dyn ColumnRenderer>)],
		rows: &[(serde_json::Value, serde_json::Value)],
		context: &GlobalContext,
	) -> Result<String> {
		let mut body = String::new();
		if let Some(empty_text) = self.empty_text.as_ref().filter(|_| rows.is_empty()) {
			let cell = Cell::new()
				.attributes(self.empty_text_attributes.clone())
				.attribute("colspan", columns.len().to_string())
				.content(Content::text(context.translate(empty_text)));
			body.push_str(&wrap("tr", &Attributes::new(), cell.render("td")?));
		}
		for (index, (key, data)) in rows.iter().enumerate() {
			let mut cells = String::new();
			for (column, renderer) in columns {
				let data_context = DataContext::new(column, data, key, index);
				cells.push_str(&renderer.render_body(column, Cell::new(), &data_context)?.render("td")?);
			}
			body.push_str(&wrap("tr", &self.body_row_attributes, cells));
		}
		Ok(wrap("tbody", &Attributes::new(), body))
	}

	fn render_footer(
		&self,
		columns: &[(&Column, Arc<dyn ColumnRenderer>)],
		context: &GlobalContext,
	) -> Result<String> {
		let mut cells = String::new();
		for (column, renderer) in columns {
			cells.push_str(&renderer.render_footer(column, Cell::new(), context)?.render("td")?);
		}
		Ok(wrap("tfoot", &Attributes::new(), wrap("tr", &self.footer_row_attributes, cells)))
	}
}

fn wrap(name: &'static str, attributes: &Attributes, html: String) -> String {
	Tag::known(name)
		.attributes(attributes.clone())
		.content(Content::markup(html))
		.render()
}
