use reinhardt_dataview_core::html::encode;
use reinhardt_dataview_core::{Cell, Content};

use super::{ColumnRenderer, ConstructRenderer, Injector, column_cell, footer_cell, short_name};
use crate::column::{Column, ColumnKind, DataColumn};
use crate::context::{DataContext, GlobalContext, HeaderContext, value_to_string};
use crate::error::{ColumnError, Result};

/// Renders [`DataColumn`]s.
///
/// Arguments:
///
/// - `null_display` (`String`): text shown for missing and `null` values
#[derive(Debug, Clone, Default)]
pub struct DataColumnRenderer {
	null_display: String,
}

impl DataColumnRenderer {
	/// Creates a renderer showing missing values as empty text.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the text shown for missing and `null` values.
	pub fn with_null_display(mut self, null_display: impl Into<String>) -> Self {
		self.null_display = null_display.into();
		self
	}

	fn column<'c>(&self, column: &'c Column) -> Result<&'c DataColumn> {
		column.as_data().ok_or_else(|| {
			ColumnError::unexpected_column(
				short_name(std::any::type_name::<Self>()),
				ColumnKind::Data,
				column.kind(),
			)
		})
	}
}

impl ConstructRenderer for DataColumnRenderer {
	fn construct(injector: &Injector<'_>) -> Result<Self> {
		Ok(Self {
			null_display: injector.arg::<String>("null_display")?.unwrap_or_default(),
		})
	}
}

fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

impl ColumnRenderer for DataColumnRenderer {
	fn render_column(&self, column: &Column, cell: Cell, _context: &GlobalContext) -> Result<Cell> {
		Ok(column_cell(cell, &self.column(column)?.column_attributes))
	}

	fn render_header(
		&self,
		column: &Column,
		cell: Cell,
		context: &HeaderContext<'_>,
	) -> Result<Option<Cell>> {
		let column = self.column(column)?;
		let label = match (&column.header, &column.property) {
			(Some(header), _) if !column.encode_header => header.clone(),
			(Some(header), _) => encode(header, true).into_owned(),
			(None, Some(property)) => encode(&capitalize(property), true).into_owned(),
			(None, None) => String::new(),
		};

		let cell = cell.add_attributes(&column.header_attributes);
		let (cell, label) = match column.property.as_deref() {
			Some(property) if column.with_sorting => {
				let sortable = context.prepare_sortable(cell, property);
				let label = sortable.decorate(&label);
				(sortable.cell, label)
			}
			_ => (cell, label),
		};
		Ok(Some(cell.content(Content::markup(label))))
	}

	fn render_body(&self, column: &Column, cell: Cell, context: &DataContext<'_>) -> Result<Cell> {
		let column = self.column(column)?;
		let content = match &column.content {
			Some(content) => content.resolve(context),
			None => column
				.property
				.as_deref()
				.and_then(|property| context.value(property))
				.and_then(value_to_string)
				.unwrap_or_else(|| self.null_display.clone()),
		};
		Ok(cell
			.add_attributes(&column.body_attributes.resolve(context))
			.content(Content::text(content))
			.encode(column.encode_content))
	}

	fn render_footer(&self, column: &Column, cell: Cell, _context: &GlobalContext) -> Result<Cell> {
		let column = self.column(column)?;
		Ok(footer_cell(cell, &column.footer_attributes, column.footer.as_deref()))
	}
}
