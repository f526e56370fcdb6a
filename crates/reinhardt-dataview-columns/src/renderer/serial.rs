use reinhardt_dataview_core::{Cell, Content};

use super::{ColumnRenderer, ConstructRenderer, Injector, column_cell, footer_cell, short_name};
use crate::column::{Column, ColumnKind, SerialColumn};
use crate::context::{DataContext, GlobalContext, HeaderContext};
use crate::error::{ColumnError, Result};

/// Renders [`SerialColumn`]s: `#` header, one-based row numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialColumnRenderer;

impl SerialColumnRenderer {
	fn column<'c>(&self, column: &'c Column) -> Result<&'c SerialColumn> {
		column.as_serial().ok_or_else(|| {
			ColumnError::unexpected_column(
				short_name(std::any::type_name::<Self>()),
				ColumnKind::Serial,
				column.kind(),
			)
		})
	}
}

impl ConstructRenderer for SerialColumnRenderer {
	fn construct(_injector: &Injector<'_>) -> Result<Self> {
		Ok(Self)
	}
}

impl ColumnRenderer for SerialColumnRenderer {
	fn render_column(&self, column: &Column, cell: Cell, _context: &GlobalContext) -> Result<Cell> {
		Ok(column_cell(cell, &self.column(column)?.column_attributes))
	}

	fn render_header(
		&self,
		column: &Column,
		cell: Cell,
		_context: &HeaderContext<'_>,
	) -> Result<Option<Cell>> {
		let column = self.column(column)?;
		let label = column.header.as_deref().unwrap_or("#");
		Ok(Some(
			cell.add_attributes(&column.header_attributes)
				.content(Content::text(label)),
		))
	}

	fn render_body(&self, column: &Column, cell: Cell, context: &DataContext<'_>) -> Result<Cell> {
		let column = self.column(column)?;
		Ok(cell
			.add_attributes(&column.body_attributes.resolve(context))
			.content(Content::text((context.index + 1).to_string())))
	}

	fn render_footer(&self, column: &Column, cell: Cell, _context: &GlobalContext) -> Result<Cell> {
		let column = self.column(column)?;
		Ok(footer_cell(cell, &column.footer_attributes, column.footer.as_deref()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_row_numbers_are_one_based() {
		let column = Column::from(SerialColumn::new());
		let (row, key) = (json!({}), json!("k"));
		let rendered: Vec<String> = (0..3)
			.map(|index| {
				let context = DataContext::new(&column, &row, &key, index);
				SerialColumnRenderer
					.render_body(&column, Cell::new(), &context)
					.unwrap()
					.render("td")
					.unwrap()
			})
			.collect();
		assert_eq!(rendered, ["<td>1</td>", "<td>2</td>", "<td>3</td>"]);
	}
}
