use reinhardt_dataview_core::{Cell, Content};

use super::checkbox::selection_input;
use super::{ColumnRenderer, ConstructRenderer, Injector, column_cell, footer_cell, short_name};
use crate::column::{Column, ColumnKind, RadioColumn};
use crate::context::{DataContext, GlobalContext, HeaderContext};
use crate::error::{ColumnError, Result};

/// Renders [`RadioColumn`]s.
///
/// The header cell is suppressed unless the column sets a header.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadioColumnRenderer;

impl RadioColumnRenderer {
	fn column<'c>(&self, column: &'c Column) -> Result<&'c RadioColumn> {
		column.as_radio().ok_or_else(|| {
			ColumnError::unexpected_column(
				short_name(std::any::type_name::<Self>()),
				ColumnKind::Radio,
				column.kind(),
			)
		})
	}
}

impl ConstructRenderer for RadioColumnRenderer {
	fn construct(_injector: &Injector<'_>) -> Result<Self> {
		Ok(Self)
	}
}

impl ColumnRenderer for RadioColumnRenderer {
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
		Ok(column.header.as_deref().map(|header| {
			cell.add_attributes(&column.header_attributes)
				.content(Content::text(header))
		}))
	}

	fn render_body(&self, column: &Column, cell: Cell, context: &DataContext<'_>) -> Result<Cell> {
		let column = self.column(column)?;
		let input = selection_input(
			"radio",
			column.name.clone(),
			&column.input_attributes.resolve(context),
			column.content.as_ref(),
			context,
		);
		Ok(cell
			.add_attributes(&column.body_attributes.resolve(context))
			.content(Content::markup(input)))
	}

	fn render_footer(&self, column: &Column, cell: Cell, _context: &GlobalContext) -> Result<Cell> {
		let column = self.column(column)?;
		Ok(footer_cell(cell, &column.footer_attributes, column.footer.as_deref()))
	}
}
