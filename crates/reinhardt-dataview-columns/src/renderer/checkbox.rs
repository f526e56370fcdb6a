use reinhardt_dataview_core::{Attributes, Cell, Content, Tag};

use super::{ColumnRenderer, ConstructRenderer, Injector, column_cell, footer_cell, short_name};
use crate::column::{CheckboxColumn, Column, ColumnKind, InputContentFn};
use crate::context::{DataContext, GlobalContext, HeaderContext};
use crate::error::{ColumnError, Result};

/// Renders [`CheckboxColumn`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxColumnRenderer;

impl CheckboxColumnRenderer {
	fn column<'c>(&self, column: &'c Column) -> Result<&'c CheckboxColumn> {
		column.as_checkbox().ok_or_else(|| {
			ColumnError::unexpected_column(
				short_name(std::any::type_name::<Self>()),
				ColumnKind::Checkbox,
				column.kind(),
			)
		})
	}
}

impl ConstructRenderer for CheckboxColumnRenderer {
	fn construct(_injector: &Injector<'_>) -> Result<Self> {
		Ok(Self)
	}
}

/// Renders a selection input for one row.
///
/// `name` and `value` default to `name` and the row key; `attributes` may
/// override both.
pub(super) fn selection_input(
	input_type: &'static str,
	name: String,
	attributes: &Attributes,
	wrap: Option<&InputContentFn>,
	context: &DataContext<'_>,
) -> String {
	let defaults = Attributes::new()
		.with("type", input_type)
		.with("name", name)
		.with("value", context.key_string());
	let input = Tag::known("input")
		.attributes(defaults.merge(attributes))
		.render();
	match wrap {
		Some(wrap) => wrap(&input, context),
		None => input,
	}
}

impl ColumnRenderer for CheckboxColumnRenderer {
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
		let cell = cell.add_attributes(&column.header_attributes);
		if let Some(header) = &column.header {
			return Ok(Some(cell.content(Content::text(header.as_str()))));
		}
		if !column.multiple {
			return Ok(None);
		}
		let select_all = Tag::known("input")
			.attribute("type", "checkbox")
			.attribute("class", "select-on-check-all")
			.attribute("name", format!("{}-all", column.name))
			.attribute("value", "1")
			.render();
		Ok(Some(cell.content(Content::markup(select_all))))
	}

	fn render_body(&self, column: &Column, cell: Cell, context: &DataContext<'_>) -> Result<Cell> {
		let column = self.column(column)?;
		let name = if column.multiple {
			format!("{}[]", column.name)
		} else {
			column.name.clone()
		};
		let input = selection_input(
			"checkbox",
			name,
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

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn body(column: CheckboxColumn, key: serde_json::Value) -> String {
		let column = Column::from(column);
		let row = json!({});
		let context = DataContext::new(&column, &row, &key, 0);
		CheckboxColumnRenderer
			.render_body(&column, Cell::new(), &context)
			.unwrap()
			.render("td")
			.unwrap()
	}

	#[test]
	fn test_single_mode_name() {
		let html = body(CheckboxColumn::new().with_multiple(false), json!("a-1"));
		assert_eq!(
			html,
			r#"<td><input type="checkbox" name="checkbox-selection" value="a-1"></td>"#
		);
	}

	#[test]
	fn test_input_attributes_override_defaults() {
		let column = CheckboxColumn::new().with_input_attributes(
			Attributes::new().with("value", "custom").with("checked", true),
		);
		assert_eq!(
			body(column, json!(5)),
			r#"<td><input type="checkbox" name="checkbox-selection[]" value="custom" checked></td>"#
		);
	}

	#[test]
	fn test_composite_key_serialized() {
		let html = body(CheckboxColumn::new(), json!({"a": 1, "b": 2}));
		assert!(html.contains(r#"value="{&quot;a&quot;:1,&quot;b&quot;:2}""#));
	}

	#[test]
	fn test_content_wraps_input() {
		let column = CheckboxColumn::new()
			.with_content(|input, context| format!("<label>{input} #{}</label>", context.index + 1));
		assert_eq!(
			body(column, json!(1)),
			r#"<td><label><input type="checkbox" name="checkbox-selection[]" value="1"> #1</label></td>"#
		);
	}
}
