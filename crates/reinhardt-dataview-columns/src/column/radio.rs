use std::fmt;
use std::sync::Arc;

use reinhardt_dataview_core::Attributes;

use super::InputContentFn;
use crate::context::DataContext;
use crate::renderer::{RadioColumnRenderer, RendererId};
use crate::resolvable::Resolvable;

/// Displays a radio button per row for selecting a single row.
#[derive(Clone)]
pub struct RadioColumn {
	pub(crate) header: Option<String>,
	pub(crate) footer: Option<String>,
	pub(crate) name: String,
	pub(crate) input_attributes: Resolvable<Attributes>,
	pub(crate) content: Option<InputContentFn>,
	pub(crate) column_attributes: Attributes,
	pub(crate) header_attributes: Attributes,
	pub(crate) body_attributes: Resolvable<Attributes>,
	pub(crate) footer_attributes: Attributes,
	pub(crate) visible: bool,
	pub(crate) renderer: RendererId,
}

impl Default for RadioColumn {
	fn default() -> Self {
		Self {
			header: None,
			footer: None,
			name: "radio-selection".to_string(),
			input_attributes: Resolvable::default(),
			content: None,
			column_attributes: Attributes::new(),
			header_attributes: Attributes::new(),
			body_attributes: Resolvable::default(),
			footer_attributes: Attributes::new(),
			visible: true,
			renderer: RendererId::of::<RadioColumnRenderer>(),
		}
	}
}

impl RadioColumn {
	/// Creates a column named `radio-selection`.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the header label.
	pub fn with_header(mut self, header: impl Into<String>) -> Self {
		self.header = Some(header.into());
		self
	}

	/// Sets the footer text.
	pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
		self.footer = Some(footer.into());
		self
	}

	/// Sets the input name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Sets input attributes; `name` and `value` here override the defaults.
	pub fn with_input_attributes(mut self, attributes: impl Into<Resolvable<Attributes>>) -> Self {
		self.input_attributes = attributes.into();
		self
	}

	/// Wraps the rendered input.
	pub fn with_content<F>(mut self, content: F) -> Self
	where
		F: Fn(&str, &DataContext<'_>) -> String + Send + Sync + 'static,
	{
		self.content = Some(Arc::new(content));
		self
	}

	/// Sets `<col>` attributes.
	pub fn with_column_attributes(mut self, attributes: Attributes) -> Self {
		self.column_attributes = attributes;
		self
	}

	/// Sets header cell attributes.
	pub fn with_header_attributes(mut self, attributes: Attributes) -> Self {
		self.header_attributes = attributes;
		self
	}

	/// Sets body cell attributes, fixed or computed per row.
	pub fn with_body_attributes(mut self, attributes: impl Into<Resolvable<Attributes>>) -> Self {
		self.body_attributes = attributes.into();
		self
	}

	/// Sets footer cell attributes.
	pub fn with_footer_attributes(mut self, attributes: Attributes) -> Self {
		self.footer_attributes = attributes;
		self
	}

	/// Shows or hides the column.
	pub fn with_visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}

	/// Renders the column with another renderer.
	pub fn with_renderer(mut self, renderer: RendererId) -> Self {
		self.renderer = renderer;
		self
	}

	/// The input name.
	pub fn name(&self) -> &str {
		&self.name
	}
}

impl fmt::Debug for RadioColumn {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RadioColumn")
			.field("header", &self.header)
			.field("name", &self.name)
			.field("input_attributes", &self.input_attributes)
			.field("visible", &self.visible)
			.field("renderer", &self.renderer)
			.finish_non_exhaustive()
	}
}
