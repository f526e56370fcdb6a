use reinhardt_dataview_core::Attributes;

use crate::renderer::{RendererId, SerialColumnRenderer};
use crate::resolvable::Resolvable;

/// Displays the one-based row number.
#[derive(Debug, Clone)]
pub struct SerialColumn {
	pub(crate) header: Option<String>,
	pub(crate) footer: Option<String>,
	pub(crate) column_attributes: Attributes,
	pub(crate) header_attributes: Attributes,
	pub(crate) body_attributes: Resolvable<Attributes>,
	pub(crate) footer_attributes: Attributes,
	pub(crate) visible: bool,
	pub(crate) renderer: RendererId,
}

impl Default for SerialColumn {
	fn default() -> Self {
		Self {
			header: None,
			footer: None,
			column_attributes: Attributes::new(),
			header_attributes: Attributes::new(),
			body_attributes: Resolvable::default(),
			footer_attributes: Attributes::new(),
			visible: true,
			renderer: RendererId::of::<SerialColumnRenderer>(),
		}
	}
}

impl SerialColumn {
	/// Creates a column with the `#` header.
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
}
