use reinhardt_dataview_core::{Attributes, Encode};

use crate::renderer::{DataColumnRenderer, RendererId};
use crate::resolvable::Resolvable;

/// Displays one property of each row.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_columns::{Column, DataColumn, Resolvable};
///
/// let column = DataColumn::new("email")
///     .with_header("E-mail")
///     .with_content(Resolvable::computed(|context| {
///         context.data["email"].as_str().unwrap_or_default().to_lowercase()
///     }));
///
/// assert_eq!(column.property(), Some("email"));
/// assert!(Column::from(column).is_visible());
/// ```
#[derive(Debug, Clone)]
pub struct DataColumn {
	pub(crate) property: Option<String>,
	pub(crate) header: Option<String>,
	pub(crate) encode_header: bool,
	pub(crate) footer: Option<String>,
	pub(crate) content: Option<Resolvable<String>>,
	pub(crate) encode_content: Encode,
	pub(crate) with_sorting: bool,
	pub(crate) column_attributes: Attributes,
	pub(crate) header_attributes: Attributes,
	pub(crate) body_attributes: Resolvable<Attributes>,
	pub(crate) footer_attributes: Attributes,
	pub(crate) visible: bool,
	pub(crate) renderer: RendererId,
}

impl Default for DataColumn {
	fn default() -> Self {
		Self {
			property: None,
			header: None,
			encode_header: true,
			footer: None,
			content: None,
			encode_content: Encode::Auto,
			with_sorting: true,
			column_attributes: Attributes::new(),
			header_attributes: Attributes::new(),
			body_attributes: Resolvable::default(),
			footer_attributes: Attributes::new(),
			visible: true,
			renderer: RendererId::of::<DataColumnRenderer>(),
		}
	}
}

impl DataColumn {
	/// Creates a column showing `property`.
	pub fn new(property: impl Into<String>) -> Self {
		Self {
			property: Some(property.into()),
			..Self::default()
		}
	}

	/// Sets the header label.
	pub fn with_header(mut self, header: impl Into<String>) -> Self {
		self.header = Some(header.into());
		self
	}

	/// Sets whether the header label is HTML-escaped.
	pub fn with_encode_header(mut self, encode: bool) -> Self {
		self.encode_header = encode;
		self
	}

	/// Sets the footer text.
	pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
		self.footer = Some(footer.into());
		self
	}

	/// Replaces the property value with fixed or computed content.
	pub fn with_content(mut self, content: impl Into<Resolvable<String>>) -> Self {
		self.content = Some(content.into());
		self
	}

	/// Sets how body content is escaped.
	pub fn with_encode_content(mut self, encode: Encode) -> Self {
		self.encode_content = encode;
		self
	}

	/// Sets whether the header becomes a sort link when the property is sortable.
	pub fn with_sorting(mut self, with_sorting: bool) -> Self {
		self.with_sorting = with_sorting;
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

	/// The displayed property.
	pub fn property(&self) -> Option<&str> {
		self.property.as_deref()
	}

	/// The explicit header label.
	pub fn header(&self) -> Option<&str> {
		self.header.as_deref()
	}
}
