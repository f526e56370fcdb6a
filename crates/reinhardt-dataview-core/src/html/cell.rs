//! Cell values produced by column renderers.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::{AttributeValue, Attributes, Tag};
use crate::error::CoreResult;

/// Type alias for lazily produced cell content.
pub type LazyContent = Arc<dyn Fn() -> String + Send + Sync>;

/// The content of a cell.
#[derive(Clone)]
pub enum Content {
	/// Plain text; escaped under [`Encode::Auto`].
	Text(String),
	/// Pre-rendered markup; left as is under [`Encode::Auto`].
	Markup(String),
	/// Text produced when the cell is emitted; escaped under [`Encode::Auto`].
	Lazy(LazyContent),
}

impl Content {
	/// Creates plain text content.
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// Creates markup content.
	pub fn markup(html: impl Into<String>) -> Self {
		Self::Markup(html.into())
	}

	/// Creates lazily produced content.
	pub fn lazy<F>(f: F) -> Self
	where
		F: Fn() -> String + Send + Sync + 'static,
	{
		Self::Lazy(Arc::new(f))
	}

	/// Returns the raw, unescaped content.
	pub fn resolve(&self) -> Cow<'_, str> {
		match self {
			Self::Text(text) | Self::Markup(text) => Cow::Borrowed(text),
			Self::Lazy(f) => Cow::Owned(f()),
		}
	}

	/// Returns `true` for markup content.
	pub fn is_markup(&self) -> bool {
		matches!(self, Self::Markup(_))
	}
}

impl Default for Content {
	fn default() -> Self {
		Self::Text(String::new())
	}
}

impl fmt::Debug for Content {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Self::Markup(html) => f.debug_tuple("Markup").field(html).finish(),
			Self::Lazy(_) => f.write_str("Lazy(<closure>)"),
		}
	}
}

impl PartialEq for Content {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Text(a), Self::Text(b)) | (Self::Markup(a), Self::Markup(b)) => a == b,
			(Self::Lazy(a), Self::Lazy(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl From<&str> for Content {
	fn from(text: &str) -> Self {
		Self::text(text)
	}
}

impl From<String> for Content {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

/// Content encoding policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encode {
	/// Escape text, keep markup.
	#[default]
	Auto,
	/// Escape everything, markup included.
	Always,
	/// Escape nothing.
	Never,
}

impl Encode {
	/// Returns `true` when `content` must be escaped under this policy.
	pub fn applies_to(self, content: &Content) -> bool {
		match self {
			Self::Auto => !content.is_markup(),
			Self::Always => true,
			Self::Never => false,
		}
	}
}

/// One table cell before it is turned into markup.
///
/// Every mutator consumes the cell and returns the updated value, so a cell
/// handed to a renderer can never be changed behind the caller's back.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_core::{Cell, Content, Encode};
///
/// let base = Cell::new().attribute("class", "amount");
/// let raw = base.clone().content(Content::text("<b>5</b>")).encode(Encode::Never);
///
/// assert_eq!(base.render("td").unwrap(), r#"<td class="amount"></td>"#);
/// assert_eq!(raw.render("td").unwrap(), r#"<td class="amount"><b>5</b></td>"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
	attributes: Attributes,
	content: Content,
	encode: Encode,
	double_encode: bool,
}

impl Cell {
	/// Creates an empty cell with automatic encoding.
	pub fn new() -> Self {
		Self {
			attributes: Attributes::new(),
			content: Content::default(),
			encode: Encode::Auto,
			double_encode: true,
		}
	}

	/// Replaces the content.
	pub fn content(mut self, content: impl Into<Content>) -> Self {
		self.content = content.into();
		self
	}

	/// Sets a single attribute.
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.attributes.set(name, value);
		self
	}

	/// Replaces all attributes.
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.attributes = attributes;
		self
	}

	/// Merges `attributes` into the current ones; later keys win.
	pub fn add_attributes(mut self, attributes: &Attributes) -> Self {
		self.attributes = self.attributes.merge(attributes);
		self
	}

	/// Appends a CSS class.
	pub fn add_class(mut self, class: &str) -> Self {
		self.attributes = self.attributes.add_class(class);
		self
	}

	/// Sets the encoding policy.
	pub fn encode(mut self, encode: Encode) -> Self {
		self.encode = encode;
		self
	}

	/// Sets whether existing character references are escaped again.
	pub fn double_encode(mut self, double_encode: bool) -> Self {
		self.double_encode = double_encode;
		self
	}

	/// Returns the attributes.
	pub fn get_attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns the content.
	pub fn get_content(&self) -> &Content {
		&self.content
	}

	/// Returns the encoding policy.
	pub fn get_encode(&self) -> Encode {
		self.encode
	}

	/// Returns the double-encode flag.
	pub fn is_double_encode(&self) -> bool {
		self.double_encode
	}

	/// Serializes the cell as a `tag_name` element.
	pub fn render(&self, tag_name: &str) -> CoreResult<String> {
		Ok(Tag::new(tag_name)?
			.attributes(self.attributes.clone())
			.content(self.content.clone())
			.encode(self.encode)
			.double_encode(self.double_encode)
			.render())
	}
}

impl Default for Cell {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_mutators_leave_clone_untouched() {
		let original = Cell::new().attribute("id", "a");
		let changed = original
			.clone()
			.attribute("id", "b")
			.content("text")
			.encode(Encode::Never)
			.double_encode(false);

		assert_eq!(original.get_attributes().get("id"), Some(&AttributeValue::from("a")));
		assert_eq!(original.get_content(), &Content::default());
		assert_eq!(original.get_encode(), Encode::Auto);
		assert!(original.is_double_encode());

		assert_eq!(changed.get_attributes().get("id"), Some(&AttributeValue::from("b")));
		assert_eq!(changed.get_encode(), Encode::Never);
		assert!(!changed.is_double_encode());
	}

	#[test]
	fn test_attributes_replace_and_merge() {
		let cell = Cell::new()
			.attribute("id", "a")
			.attributes(Attributes::from([("class", "x")]))
			.add_attributes(&Attributes::from([("class", "y"), ("title", "t")]));

		assert!(!cell.get_attributes().contains("id"));
		assert_eq!(cell.render("td").unwrap(), r#"<td class="y" title="t"></td>"#);
	}

	#[test]
	fn test_auto_encoding() {
		let text = Cell::new().content(Content::text("<i>"));
		let markup = Cell::new().content(Content::markup("<i>"));
		let lazy = Cell::new().content(Content::lazy(|| "<i>".to_string()));

		assert_eq!(text.render("td").unwrap(), "<td>&lt;i&gt;</td>");
		assert_eq!(markup.render("td").unwrap(), "<td><i></td>");
		assert_eq!(lazy.render("td").unwrap(), "<td>&lt;i&gt;</td>");
	}

	#[test]
	fn test_always_encodes_markup() {
		let cell = Cell::new()
			.content(Content::markup("<i>"))
			.encode(Encode::Always);
		assert_eq!(cell.render("th").unwrap(), "<th>&lt;i&gt;</th>");
	}

	#[test]
	fn test_double_encode_flag() {
		let cell = Cell::new().content("&amp;").double_encode(false);
		assert_eq!(cell.render("td").unwrap(), "<td>&amp;</td>");
	}

	#[test]
	fn test_empty_tag_name_fails() {
		assert!(Cell::new().render("").is_err());
	}
}
