//! Tag builder used to serialize cells and controls.

use super::{AttributeValue, Attributes, Content, Encode, encode};
use crate::error::{CoreError, CoreResult};

/// Elements that never have a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

/// An HTML element under construction.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_core::Tag;
///
/// let link = Tag::new("a")
///     .unwrap()
///     .attribute("href", "/users?sort=name")
///     .content("Name")
///     .render();
///
/// assert_eq!(link, r#"<a href="/users?sort=name">Name</a>"#);
/// ```
#[derive(Debug, Clone)]
pub struct Tag {
	name: String,
	attributes: Attributes,
	content: Content,
	encode: Encode,
	double_encode: bool,
}

impl Tag {
	/// Starts a new element.
	///
	/// Fails with [`CoreError::EmptyTagName`] when `name` is empty.
	pub fn new(name: impl Into<String>) -> CoreResult<Self> {
		let name = name.into();
		if name.trim().is_empty() {
			return Err(CoreError::EmptyTagName);
		}
		Ok(Self {
			name,
			attributes: Attributes::new(),
			content: Content::default(),
			encode: Encode::Auto,
			double_encode: true,
		})
	}

	/// Starts an element whose name is known at compile time.
	///
	/// Use [`Tag::new`] for names that come from configuration.
	pub fn known(name: &'static str) -> Self {
		debug_assert!(!name.is_empty(), "tag name cannot be empty");
		Self {
			name: name.to_string(),
			attributes: Attributes::new(),
			content: Content::default(),
			encode: Encode::Auto,
			double_encode: true,
		}
	}

	/// Sets one attribute.
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.attributes.set(name, value);
		self
	}

	/// Merges attributes; later keys win.
	pub fn attributes(mut self, attributes: Attributes) -> Self {
		self.attributes = self.attributes.merge(&attributes);
		self
	}

	/// Sets the content.
	pub fn content(mut self, content: impl Into<Content>) -> Self {
		self.content = content.into();
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

	/// Returns the tag name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns `true` for void elements.
	pub fn is_void(&self) -> bool {
		VOID_ELEMENTS.contains(&self.name.to_ascii_lowercase().as_str())
	}

	/// Renders the element.
	pub fn render(&self) -> String {
		let attributes = self.attributes.render();
		if self.is_void() {
			return format!("<{}{}>", self.name, attributes);
		}

		let raw = self.content.resolve();
		let content = if self.encode.applies_to(&self.content) {
			encode(&raw, self.double_encode).into_owned()
		} else {
			raw.into_owned()
		};
		format!("<{name}{attributes}>{content}</{name}>", name = self.name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("")]
	#[case("   ")]
	fn test_empty_name_rejected(#[case] name: &str) {
		assert!(matches!(Tag::new(name), Err(CoreError::EmptyTagName)));
	}

	#[test]
	fn test_void_element_ignores_content() {
		let input = Tag::new("input")
			.unwrap()
			.attribute("type", "checkbox")
			.attribute("value", "1")
			.content("ignored")
			.render();
		assert_eq!(input, r#"<input type="checkbox" value="1">"#);
	}

	#[test]
	fn test_attributes_merge_in_order() {
		let tag = Tag::new("td")
			.unwrap()
			.attribute("id", "a")
			.attributes(Attributes::from([("id", "b"), ("class", "c")]))
			.render();
		assert_eq!(tag, r#"<td id="b" class="c"></td>"#);
	}

	#[test]
	fn test_never_encode() {
		let tag = Tag::new("span")
			.unwrap()
			.content("<em>x</em>")
			.encode(Encode::Never)
			.render();
		assert_eq!(tag, "<span><em>x</em></span>");
	}
}
