//! Attribute maps for tags and cells.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use super::encode;

/// Type alias for lazily computed attribute values.
pub type LazyAttribute = Arc<dyn Fn() -> String + Send + Sync>;

/// A single attribute value, resolved when the owning tag is rendered.
#[derive(Clone)]
pub enum AttributeValue {
	/// A plain string value.
	Str(String),
	/// A boolean attribute: `true` renders the bare name, `false` omits it.
	Bool(bool),
	/// An explicitly absent value; the attribute is omitted.
	Null,
	/// A list of tokens joined by spaces (used for `class`).
	List(Vec<String>),
	/// A value computed at emission time.
	Lazy(LazyAttribute),
}

impl AttributeValue {
	/// Creates a lazily computed value.
	pub fn lazy<F>(f: F) -> Self
	where
		F: Fn() -> String + Send + Sync + 'static,
	{
		Self::Lazy(Arc::new(f))
	}

	/// Resolves the value to the text written into the tag.
	///
	/// Returns `None` when the attribute must be omitted and `Some("")` for a
	/// bare boolean attribute.
	pub fn resolve(&self) -> Option<String> {
		match self {
			Self::Str(value) => Some(value.clone()),
			Self::Bool(true) => Some(String::new()),
			Self::Bool(false) | Self::Null => None,
			Self::List(tokens) if tokens.is_empty() => None,
			Self::List(tokens) => Some(tokens.join(" ")),
			Self::Lazy(f) => Some(f()),
		}
	}
}

impl fmt::Debug for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Str(value) => f.debug_tuple("Str").field(value).finish(),
			Self::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
			Self::Null => f.write_str("Null"),
			Self::List(tokens) => f.debug_tuple("List").field(tokens).finish(),
			Self::Lazy(_) => f.write_str("Lazy(<closure>)"),
		}
	}
}

impl PartialEq for AttributeValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Str(a), Self::Str(b)) => a == b,
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Null, Self::Null) => true,
			(Self::List(a), Self::List(b)) => a == b,
			(Self::Lazy(a), Self::Lazy(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl From<&str> for AttributeValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<&String> for AttributeValue {
	fn from(value: &String) -> Self {
		Self::Str(value.clone())
	}
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<Vec<String>> for AttributeValue {
	fn from(value: Vec<String>) -> Self {
		Self::List(value)
	}
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> Self {
		value.map_or(Self::Null, Self::Str)
	}
}

/// An ordered attribute map.
///
/// Insertion order is preserved so rendered markup is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(IndexMap<String, AttributeValue>);

impl Attributes {
	/// Creates an empty attribute map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a copy with `name` set to `value`.
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.set(name, value);
		self
	}

	/// Sets `name` to `value` in place.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
		self.0.insert(name.into(), value.into());
	}

	/// Returns the value stored under `name`.
	pub fn get(&self, name: &str) -> Option<&AttributeValue> {
		self.0.get(name)
	}

	/// Returns `true` when `name` is present, even if its value is `Null`.
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when the map holds no attributes.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates the attributes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Merges `other` into a copy of `self`; keys from `other` win.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_dataview_core::Attributes;
	///
	/// let base = Attributes::new().with("id", "a").with("title", "x");
	/// let merged = base.merge(&Attributes::new().with("title", "y"));
	///
	/// assert_eq!(merged.render(), r#" id="a" title="y""#);
	/// ```
	pub fn merge(&self, other: &Attributes) -> Self {
		let mut merged = self.clone();
		for (name, value) in &other.0 {
			merged.0.insert(name.clone(), value.clone());
		}
		merged
	}

	/// Appends `class` to the `class` attribute unless it is already present.
	///
	/// Empty class names are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_dataview_core::Attributes;
	///
	/// let attributes = Attributes::new()
	///     .with("class", "header")
	///     .add_class("asc")
	///     .add_class("header");
	///
	/// assert_eq!(attributes.render(), r#" class="header asc""#);
	/// ```
	pub fn add_class(mut self, class: &str) -> Self {
		if class.trim().is_empty() {
			return self;
		}
		let mut tokens = match self.0.get("class") {
			Some(AttributeValue::List(tokens)) => tokens.clone(),
			Some(AttributeValue::Str(value)) => {
				value.split_whitespace().map(str::to_string).collect()
			}
			Some(AttributeValue::Lazy(f)) => f().split_whitespace().map(str::to_string).collect(),
			_ => Vec::new(),
		};
		for token in class.split_whitespace() {
			if !tokens.iter().any(|existing| existing == token) {
				tokens.push(token.to_string());
			}
		}
		self.0.insert("class".to_string(), AttributeValue::List(tokens));
		self
	}

	/// Renders the attributes as they appear inside an opening tag.
	///
	/// Each attribute is prefixed by a space; omitted values produce nothing.
	pub fn render(&self) -> String {
		let mut html = String::new();
		for (name, value) in &self.0 {
			let Some(resolved) = value.resolve() else {
				continue;
			};
			html.push(' ');
			html.push_str(name);
			if matches!(value, AttributeValue::Bool(true)) {
				continue;
			}
			html.push_str("=\"");
			html.push_str(&encode(&resolved, true));
			html.push('"');
		}
		html
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttributeValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		)
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
	K: Into<String>,
	V: Into<AttributeValue>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}
