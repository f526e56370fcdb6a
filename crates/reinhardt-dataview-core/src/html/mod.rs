//! HTML primitives: attribute maps, cell values and the tag builder.
//!
//! Nothing in this module performs escaping on its own initiative beyond what
//! the [`Encode`] policy of a cell or tag asks for.

mod attributes;
mod cell;
mod tag;

pub use attributes::{AttributeValue, Attributes};
pub use cell::{Cell, Content, Encode};
pub use tag::{Tag, VOID_ELEMENTS};

use std::borrow::Cow;

/// Escapes HTML special characters.
///
/// When `double_encode` is `false`, character references that are already
/// present in `text` (`&amp;`, `&#39;`, `&#x27;`, ...) are left untouched and
/// only bare ampersands are escaped.
///
/// Returns a borrowed reference when nothing needs escaping.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_core::html::encode;
///
/// assert_eq!(encode("a < b", true), "a &lt; b");
/// assert_eq!(encode("Tom &amp; Jerry", true), "Tom &amp;amp; Jerry");
/// assert_eq!(encode("Tom &amp; Jerry", false), "Tom &amp; Jerry");
/// assert_eq!(encode("R&D", false), "R&amp;D");
/// ```
pub fn encode(text: &str, double_encode: bool) -> Cow<'_, str> {
	if !text.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(text);
	}

	let mut escaped = String::with_capacity(text.len() + 8);
	for (position, ch) in text.char_indices() {
		match ch {
			'&' if !double_encode && starts_with_entity(&text[position + 1..]) => escaped.push('&'),
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#039;"),
			_ => escaped.push(ch),
		}
	}
	Cow::Owned(escaped)
}

/// Checks whether `rest` (the text following an `&`) opens a character reference.
fn starts_with_entity(rest: &str) -> bool {
	let Some(end) = rest.find(';') else {
		return false;
	};
	let body = &rest[..end];
	if body.is_empty() || body.len() > 32 {
		return false;
	}
	if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
		return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
	}
	if let Some(decimal) = body.strip_prefix('#') {
		return !decimal.is_empty() && decimal.chars().all(|c| c.is_ascii_digit());
	}
	body.chars().all(|c| c.is_ascii_alphanumeric())
}
