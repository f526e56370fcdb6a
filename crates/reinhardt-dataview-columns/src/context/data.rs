use serde_json::Value;

use crate::column::Column;

/// The row being rendered, as seen by a body renderer.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_columns::{Column, DataColumn, DataContext};
/// use serde_json::json;
///
/// let column = Column::from(DataColumn::new("name"));
/// let row = json!({"name": "Alice", "address": {"city": "Kyoto"}});
/// let key = json!(1);
/// let context = DataContext::new(&column, &row, &key, 0);
///
/// assert_eq!(context.value("address.city"), Some(&json!("Kyoto")));
/// assert_eq!(context.key_string(), "1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DataContext<'a> {
	/// Column being rendered
	pub column: &'a Column,
	/// Row data
	pub data: &'a Value,
	/// Row key
	pub key: &'a Value,
	/// Zero-based row position in the current page
	pub index: usize,
}

impl<'a> DataContext<'a> {
	/// Creates a context for one row.
	pub fn new(column: &'a Column, data: &'a Value, key: &'a Value, index: usize) -> Self {
		Self {
			column,
			data,
			key,
			index,
		}
	}

	/// Looks up a property of the row; see [`value_at`].
	pub fn value(&self, path: &str) -> Option<&'a Value> {
		value_at(self.data, path)
	}

	/// The row key as an attribute value.
	///
	/// Strings are used as-is, `null` becomes empty and composite keys are
	/// serialized as JSON.
	pub fn key_string(&self) -> String {
		value_to_string(self.key).unwrap_or_default()
	}
}

/// Looks up `path` in `data`.
///
/// A key matching the whole path wins; otherwise the path is split on `.` and
/// each segment selects an object member or, when numeric, an array element.
pub fn value_at<'v>(data: &'v Value, path: &str) -> Option<&'v Value> {
	if let Some(value) = data.as_object().and_then(|object| object.get(path)) {
		return Some(value);
	}
	path.split('.').try_fold(data, |current, segment| match current {
		Value::Object(object) => object.get(segment),
		Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
		_ => None,
	})
}

/// Converts a value to display text; `None` for `null`.
pub fn value_to_string(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(text) => Some(text.clone()),
		Value::Bool(flag) => Some(flag.to_string()),
		Value::Number(number) => Some(number.to_string()),
		composite => Some(composite.to_string()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("name", Some(json!("Alice")))]
	#[case("address.city", Some(json!("Kyoto")))]
	#[case("tags.1", Some(json!("b")))]
	#[case("tags.9", None)]
	#[case("address.zip", None)]
	#[case("dotted.key", Some(json!(true)))]
	fn test_value_at(#[case] path: &str, #[case] expected: Option<Value>) {
		let row = json!({
			"name": "Alice",
			"address": {"city": "Kyoto"},
			"tags": ["a", "b"],
			"dotted.key": true,
		});
		assert_eq!(value_at(&row, path), expected.as_ref());
	}

	#[rstest]
	#[case(json!(null), None)]
	#[case(json!("x"), Some("x"))]
	#[case(json!(7), Some("7"))]
	#[case(json!(false), Some("false"))]
	#[case(json!([1, 2]), Some("[1,2]"))]
	fn test_value_to_string(#[case] value: Value, #[case] expected: Option<&str>) {
		assert_eq!(value_to_string(&value).as_deref(), expected);
	}
}
