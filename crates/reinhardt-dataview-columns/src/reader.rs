//! Row sources for data views

use std::cmp::Ordering;

use reinhardt_dataview_core::{Sort, SortDirection};
use serde_json::Value;

use crate::context::value_at;

/// Supplies the rows of the current page.
pub trait DataReader: Send + Sync {
	/// Returns `(key, data)` pairs in display order.
	fn read(&self) -> Vec<(Value, Value)>;

	/// The sort applied by this reader; `None` when the reader cannot sort.
	fn sort(&self) -> Option<Sort> {
		None
	}
}

/// A reader over rows held in memory.
///
/// When a sort is set, [`read`](DataReader::read) orders rows by its
/// effective order. The sort is stable and compares values by type first
/// (`null`, booleans, numbers, strings, then composites).
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_columns::{DataReader, InMemoryDataReader};
/// use reinhardt_dataview_core::Sort;
/// use serde_json::json;
///
/// let reader = InMemoryDataReader::keyed_by(
///     vec![json!({"id": 1, "name": "Bob"}), json!({"id": 2, "name": "Alice"})],
///     "id",
/// )
/// .with_sort(Sort::any().with_order_string("name"));
///
/// let keys: Vec<_> = reader.read().into_iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, vec![json!(2), json!(1)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataReader {
	rows: Vec<(Value, Value)>,
	sort: Option<Sort>,
}

impl InMemoryDataReader {
	/// Creates a reader over explicit `(key, data)` pairs.
	pub fn new(rows: Vec<(Value, Value)>) -> Self {
		Self { rows, sort: None }
	}

	/// Creates a reader keyed by row position.
	pub fn from_records(records: Vec<Value>) -> Self {
		Self::new(
			records
				.into_iter()
				.enumerate()
				.map(|(index, record)| (Value::from(index), record))
				.collect(),
		)
	}

	/// Creates a reader keyed by the value of `property` in each record.
	pub fn keyed_by(records: Vec<Value>, property: &str) -> Self {
		Self::new(
			records
				.into_iter()
				.map(|record| {
					let key = value_at(&record, property).cloned().unwrap_or(Value::Null);
					(key, record)
				})
				.collect(),
		)
	}

	/// Sets the sort applied on read.
	pub fn with_sort(mut self, sort: Sort) -> Self {
		self.sort = Some(sort);
		self
	}

	/// Number of rows.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Returns `true` when there are no rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

impl DataReader for InMemoryDataReader {
	fn read(&self) -> Vec<(Value, Value)> {
		let mut rows = self.rows.clone();
		let Some(sort) = &self.sort else {
			return rows;
		};
		let order = sort.effective_order();
		if order.is_empty() {
			return rows;
		}
		rows.sort_by(|(_, a), (_, b)| {
			order
				.iter()
				.map(|(property, direction)| {
					let ordering = compare_values(value_at(a, property), value_at(b, property));
					match direction {
						SortDirection::Asc => ordering,
						SortDirection::Desc => ordering.reverse(),
					}
				})
				.find(|ordering| ordering.is_ne())
				.unwrap_or(Ordering::Equal)
		});
		rows
	}

	fn sort(&self) -> Option<Sort> {
		self.sort.clone()
	}
}

fn rank(value: Option<&Value>) -> u8 {
	match value {
		None | Some(Value::Null) => 0,
		Some(Value::Bool(_)) => 1,
		Some(Value::Number(_)) => 2,
		Some(Value::String(_)) => 3,
		Some(Value::Array(_)) => 4,
		Some(Value::Object(_)) => 5,
	}
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
	match (a, b) {
		(Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
		(Some(Value::Number(a)), Some(Value::Number(b))) => {
			let (a, b) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
			a.partial_cmp(&b).unwrap_or(Ordering::Equal)
		}
		(Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
		(Some(a), Some(b)) if rank(Some(a)) >= 4 && rank(Some(a)) == rank(Some(b)) => {
			a.to_string().cmp(&b.to_string())
		}
		_ => rank(a).cmp(&rank(b)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn names(reader: &InMemoryDataReader) -> Vec<String> {
		reader
			.read()
			.into_iter()
			.map(|(_, data)| data["name"].as_str().unwrap_or_default().to_string())
			.collect()
	}

	fn records() -> Vec<Value> {
		vec![
			json!({"name": "Carol", "age": 30}),
			json!({"name": "Alice", "age": 30}),
			json!({"name": "Bob", "age": null}),
			json!({"name": "Dave", "age": 25}),
		]
	}

	#[rstest]
	#[case("name", &["Alice", "Bob", "Carol", "Dave"])]
	#[case("-name", &["Dave", "Carol", "Bob", "Alice"])]
	#[case("age", &["Bob", "Dave", "Carol", "Alice"])]
	#[case("-age,name", &["Alice", "Carol", "Dave", "Bob"])]
	fn test_sorted_read(#[case] order: &str, #[case] expected: &[&str]) {
		let reader =
			InMemoryDataReader::from_records(records()).with_sort(Sort::any().with_order_string(order));
		assert_eq!(names(&reader), expected);
	}

	#[test]
	fn test_default_order_applies_without_current_order() {
		let reader = InMemoryDataReader::from_records(records())
			.with_sort(Sort::any().with_default_order_string("-name"));
		assert_eq!(names(&reader)[0], "Dave");
	}

	#[test]
	fn test_unsorted_keeps_insertion_order() {
		let reader = InMemoryDataReader::from_records(records());
		assert_eq!(names(&reader), ["Carol", "Alice", "Bob", "Dave"]);
		assert!(reader.sort().is_none());
	}

	#[test]
	fn test_positional_keys() {
		let keys: Vec<_> = InMemoryDataReader::from_records(records())
			.read()
			.into_iter()
			.map(|(key, _)| key)
			.collect();
		assert_eq!(keys, vec![json!(0), json!(1), json!(2), json!(3)]);
	}
}
