//! Sort specifications
//!
//! A [`SortOrder`] is an ordered mapping from property name to
//! [`SortDirection`]; insertion order is the tie-break precedence. A [`Sort`]
//! pairs the current order with the set of properties a data view allows to be
//! sorted and the order it falls back to by default.
//!
//! The canonical string form joins property names with commas and prefixes
//! descending ones with `-`:
//!
//! ```
//! use reinhardt_dataview_core::{SortDirection, SortOrder};
//!
//! let order = SortOrder::parse("name, -created_at");
//! assert_eq!(order.get("created_at"), Some(SortDirection::Desc));
//! assert_eq!(order.to_sort_string(), "name,-created_at");
//! ```

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a single sort entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	Asc,
	/// Descending order
	Desc,
}

impl SortDirection {
	/// Returns `"asc"` or `"desc"`.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::Desc => "desc",
		}
	}

	/// Returns the opposite direction.
	pub fn reversed(self) -> Self {
		match self {
			Self::Asc => Self::Desc,
			Self::Desc => Self::Asc,
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Ordered property → direction mapping; each property appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortOrder(IndexMap<String, SortDirection>);

impl SortOrder {
	/// Creates an empty order.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses the canonical string form.
	///
	/// Empty segments and surrounding whitespace are ignored. A property that
	/// appears twice keeps its first position and takes its last direction.
	pub fn parse(input: &str) -> Self {
		let mut order = Self::new();
		for segment in input.split(',') {
			let segment = segment.trim();
			let (property, direction) = match segment.strip_prefix('-') {
				Some(property) => (property.trim(), SortDirection::Desc),
				None => (segment, SortDirection::Asc),
			};
			if !property.is_empty() {
				order.0.insert(property.to_string(), direction);
			}
		}
		order
	}

	/// Returns a copy with `property` set to `direction`.
	///
	/// An existing entry keeps its position; a new one is appended.
	pub fn with(mut self, property: impl Into<String>, direction: SortDirection) -> Self {
		self.0.insert(property.into(), direction);
		self
	}

	/// Returns a copy without `property`, preserving the order of the rest.
	pub fn without(mut self, property: &str) -> Self {
		self.0.shift_remove(property);
		self
	}

	/// Returns the direction of `property`, if it is part of the order.
	pub fn get(&self, property: &str) -> Option<SortDirection> {
		self.0.get(property).copied()
	}

	/// Returns `true` when the order has no entries.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Iterates the entries by precedence.
	pub fn iter(&self) -> impl Iterator<Item = (&str, SortDirection)> {
		self.0.iter().map(|(property, direction)| (property.as_str(), *direction))
	}

	/// Computes the order a sort link for `property` switches to.
	///
	/// - unsorted → ascending (appended in multi-sort mode, alone otherwise)
	/// - ascending → descending (in place in multi-sort mode, alone otherwise)
	/// - descending → removed, whatever the mode
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_dataview_core::SortOrder;
	///
	/// let order = SortOrder::parse("name");
	/// assert_eq!(order.toggled("age", true).to_sort_string(), "name,age");
	/// assert_eq!(order.toggled("age", false).to_sort_string(), "age");
	/// assert_eq!(order.toggled("name", true).to_sort_string(), "-name");
	/// assert!(SortOrder::parse("-name").toggled("name", false).is_empty());
	/// ```
	pub fn toggled(&self, property: &str, multi_sort: bool) -> Self {
		match self.get(property) {
			Some(SortDirection::Desc) => self.clone().without(property),
			current => {
				let next = match current {
					Some(SortDirection::Asc) => SortDirection::Desc,
					_ => SortDirection::Asc,
				};
				if multi_sort {
					self.clone().with(property, next)
				} else {
					Self::new().with(property, next)
				}
			}
		}
	}

	/// Serializes to the canonical string form.
	pub fn to_sort_string(&self) -> String {
		self.0
			.iter()
			.map(|(property, direction)| match direction {
				SortDirection::Asc => property.clone(),
				SortDirection::Desc => format!("-{property}"),
			})
			.collect::<Vec<_>>()
			.join(",")
	}
}

impl fmt::Display for SortOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_sort_string())
	}
}

impl<K: Into<String>> FromIterator<(K, SortDirection)> for SortOrder {
	fn from_iter<I: IntoIterator<Item = (K, SortDirection)>>(iter: I) -> Self {
		iter.into_iter()
			.fold(Self::new(), |order, (property, direction)| order.with(property, direction))
	}
}

/// A sort specification: allowed properties, current order and default order.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_core::Sort;
///
/// let sort = Sort::only(["name", "email"])
///     .with_default_order_string("name")
///     .with_order_string("-email");
///
/// assert!(sort.has_field("name"));
/// assert!(!sort.has_field("password"));
/// assert_eq!(sort.order_string(), "-email");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sort {
	allowed: Option<IndexSet<String>>,
	order: SortOrder,
	default_order: SortOrder,
}

impl Sort {
	/// A sort that accepts any property.
	pub fn any() -> Self {
		Self::default()
	}

	/// A sort restricted to `properties`.
	pub fn only<I, S>(properties: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			allowed: Some(properties.into_iter().map(Into::into).collect()),
			..Self::default()
		}
	}

	/// Returns a copy with the current order replaced.
	pub fn with_order(mut self, order: SortOrder) -> Self {
		self.order = order;
		self
	}

	/// Returns a copy with the current order parsed from its string form.
	pub fn with_order_string(self, order: &str) -> Self {
		self.with_order(SortOrder::parse(order))
	}

	/// Returns a copy with the default order replaced.
	pub fn with_default_order(mut self, order: SortOrder) -> Self {
		self.default_order = order;
		self
	}

	/// Returns a copy with the default order parsed from its string form.
	pub fn with_default_order_string(self, order: &str) -> Self {
		self.with_default_order(SortOrder::parse(order))
	}

	/// Returns `true` when `property` may be sorted by.
	pub fn has_field(&self, property: &str) -> bool {
		self.allowed
			.as_ref()
			.is_none_or(|allowed| allowed.contains(property))
	}

	/// Returns the current order as given.
	pub fn order(&self) -> &SortOrder {
		&self.order
	}

	/// Returns the default order.
	pub fn default_order(&self) -> &SortOrder {
		&self.default_order
	}

	/// Returns the order rows are sorted by: the current order restricted to
	/// allowed properties, or the default order when that is empty.
	pub fn effective_order(&self) -> SortOrder {
		let current: SortOrder = self
			.order
			.iter()
			.filter(|(property, _)| self.has_field(property))
			.collect();
		if current.is_empty() {
			self.default_order.clone()
		} else {
			current
		}
	}

	/// Returns the canonical string form of the current order.
	pub fn order_string(&self) -> String {
		self.order.to_sort_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", "")]
	#[case("a", "a")]
	#[case("-a", "-a")]
	#[case(" a , -b ", "a,-b")]
	#[case("a,,b,", "a,b")]
	#[case("a,-a", "-a")]
	#[case("-", "")]
	fn test_parse_roundtrip(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(SortOrder::parse(input).to_sort_string(), expected);
	}

	#[test]
	fn test_duplicate_keeps_first_position() {
		let order = SortOrder::parse("a,b,-a");
		let properties: Vec<&str> = order.iter().map(|(property, _)| property).collect();
		assert_eq!(properties, vec!["a", "b"]);
		assert_eq!(order.get("a"), Some(SortDirection::Desc));
	}

	#[test]
	fn test_without_preserves_order() {
		let order = SortOrder::parse("a,b,c").without("b");
		assert_eq!(order.to_sort_string(), "a,c");
	}

	#[rstest]
	#[case("", "name", false, "name")]
	#[case("", "name", true, "name")]
	#[case("name", "name", false, "-name")]
	#[case("-name", "name", false, "")]
	#[case("age,name", "name", false, "-name")]
	#[case("age,name", "name", true, "age,-name")]
	#[case("name,age", "name", true, "-name,age")]
	#[case("age", "name", true, "age,name")]
	#[case("age", "name", false, "name")]
	#[case("-name,age", "name", true, "age")]
	#[case("-name,age", "name", false, "age")]
	fn test_toggled(
		#[case] current: &str,
		#[case] property: &str,
		#[case] multi_sort: bool,
		#[case] expected: &str,
	) {
		let toggled = SortOrder::parse(current).toggled(property, multi_sort);
		assert_eq!(toggled.to_sort_string(), expected);
	}

	#[test]
	fn test_has_field_any() {
		assert!(Sort::any().has_field("whatever"));
	}

	#[test]
	fn test_effective_order_filters_and_falls_back() {
		let sort = Sort::only(["name"])
			.with_default_order_string("-name")
			.with_order_string("password,name");
		assert_eq!(sort.effective_order().to_sort_string(), "name");

		let fallback = sort.with_order_string("password");
		assert_eq!(fallback.effective_order().to_sort_string(), "-name");
	}

	#[test]
	fn test_direction_serde() {
		let json = serde_json::to_string(&SortOrder::parse("a,-b")).unwrap();
		assert_eq!(json, r#"{"a":"asc","b":"desc"}"#);
	}
}
