//! Decoration of sortable headers
//!
//! Defines the CSS classes and the markup placed around header links for
//! each sort state of a column.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Classes and markup used to decorate sortable column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortableHeaderTheme {
	// Unsorted
	/// Header cell class for a sortable, currently unsorted column
	pub header_class: String,
	/// Markup before the link of an unsorted column
	pub header_prepend: String,
	/// Markup after the link of an unsorted column
	pub header_append: String,

	// Ascending
	/// Header cell class for an ascending column
	pub header_asc_class: String,
	/// Markup before the link of an ascending column
	pub header_asc_prepend: String,
	/// Markup after the link of an ascending column
	pub header_asc_append: String,

	// Descending
	/// Header cell class for a descending column
	pub header_desc_class: String,
	/// Markup before the link of a descending column
	pub header_desc_prepend: String,
	/// Markup after the link of a descending column
	pub header_desc_append: String,

	// Links
	/// Attributes applied to every sort link
	pub link_attributes: IndexMap<String, String>,
	/// Link class for an ascending column
	pub link_asc_class: String,
	/// Link class for a descending column
	pub link_desc_class: String,
}

impl Default for SortableHeaderTheme {
	fn default() -> Self {
		Self {
			header_class: "sortable".into(),
			header_prepend: String::new(),
			header_append: String::new(),

			header_asc_class: "sortable sorted-asc".into(),
			header_asc_prepend: String::new(),
			header_asc_append: String::new(),

			header_desc_class: "sortable sorted-desc".into(),
			header_desc_prepend: String::new(),
			header_desc_append: String::new(),

			link_attributes: IndexMap::new(),
			link_asc_class: "asc".into(),
			link_desc_class: "desc".into(),
		}
	}
}

impl SortableHeaderTheme {
	/// Theme that appends arrow glyphs indicating the sort state.
	pub fn arrows() -> Self {
		Self {
			header_append: " <span class=\"sort-indicator\">&#8645;</span>".into(),
			header_asc_append: " <span class=\"sort-indicator\">&#8593;</span>".into(),
			header_desc_append: " <span class=\"sort-indicator\">&#8595;</span>".into(),
			..Self::default()
		}
	}

	/// Theme without any classes or markup.
	pub fn plain() -> Self {
		Self {
			header_class: String::new(),
			header_asc_class: String::new(),
			header_desc_class: String::new(),
			link_asc_class: String::new(),
			link_desc_class: String::new(),
			..Self::default()
		}
	}
}
