//! Data view settings
//!
//! Groups the URL configuration, the sortable header theme and the sorting
//! mode so a project can keep them in its configuration files:
//!
//! ```toml
//! multi_sort = true
//!
//! [url]
//! sort_parameter_name = "order"
//! page_parameter_placement = "path"
//!
//! [sortable_header]
//! header_asc_class = "th-asc"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::i18n::DEFAULT_TRANSLATION_CATEGORY;
use crate::theme::SortableHeaderTheme;
use crate::url::UrlConfig;

/// Settings shared by all data views of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataViewSettings {
	/// URL parameter names and placement
	pub url: UrlConfig,
	/// Sortable header decoration
	pub sortable_header: SortableHeaderTheme,
	/// Whether sort links keep the order of other columns
	pub multi_sort: bool,
	/// Category used to translate built-in strings
	pub translation_category: String,
}

impl Default for DataViewSettings {
	fn default() -> Self {
		Self {
			url: UrlConfig::default(),
			sortable_header: SortableHeaderTheme::default(),
			multi_sort: false,
			translation_category: DEFAULT_TRANSLATION_CATEGORY.to_string(),
		}
	}
}

impl DataViewSettings {
	/// Parses settings from TOML; missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_dataview_core::{DataViewSettings, ParameterPlacement};
	///
	/// let settings = DataViewSettings::from_toml_str(
	///     r#"
	///     multi_sort = true
	///
	///     [url]
	///     sort_parameter_name = "order"
	///     sort_parameter_placement = "path"
	///     "#,
	/// )
	/// .unwrap();
	///
	/// assert!(settings.multi_sort);
	/// assert_eq!(settings.url.sort_parameter_name(), "order");
	/// assert_eq!(settings.url.sort_parameter_placement(), ParameterPlacement::Path);
	/// assert_eq!(settings.url.page_parameter_name(), "page");
	/// ```
	pub fn from_toml_str(input: &str) -> CoreResult<Self> {
		let settings: Self = toml::from_str(input)?;
		tracing::debug!(
			multi_sort = settings.multi_sort,
			category = %settings.translation_category,
			"Loaded data view settings from TOML"
		);
		Ok(settings)
	}

	/// Decodes settings from a JSON value; missing keys keep their defaults.
	pub fn from_json_value(value: serde_json::Value) -> CoreResult<Self> {
		Ok(serde_json::from_value(value)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::CoreError;
	use crate::url::ParameterPlacement;

	#[test]
	fn test_empty_toml_is_default() {
		let settings = DataViewSettings::from_toml_str("").unwrap();
		assert_eq!(settings, DataViewSettings::default());
		assert_eq!(settings.translation_category, DEFAULT_TRANSLATION_CATEGORY);
	}

	#[test]
	fn test_toml_static_parameters_and_theme() {
		let settings = DataViewSettings::from_toml_str(
			r#"
			[url]
			page_size_parameter_placement = "path"

			[url.query_parameters]
			tab = "users"

			[sortable_header]
			header_asc_class = "th-asc"
			"#,
		)
		.unwrap();

		assert_eq!(
			settings.url.page_size_parameter_placement(),
			ParameterPlacement::Path
		);
		assert_eq!(
			settings.url.query_parameters().get("tab").map(String::as_str),
			Some("users")
		);
		assert_eq!(settings.sortable_header.header_asc_class, "th-asc");
		assert_eq!(settings.sortable_header.header_class, "sortable");
	}

	#[test]
	fn test_invalid_placement_rejected() {
		let result = DataViewSettings::from_toml_str(
			r#"
			[url]
			sort_parameter_placement = "fragment"
			"#,
		);
		assert!(matches!(result, Err(CoreError::Settings(_))));
	}

	#[test]
	fn test_from_json_value() {
		let settings = DataViewSettings::from_json_value(serde_json::json!({
			"multi_sort": true,
			"translation_category": "app",
		}))
		.unwrap();
		assert!(settings.multi_sort);
		assert_eq!(settings.translation_category, "app");
	}
}
