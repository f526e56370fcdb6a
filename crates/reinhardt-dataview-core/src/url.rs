//! URL parameters for pagination and sort links
//!
//! A data view knows four logical URL parameters: the page, the previous page
//! (keyset pagination running backwards), the page size and the sort. Each has a
//! configurable name and is placed either in the route path or in the query
//! string. [`UrlParametersFactory`] computes both maps; a [`UrlCreator`] turns
//! them into a URL.

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::pagination::PageToken;

/// Characters left unescaped in path arguments and query components.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'~');

/// Where a URL parameter is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterPlacement {
	/// As a route argument substituted into the path
	Path,
	/// As a query string parameter
	#[default]
	Query,
}

/// Names and placement of the pagination and sort parameters.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_core::{ParameterPlacement, UrlConfig};
///
/// let config = UrlConfig::new()
///     .with_page_parameter_name("p")
///     .with_page_parameter_placement(ParameterPlacement::Path)
///     .with_query_parameter("tab", "users");
///
/// assert_eq!(config.page_parameter_name(), "p");
/// assert_eq!(config.sort_parameter_name(), "sort");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
	page_parameter_name: String,
	previous_page_parameter_name: String,
	page_size_parameter_name: String,
	sort_parameter_name: String,
	page_parameter_placement: ParameterPlacement,
	previous_page_parameter_placement: ParameterPlacement,
	page_size_parameter_placement: ParameterPlacement,
	sort_parameter_placement: ParameterPlacement,
	arguments: IndexMap<String, String>,
	query_parameters: IndexMap<String, String>,
}

impl Default for UrlConfig {
	fn default() -> Self {
		Self {
			page_parameter_name: "page".to_string(),
			previous_page_parameter_name: "prev-page".to_string(),
			page_size_parameter_name: "pagesize".to_string(),
			sort_parameter_name: "sort".to_string(),
			page_parameter_placement: ParameterPlacement::Query,
			previous_page_parameter_placement: ParameterPlacement::Query,
			page_size_parameter_placement: ParameterPlacement::Query,
			sort_parameter_placement: ParameterPlacement::Query,
			arguments: IndexMap::new(),
			query_parameters: IndexMap::new(),
		}
	}
}

impl UrlConfig {
	/// Creates the default configuration: `page`, `prev-page`, `pagesize` and
	/// `sort`, all in the query string.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the page parameter name.
	pub fn with_page_parameter_name(mut self, name: impl Into<String>) -> Self {
		self.page_parameter_name = name.into();
		self
	}

	/// Sets the previous-page parameter name.
	pub fn with_previous_page_parameter_name(mut self, name: impl Into<String>) -> Self {
		self.previous_page_parameter_name = name.into();
		self
	}

	/// Sets the page-size parameter name.
	pub fn with_page_size_parameter_name(mut self, name: impl Into<String>) -> Self {
		self.page_size_parameter_name = name.into();
		self
	}

	/// Sets the sort parameter name.
	pub fn with_sort_parameter_name(mut self, name: impl Into<String>) -> Self {
		self.sort_parameter_name = name.into();
		self
	}

	/// Sets where the page parameter goes.
	pub fn with_page_parameter_placement(mut self, placement: ParameterPlacement) -> Self {
		self.page_parameter_placement = placement;
		self
	}

	/// Sets where the previous-page parameter goes.
	pub fn with_previous_page_parameter_placement(mut self, placement: ParameterPlacement) -> Self {
		self.previous_page_parameter_placement = placement;
		self
	}

	/// Sets where the page-size parameter goes.
	pub fn with_page_size_parameter_placement(mut self, placement: ParameterPlacement) -> Self {
		self.page_size_parameter_placement = placement;
		self
	}

	/// Sets where the sort parameter goes.
	pub fn with_sort_parameter_placement(mut self, placement: ParameterPlacement) -> Self {
		self.sort_parameter_placement = placement;
		self
	}

	/// Adds a static route argument merged into every generated URL.
	pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.arguments.insert(name.into(), value.into());
		self
	}

	/// Adds a static query parameter merged into every generated URL.
	pub fn with_query_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.query_parameters.insert(name.into(), value.into());
		self
	}

	/// Returns the page parameter name.
	pub fn page_parameter_name(&self) -> &str {
		&self.page_parameter_name
	}

	/// Returns the previous-page parameter name.
	pub fn previous_page_parameter_name(&self) -> &str {
		&self.previous_page_parameter_name
	}

	/// Returns the page-size parameter name.
	pub fn page_size_parameter_name(&self) -> &str {
		&self.page_size_parameter_name
	}

	/// Returns the sort parameter name.
	pub fn sort_parameter_name(&self) -> &str {
		&self.sort_parameter_name
	}

	/// Returns where the page parameter goes.
	pub fn page_parameter_placement(&self) -> ParameterPlacement {
		self.page_parameter_placement
	}

	/// Returns where the previous-page parameter goes.
	pub fn previous_page_parameter_placement(&self) -> ParameterPlacement {
		self.previous_page_parameter_placement
	}

	/// Returns where the page-size parameter goes.
	pub fn page_size_parameter_placement(&self) -> ParameterPlacement {
		self.page_size_parameter_placement
	}

	/// Returns where the sort parameter goes.
	pub fn sort_parameter_placement(&self) -> ParameterPlacement {
		self.sort_parameter_placement
	}

	/// Returns the static route arguments.
	pub fn arguments(&self) -> &IndexMap<String, String> {
		&self.arguments
	}

	/// Returns the static query parameters.
	pub fn query_parameters(&self) -> &IndexMap<String, String> {
		&self.query_parameters
	}
}

/// Route arguments and query parameters for one generated URL.
///
/// `None` marks a parameter that is known but has no value for this URL;
/// creators drop such entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParameters {
	/// Values substituted into the route path
	pub arguments: IndexMap<String, Option<String>>,
	/// Values written into the query string
	pub query_parameters: IndexMap<String, Option<String>>,
}

impl UrlParameters {
	fn put(&mut self, placement: ParameterPlacement, name: &str, value: Option<String>) {
		let target = match placement {
			ParameterPlacement::Path => &mut self.arguments,
			ParameterPlacement::Query => &mut self.query_parameters,
		};
		target.insert(name.to_string(), value);
	}

	/// Encodes the query parameters that have a value.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_dataview_core::UrlParameters;
	///
	/// let mut parameters = UrlParameters::default();
	/// parameters.query_parameters.insert("sort".into(), Some("-name,id".into()));
	/// parameters.query_parameters.insert("page".into(), None);
	///
	/// assert_eq!(parameters.query_string(), "sort=-name%2Cid");
	/// ```
	pub fn query_string(&self) -> String {
		self.query_parameters
			.iter()
			.filter_map(|(name, value)| {
				value.as_ref().map(|value| {
					format!(
						"{}={}",
						utf8_percent_encode(name, COMPONENT),
						utf8_percent_encode(value, COMPONENT)
					)
				})
			})
			.collect::<Vec<_>>()
			.join("&")
	}
}

/// Computes URL parameters from the pagination and sort state.
pub struct UrlParametersFactory;

impl UrlParametersFactory {
	/// Builds route arguments and query parameters.
	///
	/// Static arguments and query parameters from `config` are inserted first;
	/// the four computed parameters are written afterwards, always present and
	/// `None` when they have no value, so a computed parameter overrides a static
	/// one of the same name.
	///
	/// The page parameter carries the token value only for forward tokens, the
	/// previous-page parameter only for backward ones.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_dataview_core::{PageToken, UrlConfig, UrlParametersFactory};
	///
	/// let parameters = UrlParametersFactory::create(
	///     Some(&PageToken::previous("abc")),
	///     Some(20),
	///     Some("-name"),
	///     &UrlConfig::new(),
	/// );
	///
	/// assert_eq!(parameters.query_parameters["page"], None);
	/// assert_eq!(parameters.query_parameters["prev-page"].as_deref(), Some("abc"));
	/// assert_eq!(parameters.query_parameters["pagesize"].as_deref(), Some("20"));
	/// assert_eq!(parameters.query_parameters["sort"].as_deref(), Some("-name"));
	/// assert!(parameters.arguments.is_empty());
	/// ```
	pub fn create(
		page_token: Option<&PageToken>,
		page_size: Option<usize>,
		sort: Option<&str>,
		config: &UrlConfig,
	) -> UrlParameters {
		let mut parameters = UrlParameters {
			arguments: config
				.arguments
				.iter()
				.map(|(name, value)| (name.clone(), Some(value.clone())))
				.collect(),
			query_parameters: config
				.query_parameters
				.iter()
				.map(|(name, value)| (name.clone(), Some(value.clone())))
				.collect(),
		};

		let page = page_token
			.filter(|token| !token.is_previous)
			.map(|token| token.value.clone());
		let previous_page = page_token
			.filter(|token| token.is_previous)
			.map(|token| token.value.clone());

		parameters.put(config.page_parameter_placement, &config.page_parameter_name, page);
		parameters.put(
			config.previous_page_parameter_placement,
			&config.previous_page_parameter_name,
			previous_page,
		);
		parameters.put(
			config.page_size_parameter_placement,
			&config.page_size_parameter_name,
			page_size.map(|size| size.to_string()),
		);
		parameters.put(
			config.sort_parameter_placement,
			&config.sort_parameter_name,
			sort.map(str::to_string),
		);

		parameters
	}
}

/// Turns URL parameters into a URL.
///
/// Implemented for any `Fn(&UrlParameters) -> String`.
pub trait UrlCreator: Send + Sync {
	/// Creates the URL for `parameters`.
	fn create_url(&self, parameters: &UrlParameters) -> String;
}

impl<F> UrlCreator for F
where
	F: Fn(&UrlParameters) -> String + Send + Sync,
{
	fn create_url(&self, parameters: &UrlParameters) -> String {
		self(parameters)
	}
}

/// A [`UrlCreator`] for a fixed route pattern.
///
/// `{name}` placeholders are replaced by the percent-encoded route argument of
/// that name. A placeholder whose argument is `None` is removed together with
/// a directly preceding `/`; a placeholder with no argument at all is kept.
/// Query parameters with a value are appended as a query string. An empty
/// pattern yields query-only URLs relative to the current page.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_core::{
///     ParameterPlacement, PageToken, RouteUrlCreator, UrlConfig, UrlCreator,
///     UrlParametersFactory,
/// };
///
/// let config = UrlConfig::new().with_page_parameter_placement(ParameterPlacement::Path);
/// let creator = RouteUrlCreator::new("/users/{page}");
///
/// let first = UrlParametersFactory::create(None, None, Some("name"), &config);
/// assert_eq!(creator.create_url(&first), "/users?sort=name");
///
/// let third = UrlParametersFactory::create(Some(&PageToken::next("3")), None, None, &config);
/// assert_eq!(creator.create_url(&third), "/users/3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteUrlCreator {
	pattern: String,
}

impl RouteUrlCreator {
	/// Creates a creator for `pattern`.
	pub fn new(pattern: impl Into<String>) -> Self {
		Self {
			pattern: pattern.into(),
		}
	}

	/// Returns the route pattern.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	fn substitute(&self, arguments: &IndexMap<String, Option<String>>) -> String {
		let mut path = String::with_capacity(self.pattern.len());
		let mut chars = self.pattern.chars();

		while let Some(ch) = chars.next() {
			if ch != '{' {
				path.push(ch);
				continue;
			}
			let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			match arguments.get(&name) {
				Some(Some(value)) => {
					path.push_str(&utf8_percent_encode(value, COMPONENT).to_string());
				}
				Some(None) => {
					if path.ends_with('/') {
						path.pop();
					}
				}
				None => {
					path.push('{');
					path.push_str(&name);
					path.push('}');
				}
			}
		}

		if path.is_empty() && !self.pattern.is_empty() {
			path.push('/');
		}
		path
	}
}

impl UrlCreator for RouteUrlCreator {
	fn create_url(&self, parameters: &UrlParameters) -> String {
		let path = self.substitute(&parameters.arguments);
		let query = parameters.query_string();
		if query.is_empty() {
			path
		} else {
			format!("{path}?{query}")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_default_names() {
		let config = UrlConfig::default();
		assert_eq!(config.page_parameter_name(), "page");
		assert_eq!(config.previous_page_parameter_name(), "prev-page");
		assert_eq!(config.page_size_parameter_name(), "pagesize");
		assert_eq!(config.sort_parameter_name(), "sort");
		assert_eq!(config.sort_parameter_placement(), ParameterPlacement::Query);
	}

	#[test]
	fn test_all_parameters_present_as_none() {
		let parameters = UrlParametersFactory::create(None, None, None, &UrlConfig::new());
		let names: Vec<&str> = parameters.query_parameters.keys().map(String::as_str).collect();
		assert_eq!(names, vec!["page", "prev-page", "pagesize", "sort"]);
		assert!(parameters.query_parameters.values().all(Option::is_none));
	}

	#[test]
	fn test_static_parameters_come_first() {
		let config = UrlConfig::new()
			.with_query_parameter("tab", "users")
			.with_query_parameter("sort", "static");
		let parameters = UrlParametersFactory::create(None, None, Some("name"), &config);

		let names: Vec<&str> = parameters.query_parameters.keys().map(String::as_str).collect();
		assert_eq!(names, vec!["tab", "sort", "page", "prev-page", "pagesize"]);
		assert_eq!(parameters.query_parameters["tab"].as_deref(), Some("users"));
		assert_eq!(parameters.query_parameters["sort"].as_deref(), Some("name"));
	}

	#[test]
	fn test_computed_none_overrides_static() {
		let config = UrlConfig::new().with_query_parameter("page", "9");
		let parameters = UrlParametersFactory::create(None, None, None, &config);
		assert_eq!(parameters.query_parameters["page"], None);
	}

	#[rstest]
	#[case("/list", "/list")]
	#[case("/list/{page}", "/list")]
	#[case("/list/{page}/items", "/list/items")]
	#[case("/{page}", "/")]
	#[case("/list/{unknown}", "/list/{unknown}")]
	fn test_route_substitution_without_page(#[case] pattern: &str, #[case] expected: &str) {
		let config = UrlConfig::new().with_page_parameter_placement(ParameterPlacement::Path);
		let parameters = UrlParametersFactory::create(None, None, None, &config);
		assert_eq!(RouteUrlCreator::new(pattern).create_url(&parameters), expected);
	}

	#[test]
	fn test_empty_pattern_is_relative() {
		let parameters = UrlParametersFactory::create(None, None, Some("name"), &UrlConfig::new());
		assert_eq!(RouteUrlCreator::new("").create_url(&parameters), "?sort=name");
	}

	#[test]
	fn test_route_encodes_arguments() {
		let config = UrlConfig::new().with_sort_parameter_placement(ParameterPlacement::Path);
		let parameters = UrlParametersFactory::create(None, None, Some("a b/c"), &config);
		assert_eq!(
			RouteUrlCreator::new("/list/{sort}").create_url(&parameters),
			"/list/a%20b%2Fc"
		);
	}

	#[test]
	fn test_closure_creator() {
		let creator = |parameters: &UrlParameters| format!("/x?{}", parameters.query_string());
		let parameters = UrlParametersFactory::create(None, Some(5), None, &UrlConfig::new());
		assert_eq!(creator.create_url(&parameters), "/x?pagesize=5");
	}

	#[test]
	fn test_placement_deserializes_lowercase() {
		let placement: ParameterPlacement = serde_json::from_str(r#""path""#).unwrap();
		assert_eq!(placement, ParameterPlacement::Path);
	}
}
