use std::fmt;
use std::sync::Arc;

use reinhardt_dataview_core::{
	DEFAULT_TRANSLATION_CATEGORY, DataViewSettings, IdentityTranslator, PageToken,
	RouteUrlCreator, Sort, SortableHeaderTheme, Translator, UrlConfig, UrlCreator,
	UrlParametersFactory,
};

use crate::reader::DataReader;

/// Settings of one render pass, shared by every column.
///
/// Built with [`GlobalContext::builder`]. The sort defaults to the one
/// reported by the data reader and the URL creator to an empty route, which
/// yields query-only links relative to the current page.
#[derive(Clone)]
pub struct GlobalContext {
	reader: Arc<dyn DataReader>,
	sort: Option<Sort>,
	original_sort: Option<Sort>,
	url_config: UrlConfig,
	theme: SortableHeaderTheme,
	page_token: Option<PageToken>,
	page_size: Option<usize>,
	multi_sort: bool,
	url_creator: Arc<dyn UrlCreator>,
	translator: Arc<dyn Translator>,
	translation_category: String,
}

impl GlobalContext {
	/// Starts building a context over `reader`.
	pub fn builder(reader: Arc<dyn DataReader>) -> GlobalContextBuilder {
		GlobalContextBuilder::new(reader)
	}

	/// The data reader.
	pub fn reader(&self) -> &Arc<dyn DataReader> {
		&self.reader
	}

	/// The current sort; `None` disables sortable headers.
	pub fn sort(&self) -> Option<&Sort> {
		self.sort.as_ref()
	}

	/// The sort as configured before request parameters were applied.
	pub fn original_sort(&self) -> Option<&Sort> {
		self.original_sort.as_ref()
	}

	/// URL parameter names and placement.
	pub fn url_config(&self) -> &UrlConfig {
		&self.url_config
	}

	/// Sortable header decoration.
	pub fn theme(&self) -> &SortableHeaderTheme {
		&self.theme
	}

	/// The current page token.
	pub fn page_token(&self) -> Option<&PageToken> {
		self.page_token.as_ref()
	}

	/// The current page size.
	pub fn page_size(&self) -> Option<usize> {
		self.page_size
	}

	/// Whether sort links keep the order of other columns.
	pub fn multi_sort(&self) -> bool {
		self.multi_sort
	}

	/// Category used for built-in strings.
	pub fn translation_category(&self) -> &str {
		&self.translation_category
	}

	/// Translates `id` in the configured category.
	pub fn translate(&self, id: &str) -> String {
		self.translator.translate(id, &self.translation_category)
	}

	/// Creates a URL for `page_token` and `sort`, keeping the current page size.
	pub fn create_url(&self, page_token: Option<&PageToken>, sort: Option<&str>) -> String {
		let parameters =
			UrlParametersFactory::create(page_token, self.page_size, sort, &self.url_config);
		self.url_creator.create_url(&parameters)
	}
}

impl fmt::Debug for GlobalContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GlobalContext")
			.field("sort", &self.sort)
			.field("original_sort", &self.original_sort)
			.field("url_config", &self.url_config)
			.field("page_token", &self.page_token)
			.field("page_size", &self.page_size)
			.field("multi_sort", &self.multi_sort)
			.field("translation_category", &self.translation_category)
			.finish_non_exhaustive()
	}
}

/// Builder for [`GlobalContext`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use reinhardt_dataview_columns::{GlobalContext, InMemoryDataReader};
/// use reinhardt_dataview_core::{RouteUrlCreator, Sort};
///
/// let reader = Arc::new(InMemoryDataReader::default());
/// let context = GlobalContext::builder(reader)
///     .sort(Sort::any().with_order_string("name"))
///     .page_size(20)
///     .url_creator(RouteUrlCreator::new("/users"))
///     .build();
///
/// assert_eq!(context.create_url(None, Some("-name")), "/users?pagesize=20&sort=-name");
/// ```
pub struct GlobalContextBuilder {
	reader: Arc<dyn DataReader>,
	sort: Option<Option<Sort>>,
	original_sort: Option<Option<Sort>>,
	url_config: UrlConfig,
	theme: SortableHeaderTheme,
	page_token: Option<PageToken>,
	page_size: Option<usize>,
	multi_sort: bool,
	url_creator: Option<Arc<dyn UrlCreator>>,
	translator: Arc<dyn Translator>,
	translation_category: String,
}

impl GlobalContextBuilder {
	fn new(reader: Arc<dyn DataReader>) -> Self {
		Self {
			reader,
			sort: None,
			original_sort: None,
			url_config: UrlConfig::default(),
			theme: SortableHeaderTheme::default(),
			page_token: None,
			page_size: None,
			multi_sort: false,
			url_creator: None,
			translator: Arc::new(IdentityTranslator),
			translation_category: DEFAULT_TRANSLATION_CATEGORY.to_string(),
		}
	}

	/// Sets the current sort instead of the reader's.
	pub fn sort(mut self, sort: Sort) -> Self {
		self.sort = Some(Some(sort));
		self
	}

	/// Disables sorting for this render pass.
	pub fn without_sort(mut self) -> Self {
		self.sort = Some(None);
		self
	}

	/// Sets the sort that decides which properties are sortable.
	pub fn original_sort(mut self, sort: Sort) -> Self {
		self.original_sort = Some(Some(sort));
		self
	}

	/// Sets URL parameter names and placement.
	pub fn url_config(mut self, url_config: UrlConfig) -> Self {
		self.url_config = url_config;
		self
	}

	/// Sets the sortable header decoration.
	pub fn theme(mut self, theme: SortableHeaderTheme) -> Self {
		self.theme = theme;
		self
	}

	/// Sets the current page token.
	pub fn page_token(mut self, page_token: PageToken) -> Self {
		self.page_token = Some(page_token);
		self
	}

	/// Sets the current page size.
	pub fn page_size(mut self, page_size: usize) -> Self {
		self.page_size = Some(page_size);
		self
	}

	/// Sets whether sort links keep the order of other columns.
	pub fn multi_sort(mut self, multi_sort: bool) -> Self {
		self.multi_sort = multi_sort;
		self
	}

	/// Sets the URL creator used for sort links.
	pub fn url_creator(mut self, url_creator: impl UrlCreator + 'static) -> Self {
		self.url_creator = Some(Arc::new(url_creator));
		self
	}

	/// Sets the translator for built-in strings.
	pub fn translator(mut self, translator: Arc<dyn Translator>) -> Self {
		self.translator = translator;
		self
	}

	/// Sets the translation category.
	pub fn translation_category(mut self, category: impl Into<String>) -> Self {
		self.translation_category = category.into();
		self
	}

	/// Applies project-wide settings.
	pub fn settings(mut self, settings: &DataViewSettings) -> Self {
		self.url_config = settings.url.clone();
		self.theme = settings.sortable_header.clone();
		self.multi_sort = settings.multi_sort;
		self.translation_category = settings.translation_category.clone();
		self
	}

	/// Finishes the context.
	pub fn build(self) -> GlobalContext {
		let sort = self.sort.unwrap_or_else(|| self.reader.sort());
		let original_sort = self.original_sort.unwrap_or_else(|| sort.clone());
		GlobalContext {
			reader: self.reader,
			sort,
			original_sort,
			url_config: self.url_config,
			theme: self.theme,
			page_token: self.page_token,
			page_size: self.page_size,
			multi_sort: self.multi_sort,
			url_creator: self
				.url_creator
				.unwrap_or_else(|| Arc::new(RouteUrlCreator::new(""))),
			translator: self.translator,
			translation_category: self.translation_category,
		}
	}
}
