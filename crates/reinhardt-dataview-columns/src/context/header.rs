use reinhardt_dataview_core::{Attributes, Cell, Content, SortDirection, Tag};

use super::GlobalContext;

/// Header-time view of a [`GlobalContext`].
///
/// Decides whether a property gets a sort link, where the link points and
/// how the header cell is decorated for the current sort state.
#[derive(Debug, Clone, Copy)]
pub struct HeaderContext<'a> {
	global: &'a GlobalContext,
}

/// Outcome of [`HeaderContext::prepare_sortable`].
#[derive(Debug, Clone, PartialEq)]
pub struct SortableHeader {
	/// The header cell, with sort classes added when sortable
	pub cell: Cell,
	/// Link switching to the next sort state; `None` when not sortable
	pub link: Option<SortLink>,
	/// Markup placed before the link
	pub prepend: String,
	/// Markup placed after the link
	pub append: String,
}

impl SortableHeader {
	fn unchanged(cell: Cell) -> Self {
		Self {
			cell,
			link: None,
			prepend: String::new(),
			append: String::new(),
		}
	}

	/// Returns `true` when a sort link was negotiated.
	pub fn is_sortable(&self) -> bool {
		self.link.is_some()
	}

	/// Wraps `label` in the sort link and surrounding markup.
	///
	/// `label` must already be HTML. Without a link the label is returned as-is.
	pub fn decorate(&self, label: &str) -> String {
		match &self.link {
			Some(link) => format!("{}{}{}", self.prepend, link.render(label), self.append),
			None => label.to_string(),
		}
	}
}

/// A sort link: target URL plus link attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct SortLink {
	/// Target URL
	pub url: String,
	/// Attributes from the theme, including the direction class
	pub attributes: Attributes,
}

impl SortLink {
	/// Renders an anchor around `label`, which must already be HTML.
	pub fn render(&self, label: &str) -> String {
		Tag::known("a")
			.attribute("href", self.url.as_str())
			.attributes(self.attributes.clone())
			.content(Content::markup(label))
			.render()
	}
}

impl<'a> HeaderContext<'a> {
	/// Wraps the global context of the current render pass.
	pub fn new(global: &'a GlobalContext) -> Self {
		Self { global }
	}

	/// The wrapped global context.
	pub fn global(&self) -> &'a GlobalContext {
		self.global
	}

	/// Translates `id` in the configured category.
	pub fn translate(&self, id: &str) -> String {
		self.global.translate(id)
	}

	/// Negotiates the sort link for `property`.
	///
	/// Nothing changes when sorting is disabled or when the configured sort
	/// does not allow `property`. Otherwise the cell gets the class for the
	/// current direction and the link targets the next state of the cycle
	/// unsorted, ascending, descending, unsorted. The page token is dropped
	/// and the page size kept.
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	///
	/// use reinhardt_dataview_columns::{GlobalContext, HeaderContext, InMemoryDataReader};
	/// use reinhardt_dataview_core::{Cell, RouteUrlCreator, Sort};
	///
	/// let global = GlobalContext::builder(Arc::new(InMemoryDataReader::default()))
	///     .sort(Sort::only(["name"]).with_order_string("name"))
	///     .url_creator(RouteUrlCreator::new("/list"))
	///     .build();
	/// let header = HeaderContext::new(&global).prepare_sortable(Cell::new(), "name");
	///
	/// assert_eq!(header.link.unwrap().url, "/list?sort=-name");
	/// ```
	pub fn prepare_sortable(&self, cell: Cell, property: &str) -> SortableHeader {
		let Some(sort) = self.global.sort() else {
			return SortableHeader::unchanged(cell);
		};
		let configured = self.global.original_sort().unwrap_or(sort);
		if !configured.has_field(property) {
			tracing::trace!(property, "Property not sortable, header left unchanged");
			return SortableHeader::unchanged(cell);
		}

		let theme = self.global.theme();
		let link_attributes: Attributes = theme
			.link_attributes
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
			.collect();

		let (cell, link_attributes, prepend, append) = match sort.order().get(property) {
			None => (
				cell.add_class(&theme.header_class),
				link_attributes,
				&theme.header_prepend,
				&theme.header_append,
			),
			Some(SortDirection::Asc) => (
				cell.add_class(&theme.header_asc_class),
				link_attributes.add_class(&theme.link_asc_class),
				&theme.header_asc_prepend,
				&theme.header_asc_append,
			),
			Some(SortDirection::Desc) => (
				cell.add_class(&theme.header_desc_class),
				link_attributes.add_class(&theme.link_desc_class),
				&theme.header_desc_prepend,
				&theme.header_desc_append,
			),
		};

		let next = sort.order().toggled(property, self.global.multi_sort());
		let next = (!next.is_empty()).then(|| next.to_sort_string());
		let url = self.global.create_url(None, next.as_deref());
		tracing::trace!(property, url = %url, "Negotiated sort link");

		SortableHeader {
			cell,
			link: Some(SortLink {
				url,
				attributes: link_attributes,
			}),
			prepend: prepend.clone(),
			append: append.clone(),
		}
	}
}

