use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use reinhardt_dataview_core::{Attributes, Content, Tag};

use crate::context::DataContext;
use crate::renderer::{ActionColumnRenderer, RendererId};
use crate::resolvable::Resolvable;

/// Builds the URL of an action for one row.
pub trait ActionUrlCreator: Send + Sync {
	/// Returns the URL of `action` for the row in `context`.
	fn create_url(&self, action: &str, context: &DataContext<'_>) -> String;
}

impl<F> ActionUrlCreator for F
where
	F: Fn(&str, &DataContext<'_>) -> String + Send + Sync,
{
	fn create_url(&self, action: &str, context: &DataContext<'_>) -> String {
		self(action, context)
	}
}

/// Renders one action button from its URL.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_columns::ActionButton;
/// use reinhardt_dataview_core::Attributes;
///
/// let button = ActionButton::link("Edit", Attributes::new().with("class", "btn"));
/// assert_eq!(button.render("/users/1/edit"), r#"<a href="/users/1/edit" class="btn">Edit</a>"#);
/// ```
#[derive(Clone)]
pub struct ActionButton(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl ActionButton {
	/// Wraps a closure receiving the button URL and returning its HTML.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&str) -> String + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	/// A link with an escaped text `label`.
	pub fn link(label: impl Into<String>, attributes: Attributes) -> Self {
		let label = label.into();
		Self::new(move |url| {
			Tag::known("a")
				.attribute("href", url)
				.attributes(attributes.clone())
				.content(Content::text(label.as_str()))
				.render()
		})
	}

	/// Renders the button for `url`.
	pub fn render(&self, url: &str) -> String {
		(self.0)(url)
	}
}

impl fmt::Debug for ActionButton {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("ActionButton(<closure>)")
	}
}

/// Displays per-row action buttons laid out by a template.
///
/// The template refers to buttons as `{name}`. Buttons not configured here
/// fall back to those of the renderer, then to the built-in `view`, `update`
/// and `delete` links.
#[derive(Clone)]
pub struct ActionColumn {
	pub(crate) header: Option<String>,
	pub(crate) footer: Option<String>,
	pub(crate) template: Option<String>,
	pub(crate) buttons: IndexMap<String, ActionButton>,
	pub(crate) visible_buttons: IndexMap<String, Resolvable<bool>>,
	pub(crate) url_creator: Option<Arc<dyn ActionUrlCreator>>,
	pub(crate) content: Option<Resolvable<String>>,
	pub(crate) column_attributes: Attributes,
	pub(crate) header_attributes: Attributes,
	pub(crate) body_attributes: Resolvable<Attributes>,
	pub(crate) footer_attributes: Attributes,
	pub(crate) visible: bool,
	pub(crate) renderer: RendererId,
}

impl Default for ActionColumn {
	fn default() -> Self {
		Self {
			header: None,
			footer: None,
			template: None,
			buttons: IndexMap::new(),
			visible_buttons: IndexMap::new(),
			url_creator: None,
			content: None,
			column_attributes: Attributes::new(),
			header_attributes: Attributes::new(),
			body_attributes: Resolvable::default(),
			footer_attributes: Attributes::new(),
			visible: true,
			renderer: RendererId::of::<ActionColumnRenderer>(),
		}
	}
}

impl ActionColumn {
	/// Creates a column with the renderer's template and buttons.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the header label.
	pub fn with_header(mut self, header: impl Into<String>) -> Self {
		self.header = Some(header.into());
		self
	}

	/// Sets the footer text.
	pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
		self.footer = Some(footer.into());
		self
	}

	/// Sets the button template, e.g. `"{view} {delete}"`.
	pub fn with_template(mut self, template: impl Into<String>) -> Self {
		self.template = Some(template.into());
		self
	}

	/// Adds or replaces a button.
	pub fn with_button(mut self, name: impl Into<String>, button: ActionButton) -> Self {
		self.buttons.insert(name.into(), button);
		self
	}

	/// Sets whether a button is shown, fixed or computed per row.
	pub fn with_visible_button(
		mut self,
		name: impl Into<String>,
		visible: impl Into<Resolvable<bool>>,
	) -> Self {
		self.visible_buttons.insert(name.into(), visible.into());
		self
	}

	/// Sets the URL creator for this column's buttons.
	pub fn with_url_creator(mut self, url_creator: impl ActionUrlCreator + 'static) -> Self {
		self.url_creator = Some(Arc::new(url_creator));
		self
	}

	/// Replaces the buttons with fixed or computed markup.
	pub fn with_content(mut self, content: impl Into<Resolvable<String>>) -> Self {
		self.content = Some(content.into());
		self
	}

	/// Sets `<col>` attributes.
	pub fn with_column_attributes(mut self, attributes: Attributes) -> Self {
		self.column_attributes = attributes;
		self
	}

	/// Sets header cell attributes.
	pub fn with_header_attributes(mut self, attributes: Attributes) -> Self {
		self.header_attributes = attributes;
		self
	}

	/// Sets body cell attributes, fixed or computed per row.
	pub fn with_body_attributes(mut self, attributes: impl Into<Resolvable<Attributes>>) -> Self {
		self.body_attributes = attributes.into();
		self
	}

	/// Sets footer cell attributes.
	pub fn with_footer_attributes(mut self, attributes: Attributes) -> Self {
		self.footer_attributes = attributes;
		self
	}

	/// Shows or hides the column.
	pub fn with_visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}

	/// Renders the column with another renderer.
	pub fn with_renderer(mut self, renderer: RendererId) -> Self {
		self.renderer = renderer;
		self
	}
}

impl fmt::Debug for ActionColumn {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ActionColumn")
			.field("header", &self.header)
			.field("template", &self.template)
			.field("buttons", &self.buttons.keys().collect::<Vec<_>>())
			.field("visible_buttons", &self.visible_buttons)
			.field("has_url_creator", &self.url_creator.is_some())
			.field("visible", &self.visible)
			.field("renderer", &self.renderer)
			.finish_non_exhaustive()
	}
}
