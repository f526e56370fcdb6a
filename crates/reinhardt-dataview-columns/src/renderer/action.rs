use std::sync::Arc;

use indexmap::IndexMap;
use reinhardt_dataview_core::{
	Cell, Content, DEFAULT_TRANSLATION_CATEGORY, IdentityTranslator, Tag, Translator,
};

use super::{ColumnRenderer, ConstructRenderer, Injector, column_cell, footer_cell, short_name};
use crate::column::{ActionButton, ActionColumn, ActionUrlCreator, Column, ColumnKind};
use crate::context::{DataContext, GlobalContext, HeaderContext};
use crate::error::{ColumnError, Result};

/// Button layout used when neither the column nor the renderer sets one.
const DEFAULT_TEMPLATE: &str = "{view}\n{update}\n{delete}";

/// Built-in buttons: name, label and untranslated title.
const DEFAULT_BUTTONS: &[(&str, &str, &str)] = &[
	("view", "🔎", "View"),
	("update", "✎", "Update"),
	("delete", "❌", "Delete"),
];

/// Renders [`ActionColumn`]s.
///
/// Arguments, each also resolvable as a shared service of the same type:
///
/// - `url_creator` (`Arc<dyn ActionUrlCreator>`): fallback URL creator
/// - `buttons` (`IndexMap<String, ActionButton>`): buttons available to all columns
/// - `template` (`String`): default button layout
/// - `translator` (`Arc<dyn Translator>`): translates built-in button titles
#[derive(Clone)]
pub struct ActionColumnRenderer {
	url_creator: Option<Arc<dyn ActionUrlCreator>>,
	buttons: IndexMap<String, ActionButton>,
	template: String,
	translator: Arc<dyn Translator>,
	translation_category: String,
}

impl Default for ActionColumnRenderer {
	fn default() -> Self {
		Self {
			url_creator: None,
			buttons: IndexMap::new(),
			template: DEFAULT_TEMPLATE.to_string(),
			translator: Arc::new(IdentityTranslator),
			translation_category: DEFAULT_TRANSLATION_CATEGORY.to_string(),
		}
	}
}

impl std::fmt::Debug for ActionColumnRenderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ActionColumnRenderer")
			.field("has_url_creator", &self.url_creator.is_some())
			.field("buttons", &self.buttons.keys().collect::<Vec<_>>())
			.field("template", &self.template)
			.field("translation_category", &self.translation_category)
			.finish_non_exhaustive()
	}
}

impl ActionColumnRenderer {
	/// Creates a renderer with the built-in buttons and template.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the fallback URL creator.
	pub fn with_url_creator(mut self, url_creator: impl ActionUrlCreator + 'static) -> Self {
		self.url_creator = Some(Arc::new(url_creator));
		self
	}

	/// Adds a button available to all columns.
	pub fn with_button(mut self, name: impl Into<String>, button: ActionButton) -> Self {
		self.buttons.insert(name.into(), button);
		self
	}

	/// Sets the default button layout.
	pub fn with_template(mut self, template: impl Into<String>) -> Self {
		self.template = template.into();
		self
	}

	/// Sets the translator for built-in button titles.
	pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
		self.translator = translator;
		self
	}

	fn column<'c>(&self, column: &'c Column) -> Result<&'c ActionColumn> {
		column.as_action().ok_or_else(|| {
			ColumnError::unexpected_column(
				short_name(std::any::type_name::<Self>()),
				ColumnKind::Action,
				column.kind(),
			)
		})
	}

	fn url(&self, column: &ActionColumn, action: &str, context: &DataContext<'_>) -> Result<String> {
		let creator = column
			.url_creator
			.as_ref()
			.or(self.url_creator.as_ref())
			.ok_or_else(|| ColumnError::MissingUrlCreator {
				action: action.to_string(),
			})?;
		Ok(creator.create_url(action, context))
	}

	fn render_button(
		&self,
		column: &ActionColumn,
		name: &str,
		context: &DataContext<'_>,
	) -> Result<String> {
		let visible = column
			.visible_buttons
			.get(name)
			.is_none_or(|visible| visible.resolve(context));
		if !visible {
			return Ok(String::new());
		}

		if let Some(button) = column.buttons.get(name).or_else(|| self.buttons.get(name)) {
			let url = self.url(column, name, context)?;
			return Ok(button.render(&url));
		}

		let Some((_, label, title)) = DEFAULT_BUTTONS.iter().find(|(button, ..)| *button == name)
		else {
			tracing::trace!(button = name, "Unknown action button rendered as empty");
			return Ok(String::new());
		};
		let url = self.url(column, name, context)?;
		Ok(Tag::known("a")
			.attribute("href", url)
			.attribute(
				"title",
				self.translator.translate(title, &self.translation_category),
			)
			.content(Content::text(*label))
			.render())
	}
}

impl ConstructRenderer for ActionColumnRenderer {
	fn construct(injector: &Injector<'_>) -> Result<Self> {
		let defaults = Self::default();
		Ok(Self {
			url_creator: injector.resolve::<Arc<dyn ActionUrlCreator>>("url_creator")?,
			buttons: injector
				.resolve::<IndexMap<String, ActionButton>>("buttons")?
				.unwrap_or_default(),
			template: injector.arg::<String>("template")?.unwrap_or(defaults.template),
			translator: injector
				.resolve::<Arc<dyn Translator>>("translator")?
				.unwrap_or(defaults.translator),
			translation_category: injector
				.arg::<String>("translation_category")?
				.unwrap_or(defaults.translation_category),
		})
	}
}

/// Replaces each `{name}` in `template` with `render(name)`.
///
/// Braces that do not enclose a name made of letters, digits, `_`, `-` or `/`
/// are copied as-is.
fn render_template<F>(template: &str, mut render: F) -> Result<String>
where
	F: FnMut(&str) -> Result<String>,
{
	let mut output = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(open) = rest.find('{') {
		output.push_str(&rest[..open]);
		let after = &rest[open + 1..];
		match after.find('}') {
			Some(close) if is_button_name(&after[..close]) => {
				output.push_str(&render(&after[..close])?);
				rest = &after[close + 1..];
			}
			_ => {
				output.push('{');
				rest = after;
			}
		}
	}
	output.push_str(rest);
	Ok(output)
}

fn is_button_name(name: &str) -> bool {
	!name.is_empty()
		&& name
			.chars()
			.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '/'))
}

impl ColumnRenderer for ActionColumnRenderer {
	fn render_column(&self, column: &Column, cell: Cell, _context: &GlobalContext) -> Result<Cell> {
		Ok(column_cell(cell, &self.column(column)?.column_attributes))
	}

	fn render_header(
		&self,
		column: &Column,
		cell: Cell,
		context: &HeaderContext<'_>,
	) -> Result<Option<Cell>> {
		let column = self.column(column)?;
		let label = column
			.header
			.clone()
			.unwrap_or_else(|| context.translate("Actions"));
		Ok(Some(
			cell.add_attributes(&column.header_attributes)
				.content(Content::text(label)),
		))
	}

	fn render_body(&self, column: &Column, cell: Cell, context: &DataContext<'_>) -> Result<Cell> {
		let column = self.column(column)?;
		let content = match &column.content {
			Some(content) => content.resolve(context),
			None => {
				let template = column.template.as_deref().unwrap_or(&self.template);
				render_template(template, |name| self.render_button(column, name, context))?
			}
		};
		Ok(cell
			.add_attributes(&column.body_attributes.resolve(context))
			.content(Content::markup(content)))
	}

	fn render_footer(&self, column: &Column, cell: Cell, _context: &GlobalContext) -> Result<Cell> {
		let column = self.column(column)?;
		Ok(footer_cell(cell, &column.footer_attributes, column.footer.as_deref()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn echo(name: &str) -> Result<String> {
		Ok(format!("[{name}]"))
	}

	#[rstest]
	#[case("{view} {delete}", "[view] [delete]")]
	#[case("{view}\n{update}", "[view]\n[update]")]
	#[case("no buttons", "no buttons")]
	#[case("{ not a name } {x}", "{ not a name } [x]")]
	#[case("{unclosed", "{unclosed")]
	#[case("{}{a/b}", "{}[a/b]")]
	fn test_render_template(#[case] template: &str, #[case] expected: &str) {
		assert_eq!(render_template(template, echo).unwrap(), expected);
	}

	#[test]
	fn test_template_propagates_errors() {
		let result = render_template("{view}", |name| {
			Err(ColumnError::MissingUrlCreator {
				action: name.to_string(),
			})
		});
		assert!(matches!(result, Err(ColumnError::MissingUrlCreator { action }) if action == "view"));
	}
}
