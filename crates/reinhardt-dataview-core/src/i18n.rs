//! Translation of user-facing strings

use std::collections::HashMap;

/// Default category for the strings data views emit themselves.
pub const DEFAULT_TRANSLATION_CATEGORY: &str = "reinhardt-dataview";

/// Translates message ids within a category.
pub trait Translator: Send + Sync {
	/// Returns the translation of `id`, or `id` itself when none exists.
	fn translate(&self, id: &str, category: &str) -> String;
}

/// A translator that returns every id unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
	fn translate(&self, id: &str, _category: &str) -> String {
		id.to_string()
	}
}

/// Translator backed by in-memory message catalogs, one per category.
///
/// # Example
/// ```
/// use reinhardt_dataview_core::{CatalogTranslator, Translator};
///
/// let mut translator = CatalogTranslator::new();
/// translator.add_translation("reinhardt-dataview", "Actions", "Aktionen");
///
/// assert_eq!(translator.translate("Actions", "reinhardt-dataview"), "Aktionen");
/// assert_eq!(translator.translate("Actions", "app"), "Actions");
/// assert_eq!(translator.translate("View", "reinhardt-dataview"), "View");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
	catalogs: HashMap<String, HashMap<String, String>>,
}

impl CatalogTranslator {
	/// Creates an empty translator.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one translation to `category`.
	pub fn add_translation(
		&mut self,
		category: impl Into<String>,
		id: impl Into<String>,
		translation: impl Into<String>,
	) {
		self.catalogs
			.entry(category.into())
			.or_default()
			.insert(id.into(), translation.into());
	}

	/// Builder form of [`add_translation`](Self::add_translation).
	pub fn with_translation(
		mut self,
		category: impl Into<String>,
		id: impl Into<String>,
		translation: impl Into<String>,
	) -> Self {
		self.add_translation(category, id, translation);
		self
	}
}

impl Translator for CatalogTranslator {
	fn translate(&self, id: &str, category: &str) -> String {
		self.catalogs
			.get(category)
			.and_then(|catalog| catalog.get(id))
			.cloned()
			.unwrap_or_else(|| id.to_string())
	}
}
