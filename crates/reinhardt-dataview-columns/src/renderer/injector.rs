use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{ColumnError, Result};

/// Named arguments configured for one renderer.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_columns::RendererArgs;
///
/// let base = RendererArgs::new().with("null_display", "-".to_string());
/// let merged = base.merge(&RendererArgs::new().with("null_display", "n/a".to_string()));
///
/// assert_eq!(merged.len(), 1);
/// assert!(merged.contains("null_display"));
/// ```
#[derive(Clone, Default)]
pub struct RendererArgs(IndexMap<String, Arc<dyn Any + Send + Sync>>);

impl RendererArgs {
	/// Creates an empty argument set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces an argument.
	pub fn with<T: Any + Send + Sync>(mut self, name: impl Into<String>, value: T) -> Self {
		self.0.insert(name.into(), Arc::new(value));
		self
	}

	/// Merges `other` into a copy of `self`; arguments from `other` win.
	pub fn merge(&self, other: &RendererArgs) -> Self {
		let mut merged = self.clone();
		for (name, value) in &other.0 {
			merged.0.insert(name.clone(), Arc::clone(value));
		}
		merged
	}

	/// Returns `true` when `name` is set.
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// Number of arguments.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no argument is set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn get(&self, name: &str) -> Option<&Arc<dyn Any + Send + Sync>> {
		self.0.get(name)
	}
}

impl fmt::Debug for RendererArgs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.0.keys()).finish()
	}
}

/// Shared services available to every renderer, keyed by type.
///
/// Trait objects are registered under their `Arc` type:
///
/// ```
/// use std::sync::Arc;
///
/// use reinhardt_dataview_columns::Services;
/// use reinhardt_dataview_core::{CatalogTranslator, Translator};
///
/// let services = Services::new()
///     .with::<Arc<dyn Translator>>(Arc::new(CatalogTranslator::new()));
///
/// assert!(services.get::<Arc<dyn Translator>>().is_some());
/// ```
#[derive(Clone, Default)]
pub struct Services(HashMap<TypeId, Arc<dyn Any + Send + Sync>>);

impl Services {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `value` under its type.
	pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
		self.insert(value);
		self
	}

	/// Registers `value` under its type, replacing any previous one.
	pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
		self.0.insert(TypeId::of::<T>(), Arc::new(value));
	}

	/// Returns a clone of the service of type `T`.
	pub fn get<T: Any + Send + Sync + Clone>(&self) -> Option<T> {
		self.0
			.get(&TypeId::of::<T>())
			.and_then(|value| value.downcast_ref::<T>())
			.cloned()
	}
}

impl fmt::Debug for Services {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Services").field("len", &self.0.len()).finish()
	}
}

/// Resolves constructor dependencies of one renderer.
///
/// Named arguments configured for the renderer take precedence over shared
/// services of the same type.
#[derive(Debug, Clone, Copy)]
pub struct Injector<'a> {
	renderer: &'static str,
	args: &'a RendererArgs,
	services: &'a Services,
}

impl<'a> Injector<'a> {
	/// Creates an injector for the renderer named `renderer`.
	pub fn new(renderer: &'static str, args: &'a RendererArgs, services: &'a Services) -> Self {
		Self {
			renderer,
			args,
			services,
		}
	}

	/// Returns the named argument.
	///
	/// Fails with [`ColumnError::InvalidRendererArgument`] when the argument is
	/// set to a value of another type.
	pub fn arg<T: Any + Send + Sync + Clone>(&self, name: &str) -> Result<Option<T>> {
		let Some(value) = self.args.get(name) else {
			return Ok(None);
		};
		value
			.downcast_ref::<T>()
			.cloned()
			.map(Some)
			.ok_or_else(|| ColumnError::InvalidRendererArgument {
				renderer: self.renderer,
				name: name.to_string(),
				expected: type_name::<T>(),
			})
	}

	/// Returns the shared service of type `T`.
	pub fn service<T: Any + Send + Sync + Clone>(&self) -> Option<T> {
		self.services.get::<T>()
	}

	/// Returns the named argument, or the shared service of the same type.
	pub fn resolve<T: Any + Send + Sync + Clone>(&self, name: &str) -> Result<Option<T>> {
		Ok(self.arg::<T>(name)?.or_else(|| self.service::<T>()))
	}
}
