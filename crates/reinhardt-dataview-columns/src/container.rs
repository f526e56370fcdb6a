//! Shared renderer instances
//!
//! [`RendererContainer`] creates each renderer once, on first use, from the
//! arguments configured for it and the shared [`Services`]. Adding
//! configuration yields a new container that keeps every cached instance
//! whose arguments did not change.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::Result;
use crate::renderer::{ColumnRenderer, Injector, RendererArgs, RendererId, Services};

/// Creates, configures and caches column renderers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use reinhardt_dataview_columns::{
///     DataColumnRenderer, RendererArgs, RendererContainer, RendererId,
/// };
///
/// let container = RendererContainer::new();
/// let id = RendererId::of::<DataColumnRenderer>();
///
/// let first = container.get(id).unwrap();
/// assert!(Arc::ptr_eq(&first, &container.get(id).unwrap()));
///
/// let configured = container.add_configs([(
///     id,
///     RendererArgs::new().with("null_display", "-".to_string()),
/// )]);
/// assert!(!Arc::ptr_eq(&first, &configured.get(id).unwrap()));
/// ```
pub struct RendererContainer {
	services: Arc<Services>,
	configs: HashMap<RendererId, RendererArgs>,
	cache: RwLock<HashMap<RendererId, Arc<dyn ColumnRenderer>>>,
}

impl RendererContainer {
	/// Creates a container without services or configuration.
	pub fn new() -> Self {
		Self::with_services(Services::new())
	}

	/// Creates a container resolving renderer dependencies from `services`.
	pub fn with_services(services: Services) -> Self {
		Self {
			services: Arc::new(services),
			configs: HashMap::new(),
			cache: RwLock::new(HashMap::new()),
		}
	}

	/// Returns the shared instance of renderer `id`, creating it on first use.
	pub fn get(&self, id: RendererId) -> Result<Arc<dyn ColumnRenderer>> {
		{
			let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
			if let Some(renderer) = cache.get(&id) {
				return Ok(Arc::clone(renderer));
			}
		}

		let empty = RendererArgs::new();
		let args = self.configs.get(&id).unwrap_or(&empty);
		let renderer = id.construct(&Injector::new(id.name(), args, &self.services))?;
		tracing::debug!(renderer = id.name(), args = args.len(), "Created column renderer");

		let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
		Ok(Arc::clone(cache.entry(id).or_insert(renderer)))
	}

	/// Returns a container with `configs` merged into the current arguments.
	///
	/// New arguments win over existing ones of the same name. Cached instances
	/// of renderers not named in `configs` are carried over; the others are
	/// created again on next use.
	pub fn add_configs<I>(&self, configs: I) -> Self
	where
		I: IntoIterator<Item = (RendererId, RendererArgs)>,
	{
		let mut merged = self.configs.clone();
		let mut cache = self
			.cache
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone();

		for (id, args) in configs {
			let combined = match merged.get(&id) {
				Some(existing) => existing.merge(&args),
				None => args,
			};
			merged.insert(id, combined);
			if cache.remove(&id).is_some() {
				tracing::debug!(renderer = id.name(), "Evicted reconfigured column renderer");
			}
		}

		Self {
			services: Arc::clone(&self.services),
			configs: merged,
			cache: RwLock::new(cache),
		}
	}

	/// Returns the arguments configured for renderer `id`.
	pub fn config(&self, id: RendererId) -> Option<&RendererArgs> {
		self.configs.get(&id)
	}

	/// Returns `true` when an instance of renderer `id` is cached.
	pub fn is_cached(&self, id: RendererId) -> bool {
		self.cache
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.contains_key(&id)
	}
}

impl Default for RendererContainer {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for RendererContainer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let cached = self
			.cache
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.keys()
			.map(RendererId::name)
			.collect::<Vec<_>>();
		f.debug_struct("RendererContainer")
			.field("configs", &self.configs)
			.field("cached", &cached)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ColumnError;
	use crate::renderer::{ActionColumnRenderer, DataColumnRenderer};

	#[test]
	fn test_invalid_argument_surfaces_on_get() {
		let id = RendererId::of::<DataColumnRenderer>();
		let container =
			RendererContainer::new().add_configs([(id, RendererArgs::new().with("null_display", 0_u8))]);

		assert!(matches!(
			container.get(id),
			Err(ColumnError::InvalidRendererArgument { .. })
		));
		assert!(!container.is_cached(id));
	}

	#[test]
	fn test_configs_merge_with_new_keys_winning() {
		let id = RendererId::of::<ActionColumnRenderer>();
		let container = RendererContainer::new()
			.add_configs([(
				id,
				RendererArgs::new()
					.with("template", "{view}".to_string())
					.with("translation_category", "app".to_string()),
			)])
			.add_configs([(id, RendererArgs::new().with("template", "{delete}".to_string()))]);

		let args = container.config(id).unwrap();
		assert_eq!(args.len(), 2);
		assert!(args.contains("translation_category"));
	}
}
