//! # Reinhardt Data View
//!
//! Server-side data views for Reinhardt: HTML tables built from column
//! definitions, with sortable headers, selection columns, per-row actions and
//! pluggable column renderers.
//!
//! ## Crates
//!
//! - [`core`]: cells, tags, sorting, pagination tokens, URL parameters,
//!   translation and settings
//! - [`columns`]: columns, renderers, the renderer container and the grid
//!
//! ## Quick Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use reinhardt_dataview::prelude::*;
//! use serde_json::json;
//!
//! let reader = InMemoryDataReader::keyed_by(
//!     vec![json!({"id": 1, "name": "Bob"}), json!({"id": 2, "name": "Alice"})],
//!     "id",
//! )
//! .with_sort(Sort::only(["name"]).with_order_string("name"));
//!
//! let context = GlobalContext::builder(Arc::new(reader))
//!     .url_creator(RouteUrlCreator::new("/users"))
//!     .build();
//!
//! let grid = GridRenderer::new(vec![
//!     CheckboxColumn::new().into(),
//!     DataColumn::new("name").into(),
//! ]);
//!
//! let html = grid.render(&context).unwrap();
//! assert!(html.contains(r#"<a href="/users?sort=-name" class="asc">Name</a>"#));
//! assert!(html.find("Alice") < html.find("Bob"));
//! ```

#![warn(missing_docs)]

/// Leaf primitives: cells, tags, sorting, URL parameters, translation and settings.
pub mod core {
	pub use reinhardt_dataview_core::*;
}

/// Columns, renderers, the renderer container and the grid.
pub mod columns {
	pub use reinhardt_dataview_columns::*;
}

/// Commonly used types.
pub mod prelude {
	pub use reinhardt_dataview_columns::{
		ActionButton, ActionColumn, CheckboxColumn, Column, ColumnError, ColumnRenderer,
		ConstructRenderer, DataColumn, DataContext, DataReader, GlobalContext, GridRenderer,
		HeaderContext, InMemoryDataReader, RadioColumn, RendererArgs, RendererContainer,
		RendererId, Resolvable, SerialColumn, Services,
	};
	pub use reinhardt_dataview_core::{
		Attributes, Cell, Content, DataViewSettings, Encode, PageToken, RouteUrlCreator, Sort,
		SortDirection, SortOrder, SortableHeaderTheme, Translator, UrlConfig, UrlCreator,
	};
}
