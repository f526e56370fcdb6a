//! # Reinhardt Data View Columns
//!
//! Column definitions, renderers and the table renderer of Reinhardt data
//! views.
//!
//! ## Overview
//!
//! A data view is a list of [`Column`]s. Each column names a renderer by
//! [`RendererId`]; a [`RendererContainer`] creates and caches the renderers.
//! For every column the [`GridRenderer`] asks its renderer for four kinds of
//! cells:
//!
//! - the `<col>` cell, from the [`GlobalContext`]
//! - the header cell, from a [`HeaderContext`], which also negotiates sort links
//! - one body cell per row, from a [`DataContext`]
//! - the footer cell, from the [`GlobalContext`]
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use reinhardt_dataview_columns::{
//!     ActionColumn, DataColumn, DataContext, GlobalContext, GridRenderer, InMemoryDataReader,
//! };
//! use reinhardt_dataview_core::{RouteUrlCreator, Sort};
//! use serde_json::json;
//!
//! let reader = InMemoryDataReader::keyed_by(vec![json!({"id": 7, "name": "Alice"})], "id")
//!     .with_sort(Sort::only(["name"]));
//! let context = GlobalContext::builder(Arc::new(reader))
//!     .url_creator(RouteUrlCreator::new("/users"))
//!     .build();
//!
//! let grid = GridRenderer::new(vec![
//!     DataColumn::new("name").into(),
//!     ActionColumn::new()
//!         .with_template("{update}")
//!         .with_url_creator(|action: &str, row: &DataContext<'_>| {
//!             format!("/users/{}/{action}", row.key_string())
//!         })
//!         .into(),
//! ]);
//!
//! let html = grid.render(&context).unwrap();
//! assert!(html.contains(r#"<a href="/users?sort=name">Name</a>"#));
//! assert!(html.contains(r#"<a href="/users/7/update" title="Update">✎</a>"#));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod container;
pub mod context;
pub mod error;
pub mod grid;
pub mod reader;
pub mod renderer;
pub mod resolvable;

pub use column::{
	ActionButton, ActionColumn, ActionUrlCreator, CheckboxColumn, Column, ColumnKind, DataColumn,
	InputContentFn, RadioColumn, SerialColumn,
};
pub use container::RendererContainer;
pub use context::{
	DataContext, GlobalContext, GlobalContextBuilder, HeaderContext, SortLink, SortableHeader,
};
pub use error::{ColumnError, Result};
pub use grid::GridRenderer;
pub use reader::{DataReader, InMemoryDataReader};
pub use renderer::{
	ActionColumnRenderer, CheckboxColumnRenderer, ColumnRenderer, ConstructRenderer,
	DataColumnRenderer, Injector, RadioColumnRenderer, RendererArgs, RendererId,
	SerialColumnRenderer, Services,
};
pub use resolvable::Resolvable;
