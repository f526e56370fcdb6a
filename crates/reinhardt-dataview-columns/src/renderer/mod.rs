//! Column renderers
//!
//! A [`ColumnRenderer`] turns a column and a context into cells for the four
//! render phases. Renderers are stateless apart from their configuration and
//! are shared between columns through a
//! [`RendererContainer`](crate::RendererContainer), which builds them on first
//! use via [`ConstructRenderer`].

mod action;
mod checkbox;
mod data;
mod injector;
mod radio;
mod serial;

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use reinhardt_dataview_core::{Attributes, Cell, Content};

pub use action::ActionColumnRenderer;
pub use checkbox::CheckboxColumnRenderer;
pub use data::DataColumnRenderer;
pub use injector::{Injector, RendererArgs, Services};
pub use radio::RadioColumnRenderer;
pub use serial::SerialColumnRenderer;

use crate::column::Column;
use crate::context::{DataContext, GlobalContext, HeaderContext};
use crate::error::Result;

/// Renders the cells of one kind of column.
///
/// Every method receives a fresh [`Cell`] and returns it configured. Passing
/// a column of another kind fails with
/// [`ColumnError::UnexpectedColumnType`](crate::ColumnError::UnexpectedColumnType).
pub trait ColumnRenderer: Send + Sync + 'static {
	/// Configures the `<col>` element of the column.
	fn render_column(&self, column: &Column, cell: Cell, context: &GlobalContext) -> Result<Cell>;

	/// Configures the header cell; `None` suppresses it.
	fn render_header(
		&self,
		column: &Column,
		cell: Cell,
		context: &HeaderContext<'_>,
	) -> Result<Option<Cell>>;

	/// Configures the body cell of one row.
	fn render_body(&self, column: &Column, cell: Cell, context: &DataContext<'_>) -> Result<Cell>;

	/// Configures the footer cell.
	fn render_footer(&self, column: &Column, cell: Cell, context: &GlobalContext) -> Result<Cell>;
}

/// Builds a renderer from its arguments and the shared services.
pub trait ConstructRenderer: ColumnRenderer + Sized {
	/// Creates the renderer.
	fn construct(injector: &Injector<'_>) -> Result<Self>;
}

type ConstructFn = fn(&Injector<'_>) -> Result<Arc<dyn ColumnRenderer>>;

fn construct_shared<R: ConstructRenderer>(injector: &Injector<'_>) -> Result<Arc<dyn ColumnRenderer>> {
	Ok(Arc::new(R::construct(injector)?))
}

/// Identifies a renderer type.
///
/// Columns name their renderer with an id and the container creates and
/// caches one instance per id. Two ids are equal when they name the same type.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_columns::{DataColumnRenderer, RendererId, SerialColumnRenderer};
///
/// let data = RendererId::of::<DataColumnRenderer>();
///
/// assert_eq!(data, RendererId::of::<DataColumnRenderer>());
/// assert_ne!(data, RendererId::of::<SerialColumnRenderer>());
/// assert_eq!(data.name(), "DataColumnRenderer");
/// ```
#[derive(Clone, Copy)]
pub struct RendererId {
	type_id: TypeId,
	type_name: &'static str,
	construct: ConstructFn,
}

impl RendererId {
	/// The id of renderer type `R`.
	pub fn of<R: ConstructRenderer>() -> Self {
		Self {
			type_id: TypeId::of::<R>(),
			type_name: type_name::<R>(),
			construct: construct_shared::<R>,
		}
	}

	/// Short type name of the renderer.
	pub fn name(&self) -> &'static str {
		short_name(self.type_name)
	}

	/// Fully qualified type name of the renderer.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	pub(crate) fn construct(&self, injector: &Injector<'_>) -> Result<Arc<dyn ColumnRenderer>> {
		(self.construct)(injector)
	}
}

impl PartialEq for RendererId {
	fn eq(&self, other: &Self) -> bool {
		self.type_id == other.type_id
	}
}

impl Eq for RendererId {}

impl Hash for RendererId {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.type_id.hash(state);
	}
}

impl fmt::Debug for RendererId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("RendererId").field(&self.name()).finish()
	}
}

pub(crate) fn short_name(type_name: &'static str) -> &'static str {
	type_name.rsplit("::").next().unwrap_or(type_name)
}

/// Column attributes shared by all stock renderers.
pub(crate) fn column_cell(cell: Cell, attributes: &Attributes) -> Cell {
	cell.add_attributes(attributes)
}

/// Footer cell shared by all stock renderers: the footer text or nothing.
pub(crate) fn footer_cell(cell: Cell, attributes: &Attributes, footer: Option<&str>) -> Cell {
	cell.add_attributes(attributes)
		.content(Content::text(footer.unwrap_or_default()))
}
