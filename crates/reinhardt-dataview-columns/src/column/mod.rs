//! Column definitions
//!
//! A column is pure configuration: which property it shows, its header and
//! footer text, attributes and the [`RendererId`] of the renderer that turns
//! it into cells. Renderers are looked up in a
//! [`RendererContainer`](crate::RendererContainer).

mod action;
mod checkbox;
mod data;
mod radio;
mod serial;

use std::fmt;

pub use action::{ActionButton, ActionColumn, ActionUrlCreator};
pub use checkbox::{CheckboxColumn, InputContentFn};
pub use data::DataColumn;
pub use radio::RadioColumn;
pub use serial::SerialColumn;

use crate::renderer::RendererId;

/// The kind of a column, used in renderer type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
	/// [`DataColumn`]
	Data,
	/// [`ActionColumn`]
	Action,
	/// [`CheckboxColumn`]
	Checkbox,
	/// [`RadioColumn`]
	Radio,
	/// [`SerialColumn`]
	Serial,
}

impl ColumnKind {
	/// Lower-case name of the kind.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Data => "data",
			Self::Action => "action",
			Self::Checkbox => "checkbox",
			Self::Radio => "radio",
			Self::Serial => "serial",
		}
	}
}

impl fmt::Display for ColumnKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A column of a data view.
#[derive(Debug, Clone)]
pub enum Column {
	/// Displays a property of each row
	Data(DataColumn),
	/// Displays per-row action buttons
	Action(ActionColumn),
	/// Displays a selection checkbox
	Checkbox(CheckboxColumn),
	/// Displays a selection radio button
	Radio(RadioColumn),
	/// Displays the row number
	Serial(SerialColumn),
}

impl Column {
	/// The kind of this column.
	pub fn kind(&self) -> ColumnKind {
		match self {
			Self::Data(_) => ColumnKind::Data,
			Self::Action(_) => ColumnKind::Action,
			Self::Checkbox(_) => ColumnKind::Checkbox,
			Self::Radio(_) => ColumnKind::Radio,
			Self::Serial(_) => ColumnKind::Serial,
		}
	}

	/// The renderer this column is rendered by.
	pub fn renderer(&self) -> RendererId {
		match self {
			Self::Data(column) => column.renderer,
			Self::Action(column) => column.renderer,
			Self::Checkbox(column) => column.renderer,
			Self::Radio(column) => column.renderer,
			Self::Serial(column) => column.renderer,
		}
	}

	/// Whether the column is rendered at all.
	pub fn is_visible(&self) -> bool {
		match self {
			Self::Data(column) => column.visible,
			Self::Action(column) => column.visible,
			Self::Checkbox(column) => column.visible,
			Self::Radio(column) => column.visible,
			Self::Serial(column) => column.visible,
		}
	}

	/// Returns the data column, if this is one.
	pub fn as_data(&self) -> Option<&DataColumn> {
		match self {
			Self::Data(column) => Some(column),
			_ => None,
		}
	}

	/// Returns the action column, if this is one.
	pub fn as_action(&self) -> Option<&ActionColumn> {
		match self {
			Self::Action(column) => Some(column),
			_ => None,
		}
	}

	/// Returns the checkbox column, if this is one.
	pub fn as_checkbox(&self) -> Option<&CheckboxColumn> {
		match self {
			Self::Checkbox(column) => Some(column),
			_ => None,
		}
	}

	/// Returns the radio column, if this is one.
	pub fn as_radio(&self) -> Option<&RadioColumn> {
		match self {
			Self::Radio(column) => Some(column),
			_ => None,
		}
	}

	/// Returns the serial column, if this is one.
	pub fn as_serial(&self) -> Option<&SerialColumn> {
		match self {
			Self::Serial(column) => Some(column),
			_ => None,
		}
	}
}

impl From<DataColumn> for Column {
	fn from(column: DataColumn) -> Self {
		Self::Data(column)
	}
}

impl From<ActionColumn> for Column {
	fn from(column: ActionColumn) -> Self {
		Self::Action(column)
	}
}

impl From<CheckboxColumn> for Column {
	fn from(column: CheckboxColumn) -> Self {
		Self::Checkbox(column)
	}
}

impl From<RadioColumn> for Column {
	fn from(column: RadioColumn) -> Self {
		Self::Radio(column)
	}
}

impl From<SerialColumn> for Column {
	fn from(column: SerialColumn) -> Self {
		Self::Serial(column)
	}
}
