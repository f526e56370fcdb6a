//! Error types for column rendering

use reinhardt_dataview_core::CoreError;
use thiserror::Error;

use crate::column::ColumnKind;

/// Errors raised while resolving or running column renderers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ColumnError {
	/// A renderer received a column of a kind it does not handle
	#[error("{renderer} expects a {expected} column, got a {actual} column")]
	UnexpectedColumnType {
		/// Short name of the renderer
		renderer: &'static str,
		/// Column kind the renderer handles
		expected: ColumnKind,
		/// Column kind it was given
		actual: ColumnKind,
	},

	/// An action button needs a URL but no URL creator is configured
	#[error("no URL creator configured for action `{action}`")]
	MissingUrlCreator {
		/// Action whose URL was requested
		action: String,
	},

	/// A named renderer argument holds a value of the wrong type
	#[error("argument `{name}` of {renderer} must be a `{expected}`")]
	InvalidRendererArgument {
		/// Short name of the renderer
		renderer: &'static str,
		/// Argument name
		name: String,
		/// Type the renderer expected
		expected: &'static str,
	},

	/// Markup or settings error from the core crate
	#[error(transparent)]
	Core(#[from] CoreError),
}

impl ColumnError {
	/// Builds an [`ColumnError::UnexpectedColumnType`].
	pub fn unexpected_column(
		renderer: &'static str,
		expected: ColumnKind,
		actual: ColumnKind,
	) -> Self {
		Self::UnexpectedColumnType {
			renderer,
			expected,
			actual,
		}
	}
}

/// Result type for column rendering
pub type Result<T> = std::result::Result<T, ColumnError>;
