//! Values that are either fixed or computed per row

use std::fmt;
use std::sync::Arc;

use crate::context::DataContext;

/// Closure computing a value from the row being rendered.
pub type ComputeFn<T> = Arc<dyn Fn(&DataContext<'_>) -> T + Send + Sync>;

/// A column setting given either as a literal or as a closure over the row.
///
/// # Examples
///
/// ```
/// use reinhardt_dataview_columns::Resolvable;
///
/// let fixed: Resolvable<bool> = true.into();
/// let computed = Resolvable::computed(|context| context.index % 2 == 0);
///
/// assert!(fixed.is_literal());
/// assert!(!computed.is_literal());
/// ```
#[derive(Clone)]
pub enum Resolvable<T> {
	/// The same value for every row
	Literal(T),
	/// A value computed from each row
	Computed(ComputeFn<T>),
}

impl<T: Clone> Resolvable<T> {
	/// Wraps a closure computed for every row.
	pub fn computed<F>(f: F) -> Self
	where
		F: Fn(&DataContext<'_>) -> T + Send + Sync + 'static,
	{
		Self::Computed(Arc::new(f))
	}

	/// Returns the value for the row in `context`.
	pub fn resolve(&self, context: &DataContext<'_>) -> T {
		match self {
			Self::Literal(value) => value.clone(),
			Self::Computed(f) => f(context),
		}
	}

	/// Returns `true` when the value does not depend on the row.
	pub fn is_literal(&self) -> bool {
		matches!(self, Self::Literal(_))
	}
}

impl<T: Default> Default for Resolvable<T> {
	fn default() -> Self {
		Self::Literal(T::default())
	}
}

impl<T> From<T> for Resolvable<T> {
	fn from(value: T) -> Self {
		Self::Literal(value)
	}
}

impl<T: fmt::Debug> fmt::Debug for Resolvable<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
			Self::Computed(_) => f.write_str("Computed(<closure>)"),
		}
	}
}
