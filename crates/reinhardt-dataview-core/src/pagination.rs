//! Page tokens
//!
//! A page token is the opaque position a paginator hands out: a page number
//! for offset pagination or a cursor for keyset pagination, together with the
//! direction the token points to.

use serde::{Deserialize, Serialize};

/// A page position plus the direction it was produced for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageToken {
	/// Page number or cursor value
	pub value: String,
	/// `true` when the token points to the previous page
	pub is_previous: bool,
}

impl PageToken {
	/// Creates a token pointing forward.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_dataview_core::PageToken;
	///
	/// let token = PageToken::next("3");
	/// assert_eq!(token.value, "3");
	/// assert!(!token.is_previous);
	/// ```
	pub fn next(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			is_previous: false,
		}
	}

	/// Creates a token pointing backward.
	pub fn previous(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			is_previous: true,
		}
	}
}
