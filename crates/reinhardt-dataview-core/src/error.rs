//! Error types for reinhardt-dataview-core

use thiserror::Error;

/// Errors raised by the core building blocks.
///
/// Every variant is a configuration error: it points at a programmer mistake
/// and is meant to surface during development rather than be recovered from.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CoreError {
	/// A tag was requested without a tag name.
	#[error("Tag name cannot be empty")]
	EmptyTagName,

	/// Settings could not be parsed from TOML.
	#[error("Invalid data view settings: {0}")]
	Settings(#[from] toml::de::Error),

	/// Settings could not be decoded from a JSON value.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
