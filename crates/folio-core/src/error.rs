//! Error types for the page model.

use thiserror::Error;

/// Errors that can occur while configuring a paginator
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PaginationError {
	/// A setter or builder received a value outside its accepted domain
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// Settings file could not be read
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Settings document is not valid TOML or has the wrong shape
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

impl PaginationError {
	/// Returns `true` for the invalid-argument case
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Self::InvalidArgument(_))
	}
}

/// Result type for page model operations
pub type Result<T> = std::result::Result<T, PaginationError>;
