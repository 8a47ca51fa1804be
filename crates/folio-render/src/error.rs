use thiserror::Error;

/// Errors that can occur while rendering a navigation
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RenderError {
	/// Writing the output failed
	#[error("Format error: {0}")]
	Format(#[from] std::fmt::Error),

	/// JSON serialization failed
	#[cfg(feature = "json")]
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
