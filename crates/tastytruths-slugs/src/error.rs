use thiserror::Error;

/// Errors that can occur while assigning slugs
#[derive(Debug, Error)]
pub enum SlugError {
	/// Every probed candidate was already taken
	#[error("no free slug for base '{base}' within {attempts} probes")]
	ProbesExhausted { base: String, attempts: usize },

	/// The backing record store failed during an existence check
	#[error("slug store error: {0}")]
	Store(String),
}

/// Result type for slug operations
pub type Result<T> = std::result::Result<T, SlugError>;
