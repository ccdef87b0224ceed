use tastytruths_slugs::SlugError;
use thiserror::Error;

use crate::validate::ValidationError;

/// Errors that can occur in the record store
#[derive(Debug, Error)]
pub enum StoreError {
	/// No recipe with the given id
	#[error("recipe not found: #{0}")]
	RecipeNotFound(i64),

	/// No user with the given id
	#[error("user not found: #{0}")]
	UserNotFound(i64),

	/// A unique field (username, email) is already taken
	#[error("{field} already taken")]
	AlreadyExists { field: &'static str },

	/// Input failed data-level validation
	#[error("validation failed: {0}")]
	Validation(#[from] ValidationError),

	/// Slug assignment kept colliding even after retries
	///
	/// Each attempt re-runs uniquification against the live slug space, so
	/// reaching this means concurrent writers claimed every candidate
	/// between our check and our commit, [`crate::recipes::MAX_WRITE_RETRIES`]
	/// times in a row.
	#[error("could not assign a unique slug after {attempts} attempts")]
	SlugConflict { attempts: usize },

	/// Slug generation or uniquification failed
	#[error(transparent)]
	Slug(#[from] SlugError),

	/// Password hashing failed
	#[error("password hashing failed: {0}")]
	PasswordHash(String),

	/// Underlying database error
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
