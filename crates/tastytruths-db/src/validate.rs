//! Data-level input validation
//!
//! The checks the recipe form enforces, minus anything presentational:
//! title length, minimum content length, non-negative durations.

use thiserror::Error;

use crate::models::{NewRecipe, RecipeChanges};

/// Title bounds, in characters after trimming
pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 150;

/// Minimum content length when content is provided at all
pub const CONTENT_MIN_LEN: usize = 10;

/// Validation failures for recipe payloads
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
	#[error("title must be between {TITLE_MIN_LEN} and {TITLE_MAX_LEN} characters")]
	TitleLength,

	#[error("content must be at least {CONTENT_MIN_LEN} characters")]
	ContentTooShort,

	#[error("{field} cannot be negative")]
	NegativeDuration { field: &'static str },
}

pub(crate) fn validate_new_recipe(new: &NewRecipe) -> Result<(), ValidationError> {
	validate_title(&new.title)?;
	validate_content(&new.content)?;
	validate_duration("prep_time_minutes", new.prep_time_minutes)?;
	validate_duration("cook_time_minutes", new.cook_time_minutes)?;
	validate_duration("total_time_minutes", new.total_time_minutes)?;
	Ok(())
}

pub(crate) fn validate_changes(changes: &RecipeChanges) -> Result<(), ValidationError> {
	if let Some(title) = &changes.title {
		validate_title(title)?;
	}
	if let Some(content) = &changes.content {
		validate_content(content)?;
	}
	validate_duration("prep_time_minutes", changes.prep_time_minutes)?;
	validate_duration("cook_time_minutes", changes.cook_time_minutes)?;
	validate_duration("total_time_minutes", changes.total_time_minutes)?;
	Ok(())
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
	let len = title.trim().chars().count();
	if !(TITLE_MIN_LEN..=TITLE_MAX_LEN).contains(&len) {
		return Err(ValidationError::TitleLength);
	}
	Ok(())
}

/// Empty content is allowed (API-created drafts); non-empty content must
/// carry at least a sentence
fn validate_content(content: &str) -> Result<(), ValidationError> {
	let trimmed = content.trim();
	if !trimmed.is_empty() && trimmed.chars().count() < CONTENT_MIN_LEN {
		return Err(ValidationError::ContentTooShort);
	}
	Ok(())
}

fn validate_duration(field: &'static str, minutes: Option<i64>) -> Result<(), ValidationError> {
	match minutes {
		Some(m) if m < 0 => Err(ValidationError::NegativeDuration { field }),
		_ => Ok(()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::NewRecipe;

	#[test]
	fn test_title_bounds() {
		assert_eq!(
			validate_new_recipe(&NewRecipe::new("ab")),
			Err(ValidationError::TitleLength)
		);
		assert_eq!(
			validate_new_recipe(&NewRecipe::new("a".repeat(151))),
			Err(ValidationError::TitleLength)
		);
		assert!(validate_new_recipe(&NewRecipe::new("Beef Stew")).is_ok());
	}

	#[test]
	fn test_whitespace_only_title_rejected() {
		assert_eq!(
			validate_new_recipe(&NewRecipe::new("      ")),
			Err(ValidationError::TitleLength)
		);
	}

	#[test]
	fn test_content_minimum_when_present() {
		let short = NewRecipe::new("Beef Stew").content("stir");
		assert_eq!(validate_new_recipe(&short), Err(ValidationError::ContentTooShort));

		let empty = NewRecipe::new("Beef Stew");
		assert!(validate_new_recipe(&empty).is_ok());

		let fine = NewRecipe::new("Beef Stew").content("Simmer for an hour.");
		assert!(validate_new_recipe(&fine).is_ok());
	}

	#[test]
	fn test_negative_durations_rejected() {
		let bad = NewRecipe::new("Beef Stew").prep_time_minutes(-5);
		assert_eq!(
			validate_new_recipe(&bad),
			Err(ValidationError::NegativeDuration {
				field: "prep_time_minutes"
			})
		);
	}
}
