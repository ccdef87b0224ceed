//! Retired slug records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One slug rotation event
///
/// Written exactly once when a recipe's title change retires its slug;
/// never mutated afterwards; deleted only by cascade when the owning
/// recipe is deleted. Stale URLs resolve through `old_slug` to the
/// owning recipe's current canonical token.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RecipeSlugHistory {
	pub id: i64,
	pub recipe_id: i64,
	pub old_slug: String,
	pub changed_at: DateTime<Utc>,
}
