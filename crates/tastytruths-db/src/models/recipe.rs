//! Recipe entity and write payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted recipe
///
/// `slug` is derived from `title` and unique across all recipes. It is
/// assigned by the store on create and rotated on title changes; callers
/// never set it directly.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Recipe {
	pub id: i64,
	pub title: String,
	pub slug: String,
	pub description: String,
	pub content: String,
	pub cuisine: String,
	pub prep_time_minutes: Option<i64>,
	pub cook_time_minutes: Option<i64>,
	pub total_time_minutes: Option<i64>,
	#[sqlx(json)]
	pub dietary_tags: Vec<String>,
	pub image_filename: Option<String>,
	pub author_id: Option<i64>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// Payload for creating a recipe
///
/// # Examples
///
/// ```
/// use tastytruths_db::NewRecipe;
///
/// let new = NewRecipe::new("Quinoa Stuffed Peppers")
///     .cuisine("Latin American")
///     .dietary_tags(["gluten-free", "vegetarian"])
///     .prep_time_minutes(20);
/// assert_eq!(new.title, "Quinoa Stuffed Peppers");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewRecipe {
	pub title: String,
	pub description: String,
	pub content: String,
	pub cuisine: String,
	pub prep_time_minutes: Option<i64>,
	pub cook_time_minutes: Option<i64>,
	pub total_time_minutes: Option<i64>,
	pub dietary_tags: Vec<String>,
	pub image_filename: Option<String>,
	pub author_id: Option<i64>,
}

impl NewRecipe {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			..Self::default()
		}
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn content(mut self, content: impl Into<String>) -> Self {
		self.content = content.into();
		self
	}

	pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
		self.cuisine = cuisine.into();
		self
	}

	pub fn prep_time_minutes(mut self, minutes: i64) -> Self {
		self.prep_time_minutes = Some(minutes);
		self
	}

	pub fn cook_time_minutes(mut self, minutes: i64) -> Self {
		self.cook_time_minutes = Some(minutes);
		self
	}

	pub fn total_time_minutes(mut self, minutes: i64) -> Self {
		self.total_time_minutes = Some(minutes);
		self
	}

	pub fn dietary_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.dietary_tags = tags.into_iter().map(Into::into).collect();
		self
	}

	pub fn image_filename(mut self, filename: impl Into<String>) -> Self {
		self.image_filename = Some(filename.into());
		self
	}

	pub fn author_id(mut self, id: i64) -> Self {
		self.author_id = Some(id);
		self
	}
}

/// Partial update for a recipe; `None` fields are left untouched
///
/// A `title` equal to the persisted title is a no-op for the slug; a
/// different title triggers slug rotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeChanges {
	pub title: Option<String>,
	pub description: Option<String>,
	pub content: Option<String>,
	pub cuisine: Option<String>,
	pub prep_time_minutes: Option<i64>,
	pub cook_time_minutes: Option<i64>,
	pub total_time_minutes: Option<i64>,
	pub dietary_tags: Option<Vec<String>>,
	pub image_filename: Option<String>,
}

impl RecipeChanges {
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn content(mut self, content: impl Into<String>) -> Self {
		self.content = Some(content.into());
		self
	}

	pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
		self.cuisine = Some(cuisine.into());
		self
	}

	pub fn dietary_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.dietary_tags = Some(tags.into_iter().map(Into::into).collect());
		self
	}
}
