//! Recipe filtering
//!
//! Query helpers for the filter UI: dietary restrictions, prep time, and
//! cuisine, individually or AND-ed together. Dietary tags live in a JSON
//! array column and are matched per element via SQLite's `json_each`.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::Recipe;

/// Combined recipe filter; unset fields do not constrain
///
/// With `exclude_tags` unset, a recipe must carry *all* of `dietary_tags`
/// to match; with it set, a recipe matches only when it carries *none*
/// of them.
///
/// # Examples
///
/// ```
/// use tastytruths_db::RecipeFilter;
///
/// let filter = RecipeFilter::default()
///     .tags(["gluten-free", "halal"])
///     .max_prep_time(30);
/// assert_eq!(filter.dietary_tags.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
	pub dietary_tags: Vec<String>,
	pub exclude_tags: bool,
	pub min_prep_time: Option<i64>,
	pub max_prep_time: Option<i64>,
	pub cuisine: Option<String>,
}

impl RecipeFilter {
	pub fn tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.dietary_tags = tags.into_iter().map(Into::into).collect();
		self
	}

	pub fn without_tags<I, S>(self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut filter = self.tags(tags);
		filter.exclude_tags = true;
		filter
	}

	pub fn min_prep_time(mut self, minutes: i64) -> Self {
		self.min_prep_time = Some(minutes);
		self
	}

	pub fn max_prep_time(mut self, minutes: i64) -> Self {
		self.max_prep_time = Some(minutes);
		self
	}

	pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
		self.cuisine = Some(cuisine.into());
		self
	}
}

pub(crate) async fn list_filtered(pool: &SqlitePool, filter: &RecipeFilter) -> Result<Vec<Recipe>> {
	let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM recipes WHERE 1 = 1");

	for tag in &filter.dietary_tags {
		if filter.exclude_tags {
			builder.push(" AND NOT EXISTS (SELECT 1 FROM json_each(recipes.dietary_tags) WHERE json_each.value = ");
		} else {
			builder.push(" AND EXISTS (SELECT 1 FROM json_each(recipes.dietary_tags) WHERE json_each.value = ");
		}
		builder.push_bind(tag);
		builder.push(")");
	}

	if let Some(min) = filter.min_prep_time {
		builder.push(" AND prep_time_minutes >= ");
		builder.push_bind(min);
	}
	if let Some(max) = filter.max_prep_time {
		builder.push(" AND prep_time_minutes <= ");
		builder.push_bind(max);
	}
	if let Some(cuisine) = &filter.cuisine {
		// Case-insensitive substring match, like the search box.
		builder.push(" AND cuisine LIKE '%' || ");
		builder.push_bind(cuisine);
		builder.push(" || '%' COLLATE NOCASE");
	}

	builder.push(" ORDER BY created_at DESC, id DESC");

	let recipes = builder.build_query_as::<Recipe>().fetch_all(pool).await?;
	Ok(recipes)
}

/// Every distinct dietary tag in use, sorted
///
/// Feeds the filter dropdowns.
pub async fn distinct_dietary_tags(pool: &SqlitePool) -> Result<Vec<String>> {
	let tags = sqlx::query_scalar::<_, String>(
		"SELECT DISTINCT json_each.value FROM recipes, json_each(recipes.dietary_tags) \
		 ORDER BY json_each.value",
	)
	.fetch_all(pool)
	.await?;
	Ok(tags)
}

/// Every distinct non-empty cuisine in use, sorted
pub async fn distinct_cuisines(pool: &SqlitePool) -> Result<Vec<String>> {
	let cuisines = sqlx::query_scalar::<_, String>(
		"SELECT DISTINCT cuisine FROM recipes WHERE cuisine <> '' ORDER BY cuisine",
	)
	.fetch_all(pool)
	.await?;
	Ok(cuisines)
}
