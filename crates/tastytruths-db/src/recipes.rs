//! Recipe store and slug lifecycle
//!
//! Slug assignment is wired directly into [`RecipeStore::create`] and
//! [`RecipeStore::update`] as explicit calls, not hidden event listeners:
//! the hook runs synchronously before the write, and the write plus any
//! history insert commit together.
//!
//! ## Concurrency
//!
//! Uniquification is check-then-act, so two concurrent writers can pick
//! the same candidate. The UNIQUE constraint on `recipes.slug` catches
//! that at commit time, and the whole operation is re-run with a fresh
//! uniquification, up to [`MAX_WRITE_RETRIES`] attempts.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::types::Json;
use tastytruths_slugs::{DEFAULT_MAX_SLUG_LEN, SlugError, SlugStore, base_slug, uniquify_slug};

use crate::error::{Result, StoreError};
use crate::filters::RecipeFilter;
use crate::models::{NewRecipe, Recipe, RecipeChanges, RecipeSlugHistory};
use crate::validate;

/// Attempts per create/update before a slug conflict is surfaced
pub const MAX_WRITE_RETRIES: usize = 3;

/// Store for recipes and their slug history
#[derive(Clone)]
pub struct RecipeStore {
	pool: SqlitePool,
}

impl RecipeStore {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Create a recipe, assigning a store-wide-unique slug
	///
	/// No history row is written: a new record has no prior slug.
	pub async fn create(&self, new: NewRecipe) -> Result<Recipe> {
		validate::validate_new_recipe(&new)?;

		let base = base_slug(&new.title, DEFAULT_MAX_SLUG_LEN);
		for _ in 0..MAX_WRITE_RETRIES {
			let slug = uniquify_slug(self, &base, None).await?;
			match self.insert_row(&new, &slug).await {
				Ok(id) => {
					tracing::debug!(id, slug = %slug, "recipe created");
					return self.get(id).await?.ok_or(StoreError::RecipeNotFound(id));
				}
				Err(e) if is_unique_violation(&e) => {
					tracing::warn!(slug = %slug, "slug claimed concurrently, retrying create");
				}
				Err(e) => return Err(e.into()),
			}
		}
		Err(StoreError::SlugConflict {
			attempts: MAX_WRITE_RETRIES,
		})
	}

	/// Update a recipe, rotating its slug when the title changed
	///
	/// The diff runs against the *persisted* title, so re-submitting the
	/// current title never rotates. When rotation happens, the retired
	/// slug is recorded in `recipe_slug_history` in the same transaction
	/// as the record write.
	pub async fn update(&self, id: i64, changes: RecipeChanges) -> Result<Recipe> {
		validate::validate_changes(&changes)?;

		for _ in 0..MAX_WRITE_RETRIES {
			let persisted = self.get(id).await?.ok_or(StoreError::RecipeNotFound(id))?;

			// Rotation decision, against stored state.
			let (slug, retired) = match &changes.title {
				Some(title) if *title != persisted.title => {
					let new_base = base_slug(title, DEFAULT_MAX_SLUG_LEN);
					let new_slug = uniquify_slug(self, &new_base, Some(id)).await?;
					if new_slug != persisted.slug {
						(new_slug, Some(persisted.slug.clone()))
					} else {
						// New title normalizes to the old slug; no rotation.
						(new_slug, None)
					}
				}
				_ => (persisted.slug.clone(), None),
			};

			match self.apply_update(&persisted, &changes, &slug, retired.as_deref()).await {
				Ok(()) => {
					if let Some(old) = &retired {
						tracing::info!(id, old_slug = %old, new_slug = %slug, "slug rotated");
					}
					return self.get(id).await?.ok_or(StoreError::RecipeNotFound(id));
				}
				Err(e) if is_unique_violation(&e) => {
					tracing::warn!(slug = %slug, "slug claimed concurrently, retrying update");
				}
				Err(e) => return Err(e.into()),
			}
		}
		Err(StoreError::SlugConflict {
			attempts: MAX_WRITE_RETRIES,
		})
	}

	/// Fetch a recipe by id
	pub async fn get(&self, id: i64) -> Result<Option<Recipe>> {
		let recipe = sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE id = ?")
			.bind(id)
			.fetch_optional(&self.pool)
			.await?;
		Ok(recipe)
	}

	/// Fetch a recipe by its current slug
	pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Recipe>> {
		let recipe = sqlx::query_as::<_, Recipe>("SELECT * FROM recipes WHERE slug = ?")
			.bind(slug)
			.fetch_optional(&self.pool)
			.await?;
		Ok(recipe)
	}

	/// All recipes, newest first
	pub async fn list(&self) -> Result<Vec<Recipe>> {
		let recipes =
			sqlx::query_as::<_, Recipe>("SELECT * FROM recipes ORDER BY created_at DESC, id DESC")
				.fetch_all(&self.pool)
				.await?;
		Ok(recipes)
	}

	/// Recipes matching a [`RecipeFilter`], newest first
	pub async fn list_filtered(&self, filter: &RecipeFilter) -> Result<Vec<Recipe>> {
		crate::filters::list_filtered(&self.pool, filter).await
	}

	/// Delete a recipe; its history rows go with it (cascade)
	pub async fn delete(&self, id: i64) -> Result<()> {
		let result = sqlx::query("DELETE FROM recipes WHERE id = ?")
			.bind(id)
			.execute(&self.pool)
			.await?;
		if result.rows_affected() == 0 {
			return Err(StoreError::RecipeNotFound(id));
		}
		tracing::debug!(id, "recipe deleted");
		Ok(())
	}

	/// Look up a retired slug
	///
	/// Used by canonical URL resolution to redirect stale URLs to the
	/// owning recipe's current token.
	pub async fn find_history_by_old_slug(&self, slug: &str) -> Result<Option<RecipeSlugHistory>> {
		let entry = sqlx::query_as::<_, RecipeSlugHistory>(
			"SELECT * FROM recipe_slug_history WHERE old_slug = ? ORDER BY changed_at DESC, id DESC LIMIT 1",
		)
		.bind(slug)
		.fetch_optional(&self.pool)
		.await?;
		Ok(entry)
	}

	/// All rotation events for one recipe, newest first
	pub async fn history_for(&self, recipe_id: i64) -> Result<Vec<RecipeSlugHistory>> {
		let entries = sqlx::query_as::<_, RecipeSlugHistory>(
			"SELECT * FROM recipe_slug_history WHERE recipe_id = ? ORDER BY changed_at DESC, id DESC",
		)
		.bind(recipe_id)
		.fetch_all(&self.pool)
		.await?;
		Ok(entries)
	}

	async fn insert_row(&self, new: &NewRecipe, slug: &str) -> sqlx::Result<i64> {
		let now = Utc::now();
		let result = sqlx::query(
			"INSERT INTO recipes (title, slug, description, content, cuisine, \
			 prep_time_minutes, cook_time_minutes, total_time_minutes, dietary_tags, \
			 image_filename, author_id, created_at, updated_at) \
			 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
		)
		.bind(&new.title)
		.bind(slug)
		.bind(&new.description)
		.bind(&new.content)
		.bind(&new.cuisine)
		.bind(new.prep_time_minutes)
		.bind(new.cook_time_minutes)
		.bind(new.total_time_minutes)
		.bind(Json(&new.dietary_tags))
		.bind(&new.image_filename)
		.bind(new.author_id)
		.bind(now)
		.bind(now)
		.execute(&self.pool)
		.await?;
		Ok(result.last_insert_rowid())
	}

	/// Record write and history insert, one transaction
	async fn apply_update(
		&self,
		persisted: &Recipe,
		changes: &RecipeChanges,
		slug: &str,
		retired: Option<&str>,
	) -> sqlx::Result<()> {
		let now = Utc::now();
		let title = changes.title.as_deref().unwrap_or(&persisted.title);
		let description = changes.description.as_deref().unwrap_or(&persisted.description);
		let content = changes.content.as_deref().unwrap_or(&persisted.content);
		let cuisine = changes.cuisine.as_deref().unwrap_or(&persisted.cuisine);
		let prep = changes.prep_time_minutes.or(persisted.prep_time_minutes);
		let cook = changes.cook_time_minutes.or(persisted.cook_time_minutes);
		let total = changes.total_time_minutes.or(persisted.total_time_minutes);
		let tags = changes.dietary_tags.as_ref().unwrap_or(&persisted.dietary_tags);
		let image = changes
			.image_filename
			.as_deref()
			.or(persisted.image_filename.as_deref());

		let mut tx = self.pool.begin().await?;

		sqlx::query(
			"UPDATE recipes SET title = ?, slug = ?, description = ?, content = ?, \
			 cuisine = ?, prep_time_minutes = ?, cook_time_minutes = ?, \
			 total_time_minutes = ?, dietary_tags = ?, image_filename = ?, updated_at = ? \
			 WHERE id = ?",
		)
		.bind(title)
		.bind(slug)
		.bind(description)
		.bind(content)
		.bind(cuisine)
		.bind(prep)
		.bind(cook)
		.bind(total)
		.bind(Json(tags))
		.bind(image)
		.bind(now)
		.bind(persisted.id)
		.execute(&mut *tx)
		.await?;

		if let Some(old_slug) = retired {
			sqlx::query(
				"INSERT INTO recipe_slug_history (recipe_id, old_slug, changed_at) \
				 VALUES (?, ?, ?)",
			)
			.bind(persisted.id)
			.bind(old_slug)
			.bind(now)
			.execute(&mut *tx)
			.await?;
		}

		tx.commit().await
	}
}

/// Live-slug existence check, scoped to the recipes table
#[async_trait]
impl SlugStore for RecipeStore {
	async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> std::result::Result<bool, SlugError> {
		let query = match exclude_id {
			Some(id) => {
				sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM recipes WHERE slug = ? AND id <> ?)")
					.bind(slug.to_string())
					.bind(id)
			}
			None => sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM recipes WHERE slug = ?)")
				.bind(slug.to_string()),
		};
		let exists: bool = query
			.fetch_one(&self.pool)
			.await
			.map_err(|e| SlugError::Store(e.to_string()))?;
		Ok(exists)
	}
}

/// True for commit-time UNIQUE constraint violations
///
/// SQLite reports these as "UNIQUE constraint failed: recipes.slug";
/// the message check covers driver versions that do not classify the
/// error kind.
fn is_unique_violation(err: &sqlx::Error) -> bool {
	match err {
		sqlx::Error::Database(db_err) => {
			db_err.is_unique_violation() || db_err.message().contains("UNIQUE constraint")
		}
		_ => false,
	}
}
