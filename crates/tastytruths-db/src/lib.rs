//! # tastytruths-db
//!
//! SQLite-backed record store for the Tasty Truths recipe application.
//!
//! The store owns three tables — `recipes`, `recipe_slug_history`, and
//! `users` — and wires the slug lifecycle into recipe writes: every create
//! computes a store-wide-unique slug before the insert, and every update
//! whose title differs from the persisted title rotates the slug and
//! records the retired value in the history table, atomically with the
//! record write.
//!
//! Slug assignment is check-then-act; the UNIQUE constraint on
//! `recipes.slug` is the ultimate authority, and a commit-time violation
//! is retried with a fresh uniquification (see [`recipes::MAX_WRITE_RETRIES`]).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tastytruths_db::{Database, DatabaseSettings, NewRecipe};
//!
//! # async fn example() -> Result<(), tastytruths_db::StoreError> {
//! let db = Database::connect(DatabaseSettings::default()).await?;
//! let recipes = db.recipes();
//!
//! let recipe = recipes
//!     .create(NewRecipe::new("Chicken Soup").content("Simmer for an hour."))
//!     .await?;
//! assert_eq!(recipe.slug, "chicken-soup");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod filters;
pub mod models;
pub mod recipes;
pub mod schema;
pub mod users;
pub mod validate;

pub use config::DatabaseSettings;
pub use database::Database;
pub use error::{Result, StoreError};
pub use filters::RecipeFilter;
pub use models::{NewRecipe, NewUser, Recipe, RecipeChanges, RecipeSlugHistory, User};
pub use recipes::{MAX_WRITE_RETRIES, RecipeStore};
pub use users::UserStore;
pub use validate::ValidationError;

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::config::DatabaseSettings;
	pub use crate::database::Database;
	pub use crate::error::{Result, StoreError};
	pub use crate::filters::RecipeFilter;
	pub use crate::models::{NewRecipe, NewUser, Recipe, RecipeChanges, RecipeSlugHistory, User};
	pub use crate::recipes::RecipeStore;
	pub use crate::users::UserStore;
}
