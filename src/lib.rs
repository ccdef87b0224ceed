//! # Tasty Truths
//!
//! The data-model core of the Tasty Truths recipe-sharing application:
//! slug generation and history, the SQLite record store, and canonical
//! URL resolution. HTTP routing, sessions, templating, and file uploads
//! live in the web layer on top of this crate.
//!
//! - [`slugs`] — pure slug algorithms: [`slugs::base_slug`] and the
//!   store-backed [`slugs::uniquify_slug`]
//! - [`db`] — recipes, slug history, and users over SQLite, with the slug
//!   lifecycle wired into create/update
//! - [`urls`] — `<id>-<slug>` detail tokens: parsing, canonical checks,
//!   and permanent redirects for retired slugs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tastytruths::db::{Database, DatabaseSettings, NewRecipe, RecipeChanges};
//! use tastytruths::urls::{Resolution, resolve_recipe_detail};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect(DatabaseSettings::from_env()).await?;
//! let recipes = db.recipes();
//!
//! let recipe = recipes.create(NewRecipe::new("Chicken Soup")).await?;
//! assert_eq!(recipe.slug, "chicken-soup");
//!
//! // A title edit rotates the slug; the old URL keeps resolving.
//! recipes.update(recipe.id, RecipeChanges::default().title("Beef Stew")).await?;
//! let stale = format!("{}-chicken-soup", recipe.id);
//! match resolve_recipe_detail(&recipes, &stale).await? {
//!     Resolution::MovedPermanently { canonical } => {
//!         assert_eq!(canonical, format!("{}-beef-stew", recipe.id));
//!     }
//!     _ => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```

pub use tastytruths_db as db;
pub use tastytruths_slugs as slugs;
pub use tastytruths_urls as urls;

/// Prelude module for convenient imports
pub mod prelude {
	pub use tastytruths_db::prelude::*;
	pub use tastytruths_slugs::prelude::*;
	pub use tastytruths_urls::{Resolution, canonical_token, resolve_recipe_detail};
}
