//! Model definitions for the record store
//!
//! - `Recipe` / `NewRecipe` / `RecipeChanges`: the slugged entity and its
//!   write payloads
//! - `RecipeSlugHistory`: retired slugs, one row per rotation
//! - `User` / `NewUser`: account records (data model only, no auth flow)

pub mod recipe;
pub mod slug_history;
pub mod user;

pub use recipe::{NewRecipe, Recipe, RecipeChanges};
pub use slug_history::RecipeSlugHistory;
pub use user::{NewUser, User};
