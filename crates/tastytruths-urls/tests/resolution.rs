//! End-to-end resolution: create recipes, rotate slugs, and check that
//! exactly one token displays while every historical form redirects.

use tastytruths_db::{Database, DatabaseSettings, NewRecipe, RecipeChanges, RecipeStore};
use tastytruths_urls::{ResolveError, Resolution, canonical_token, resolve_recipe_detail};

async fn recipes() -> RecipeStore {
	let db = Database::connect(DatabaseSettings::in_memory())
		.await
		.expect("in-memory database");
	db.recipes()
}

#[tokio::test]
async fn canonical_token_displays() {
	let store = recipes().await;
	let recipe = store.create(NewRecipe::new("Chicken Soup")).await.unwrap();

	let token = canonical_token(recipe.id, "chicken-soup");
	match resolve_recipe_detail(&store, &token).await.unwrap() {
		Resolution::Display(found) => assert_eq!(found.id, recipe.id),
		other => panic!("expected display, got {other:?}"),
	}
}

#[tokio::test]
async fn stale_slug_redirects_to_current_canonical() {
	let store = recipes().await;
	let recipe = store.create(NewRecipe::new("Chicken Soup")).await.unwrap();
	store
		.update(recipe.id, RecipeChanges::default().title("Beef Stew"))
		.await
		.unwrap();

	let stale = format!("{}-chicken-soup", recipe.id);
	match resolve_recipe_detail(&store, &stale).await.unwrap() {
		Resolution::MovedPermanently { canonical } => {
			assert_eq!(canonical, format!("{}-beef-stew", recipe.id));
		}
		other => panic!("expected redirect, got {other:?}"),
	}
}

#[tokio::test]
async fn wrong_tail_with_live_id_redirects() {
	let store = recipes().await;
	let recipe = store.create(NewRecipe::new("Chicken Soup")).await.unwrap();

	let wrong = format!("{}-totally-wrong", recipe.id);
	match resolve_recipe_detail(&store, &wrong).await.unwrap() {
		Resolution::MovedPermanently { canonical } => {
			assert_eq!(canonical, format!("{}-chicken-soup", recipe.id));
		}
		other => panic!("expected redirect, got {other:?}"),
	}
}

#[tokio::test]
async fn bare_id_token_redirects_to_canonical() {
	let store = recipes().await;
	let recipe = store.create(NewRecipe::new("Chicken Soup")).await.unwrap();

	match resolve_recipe_detail(&store, &recipe.id.to_string()).await.unwrap() {
		Resolution::MovedPermanently { canonical } => {
			assert_eq!(canonical, format!("{}-chicken-soup", recipe.id));
		}
		other => panic!("expected redirect, got {other:?}"),
	}
}

#[tokio::test]
async fn retired_slug_survives_multiple_rotations() {
	let store = recipes().await;
	let recipe = store.create(NewRecipe::new("Chicken Soup")).await.unwrap();
	store
		.update(recipe.id, RecipeChanges::default().title("Beef Stew"))
		.await
		.unwrap();
	store
		.update(recipe.id, RecipeChanges::default().title("Lamb Curry"))
		.await
		.unwrap();

	for stale_tail in ["chicken-soup", "beef-stew"] {
		let stale = format!("{}-{stale_tail}", recipe.id);
		match resolve_recipe_detail(&store, &stale).await.unwrap() {
			Resolution::MovedPermanently { canonical } => {
				assert_eq!(canonical, format!("{}-lamb-curry", recipe.id));
			}
			other => panic!("expected redirect for {stale_tail}, got {other:?}"),
		}
	}
}

#[tokio::test]
async fn history_resolves_even_with_mismatched_id() {
	// The stale id no longer exists, but the tail matches a retired slug;
	// resolution follows the history entry's owner.
	let store = recipes().await;
	let recipe = store.create(NewRecipe::new("Chicken Soup")).await.unwrap();
	store
		.update(recipe.id, RecipeChanges::default().title("Beef Stew"))
		.await
		.unwrap();

	let ghost_id = recipe.id + 1000;
	let stale = format!("{ghost_id}-chicken-soup");
	match resolve_recipe_detail(&store, &stale).await.unwrap() {
		Resolution::MovedPermanently { canonical } => {
			assert_eq!(canonical, format!("{}-beef-stew", recipe.id));
		}
		other => panic!("expected redirect, got {other:?}"),
	}
}

#[tokio::test]
async fn unknown_id_and_unknown_tail_is_not_found() {
	let store = recipes().await;
	store.create(NewRecipe::new("Chicken Soup")).await.unwrap();

	let err = resolve_recipe_detail(&store, "9999-no-such-recipe")
		.await
		.unwrap_err();
	assert!(matches!(err, ResolveError::NotFound));
}

#[tokio::test]
async fn malformed_id_is_bad_request_without_store_lookup() {
	let store = recipes().await;

	let err = resolve_recipe_detail(&store, "soup-42").await.unwrap_err();
	assert!(matches!(err, ResolveError::BadToken(_)));
}
