//! Detail token parsing and resolution

use http::StatusCode;
use tastytruths_db::{Recipe, RecipeStore, StoreError};
use thiserror::Error;

/// Outcome of resolving a detail token
#[derive(Debug)]
pub enum Resolution {
	/// Token is canonical; render the recipe
	Display(Recipe),
	/// Token is stale or non-canonical; redirect permanently
	MovedPermanently {
		/// Canonical token `<id>-<current slug>` to redirect to
		canonical: String,
	},
}

impl Resolution {
	/// HTTP status the route layer should answer with
	pub fn status(&self) -> StatusCode {
		match self {
			Resolution::Display(_) => StatusCode::OK,
			Resolution::MovedPermanently { .. } => StatusCode::MOVED_PERMANENTLY,
		}
	}
}

/// Resolution failures
#[derive(Debug, Error)]
pub enum ResolveError {
	/// Token does not start with a numeric id
	#[error("malformed recipe token: {0:?}")]
	BadToken(String),

	/// Neither a live recipe nor a retired slug matches
	#[error("recipe not found")]
	NotFound,

	/// The record store failed
	#[error(transparent)]
	Store(#[from] StoreError),
}

impl ResolveError {
	/// HTTP status the route layer should answer with
	pub fn status(&self) -> StatusCode {
		match self {
			ResolveError::BadToken(_) => StatusCode::BAD_REQUEST,
			ResolveError::NotFound => StatusCode::NOT_FOUND,
			ResolveError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

/// Build the canonical token for a recipe
///
/// # Examples
///
/// ```
/// use tastytruths_urls::canonical_token;
///
/// assert_eq!(canonical_token(42, "chicken-soup"), "42-chicken-soup");
/// ```
pub fn canonical_token(id: i64, slug: &str) -> String {
	format!("{id}-{slug}")
}

/// Split a detail token into its leading id and slug tail
///
/// The id runs up to the first hyphen; everything after it is the tail,
/// which may be empty (bare-id tokens like `"42"` are valid and resolve
/// to a redirect). A non-numeric id is a client error — no store access
/// is attempted for it.
///
/// # Examples
///
/// ```
/// use tastytruths_urls::parse_detail_token;
///
/// let (id, tail) = parse_detail_token("42-chicken-soup").unwrap();
/// assert_eq!((id, tail), (42, "chicken-soup"));
///
/// let (id, tail) = parse_detail_token("42").unwrap();
/// assert_eq!((id, tail), (42, ""));
///
/// assert!(parse_detail_token("chicken-soup").is_err());
/// ```
pub fn parse_detail_token(token: &str) -> Result<(i64, &str), ResolveError> {
	let (id_part, tail) = match token.split_once('-') {
		Some((id_part, tail)) => (id_part, tail),
		None => (token, ""),
	};
	let id = id_part
		.parse::<i64>()
		.map_err(|_| ResolveError::BadToken(token.to_string()))?;
	Ok((id, tail))
}

/// Resolve a detail token against the store
///
/// 1. Parse the leading id; malformed → [`ResolveError::BadToken`].
/// 2. Live recipe with that id: canonical token displays, anything else
///    permanently redirects to the canonical token.
/// 3. No such recipe: a slug-history hit on the tail (the whole token
///    when it had no hyphen) permanently redirects to the owning
///    recipe's canonical token.
/// 4. Otherwise [`ResolveError::NotFound`].
pub async fn resolve_recipe_detail(
	store: &RecipeStore,
	token: &str,
) -> Result<Resolution, ResolveError> {
	let (id, tail) = parse_detail_token(token)?;

	if let Some(recipe) = store.get(id).await? {
		let canonical = canonical_token(recipe.id, &recipe.slug);
		if token == canonical {
			return Ok(Resolution::Display(recipe));
		}
		tracing::debug!(token, %canonical, "non-canonical token, redirecting");
		return Ok(Resolution::MovedPermanently { canonical });
	}

	let history_key = if tail.is_empty() { token } else { tail };
	if let Some(entry) = store.find_history_by_old_slug(history_key).await? {
		let owner = store
			.get(entry.recipe_id)
			.await?
			.ok_or(ResolveError::NotFound)?;
		let canonical = canonical_token(owner.id, &owner.slug);
		tracing::debug!(token, %canonical, "retired slug, redirecting");
		return Ok(Resolution::MovedPermanently { canonical });
	}

	Err(ResolveError::NotFound)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_valid_tokens() {
		assert_eq!(parse_detail_token("7-beef-stew").unwrap(), (7, "beef-stew"));
		assert_eq!(parse_detail_token("7-").unwrap(), (7, ""));
		assert_eq!(parse_detail_token("7").unwrap(), (7, ""));
	}

	#[test]
	fn test_parse_rejects_non_numeric_ids() {
		assert!(matches!(
			parse_detail_token("beef-stew"),
			Err(ResolveError::BadToken(_))
		));
		assert!(matches!(parse_detail_token(""), Err(ResolveError::BadToken(_))));
		// Leading hyphen leaves an empty id segment.
		assert!(matches!(
			parse_detail_token("-7-beef-stew"),
			Err(ResolveError::BadToken(_))
		));
	}

	#[test]
	fn test_status_mapping() {
		assert_eq!(
			ResolveError::BadToken("x".into()).status(),
			StatusCode::BAD_REQUEST
		);
		assert_eq!(ResolveError::NotFound.status(), StatusCode::NOT_FOUND);
		assert_eq!(
			Resolution::MovedPermanently {
				canonical: "1-a".into()
			}
			.status(),
			StatusCode::MOVED_PERMANENTLY
		);
	}
}
