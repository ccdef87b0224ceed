//! Slug uniquification
//!
//! Given a base slug and a handle to the record store, finds a value no
//! other live record of the same entity type currently holds by probing
//! `base`, `base-2`, `base-3`, … in order.
//!
//! The check is check-then-act: a concurrent writer can claim a candidate
//! between the existence check and the commit. The store's UNIQUE
//! constraint on the slug column stays the ultimate authority; callers
//! are expected to treat a commit-time violation as retryable and re-run
//! uniquification (see `tastytruths-db`).

use async_trait::async_trait;

use crate::error::SlugError;

/// Upper bound on suffix probing
///
/// The source of truth for slugs is a UNIQUE column, so collisions beyond
/// a handful of suffixes only happen under pathological duplicate-title
/// storms. Failing loudly beats probing forever.
pub const MAX_SUFFIX_PROBES: usize = 1000;

/// Existence check against the live slug space of one entity type
///
/// Implemented by the record store. `exclude_id` skips one record's own
/// row, so re-slugging an existing record never collides with itself.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use tastytruths_slugs::{SlugError, SlugStore};
///
/// struct InMemory(std::collections::HashSet<String>);
///
/// #[async_trait]
/// impl SlugStore for InMemory {
///     async fn slug_exists(&self, slug: &str, _exclude_id: Option<i64>) -> Result<bool, SlugError> {
///         Ok(self.0.contains(slug))
///     }
/// }
/// ```
#[async_trait]
pub trait SlugStore: Send + Sync {
	/// Returns true when `slug` is currently held by a record other than
	/// `exclude_id`
	async fn slug_exists(&self, slug: &str, exclude_id: Option<i64>) -> Result<bool, SlugError>;
}

/// Find a store-wide-unique slug for `base`
///
/// Returns `base` unchanged when it is free, otherwise the first free
/// candidate among `base-2`, `base-3`, … in strictly increasing order.
/// Probing stops after [`MAX_SUFFIX_PROBES`] candidates with
/// [`SlugError::ProbesExhausted`].
///
/// The returned value is free at the instant of the check only; see the
/// module docs for the concurrency caveat.
pub async fn uniquify_slug<S: SlugStore + ?Sized>(
	store: &S,
	base: &str,
	exclude_id: Option<i64>,
) -> Result<String, SlugError> {
	let mut candidate = base.to_string();
	for suffix in 2..=(MAX_SUFFIX_PROBES + 1) {
		if !store.slug_exists(&candidate, exclude_id).await? {
			return Ok(candidate);
		}
		tracing::debug!(slug = %candidate, "slug taken, probing next suffix");
		candidate = format!("{base}-{suffix}");
	}
	Err(SlugError::ProbesExhausted {
		base: base.to_string(),
		attempts: MAX_SUFFIX_PROBES,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;
	use std::sync::Mutex;

	/// Store stub mapping live slugs to their owning record ids
	struct FakeStore {
		live: Mutex<HashMap<String, i64>>,
	}

	impl FakeStore {
		fn with(entries: &[(&str, i64)]) -> Self {
			Self {
				live: Mutex::new(
					entries.iter().map(|(s, id)| (s.to_string(), *id)).collect(),
				),
			}
		}
	}

	#[async_trait]
	impl SlugStore for FakeStore {
		async fn slug_exists(
			&self,
			slug: &str,
			exclude_id: Option<i64>,
		) -> Result<bool, SlugError> {
			let live = self.live.lock().map_err(|e| SlugError::Store(e.to_string()))?;
			Ok(match (live.get(slug), exclude_id) {
				(Some(owner), Some(excluded)) => *owner != excluded,
				(Some(_), None) => true,
				(None, _) => false,
			})
		}
	}

	#[tokio::test]
	async fn test_free_base_returned_unchanged() {
		let store = FakeStore::with(&[]);
		let slug = uniquify_slug(&store, "chicken-soup", None).await.unwrap();
		assert_eq!(slug, "chicken-soup");
	}

	#[tokio::test]
	async fn test_collision_appends_increasing_suffixes() {
		let store = FakeStore::with(&[("chicken-soup", 1)]);
		let slug = uniquify_slug(&store, "chicken-soup", None).await.unwrap();
		assert_eq!(slug, "chicken-soup-2");

		let store = FakeStore::with(&[("chicken-soup", 1), ("chicken-soup-2", 2)]);
		let slug = uniquify_slug(&store, "chicken-soup", None).await.unwrap();
		assert_eq!(slug, "chicken-soup-3");
	}

	#[tokio::test]
	async fn test_exclude_id_allows_keeping_own_slug() {
		let store = FakeStore::with(&[("chicken-soup", 7)]);
		let slug = uniquify_slug(&store, "chicken-soup", Some(7)).await.unwrap();
		assert_eq!(slug, "chicken-soup");
		// Another record still collides.
		let slug = uniquify_slug(&store, "chicken-soup", Some(8)).await.unwrap();
		assert_eq!(slug, "chicken-soup-2");
	}

	#[tokio::test]
	async fn test_probe_space_exhaustion_reported() {
		struct Saturated;

		#[async_trait]
		impl SlugStore for Saturated {
			async fn slug_exists(&self, _: &str, _: Option<i64>) -> Result<bool, SlugError> {
				Ok(true)
			}
		}

		let err = uniquify_slug(&Saturated, "soup", None).await.unwrap_err();
		assert!(matches!(err, SlugError::ProbesExhausted { attempts, .. } if attempts == MAX_SUFFIX_PROBES));
	}
}
