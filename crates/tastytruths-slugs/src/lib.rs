//! # tastytruths-slugs
//!
//! URL slug handling for Tasty Truths: deterministic base-slug generation
//! from recipe titles, and store-wide uniquification via numeric suffixes.
//!
//! The two halves are deliberately separate:
//!
//! - [`base_slug`] is a pure function — same title in, same slug out. It
//!   never touches a database and never fails.
//! - [`uniquify_slug`] takes a [`SlugStore`] handle and probes `base`,
//!   `base-2`, `base-3`, … until it finds a value no live record holds.
//!
//! ## Quick Start
//!
//! ```
//! use tastytruths_slugs::{base_slug, DEFAULT_MAX_SLUG_LEN};
//!
//! assert_eq!(base_slug("Chicken Soup", DEFAULT_MAX_SLUG_LEN), "chicken-soup");
//! assert_eq!(base_slug("Crème Brûlée", DEFAULT_MAX_SLUG_LEN), "creme-brulee");
//! assert_eq!(base_slug("!!!", DEFAULT_MAX_SLUG_LEN), "recipe");
//! ```

pub mod error;
pub mod generator;
pub mod uniquify;

pub use error::SlugError;
pub use generator::{DEFAULT_MAX_SLUG_LEN, FALLBACK_SLUG, base_slug};
pub use uniquify::{MAX_SUFFIX_PROBES, SlugStore, uniquify_slug};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::error::SlugError;
	pub use crate::generator::{DEFAULT_MAX_SLUG_LEN, FALLBACK_SLUG, base_slug};
	pub use crate::uniquify::{MAX_SUFFIX_PROBES, SlugStore, uniquify_slug};
}
