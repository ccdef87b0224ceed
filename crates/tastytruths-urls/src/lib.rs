//! # tastytruths-urls
//!
//! Canonical URL handling for recipe detail pages.
//!
//! A detail URL carries a token of the form `<id>-<slug>`, e.g.
//! `42-chicken-soup`. Exactly one token per live recipe resolves without
//! a redirect; every other valid form — wrong tail, bare id, or a slug the
//! recipe held before a title change — resolves to a permanent redirect
//! onto the canonical token, so old links keep working forever.
//!
//! This crate owns the token grammar and the resolution procedure; turning
//! a [`Resolution`] into an HTTP response belongs to the route layer.

pub mod detail;

pub use detail::{
	ResolveError, Resolution, canonical_token, parse_detail_token, resolve_recipe_detail,
};
