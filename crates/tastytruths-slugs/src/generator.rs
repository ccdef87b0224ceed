//! Base slug generation
//!
//! Turns a free-text recipe title into a normalized, URL-safe slug:
//! ASCII transliteration, lowercasing, hyphen-collapsing (all via the
//! `slug` crate), then word-boundary truncation and an empty-input
//! fallback. The result is deterministic and carries no uniqueness
//! guarantee — that is [`crate::uniquify_slug`]'s job.

/// Default maximum slug length, in bytes
///
/// The `slug` column is declared at 90 characters; keeping bases at 80
/// leaves room for a `-NNNN` uniqueness suffix.
pub const DEFAULT_MAX_SLUG_LEN: usize = 80;

/// Token used when a title normalizes to nothing
pub const FALLBACK_SLUG: &str = "recipe";

/// Generate a normalized base slug from a title
///
/// Output contains only lowercase ASCII alphanumerics and single hyphens,
/// with no leading or trailing hyphen, at most `max_length` bytes long.
/// Truncation prefers dropping a trailing partial word over cutting one
/// in half; a single word longer than `max_length` is hard-cut since no
/// word boundary exists. Titles that normalize to an empty string (empty,
/// whitespace-only, punctuation-only) yield [`FALLBACK_SLUG`].
///
/// # Examples
///
/// ```
/// use tastytruths_slugs::{base_slug, DEFAULT_MAX_SLUG_LEN};
///
/// assert_eq!(base_slug("Chicken Soup", DEFAULT_MAX_SLUG_LEN), "chicken-soup");
/// assert_eq!(base_slug("  Beef -- Stew!  ", DEFAULT_MAX_SLUG_LEN), "beef-stew");
/// assert_eq!(base_slug("Crème Brûlée à la Mode", DEFAULT_MAX_SLUG_LEN), "creme-brulee-a-la-mode");
/// assert_eq!(base_slug("", DEFAULT_MAX_SLUG_LEN), "recipe");
/// assert_eq!(base_slug("one two three", 9), "one-two");
/// ```
pub fn base_slug(title: &str, max_length: usize) -> String {
	let normalized = slug::slugify(title);
	let truncated = truncate_on_word_boundary(&normalized, max_length);
	if truncated.is_empty() {
		FALLBACK_SLUG.to_string()
	} else {
		truncated.to_string()
	}
}

/// Truncate a normalized slug to `max_length` bytes without splitting a word
///
/// Safe to slice by byte index: `slug::slugify` output is pure ASCII.
fn truncate_on_word_boundary(s: &str, max_length: usize) -> &str {
	if s.len() <= max_length {
		return s;
	}
	let hard_cut = &s[..max_length];
	if s.as_bytes()[max_length] == b'-' {
		// The cut falls exactly between two words.
		return hard_cut;
	}
	match hard_cut.rfind('-') {
		Some(boundary) => &hard_cut[..boundary],
		// Single word longer than the limit: no boundary to prefer.
		None => hard_cut,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_basic_normalization() {
		assert_eq!(base_slug("Chicken Soup", DEFAULT_MAX_SLUG_LEN), "chicken-soup");
		assert_eq!(base_slug("Hello  World", DEFAULT_MAX_SLUG_LEN), "hello-world");
		assert_eq!(base_slug("Test 123", DEFAULT_MAX_SLUG_LEN), "test-123");
		assert_eq!(
			base_slug("Special!@#Characters", DEFAULT_MAX_SLUG_LEN),
			"special-characters"
		);
	}

	#[test]
	fn test_deterministic() {
		let title = "Quinoa Black Bean Stuffed Peppers";
		assert_eq!(
			base_slug(title, DEFAULT_MAX_SLUG_LEN),
			base_slug(title, DEFAULT_MAX_SLUG_LEN)
		);
	}

	#[test]
	fn test_transliteration() {
		assert_eq!(
			base_slug("Crème Brûlée à la Mode", DEFAULT_MAX_SLUG_LEN),
			"creme-brulee-a-la-mode"
		);
		assert_eq!(base_slug("Jalapeño Poppers", DEFAULT_MAX_SLUG_LEN), "jalapeno-poppers");
	}

	#[test]
	fn test_degenerate_input_falls_back() {
		assert_eq!(base_slug("", DEFAULT_MAX_SLUG_LEN), FALLBACK_SLUG);
		assert_eq!(base_slug("   ", DEFAULT_MAX_SLUG_LEN), FALLBACK_SLUG);
		assert_eq!(base_slug("!!!", DEFAULT_MAX_SLUG_LEN), FALLBACK_SLUG);
	}

	#[test]
	fn test_charset_and_length_invariants() {
		for title in [
			"Chicken Soup",
			"  Beef -- Stew!  ",
			"Crème Brûlée",
			"a very long title that keeps going and going and going and going and going and going",
			"",
		] {
			let s = base_slug(title, DEFAULT_MAX_SLUG_LEN);
			assert!(s.len() <= DEFAULT_MAX_SLUG_LEN);
			assert!(!s.starts_with('-') && !s.ends_with('-'));
			assert!(
				s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
				"unexpected character in slug {s:?}"
			);
		}
	}

	#[test]
	fn test_truncation_prefers_word_boundary() {
		// "one-two-three" cut at 9 would split "three"; drop it instead.
		assert_eq!(base_slug("one two three", 9), "one-two");
		// Cut landing exactly between words keeps the full word.
		assert_eq!(base_slug("one two three", 7), "one-two");
		// Cut landing on the separator itself.
		assert_eq!(base_slug("one two three", 3), "one");
	}

	#[test]
	fn test_truncation_single_long_word_hard_cuts() {
		assert_eq!(base_slug("supercalifragilistic", 8), "supercal");
	}
}
