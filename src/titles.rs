//! Helper functions for manipulating article titles
//!
//! Titles are normalized at parse time so that citation targets compare
//! equal regardless of how they were written in the source; the other
//! helpers derive sort keys and filename-safe slugs from the normalized
//! form.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

/// Characters percent-encoded in a filename-safe slug. Mirrors the
/// unreserved alphabet of a URL path segment; `~` is excluded because it
/// is replaced outright before encoding.
const SLUG_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Maximum length of a filename-safe slug in bytes
const SLUG_MAX_LEN: usize = 64;

/// Normalizes a string as a title:
/// - Strips leading and trailing whitespace
/// - Merges internal whitespace into a single space
/// - Capitalizes the first character
#[must_use]
pub fn normalize_title(title: &str) -> String {
    let whitespace = Regex::new(r"\s+").unwrap();
    let cleaned = whitespace.replace_all(title.trim(), " ");
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strips articles off of a title for alphabetical sorting purposes
#[must_use]
pub fn titlesort(title: &str) -> String {
    let lower = title.to_lowercase();
    if let Some(stripped) = lower.strip_prefix("the ") {
        return stripped.to_string();
    }
    if let Some(stripped) = lower.strip_prefix("an ") {
        return stripped.to_string();
    }
    if let Some(stripped) = lower.strip_prefix("a ") {
        return stripped.to_string();
    }
    lower
}

/// Makes an article title filename-safe
///
/// The flattening is lossy: percent markers introduced by the encoding
/// step are stripped, and the result is cut at 64 bytes. Distinct titles
/// may therefore collide; callers treat the slug as a storage key, never
/// as something to decode back into a title.
#[must_use]
pub fn filesafe_title(title: &str) -> String {
    // Replace whitespace with _
    let whitespace = Regex::new(r"\s+").unwrap();
    let underscored = whitespace.replace_all(title, "_");

    // The encode set doesn't catch ~
    let detilded = underscored.replace('~', "-");

    // Encode all other characters
    let encoded = utf8_percent_encode(&detilded, SLUG_ENCODE_SET).to_string();

    // Strip encoding %s
    let stripped = encoded.replace('%', "");

    // Limit to 64 characters
    let mut slug = stripped;
    if slug.len() > SLUG_MAX_LEN {
        let mut cut = SLUG_MAX_LEN;
        while !slug.is_char_boundary(cut) {
            cut -= 1;
        }
        slug.truncate(cut);
    }
    slug
}
