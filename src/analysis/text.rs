//! Text normalization and tokenization for lexicon matching.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:#\w+(?:-\w+)*)|\b\w+\b").expect("token pattern is a valid regex")
});

/// Lower-cases `text` and strips diacritics so that `"Péssimo"` and
/// `"pessimo"` compare equal.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect()
}

/// Splits message content into word tokens. Hashtag-shaped runs such as
/// `#black-friday` are kept as a single token.
#[must_use]
pub fn tokenize(content: &str) -> Vec<&str> {
    TOKEN_PATTERN
        .find_iter(content)
        .map(|m| m.as_str())
        .collect()
}
