//! Fixed Portuguese sentiment vocabulary. Entries are stored in normalized
//! form (lower-case, no diacritics); see [`super::text::normalize_text`].

use std::collections::HashMap;
use std::sync::LazyLock;

const POSITIVE: &[&str] = &[
    "adorei",
    "bom",
    "otimo",
    "excelente",
    "perfeito",
    "qualidade",
    "gostei",
];
const NEGATIVE: &[&str] = &["ruim", "terrivel", "pessimo", "odiei"];
const INTENSIFIERS: &[&str] = &["muito", "super", "extremamente"];
const NEGATIONS: &[&str] = &["nao", "nunca", "jamais"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole {
    Positive,
    Negative,
    Intensifier,
    Negation,
}

static LEXICON: LazyLock<HashMap<&'static str, TokenRole>> = LazyLock::new(|| {
    let groups = [
        (POSITIVE, TokenRole::Positive),
        (NEGATIVE, TokenRole::Negative),
        (INTENSIFIERS, TokenRole::Intensifier),
        (NEGATIONS, TokenRole::Negation),
    ];
    groups
        .into_iter()
        .flat_map(|(words, role)| words.iter().map(move |w| (*w, role)))
        .collect()
});

/// Looks up the role of an already-normalized token.
#[must_use]
pub fn role_of(normalized: &str) -> Option<TokenRole> {
    LEXICON.get(normalized).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_resolve() {
        assert_eq!(role_of("gostei"), Some(TokenRole::Positive));
        assert_eq!(role_of("pessimo"), Some(TokenRole::Negative));
        assert_eq!(role_of("extremamente"), Some(TokenRole::Intensifier));
        assert_eq!(role_of("jamais"), Some(TokenRole::Negation));
        assert_eq!(role_of("produto"), None);
    }

    #[test]
    fn test_vocabularies_do_not_overlap() {
        let total = POSITIVE.len() + NEGATIVE.len() + INTENSIFIERS.len() + NEGATIONS.len();
        assert_eq!(LEXICON.len(), total);
    }

    #[test]
    fn test_lookup_expects_normalized_input() {
        assert_eq!(role_of("Péssimo"), None);
    }
}
