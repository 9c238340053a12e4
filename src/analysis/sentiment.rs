//! Lexicon-based sentiment scoring with negation and intensifier handling.

use super::lexicon::{TokenRole, role_of};
use super::text::normalize_text;

/// Number of following tokens a negation word reaches.
const NEGATION_SCOPE: u8 = 3;
const INTENSIFIER_MULTIPLIER: f64 = 1.5;
const PRIVILEGED_POSITIVE_MULTIPLIER: f64 = 2.0;
const POLARITY_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score > POLARITY_THRESHOLD {
            Self::Positive
        } else if score < -POLARITY_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// +1 / -1 / 0, used when comparing consecutive scores.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
            Self::Neutral => 0,
        }
    }

    /// Multiplier applied to hashtag weights of a message with this polarity.
    #[must_use]
    pub fn hashtag_modifier(self) -> f64 {
        match self {
            Self::Positive => 1.2,
            Self::Negative => 0.8,
            Self::Neutral => 1.0,
        }
    }
}

/// Scans `tokens` left to right and returns the summed sentiment.
///
/// Negation words open a scope covering the next three tokens; an odd number
/// of negations inside the scope flips the sign of the next sentiment word.
/// Intensifiers scale the next sentiment word by 1.5. Scoring a sentiment word
/// consumes every pending modifier. Positive contributions from privileged
/// authors are doubled; negative ones are left untouched.
#[must_use]
pub fn evaluate_sentiment<S: AsRef<str>>(tokens: &[S], privileged: bool) -> f64 {
    let mut score = 0.0;
    let mut negation_scope: u8 = 0;
    let mut negation_count: u32 = 0;
    let mut intensifier_active = false;

    for token in tokens {
        let normalized = normalize_text(token.as_ref());

        if negation_scope > 0 {
            negation_scope -= 1;
        } else {
            negation_count = 0;
        }

        let base = match role_of(&normalized) {
            Some(TokenRole::Negation) => {
                negation_count += 1;
                negation_scope = NEGATION_SCOPE;
                continue;
            }
            Some(TokenRole::Intensifier) => {
                intensifier_active = true;
                continue;
            }
            Some(TokenRole::Positive) => 1.0,
            Some(TokenRole::Negative) => -1.0,
            None => continue,
        };

        let mut value = base;
        if intensifier_active {
            value *= INTENSIFIER_MULTIPLIER;
        }
        if negation_count % 2 == 1 {
            value = -value;
        }
        if value > 0.0 && privileged {
            value *= PRIVILEGED_POSITIVE_MULTIPLIER;
        }
        score += value;

        intensifier_active = false;
        negation_count = 0;
        negation_scope = 0;
    }

    score
}
