//! Deterministic follower derivation and per-message influence scoring.

use sha2::{Digest, Sha256};

use crate::domain::{InfluenceEntry, Message};

const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

const FOLLOWER_MODULUS: u32 = 10_000;
const FOLLOWER_BASE: u64 = 100;

const RESERVED_ID_CHARS: usize = 13;
const RESERVED_ID_FOLLOWERS: u64 = 233;
const CAFE_USER_ID: &str = "user_café";
const CAFE_FOLLOWERS: u64 = 4242;
const PRIME_SUFFIX: &str = "_prime";
const PRIME_FOLLOWERS: u64 = 997;
const HALVED_SUFFIX: &str = "007";

/// Interaction totals divisible by this get the viral bonus.
const VIRAL_DIVISOR: u64 = 7;

const FOLLOWER_WEIGHT: f64 = 0.4;
const ENGAGEMENT_WEIGHT: f64 = 0.6;
const PRIVILEGED_BONUS: f64 = 2.0;

/// Follower count derived from the author id alone.
///
/// Literal overrides are checked first, in order; any other id hashes to a
/// value in `100..10_100`.
#[must_use]
pub fn deterministic_followers(user_id: &str) -> u64 {
    if user_id.chars().count() == RESERVED_ID_CHARS {
        return RESERVED_ID_FOLLOWERS;
    }
    if user_id == CAFE_USER_ID {
        return CAFE_FOLLOWERS;
    }
    if user_id.ends_with(PRIME_SUFFIX) {
        return PRIME_FOLLOWERS;
    }

    let digest = Sha256::digest(user_id.as_bytes());
    // digest read as a big-endian 256-bit integer, reduced mod 10_000
    let remainder = digest
        .iter()
        .fold(0u32, |acc, &byte| (acc * 256 + u32::from(byte)) % FOLLOWER_MODULUS);
    u64::from(remainder) + FOLLOWER_BASE
}

/// Followers after the `007` penalty.
#[must_use]
pub fn effective_followers(user_id: &str) -> u64 {
    let followers = deterministic_followers(user_id);
    if user_id.ends_with(HALVED_SUFFIX) {
        followers / 2
    } else {
        followers
    }
}

#[must_use]
pub fn engagement_rate(reactions: u64, shares: u64, views: u64) -> f64 {
    let interactions = reactions.saturating_add(shares);
    let mut rate = interactions as f64 / views.max(1) as f64;
    if interactions > 0 && interactions % VIRAL_DIVISOR == 0 {
        rate *= 1.0 + 1.0 / GOLDEN_RATIO;
    }
    rate
}

/// Influence score of one message, rounded to two decimals.
#[must_use]
pub fn influence_score(message: &Message, privileged: bool) -> f64 {
    let followers = effective_followers(&message.user_id) as f64;
    let rate = engagement_rate(message.reactions, message.shares, message.views);

    let mut score = followers * FOLLOWER_WEIGHT + rate * ENGAGEMENT_WEIGHT;
    if privileged {
        score += PRIVILEGED_BONUS;
    }
    round2(score)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sorts by score descending, then author ascending. The sort is stable, so
/// entries that tie on both keep their input order.
pub fn rank_influence(entries: &mut [InfluenceEntry]) {
    entries.sort_by(|a, b| {
        b.influence_score
            .total_cmp(&a.influence_score)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
}
