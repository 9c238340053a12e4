//! Time-decayed hashtag weighting and trending ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::sentiment::Polarity;

pub const TRENDING_LIMIT: usize = 5;

/// Floor on post age so that brand-new posts do not divide by zero.
const MIN_MINUTES_ELAPSED: f64 = 0.01;
/// Tags longer than this many characters receive a logarithmic boost.
const LONG_TAG_CHARS: usize = 8;

/// Weight contributed by a single hashtag occurrence.
#[must_use]
pub fn hashtag_weight(tag: &str, minutes_elapsed: f64, polarity: Polarity) -> f64 {
    let time_factor = 1.0 + 1.0 / minutes_elapsed.max(MIN_MINUTES_ELAPSED);
    let mut weight = time_factor * polarity.hashtag_modifier();

    let len = tag.chars().count();
    if len > LONG_TAG_CHARS {
        weight *= (len as f64).log10() / (LONG_TAG_CHARS as f64).log10();
    }
    weight
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TagStats {
    pub weight: f64,
    pub count: u32,
    pub sentiment_weight: f64,
}

/// Running per-tag totals for one request.
#[derive(Debug, Default)]
pub struct HashtagTrends {
    tags: HashMap<String, TagStats>,
}

impl HashtagTrends {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tag: &str, minutes_elapsed: f64, polarity: Polarity) {
        let weight = hashtag_weight(tag, minutes_elapsed, polarity);
        let stats = self.tags.entry(tag.to_string()).or_default();
        stats.weight += weight;
        stats.count += 1;
        stats.sentiment_weight += polarity.hashtag_modifier();
    }

    #[cfg(test)]
    pub(crate) fn stats(&self, tag: &str) -> Option<&TagStats> {
        self.tags.get(tag)
    }

    /// Number of distinct tags seen so far.
    pub(crate) fn len(&self) -> usize {
        self.tags.len()
    }

    /// All tags in trending order.
    pub fn ranked(&self) -> Vec<(&str, &TagStats)> {
        let mut ranked: Vec<(&str, &TagStats)> =
            self.tags.iter().map(|(tag, s)| (tag.as_str(), s)).collect();
        ranked.sort_by(|a, b| trending_order(*a, *b));
        ranked
    }

    /// The `limit` highest-ranked tags.
    pub fn top(&self, limit: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(limit)
            .map(|(tag, _)| tag.to_string())
            .collect()
    }
}

/// Weight desc, count desc, sentiment weight desc, then tag text asc.
fn trending_order(a: (&str, &TagStats), b: (&str, &TagStats)) -> Ordering {
    let (tag_a, sa) = a;
    let (tag_b, sb) = b;
    sb.weight
        .total_cmp(&sa.weight)
        .then_with(|| sb.count.cmp(&sa.count))
        .then_with(|| sb.sentiment_weight.total_cmp(&sa.sentiment_weight))
        .then_with(|| tag_a.cmp(tag_b))
}
