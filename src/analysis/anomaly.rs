//! Posting-pattern anomaly rules.
//!
//! Rules are evaluated in priority order and the first match is reported:
//! synchronized posting across all authors, then per-author bursts, then
//! per-author alternating sentiment.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

use super::sentiment::Polarity;
use crate::domain::{AnomalyKind, Message};

/// Three posts within this span are considered synchronized.
const SYNC_SPAN: TimeDelta = TimeDelta::seconds(4);
const SYNC_MIN_MESSAGES: usize = 3;

/// More than `BURST_STRIDE` posts by one author inside `BURST_SPAN`.
const BURST_SPAN: TimeDelta = TimeDelta::seconds(300);
const BURST_STRIDE: usize = 10;

const ALTERNATING_WINDOW: usize = 10;

/// Runs every rule over the in-window messages. `user_sentiments` holds each
/// author's scores in evaluation order.
#[must_use]
pub fn detect_anomalies(
    messages: &[&Message],
    user_sentiments: &HashMap<String, Vec<f64>>,
) -> Option<AnomalyKind> {
    if messages.len() < SYNC_MIN_MESSAGES {
        return None;
    }

    if has_synchronized_posting(messages) {
        return Some(AnomalyKind::SynchronizedPosting);
    }

    let per_author = timestamps_by_author(messages);
    if per_author.iter().any(|(_, times)| has_burst(times)) {
        return Some(AnomalyKind::Burst);
    }

    // authors visited in first-appearance order for reproducible diagnostics
    let alternating = per_author.iter().any(|(user_id, _)| {
        user_sentiments
            .get(*user_id)
            .is_some_and(|scores| has_alternating_pattern(scores))
    });
    if alternating {
        return Some(AnomalyKind::AlternatingPattern);
    }

    None
}

fn has_synchronized_posting(messages: &[&Message]) -> bool {
    let mut timestamps: Vec<DateTime<Utc>> = messages.iter().map(|m| m.timestamp).collect();
    timestamps.sort_unstable();
    timestamps
        .windows(SYNC_MIN_MESSAGES)
        .any(|w| w[SYNC_MIN_MESSAGES - 1] - w[0] <= SYNC_SPAN)
}

/// Timestamps grouped per author, sorted ascending, authors in order of first
/// appearance.
fn timestamps_by_author<'a>(messages: &[&'a Message]) -> Vec<(&'a str, Vec<DateTime<Utc>>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<DateTime<Utc>>)> = Vec::new();

    for &message in messages {
        let slot = *index.entry(message.user_id.as_str()).or_insert_with(|| {
            groups.push((message.user_id.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(message.timestamp);
    }

    for (_, times) in &mut groups {
        times.sort_unstable();
    }
    groups
}

fn has_burst(sorted_times: &[DateTime<Utc>]) -> bool {
    sorted_times
        .windows(BURST_STRIDE + 1)
        .any(|w| w[BURST_STRIDE] - w[0] <= BURST_SPAN)
}

fn has_alternating_pattern(scores: &[f64]) -> bool {
    scores.windows(ALTERNATING_WINDOW).any(|window| {
        let signs: Vec<i8> = window.iter().map(|s| Polarity::of(*s).sign()).collect();
        !signs.contains(&0) && signs.windows(2).all(|pair| pair[0] != pair[1])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MessageBuilder, base_time};

    fn at(user_id: &str, offset_secs: i64) -> Message {
        MessageBuilder::new(user_id)
            .at(base_time() + TimeDelta::seconds(offset_secs))
            .build()
    }

    fn detect(messages: &[Message], sentiments: &HashMap<String, Vec<f64>>) -> Option<AnomalyKind> {
        let refs: Vec<&Message> = messages.iter().collect();
        detect_anomalies(&refs, sentiments)
    }

    fn alternating_scores(n: usize) -> Vec<f64> {
        (0..n).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect()
    }

    #[test]
    fn test_fewer_than_three_messages_is_never_anomalous() {
        let messages = vec![at("user_aaa", 0), at("user_bbb", 0)];
        assert_eq!(detect(&messages, &HashMap::new()), None);
    }

    #[test]
    fn test_synchronized_posting() {
        let messages = vec![at("user_aaa", 0), at("user_bbb", 1), at("user_ccc", 2)];
        assert_eq!(
            detect(&messages, &HashMap::new()),
            Some(AnomalyKind::SynchronizedPosting)
        );
    }

    #[test]
    fn test_synchronized_span_is_inclusive() {
        let messages = vec![at("user_aaa", 0), at("user_bbb", 60), at("user_ccc", 4)];
        assert_eq!(
            detect(&messages, &HashMap::new()),
            None,
            "sorted gaps are 4s and 56s, the triple spans 60s"
        );

        let messages = vec![at("user_aaa", 0), at("user_bbb", 2), at("user_ccc", 4)];
        assert_eq!(
            detect(&messages, &HashMap::new()),
            Some(AnomalyKind::SynchronizedPosting)
        );

        let messages = vec![at("user_aaa", 0), at("user_bbb", 3), at("user_ccc", 5)];
        assert_eq!(detect(&messages, &HashMap::new()), None);
    }

    #[test]
    fn test_burst_needs_more_than_ten_posts() {
        // 11 posts, 25s apart: span 250s
        let burst: Vec<Message> = (0..11).map(|i| at("user_spam", i * 25)).collect();
        assert_eq!(detect(&burst, &HashMap::new()), Some(AnomalyKind::Burst));

        let ten: Vec<Message> = (0..10).map(|i| at("user_spam", i * 25)).collect();
        assert_eq!(detect(&ten, &HashMap::new()), None);
    }

    #[test]
    fn test_burst_span_limit() {
        // 11 posts, 31s apart: span 310s
        let slow: Vec<Message> = (0..11).map(|i| at("user_spam", i * 31)).collect();
        assert_eq!(detect(&slow, &HashMap::new()), None);

        // 11 posts, 30s apart: span exactly 300s
        let edge: Vec<Message> = (0..11).map(|i| at("user_spam", i * 30)).collect();
        assert_eq!(detect(&edge, &HashMap::new()), Some(AnomalyKind::Burst));
    }

    #[test]
    fn test_synchronized_wins_over_burst() {
        // 11 posts by one author, all within 3 seconds
        let messages: Vec<Message> = (0..11).map(|i| at("user_spam", i % 3)).collect();
        let refs: Vec<&Message> = messages.iter().collect();
        assert!(has_burst(&timestamps_by_author(&refs)[0].1));
        assert_eq!(
            detect(&messages, &HashMap::new()),
            Some(AnomalyKind::SynchronizedPosting)
        );
    }

    #[test]
    fn test_alternating_pattern() {
        let messages: Vec<Message> = (0..10).map(|i| at("user_flip", i * 60)).collect();
        let sentiments = HashMap::from([("user_flip".to_string(), alternating_scores(10))]);
        assert_eq!(
            detect(&messages, &sentiments),
            Some(AnomalyKind::AlternatingPattern)
        );
    }

    #[test]
    fn test_alternating_requires_ten_scores() {
        let messages: Vec<Message> = (0..9).map(|i| at("user_flip", i * 60)).collect();
        let sentiments = HashMap::from([("user_flip".to_string(), alternating_scores(9))]);
        assert_eq!(detect(&messages, &sentiments), None);
    }

    #[test]
    fn test_alternating_rejects_neutral_and_repeats() {
        let messages: Vec<Message> = (0..12).map(|i| at("user_flip", i * 60)).collect();

        let mut with_neutral = alternating_scores(12);
        with_neutral[5] = 0.05;
        let sentiments = HashMap::from([("user_flip".to_string(), with_neutral)]);
        assert_eq!(detect(&messages, &sentiments), None);

        let mut with_repeat = alternating_scores(12);
        with_repeat[6] = with_repeat[5];
        let sentiments = HashMap::from([("user_flip".to_string(), with_repeat)]);
        assert_eq!(detect(&messages, &sentiments), None);
    }

    #[test]
    fn test_alternating_found_in_later_window() {
        let messages: Vec<Message> = (0..12).map(|i| at("user_flip", i * 60)).collect();
        let mut scores = vec![1.0, 1.0];
        scores.extend(alternating_scores(10));
        let sentiments = HashMap::from([("user_flip".to_string(), scores)]);
        assert_eq!(
            detect(&messages, &sentiments),
            Some(AnomalyKind::AlternatingPattern)
        );
    }

    #[test]
    fn test_burst_checked_before_alternating_for_all_authors() {
        let mut messages: Vec<Message> = (0..10).map(|i| at("user_flip", i * 120)).collect();
        messages.extend((0..11).map(|i| at("user_spam", 5000 + i * 25)));
        let sentiments = HashMap::from([("user_flip".to_string(), alternating_scores(10))]);
        assert_eq!(detect(&messages, &sentiments), Some(AnomalyKind::Burst));
    }
}
