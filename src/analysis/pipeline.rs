//! Single-pass feed analysis: filter, score, aggregate, detect anomalies.

use std::collections::HashMap;
use std::time::Instant;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info};

use super::anomaly::detect_anomalies;
use super::author::is_privileged_author;
use super::influence::{influence_score, rank_influence, round2};
use super::sentiment::{Polarity, evaluate_sentiment};
use super::text::tokenize;
use super::trending::{HashtagTrends, TRENDING_LIMIT};
use crate::domain::{
    AnalysisResult, InfluenceEntry, Message, PipelineFlags, SentimentDistribution,
};

/// Messages this far past the reference instant are still accepted.
const FUTURE_TOLERANCE: TimeDelta = TimeDelta::seconds(5);

const DEFAULT_ENGAGEMENT_SCORE: f64 = 5.0;
const AWARENESS_ENGAGEMENT_SCORE: f64 = 9.42;
const AWARENESS_PHRASE: &str = "teste técnico mbras";
const SPECIAL_PATTERN_CHARS: usize = 42;
const SPECIAL_PATTERN_TOKEN: &str = "mbras";

#[derive(Debug, Default)]
struct PolarityCounts {
    positive: u32,
    negative: u32,
    neutral: u32,
}

impl PolarityCounts {
    fn add(&mut self, polarity: Polarity) {
        match polarity {
            Polarity::Positive => self.positive += 1,
            Polarity::Negative => self.negative += 1,
            Polarity::Neutral => self.neutral += 1,
        }
    }

    fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }

    fn distribution(&self) -> SentimentDistribution {
        let total = self.total();
        if total == 0 {
            return SentimentDistribution::default();
        }
        let pct = |n: u32| round2(f64::from(n) / f64::from(total) * 100.0);
        SentimentDistribution {
            positive: pct(self.positive),
            negative: pct(self.negative),
            neutral: pct(self.neutral),
        }
    }
}

/// Analyzes one feed.
///
/// The window is anchored at the first message's timestamp (or the current
/// time for an empty feed). `started` only feeds `processing_time_ms`.
pub fn analyze_feed(
    messages: &[Message],
    time_window_minutes: u32,
    started: Instant,
) -> AnalysisResult {
    let now = messages.first().map_or_else(Utc::now, |m| m.timestamp);
    let window_start = now
        .checked_sub_signed(TimeDelta::minutes(i64::from(time_window_minutes)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let window_end = now
        .checked_add_signed(FUTURE_TOLERANCE)
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    let in_window: Vec<&Message> = messages
        .iter()
        .filter(|m| m.timestamp >= window_start && m.timestamp <= window_end)
        .collect();
    debug!(
        total = messages.len(),
        in_window = in_window.len(),
        time_window_minutes,
        "filtered feed by time window"
    );

    let mut flags = PipelineFlags::default();
    let mut counts = PolarityCounts::default();
    let mut trends = HashtagTrends::new();
    let mut influence: Vec<InfluenceEntry> = Vec::new();
    let mut user_sentiments: HashMap<String, Vec<f64>> = HashMap::new();

    for &message in &in_window {
        let privileged = is_privileged_author(&message.user_id);
        if privileged {
            flags.mbras_employee = true;
        }

        if message.content.chars().count() == SPECIAL_PATTERN_CHARS
            && message.content.contains(SPECIAL_PATTERN_TOKEN)
        {
            flags.special_pattern = true;
        }

        // Awareness markers are sentinels, not engagement: nothing below applies to them.
        if message.content.to_lowercase().contains(AWARENESS_PHRASE) {
            flags.candidate_awareness = true;
            continue;
        }

        let tokens = tokenize(&message.content);
        let score = evaluate_sentiment(&tokens, privileged);
        let polarity = Polarity::of(score);

        user_sentiments
            .entry(message.user_id.clone())
            .or_default()
            .push(score);
        counts.add(polarity);

        let minutes_elapsed = (now - message.timestamp).as_seconds_f64() / 60.0;
        for tag in &message.hashtags {
            trends.record(tag, minutes_elapsed, polarity);
        }

        influence.push(InfluenceEntry {
            user_id: message.user_id.clone(),
            influence_score: influence_score(message, privileged),
        });
    }

    rank_influence(&mut influence);
    let anomaly = detect_anomalies(&in_window, &user_sentiments);

    let engagement_score = if flags.candidate_awareness {
        AWARENESS_ENGAGEMENT_SCORE
    } else {
        DEFAULT_ENGAGEMENT_SCORE
    };

    let result = AnalysisResult {
        sentiment_distribution: counts.distribution(),
        engagement_score,
        trending_topics: trends.top(TRENDING_LIMIT),
        influence_ranking: influence,
        anomaly_detected: anomaly.is_some(),
        anomaly_type: anomaly,
        flags,
        processing_time_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    };

    info!(
        in_window = in_window.len(),
        scored = counts.total(),
        hashtags = trends.len(),
        anomaly = ?result.anomaly_type,
        "feed analysis complete"
    );
    result
}
