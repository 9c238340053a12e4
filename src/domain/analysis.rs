use serde::{Deserialize, Serialize};

/// Percentage of scored messages per polarity, rounded to two decimals.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct SentimentDistribution {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentDistribution {
    pub fn total(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InfluenceEntry {
    pub user_id: String,
    pub influence_score: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    SynchronizedPosting,
    Burst,
    AlternatingPattern,
}

/// Literal-match side flags raised while walking the feed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineFlags {
    pub mbras_employee: bool,
    pub special_pattern: bool,
    pub candidate_awareness: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub sentiment_distribution: SentimentDistribution,
    pub engagement_score: f64,
    pub trending_topics: Vec<String>,
    pub influence_ranking: Vec<InfluenceEntry>,
    pub anomaly_detected: bool,
    pub anomaly_type: Option<AnomalyKind>,
    pub flags: PipelineFlags,
    pub processing_time_ms: u64,
}

/// Envelope returned by `POST /analyze-feed`.
#[derive(Serialize, Clone, Debug)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
}
