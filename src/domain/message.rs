use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Layouts accepted for timestamps that carry no UTC offset.
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A single feed post as received from the client.
///
/// Once deserialized and validated a `Message` is never mutated; every stage of
/// the analysis reads it by reference.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub content: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub reactions: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub views: u64,
}

/// Body of `POST /analyze-feed`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FeedRequest {
    pub messages: Vec<Message>,
    pub time_window_minutes: i64,
}

/// RFC 3339 timestamps keep their offset; offset-less ones are read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(timestamp) = raw.parse::<DateTime<Utc>>() {
        return Ok(timestamp);
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp {raw:?}")))
}
