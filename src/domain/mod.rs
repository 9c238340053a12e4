pub mod analysis;
pub mod message;
pub mod validate;

pub use analysis::{
    AnalysisResult, AnalyzeResponse, AnomalyKind, InfluenceEntry, PipelineFlags,
    SentimentDistribution,
};
pub use message::{FeedRequest, Message};
pub use validate::{ValidationError, parse_feed_request};
