//! Payload constraints enforced before a feed reaches the analysis core.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::{FeedRequest, Message};

pub const MAX_CONTENT_CHARS: usize = 280;

static USER_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^user_[a-z0-9_À-ÿ\x{0300}-\x{036f}]{3,}$")
        .expect("user id pattern is a valid regex")
});

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("message {id}: content exceeds {max} characters ({len})", max = MAX_CONTENT_CHARS)]
    ContentTooLong { id: String, len: usize },

    #[error("message {id}: invalid user_id {user_id:?}")]
    InvalidUserId { id: String, user_id: String },

    #[error("message {id}: hashtag {tag:?} must start with '#'")]
    InvalidHashtag { id: String, tag: String },

    #[error("time_window_minutes must be positive, got {0}")]
    NonPositiveWindow(i64),
}

/// Decodes and validates a raw `POST /analyze-feed` body.
pub fn parse_feed_request(body: &str) -> Result<FeedRequest, ValidationError> {
    let request: FeedRequest = serde_json::from_str(body)?;
    validate_feed_request(&request)?;
    Ok(request)
}

pub fn validate_feed_request(request: &FeedRequest) -> Result<(), ValidationError> {
    if request.time_window_minutes <= 0 {
        return Err(ValidationError::NonPositiveWindow(
            request.time_window_minutes,
        ));
    }
    request.messages.iter().try_for_each(validate_message)
}

pub fn validate_message(message: &Message) -> Result<(), ValidationError> {
    let len = message.content.chars().count();
    if len > MAX_CONTENT_CHARS {
        return Err(ValidationError::ContentTooLong {
            id: message.id.clone(),
            len,
        });
    }

    if !USER_ID_PATTERN.is_match(&message.user_id) {
        return Err(ValidationError::InvalidUserId {
            id: message.id.clone(),
            user_id: message.user_id.clone(),
        });
    }

    if let Some(tag) = message.hashtags.iter().find(|tag| !tag.starts_with('#')) {
        return Err(ValidationError::InvalidHashtag {
            id: message.id.clone(),
            tag: tag.clone(),
        });
    }

    Ok(())
}
