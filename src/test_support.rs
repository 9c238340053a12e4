//! Shared test support utilities
//!
//! Provides a `MessageBuilder` so unit tests can describe feed messages by
//! the fields they care about.

use crate::domain::Message;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Fixed reference instant used as "now" by most tests.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 10, 10, 0, 0).unwrap()
}

pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    pub fn new(user_id: &str) -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            message: Message {
                id: format!("msg_{id:03}"),
                content: String::new(),
                timestamp: base_time(),
                user_id: user_id.to_string(),
                hashtags: Vec::new(),
                reactions: 0,
                shares: 0,
                views: 0,
            },
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.message.content = content.to_string();
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.message.timestamp = timestamp;
        self
    }

    pub fn hashtags(mut self, tags: &[&str]) -> Self {
        self.message.hashtags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn engagement(mut self, reactions: u64, shares: u64, views: u64) -> Self {
        self.message.reactions = reactions;
        self.message.shares = shares;
        self.message.views = views;
        self
    }

    pub fn build(self) -> Message {
        self.message
    }
}
