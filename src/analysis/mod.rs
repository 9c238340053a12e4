//! Feed analysis core.
//!
//! Everything in here is synchronous and free of I/O; [`analyze_feed`] is a
//! pure function of its input apart from the elapsed-time stamp.

pub mod anomaly;
pub mod author;
pub mod influence;
pub mod lexicon;
pub mod pipeline;
pub mod sentiment;
pub mod text;
pub mod trending;

pub use pipeline::analyze_feed;
pub use sentiment::Polarity;
