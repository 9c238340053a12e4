#![warn(rust_2018_idioms)]

pub mod analysis;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod handler;
pub mod healthcheck;

#[cfg(test)]
mod test_support;

pub use analysis::analyze_feed;
pub use healthcheck::{healthcheck, healthcheck_with_port};
