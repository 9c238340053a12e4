use crate::handler::analyze::analyze_feed_handler;
use crate::handler::health::health_handler;
use axum::Router;
use axum::routing::{get, post};

/// Build the HTTP router (health + feed analysis).
pub fn main_router() -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health_handler));

    let analyze_router = Router::new().route("/analyze-feed", post(analyze_feed_handler));

    Router::new().merge(v1_health_router).merge(analyze_router)
}
