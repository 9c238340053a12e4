use feed_analyzer::error::AnalyzerError;

#[tokio::main]
async fn main() -> Result<(), AnalyzerError> {
    feed_analyzer::app::run().await
}
