mod router;
pub mod server;
pub mod tracing;

use crate::config;
use crate::error::AnalyzerError;

pub use router::main_router;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), AnalyzerError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!("Loaded settings");

    server::serve(main_router(), &settings).await
}
