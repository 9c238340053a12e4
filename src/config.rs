use std::env;

use crate::error::AnalyzerError;

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Interface the HTTP server binds to
    pub http_host: String,
    /// HTTP server port (analyze-feed + health)
    pub http_port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_host: DEFAULT_HTTP_HOST.to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        validate_host(&self.http_host)?;
        validate_port(self.http_port)?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

/// Validates that the host is not empty or whitespace-only.
fn validate_host(host: &str) -> Result<(), AnalyzerError> {
    if host.trim().is_empty() {
        return Err(AnalyzerError::Config("Host cannot be empty".into()));
    }
    Ok(())
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), AnalyzerError> {
    if port == 0 {
        return Err(AnalyzerError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

/// Parses the configured HTTP port, falling back to the default when unset.
pub fn http_port_from_env() -> Result<u16, AnalyzerError> {
    match env::var("HTTP_PORT") {
        Ok(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|e| AnalyzerError::Config(format!("Invalid HTTP_PORT {raw:?}: {e}"))),
        Err(_) => Ok(DEFAULT_HTTP_PORT),
    }
}

pub fn get_configuration() -> Result<Settings, AnalyzerError> {
    let http_host = env::var("HTTP_HOST").unwrap_or_else(|_| DEFAULT_HTTP_HOST.to_string());
    let http_port = http_port_from_env()?;

    let settings = Settings {
        http_host,
        http_port,
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}
