use crate::config::Config;
use crate::jd::ParseOptions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parser options derived from configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            unknown_headings: self.config.unknown_headings,
        }
    }
}
