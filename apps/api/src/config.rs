use anyhow::{anyhow, Context, Result};

use crate::jd::UnknownHeadingPolicy;

const DEFAULT_MAX_JD_BYTES: usize = 256 * 1024;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Request body limit for parser and draft endpoints.
    pub max_jd_bytes: usize,
    pub unknown_headings: UnknownHeadingPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_jd_bytes: DEFAULT_MAX_JD_BYTES,
            unknown_headings: UnknownHeadingPolicy::Discard,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            max_jd_bytes: match lookup("MAX_JD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_JD_BYTES must be a positive integer")?,
                None => defaults.max_jd_bytes,
            },
            unknown_headings: match lookup("JD_UNKNOWN_HEADINGS") {
                Some(v) => v
                    .parse::<UnknownHeadingPolicy>()
                    .map_err(|e| anyhow!(e))
                    .context("JD_UNKNOWN_HEADINGS is invalid")?,
                None => defaults.unknown_headings,
            },
        })
    }
}
