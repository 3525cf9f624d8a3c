// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! Client configuration and server address resolution.

use std::time::Duration;

use url::Url;

use crate::error::Result;

/// Default guessing server, matching the demo server's default port.
pub const DEFAULT_SERVER: &str = "http://localhost:8080";

/// Delay between consecutive resolution steps.
pub const DEFAULT_STAGGER_MS: u64 = 2000;

/// Per-request timeout. Guesses can take a while on cold models.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Total number of sample pictures the server ships.
pub const SAMPLE_POOL_SIZE: u32 = 30;

/// How many samples the gallery shows per run.
pub const SAMPLES_SHOWN: usize = 8;

/// Everything the client needs to know, resolved up front and passed in
/// explicitly — no ambient lookups.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the guessing server.
    pub server: Url,
    /// Delay between scheduled resolution steps.
    pub stagger: Duration,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
    /// Size of the sample pool on the server.
    pub sample_pool: u32,
    /// Number of samples shown in a gallery.
    pub samples_shown: usize,
}

impl Config {
    /// Build a config pointing at the given server, with defaults for
    /// everything else.
    pub fn new(server: &str) -> Result<Self> {
        Ok(Self {
            server: Url::parse(server)?,
            stagger: Duration::from_millis(DEFAULT_STAGGER_MS),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            sample_pool: SAMPLE_POOL_SIZE,
            samples_shown: SAMPLES_SHOWN,
        })
    }

    /// Override the stagger delay.
    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }
}

/// Resolve the server address: explicit flag, then the
/// `PIXELGUESS_SERVER` environment variable, then the default.
pub fn resolve_server(explicit: Option<&str>) -> String {
    if let Some(server) = explicit {
        return server.to_string();
    }

    if let Ok(env_server) = std::env::var("PIXELGUESS_SERVER") {
        return env_server;
    }

    DEFAULT_SERVER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_server_wins() {
        assert_eq!(
            resolve_server(Some("http://demo:9000")),
            "http://demo:9000"
        );
    }

    #[test]
    fn test_default_server() {
        // Explicit None and no env override set in this test binary.
        if std::env::var("PIXELGUESS_SERVER").is_err() {
            assert_eq!(resolve_server(None), DEFAULT_SERVER);
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new(DEFAULT_SERVER).unwrap();
        assert_eq!(config.stagger, Duration::from_millis(2000));
        assert_eq!(config.sample_pool, 30);
        assert_eq!(config.samples_shown, 8);
    }

    #[test]
    fn test_bad_url_rejected() {
        assert!(Config::new("not a url").is_err());
    }
}
