//! Runtime configuration
//!
//! Settings shared by the console games and the web server. Values come from
//! command-line flags, with environment variable fallbacks for the server.

use clap::Args;
use std::num::NonZeroU32;

/// Attempts per game in the console and TUI modes
pub const DEFAULT_MAX_ATTEMPTS: NonZeroU32 = NonZeroU32::new(6).unwrap();

/// Attempts per game in the web mode
pub const DEFAULT_WEB_MAX_ATTEMPTS: NonZeroU32 = NonZeroU32::new(15).unwrap();

/// Game rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: NonZeroU32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_attempts: NonZeroU32) -> Self {
        Self { max_attempts }
    }

    /// Rules for the web game
    #[must_use]
    pub const fn web() -> Self {
        Self::new(DEFAULT_WEB_MAX_ATTEMPTS)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(GameConfig::default().max_attempts.get(), 6);
        assert_eq!(GameConfig::web().max_attempts.get(), 15);

        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 5000);
    }
}
