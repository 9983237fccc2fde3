//! Application configuration model.

use serde::{Deserialize, Serialize};

fn default_response_delay_ms() -> u64 {
    1500
}

fn default_auth_delay_ms() -> u64 {
    800
}

/// Configuration loaded from `config.toml` in the data directory.
///
/// Every field has a default, so a missing file yields a usable config. A
/// malformed file is an error at startup: unlike data blobs, the config is
/// authored by hand and silently discarding it would hide typos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsctipConfig {
    /// Simulated thinking time before an assistant reply, in milliseconds.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
    /// Simulated network delay for auth operations, in milliseconds.
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,
    /// Seed for the response-selection RNG. Unset means a random seed.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for OsctipConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: default_response_delay_ms(),
            auth_delay_ms: default_auth_delay_ms(),
            rng_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OsctipConfig::default();
        assert_eq!(config.response_delay_ms, 1500);
        assert_eq!(config.auth_delay_ms, 800);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: OsctipConfig = toml::from_str("rng_seed = 7").unwrap();
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.response_delay_ms, 1500);
    }
}
