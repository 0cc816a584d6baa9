use std::env;

use crate::consts::{limits, ENDPOINT};

/// Client settings. The library never reads the environment on its own;
/// `from_env` exists for the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            timeout_secs: limits::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Read overrides for the fixed endpoint and timeout.
    ///
    /// `GTX_ENDPOINT` replaces the public endpoint and `GTX_TIMEOUT_SECS` the
    /// 30 second timeout. Unset, unparsable or zero values keep the defaults.
    pub fn from_env() -> Self {
        let endpoint = env::var("GTX_ENDPOINT").unwrap_or_else(|_| ENDPOINT.to_string());

        let timeout_secs = env::var("GTX_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(limits::REQUEST_TIMEOUT_SECS);

        Self { endpoint, timeout_secs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_provider_contract() {
        let config = Config::default();
        assert_eq!(config.endpoint, "https://translate.googleapis.com/translate_a/single");
        assert_eq!(config.timeout_secs, 30);
    }
}
