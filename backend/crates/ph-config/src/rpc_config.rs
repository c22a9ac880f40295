use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

// RPC constraints
pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9000";

/// Transport settings for reaching profile servers.
///
/// Every call (attach, stop, start) is bounded by `timeout_secs`; there is
/// no retry setting because a failed call is never retried automatically.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Base URL of the profile-server control endpoint
    pub base_url: String,
    /// Upper bound in seconds for a single RPC round trip
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RpcConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::rpc(format!(
                "rpc.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        // The RPC client is built without a TLS backend.
        if !self.base_url.starts_with("http://") {
            return Err(ConfigError::rpc(format!(
                "rpc.base_url must start with http://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
