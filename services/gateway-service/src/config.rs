use std::net::SocketAddr;
use std::time::Duration;

use crate::client::{ConfigError, TravelClient, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};

const DEFAULT_TARGET_URL: &str = "http://localhost:8081";
const DEFAULT_PORT: u16 = 8082;

/// ゲートウェイ設定
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// プロバイダサービスのベースURL
    pub target_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub listen_addr: SocketAddr,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            target_url: std::env::var("GATEWAY_TARGET_URL").unwrap_or(defaults.target_url),
            request_timeout: secs_from_env("GATEWAY_REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout),
            connect_timeout: secs_from_env("GATEWAY_CONNECT_TIMEOUT_SECS")
                .unwrap_or(defaults.connect_timeout),
            listen_addr: common::listen_addr("GATEWAY_PORT", DEFAULT_PORT),
        }
    }

    pub fn build_client(&self) -> Result<TravelClient, ConfigError> {
        TravelClient::with_config(&self.target_url, self.request_timeout, self.connect_timeout)
    }
}

fn secs_from_env(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
}
