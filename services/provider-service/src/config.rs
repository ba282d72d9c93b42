use common::DatabaseConfig;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_READ_DELAY_MS: u64 = 2000;

/// プロバイダ設定
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub listen_addr: SocketAddr,
    /// 一覧取得時の人工遅延
    pub read_delay: Duration,
    /// 未設定ならインメモリ
    pub database: Option<DatabaseConfig>,
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        let read_delay_ms = std::env::var("PROVIDER_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_READ_DELAY_MS);

        Self {
            listen_addr: common::listen_addr("PROVIDER_PORT", DEFAULT_PORT),
            read_delay: Duration::from_millis(read_delay_ms),
            database: DatabaseConfig::from_env(),
        }
    }
}
