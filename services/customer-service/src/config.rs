use common::DatabaseConfig;
use std::net::SocketAddr;

const DEFAULT_PORT: u16 = 8080;

pub struct CustomerConfig {
    pub listen_addr: SocketAddr,
    pub database: Option<DatabaseConfig>,
}

impl CustomerConfig {
    pub fn from_env() -> Self {
        Self {
            listen_addr: common::listen_addr("CUSTOMER_PORT", DEFAULT_PORT),
            database: DatabaseConfig::from_env(),
        }
    }
}
