use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::time::Duration;

const POOL_SIZE: u32 = 5;
const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(300);
const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// PostgreSQL 接続設定
///
/// 環境変数が揃っていなければ `None` になり、各サービスはインメモリで起動する。
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool_size: POOL_SIZE,
        }
    }

    /// `DATABASE_URL` 優先、なければ `POSTGRES_HOST` ほか個別の変数から
    ///
    /// プールサイズは `DATABASE_POOL_SIZE` で上書きできる。
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("DATABASE_URL")
            .ok()
            .or_else(|| url_from_parts(|key| std::env::var(key).ok()))?;

        let mut config = Self::new(url);
        if let Some(size) = std::env::var("DATABASE_POOL_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.pool_size = size;
        }
        Some(config)
    }

    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.pool_size)
            .acquire_timeout(POOL_ACQUIRE_TIMEOUT)
            .idle_timeout(POOL_IDLE_TIMEOUT)
            .connect(&self.url)
            .await
    }

    /// プールを作成し、サービスのマイグレーションを適用する
    pub async fn connect_and_migrate(&self, migrator: &Migrator) -> Result<PgPool, sqlx::Error> {
        let pool = self.create_pool().await?;
        migrator.run(&pool).await?;
        tracing::info!(pool_size = self.pool_size, "database migrations applied");
        Ok(pool)
    }
}

fn url_from_parts(var: impl Fn(&str) -> Option<String>) -> Option<String> {
    let port = var("POSTGRES_PORT")
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_POSTGRES_PORT);

    let options = PgConnectOptions::new()
        .host(&var("POSTGRES_HOST")?)
        .port(port)
        .username(&var("POSTGRES_USER")?)
        .password(&var("POSTGRES_PASSWORD")?)
        .database(&var("POSTGRES_DB")?);

    Some(options.to_url_lossy().to_string())
}
