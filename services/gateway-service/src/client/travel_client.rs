use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::client::{ConfigError, FetchError};
use crate::domain::SourceEndpoint;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// プロバイダサービス向け HTTP クライアント
///
/// 内部の `reqwest::Client` はコネクションプールを共有するため、
/// 複製しても同じプールを参照する。
#[derive(Debug, Clone)]
pub struct TravelClient {
    client: Client,
    base_url: Url,
}

impl TravelClient {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(base_url.to_string()));
        }
        // パス付きのベースURLでも末尾に相対パスを連結できるようにする
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// エンドポイントの絶対URLを組み立てる
    pub fn endpoint_url<T>(&self, endpoint: &SourceEndpoint<T>) -> Result<Url, FetchError> {
        self.base_url
            .join(endpoint.path().trim_start_matches('/'))
            .map_err(|e| FetchError::Connection {
                endpoint: endpoint.source(),
                message: format!("invalid endpoint path {}: {}", endpoint.path(), e),
            })
    }

    /// GET して JSON 配列を `Vec<T>` にデコードする
    #[instrument(skip(self, endpoint), fields(endpoint = %endpoint.source()))]
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        endpoint: &SourceEndpoint<T>,
    ) -> Result<Vec<T>, FetchError> {
        let source = endpoint.source();
        let url = self.endpoint_url(endpoint)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Connection {
                endpoint: source,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                endpoint: source,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Connection {
            endpoint: source,
            message: e.to_string(),
        })?;

        let items: Vec<T> = serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            endpoint: source,
            message: e.to_string(),
        })?;

        debug!("decoded {} {} records", items.len(), source);
        Ok(items)
    }
}
