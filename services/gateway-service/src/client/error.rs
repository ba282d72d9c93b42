use thiserror::Error;

use crate::domain::Source;

/// エンドポイント取得エラー（どのソースで失敗したかを保持）
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Connection to {endpoint} failed: {message}")]
    Connection { endpoint: Source, message: String },

    #[error("{endpoint} returned HTTP {status}")]
    HttpStatus { endpoint: Source, status: u16 },

    #[error("Failed to decode {endpoint} response: {message}")]
    Decode { endpoint: Source, message: String },
}

impl FetchError {
    pub fn endpoint(&self) -> Source {
        match self {
            FetchError::Connection { endpoint, .. }
            | FetchError::HttpStatus { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => *endpoint,
        }
    }

    /// 失敗したソース名
    pub fn source_name(&self) -> &'static str {
        self.endpoint().as_str()
    }
}

/// クライアント構築時のエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid target URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Target URL cannot be used as a base: {0}")]
    NotABase(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
