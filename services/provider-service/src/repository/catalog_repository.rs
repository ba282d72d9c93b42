use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CatalogItem;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// カタログリポジトリインターフェース（ホテル・フライト・レンタカー共通）
#[async_trait]
pub trait CatalogRepository<T: CatalogItem>: Send + Sync {
    /// レコードを保存し、保存後の値を返す
    async fn save(&self, item: T) -> RepositoryResult<T>;

    /// 全件を登録順に取得
    async fn find_all(&self) -> RepositoryResult<Vec<T>>;
}
