use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{CreateCustomerRequest, Customer};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Customer not found: {0}")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// 顧客リポジトリインターフェース
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 顧客を作成
    async fn create(&self, request: CreateCustomerRequest) -> RepositoryResult<Customer>;

    /// IDで顧客を取得
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Customer>>;
}
