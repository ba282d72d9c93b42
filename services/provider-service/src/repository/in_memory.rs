use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::CatalogItem;
use crate::repository::{CatalogRepository, RepositoryError, RepositoryResult};

/// インメモリカタログリポジトリ（DB 未設定時・テスト用）
pub struct InMemoryCatalogRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T: CatalogItem> InMemoryCatalogRepository<T> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

impl<T: CatalogItem> Default for InMemoryCatalogRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: CatalogItem> CatalogRepository<T> for InMemoryCatalogRepository<T> {
    async fn save(&self, item: T) -> RepositoryResult<T> {
        let mut items = self
            .items
            .write()
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        items.push(item.clone());

        Ok(item)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<T>> {
        let items = self
            .items
            .read()
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(items.clone())
    }
}
