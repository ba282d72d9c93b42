use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

use crate::domain::{CreateCustomerRequest, Customer};
use crate::repository::{CustomerRepository, RepositoryError, RepositoryResult};

/// インメモリ顧客リポジトリ（テスト用）
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<Uuid, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, request: CreateCustomerRequest) -> RepositoryResult<Customer> {
        let mut customers = self
            .customers
            .write()
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let customer = Customer::new(request.mail);
        customers.insert(customer.id, customer.clone());

        Ok(customer)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Customer>> {
        let customers = self
            .customers
            .read()
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(customers.get(&id).cloned())
    }
}
