use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{CreateCustomerRequest, Customer};
use crate::repository::{CustomerRepository, RepositoryError, RepositoryResult};

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// PostgreSQL 顧客リポジトリ
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: Uuid,
    mail: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            mail: row.mail,
        }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(err.to_string())
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn create(&self, request: CreateCustomerRequest) -> RepositoryResult<Customer> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "INSERT INTO customer (id, mail) VALUES ($1, $2) RETURNING id, mail",
        )
        .bind(Uuid::new_v4())
        .bind(&request.mail)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        tracing::info!("Saved customer with id {} in database", row.id);
        Ok(Customer::from(row))
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>("SELECT id, mail FROM customer WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(Customer::from))
    }
}
