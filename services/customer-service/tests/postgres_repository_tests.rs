#![cfg(feature = "postgres-tests")]

use customer_service::domain::CreateCustomerRequest;
use customer_service::repository::{CustomerRepository, PostgresCustomerRepository};
use sqlx::PgPool;
use uuid::Uuid;

fn default_request() -> CreateCustomerRequest {
    CreateCustomerRequest {
        mail: "bob@gmail.com".to_string(),
    }
}

// 1. 正常作成
#[sqlx::test(migrator = "customer_service::repository::MIGRATOR")]
async fn test_create_customer(pool: PgPool) {
    let repo = PostgresCustomerRepository::new(pool);

    let customer = repo.create(default_request()).await.unwrap();

    assert_eq!(customer.mail, "bob@gmail.com");
}

// 2. ID 検索
#[sqlx::test(migrator = "customer_service::repository::MIGRATOR")]
async fn test_find_by_id(pool: PgPool) {
    let repo = PostgresCustomerRepository::new(pool);
    let created = repo.create(default_request()).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();

    assert_eq!(found, Some(created));
}

// 3. 存在しない ID → None
#[sqlx::test(migrator = "customer_service::repository::MIGRATOR")]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PostgresCustomerRepository::new(pool);

    let found = repo.find_by_id(Uuid::new_v4()).await.unwrap();

    assert!(found.is_none());
}
