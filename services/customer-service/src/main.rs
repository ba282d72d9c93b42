use std::sync::Arc;

use customer_service::config::CustomerConfig;
use customer_service::handlers::{create_router, DynCustomerRepository};
use customer_service::repository::{
    InMemoryCustomerRepository, PostgresCustomerRepository, MIGRATOR,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    common::init_tracing();

    let config = CustomerConfig::from_env();

    let repo: DynCustomerRepository = match &config.database {
        Some(database) => match database.connect_and_migrate(&MIGRATOR).await {
            Ok(pool) => Arc::new(PostgresCustomerRepository::new(pool)),
            Err(err) => {
                tracing::error!("failed to connect to database: {}", err);
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory repository");
            Arc::new(InMemoryCustomerRepository::new())
        }
    };

    let app = create_router(repo);

    let addr = config.listen_addr;
    tracing::info!("customer-service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
