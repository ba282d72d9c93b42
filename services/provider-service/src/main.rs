use provider_service::config::ProviderConfig;
use provider_service::handlers::create_router;
use provider_service::repository::MIGRATOR;
use provider_service::service::ProviderServices;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    common::init_tracing();

    let config = ProviderConfig::from_env();

    let services = match &config.database {
        Some(database) => match database.connect_and_migrate(&MIGRATOR).await {
            Ok(pool) => ProviderServices::postgres(pool, config.read_delay),
            Err(err) => {
                tracing::error!("failed to connect to database: {}", err);
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory repositories");
            ProviderServices::in_memory(config.read_delay)
        }
    };

    let app = create_router(services);

    let addr = config.listen_addr;
    tracing::info!(
        "provider-service listening on {} (read delay {:?})",
        addr,
        config.read_delay
    );

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
