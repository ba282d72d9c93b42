use std::sync::Arc;

use gateway_service::config::GatewayConfig;
use gateway_service::handlers::create_router;
use gateway_service::service::TravelService;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    common::init_tracing();

    let config = GatewayConfig::from_env();
    let client = match config.build_client() {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("invalid gateway configuration: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!("gateway-service targeting {}", client.base_url());

    let app = create_router(Arc::new(TravelService::new(client)));

    let addr = config.listen_addr;
    tracing::info!("gateway-service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
