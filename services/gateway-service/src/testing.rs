//! テスト用のスタブプロバイダ
//!
//! 固定レスポンスと人工遅延を返す axum サーバを空きポートで起動する。

use std::net::SocketAddr;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::domain::{FLIGHTS_PATH, HOTELS_PATH, RENTAL_CARS_PATH};

/// スタブエンドポイント1件分の応答
#[derive(Debug, Clone)]
pub struct StubEndpoint {
    pub status: StatusCode,
    pub body: serde_json::Value,
    pub delay: Duration,
}

impl StubEndpoint {
    pub fn ok<T: Serialize>(items: &[T]) -> Self {
        Self::raw(StatusCode::OK, serde_json::json!(items))
    }

    pub fn empty() -> Self {
        Self::raw(StatusCode::OK, serde_json::json!([]))
    }

    pub fn status(status: StatusCode) -> Self {
        Self::raw(status, serde_json::json!({ "error": "stubbed failure" }))
    }

    pub fn raw(status: StatusCode, body: serde_json::Value) -> Self {
        Self {
            status,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// `/hotels` `/flights` `/rentalcars` を持つスタブルーター
pub fn stub_router(hotels: StubEndpoint, flights: StubEndpoint, rental_cars: StubEndpoint) -> Router {
    Router::new()
        .route(HOTELS_PATH, stub_route(hotels))
        .route(FLIGHTS_PATH, stub_route(flights))
        .route(RENTAL_CARS_PATH, stub_route(rental_cars))
}

fn stub_route(stub: StubEndpoint) -> axum::routing::MethodRouter {
    get(move || {
        let stub = stub.clone();
        async move {
            tokio::time::sleep(stub.delay).await;
            (stub.status, Json(stub.body))
        }
    })
}

/// ドロップ時に停止するスタブサーバ
pub struct StubProvider {
    pub addr: SocketAddr,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl StubProvider {
    pub async fn start(router: Router) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for StubProvider {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
