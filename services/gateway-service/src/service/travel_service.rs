use std::future::Future;
use std::time::Instant;

use common::TravelDetails;

use crate::client::{FetchError, TravelClient};
use crate::domain::{FetchMode, TravelEndpoints};

/// 旅行情報集約サービス
///
/// ホテル・フライト・レンタカーの3エンドポイントから取得して
/// [`TravelDetails`] にまとめる。順次取得と同時取得の2モードを持ち、
/// どちらも結果の内容は同一で、所要時間だけが異なる。
#[derive(Debug, Clone)]
pub struct TravelService {
    client: TravelClient,
    endpoints: TravelEndpoints,
}

impl TravelService {
    pub fn new(client: TravelClient) -> Self {
        Self::with_endpoints(client, TravelEndpoints::default())
    }

    pub fn with_endpoints(client: TravelClient, endpoints: TravelEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn endpoints(&self) -> &TravelEndpoints {
        &self.endpoints
    }

    /// 設定済みエンドポイントに対して指定モードで取得
    pub async fn fetch(&self, mode: FetchMode) -> Result<TravelDetails, FetchError> {
        match mode {
            FetchMode::Sequential => self.fetch_sequential(&self.endpoints).await,
            FetchMode::Concurrent => self.fetch_concurrent(&self.endpoints).await,
        }
    }

    /// 1件ずつ順に取得（所要時間は各呼び出しの合計）
    pub async fn fetch_sequential(
        &self,
        endpoints: &TravelEndpoints,
    ) -> Result<TravelDetails, FetchError> {
        self.timed(FetchMode::Sequential, async {
            let hotels = self.client.fetch_list(&endpoints.hotels).await?;
            let flights = self.client.fetch_list(&endpoints.flights).await?;
            let rental_cars = self.client.fetch_list(&endpoints.rental_cars).await?;

            Ok(TravelDetails {
                flights,
                hotels,
                rental_cars,
            })
        })
        .await
    }

    /// 3件を同時に発行して全件を待ち合わせる（所要時間は最も遅い呼び出し程度）
    ///
    /// 最初のエラーで即座に失敗し、残りの呼び出しは破棄される。
    pub async fn fetch_concurrent(
        &self,
        endpoints: &TravelEndpoints,
    ) -> Result<TravelDetails, FetchError> {
        self.timed(FetchMode::Concurrent, async {
            let (hotels, flights, rental_cars) = tokio::try_join!(
                self.client.fetch_list(&endpoints.hotels),
                self.client.fetch_list(&endpoints.flights),
                self.client.fetch_list(&endpoints.rental_cars)
            )?;

            Ok(TravelDetails {
                flights,
                hotels,
                rental_cars,
            })
        })
        .await
    }

    async fn timed<F>(&self, mode: FetchMode, fetch: F) -> Result<TravelDetails, FetchError>
    where
        F: Future<Output = Result<TravelDetails, FetchError>>,
    {
        tracing::info!(
            mode = %mode,
            target = %self.client.base_url(),
            "Fetching travel details"
        );
        let start = Instant::now();

        let result = fetch.await;

        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &result {
            Ok(_) => tracing::info!(mode = %mode, elapsed_ms, "Fetched travel details"),
            Err(err) => tracing::warn!(
                mode = %mode,
                elapsed_ms,
                endpoint = err.source_name(),
                error = %err,
                "Failed to fetch travel details"
            ),
        }

        result
    }
}
