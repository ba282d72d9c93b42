use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;

use crate::domain::{
    seed_flights, seed_hotels, seed_rental_cars, CatalogItem, Flight, Hotel, RentalCar,
};
use crate::repository::{
    CatalogRepository, InMemoryCatalogRepository, PostgresFlightRepository,
    PostgresHotelRepository, PostgresRentalCarRepository, RepositoryResult,
};

pub type DynCatalogRepository<T> = Arc<dyn CatalogRepository<T>>;

/// カタログサービス
///
/// 一覧取得には人工的な遅延を入れ、遅いリモート呼び出しを模擬する。
/// ゲートウェイ側の順次取得と同時取得の差を観測するためのもの。
pub struct CatalogService<T: CatalogItem> {
    repo: DynCatalogRepository<T>,
    read_delay: Duration,
}

impl<T: CatalogItem> CatalogService<T> {
    pub fn new(repo: DynCatalogRepository<T>, read_delay: Duration) -> Self {
        Self { repo, read_delay }
    }

    pub async fn save(&self, item: T) -> RepositoryResult<T> {
        tracing::info!("Saving {} {:?} to database...", T::LABEL, item);

        self.repo.save(item).await
    }

    pub async fn find_all(&self) -> RepositoryResult<Vec<T>> {
        tracing::info!("Retrieving all {} from database...", T::LABEL);

        let items = self.repo.find_all().await?;
        tokio::time::sleep(self.read_delay).await;

        tracing::info!("Found {} {}", items.len(), T::LABEL);
        Ok(items)
    }
}

/// プロバイダが公開する3サービス一式
#[derive(Clone)]
pub struct ProviderServices {
    pub hotels: Arc<CatalogService<Hotel>>,
    pub flights: Arc<CatalogService<Flight>>,
    pub rental_cars: Arc<CatalogService<RentalCar>>,
}

impl ProviderServices {
    /// 初期データ入りのインメモリ構成
    pub fn in_memory(read_delay: Duration) -> Self {
        Self {
            hotels: Arc::new(CatalogService::<Hotel>::new(
                Arc::new(InMemoryCatalogRepository::with_items(seed_hotels())),
                read_delay,
            )),
            flights: Arc::new(CatalogService::<Flight>::new(
                Arc::new(InMemoryCatalogRepository::with_items(seed_flights())),
                read_delay,
            )),
            rental_cars: Arc::new(CatalogService::<RentalCar>::new(
                Arc::new(InMemoryCatalogRepository::with_items(seed_rental_cars())),
                read_delay,
            )),
        }
    }

    /// PostgreSQL 構成（初期データはマイグレーションで投入済み）
    pub fn postgres(pool: PgPool, read_delay: Duration) -> Self {
        Self {
            hotels: Arc::new(CatalogService::<Hotel>::new(
                Arc::new(PostgresHotelRepository::new(pool.clone())),
                read_delay,
            )),
            flights: Arc::new(CatalogService::<Flight>::new(
                Arc::new(PostgresFlightRepository::new(pool.clone())),
                read_delay,
            )),
            rental_cars: Arc::new(CatalogService::<RentalCar>::new(
                Arc::new(PostgresRentalCarRepository::new(pool)),
                read_delay,
            )),
        }
    }
}
