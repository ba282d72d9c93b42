use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Flight, Hotel, RentalCar};
use crate::repository::{CatalogRepository, RepositoryError, RepositoryResult};

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(err.to_string())
}

/// SQLx の行を表す中間型（domain 層と SQLx の結合を回避）
#[derive(Debug, sqlx::FromRow)]
struct HotelRow {
    hotel_name: String,
    location: String,
    rating: f64,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            name: row.hotel_name,
            location: row.location,
            rating: row.rating,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct FlightRow {
    flight_number: String,
    airline: String,
    origin: String,
    destination: String,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Flight {
            flight_number: row.flight_number,
            airline: row.airline,
            origin: row.origin,
            destination: row.destination,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct RentalCarRow {
    company: String,
    car_model: String,
    location: String,
}

impl From<RentalCarRow> for RentalCar {
    fn from(row: RentalCarRow) -> Self {
        RentalCar {
            company: row.company,
            car_model: row.car_model,
            location: row.location,
        }
    }
}

/// PostgreSQL ホテルリポジトリ
pub struct PostgresHotelRepository {
    pool: PgPool,
}

impl PostgresHotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository<Hotel> for PostgresHotelRepository {
    async fn save(&self, hotel: Hotel) -> RepositoryResult<Hotel> {
        let id = Uuid::new_v4();

        let row = sqlx::query_as::<_, HotelRow>(
            r#"
            INSERT INTO hotel (id, hotel_name, location, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING hotel_name, location, rating
            "#,
        )
        .bind(id)
        .bind(&hotel.name)
        .bind(&hotel.location)
        .bind(hotel.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        tracing::debug!("saved hotel with id {}", id);
        Ok(Hotel::from(row))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Hotel>> {
        let rows = sqlx::query_as::<_, HotelRow>(
            "SELECT hotel_name, location, rating FROM hotel ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }
}

/// PostgreSQL フライトリポジトリ
pub struct PostgresFlightRepository {
    pool: PgPool,
}

impl PostgresFlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository<Flight> for PostgresFlightRepository {
    async fn save(&self, flight: Flight) -> RepositoryResult<Flight> {
        let id = Uuid::new_v4();

        let row = sqlx::query_as::<_, FlightRow>(
            r#"
            INSERT INTO flight (id, flight_number, airline, origin, destination)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING flight_number, airline, origin, destination
            "#,
        )
        .bind(id)
        .bind(&flight.flight_number)
        .bind(&flight.airline)
        .bind(&flight.origin)
        .bind(&flight.destination)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        tracing::debug!("saved flight with id {}", id);
        Ok(Flight::from(row))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, FlightRow>(
            "SELECT flight_number, airline, origin, destination FROM flight ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }
}

/// PostgreSQL レンタカーリポジトリ
pub struct PostgresRentalCarRepository {
    pool: PgPool,
}

impl PostgresRentalCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository<RentalCar> for PostgresRentalCarRepository {
    async fn save(&self, rental_car: RentalCar) -> RepositoryResult<RentalCar> {
        let id = Uuid::new_v4();

        let row = sqlx::query_as::<_, RentalCarRow>(
            r#"
            INSERT INTO rental_car (id, company, car_model, location)
            VALUES ($1, $2, $3, $4)
            RETURNING company, car_model, location
            "#,
        )
        .bind(id)
        .bind(&rental_car.company)
        .bind(&rental_car.car_model)
        .bind(&rental_car.location)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        tracing::debug!("saved rental car with id {}", id);
        Ok(RentalCar::from(row))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<RentalCar>> {
        let rows = sqlx::query_as::<_, RentalCarRow>(
            "SELECT company, car_model, location FROM rental_car ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(RentalCar::from).collect())
    }
}
