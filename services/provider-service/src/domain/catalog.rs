use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use validator::Validate;

pub use common::{Flight, Hotel, RentalCar};

/// プロバイダが公開するレコード種別
pub trait CatalogItem:
    Debug + Clone + Send + Sync + Serialize + DeserializeOwned + Validate + 'static
{
    /// ログ表示用の名称（複数形）
    const LABEL: &'static str;

    /// 公開エンドポイントのパス
    const PATH: &'static str;
}

impl CatalogItem for Hotel {
    const LABEL: &'static str = "hotels";
    const PATH: &'static str = "/hotels";
}

impl CatalogItem for Flight {
    const LABEL: &'static str = "flights";
    const PATH: &'static str = "/flights";
}

impl CatalogItem for RentalCar {
    const LABEL: &'static str = "rental cars";
    const PATH: &'static str = "/rentalcars";
}

/// 初期データ: ホテル
pub fn seed_hotels() -> Vec<Hotel> {
    vec![
        Hotel::new("Hotel A", "Location A", 4.5),
        Hotel::new("Hotel B", "Location B", 4.0),
        Hotel::new("Hotel C", "Location C", 3.8),
    ]
}

/// 初期データ: フライト
pub fn seed_flights() -> Vec<Flight> {
    vec![
        Flight::new("AB100", "Airline A", "Origin A", "Destination A"),
        Flight::new("AC101", "Airline B", "Origin B", "Destination B"),
        Flight::new("AD102", "Airline C", "Origin C", "Destination C"),
    ]
}

/// 初期データ: レンタカー
pub fn seed_rental_cars() -> Vec<RentalCar> {
    vec![
        RentalCar::new("Company A", "Car model A", "Location A"),
        RentalCar::new("Company B", "Car model B", "Location B"),
        RentalCar::new("Company C", "Car model C", "Location C"),
    ]
}
