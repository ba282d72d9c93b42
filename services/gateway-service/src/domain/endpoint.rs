use std::fmt;
use std::marker::PhantomData;

use common::{Flight, Hotel, RentalCar};

pub const HOTELS_PATH: &str = "/hotels";
pub const FLIGHTS_PATH: &str = "/flights";
pub const RENTAL_CARS_PATH: &str = "/rentalcars";

/// 取得元の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Hotels,
    Flights,
    RentalCars,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Hotels => "hotels",
            Source::Flights => "flights",
            Source::RentalCars => "rental_cars",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// リモートリソース1件の記述子
///
/// `T` はレスポンスの JSON 配列をデコードする要素型。
#[derive(Debug)]
pub struct SourceEndpoint<T> {
    source: Source,
    path: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> SourceEndpoint<T> {
    pub fn new(source: Source, path: impl Into<String>) -> Self {
        Self {
            source,
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<T> Clone for SourceEndpoint<T> {
    fn clone(&self) -> Self {
        Self::new(self.source, self.path.clone())
    }
}

/// 集約対象となる固定3エンドポイント
#[derive(Debug, Clone)]
pub struct TravelEndpoints {
    pub hotels: SourceEndpoint<Hotel>,
    pub flights: SourceEndpoint<Flight>,
    pub rental_cars: SourceEndpoint<RentalCar>,
}

impl Default for TravelEndpoints {
    fn default() -> Self {
        Self {
            hotels: SourceEndpoint::new(Source::Hotels, HOTELS_PATH),
            flights: SourceEndpoint::new(Source::Flights, FLIGHTS_PATH),
            rental_cars: SourceEndpoint::new(Source::RentalCars, RENTAL_CARS_PATH),
        }
    }
}

/// 取得モード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// 1件ずつ順に取得
    Sequential,
    /// 全件を同時に発行して待ち合わせ
    Concurrent,
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchMode::Sequential => f.write_str("sequential"),
            FetchMode::Concurrent => f.write_str("concurrent"),
        }
    }
}
