use serde::{Deserialize, Serialize};
use validator::Validate;

/// ホテル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[validate(length(min = 1, max = 255, message = "ホテル名は1〜255文字で入力してください"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "所在地は1〜255文字で入力してください"))]
    pub location: String,

    #[validate(range(min = 0.0, max = 5.0, message = "評価は0〜5の範囲で入力してください"))]
    pub rating: f64,
}

impl Hotel {
    pub fn new(name: impl Into<String>, location: impl Into<String>, rating: f64) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            rating,
        }
    }
}

/// フライト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[validate(length(min = 1, max = 255, message = "便名は1〜255文字で入力してください"))]
    pub flight_number: String,

    #[validate(length(min = 1, max = 255, message = "航空会社は1〜255文字で入力してください"))]
    pub airline: String,

    #[validate(length(min = 1, max = 255, message = "出発地は1〜255文字で入力してください"))]
    pub origin: String,

    #[validate(length(min = 1, max = 255, message = "目的地は1〜255文字で入力してください"))]
    pub destination: String,
}

impl Flight {
    pub fn new(
        flight_number: impl Into<String>,
        airline: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            airline: airline.into(),
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// レンタカー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RentalCar {
    #[validate(length(min = 1, max = 255, message = "会社名は1〜255文字で入力してください"))]
    pub company: String,

    #[validate(length(min = 1, max = 255, message = "車種は1〜255文字で入力してください"))]
    pub car_model: String,

    #[validate(length(min = 1, max = 255, message = "所在地は1〜255文字で入力してください"))]
    pub location: String,
}

impl RentalCar {
    pub fn new(
        company: impl Into<String>,
        car_model: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            car_model: car_model.into(),
            location: location.into(),
        }
    }
}

/// 旅行情報の集約結果（3ソースを個別に取得したもの）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelDetails {
    pub flights: Vec<Flight>,
    pub hotels: Vec<Hotel>,
    pub rental_cars: Vec<RentalCar>,
}
