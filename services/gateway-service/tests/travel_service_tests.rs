use std::time::{Duration, Instant};

use axum::http::StatusCode;
use common::{Flight, Hotel, RentalCar, TravelDetails};
use gateway_service::testing::{stub_router, StubEndpoint, StubProvider};
use gateway_service::{FetchError, FetchMode, Source, TravelClient, TravelService};
use tracing_test::traced_test;

fn hotels() -> Vec<Hotel> {
    vec![
        Hotel::new("Hotel A", "Location A", 4.5),
        Hotel::new("Hotel B", "Location B", 4.0),
        Hotel::new("Hotel C", "Location C", 3.8),
    ]
}

fn flights() -> Vec<Flight> {
    vec![
        Flight::new("AB100", "Airline A", "Origin A", "Destination A"),
        Flight::new("AC101", "Airline B", "Origin B", "Destination B"),
        Flight::new("AD102", "Airline C", "Origin C", "Destination C"),
    ]
}

fn rental_cars() -> Vec<RentalCar> {
    vec![
        RentalCar::new("Company A", "Car model A", "Location A"),
        RentalCar::new("Company B", "Car model B", "Location B"),
        RentalCar::new("Company C", "Car model C", "Location C"),
    ]
}

async fn start_provider(
    hotels: StubEndpoint,
    flights: StubEndpoint,
    rental_cars: StubEndpoint,
) -> (StubProvider, TravelService) {
    let provider = StubProvider::start(stub_router(hotels, flights, rental_cars))
        .await
        .unwrap();
    let client = TravelClient::new(&provider.base_url()).unwrap();
    (provider, TravelService::new(client))
}

// 1. 単一レコードのシナリオ（両モードで同じ結果）
#[tokio::test]
async fn test_scenario_single_record_per_source() {
    let hotel = Hotel::new("Hotel A", "Location A", 4.5);
    let flight = Flight::new("AB100", "Airline A", "Origin A", "Destination A");
    let rental_car = RentalCar::new("Company A", "Car model A", "Location A");

    let (_provider, service) = start_provider(
        StubEndpoint::raw(
            StatusCode::OK,
            serde_json::json!([{"name":"Hotel A","location":"Location A","rating":4.5}]),
        ),
        StubEndpoint::raw(
            StatusCode::OK,
            serde_json::json!([{"flightNumber":"AB100","airline":"Airline A","origin":"Origin A","destination":"Destination A"}]),
        ),
        StubEndpoint::raw(
            StatusCode::OK,
            serde_json::json!([{"company":"Company A","carModel":"Car model A","location":"Location A"}]),
        ),
    )
    .await;

    let expected = TravelDetails {
        flights: vec![flight],
        hotels: vec![hotel],
        rental_cars: vec![rental_car],
    };

    let sequential = service.fetch(FetchMode::Sequential).await.unwrap();
    let concurrent = service.fetch(FetchMode::Concurrent).await.unwrap();

    assert_eq!(sequential, expected);
    assert_eq!(concurrent, expected);
}

// 2. 順次と同時で結果が一致し、要素順も保持される
#[tokio::test]
async fn test_sequential_and_concurrent_are_equivalent() {
    let (_provider, service) = start_provider(
        StubEndpoint::ok(&hotels()),
        StubEndpoint::ok(&flights()).with_delay(Duration::from_millis(30)),
        StubEndpoint::ok(&rental_cars()),
    )
    .await;

    let sequential = service.fetch_sequential(service.endpoints()).await.unwrap();
    let concurrent = service.fetch_concurrent(service.endpoints()).await.unwrap();

    assert_eq!(sequential, concurrent);
    assert_eq!(concurrent.hotels, hotels());
    assert_eq!(concurrent.flights, flights());
    assert_eq!(concurrent.rental_cars, rental_cars());
}

// 3. 完了順に関係なく各ソースは対応するフィールドに入る
#[tokio::test]
async fn test_concurrent_slot_mapping_ignores_completion_order() {
    let (_provider, service) = start_provider(
        StubEndpoint::ok(&hotels()).with_delay(Duration::from_millis(150)),
        StubEndpoint::ok(&flights()).with_delay(Duration::from_millis(75)),
        StubEndpoint::ok(&rental_cars()),
    )
    .await;

    let details = service.fetch(FetchMode::Concurrent).await.unwrap();

    assert_eq!(details.hotels, hotels());
    assert_eq!(details.flights, flights());
    assert_eq!(details.rental_cars, rental_cars());
}

// 4. 所要時間: 順次は合計以上、同時は最大以上かつ合計未満
#[tokio::test]
async fn test_latency_sequential_sum_concurrent_max() {
    let (_provider, service) = start_provider(
        StubEndpoint::ok(&hotels()).with_delay(Duration::from_millis(100)),
        StubEndpoint::ok(&flights()).with_delay(Duration::from_millis(150)),
        StubEndpoint::ok(&rental_cars()).with_delay(Duration::from_millis(200)),
    )
    .await;
    let sum = Duration::from_millis(450);
    let max = Duration::from_millis(200);

    let start = Instant::now();
    service.fetch(FetchMode::Sequential).await.unwrap();
    let sequential_elapsed = start.elapsed();

    let start = Instant::now();
    service.fetch(FetchMode::Concurrent).await.unwrap();
    let concurrent_elapsed = start.elapsed();

    assert!(
        sequential_elapsed >= sum,
        "sequential took {:?}",
        sequential_elapsed
    );
    assert!(
        concurrent_elapsed >= max,
        "concurrent took {:?}",
        concurrent_elapsed
    );
    assert!(
        concurrent_elapsed < sum,
        "concurrent took {:?}",
        concurrent_elapsed
    );
}

// 5. flights が 500 → 両モードとも flights を示すエラー
#[tokio::test]
async fn test_flights_server_error_fails_both_modes() {
    let (_provider, service) = start_provider(
        StubEndpoint::ok(&hotels()),
        StubEndpoint::status(StatusCode::INTERNAL_SERVER_ERROR),
        StubEndpoint::ok(&rental_cars()),
    )
    .await;

    for mode in [FetchMode::Sequential, FetchMode::Concurrent] {
        let result = service.fetch(mode).await;

        match result {
            Err(FetchError::HttpStatus { endpoint, status }) => {
                assert_eq!(endpoint, Source::Flights);
                assert_eq!(status, 500);
            }
            other => panic!("{} fetch: expected HTTP status error, got {:?}", mode, other),
        }
    }
}

// 6. 同時取得の失敗は遅いソースを待たずに返る
#[tokio::test]
async fn test_concurrent_failure_does_not_wait_for_slow_sources() {
    let (_provider, service) = start_provider(
        StubEndpoint::ok(&hotels()).with_delay(Duration::from_secs(5)),
        StubEndpoint::status(StatusCode::INTERNAL_SERVER_ERROR),
        StubEndpoint::ok(&rental_cars()).with_delay(Duration::from_secs(5)),
    )
    .await;

    let start = Instant::now();
    let result = service.fetch(FetchMode::Concurrent).await;

    assert!(matches!(result, Err(ref e) if e.endpoint() == Source::Flights));
    assert!(start.elapsed() < Duration::from_secs(2));
}

// 7. 空配列は空のフィールドになる（エラーではない）
#[tokio::test]
async fn test_empty_source_yields_empty_field() {
    let (_provider, service) = start_provider(
        StubEndpoint::ok(&hotels()),
        StubEndpoint::ok(&flights()),
        StubEndpoint::empty(),
    )
    .await;

    for mode in [FetchMode::Sequential, FetchMode::Concurrent] {
        let details = service.fetch(mode).await.unwrap();

        assert_eq!(details.hotels.len(), 3);
        assert_eq!(details.flights.len(), 3);
        assert!(details.rental_cars.is_empty());
    }
}

// 8. 形の合わないレスポンス → デコードエラー
#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (_provider, service) = start_provider(
        StubEndpoint::raw(StatusCode::OK, serde_json::json!({ "hotels": "not a list" })),
        StubEndpoint::ok(&flights()),
        StubEndpoint::ok(&rental_cars()),
    )
    .await;

    for mode in [FetchMode::Sequential, FetchMode::Concurrent] {
        let result = service.fetch(mode).await;

        match result {
            Err(FetchError::Decode { endpoint, .. }) => assert_eq!(endpoint, Source::Hotels),
            other => panic!("{} fetch: expected decode error, got {:?}", mode, other),
        }
    }
}

// 9. 順次取得は最初の失敗で中断し、後続は呼ばれない
#[tokio::test]
async fn test_sequential_stops_at_first_failure() {
    let (_provider, service) = start_provider(
        StubEndpoint::status(StatusCode::SERVICE_UNAVAILABLE),
        StubEndpoint::ok(&flights()).with_delay(Duration::from_secs(5)),
        StubEndpoint::ok(&rental_cars()).with_delay(Duration::from_secs(5)),
    )
    .await;

    let start = Instant::now();
    let result = service.fetch(FetchMode::Sequential).await;

    assert!(matches!(
        result,
        Err(FetchError::HttpStatus {
            endpoint: Source::Hotels,
            status: 503
        })
    ));
    assert!(start.elapsed() < Duration::from_secs(2));
}

// 10. プロバイダ停止時 → 接続エラー
#[tokio::test]
async fn test_unreachable_provider_is_connection_error() {
    let (provider, service) = start_provider(
        StubEndpoint::empty(),
        StubEndpoint::empty(),
        StubEndpoint::empty(),
    )
    .await;
    provider.shutdown().await;

    let result = service.fetch(FetchMode::Concurrent).await;

    assert!(matches!(result, Err(FetchError::Connection { .. })));
}

// 11. 取得ごとにモードと所要時間がログに出る
#[tokio::test]
#[traced_test]
async fn test_elapsed_time_is_logged_for_each_mode() {
    let (_provider, service) = start_provider(
        StubEndpoint::ok(&hotels()),
        StubEndpoint::ok(&flights()),
        StubEndpoint::ok(&rental_cars()),
    )
    .await;

    service.fetch(FetchMode::Sequential).await.unwrap();
    service.fetch(FetchMode::Concurrent).await.unwrap();

    assert!(logs_contain("Fetched travel details"));
    assert!(logs_contain("mode=sequential"));
    assert!(logs_contain("mode=concurrent"));
    assert!(logs_contain("elapsed_ms="));
    assert!(!logs_contain("Failed to fetch travel details"));
}

// 12. 失敗時も所要時間と失敗したエンドポイントが警告ログに出る
#[tokio::test]
#[traced_test]
async fn test_failed_fetch_is_logged_as_warning() {
    let (_provider, service) = start_provider(
        StubEndpoint::ok(&hotels()),
        StubEndpoint::status(StatusCode::INTERNAL_SERVER_ERROR),
        StubEndpoint::ok(&rental_cars()),
    )
    .await;

    let result = service.fetch(FetchMode::Sequential).await;

    assert!(result.is_err());
    assert!(logs_contain("WARN"));
    assert!(logs_contain("Failed to fetch travel details"));
    assert!(logs_contain("mode=sequential"));
    assert!(logs_contain("elapsed_ms="));
    assert!(logs_contain("flights returned HTTP 500"));
    assert!(!logs_contain("Fetched travel details"));
}
