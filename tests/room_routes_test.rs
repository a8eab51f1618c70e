mod common;

use actix_web::test;
use serde_json::Value;

use common::{FakeUpstream, TestApp};

fn ids(body: &Value) -> Vec<u64> {
    body["rooms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|room| room["id"].as_u64().unwrap())
        .collect()
}

#[actix_web::test]
async fn test_health_endpoint() {
    let test_app = TestApp::new(FakeUpstream::default());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["offline_fallback"], true);
}

#[actix_web::test]
async fn test_listing_uses_live_rooms() {
    let test_app = TestApp::new(FakeUpstream::default());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/rooms").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["degraded"], false);
    assert_eq!(ids(&body), vec![2, 4]);
    assert_eq!(body["count"], 2);
}

#[actix_web::test]
async fn test_listing_filters_sample_rooms_by_location() {
    let test_app = TestApp::new(FakeUpstream {
        rooms_down: true,
        ..Default::default()
    });
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/rooms?location=H%C3%A0%20N%E1%BB%99i")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["degraded"], true);
    assert_eq!(ids(&body), vec![1, 6]);
    for room in body["rooms"].as_array().unwrap() {
        assert_eq!(room["location"], "Hà Nội");
    }
}

#[actix_web::test]
async fn test_listing_combines_price_amenities_and_sort() {
    let test_app = TestApp::new(FakeUpstream {
        rooms_down: true,
        ..Default::default()
    });
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/rooms?minPrice=500000&maxPrice=3000000&amenities=wifi&amenities=bathtub&sort=price-desc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(ids(&body), vec![3, 5, 1]);
    assert_eq!(body["criteria"]["amenities"], serde_json::json!(["wifi", "bathtub"]));
}

#[actix_web::test]
async fn test_listing_without_fallback_reports_bad_gateway() {
    let test_app = TestApp::new(FakeUpstream {
        rooms_down: true,
        ..Default::default()
    })
    .without_fallback();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/rooms").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("room catalog"));
}

#[actix_web::test]
async fn test_featured_rooms() {
    let test_app = TestApp::new(FakeUpstream {
        rooms_down: true,
        ..Default::default()
    });
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/rooms/featured").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(ids(&body), vec![3, 6, 1]);
}

#[actix_web::test]
async fn test_room_detail_with_reviews() {
    let test_app = TestApp::new(FakeUpstream::default());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/rooms/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["room"]["name"], "Phòng Deluxe");
    assert_eq!(body["room"]["maxGuests"], 2);
    assert_eq!(body["amenityLabels"][0], "Wi-Fi");
    assert_eq!(body["amenityLabels"][1], "Bữa sáng");
    assert_eq!(body["reviews"].as_array().unwrap().len(), 2);
    assert_eq!(body["quote"]["total"], 1_380_000);
    assert_eq!(body["degraded"], false);
}

#[actix_web::test]
async fn test_room_detail_not_found() {
    let test_app = TestApp::new(FakeUpstream::default());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/rooms/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_room_detail_degrades_when_reviews_down() {
    let test_app = TestApp::new(FakeUpstream {
        reviews_down: true,
        ..Default::default()
    })
    .without_fallback();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/rooms/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["room"]["id"], 2);
    assert!(body["reviews"].as_array().unwrap().is_empty());
    assert_eq!(body["degraded"], true);
}

#[actix_web::test]
async fn test_quote_for_three_nights() {
    let test_app = TestApp::new(FakeUpstream::default());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/rooms/1/quote?checkIn=2024-05-01&checkOut=2024-05-04&guests=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["quote"]["nights"], 3);
    assert_eq!(body["quote"]["subtotal"], 3_600_000);
    assert_eq!(body["quote"]["tax"], 360_000);
    assert_eq!(body["quote"]["serviceFee"], 180_000);
    assert_eq!(body["quote"]["total"], 4_140_000);
}

#[actix_web::test]
async fn test_quote_inverted_dates_bill_one_night() {
    let test_app = TestApp::new(FakeUpstream::default());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/rooms/1/quote?checkIn=2024-05-04&checkOut=2024-05-01")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["quote"]["nights"], 1);
    assert_eq!(body["quote"]["total"], 1_380_000);
}

#[actix_web::test]
async fn test_quote_rejects_too_many_guests() {
    let test_app = TestApp::new(FakeUpstream::default());
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/rooms/1/quote?guests=5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
