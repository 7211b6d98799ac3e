use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;
use slotbook_api::handlers::availability::{AvailableTimesResponse, WeeklyAvailabilityResponse};
use slotbook_core::models::availability::DayClass;

use crate::test_utils::test_server;

#[tokio::test]
async fn test_available_times_wednesday() {
    let server = test_server();

    let response = server
        .get("/api/available_times")
        .add_query_param("date", "2024-06-12")
        .await;

    response.assert_status_ok();
    let body: AvailableTimesResponse = response.json();
    assert_eq!(body.classification, DayClass::Weekday);
    assert_eq!(body.timezone, "CST");
    assert_eq!(body.times.len(), 9);
    assert_eq!(body.times[0].value, "17:30");
    assert_eq!(body.times[0].label, "5:30 PM CST");
    assert_eq!(body.times[8].value, "21:30");
    assert_eq!(body.times[8].label, "9:30 PM CST");
}

#[tokio::test]
async fn test_available_times_saturday() {
    let server = test_server();

    let response = server
        .get("/api/available_times")
        .add_query_param("date", "2024-06-15")
        .await;

    response.assert_status_ok();
    let body: AvailableTimesResponse = response.json();
    assert_eq!(body.classification, DayClass::Weekend);
    assert_eq!(body.times.len(), 28);
    assert_eq!(body.times[0].label, "8:00 AM CST");
    assert!(body.times.iter().all(|t| t.value != "22:00"));
}

#[tokio::test]
async fn test_available_times_requires_date() {
    let server = test_server();

    let response = server.get("/api/available_times").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Date required");
}

#[rstest]
#[case("not-a-date", "Invalid date format")]
#[case("2024-02-30", "Invalid date format")]
#[case("", "Date required")]
#[case("   ", "Date required")]
#[tokio::test]
async fn test_available_times_rejects_invalid_date(#[case] date: &str, #[case] expected: &str) {
    let server = test_server();

    let response = server
        .get("/api/available_times")
        .add_query_param("date", date)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with(expected));
}

#[tokio::test]
async fn test_weekly_availability() {
    let server = test_server();

    let response = server.get("/api/availability").await;

    response.assert_status_ok();
    let body: WeeklyAvailabilityResponse = response.json();
    assert_eq!(body.days.len(), 7);
    assert_eq!(body.days[2].day, "Wednesday");
    assert_eq!(body.days[2].start_hour, 17.5);
    assert_eq!(body.days[6].day, "Sunday");
    assert_eq!(body.days[6].slot_count, 28);
}

#[tokio::test]
async fn test_health_and_version() {
    let server = test_server();

    let health: Value = server.get("/health").await.json();
    assert_eq!(health["status"], "ok");

    let version: Value = server.get("/version").await.json();
    assert_eq!(version["name"], "slotbook-api");
}
