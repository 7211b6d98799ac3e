use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use slotbook_core::models::{availability::DayClass, booking::ValidatedBooking};

use crate::test_utils::test_server;

#[tokio::test]
async fn test_validate_booking_ok() {
    let server = test_server();

    let response = server
        .post("/api/bookings/validate")
        .json(&json!({
            "session_type": "deep_dive",
            "booking_date": "2024-06-15",
            "booking_time": "08:00",
            "special_requests": "Clarity on a career move"
        }))
        .await;

    response.assert_status_ok();
    let booking: ValidatedBooking = response.json();
    assert_eq!(booking.session.id, "deep_dive");
    assert_eq!(booking.classification, DayClass::Weekend);
    assert_eq!(booking.slot.value(), "08:00");
    assert_eq!(booking.window.closes_at.to_string(), "2024-06-15 08:45:00");
}

#[tokio::test]
async fn test_validate_booking_collects_field_errors() {
    let server = test_server();

    let response = server
        .post("/api/bookings/validate")
        .json(&json!({
            "session_type": "",
            "booking_date": "2024-06-01",
            "booking_time": "18:00"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid form: 2 field(s) rejected");
    assert_eq!(
        body["fields"],
        json!([
            { "field": "session_type", "message": "This field is required" },
            { "field": "booking_date", "message": "Please select a future date." }
        ])
    );
}

#[tokio::test]
async fn test_validate_booking_rejects_end_boundary() {
    let server = test_server();

    let response = server
        .post("/api/bookings/validate")
        .json(&json!({
            "session_type": "quick_guidance",
            "booking_date": "2024-06-12",
            "booking_time": "22:00"
        }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["fields"][0]["field"], "booking_time");
    assert_eq!(body["fields"][0]["message"], "Please select an available time.");
}

#[tokio::test]
async fn test_validate_booking_mistyped_body_is_json_error() {
    let server = test_server();

    let response = server
        .post("/api/bookings/validate")
        .json(&json!({ "session_type": 5 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error:"));
}

#[tokio::test]
async fn test_validate_booking_malformed_body_is_json_error() {
    let server = test_server();

    let response = server
        .post("/api/bookings/validate")
        .text("{\"session_type\":")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}
