use axum::http::StatusCode;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;
use slotbook_api::handlers::session::{RoomAccessResponse, SessionListResponse, SessionResponse};
use slotbook_core::models::booking::RoomAccess;

use crate::test_utils::{test_server, test_server_at};

#[tokio::test]
async fn test_list_sessions() {
    let server = test_server();

    let response = server.get("/api/sessions").await;

    response.assert_status_ok();
    let body: SessionListResponse = response.json();
    let ids: Vec<&str> = body.sessions.iter().map(|s| s.session.id.as_str()).collect();
    assert_eq!(ids, vec!["quick_guidance", "deep_dive", "intensive_healing"]);
    assert_eq!(body.sessions[0].price_display, "$17");
}

#[tokio::test]
async fn test_get_session() {
    let server = test_server();

    let response = server.get("/api/sessions/intensive_healing").await;

    response.assert_status_ok();
    let body: SessionResponse = response.json();
    assert_eq!(body.session.name, "Intensive Healing");
    assert_eq!(body.session.duration_minutes, 60);
    assert_eq!(body.session.price, 29700);
    assert_eq!(body.selection_message, "Selected: Intensive Healing Session - $297");
    assert_eq!(body.choice_label, "Intensive Healing - $297 (60 minutes)");
}

#[tokio::test]
async fn test_get_unknown_session() {
    let server = test_server();

    let response = server.get("/api/sessions/tarot").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Resource not found: Session type \"tarot\" not found");
}

async fn room(hour: u32, minute: u32) -> RoomAccessResponse {
    let now = NaiveDate::from_ymd_opt(2024, 6, 12)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap();
    let server = test_server_at(now);

    let response = server
        .get("/api/sessions/room")
        .add_query_param("session_type", "deep_dive")
        .add_query_param("date", "2024-06-12")
        .add_query_param("time", "17:30")
        .await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_room_not_yet_open() {
    let body = room(17, 0).await;

    assert!(matches!(body.access, RoomAccess::NotYetOpen { .. }));
    assert_eq!(body.message, "Session room opens at 5:15 PM CST");
}

#[tokio::test]
async fn test_room_open_and_ended() {
    assert_eq!(room(17, 15).await.access, RoomAccess::Open);
    assert_eq!(room(18, 15).await.access, RoomAccess::Open);

    let ended = room(18, 16).await;
    assert_eq!(ended.access, RoomAccess::Ended);
    assert_eq!(ended.message, "Session time has ended.");
}

#[tokio::test]
async fn test_room_rejects_unbookable_time() {
    let server = test_server();

    let response = server
        .get("/api/sessions/room")
        .add_query_param("session_type", "deep_dive")
        .add_query_param("date", "2024-06-12")
        .add_query_param("time", "09:00")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[rstest]
#[case(&[("session_type", "deep_dive"), ("time", "17:30")], "Date required")]
#[case(
    &[("date", "2024-06-12"), ("time", "17:30")],
    "Validation error: Session type required"
)]
#[case(
    &[("session_type", "deep_dive"), ("date", "2024-06-12")],
    "Validation error: Time required"
)]
#[tokio::test]
async fn test_room_reports_missing_parameter(
    #[case] params: &[(&str, &str)],
    #[case] expected: &str,
) {
    let server = test_server();

    let mut request = server.get("/api/sessions/room");
    for (key, value) in params {
        request = request.add_query_param(key, value);
    }
    let response = request.await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], expected);
}

#[tokio::test]
async fn test_room_rejects_bad_date_with_json_error() {
    let server = test_server();

    let response = server
        .get("/api/sessions/room")
        .add_query_param("session_type", "deep_dive")
        .add_query_param("date", "12/06/2024")
        .add_query_param("time", "17:30")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid date format"));
}
