use axum::{
    Json,
    extract::Query,
    http::{StatusCode, Uri},
};
use rstest::rstest;
use serde::Deserialize;
use serde_json::Value;
use slotbook_api::middleware::error_handling::{AppError, map_error};
use slotbook_core::errors::{BookingError, FieldError};

#[rstest]
#[case(BookingError::InvalidDateInput("Date required".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(BookingError::NotFound("Session not found".to_string()), StatusCode::NOT_FOUND)]
#[case(
    BookingError::InvalidForm(vec![FieldError::new("booking_time", "This field is required")]),
    StatusCode::UNPROCESSABLE_ENTITY
)]
#[case(
    BookingError::Internal(Box::new(std::io::Error::other("Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

#[test]
fn test_from_booking_error() {
    let app_error: AppError = BookingError::NotFound("Not found".to_string()).into();

    assert_eq!(app_error.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_from_eyre_report() {
    let app_error: AppError = eyre::eyre!("listener closed").into();

    assert_eq!(app_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(app_error.0.to_string().contains("listener closed"));
}

#[test]
fn test_from_json_rejection() {
    let rejection = Json::<Value>::from_bytes(b"{\"session_type\":").unwrap_err();
    let app_error: AppError = rejection.into();

    assert_eq!(app_error.status(), StatusCode::BAD_REQUEST);
    assert!(matches!(app_error.0, BookingError::Validation(_)));
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct CountQuery {
    count: u32,
}

#[test]
fn test_from_query_rejection() {
    let uri: Uri = "/api/available_times?count=many".parse().unwrap();
    let rejection = Query::<CountQuery>::try_from_uri(&uri).unwrap_err();
    let app_error: AppError = rejection.into();

    assert_eq!(app_error.status(), StatusCode::BAD_REQUEST);
    assert!(matches!(app_error.0, BookingError::Validation(_)));
}
