use axum::{http::StatusCode, response::IntoResponse};
use fittrack::error::AppError;

#[test]
fn test_not_found_returns_404() {
    let error = AppError::NotFound("Resource not found".to_string());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_username_taken_returns_409() {
    let response = AppError::UsernameTaken.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn test_internal_returns_500() {
    let error = AppError::Internal("Something went wrong".to_string());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_database_error_returns_500() {
    let error = AppError::Database(rusqlite::Error::QueryReturnedNoRows);
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_password_hash_returns_500() {
    let error = AppError::PasswordHash;
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
